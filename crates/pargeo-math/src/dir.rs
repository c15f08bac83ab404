//! Unit-direction helpers and tolerance-based vector comparisons.

use pargeo_core::{Accuracy, GeomError, Result};

use crate::{Point3, Vector3};

/// Normalize a vector into a unit direction.
///
/// Fails if the input is too short to carry a direction.
pub fn unit(v: Vector3) -> Result<Vector3> {
    let len = v.length();
    if Accuracy::length_is_zero(len) {
        return Err(GeomError::InvalidGeometry(format!(
            "Cannot normalize zero-length vector {:?}",
            v
        )));
    }
    Ok(v / len)
}

/// Whether two unit directions are perpendicular within the angular tolerance.
pub fn perpendicular(a: Vector3, b: Vector3) -> bool {
    // For unit inputs the dot product is the cosine of the enclosed angle,
    // which near PI/2 equals the angular deviation to first order.
    Accuracy::angle_is_zero(a.dot(b))
}

/// Whether two unit directions are parallel (or anti-parallel) within the
/// angular tolerance.
pub fn parallel(a: Vector3, b: Vector3) -> bool {
    Accuracy::angle_is_zero(a.cross(b).length())
}

/// Component-wise tolerance-based vector equality.
pub fn vectors_equal(a: Vector3, b: Vector3) -> bool {
    Accuracy::equal_doubles(a.x, b.x)
        && Accuracy::equal_doubles(a.y, b.y)
        && Accuracy::equal_doubles(a.z, b.z)
}

/// Component-wise tolerance-based point equality.
pub fn points_equal(a: Point3, b: Point3) -> bool {
    vectors_equal(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_unit_normalizes() {
        let d = unit(DVec3::new(3.0, 0.0, 4.0)).unwrap();
        assert!((d.length() - 1.0).abs() < 1e-12);
        assert!((d - DVec3::new(0.6, 0.0, 0.8)).length() < 1e-12);
    }

    #[test]
    fn test_unit_rejects_zero_vector() {
        assert!(unit(DVec3::ZERO).is_err());
        assert!(unit(DVec3::new(1e-10, 0.0, 0.0)).is_err());
    }

    #[test]
    fn test_perpendicular() {
        assert!(perpendicular(DVec3::X, DVec3::Z));
        assert!(perpendicular(DVec3::X, -DVec3::Y));
        assert!(!perpendicular(DVec3::X, DVec3::X));
        assert!(!perpendicular(
            DVec3::X,
            DVec3::new(1.0, 1.0, 0.0).normalize()
        ));
    }

    #[test]
    fn test_parallel() {
        assert!(parallel(DVec3::X, DVec3::X));
        assert!(parallel(DVec3::X, -DVec3::X));
        assert!(!parallel(DVec3::X, DVec3::Y));
    }

    #[test]
    fn test_vectors_equal_absorbs_rounding() {
        let a = DVec3::new(1.0, 2.0, 3.0);
        let b = a + DVec3::splat(1e-15);
        assert!(vectors_equal(a, b));
        assert!(!vectors_equal(a, a + DVec3::new(1e-6, 0.0, 0.0)));
    }
}
