//! Batch evaluation of surfaces over a uniform parameter grid.

use rayon::prelude::*;

use pargeo_core::{GeomError, Result};
use pargeo_math::{Point3, Vector3};

use crate::box_uv::BoxUV;
use crate::param::ParamUV;
use crate::surface::Surface;

/// One evaluated sample of a surface.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceSample {
    pub parameter: ParamUV,
    pub position: Point3,
    pub normal: Vector3,
}

/// Evaluate a surface on a uniform `(u_divs + 1) x (v_divs + 1)` grid over
/// the given UV box.
///
/// Samples are evaluated in parallel. The function is pure and re-entrant,
/// so callers may also invoke it concurrently from their own pool.
///
/// Results are row-major: index `i * (v_divs + 1) + j` holds the sample at
/// `(u_i, v_j)`. Fails on a zero division count and on boxes whose axes are
/// empty or unbounded.
pub fn sample_grid(
    surface: &dyn Surface,
    bounds: &BoxUV,
    u_divs: usize,
    v_divs: usize,
) -> Result<Vec<SurfaceSample>> {
    if u_divs == 0 || v_divs == 0 {
        return Err(GeomError::InvalidGeometry(
            "Grid sampling requires at least one division per axis".into(),
        ));
    }

    let u_count = u_divs + 1;
    let v_count = v_divs + 1;
    let mut params = Vec::with_capacity(u_count * v_count);
    for i in 0..u_count {
        let u = bounds.interval_u().relative_val(i as f64 / u_divs as f64)?;
        for j in 0..v_count {
            let v = bounds.interval_v().relative_val(j as f64 / v_divs as f64)?;
            params.push(ParamUV::new(u, v));
        }
    }

    Ok(params
        .into_par_iter()
        .map(|parameter| {
            let eval = surface.evaluate(parameter);
            SurfaceSample {
                parameter,
                position: eval.position(),
                normal: eval.normal(),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Interval;
    use crate::surface::Plane;
    use pargeo_math::DVec3;

    fn unit_bounds() -> BoxUV {
        BoxUV::new(
            Interval::new(0.0, 1.0).unwrap(),
            Interval::new(0.0, 1.0).unwrap(),
        )
    }

    #[test]
    fn test_grid_size_and_ordering() {
        let plane = Plane::from_origin(DVec3::ZERO);
        let samples = sample_grid(&plane, &unit_bounds(), 2, 4).unwrap();
        assert_eq!(samples.len(), 3 * 5);

        // Row-major: second row starts at u = 0.5, v = 0.
        let s = samples[5];
        assert_eq!(s.parameter, ParamUV::new(0.5, 0.0));
        assert!((s.position - DVec3::new(0.5, 0.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_samples_lie_on_surface() {
        let plane = Plane::new(
            DVec3::new(0.0, 0.0, 2.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::Z,
        )
        .unwrap();
        let samples = sample_grid(&plane, &unit_bounds(), 3, 3).unwrap();
        for s in samples {
            assert!((s.position.z - 2.0).abs() < 1e-12, "Sample off the plane");
            assert!((s.normal - DVec3::Z).length() < 1e-12);
        }
    }

    #[test]
    fn test_zero_divisions_fail() {
        let plane = Plane::from_origin(DVec3::ZERO);
        assert!(sample_grid(&plane, &unit_bounds(), 0, 4).is_err());
    }

    #[test]
    fn test_empty_bounds_fail() {
        let plane = Plane::from_origin(DVec3::ZERO);
        assert!(sample_grid(&plane, &BoxUV::empty(), 2, 2).is_err());
    }

    #[test]
    fn test_unbounded_bounds_fail() {
        let plane = Plane::from_origin(DVec3::ZERO);
        let open = BoxUV::new(Interval::open(), Interval::open());
        assert!(sample_grid(&plane, &open, 2, 2).is_err());
    }
}
