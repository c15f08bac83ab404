//! Affine 4x4 transform applied to points, vectors, and unit directions.

use serde::{Deserialize, Serialize};

use crate::{dir, DMat4, Point3, Vector3};
use pargeo_core::Result;

/// An affine transform (rotation, translation, scale, shear).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    matrix: DMat4,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            matrix: DMat4::IDENTITY,
        }
    }

    pub fn from_translation(t: Vector3) -> Self {
        Self {
            matrix: DMat4::from_translation(t),
        }
    }

    pub fn from_mat4(m: DMat4) -> Self {
        Self { matrix: m }
    }

    pub fn to_mat4(&self) -> DMat4 {
        self.matrix
    }

    /// Apply the transform to a point (translation included).
    pub fn transform_point(&self, p: Point3) -> Point3 {
        self.matrix.transform_point3(p)
    }

    /// Apply the transform to a vector (translation ignored).
    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        self.matrix.transform_vector3(v)
    }

    /// Apply the transform to a unit direction and renormalize.
    ///
    /// Fails if the linear part collapses the direction (rank-deficient
    /// matrices, e.g. a projection).
    pub fn transform_direction(&self, d: Vector3) -> Result<Vector3> {
        dir::unit(self.transform_vector(d))
    }

    /// Compose: apply `self` first, then `other`.
    pub fn then(&self, other: &Transform) -> Transform {
        Self {
            matrix: other.matrix * self.matrix,
        }
    }

    pub fn inverse(&self) -> Option<Transform> {
        if self.matrix.determinant().abs() < 1e-15 {
            None
        } else {
            Some(Self {
                matrix: self.matrix.inverse(),
            })
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
