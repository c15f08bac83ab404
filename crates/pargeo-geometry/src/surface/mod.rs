//! Surface traits and implementations.

mod plane;

pub use plane::{Plane, PlaneEvaluation};

use pargeo_core::Result;
use pargeo_math::{Point3, Transform, Vector3};

use crate::param::{ParamUV, Parameterization};

/// Trait for parametric surfaces in 3D space.
///
/// A surface is immutable once constructed, so a shared reference may be
/// evaluated from many threads; each evaluation produces its own
/// [`SurfaceEvaluation`] borrowing the surface.
pub trait Surface: Send + Sync {
    /// Domain description of the u- and v-axes, in that order.
    fn parameterization(&self) -> (Parameterization, Parameterization);

    /// Test whether a parameter is within the parametric range of the
    /// surface.
    ///
    /// Kinds without domain-membership testing fail with an
    /// unsupported-operation error rather than guessing.
    fn contains_param(&self, param: ParamUV) -> Result<bool>;

    /// Test whether the point is contained by the surface, either within it
    /// or on its boundary.
    fn contains_point(&self, point: Point3) -> Result<bool>;

    /// Evaluate the surface at an explicit parameter.
    fn evaluate(&self, parameter: ParamUV) -> Box<dyn SurfaceEvaluation + '_>;

    /// Project a point onto the surface and return the evaluation at the
    /// closest parameter.
    fn project_point(&self, point: Point3) -> Box<dyn SurfaceEvaluation + '_>;

    /// A new surface of the same kind with its defining geometry
    /// transformed; the original is untouched.
    fn transformed_copy(&self, transform: &Transform) -> Result<Box<dyn Surface>>;
}

/// Geometric quantities obtained by sampling a surface at one parameter.
///
/// Each quantity is computed at most once per evaluation instance; repeated
/// reads return the already-computed value.
pub trait SurfaceEvaluation {
    /// The parameter the evaluation is based upon.
    fn parameter(&self) -> ParamUV;

    /// The point on the surface.
    fn position(&self) -> Point3;

    /// The unit normal to the surface.
    fn normal(&self) -> Vector3;

    /// First derivative with respect to u.
    fn u_derivative(&self) -> Vector3;

    /// First derivative with respect to v.
    fn v_derivative(&self) -> Vector3;

    /// Second derivative with respect to u.
    fn uu_derivative(&self) -> Vector3;

    /// Second derivative with respect to u and v.
    fn uv_derivative(&self) -> Vector3;

    /// Second derivative with respect to v.
    fn vv_derivative(&self) -> Vector3;

    /// The minimum principal curvature.
    fn min_curvature(&self) -> f64;

    /// The direction along which the minimum curvature is measured.
    fn min_curvature_direction(&self) -> Vector3;

    /// The maximum principal curvature.
    fn max_curvature(&self) -> f64;

    /// The direction along which the maximum curvature is measured.
    fn max_curvature_direction(&self) -> Vector3;
}
