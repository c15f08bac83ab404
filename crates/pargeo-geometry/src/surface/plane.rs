//! Planar surface.

use std::cell::OnceCell;

use pargeo_core::{GeomError, Result};
use pargeo_math::{dir, Point3, Transform, Vector3};

use super::{Surface, SurfaceEvaluation};
use crate::interval::Interval;
use crate::param::{ParamForm, ParamType, ParamUV, Parameterization};

/// An unbounded flat surface parameterized by `origin + u*dir_x + v*dir_y`.
///
/// Stores its x-direction (`reference`) and z-direction (`axis`); the
/// y-direction is always recomputed as `dir_z x dir_x`, so the frame stays
/// orthonormal by construction.
#[derive(Debug, Clone)]
pub struct Plane {
    origin: Point3,
    reference: Vector3,
    axis: Vector3,
}

impl Plane {
    /// Create a plane from an origin and two perpendicular directions.
    ///
    /// Both directions are normalized. Fails if either is degenerate or if
    /// they are not perpendicular within the angular tolerance.
    pub fn new(origin: Point3, reference: Vector3, axis: Vector3) -> Result<Self> {
        let reference = dir::unit(reference)?;
        let axis = dir::unit(axis)?;
        if !dir::perpendicular(reference, axis) {
            return Err(GeomError::InvalidGeometry(
                "Plane reference (dir_x) and axis (dir_z) must be perpendicular".into(),
            ));
        }
        Ok(Self {
            origin,
            reference,
            axis,
        })
    }

    /// Plane through `origin` with the default frame: reference +X, axis +Z.
    pub fn from_origin(origin: Point3) -> Self {
        Self {
            origin,
            reference: Vector3::X,
            axis: Vector3::Z,
        }
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// X-direction of the plane frame.
    pub fn dir_x(&self) -> Vector3 {
        self.reference
    }

    /// Y-direction of the plane frame, derived from the stored axes.
    pub fn dir_y(&self) -> Vector3 {
        self.axis.cross(self.reference)
    }

    /// Z-direction (normal) of the plane frame.
    pub fn dir_z(&self) -> Vector3 {
        self.axis
    }
}

impl PartialEq for Plane {
    fn eq(&self, other: &Self) -> bool {
        dir::points_equal(self.origin, other.origin)
            && dir::vectors_equal(self.reference, other.reference)
            && dir::vectors_equal(self.axis, other.axis)
    }
}

impl Surface for Plane {
    fn parameterization(&self) -> (Parameterization, Parameterization) {
        let u = Parameterization::new(ParamForm::Open, ParamType::Linear, Interval::open());
        let v = Parameterization::new(ParamForm::Open, ParamType::Linear, Interval::open());
        (u, v)
    }

    fn contains_param(&self, _param: ParamUV) -> Result<bool> {
        Err(GeomError::Unsupported(
            "Plane::contains_param is not implemented".into(),
        ))
    }

    fn contains_point(&self, _point: Point3) -> Result<bool> {
        Err(GeomError::Unsupported(
            "Plane::contains_point is not implemented".into(),
        ))
    }

    fn evaluate(&self, parameter: ParamUV) -> Box<dyn SurfaceEvaluation + '_> {
        Box::new(PlaneEvaluation::new(self, parameter))
    }

    fn project_point(&self, point: Point3) -> Box<dyn SurfaceEvaluation + '_> {
        let origin_to_point = point - self.origin;
        let u = origin_to_point.dot(self.dir_x());
        let v = origin_to_point.dot(self.dir_y());
        self.evaluate(ParamUV::new(u, v))
    }

    fn transformed_copy(&self, transform: &Transform) -> Result<Box<dyn Surface>> {
        let plane = Plane::new(
            transform.transform_point(self.origin),
            transform.transform_direction(self.reference)?,
            transform.transform_direction(self.axis)?,
        )?;
        Ok(Box::new(plane))
    }
}

/// Evaluation of a [`Plane`] at one parameter.
///
/// The plane must outlive the evaluation; the position is memoized on first
/// access, the remaining quantities read straight off the plane frame.
#[derive(Debug)]
pub struct PlaneEvaluation<'a> {
    plane: &'a Plane,
    parameter: ParamUV,
    position: OnceCell<Point3>,
}

impl<'a> PlaneEvaluation<'a> {
    pub fn new(plane: &'a Plane, parameter: ParamUV) -> Self {
        Self {
            plane,
            parameter,
            position: OnceCell::new(),
        }
    }

    /// The plane being evaluated.
    pub fn plane(&self) -> &Plane {
        self.plane
    }
}

impl SurfaceEvaluation for PlaneEvaluation<'_> {
    fn parameter(&self) -> ParamUV {
        self.parameter
    }

    fn position(&self) -> Point3 {
        *self.position.get_or_init(|| {
            self.plane.origin()
                + self.parameter.u * self.plane.dir_x()
                + self.parameter.v * self.plane.dir_y()
        })
    }

    fn normal(&self) -> Vector3 {
        self.plane.dir_z()
    }

    fn u_derivative(&self) -> Vector3 {
        self.plane.dir_z()
    }

    fn v_derivative(&self) -> Vector3 {
        self.plane.dir_y()
    }

    fn uu_derivative(&self) -> Vector3 {
        Vector3::ZERO
    }

    fn uv_derivative(&self) -> Vector3 {
        Vector3::ZERO
    }

    fn vv_derivative(&self) -> Vector3 {
        Vector3::ZERO
    }

    fn min_curvature(&self) -> f64 {
        0.0
    }

    fn min_curvature_direction(&self) -> Vector3 {
        self.plane.dir_x()
    }

    fn max_curvature(&self) -> f64 {
        0.0
    }

    fn max_curvature_direction(&self) -> Vector3 {
        self.plane.dir_y()
    }
}
