//! UV parameters and per-axis domain descriptions.

use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::interval::Interval;

/// A coordinate in the 2-D parameter space of a surface.
///
/// Arithmetic combines components pairwise and never fails.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamUV {
    pub u: f64,
    pub v: f64,
}

impl ParamUV {
    pub fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }
}

impl Add for ParamUV {
    type Output = ParamUV;

    fn add(self, rhs: ParamUV) -> ParamUV {
        ParamUV::new(self.u + rhs.u, self.v + rhs.v)
    }
}

impl Sub for ParamUV {
    type Output = ParamUV;

    fn sub(self, rhs: ParamUV) -> ParamUV {
        ParamUV::new(self.u - rhs.u, self.v - rhs.v)
    }
}

impl Mul for ParamUV {
    type Output = ParamUV;

    fn mul(self, rhs: ParamUV) -> ParamUV {
        ParamUV::new(self.u * rhs.u, self.v * rhs.v)
    }
}

impl Div for ParamUV {
    type Output = ParamUV;

    fn div(self, rhs: ParamUV) -> ParamUV {
        ParamUV::new(self.u / rhs.u, self.v / rhs.v)
    }
}

impl From<(f64, f64)> for ParamUV {
    fn from((u, v): (f64, f64)) -> Self {
        Self::new(u, v)
    }
}

impl From<ParamUV> for (f64, f64) {
    fn from(p: ParamUV) -> Self {
        (p.u, p.v)
    }
}

/// Topological form of one parametric axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamForm {
    Open,
    Closed,
    Periodic,
    Other,
}

/// Shape of the parameter mapping along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamType {
    Linear,
    Circular,
    Other,
}

/// Domain description of one parametric axis of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameterization {
    pub form: ParamForm,
    pub kind: ParamType,
    pub interval: Interval,
}

impl Parameterization {
    pub fn new(form: ParamForm, kind: ParamType, interval: Interval) -> Self {
        Self {
            form,
            kind,
            interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_uv_add() {
        assert_eq!(
            ParamUV::new(1.0, 2.0) + ParamUV::new(3.0, 4.0),
            ParamUV::new(4.0, 6.0)
        );
    }

    #[test]
    fn test_param_uv_sub() {
        assert_eq!(
            ParamUV::new(3.0, 4.0) - ParamUV::new(1.0, 2.0),
            ParamUV::new(2.0, 2.0)
        );
    }

    #[test]
    fn test_param_uv_mul() {
        assert_eq!(
            ParamUV::new(2.0, 3.0) * ParamUV::new(4.0, 5.0),
            ParamUV::new(8.0, 15.0)
        );
    }

    #[test]
    fn test_param_uv_div() {
        assert_eq!(
            ParamUV::new(2.0, 4.0) / ParamUV::new(2.0, 2.0),
            ParamUV::new(1.0, 2.0)
        );
    }

    #[test]
    fn test_param_uv_tuple_round_trip() {
        let (u, v): (f64, f64) = ParamUV::new(1.5, -2.5).into();
        assert_eq!((u, v), (1.5, -2.5));
        assert_eq!(ParamUV::from((1.5, -2.5)), ParamUV::new(1.5, -2.5));
    }

    #[test]
    fn test_parameterization_fields() {
        let p = Parameterization::new(ParamForm::Open, ParamType::Linear, Interval::open());
        assert_eq!(p.form, ParamForm::Open);
        assert_eq!(p.kind, ParamType::Linear);
        assert!(p.interval.is_open());
    }
}
