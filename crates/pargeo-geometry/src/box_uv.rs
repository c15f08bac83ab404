//! Axis-aligned boxes in UV parameter space.

use pargeo_core::{GeomError, Result};
use serde::{Deserialize, Serialize};

use crate::interval::Interval;
use crate::param::ParamUV;

/// Named positions on a [`BoxUV`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationUV {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
    LeftCenter,
    RightCenter,
    Center,
}

/// An axis-aligned box in UV space: one interval per parametric axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxUV {
    interval_u: Interval,
    interval_v: Interval,
}

impl BoxUV {
    pub fn new(interval_u: Interval, interval_v: Interval) -> Self {
        Self {
            interval_u,
            interval_v,
        }
    }

    /// The empty box.
    pub fn empty() -> Self {
        Self::new(Interval::empty(), Interval::empty())
    }

    /// A degenerate box containing a single parameter.
    pub fn from_param(param: ParamUV) -> Self {
        Self::new(
            Interval::from_sorted(param.u, param.u),
            Interval::from_sorted(param.v, param.v),
        )
    }

    /// The smallest box containing both parameters.
    pub fn from_two_params(first: ParamUV, second: ParamUV) -> Self {
        Self::new(
            Interval::from_sorted(first.u.min(second.u), first.u.max(second.u)),
            Interval::from_sorted(first.v.min(second.v), first.v.max(second.v)),
        )
    }

    pub fn interval_u(&self) -> Interval {
        self.interval_u
    }

    pub fn interval_v(&self) -> Interval {
        self.interval_v
    }

    /// A box is empty when either axis is empty.
    pub fn is_empty(&self) -> bool {
        self.interval_u.is_empty() || self.interval_v.is_empty()
    }

    /// Evaluate the box at the given per-axis proportions in `[0, 1]`.
    pub fn proportion(&self, prop_u: f64, prop_v: f64) -> Result<ParamUV> {
        Ok(ParamUV::new(
            self.interval_u.relative_val(prop_u)?,
            self.interval_v.relative_val(prop_v)?,
        ))
    }

    /// The parameter at the middle of the box.
    pub fn center(&self) -> Result<ParamUV> {
        self.proportion(0.5, 0.5)
    }

    /// Whether either axis is negative within its tolerance.
    pub fn is_negative(&self, tolerance_u: f64, tolerance_v: f64) -> bool {
        if self.is_empty() {
            return false;
        }
        self.interval_u.is_negative(tolerance_u) || self.interval_v.is_negative(tolerance_v)
    }

    /// The union of two boxes, axis by axis.
    pub fn unite(first: BoxUV, second: BoxUV) -> BoxUV {
        if first.is_empty() {
            return second;
        }
        if second.is_empty() {
            return first;
        }
        BoxUV::new(
            Interval::unite(first.interval_u, second.interval_u),
            Interval::unite(first.interval_v, second.interval_v),
        )
    }

    /// The intersection of two boxes, axis by axis.
    pub fn intersect(first: BoxUV, second: BoxUV, tolerance_u: f64, tolerance_v: f64) -> BoxUV {
        if first.is_empty() || second.is_empty() {
            return BoxUV::empty();
        }
        let overlap = BoxUV::new(
            Interval::intersect(first.interval_u, second.interval_u, tolerance_u),
            Interval::intersect(first.interval_v, second.interval_v, tolerance_v),
        );
        if overlap.is_negative(tolerance_u, tolerance_v) {
            return BoxUV::empty();
        }
        overlap
    }

    /// Whether the box contains a parameter, using the default tolerance on
    /// both axes.
    pub fn contains(&self, param: ParamUV) -> Result<bool> {
        if self.is_empty() {
            return Err(GeomError::EmptyObject("BoxUV::contains".into()));
        }
        Ok(self.interval_u.contains_default(param.u) && self.interval_v.contains_default(param.v))
    }

    /// A new box with both axes widened by `delta`.
    pub fn inflate(&self, delta: f64) -> Result<BoxUV> {
        self.inflate_uv(delta, delta)
    }

    /// A new box with the u and v axes widened by separate deltas.
    pub fn inflate_uv(&self, delta_u: f64, delta_v: f64) -> Result<BoxUV> {
        if self.is_empty() {
            return Err(GeomError::EmptyObject("BoxUV::inflate".into()));
        }
        Ok(BoxUV::new(
            self.interval_u.inflate(delta_u)?,
            self.interval_v.inflate(delta_v)?,
        ))
    }

    /// The parameter at a named position on the box.
    pub fn corner(&self, location: LocationUV) -> Result<ParamUV> {
        use LocationUV::*;

        let u = match location {
            TopLeft | BottomLeft | LeftCenter => self.interval_u.relative_val(0.0)?,
            TopRight | BottomRight | RightCenter => self.interval_u.relative_val(1.0)?,
            _ => self.interval_u.relative_val(0.5)?,
        };
        let v = match location {
            BottomLeft | BottomCenter | BottomRight => self.interval_v.relative_val(0.0)?,
            TopLeft | TopCenter | TopRight => self.interval_v.relative_val(1.0)?,
            _ => self.interval_v.relative_val(0.5)?,
        };
        Ok(ParamUV::new(u, v))
    }
}
