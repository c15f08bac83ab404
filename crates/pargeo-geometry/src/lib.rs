//! pargeo geometry: intervals, UV parameters, and parametric surfaces.

pub mod box_uv;
pub mod interval;
pub mod param;
pub mod sample;
pub mod surface;

pub use box_uv::{BoxUV, LocationUV};
pub use interval::Interval;
pub use param::{ParamForm, ParamType, ParamUV, Parameterization};
pub use sample::{sample_grid, SurfaceSample};
pub use surface::{Plane, PlaneEvaluation, Surface, SurfaceEvaluation};
