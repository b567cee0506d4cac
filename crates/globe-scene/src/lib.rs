//! The globe: extruded region solids, border index, and shells kept consistent
//! with the global parameters.
//!
//! [`Globe`] owns the parsed features and everything derived from them. Any
//! parameter change discards all derived state and replays the whole pipeline
//! (extrusion, border registration, one classification pass) before returning,
//! so readers never observe stale `shared` flags or orphaned index entries.

mod error;
mod globe;
mod material;
mod params;
mod picking;
mod region;
mod report;

pub use error::RebuildError;
pub use globe::{BuildState, Globe};
pub use material::{MaterialPreset, MaterialProperty, RegionMaterial};
pub use params::{GlobeParams, MAX_TESSELLATION_SEGMENTS};
pub use picking::{PickHit, Ray, ray_triangle_intersect};
pub use region::RegionMesh;
pub use report::BuildReport;
