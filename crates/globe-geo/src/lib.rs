//! Geographic primitives: coordinates, polygon rings, and the lon/lat to sphere projection.

mod coordinate;
mod projection;
mod ring;

pub use coordinate::GeoCoordinate;
pub use projection::{project, project_ring, unproject};
pub use ring::{Ring, Winding};
