//! One extruded ring and its render data.

use std::sync::Arc;

use globe_borders::BorderId;
use globe_dataset::RingRole;
use globe_geo::Ring;
use globe_mesh::{BorderLine, GpuVertex, SolidMesh, interleave};

use crate::RegionMaterial;

/// The renderable result of extruding one ring.
///
/// Outer rings carry their external border line. Hole rings carry the id of
/// their internal border segment in the globe's border index instead.
#[derive(Clone, Debug)]
pub struct RegionMesh {
    /// Owning country.
    pub country: String,
    /// Outer or hole.
    pub role: RingRole,
    /// Source ring, shared with the cached dataset.
    pub ring: Arc<Ring>,
    /// Extruded solid, empty if the ring was degenerate.
    pub solid: SolidMesh,
    /// External border of an outer ring.
    pub external_border: Option<BorderLine>,
    /// Internal border segment of a hole ring.
    pub internal_border: Option<BorderId>,
    /// Surface parameters.
    pub material: RegionMaterial,
}

impl RegionMesh {
    /// Vertex buffer contents for the solid.
    pub fn interleaved(&self) -> Vec<GpuVertex> {
        interleave(&self.solid)
    }
}
