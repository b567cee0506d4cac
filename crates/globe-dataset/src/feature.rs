//! Normalized features consumed by the globe.

use std::sync::Arc;

use globe_geo::Ring;

/// Name given to features whose properties carry no name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Role of a ring within its polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RingRole {
    /// First ring of a polygon: the region outline.
    Outer,
    /// Any later ring: an interior exclusion such as an enclave.
    Hole,
}

impl RingRole {
    /// Role of the ring at `ring_index` within its polygon.
    pub fn from_index(ring_index: usize) -> Self {
        if ring_index == 0 { Self::Outer } else { Self::Hole }
    }

    /// Returns `true` for [`RingRole::Outer`].
    pub fn is_outer(self) -> bool {
        self == Self::Outer
    }
}

/// One ring of a feature with its role.
///
/// The ring is immutable once parsed and shared with every border segment
/// built from it.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureRing {
    /// The ring as parsed.
    pub ring: Arc<Ring>,
    /// Outer or hole.
    pub role: RingRole,
}

/// A named region and all of its rings, polygons flattened in source order.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    /// Region name, [`UNKNOWN_NAME`] when absent.
    pub name: String,
    /// Every ring of every polygon.
    pub rings: Vec<FeatureRing>,
}

impl Feature {
    /// Creates a feature from polygons, each an outer ring followed by holes.
    pub fn from_polygons<I>(name: impl Into<String>, polygons: I) -> Self
    where
        I: IntoIterator<Item = Vec<Ring>>,
    {
        let rings = polygons
            .into_iter()
            .flat_map(|polygon| {
                polygon
                    .into_iter()
                    .enumerate()
                    .map(|(i, ring)| FeatureRing {
                        ring: Arc::new(ring),
                        role: RingRole::from_index(i),
                    })
            })
            .collect();
        Self {
            name: name.into(),
            rings,
        }
    }

    /// Number of rings with the given role.
    pub fn count_role(&self, role: RingRole) -> usize {
        self.rings.iter().filter(|r| r.role == role).count()
    }
}
