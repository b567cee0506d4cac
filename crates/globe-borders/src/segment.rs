//! Internal border segments.

use std::sync::Arc;

use globe_geo::Ring;
use globe_mesh::BorderLine;

use crate::CanonicalKey;

/// Stable handle of a segment within one [`crate::BorderIndex`] build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BorderId(pub usize);

impl BorderId {
    /// Position of the segment in registration order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A border polyline of one hole ring, tagged with its owner and key.
///
/// The `shared` flag starts `false` and is only ever changed by
/// [`crate::BorderIndex::classify`].
#[derive(Clone, Debug, PartialEq)]
pub struct BorderSegment {
    country: String,
    ring: Arc<Ring>,
    key: CanonicalKey,
    line: BorderLine,
    shared: bool,
}

impl BorderSegment {
    /// Creates an unclassified segment.
    pub fn new(country: impl Into<String>, ring: Arc<Ring>, key: CanonicalKey, line: BorderLine) -> Self {
        Self {
            country: country.into(),
            ring,
            key,
            line,
            shared: false,
        }
    }

    /// Name of the owning country.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// The source ring, exactly as parsed.
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// The canonical key the segment is indexed under.
    pub fn key(&self) -> &CanonicalKey {
        &self.key
    }

    /// The lifted border polyline.
    pub fn line(&self) -> &BorderLine {
        &self.line
    }

    /// Whether classification found this border shared with another region.
    pub fn is_shared(&self) -> bool {
        self.shared
    }

    pub(crate) fn set_shared(&mut self, shared: bool) {
        self.shared = shared;
    }
}
