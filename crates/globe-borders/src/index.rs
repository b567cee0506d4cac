//! Multimap from canonical key to the border segments sharing it.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use crate::{AntimeridianFilter, BorderId, BorderSegment, CanonicalKey};

/// Which internal borders a viewer should draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum BorderVisibility {
    /// Draw no internal borders.
    Hidden,
    /// Draw every internal border.
    #[default]
    All,
    /// Draw only borders classified as shared.
    SharedOnly,
}

impl BorderVisibility {
    /// Derive the mode from the two display toggles.
    pub fn from_toggles(show_internal: bool, shared_only: bool) -> Self {
        match (show_internal, shared_only) {
            (false, _) => Self::Hidden,
            (true, false) => Self::All,
            (true, true) => Self::SharedOnly,
        }
    }

    fn admits(self, segment: &BorderSegment) -> bool {
        match self {
            Self::Hidden => false,
            Self::All => true,
            Self::SharedOnly => segment.is_shared(),
        }
    }
}

/// Outcome of one classification pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClassificationReport {
    /// Keys with two or more segments.
    pub candidate_groups: usize,
    /// Candidate groups marked shared.
    pub shared_groups: usize,
    /// Candidate groups rejected as global-wrap artifacts.
    pub wrap_rejected_groups: usize,
    /// Segments marked shared across all groups.
    pub shared_segments: usize,
}

/// Every key with the `shared` flags of its segments in registration order.
///
/// Two builds at the same parameters over the same dataset produce equal
/// signatures.
pub type ClassificationSignature = BTreeMap<CanonicalKey, Vec<bool>>;

/// Segments grouped by canonical key, in registration order.
///
/// Identical segments are not deduplicated: every region contributing a border
/// on the same physical line gets its own entry.
#[derive(Debug, Default)]
pub struct BorderIndex {
    segments: Vec<BorderSegment>,
    by_key: FxHashMap<CanonicalKey, Vec<BorderId>>,
}

impl BorderIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment to the list of its key, creating the list if absent.
    pub fn register(&mut self, segment: BorderSegment) -> BorderId {
        let id = BorderId(self.segments.len());
        self.by_key
            .entry(segment.key().clone())
            .or_default()
            .push(id);
        self.segments.push(segment);
        id
    }

    /// Mark every candidate group shared unless its representative ring wraps
    /// the globe.
    ///
    /// The representative is the first segment registered under the key. Runs
    /// over the complete index: call it once after every region is registered.
    /// Flags from an earlier pass are reset first.
    pub fn classify(&mut self, filter: &AntimeridianFilter) -> ClassificationReport {
        let mut report = ClassificationReport::default();
        for segment in &mut self.segments {
            segment.set_shared(false);
        }

        for ids in self.by_key.values() {
            if ids.len() < 2 {
                continue;
            }
            report.candidate_groups += 1;

            let representative = &self.segments[ids[0].index()];
            if filter.is_global_wrap(representative.ring()) {
                tracing::debug!(
                    country = representative.country(),
                    segments = ids.len(),
                    "shared border group rejected as global wrap"
                );
                report.wrap_rejected_groups += 1;
                continue;
            }

            for id in ids {
                self.segments[id.index()].set_shared(true);
            }
            report.shared_groups += 1;
            report.shared_segments += ids.len();
        }

        report
    }

    /// Drop every segment and key.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.by_key.clear();
    }

    /// Number of registered segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if no segment is registered.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of distinct keys.
    pub fn key_count(&self) -> usize {
        self.by_key.len()
    }

    /// Look up a segment.
    pub fn get(&self, id: BorderId) -> Option<&BorderSegment> {
        self.segments.get(id.index())
    }

    /// The `shared` flag of a segment, `None` for an unknown id.
    pub fn is_shared(&self, id: BorderId) -> Option<bool> {
        self.get(id).map(BorderSegment::is_shared)
    }

    /// All segments in registration order with their ids.
    pub fn segments(&self) -> impl Iterator<Item = (BorderId, &BorderSegment)> {
        self.segments
            .iter()
            .enumerate()
            .map(|(i, s)| (BorderId(i), s))
    }

    /// Segment ids registered under `key`, in registration order.
    pub fn group(&self, key: &CanonicalKey) -> &[BorderId] {
        self.by_key.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// All distinct keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &CanonicalKey> {
        self.by_key.keys()
    }

    /// Keys with two or more segments.
    pub fn candidate_keys(&self) -> impl Iterator<Item = &CanonicalKey> {
        self.by_key
            .iter()
            .filter(|(_, ids)| ids.len() >= 2)
            .map(|(key, _)| key)
    }

    /// Segments owned by `country`.
    pub fn segments_for_country<'a>(
        &'a self,
        country: &'a str,
    ) -> impl Iterator<Item = (BorderId, &'a BorderSegment)> + 'a {
        self.segments().filter(move |(_, s)| s.country() == country)
    }

    /// Segments a viewer should draw under `mode`.
    pub fn visible(
        &self,
        mode: BorderVisibility,
    ) -> impl Iterator<Item = (BorderId, &BorderSegment)> {
        self.segments().filter(move |(_, s)| mode.admits(s))
    }

    /// Snapshot of keys and flags for comparing builds.
    pub fn signature(&self) -> ClassificationSignature {
        self.by_key
            .iter()
            .map(|(key, ids)| {
                let flags = ids
                    .iter()
                    .map(|id| self.segments[id.index()].is_shared())
                    .collect();
                (key.clone(), flags)
            })
            .collect()
    }
}
