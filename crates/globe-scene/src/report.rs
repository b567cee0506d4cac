//! Build statistics.

use std::fmt;

use globe_borders::ClassificationReport;

/// What one full build produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Features replayed.
    pub features: usize,
    /// Outer rings extruded.
    pub outer_rings: usize,
    /// Hole rings extruded and registered as internal borders.
    pub hole_rings: usize,
    /// Rings whose solid came out empty.
    pub empty_meshes: usize,
    /// Triangles across all region solids.
    pub triangles: usize,
    /// Distinct canonical keys in the border index.
    pub keys: usize,
    /// Outcome of the classification pass.
    pub classification: ClassificationReport,
}

impl BuildReport {
    /// Total rings, outer and hole.
    pub fn rings(&self) -> usize {
        self.outer_rings + self.hole_rings
    }
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} features, {} rings ({} holes, {} empty), {} triangles, {} keys, {} shared of {} candidate groups ({} wrap-rejected)",
            self.features,
            self.rings(),
            self.hole_rings,
            self.empty_meshes,
            self.triangles,
            self.keys,
            self.classification.shared_groups,
            self.classification.candidate_groups,
            self.classification.wrap_rejected_groups,
        )
    }
}
