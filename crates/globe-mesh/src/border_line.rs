//! Border polylines lifted slightly off the globe surface.

use glam::Vec3;
use globe_geo::{Ring, project};

/// Which side of a region a border line belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BorderKind {
    /// Outline of an outer ring, owned by the region mesh.
    External,
    /// Outline of a hole ring, registered in the border index.
    Internal,
}

/// A closed polyline drawn as a line loop.
#[derive(Clone, Debug, PartialEq)]
pub struct BorderLine {
    /// External or internal border.
    pub kind: BorderKind,
    /// Points in ring order, at `radius + offset` from the globe center.
    pub points: Vec<Vec3>,
}

impl BorderLine {
    /// Number of points in the loop.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the loop has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Build a border loop for `ring`, offset radially outward by `offset`.
///
/// Every source point is kept, including a repeated closing point.
pub fn build_border_line(ring: &Ring, radius: f64, offset: f64, kind: BorderKind) -> BorderLine {
    let lifted = radius + offset;
    let points = ring
        .coords()
        .iter()
        .map(|&c| project(c, lifted).as_vec3())
        .collect();
    BorderLine { kind, points }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_offset_from_surface() {
        let ring = Ring::from_pairs([[0.0, 0.0], [5.0, 0.0], [5.0, 5.0], [0.0, 0.0]]);
        let line = build_border_line(&ring, 3.4, 0.05, BorderKind::Internal);
        assert_eq!(line.len(), 4);
        assert_eq!(line.kind, BorderKind::Internal);
        for p in &line.points {
            assert!((p.length() - 3.45).abs() < 1e-5);
        }
    }

    #[test]
    fn test_empty_ring_gives_empty_line() {
        let line = build_border_line(&Ring::default(), 1.0, 0.1, BorderKind::External);
        assert!(line.is_empty());
    }
}
