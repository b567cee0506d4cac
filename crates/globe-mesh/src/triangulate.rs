//! 2D ring triangulation.
//!
//! The triangulator is a seam: the extrusion builder only needs index triples
//! over a flat `[x0, y0, x1, y1, ...]` point list, so any ear-clipping or
//! constrained triangulation can stand in for the default earcut backend.

use crate::MeshError;

/// Triangulates a simple polygon given as a flat 2D point list.
pub trait Triangulator {
    /// Returns triangle vertex indices (three per triangle) into `flat`.
    ///
    /// An empty result is valid for degenerate input (collinear or repeated
    /// points). An `Err` means the primitive itself could not run.
    fn triangulate(&self, flat: &[f64]) -> Result<Vec<usize>, MeshError>;
}

/// Ear-clipping triangulation backed by `earcutr`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EarcutTriangulator;

impl Triangulator for EarcutTriangulator {
    fn triangulate(&self, flat: &[f64]) -> Result<Vec<usize>, MeshError> {
        if flat.len() < 6 {
            return Ok(Vec::new());
        }
        let no_holes: &[usize] = &[];
        earcutr::earcut(flat, no_holes, 2)
            .map_err(|e| MeshError::TriangulationUnavailable(format!("{e:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_gives_two_triangles() {
        let flat = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
        let indices = EarcutTriangulator.triangulate(&flat).unwrap();
        assert_eq!(indices.len(), 6);
        assert!(indices.iter().all(|&i| i < 4));
    }

    #[test]
    fn test_convex_ring_fan_count() {
        // Regular hexagon: N - 2 triangles.
        let flat: Vec<f64> = (0..6)
            .flat_map(|i| {
                let a = i as f64 * std::f64::consts::TAU / 6.0;
                [a.cos(), a.sin()]
            })
            .collect();
        let indices = EarcutTriangulator.triangulate(&flat).unwrap();
        assert_eq!(indices.len(), 4 * 3);
    }

    #[test]
    fn test_concave_ring() {
        // L-shape with 6 vertices.
        let flat = [0.0, 0.0, 2.0, 0.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.0, 2.0];
        let indices = EarcutTriangulator.triangulate(&flat).unwrap();
        assert_eq!(indices.len(), 4 * 3);
    }

    #[test]
    fn test_collinear_ring_emits_nothing() {
        let flat = [0.0, 0.0, 1.0, 1.0, 2.0, 2.0];
        let indices = EarcutTriangulator.triangulate(&flat).unwrap();
        assert!(indices.is_empty());
    }

    #[test]
    fn test_too_few_points_emits_nothing() {
        let indices = EarcutTriangulator.triangulate(&[0.0, 0.0, 1.0, 1.0]).unwrap();
        assert!(indices.is_empty());
    }
}
