//! Per-vertex normals from an indexed triangle list.

use glam::Vec3;

/// Accumulate area-weighted face normals onto each vertex, then normalize.
///
/// Vertices not referenced by any non-degenerate triangle get a zero normal.
pub fn compute_vertex_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let (Some(&pa), Some(&pb), Some(&pc)) =
            (positions.get(a), positions.get(b), positions.get(c))
        else {
            continue;
        };
        // Cross product length is twice the area, so larger faces weigh more.
        let face = (pc - pb).cross(pa - pb);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }

    for n in &mut normals {
        *n = n.normalize_or_zero();
    }
    normals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_triangle_normal() {
        let positions = [Vec3::ZERO, Vec3::X, Vec3::Y];
        let normals = compute_vertex_normals(&positions, &[0, 1, 2]);
        for n in normals {
            assert!((n - Vec3::Z).length() < 1e-6, "got {n:?}");
        }
    }

    #[test]
    fn test_unreferenced_vertex_is_zero() {
        let positions = [Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::ONE];
        let normals = compute_vertex_normals(&positions, &[0, 1, 2]);
        assert_eq!(normals[3], Vec3::ZERO);
    }

    #[test]
    fn test_shared_vertex_averages() {
        // Two triangles folded 90 degrees along the X axis.
        let positions = [Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z];
        let normals = compute_vertex_normals(&positions, &[0, 1, 2, 0, 3, 1]);
        let expected = Vec3::new(0.0, 1.0, 1.0).normalize();
        assert!((normals[0] - expected).length() < 1e-6, "got {:?}", normals[0]);
        assert!((normals[0].length() - 1.0).abs() < 1e-6);
    }
}
