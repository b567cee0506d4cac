//! Interleaved vertex format for GPU upload.

use crate::SolidMesh;

/// Position + normal vertex, 24 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    /// Position in globe space.
    pub position: [f32; 3],
    /// Unit normal (zero for unreferenced vertices).
    pub normal: [f32; 3],
}

static_assertions::assert_eq_size!(GpuVertex, [u8; 24]);

/// Interleave a solid's positions and normals into a GPU vertex buffer.
pub fn interleave(mesh: &SolidMesh) -> Vec<GpuVertex> {
    mesh.positions
        .iter()
        .zip(&mesh.normals)
        .map(|(p, n)| GpuVertex {
            position: p.to_array(),
            normal: n.to_array(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExtrusionMeshBuilder, ExtrusionParams};
    use globe_geo::Ring;

    #[test]
    fn test_interleave_matches_mesh() {
        let ring = Ring::from_pairs([[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]);
        let mesh = ExtrusionMeshBuilder::new(ExtrusionParams::default()).build(&ring);
        let vertices = interleave(&mesh);
        assert_eq!(vertices.len(), mesh.vertex_count());
        assert_eq!(vertices[3].position, mesh.positions[3].to_array());

        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), vertices.len() * 24);
    }

    #[test]
    fn test_empty_mesh_interleaves_to_nothing() {
        assert!(interleave(&SolidMesh::empty()).is_empty());
    }
}
