//! UV-sphere shells around the globe (ocean and atmosphere).
//!
//! Unlike the region solids these are the only geometry the tessellation
//! segment count affects.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

/// A UV sphere mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShellMesh {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Outward unit normals.
    pub normals: Vec<Vec3>,
    /// Equirectangular UV coordinates.
    pub uvs: Vec<[f32; 2]>,
    /// Triangle indices.
    pub indices: Vec<u32>,
}

impl ShellMesh {
    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Generate a UV sphere with `width_segments` around and `height_segments`
/// pole to pole.
///
/// Segment counts are clamped to at least 3 around and 2 pole to pole. The
/// degenerate triangles touching each pole are omitted, so the triangle count
/// is `2 · width · (height − 1)`.
pub fn generate_uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> ShellMesh {
    let w = width_segments.max(3);
    let h = height_segments.max(2);

    let mut positions = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
    let mut normals = Vec::with_capacity(positions.capacity());
    let mut uvs = Vec::with_capacity(positions.capacity());

    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        // Shift pole UVs half a segment so pole triangles sample the middle of their span.
        let u_offset = if iy == 0 {
            0.5 / w as f32
        } else if iy == h {
            -0.5 / w as f32
        } else {
            0.0
        };

        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            let (sin_t, cos_t) = (v * PI).sin_cos();
            let (sin_p, cos_p) = (u * TAU).sin_cos();

            let normal = Vec3::new(-cos_p * sin_t, cos_t, sin_p * sin_t);
            positions.push(normal * radius);
            normals.push(normal);
            uvs.push([u + u_offset, 1.0 - v]);
        }
    }

    let row = w + 1;
    let mut indices = Vec::with_capacity((w * (h - 1) * 6) as usize);
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;

            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    ShellMesh {
        positions,
        normals,
        uvs,
        indices,
    }
}

/// Shell placement relative to the globe radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShellParams {
    /// Globe radius.
    pub radius: f64,
    /// Width and height segment count.
    pub segments: u32,
    /// Ocean sits this far below the globe radius.
    pub ocean_inset: f64,
    /// Atmosphere extends this far beyond the globe radius.
    pub atmosphere_padding: f64,
}

/// The ocean and atmosphere shells of one globe build.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlobeShells {
    /// Ocean sphere just under the region solids.
    pub ocean: ShellMesh,
    /// Atmosphere sphere enclosing the globe.
    pub atmosphere: ShellMesh,
}

impl GlobeShells {
    /// Generate both shells.
    pub fn generate(params: &ShellParams) -> Self {
        let ocean_radius = (params.radius - params.ocean_inset) as f32;
        let atmosphere_radius = (params.radius + params.atmosphere_padding) as f32;
        Self {
            ocean: generate_uv_sphere(ocean_radius, params.segments, params.segments),
            atmosphere: generate_uv_sphere(atmosphere_radius, params.segments, params.segments),
        }
    }
}
