//! Extruded region solids on the globe.
//!
//! A ring is triangulated once in lon/lat space. The base cap uses that
//! triangulation on the ring projected at `radius`; the top cap reuses it with
//! the index order reversed on the ring lifted by `height`. Side walls join each
//! base/top vertex pair to the next one around the ring, two triangles per quad.
//!
//! Vertex layout: `[base_0 .. base_n, top_0 .. top_n]`.

use glam::{DVec3, Vec3};
use globe_geo::{Ring, project};

use crate::normals::compute_vertex_normals;
use crate::triangulate::{EarcutTriangulator, Triangulator};
use crate::MeshError;

/// How the top ring is placed relative to the base ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ExtrusionPolicy {
    /// Each point is re-projected at `radius + height`, pushed out along its own radius.
    #[default]
    Radial,
    /// The whole base ring is translated by `height` along the normalized
    /// direction of its centroid. Falls back to [`ExtrusionPolicy::Radial`]
    /// when the centroid sits at the globe center.
    CentroidNormal,
}

/// Global parameters of a region extrusion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtrusionParams {
    /// Radius of the base ring.
    pub radius: f64,
    /// Extrusion height above the base ring.
    pub height: f64,
    /// Top ring placement.
    pub policy: ExtrusionPolicy,
}

impl Default for ExtrusionParams {
    fn default() -> Self {
        Self {
            radius: 3.4,
            height: 0.1,
            policy: ExtrusionPolicy::Radial,
        }
    }
}

/// A closed triangulated solid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SolidMesh {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Per-vertex normals accumulated from the triangle faces.
    pub normals: Vec<Vec3>,
    /// Triangle indices, three per triangle.
    pub indices: Vec<u32>,
}

impl SolidMesh {
    /// Creates an empty mesh.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// Builds extruded solids from rings with fixed parameters.
pub struct ExtrusionMeshBuilder<T: Triangulator = EarcutTriangulator> {
    params: ExtrusionParams,
    triangulator: T,
}

impl ExtrusionMeshBuilder<EarcutTriangulator> {
    /// Creates a builder using the earcut triangulator.
    pub fn new(params: ExtrusionParams) -> Self {
        Self::with_triangulator(params, EarcutTriangulator)
    }
}

impl<T: Triangulator> ExtrusionMeshBuilder<T> {
    /// Creates a builder with a custom triangulation backend.
    pub fn with_triangulator(params: ExtrusionParams, triangulator: T) -> Self {
        Self {
            params,
            triangulator,
        }
    }

    /// The parameters this builder extrudes with.
    pub fn params(&self) -> &ExtrusionParams {
        &self.params
    }

    /// Build a solid, substituting an empty mesh on failure.
    ///
    /// Failures are logged; one bad ring never stops the rest of a dataset.
    pub fn build(&self, ring: &Ring) -> SolidMesh {
        match self.try_build(ring) {
            Ok(mesh) => mesh,
            Err(err @ MeshError::MalformedRing { .. }) => {
                tracing::debug!(%err, "degenerate ring produces an empty solid");
                SolidMesh::empty()
            }
            Err(err) => {
                tracing::warn!(%err, "region solid skipped");
                SolidMesh::empty()
            }
        }
    }

    /// Build a solid, reporting why a ring could not be extruded.
    ///
    /// A ring that triangulates to zero triangles is not an error and yields
    /// `Ok` with an empty mesh.
    pub fn try_build(&self, ring: &Ring) -> Result<SolidMesh, MeshError> {
        let open = ring.open_coords();
        let n = open.len();
        if n < 3 {
            return Err(MeshError::MalformedRing { points: n });
        }
        let n32 = u32::try_from(n)
            .ok()
            .filter(|v| v.checked_mul(2).is_some())
            .ok_or(MeshError::IndexOverflow { points: n })?;

        let cap = self.triangulator.triangulate(&ring.flat_2d())?;
        if cap.is_empty() || cap.len() % 3 != 0 || cap.iter().any(|&i| i >= n) {
            return Ok(SolidMesh::empty());
        }

        let base: Vec<DVec3> = open.iter().map(|&c| project(c, self.params.radius)).collect();
        let top = self.top_ring(ring, &base);

        let positions: Vec<Vec3> = base.iter().chain(top.iter()).map(|p| p.as_vec3()).collect();

        let mut indices = Vec::with_capacity(cap.len() * 2 + n * 6);
        // Base cap in triangulator order.
        indices.extend(cap.iter().map(|&i| i as u32));
        // Top cap, reversed so it faces the other way.
        indices.extend(cap.iter().rev().map(|&i| n32 + i as u32));
        // Side walls.
        for i in 0..n32 {
            let next = (i + 1) % n32;
            let i0 = i;
            let i1 = next;
            let i2 = n32 + i;
            let i3 = n32 + next;
            indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }

        let normals = compute_vertex_normals(&positions, &indices);
        Ok(SolidMesh {
            positions,
            normals,
            indices,
        })
    }

    fn top_ring(&self, ring: &Ring, base: &[DVec3]) -> Vec<DVec3> {
        let ExtrusionParams {
            radius,
            height,
            policy,
        } = self.params;

        let radial = || {
            ring.open_coords()
                .iter()
                .map(|&c| project(c, radius + height))
                .collect()
        };

        match policy {
            ExtrusionPolicy::Radial => radial(),
            ExtrusionPolicy::CentroidNormal => {
                let centroid = base.iter().copied().sum::<DVec3>() / base.len() as f64;
                match centroid.try_normalize() {
                    Some(dir) => {
                        let offset = dir * height;
                        base.iter().map(|&p| p + offset).collect()
                    }
                    None => radial(),
                }
            }
        }
    }
}
