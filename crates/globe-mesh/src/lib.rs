//! Mesh generation for the globe: extruded region solids, border polylines,
//! sphere shells, and GPU vertex packing.

mod border_line;
mod error;
mod extrusion;
mod gpu;
mod normals;
mod shell;
mod triangulate;

pub use border_line::{BorderKind, BorderLine, build_border_line};
pub use error::MeshError;
pub use extrusion::{ExtrusionMeshBuilder, ExtrusionParams, ExtrusionPolicy, SolidMesh};
pub use gpu::{GpuVertex, interleave};
pub use normals::compute_vertex_normals;
pub use shell::{GlobeShells, ShellMesh, ShellParams, generate_uv_sphere};
pub use triangulate::{EarcutTriangulator, Triangulator};
