//! Static cube geometry.
//!
//! The cube is 12 independent triangles with duplicated corners — no index
//! buffer. Positions and texture coordinates live in two parallel arrays
//! (and two separate GL buffers) related by vertex index.

mod cube;
mod mesh;

pub use cube::{TEX_COORDS, VERTEX_COUNT, VERTEX_POSITIONS};
pub use mesh::CubeMesh;
