//! CPU-side mesh types and generators for flat-colored 2D shapes.
//!
//! This module provides GPU-agnostic mesh data structures:
//!
//! - [`Vertex`] - Interleaved position + color vertex (fixed 6-component stride)
//! - [`ShapeMesh`] - CPU-side mesh data (typed vertices, optional u32 indices)
//! - Generators for the primitive shapes (quad, triangle, circle, checkerboard)
//!
//! A [`ShapeMesh`] is flattened to raw component data only at the GPU-upload
//! boundary, via [`ShapeMesh::vertex_components`].

mod data;
pub mod generators;
mod layout;

pub use data::ShapeMesh;
pub use layout::{
    Vertex, VertexAttribute, VertexAttributeSemantic, COLOR_OFFSET, POSITION_OFFSET,
    VERTEX_COMPONENTS, VERTEX_STRIDE,
};
