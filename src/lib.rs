//! # flatmesh
//!
//! CPU-side mesh generation for flat-colored 2D primitives.
//!
//! The crate computes interleaved (position, color) vertex buffers and
//! optional triangle index buffers for a small set of 2D shapes: quads,
//! triangles, circles (triangle fans), horizontal gradient bands and
//! checkerboard grids. Every generator is a pure function; the resulting
//! [`mesh::ShapeMesh`] is handed to whatever GPU-upload layer the caller
//! uses and this crate never touches GPU state.

pub mod controller;
pub mod math;
pub mod mesh;
pub mod scene;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log library startup. Optional; generators work without it.
pub fn init() {
    log::info!("flatmesh v{} initialized", VERSION);
}
