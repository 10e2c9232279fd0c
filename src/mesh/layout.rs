//! Vertex format for flat-colored 2D shapes.
//!
//! Every mesh in this crate uses one interleaved buffer with a single
//! vertex format: 3 floats of position followed by 3 floats of color.
//! The byte offsets live here as named constants so the GPU-upload layer
//! never hard-codes stride arithmetic.

use bytemuck::{Pod, Zeroable};

/// Number of f32 components per vertex (3 position + 3 color).
pub const VERTEX_COMPONENTS: usize = 6;

/// Byte distance between the starts of consecutive vertices.
pub const VERTEX_STRIDE: usize = std::mem::size_of::<Vertex>();

/// Byte offset of the position attribute within a vertex.
pub const POSITION_OFFSET: usize = 0;

/// Byte offset of the color attribute within a vertex.
pub const COLOR_OFFSET: usize = 3 * std::mem::size_of::<f32>();

/// Interleaved vertex: position then color, both float3.
///
/// `position[2]` (z) is conventionally 0 for 2D shapes. Color channels
/// are rgb in [0, 1].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position (x, y, z).
    pub position: [f32; 3],
    /// Color (r, g, b).
    pub color: [f32; 3],
}

impl Vertex {
    /// Create a 2D vertex at (x, y, 0) with the given color.
    pub fn new(x: f32, y: f32, color: [f32; 3]) -> Self {
        Self {
            position: [x, y, 0.0],
            color,
        }
    }

    /// Attribute descriptions, in shader-input order.
    pub const ATTRIBUTES: [VertexAttribute; 2] = [
        VertexAttribute {
            semantic: VertexAttributeSemantic::Position,
            components: 3,
            offset: POSITION_OFFSET,
        },
        VertexAttribute {
            semantic: VertexAttributeSemantic::Color,
            components: 3,
            offset: COLOR_OFFSET,
        },
    ];
}

/// Semantic meaning of a vertex attribute.
///
/// Semantics are used to match mesh attributes with shader inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeSemantic {
    /// Vertex position (float3).
    Position,
    /// Vertex color (float3).
    Color,
}

/// Describes one attribute within the interleaved vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    /// What the attribute means.
    pub semantic: VertexAttributeSemantic,
    /// Number of f32 components.
    pub components: usize,
    /// Byte offset from the start of the vertex.
    pub offset: usize,
}
