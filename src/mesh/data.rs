//! CPU-side mesh data.
//!
//! [`ShapeMesh`] holds typed vertices plus an optional u32 index buffer.
//! Indices, when present, come in triples forming triangles; without them
//! the vertices are consumed as a direct triangle list (every 3 consecutive
//! vertices form one triangle).

use super::layout::{Vertex, VERTEX_COMPONENTS};

/// A CPU-side mesh holding vertex and optional index data.
///
/// This is the GPU-agnostic representation of a shape. It is created by
/// the generators in [`super::generators`] (or assembled by scene code)
/// and then handed by value to whatever uploads it to the GPU. Vertices
/// stay typed until the upload boundary; [`ShapeMesh::vertex_components`]
/// exposes the flat interleaved f32 view.
#[derive(Clone, PartialEq, Default)]
pub struct ShapeMesh {
    vertices: Vec<Vertex>,
    indices: Option<Vec<u32>>,
    label: Option<String>,
}

impl ShapeMesh {
    /// Create an empty, non-indexed mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a non-indexed mesh from a vertex list.
    pub fn from_vertices(vertices: Vec<Vertex>) -> Self {
        Self {
            vertices,
            indices: None,
            label: None,
        }
    }

    /// Set triangle indices (triples into the vertex list).
    pub fn with_indices(mut self, indices: Vec<u32>) -> Self {
        self.indices = Some(indices);
        self
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the vertices.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Get the indices, if this mesh is indexed.
    pub fn indices(&self) -> Option<&[u32]> {
        self.indices.as_deref()
    }

    /// Get the debug label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of indices (0 for non-indexed meshes).
    pub fn index_count(&self) -> usize {
        self.indices.as_ref().map_or(0, Vec::len)
    }

    /// Check if this mesh uses indexed drawing.
    pub fn is_indexed(&self) -> bool {
        self.indices.is_some()
    }

    /// Get the number of triangles this mesh draws.
    pub fn triangle_count(&self) -> usize {
        if let Some(indices) = &self.indices {
            indices.len() / 3
        } else {
            self.vertices.len() / 3
        }
    }

    /// Total f32 component count of the flattened vertex buffer.
    ///
    /// Always a multiple of [`VERTEX_COMPONENTS`].
    pub fn component_count(&self) -> usize {
        self.vertices.len() * VERTEX_COMPONENTS
    }

    /// Flat interleaved view of the vertex data, 6 f32 per vertex.
    ///
    /// This is the GPU-upload boundary; everything before it works with
    /// typed [`Vertex`] values.
    pub fn vertex_components(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Check that every index refers to an existing vertex.
    ///
    /// Trivially true for non-indexed meshes.
    pub fn indices_in_bounds(&self) -> bool {
        let count = self.vertices.len() as u32;
        self.indices
            .as_ref()
            .is_none_or(|indices| indices.iter().all(|&i| i < count))
    }

    /// Append another mesh's geometry to this one.
    ///
    /// Appended indices are rebased past the existing vertices. When an
    /// indexed mesh meets a non-indexed one, the non-indexed side is
    /// promoted to sequential indices so no triangle is lost.
    pub fn append(&mut self, other: &ShapeMesh) {
        let base = self.vertices.len() as u32;
        match (&mut self.indices, other.indices.as_deref()) {
            (Some(dst), Some(src)) => dst.extend(src.iter().map(|i| base + i)),
            (Some(dst), None) => dst.extend(base..base + other.vertices.len() as u32),
            (None, Some(src)) => {
                let mut dst: Vec<u32> = (0..base).collect();
                dst.extend(src.iter().map(|i| base + i));
                self.indices = Some(dst);
            }
            (None, None) => {}
        }
        self.vertices.extend_from_slice(&other.vertices);
    }
}

impl std::fmt::Debug for ShapeMesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeMesh")
            .field("label", &self.label)
            .field("vertex_count", &self.vertices.len())
            .field("index_count", &self.index_count())
            .field("indexed", &self.is_indexed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri(offset: f32) -> ShapeMesh {
        ShapeMesh::from_vertices(vec![
            Vertex::new(offset, 0.0, [1.0, 0.0, 0.0]),
            Vertex::new(offset + 1.0, 0.0, [1.0, 0.0, 0.0]),
            Vertex::new(offset, 1.0, [1.0, 0.0, 0.0]),
        ])
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = ShapeMesh::new();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.component_count(), 0);
        assert!(!mesh.is_indexed());
        assert!(mesh.indices_in_bounds());
    }

    #[test]
    fn test_flatten_layout() {
        let mesh = ShapeMesh::from_vertices(vec![
            Vertex::new(-1.0, 1.0, [0.0, 0.6, 0.8]),
            Vertex::new(1.0, 1.0, [0.7, 1.0, 1.0]),
        ]);
        let flat = mesh.vertex_components();
        assert_eq!(
            flat,
            &[-1.0, 1.0, 0.0, 0.0, 0.6, 0.8, 1.0, 1.0, 0.0, 0.7, 1.0, 1.0]
        );
        assert_eq!(mesh.component_count() % VERTEX_COMPONENTS, 0);
    }

    #[test]
    fn test_indexed_accessors() {
        let mesh = tri(0.0).with_indices(vec![0, 1, 2]).with_label("tri");
        assert!(mesh.is_indexed());
        assert_eq!(mesh.index_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.label(), Some("tri"));
        assert!(mesh.indices_in_bounds());
    }

    #[test]
    fn test_index_bounds_check() {
        let mesh = tri(0.0).with_indices(vec![0, 1, 3]);
        assert!(!mesh.indices_in_bounds());
    }

    #[test]
    fn test_append_non_indexed() {
        let mut mesh = tri(0.0);
        mesh.append(&tri(2.0));
        assert_eq!(mesh.vertex_count(), 6);
        assert!(!mesh.is_indexed());
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_append_rebases_indices() {
        let mut mesh = tri(0.0).with_indices(vec![0, 1, 2]);
        mesh.append(&tri(2.0).with_indices(vec![0, 1, 2]));
        assert_eq!(mesh.indices(), Some(&[0, 1, 2, 3, 4, 5][..]));
        assert!(mesh.indices_in_bounds());
    }

    #[test]
    fn test_append_promotes_to_indexed() {
        let mut mesh = tri(0.0);
        mesh.append(&tri(2.0).with_indices(vec![0, 1, 2]));
        assert_eq!(mesh.indices(), Some(&[0, 1, 2, 3, 4, 5][..]));
        assert_eq!(mesh.triangle_count(), 2);
    }
}
