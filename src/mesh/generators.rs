//! Mesh generators for flat-colored 2D shapes.
//!
//! Every generator is pure and total: identical arguments produce
//! bit-identical [`ShapeMesh`] values, and degenerate arguments (zero
//! grid dimensions, a fan step that does not divide 360) produce empty
//! or gapped meshes rather than errors.

use crate::math::Vec2;

use super::data::ShapeMesh;
use super::layout::Vertex;

/// Generate an axis-aligned rectangle with a vertical color gradient.
///
/// Corners are emitted in the order (x0,y1), (x1,y1), (x1,y0), (x0,y0);
/// the y1 pair takes `bottom_color` and the y0 pair `top_color`, with
/// indices `[0, 1, 2, 2, 3, 0]`. Whether y0 is actually above y1 is the
/// caller's intent; nothing is validated.
pub fn quad(
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    top_color: [f32; 3],
    bottom_color: [f32; 3],
) -> ShapeMesh {
    let vertices = vec![
        Vertex::new(x0, y1, bottom_color),
        Vertex::new(x1, y1, bottom_color),
        Vertex::new(x1, y0, top_color),
        Vertex::new(x0, y0, top_color),
    ];
    let indices: Vec<u32> = vec![0, 1, 2, 2, 3, 0];

    ShapeMesh::from_vertices(vertices)
        .with_indices(indices)
        .with_label("quad")
}

/// Generate a full-width horizontal band from y0 down to yf.
///
/// Spans x in [-1, 1] with `top_color` at y0 and `bottom_color` at yf.
/// Used for sky and ground strips.
pub fn band(y0: f32, yf: f32, top_color: [f32; 3], bottom_color: [f32; 3]) -> ShapeMesh {
    quad(-1.0, y0, 1.0, yf, top_color, bottom_color).with_label("band")
}

/// Generate a single triangle.
///
/// The base vertices `p0` and `p1` share `base_color`; the apex `p2`
/// takes `apex_color`.
pub fn triangle(
    p0: Vec2,
    p1: Vec2,
    p2: Vec2,
    apex_color: [f32; 3],
    base_color: [f32; 3],
) -> ShapeMesh {
    let vertices = vec![
        Vertex::new(p0.x, p0.y, base_color),
        Vertex::new(p1.x, p1.y, base_color),
        Vertex::new(p2.x, p2.y, apex_color),
    ];

    ShapeMesh::from_vertices(vertices)
        .with_indices(vec![0, 1, 2])
        .with_label("triangle")
}

/// Generate a disc as a triangle fan, one triangle per `step_degrees`.
///
/// For each angle 0, step, 2*step, ... below 360 the fan emits
/// (center, rim at angle, rim at angle + step), all with `color`, as a
/// direct triangle list with no index buffer. When `step_degrees`
/// divides 360 the disc closes exactly with `360 / step_degrees`
/// triangles; a non-divisor step leaves the last segment gapped or
/// overlapping (caller contract). A zero step yields an empty mesh.
pub fn circle(center: Vec2, radius: f32, color: [f32; 3], step_degrees: u32) -> ShapeMesh {
    let mut vertices = Vec::new();
    if step_degrees > 0 {
        vertices.reserve(3 * 360_usize.div_ceil(step_degrees as usize));
        for angle in (0..360u32).step_by(step_degrees as usize) {
            let a0 = (angle as f32).to_radians();
            let a1 = ((angle + step_degrees) as f32).to_radians();
            vertices.push(Vertex::new(center.x, center.y, color));
            vertices.push(Vertex::new(
                center.x + a0.cos() * radius,
                center.y + a0.sin() * radius,
                color,
            ));
            vertices.push(Vertex::new(
                center.x + a1.cos() * radius,
                center.y + a1.sin() * radius,
                color,
            ));
        }
    }

    ShapeMesh::from_vertices(vertices).with_label("circle")
}

/// Generate a checkerboard filling the normalized [-1,1] x [-1,1] square.
///
/// Cell (0,0) sits at the bottom-left corner and takes `color_a`; colors
/// alternate by the parity of col + row. Each cell contributes two
/// independent triangles (6 vertices) to one combined non-indexed
/// buffer, so cells stay independent with no shared index buffer.
/// Zero `columns` or `rows` yields an empty mesh.
pub fn checkerboard(
    columns: u32,
    rows: u32,
    color_a: [f32; 3],
    color_b: [f32; 3],
) -> ShapeMesh {
    let mut vertices = Vec::with_capacity(6 * (columns * rows) as usize);
    let cell_w = 2.0 / columns as f32;
    let cell_h = 2.0 / rows as f32;

    for row in 0..rows {
        for col in 0..columns {
            let color = if (col + row) % 2 == 0 { color_a } else { color_b };
            let x0 = -1.0 + col as f32 * cell_w;
            let y0 = -1.0 + row as f32 * cell_h;
            let x1 = x0 + cell_w;
            let y1 = y0 + cell_h;

            vertices.push(Vertex::new(x0, y0, color));
            vertices.push(Vertex::new(x1, y0, color));
            vertices.push(Vertex::new(x1, y1, color));

            vertices.push(Vertex::new(x1, y1, color));
            vertices.push(Vertex::new(x0, y1, color));
            vertices.push(Vertex::new(x0, y0, color));
        }
    }

    ShapeMesh::from_vertices(vertices).with_label("checkerboard")
}
