//! Prebuilt demo scenes assembled from the primitive generators.
//!
//! Each function deterministically builds the CPU-side geometry for one
//! of the demo programs; the caller uploads the returned meshes and
//! issues one draw call per mesh (or one for a merged mesh).

use crate::math::Vec2;
use crate::mesh::generators::{band, checkerboard, circle, triangle};
use crate::mesh::ShapeMesh;

const SKY_TOP: [f32; 3] = [0.7, 1.0, 1.0];
const SKY_BOTTOM: [f32; 3] = [0.0, 0.6, 0.8];
const GRASS_TOP: [f32; 3] = [0.0, 1.0, 0.0];
const GRASS_BOTTOM: [f32; 3] = [0.0, 0.6, 0.0];
const MOUNTAIN_PEAK: [f32; 3] = [1.0, 1.0, 1.0];
const MOUNTAIN_BASE: [f32; 3] = [0.0, 0.7, 0.0];
const TENT_TOP: [f32; 3] = [1.0, 1.0, 0.0];
const TENT_BASE: [f32; 3] = [1.0, 0.0, 0.0];

const BOARD_LIGHT: [f32; 3] = [1.0, 1.0, 1.0];
const BOARD_DARK: [f32; 3] = [0.0, 0.0, 0.0];
const OPPONENT_COLOR: [f32; 3] = [0.0, 1.0, 0.0];
const PLAYER_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

/// Disc radius of one checkers piece, in normalized coordinates.
pub const PIECE_RADIUS: f32 = 0.1;
/// Fan step used for the piece discs, in degrees.
pub const PIECE_STEP_DEGREES: u32 = 10;

/// Build the landscape scene: sky, grass, a mountain and a tent.
///
/// Shapes are returned back to front, ready to be drawn in order.
pub fn landscape() -> Vec<ShapeMesh> {
    vec![
        band(1.0, -0.5, SKY_TOP, SKY_BOTTOM).with_label("sky"),
        band(-0.5, -1.0, GRASS_TOP, GRASS_BOTTOM).with_label("grass"),
        triangle(
            Vec2::new(-0.5, -0.5),
            Vec2::new(0.5, -0.5),
            Vec2::new(0.0, 0.5),
            MOUNTAIN_PEAK,
            MOUNTAIN_BASE,
        )
        .with_label("mountain"),
        triangle(
            Vec2::new(-0.8, -0.8),
            Vec2::new(-0.4, -0.8),
            Vec2::new(-0.6, -0.4),
            TENT_TOP,
            TENT_BASE,
        )
        .with_label("tent"),
    ]
}

/// Build the 8x8 checkers board.
///
/// The bottom-left cell is light, so the top-left cell comes out dark.
pub fn checkers_board() -> ShapeMesh {
    checkerboard(8, 8, BOARD_LIGHT, BOARD_DARK).with_label("checkers board")
}

/// Build all 32 checkers piece markers as one merged buffer.
///
/// Two opponent (green) rows along the top of the board, then two player
/// (red) rows along the bottom; 8 discs per row, spaced 0.25 apart
/// starting at x = -0.875.
pub fn checkers_pieces() -> ShapeMesh {
    let mut pieces = ShapeMesh::new();
    for y in [0.875, 0.625] {
        append_piece_row(&mut pieces, y, OPPONENT_COLOR);
    }
    for y in [-0.875, -0.625] {
        append_piece_row(&mut pieces, y, PLAYER_COLOR);
    }
    pieces.with_label("checkers pieces")
}

fn append_piece_row(pieces: &mut ShapeMesh, y: f32, color: [f32; 3]) {
    for i in 0..8 {
        let x = -0.875 + 0.25 * i as f32;
        pieces.append(&circle(
            Vec2::new(x, y),
            PIECE_RADIUS,
            color,
            PIECE_STEP_DEGREES,
        ));
    }
}
