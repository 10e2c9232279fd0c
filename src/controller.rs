//! Application control state for the demo render loops.
//!
//! Instead of a global fill/wireframe flag mutated from a key callback,
//! the render loop owns a [`Controller`] value: the windowing layer maps
//! its native key events onto [`KeyCode`], calls [`Controller::on_key`]
//! and keeps the returned state. No shared mutable state is involved.

/// Physical keyboard key identifier.
///
/// Platform layers (glfw, winit, ...) map their native key codes to this
/// enum; only keys the demos react to need a mapping, everything else
/// can be skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum KeyCode {
    /// Space bar.
    Space,
    /// Enter / Return.
    Enter,
    /// Escape.
    Escape,
    /// Tab.
    Tab,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
}

/// Rasterizer mode the render loop feeds the draw call each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolygonMode {
    /// Filled triangles.
    #[default]
    Fill,
    /// Wireframe outlines.
    Line,
}

/// Per-application control state, owned by the render loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controller {
    /// Draw filled triangles when true, wireframe when false.
    pub fill_polygon: bool,
    /// Set once the user asked to quit.
    pub should_close: bool,
}

impl Default for Controller {
    fn default() -> Self {
        Self {
            fill_polygon: true,
            should_close: false,
        }
    }
}

impl Controller {
    /// Apply one key press and return the updated state.
    ///
    /// Space toggles fill/wireframe, Escape requests close; any other
    /// key leaves the state unchanged.
    #[must_use]
    pub fn on_key(self, key: KeyCode) -> Self {
        match key {
            KeyCode::Space => Self {
                fill_polygon: !self.fill_polygon,
                ..self
            },
            KeyCode::Escape => Self {
                should_close: true,
                ..self
            },
            _ => self,
        }
    }

    /// The polygon mode the current state asks for.
    pub fn polygon_mode(&self) -> PolygonMode {
        if self.fill_polygon {
            PolygonMode::Fill
        } else {
            PolygonMode::Line
        }
    }
}
