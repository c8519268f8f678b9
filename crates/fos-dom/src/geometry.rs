//! Geometry
//!
//! Layout boxes, scroll metrics and the viewport. There is no layout engine
//! here: boxes are supplied by the embedder in page coordinates (unscrolled).

use crate::NodeId;

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Translate by a delta
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self { x: self.x + dx, y: self.y + dy, ..*self }
    }
}

/// Vertical scroll state of a scroll container
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f32,
    /// Full content height
    pub scroll_height: f32,
    /// Visible height
    pub client_height: f32,
}

impl ScrollMetrics {
    pub fn new(scroll_height: f32, client_height: f32) -> Self {
        Self { scroll_top: 0.0, scroll_height, client_height }
    }

    /// Largest valid `scroll_top`
    pub fn max_scroll_top(&self) -> f32 {
        (self.scroll_height - self.client_height).max(0.0)
    }
}

/// Browser viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scroll_x: f32,
    pub scroll_y: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, scroll_x: 0.0, scroll_y: 0.0 }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Scroll behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
    Instant,
}

/// Logical scroll position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollLogicalPosition {
    Start,
    Center,
    End,
    #[default]
    Nearest,
}

/// Scroll into view options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollIntoViewOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollLogicalPosition,
}

impl ScrollIntoViewOptions {
    /// `{ behavior: "smooth", block: "nearest" }`
    pub fn smooth_nearest() -> Self {
        Self { behavior: ScrollBehavior::Smooth, block: ScrollLogicalPosition::Nearest }
    }
}

/// A scroll performed on behalf of script, kept for inspection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollRequest {
    /// `element.scrollIntoView(options)`
    IntoView { target: NodeId, options: ScrollIntoViewOptions },
    /// `element.scrollTo(0, top)` on a scroll container
    Container { container: NodeId, top: f32 },
}
