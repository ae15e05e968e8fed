use crate::foundation::core::{Point, Rect, Vec2};
use crate::geometry::handles::{Edge, ResizeHandle};

/// Smallest width/height a bubble may take, in preview pixels.
pub const MIN_BUBBLE_SIZE: f64 = 30.0;

/// Axis-aligned bubble bounds in preview space (top-left origin).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BubbleBox {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width, never below [`MIN_BUBBLE_SIZE`] once clamped.
    pub width: f64,
    /// Height, never below [`MIN_BUBBLE_SIZE`] once clamped.
    pub height: f64,
}

impl BubbleBox {
    /// Build bounds from position and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Move by an incremental pointer delta.
    pub fn translated(self, delta: Vec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..self
        }
    }

    /// Apply a pointer delta to the edges named by `handle`.
    ///
    /// Each axis clamps independently at [`MIN_BUBBLE_SIZE`]. When a min-side edge (`w`/`n`) is
    /// dragged, the position shift is derived from the clamped size so the opposite edge stays put.
    pub fn resized(self, handle: ResizeHandle, delta: Vec2) -> Self {
        let mut out = self;

        match handle.horizontal() {
            Some(Edge::Max) => out.width = (self.width + delta.x).max(MIN_BUBBLE_SIZE),
            Some(Edge::Min) => {
                let width = (self.width - delta.x).max(MIN_BUBBLE_SIZE);
                out.x += self.width - width;
                out.width = width;
            }
            None => {}
        }

        match handle.vertical() {
            Some(Edge::Max) => out.height = (self.height + delta.y).max(MIN_BUBBLE_SIZE),
            Some(Edge::Min) => {
                let height = (self.height - delta.y).max(MIN_BUBBLE_SIZE);
                out.y += self.height - height;
                out.height = height;
            }
            None => {}
        }

        out
    }

    /// Grow undersized bounds to the minimum, keeping the top-left corner.
    pub fn clamped_to_min(self) -> Self {
        let finite = |v: f64, fallback: f64| if v.is_finite() { v } else { fallback };
        Self {
            x: finite(self.x, 0.0),
            y: finite(self.y, 0.0),
            width: finite(self.width, MIN_BUBBLE_SIZE).max(MIN_BUBBLE_SIZE),
            height: finite(self.height, MIN_BUBBLE_SIZE).max(MIN_BUBBLE_SIZE),
        }
    }

    /// Bounds as a kurbo rectangle.
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Geometric centre.
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether `p` lies inside the ellipse inscribed in these bounds.
    pub fn ellipse_contains(self, p: Point) -> bool {
        let c = self.center();
        let rx = self.width / 2.0;
        let ry = self.height / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let nx = (p.x - c.x) / rx;
        let ny = (p.y - c.y) / ry;
        nx * nx + ny * ny <= 1.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/bounds.rs"]
mod tests;
