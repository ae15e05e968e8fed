use std::str::FromStr;

use crate::foundation::core::Point;
use crate::foundation::error::PanelError;
use crate::geometry::bounds::BubbleBox;

/// Which end of an axis a handle moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Edge {
    /// Left or top edge.
    Min,
    /// Right or bottom edge.
    Max,
}

/// The eight compass resize handles drawn around a selected bubble.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    /// Top edge midpoint.
    N,
    /// Bottom edge midpoint.
    S,
    /// Right edge midpoint.
    E,
    /// Left edge midpoint.
    W,
    /// Top-right corner.
    NE,
    /// Top-left corner.
    NW,
    /// Bottom-right corner.
    SE,
    /// Bottom-left corner.
    SW,
}

impl ResizeHandle {
    /// All handles, corners first (the order they are hit-tested in).
    pub const ALL: [Self; 8] = [
        Self::NW,
        Self::NE,
        Self::SW,
        Self::SE,
        Self::N,
        Self::S,
        Self::W,
        Self::E,
    ];

    pub(crate) fn horizontal(self) -> Option<Edge> {
        match self {
            Self::E | Self::NE | Self::SE => Some(Edge::Max),
            Self::W | Self::NW | Self::SW => Some(Edge::Min),
            Self::N | Self::S => None,
        }
    }

    pub(crate) fn vertical(self) -> Option<Edge> {
        match self {
            Self::S | Self::SE | Self::SW => Some(Edge::Max),
            Self::N | Self::NE | Self::NW => Some(Edge::Min),
            Self::E | Self::W => None,
        }
    }

    /// Compass name (`"n"`, `"se"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::S => "s",
            Self::E => "e",
            Self::W => "w",
            Self::NE => "ne",
            Self::NW => "nw",
            Self::SE => "se",
            Self::SW => "sw",
        }
    }

    /// Where the handle sits on `bounds`: a corner or an edge midpoint.
    pub fn anchor(self, bounds: BubbleBox) -> Point {
        let x = match self.horizontal() {
            Some(Edge::Min) => bounds.x,
            Some(Edge::Max) => bounds.x + bounds.width,
            None => bounds.x + bounds.width / 2.0,
        };
        let y = match self.vertical() {
            Some(Edge::Min) => bounds.y,
            Some(Edge::Max) => bounds.y + bounds.height,
            None => bounds.y + bounds.height / 2.0,
        };
        Point::new(x, y)
    }
}

impl FromStr for ResizeHandle {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PanelError::validation(format!("unknown resize handle '{s}'")))
    }
}

impl std::fmt::Display for ResizeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/handles.rs"]
mod tests;
