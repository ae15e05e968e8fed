use crate::foundation::core::{Point, Rgba8, Size};
use crate::geometry::bounds::BubbleBox;

/// Default top-left corner for freshly added bubbles.
pub const DEFAULT_BUBBLE_ORIGIN: Point = Point::new(50.0, 50.0);
/// Outline stroke width in preview pixels.
pub const OUTLINE_WIDTH: f64 = 3.0;
/// Dash pattern (on, off) for dashed outlines.
pub const OUTLINE_DASHES: [f64; 2] = [5.0, 5.0];
/// Outline and text color.
pub const INK: Rgba8 = Rgba8::BLACK;

/// Identifier of a bubble, unique within its panel.
///
/// Serialized as a string. Numeric ids are accepted on input and kept as their decimal text.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct BubbleId(pub String);

impl BubbleId {
    /// Build an identifier from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> serde::Deserialize<'de> for BubbleId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Number(n) => Self(n.to_string()),
        })
    }
}

impl std::fmt::Display for BubbleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Closed set of bubble kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BubbleKind {
    /// Spoken dialogue.
    Speech,
    /// Inner monologue.
    Thought,
    /// Narration box.
    Caption,
}

/// Outline geometry of a bubble.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleShape {
    /// Ellipse inscribed in the bounding box.
    Ellipse,
    /// The bounding box itself.
    Rect,
}

/// Outline stroke style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutlineStyle {
    /// Continuous stroke.
    Solid,
    /// Stroke broken by [`OUTLINE_DASHES`].
    Dashed,
}

/// Per-kind rendering rules and creation defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleStyle {
    /// Outline geometry.
    pub shape: BubbleShape,
    /// Outline stroke style.
    pub outline: OutlineStyle,
    /// Interior fill.
    pub fill: Rgba8,
    /// Size given to new bubbles of this kind.
    pub default_size: Size,
    /// Placeholder text for new bubbles of this kind.
    pub default_text: &'static str,
}

// Indexed by `BubbleKind as usize`.
const STYLES: [BubbleStyle; 3] = [
    BubbleStyle {
        shape: BubbleShape::Ellipse,
        outline: OutlineStyle::Solid,
        fill: Rgba8::WHITE,
        default_size: Size::new(150.0, 100.0),
        default_text: "Hey!",
    },
    BubbleStyle {
        shape: BubbleShape::Ellipse,
        outline: OutlineStyle::Dashed,
        fill: Rgba8::WHITE,
        default_size: Size::new(150.0, 100.0),
        default_text: "Hey!",
    },
    BubbleStyle {
        shape: BubbleShape::Rect,
        outline: OutlineStyle::Solid,
        fill: Rgba8::opaque(0xFE, 0xF9, 0xC3),
        default_size: Size::new(150.0, 60.0),
        default_text: "Meanwhile...",
    },
];

impl BubbleKind {
    /// Every kind, in style-table order.
    pub const ALL: [Self; 3] = [Self::Speech, Self::Thought, Self::Caption];

    /// Rendering rules for this kind.
    pub fn style(self) -> &'static BubbleStyle {
        &STYLES[self as usize]
    }
}

/// A positioned text overlay on a panel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextBubble {
    /// Identifier, unique within the panel.
    pub id: BubbleId,
    /// Kind; fixed for the bubble's lifetime.
    #[serde(rename = "type")]
    pub kind: BubbleKind,
    /// Text content, possibly empty.
    #[serde(default)]
    pub text: String,
    /// Preview-space bounds.
    #[serde(flatten)]
    pub bounds: BubbleBox,
}

impl TextBubble {
    /// A bubble with the kind's default size and text at [`DEFAULT_BUBBLE_ORIGIN`].
    pub fn with_defaults(id: BubbleId, kind: BubbleKind) -> Self {
        let style = kind.style();
        Self {
            id,
            kind,
            text: style.default_text.to_string(),
            bounds: BubbleBox::new(
                DEFAULT_BUBBLE_ORIGIN.x,
                DEFAULT_BUBBLE_ORIGIN.y,
                style.default_size.width,
                style.default_size.height,
            ),
        }
    }

    /// Rendering rules for this bubble's kind.
    pub fn style(&self) -> &'static BubbleStyle {
        self.kind.style()
    }

    /// Whether `p` hits the bubble's painted shape.
    pub fn contains(&self, p: Point) -> bool {
        match self.style().shape {
            BubbleShape::Ellipse => self.bounds.ellipse_contains(p),
            BubbleShape::Rect => self.bounds.to_rect().contains(p),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/bubble.rs"]
mod tests;
