use crate::foundation::core::Point;
use crate::geometry::bounds::BubbleBox;
use crate::text::measure::TextMeasure;

/// Fraction of the bubble width text may occupy.
pub const TEXT_WIDTH_FRACTION: f64 = 0.8;
/// Smallest font size, in preview pixels.
pub const MIN_FONT_SIZE: f64 = 12.0;
/// Smallest line height, in preview pixels.
pub const MIN_LINE_HEIGHT: f64 = 14.0;

// Absorbs float noise in measured widths sitting exactly on the limit.
const FIT_EPSILON: f64 = 1e-6;

/// Bold font size for a bubble of `height`: `max(12, height / 6)`.
pub fn font_size_for(height: f64) -> f64 {
    (height / 6.0).max(MIN_FONT_SIZE)
}

/// Line advance for a bubble of `height`: `max(14, height / 5)`.
pub fn line_height_for(height: f64) -> f64 {
    (height / 5.0).max(MIN_LINE_HEIGHT)
}

/// Greedy word wrap.
///
/// Words (split on any whitespace) accumulate into a line while the line's measured width stays
/// within `max_width`. A word that would overflow starts the next line; a word wider than
/// `max_width` sits alone on its line.
pub fn wrap_words(
    text: &str,
    max_width: f64,
    font_size: f64,
    measure: &mut dyn TextMeasure,
) -> Vec<(String, f64)> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0.0;

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            line_width = measure.measure(&line, font_size);
            continue;
        }

        let candidate = format!("{line} {word}");
        let width = measure.measure(&candidate, font_size);
        if width > max_width + FIT_EPSILON {
            lines.push((std::mem::take(&mut line), line_width));
            line.push_str(word);
            line_width = measure.measure(&line, font_size);
        } else {
            line = candidate;
            line_width = width;
        }
    }

    if !line.is_empty() {
        lines.push((line, line_width));
    }
    lines
}

/// One laid-out line of bubble text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    /// Words joined by single spaces.
    pub text: String,
    /// Measured width in preview pixels.
    pub width: f64,
    /// Line centre; text is drawn centred on this point (horizontally and on the middle baseline).
    pub center: Point,
}

impl TextLine {
    /// Left edge of the centred line.
    pub fn left(&self) -> f64 {
        self.center.x - self.width / 2.0
    }
}

/// Text of one bubble laid out in preview space.
#[derive(Clone, Debug, PartialEq)]
pub struct BubbleTextLayout {
    /// Bold font size.
    pub font_size: f64,
    /// Line advance.
    pub line_height: f64,
    /// Wrap width (`0.8 × bubble width`).
    pub max_width: f64,
    /// Lines top to bottom.
    pub lines: Vec<TextLine>,
}

impl BubbleTextLayout {
    /// Lay out `text` inside `bounds`: wrapped, centred on the bubble centre line by line, with
    /// the block centred vertically.
    pub fn new(bounds: BubbleBox, text: &str, measure: &mut dyn TextMeasure) -> Self {
        let font_size = font_size_for(bounds.height);
        let line_height = line_height_for(bounds.height);
        let max_width = bounds.width * TEXT_WIDTH_FRACTION;

        let wrapped = wrap_words(text, max_width, font_size, measure);
        let c = bounds.center();
        let total = wrapped.len() as f64 * line_height;
        let start_y = c.y - total / 2.0 + line_height / 2.0;

        let lines = wrapped
            .into_iter()
            .enumerate()
            .map(|(i, (text, width))| TextLine {
                text,
                width,
                center: Point::new(c.x, start_y + i as f64 * line_height),
            })
            .collect();

        Self {
            font_size,
            line_height,
            max_width,
            lines,
        }
    }

    /// Total height of the block of lines.
    pub fn block_height(&self) -> f64 {
        self.lines.len() as f64 * self.line_height
    }

    /// Lines rejoined with single spaces.
    pub fn joined(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
