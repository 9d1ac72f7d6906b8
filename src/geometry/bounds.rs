use crate::{
    composition::model::{Shape, TextShape},
    foundation::core::Rect,
};

/// Measures the rendered height of a text block.
///
/// Text shapes carry a wrap width but no height; the real height depends on fonts and layout,
/// which live outside this crate. Implement this to plug in a real shaper.
pub trait TextMeasure {
    /// Rendered height of `text` in stage pixels.
    fn text_height(&self, text: &TextShape) -> f64;
}

/// Font-free estimate: fixed average advance per glyph, greedy wrap per paragraph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EstimatedTextMeasure {
    /// Average glyph advance as a fraction of the font size.
    pub avg_advance_em: f64,
}

impl Default for EstimatedTextMeasure {
    fn default() -> Self {
        Self {
            avg_advance_em: 0.5,
        }
    }
}

impl TextMeasure for EstimatedTextMeasure {
    fn text_height(&self, text: &TextShape) -> f64 {
        let advance = text.font_size * self.avg_advance_em;
        let lines: usize = text
            .text
            .split('\n')
            .map(|para| {
                let glyphs = para.chars().count();
                if glyphs == 0 || text.width <= 0.0 || advance <= 0.0 {
                    return 1;
                }
                let per_line = (text.width / advance).floor().max(1.0) as usize;
                glyphs.div_ceil(per_line)
            })
            .sum();
        (lines as f64) * text.font_size * text.line_height
    }
}

/// Bounding rectangle the engine reasons about for `shape`.
pub fn effective_rect(shape: &Shape, measure: &dyn TextMeasure) -> Rect {
    let (x, y, w, h) = match shape {
        Shape::Rect(s) => (s.x, s.y, s.width, s.height),
        Shape::Image(s) => (s.x, s.y, s.width, s.height),
        Shape::Video(s) => (s.x, s.y, s.width, s.height),
        Shape::Text(s) => (s.x, s.y, s.width, measure.text_height(s).max(0.0)),
    };
    Rect::new(x, y, x + w.max(0.0), y + h.max(0.0))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/bounds.rs"]
mod tests;
