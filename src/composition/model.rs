use std::collections::BTreeSet;

use crate::foundation::error::{MorphdeckError, MorphdeckResult};

/// One authored slide: z-ordered shapes, a dwell time and an optional narration cue.
///
/// `duration` counts only the time the slide content is fully visible; transition time is added
/// by the timeline compiler.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// Shapes in z-order (later entries are drawn on top).
    #[serde(rename = "canvasElements")]
    pub shapes: Vec<Shape>,
    /// Seconds of fully visible content.
    pub duration: f64,
    /// Optional audio played while the slide is on screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<SlideAudio>,
}

/// Audio attached to a slide.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlideAudio {
    /// Source URL, resolved by the playback layer.
    pub url: String,
    /// Trim offset into the source, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
}

/// A shape on a slide, discriminated by its `type` tag.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    /// Filled rectangle; the only shape that can morph across slides.
    Rect(RectShape),
    /// Text block whose height is measured, not stored.
    Text(TextShape),
    /// Raster image.
    Image(ImageShape),
    /// Video frame.
    Video(VideoShape),
}

/// Rectangle fields.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectShape {
    /// Caller-assigned id, unique within its slide.
    pub id: String,
    /// Left edge.
    #[serde(default)]
    pub x: f64,
    /// Top edge.
    #[serde(default)]
    pub y: f64,
    /// Width.
    #[serde(default)]
    pub width: f64,
    /// Height.
    #[serde(default)]
    pub height: f64,
    /// CSS-style fill color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    /// Corner radius in pixels.
    #[serde(default)]
    pub corner_radius: f64,
}

/// Text fields.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextShape {
    /// Caller-assigned id, unique within its slide.
    pub id: String,
    /// Left edge.
    #[serde(default)]
    pub x: f64,
    /// Top edge.
    #[serde(default)]
    pub y: f64,
    /// Wrap width.
    #[serde(default)]
    pub width: f64,
    /// Text content; `\n` separates paragraphs.
    #[serde(default)]
    pub text: String,
    /// Font size in pixels.
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    /// Line height as a multiple of `font_size`.
    #[serde(default = "default_line_height")]
    pub line_height: f64,
    /// Font family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
}

/// Image fields.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageShape {
    /// Caller-assigned id, unique within its slide.
    pub id: String,
    /// Left edge.
    #[serde(default)]
    pub x: f64,
    /// Top edge.
    #[serde(default)]
    pub y: f64,
    /// Width.
    #[serde(default)]
    pub width: f64,
    /// Height.
    #[serde(default)]
    pub height: f64,
    /// Source URL.
    pub src: String,
}

/// Video fields.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoShape {
    /// Caller-assigned id, unique within its slide.
    pub id: String,
    /// Left edge.
    #[serde(default)]
    pub x: f64,
    /// Top edge.
    #[serde(default)]
    pub y: f64,
    /// Width.
    #[serde(default)]
    pub width: f64,
    /// Height.
    #[serde(default)]
    pub height: f64,
    /// Source URL.
    pub src: String,
}

fn default_font_size() -> f64 {
    24.0
}

fn default_line_height() -> f64 {
    1.2
}

/// Discriminant of a [`Shape`], handy for logging and diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// [`Shape::Rect`]
    Rect,
    /// [`Shape::Text`]
    Text,
    /// [`Shape::Image`]
    Image,
    /// [`Shape::Video`]
    Video,
}

impl Shape {
    /// Caller-assigned id.
    pub fn id(&self) -> &str {
        match self {
            Self::Rect(s) => &s.id,
            Self::Text(s) => &s.id,
            Self::Image(s) => &s.id,
            Self::Video(s) => &s.id,
        }
    }

    /// Shape discriminant.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Rect(_) => ShapeKind::Rect,
            Self::Text(_) => ShapeKind::Text,
            Self::Image(_) => ShapeKind::Image,
            Self::Video(_) => ShapeKind::Video,
        }
    }

    /// Top-left corner.
    pub fn origin(&self) -> (f64, f64) {
        match self {
            Self::Rect(s) => (s.x, s.y),
            Self::Text(s) => (s.x, s.y),
            Self::Image(s) => (s.x, s.y),
            Self::Video(s) => (s.x, s.y),
        }
    }

    /// True for [`Shape::Text`].
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Rectangle fields when this is a [`Shape::Rect`].
    pub fn as_rect(&self) -> Option<&RectShape> {
        match self {
            Self::Rect(r) => Some(r),
            _ => None,
        }
    }

    /// Check geometry and type-specific fields.
    pub fn validate(&self) -> MorphdeckResult<()> {
        let id = self.id();
        if id.trim().is_empty() {
            return Err(MorphdeckError::validation("shape id must be non-empty"));
        }
        let (x, y) = self.origin();
        if !x.is_finite() || !y.is_finite() {
            return Err(MorphdeckError::validation(format!(
                "shape '{id}' position must be finite"
            )));
        }
        let (w, h) = match self {
            Self::Rect(s) => (s.width, s.height),
            Self::Image(s) => (s.width, s.height),
            Self::Video(s) => (s.width, s.height),
            Self::Text(s) => {
                if !(s.font_size.is_finite() && s.font_size > 0.0) {
                    return Err(MorphdeckError::validation(format!(
                        "text '{id}' fontSize must be > 0"
                    )));
                }
                if !(s.line_height.is_finite() && s.line_height > 0.0) {
                    return Err(MorphdeckError::validation(format!(
                        "text '{id}' lineHeight must be > 0"
                    )));
                }
                (s.width, 0.0)
            }
        };
        if !(w.is_finite() && w >= 0.0 && h.is_finite() && h >= 0.0) {
            return Err(MorphdeckError::validation(format!(
                "shape '{id}' width/height must be finite and >= 0"
            )));
        }
        if let Self::Rect(r) = self
            && !(r.corner_radius.is_finite() && r.corner_radius >= 0.0)
        {
            return Err(MorphdeckError::validation(format!(
                "rect '{id}' cornerRadius must be finite and >= 0"
            )));
        }
        Ok(())
    }
}

impl Slide {
    /// Find a shape by id.
    pub fn find(&self, id: &str) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Check duration, shapes, id uniqueness and the audio cue.
    pub fn validate(&self) -> MorphdeckResult<()> {
        if !(self.duration.is_finite() && self.duration >= 0.0) {
            return Err(MorphdeckError::validation(
                "slide duration must be finite and >= 0",
            ));
        }

        let mut seen = BTreeSet::new();
        for shape in &self.shapes {
            shape.validate()?;
            if !seen.insert(shape.id()) {
                return Err(MorphdeckError::validation(format!(
                    "duplicate shape id '{}'",
                    shape.id()
                )));
            }
        }

        if let Some(audio) = &self.audio {
            if audio.url.trim().is_empty() {
                return Err(MorphdeckError::validation("audio url must be non-empty"));
            }
            if let Some(start) = audio.start
                && !(start.is_finite() && start >= 0.0)
            {
                return Err(MorphdeckError::validation(
                    "audio start must be finite and >= 0",
                ));
            }
        }
        Ok(())
    }
}

/// Validate every slide, prefixing errors with the slide index.
pub fn validate_slides(slides: &[Slide]) -> MorphdeckResult<()> {
    for (index, slide) in slides.iter().enumerate() {
        slide.validate().map_err(|e| match e {
            MorphdeckError::Validation(msg) => {
                MorphdeckError::validation(format!("slide {index}: {msg}"))
            }
            other => other,
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
