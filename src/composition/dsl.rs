use crate::{
    composition::model::{
        ImageShape, RectShape, Shape, Slide, SlideAudio, TextShape, VideoShape,
    },
    foundation::error::MorphdeckResult,
};

/// Builder for [`Slide`] values.
pub struct SlideBuilder {
    shapes: Vec<Shape>,
    duration: f64,
    audio: Option<SlideAudio>,
}

impl SlideBuilder {
    /// Start a slide that stays fully visible for `duration` seconds.
    pub fn new(duration: f64) -> Self {
        Self {
            shapes: Vec::new(),
            duration,
            audio: None,
        }
    }

    /// Append a shape on top of the current z-order.
    pub fn shape(mut self, shape: impl Into<Shape>) -> Self {
        self.shapes.push(shape.into());
        self
    }

    /// Attach an audio cue.
    pub fn audio(mut self, url: impl Into<String>, start: Option<f64>) -> Self {
        self.audio = Some(SlideAudio {
            url: url.into(),
            start,
        });
        self
    }

    /// Build and validate the slide.
    pub fn build(self) -> MorphdeckResult<Slide> {
        let slide = Slide {
            shapes: self.shapes,
            duration: self.duration,
            audio: self.audio,
        };
        slide.validate()?;
        Ok(slide)
    }
}

/// Rectangle at `(x, y)` with size `w`×`h`.
pub fn rect(id: impl Into<String>, x: f64, y: f64, w: f64, h: f64) -> RectShape {
    RectShape {
        id: id.into(),
        x,
        y,
        width: w,
        height: h,
        fill: None,
        corner_radius: 0.0,
    }
}

/// Text block at `(x, y)` wrapping at `w`.
pub fn text(id: impl Into<String>, x: f64, y: f64, w: f64, content: impl Into<String>) -> TextShape {
    TextShape {
        id: id.into(),
        x,
        y,
        width: w,
        text: content.into(),
        font_size: 24.0,
        line_height: 1.2,
        font_family: None,
        fill: None,
    }
}

/// Image at `(x, y)` with size `w`×`h`.
pub fn image(id: impl Into<String>, x: f64, y: f64, w: f64, h: f64, src: impl Into<String>) -> ImageShape {
    ImageShape {
        id: id.into(),
        x,
        y,
        width: w,
        height: h,
        src: src.into(),
    }
}

/// Video at `(x, y)` with size `w`×`h`.
pub fn video(id: impl Into<String>, x: f64, y: f64, w: f64, h: f64, src: impl Into<String>) -> VideoShape {
    VideoShape {
        id: id.into(),
        x,
        y,
        width: w,
        height: h,
        src: src.into(),
    }
}

impl RectShape {
    /// Set the fill color.
    pub fn fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }
}

impl TextShape {
    /// Set the font size in pixels.
    pub fn font_size(mut self, px: f64) -> Self {
        self.font_size = px;
        self
    }

    /// Set the line height multiplier.
    pub fn line_height(mut self, mult: f64) -> Self {
        self.line_height = mult;
        self
    }
}

impl From<RectShape> for Shape {
    fn from(s: RectShape) -> Self {
        Self::Rect(s)
    }
}

impl From<TextShape> for Shape {
    fn from(s: TextShape) -> Self {
        Self::Text(s)
    }
}

impl From<ImageShape> for Shape {
    fn from(s: ImageShape) -> Self {
        Self::Image(s)
    }
}

impl From<VideoShape> for Shape {
    fn from(s: VideoShape) -> Self {
        Self::Video(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;
