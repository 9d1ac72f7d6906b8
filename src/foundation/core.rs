use crate::foundation::error::{MorphdeckError, MorphdeckResult};

pub use kurbo::{Point, Rect, Size};

/// Stage dimensions in authoring pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Stage width.
    pub width: u32,
    /// Stage height.
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

impl Canvas {
    /// Create a stage, rejecting zero-sized dimensions.
    pub fn new(width: u32, height: u32) -> MorphdeckResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Check that both dimensions are non-zero.
    pub fn validate(self) -> MorphdeckResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(MorphdeckError::validation("stage width/height must be > 0"));
        }
        Ok(())
    }

    /// Stage width as `f64`.
    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    /// Stage height as `f64`.
    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }

    /// Stage bounds anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width_f64(), self.height_f64())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
