/// Easing curve tag attached to each animation for the playback tween engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ease {
    /// No easing.
    #[default]
    Linear,
    /// Quadratic acceleration.
    InQuad,
    /// Quadratic deceleration.
    OutQuad,
    /// Quadratic ease in and out.
    InOutQuad,
    /// Cubic acceleration.
    InCubic,
    /// Cubic deceleration.
    OutCubic,
    /// Cubic ease in and out.
    InOutCubic,
}

impl Ease {
    /// Map linear progress `t` (clamped to `[0, 1]`) through the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => power_in(t, 2),
            Self::OutQuad => power_out(t, 2),
            Self::InOutQuad => power_in_out(t, 2),
            Self::InCubic => power_in(t, 3),
            Self::OutCubic => power_out(t, 3),
            Self::InOutCubic => power_in_out(t, 3),
        }
    }

    /// Time-reversed curve: an exit played with `mirror()` retraces the matching enter.
    pub fn mirror(self) -> Self {
        match self {
            Self::InQuad => Self::OutQuad,
            Self::OutQuad => Self::InQuad,
            Self::InCubic => Self::OutCubic,
            Self::OutCubic => Self::InCubic,
            other => other,
        }
    }
}

fn power_in(t: f64, p: i32) -> f64 {
    t.powi(p)
}

fn power_out(t: f64, p: i32) -> f64 {
    1.0 - (1.0 - t).powi(p)
}

// First half scaled so both halves meet at (0.5, 0.5).
fn power_in_out(t: f64, p: i32) -> f64 {
    if t < 0.5 {
        2f64.powi(p - 1) * t.powi(p)
    } else {
        1.0 - (2.0 - 2.0 * t).powi(p) / 2.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
