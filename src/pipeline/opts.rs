use crate::{
    animation::ease::Ease,
    foundation::core::Canvas,
    foundation::error::{MorphdeckError, MorphdeckResult},
};

/// Slide-to-slide transition budget.
///
/// One complete transition lasts `complete_slide_transition_sec` (T) and is split into an exit,
/// a morph and an enter phase of `T / 3` each.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransitionTimings {
    /// Total transition length T in seconds.
    pub complete_slide_transition_sec: f64,
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            complete_slide_transition_sec: 3.0,
        }
    }
}

impl TransitionTimings {
    /// Morph phase length.
    pub fn morph_sec(self) -> f64 {
        self.complete_slide_transition_sec / 3.0
    }

    /// Enter and exit phase length.
    pub fn enter_exit_sec(self) -> f64 {
        self.complete_slide_transition_sec / 3.0
    }
}

/// Engine configuration. Every field has a default, so partial JSON configs load.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SynthesisOpts {
    /// Stage the shapes are laid out on.
    pub stage: Canvas,
    /// Transition phase lengths.
    pub timings: TransitionTimings,
    /// Delay between successive entering shapes, largest first.
    pub enter_stagger_sec: f64,
    /// Fraction of a text's area a shape must cover to contain it.
    pub container_coverage: f64,
    /// Length of appear/disappear toggles.
    pub visibility_toggle_sec: f64,
    /// Clock value the first slide starts at.
    pub presentation_start_sec: f64,
    /// Lowest score a rect pairing may have; `None` accepts any candidate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_match_score: Option<f64>,
    /// Give morph targets their own enter after the morph, staggered with entering shapes.
    pub morph_targets_slide_in: bool,
    /// Curve for enter animations; exits use its mirror.
    pub reveal_ease: Ease,
    /// Curve for morph animations.
    pub morph_ease: Ease,
}

impl Default for SynthesisOpts {
    fn default() -> Self {
        Self {
            stage: Canvas::default(),
            timings: TransitionTimings::default(),
            enter_stagger_sec: 0.1,
            container_coverage: 0.8,
            visibility_toggle_sec: 0.001,
            presentation_start_sec: 0.0,
            min_match_score: None,
            morph_targets_slide_in: false,
            reveal_ease: Ease::OutCubic,
            morph_ease: Ease::InOutCubic,
        }
    }
}

impl SynthesisOpts {
    /// Reject configurations the engine cannot schedule with.
    pub fn validate(&self) -> MorphdeckResult<()> {
        self.stage.validate()?;
        let t = self.timings.complete_slide_transition_sec;
        if !(t.is_finite() && t > 0.0) {
            return Err(MorphdeckError::validation(
                "completeSlideTransitionSec must be finite and > 0",
            ));
        }
        if !(self.enter_stagger_sec.is_finite() && self.enter_stagger_sec >= 0.0) {
            return Err(MorphdeckError::validation(
                "enterStaggerSec must be finite and >= 0",
            ));
        }
        if !(self.container_coverage > 0.0 && self.container_coverage <= 1.0) {
            return Err(MorphdeckError::validation(
                "containerCoverage must be in (0, 1]",
            ));
        }
        if !(self.visibility_toggle_sec.is_finite() && self.visibility_toggle_sec >= 0.0) {
            return Err(MorphdeckError::validation(
                "visibilityToggleSec must be finite and >= 0",
            ));
        }
        if !self.presentation_start_sec.is_finite() {
            return Err(MorphdeckError::validation(
                "presentationStartSec must be finite",
            ));
        }
        if let Some(min) = self.min_match_score
            && !min.is_finite()
        {
            return Err(MorphdeckError::validation("minMatchScore must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/opts.rs"]
mod tests;
