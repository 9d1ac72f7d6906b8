use crate::{
    animation::model::{Animation, AnimationKind},
    compile::timeline::ScheduledSlide,
    composition::model::Shape,
    foundation::error::{MorphdeckError, MorphdeckResult},
    foundation::math::TIME_EPSILON,
};

/// One shape instance in the flat timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedAnimationItem {
    /// Caller's shape.
    pub shape: Shape,
    /// Slide the instance belongs to.
    pub slide_index: usize,
    /// Animations in sequence order, bookended by a visibility toggle on and off.
    pub animations: Vec<Animation>,
}

/// Audio to start at an absolute clock time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioCue {
    /// Source URL.
    pub url: String,
    /// Clock time to start playback.
    pub should_be_played_at: f64,
    /// Trim offset into the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    /// Seconds to play.
    pub duration: f64,
}

/// Resolved phase boundaries of one slide.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideTiming {
    /// Slide position in the deck.
    pub index: usize,
    /// When the slide's morph/enter phase begins.
    pub transition_start: f64,
    /// When the content is fully visible.
    pub start_time: f64,
    /// Fully visible dwell time.
    pub duration: f64,
}

/// The engine's output: every shape instance and audio cue on one clock.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    /// Shape instances in slide order, then z-order.
    #[serde(rename = "timeline")]
    pub items: Vec<CombinedAnimationItem>,
    /// Audio cues in slide order.
    pub audio_cues: Vec<AudioCue>,
    /// Per-slide timing.
    pub slides: Vec<SlideTiming>,
    /// Clock time at which the last animation or slide ends.
    pub total_duration: f64,
}

/// Stage: flatten scheduled slides into the hand-off structure.
pub fn combine(slides: Vec<ScheduledSlide>) -> Timeline {
    let mut items = Vec::new();
    let mut audio_cues = Vec::new();
    let mut timings = Vec::with_capacity(slides.len());
    let mut total_duration = 0.0f64;

    for slide in slides {
        total_duration = total_duration.max(slide.end_time);
        timings.push(SlideTiming {
            index: slide.index,
            transition_start: slide.transition_start,
            start_time: slide.start_time,
            duration: slide.duration,
        });
        if let Some(audio) = slide.audio {
            audio_cues.push(AudioCue {
                url: audio.url,
                should_be_played_at: slide.start_time,
                start: audio.start,
                duration: slide.duration,
            });
        }
        for scheduled in slide.shapes {
            for a in &scheduled.animations {
                total_duration = total_duration.max(a.end_time());
            }
            items.push(CombinedAnimationItem {
                shape: scheduled.shape,
                slide_index: slide.index,
                animations: scheduled.animations,
            });
        }
    }

    Timeline {
        items,
        audio_cues,
        slides: timings,
        total_duration,
    }
}

impl Timeline {
    /// Items belonging to slide `index`.
    pub fn items_for_slide(&self, index: usize) -> impl Iterator<Item = &CombinedAnimationItem> {
        self.items.iter().filter(move |i| i.slide_index == index)
    }

    /// Clock value a playback layer seeks to when previewing slide `index`.
    ///
    /// An index outside the deck is reported as a validation error, not a synthesis failure.
    pub fn preview_offset(&self, index: usize) -> MorphdeckResult<f64> {
        self.slides
            .get(index)
            .map(|s| s.transition_start)
            .ok_or_else(|| {
                MorphdeckError::validation(format!(
                    "preview slide index {index} is out of range (deck has {} slides)",
                    self.slides.len()
                ))
            })
    }

    /// Check the animation bookends and clock monotonicity.
    pub fn validate(&self) -> MorphdeckResult<()> {
        for item in &self.items {
            let id = item.shape.id();
            let first = item.animations.first().map(|a| a.kind);
            if !matches!(
                first,
                Some(AnimationKind::Appear | AnimationKind::MorphAppear)
            ) {
                return Err(MorphdeckError::synthesis(format!(
                    "shape '{id}' on slide {} does not open with appear/morphAppear",
                    item.slide_index
                )));
            }
            let openers = item
                .animations
                .iter()
                .filter(|a| matches!(a.kind, AnimationKind::Appear | AnimationKind::MorphAppear))
                .count();
            let closers = item
                .animations
                .iter()
                .filter(|a| a.kind == AnimationKind::Disappear)
                .count();
            let last = item.animations.last().map(|a| a.kind);
            if openers != 1 || closers != 1 || last != Some(AnimationKind::Disappear) {
                return Err(MorphdeckError::synthesis(format!(
                    "shape '{id}' on slide {} is not bookended by one opener and one disappear",
                    item.slide_index
                )));
            }

            let timing = self.slides.get(item.slide_index).ok_or_else(|| {
                MorphdeckError::synthesis(format!(
                    "shape '{id}' references unknown slide {}",
                    item.slide_index
                ))
            })?;
            let dwell_end = timing.start_time + timing.duration;
            for exit in item
                .animations
                .iter()
                .filter(|a| a.kind == AnimationKind::Exit)
            {
                if exit.start_time + TIME_EPSILON < dwell_end {
                    return Err(MorphdeckError::synthesis(format!(
                        "shape '{id}' exits at {} before slide {} finishes at {dwell_end}",
                        exit.start_time, item.slide_index
                    )));
                }
            }
        }

        for pair in self.slides.windows(2) {
            let prev_end = pair[0].start_time + pair[0].duration;
            if pair[1].start_time + TIME_EPSILON < prev_end {
                return Err(MorphdeckError::synthesis(format!(
                    "slide {} starts at {} before slide {} ends at {prev_end}",
                    pair[1].index, pair[1].start_time, pair[0].index
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/combine.rs"]
mod tests;
