use crate::{
    animation::model::{Animation, AnimationKind},
    animation::variants::SlidePlan,
    composition::model::{Shape, SlideAudio},
    composition::staged::StagedSlide,
    foundation::error::{MorphdeckError, MorphdeckResult},
    pipeline::opts::SynthesisOpts,
};

/// A shape with its animations placed on the absolute clock.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledShape {
    /// Caller's shape.
    pub shape: Shape,
    /// Animations in sequence order.
    pub animations: Vec<Animation>,
}

/// A slide with its phase boundaries resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledSlide {
    /// Slide position in the deck.
    pub index: usize,
    /// Clock value when the slide's morph/enter phase begins.
    pub transition_start: f64,
    /// Clock value when the content is fully visible.
    pub start_time: f64,
    /// Fully visible dwell time.
    pub duration: f64,
    /// Clock value after the slide's exit phase.
    pub end_time: f64,
    /// Shapes in z-order.
    pub shapes: Vec<ScheduledShape>,
    /// Audio cue copied from the input slide.
    pub audio: Option<SlideAudio>,
}

/// Stage: walk the slides once with a running clock and stamp every animation.
///
/// Per slide the clock passes through four phases: morph (only if some shape morphs), enter
/// (only if some shape enters), the dwell `duration`, and exit (only if some shape exits).
/// Morphs and `morphAppear` start with the morph phase. `appear` and `enter` start with the enter
/// phase plus the shape's stagger. Exits start after the dwell; `disappear` lands once the exit
/// phase ends, which is also when the next slide's morph targets take over.
///
/// Stagger delays are not clamped to the enter phase. On a slide with many entering shapes and a
/// short `duration`, `enter_base + delay` can land after the slide's exit start, so a shape's
/// `appear`/`enter` may be stamped later than its `exit`. [`Timeline::validate`] does not reject
/// this; keep `enter_stagger_sec * shapes` within the enter phase plus the dwell to avoid it.
///
/// [`Timeline::validate`]: crate::Timeline::validate
#[tracing::instrument(skip_all, fields(slides = slides.len()))]
pub fn compile_timeline(
    slides: &[StagedSlide],
    plans: &[SlidePlan],
    opts: &SynthesisOpts,
) -> MorphdeckResult<Vec<ScheduledSlide>> {
    if slides.len() != plans.len() {
        return Err(MorphdeckError::synthesis(format!(
            "{} slides but {} animation plans",
            slides.len(),
            plans.len()
        )));
    }

    let morph_sec = opts.timings.morph_sec();
    let enter_exit_sec = opts.timings.enter_exit_sec();
    let mut t = opts.presentation_start_sec;
    let mut out = Vec::with_capacity(slides.len());

    for (slide, plan) in slides.iter().zip(plans) {
        if slide.shapes.len() != plan.shapes.len() {
            return Err(MorphdeckError::synthesis(format!(
                "slide {} has {} shapes but {} animation sequences",
                slide.index,
                slide.shapes.len(),
                plan.shapes.len()
            )));
        }

        let transition_start = t;
        if plan.has(AnimationKind::Morph) {
            t += morph_sec;
        }
        let enter_base = t;
        if plan.has(AnimationKind::Enter) {
            t += enter_exit_sec;
        }
        let start_time = t;
        t += slide.duration;
        let exit_start = t;
        let has_exit = plan.has(AnimationKind::Exit);
        if has_exit {
            t += enter_exit_sec;
        }
        let disappear_at = t;

        tracing::debug!(
            slide = slide.index,
            transition_start,
            start_time,
            exit_start,
            end_time = t,
            "slide scheduled"
        );

        let shapes = slide
            .shapes
            .iter()
            .zip(&plan.shapes)
            .map(|(staged, steps)| {
                let enter_at = enter_base + staged.attrs.enter_delay.unwrap_or(0.0);
                let animations = steps
                    .iter()
                    .map(|step| {
                        let start = match step.kind {
                            AnimationKind::Morph | AnimationKind::MorphAppear => transition_start,
                            AnimationKind::Appear | AnimationKind::Enter => enter_at,
                            AnimationKind::Exit => exit_start,
                            AnimationKind::Disappear => disappear_at,
                        };
                        step.at(start)
                    })
                    .collect();
                ScheduledShape {
                    shape: staged.shape.clone(),
                    animations,
                }
            })
            .collect();

        out.push(ScheduledSlide {
            index: slide.index,
            transition_start,
            start_time,
            duration: slide.duration,
            end_time: t,
            shapes,
            audio: slide.audio.clone(),
        });
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/compile/timeline.rs"]
mod tests;
