use crate::{
    animation::variants::synthesize_variants,
    compile::combine::{Timeline, combine},
    compile::timeline::compile_timeline,
    composition::model::{Slide, validate_slides},
    composition::staged::stage_slides,
    foundation::error::MorphdeckResult,
    geometry::bounds::{EstimatedTextMeasure, TextMeasure},
    matching::shared::link_shared_elements,
    pipeline::opts::SynthesisOpts,
    scheduling::containers::resolve_containers,
    scheduling::delays::schedule_enter_delays,
};

/// Synthesize the transition timeline for `slides` with the built-in text height estimate.
///
/// Convenience wrapper over [`synthesize_with_measure`].
pub fn synthesize(slides: &[Slide], opts: &SynthesisOpts) -> MorphdeckResult<Timeline> {
    synthesize_with_measure(slides, opts, &EstimatedTextMeasure::default())
}

/// Synthesize the transition timeline for `slides`, measuring text with `measure`.
///
/// Runs the full stage chain: staging, shared-element linking, container resolution, enter
/// delays, variant synthesis, timeline compilation and combination. The caller's slides are
/// never modified. The result is checked with [`Timeline::validate`] before it is returned.
#[tracing::instrument(skip_all, fields(slides = slides.len()))]
pub fn synthesize_with_measure(
    slides: &[Slide],
    opts: &SynthesisOpts,
    measure: &dyn TextMeasure,
) -> MorphdeckResult<Timeline> {
    opts.validate()?;
    validate_slides(slides)?;

    let staged = stage_slides(slides, measure);
    let staged = link_shared_elements(staged, opts.stage, opts.min_match_score);
    let staged = resolve_containers(staged, opts.container_coverage);
    let staged = schedule_enter_delays(
        staged,
        opts.enter_stagger_sec,
        opts.timings.enter_exit_sec(),
        opts.morph_targets_slide_in,
    );
    let plans = synthesize_variants(&staged, opts)?;
    let scheduled = compile_timeline(&staged, &plans, opts)?;
    let timeline = combine(scheduled);
    timeline.validate()?;

    tracing::debug!(
        items = timeline.items.len(),
        audio_cues = timeline.audio_cues.len(),
        total_duration = timeline.total_duration,
        "timeline synthesized"
    );
    Ok(timeline)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/synthesize.rs"]
mod tests;
