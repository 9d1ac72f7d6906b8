use super::*;
use crate::animation::model::AnimationKind;
use crate::composition::dsl::{SlideBuilder, rect, text};
use crate::composition::model::TextShape;
use crate::foundation::error::MorphdeckError;
use crate::foundation::math::approx_eq;

fn start_of(t: &Timeline, slide: usize, id: &str, kind: AnimationKind) -> f64 {
    t.items_for_slide(slide)
        .find(|i| i.shape.id() == id)
        .and_then(|i| i.animations.iter().find(|a| a.kind == kind))
        .map(|a| a.start_time)
        .unwrap_or_else(|| panic!("no {kind:?} for {id} on slide {slide}"))
}

#[test]
fn empty_deck_gives_empty_timeline() {
    let t = synthesize(&[], &SynthesisOpts::default()).unwrap();
    assert!(t.items.is_empty());
    assert!(t.audio_cues.is_empty());
    assert_eq!(t.total_duration, 0.0);
}

#[test]
fn two_slide_morph_lands_after_first_dwell() {
    let opts = SynthesisOpts::default();
    let slides = vec![
        SlideBuilder::new(2.0)
            .shape(rect("hero", 200.0, 200.0, 400.0, 300.0).fill("#123456"))
            .build()
            .unwrap(),
        SlideBuilder::new(2.0)
            .shape(rect("hero", 200.0, 200.0, 400.0, 300.0).fill("#123456"))
            .build()
            .unwrap(),
    ];
    let t = synthesize(&slides, &opts).unwrap();
    let ee = opts.timings.enter_exit_sec();
    assert!(approx_eq(start_of(&t, 0, "hero", AnimationKind::Enter), 0.0));
    assert!(approx_eq(start_of(&t, 1, "hero", AnimationKind::Morph), ee + 2.0));
    assert!(approx_eq(
        start_of(&t, 0, "hero", AnimationKind::Disappear),
        start_of(&t, 1, "hero", AnimationKind::MorphAppear)
    ));
    assert_eq!(t.items.len(), 2);
}

#[test]
fn caller_slides_are_untouched() {
    let slides = vec![
        SlideBuilder::new(1.0)
            .shape(rect("a", 0.0, 0.0, 100.0, 100.0))
            .shape(text("t", 10.0, 10.0, 80.0, "hello"))
            .build()
            .unwrap(),
    ];
    let before = slides.clone();
    synthesize(&slides, &SynthesisOpts::default()).unwrap();
    assert_eq!(slides, before);
}

#[test]
fn invalid_slide_is_a_validation_error() {
    let mut slide = SlideBuilder::new(1.0)
        .shape(rect("a", 0.0, 0.0, 10.0, 10.0))
        .build()
        .unwrap();
    slide.duration = -1.0;
    let err = synthesize(&[slide], &SynthesisOpts::default()).unwrap_err();
    assert!(matches!(err, MorphdeckError::Validation(_)));
    assert!(err.to_string().contains("slide 0"), "{err}");
}

#[test]
fn invalid_options_are_rejected() {
    let mut opts = SynthesisOpts::default();
    opts.timings.complete_slide_transition_sec = 0.0;
    let err = synthesize(&[], &opts).unwrap_err();
    assert!(err.is_user_facing());
}

struct TallText;

impl TextMeasure for TallText {
    fn text_height(&self, _text: &TextShape) -> f64 {
        1000.0
    }
}

#[test]
fn text_measure_drives_containment() {
    let slides = vec![
        SlideBuilder::new(1.0)
            .shape(rect("card", 0.0, 0.0, 400.0, 300.0))
            .shape(text("label", 10.0, 10.0, 200.0, "hi"))
            .build()
            .unwrap(),
    ];
    let opts = SynthesisOpts::default();
    let ee = opts.timings.enter_exit_sec();

    let estimated = synthesize(&slides, &opts).unwrap();
    assert!(approx_eq(
        start_of(&estimated, 0, "label", AnimationKind::Enter),
        ee
    ));

    let tall = synthesize_with_measure(&slides, &opts, &TallText).unwrap();
    assert!(approx_eq(start_of(&tall, 0, "label", AnimationKind::Enter), 0.0));
}

#[test]
fn audio_cue_follows_slide_start() {
    let slides = vec![
        SlideBuilder::new(3.0)
            .shape(rect("a", 0.0, 0.0, 10.0, 10.0))
            .audio("intro.mp3", None)
            .build()
            .unwrap(),
    ];
    let t = synthesize(&slides, &SynthesisOpts::default()).unwrap();
    assert_eq!(t.audio_cues.len(), 1);
    assert!(approx_eq(t.audio_cues[0].should_be_played_at, t.slides[0].start_time));
    assert_eq!(t.audio_cues[0].duration, 3.0);
}

#[test]
fn synthesis_runs_under_a_trace_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();
    let slides = vec![
        SlideBuilder::new(1.0)
            .shape(rect("a", 0.0, 0.0, 100.0, 100.0))
            .build()
            .unwrap(),
        SlideBuilder::new(1.0)
            .shape(rect("b", 10.0, 0.0, 100.0, 100.0))
            .build()
            .unwrap(),
    ];
    let t = tracing::subscriber::with_default(subscriber, || {
        synthesize(&slides, &SynthesisOpts::default()).unwrap()
    });
    assert_eq!(t.items.len(), 2);
}
