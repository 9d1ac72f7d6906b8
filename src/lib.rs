//! Morphdeck synthesizes slide-to-slide transition animations for a slide deck.
//!
//! Given ordered slides of positioned shapes, the engine decides which rectangles are reused
//! across adjacent slides (and morph), which shapes enter or exit (revealed from the nearest
//! stage edge), in what order entering shapes appear, and when every animation starts on one
//! presentation clock. The output is a flat [`Timeline`] a playback layer can tween directly.
//!
//! The work runs as a chain of stages, each taking owned data and returning new data:
//!
//! - [`stage_slides`]: clone shapes and compute effective bounds
//! - [`link_shared_elements`]: greedy rectangle matching across slide boundaries
//! - [`resolve_containers`]: find the shape each text block sits inside
//! - [`schedule_enter_delays`]: stagger entering shapes largest-first
//! - [`synthesize_variants`]: pick each shape's animation sequence
//! - [`compile_timeline`]: stamp absolute start times
//! - [`combine`]: flatten into the hand-off structure
//!
//! [`synthesize`] runs the whole chain; [`TimelineCache`] reruns it only when the deck changes.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod compile;
pub(crate) mod composition;
pub(crate) mod geometry;
pub(crate) mod matching;
pub(crate) mod pipeline;
pub(crate) mod scheduling;

pub use crate::foundation::core::{Canvas, Point, Rect, Size};
pub use crate::foundation::error::{MorphdeckError, MorphdeckResult};
pub use crate::foundation::math::{TIME_EPSILON, approx_eq};

pub use crate::animation::ease::Ease;
pub use crate::animation::model::{
    Animation, AnimationKind, AnimationStep, Property, PropertyMap, PropertyTween, PropertyValue,
};
pub use crate::animation::variants::{SlidePlan, reveal_edge, synthesize_variants};
pub use crate::compile::combine::{
    AudioCue, CombinedAnimationItem, SlideTiming, Timeline, combine,
};
pub use crate::compile::fingerprint::{DeckFingerprint, fingerprint_deck};
pub use crate::compile::timeline::{ScheduledShape, ScheduledSlide, compile_timeline};
pub use crate::composition::dsl::{SlideBuilder, image, rect, text, video};
pub use crate::composition::model::{
    ImageShape, RectShape, Shape, ShapeKind, Slide, SlideAudio, TextShape, VideoShape,
    validate_slides,
};
pub use crate::composition::staged::{
    AnimationAttributes, SharedId, SharedIdAllocator, StagedShape, StagedSlide,
    resolve_morph_source, stage_slides,
};
pub use crate::geometry::bounds::{EstimatedTextMeasure, TextMeasure, effective_rect};
pub use crate::geometry::edges::{Edge, closest_edge, edge_distance};
pub use crate::matching::score::rect_match_score;
pub use crate::matching::shared::{SharedLink, link_shared_elements, match_shared_elements};
pub use crate::pipeline::cache::TimelineCache;
pub use crate::pipeline::opts::{SynthesisOpts, TransitionTimings};
pub use crate::pipeline::synthesize::{synthesize, synthesize_with_measure};
pub use crate::scheduling::containers::{find_container, resolve_containers};
pub use crate::scheduling::delays::schedule_enter_delays;
