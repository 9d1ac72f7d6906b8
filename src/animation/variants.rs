use crate::{
    animation::ease::Ease,
    animation::model::{AnimationKind, AnimationStep, Property, PropertyMap, PropertyTween},
    composition::model::Shape,
    composition::staged::{StagedShape, StagedSlide, resolve_morph_source},
    foundation::error::MorphdeckResult,
    geometry::edges::{Edge, closest_edge},
    pipeline::opts::SynthesisOpts,
};

/// Unscheduled animation steps for every shape of one slide, in z-order.
#[derive(Clone, Debug, PartialEq)]
pub struct SlidePlan {
    /// Slide position in the deck.
    pub index: usize,
    /// Steps per shape, parallel to the staged slide's shapes.
    pub shapes: Vec<Vec<AnimationStep>>,
}

impl SlidePlan {
    /// True if any shape on the slide has a step of `kind`.
    pub fn has(&self, kind: AnimationKind) -> bool {
        self.shapes
            .iter()
            .any(|steps| steps.iter().any(|s| s.kind == kind))
    }
}

/// Stage: decide each shape's animation sequence.
///
/// Every sequence opens with `appear` (or `morphAppear` for a morph target) and closes with
/// `disappear`. New shapes add an `enter` after the opener, morph targets a `morph` (followed by
/// an `enter` when `morph_targets_slide_in` is set); shapes that are not handed to a successor
/// add an `exit` before the closer.
pub fn synthesize_variants(
    slides: &[StagedSlide],
    opts: &SynthesisOpts,
) -> MorphdeckResult<Vec<SlidePlan>> {
    let mut plans = Vec::with_capacity(slides.len());
    for (i, slide) in slides.iter().enumerate() {
        let prev = i.checked_sub(1).map(|p| &slides[p]);
        let shapes = slide
            .shapes
            .iter()
            .map(|shape| plan_shape(prev, slide, shape, opts))
            .collect::<MorphdeckResult<Vec<_>>>()?;
        plans.push(SlidePlan {
            index: slide.index,
            shapes,
        });
    }
    Ok(plans)
}

fn plan_shape(
    prev: Option<&StagedSlide>,
    slide: &StagedSlide,
    shape: &StagedShape,
    opts: &SynthesisOpts,
) -> MorphdeckResult<Vec<AnimationStep>> {
    let mut steps = Vec::with_capacity(5);
    match resolve_morph_source(prev, shape)? {
        Some(source) => {
            steps.push(toggle(AnimationKind::MorphAppear, opts));
            steps.push(morph(source, shape, opts));
            if opts.morph_targets_slide_in {
                steps.push(enter(slide, shape, opts));
            }
        }
        None => {
            steps.push(toggle(AnimationKind::Appear, opts));
            steps.push(enter(slide, shape, opts));
        }
    }

    if shape.attrs.exits() {
        let edge = reveal_edge(slide, shape, opts);
        steps.push(AnimationStep {
            kind: AnimationKind::Exit,
            duration: opts.timings.enter_exit_sec(),
            ease: opts.reveal_ease.mirror(),
            group: Some(PropertyTween::between(
                full_clip(shape),
                collapsed_clip(shape, edge),
            )),
            node: None,
        });
    }
    steps.push(toggle(AnimationKind::Disappear, opts));
    Ok(steps)
}

/// Edge a shape reveals from: its own nearest stage edge, or its container's for contained text.
pub fn reveal_edge(slide: &StagedSlide, shape: &StagedShape, opts: &SynthesisOpts) -> Edge {
    let container = shape
        .attrs
        .container_id
        .as_deref()
        .and_then(|id| slide.position_of(id))
        .map(|pos| &slide.shapes[pos]);
    let bounds = container.map_or(shape.bounds, |c| c.bounds);
    closest_edge(bounds, opts.stage)
}

fn enter(slide: &StagedSlide, shape: &StagedShape, opts: &SynthesisOpts) -> AnimationStep {
    let edge = reveal_edge(slide, shape, opts);
    AnimationStep {
        kind: AnimationKind::Enter,
        duration: opts.timings.enter_exit_sec(),
        ease: opts.reveal_ease,
        group: Some(PropertyTween::between(
            collapsed_clip(shape, edge),
            full_clip(shape),
        )),
        node: None,
    }
}

fn toggle(kind: AnimationKind, opts: &SynthesisOpts) -> AnimationStep {
    let (from, to) = if kind == AnimationKind::Disappear {
        (1.0, 0.0)
    } else {
        (0.0, 1.0)
    };
    AnimationStep {
        kind,
        duration: opts.visibility_toggle_sec,
        ease: Ease::Linear,
        group: Some(PropertyTween::between(
            PropertyMap::from([(Property::Opacity, from.into())]),
            PropertyMap::from([(Property::Opacity, to.into())]),
        )),
        node: None,
    }
}

fn clip(x: f64, y: f64, w: f64, h: f64) -> PropertyMap {
    PropertyMap::from([
        (Property::ClipX, x.into()),
        (Property::ClipY, y.into()),
        (Property::ClipWidth, w.into()),
        (Property::ClipHeight, h.into()),
    ])
}

fn full_clip(shape: &StagedShape) -> PropertyMap {
    clip(0.0, 0.0, shape.bounds.width(), shape.bounds.height())
}

fn collapsed_clip(shape: &StagedShape, edge: Edge) -> PropertyMap {
    let (w, h) = (shape.bounds.width(), shape.bounds.height());
    let (x, y) = match edge {
        Edge::Right => (w, 0.0),
        Edge::Bottom => (0.0, h),
        Edge::Left | Edge::Top => (0.0, 0.0),
    };
    if edge.is_horizontal() {
        clip(x, y, 0.0, h)
    } else {
        clip(x, y, w, 0.0)
    }
}

fn morph(source: &StagedShape, target: &StagedShape, opts: &SynthesisOpts) -> AnimationStep {
    let group_at = |s: &StagedShape| {
        let mut m = clip(0.0, 0.0, s.bounds.width(), s.bounds.height());
        m.insert(Property::X, s.bounds.x0.into());
        m.insert(Property::Y, s.bounds.y0.into());
        m
    };

    let mut node_from = PropertyMap::from([
        (Property::Width, source.bounds.width().into()),
        (Property::Height, source.bounds.height().into()),
    ]);
    let mut node_to = PropertyMap::from([
        (Property::Width, target.bounds.width().into()),
        (Property::Height, target.bounds.height().into()),
    ]);
    if let (Some(from_fill), Some(to_fill)) = (fill_of(&source.shape), fill_of(&target.shape)) {
        node_from.insert(Property::Fill, from_fill.into());
        node_to.insert(Property::Fill, to_fill.into());
    }

    AnimationStep {
        kind: AnimationKind::Morph,
        duration: opts.timings.morph_sec(),
        ease: opts.morph_ease,
        group: Some(PropertyTween::between(group_at(source), group_at(target))),
        node: Some(PropertyTween::between(node_from, node_to)),
    }
}

fn fill_of(shape: &Shape) -> Option<&str> {
    shape.as_rect().and_then(|r| r.fill.as_deref())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/variants.rs"]
mod tests;
