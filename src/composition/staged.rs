use crate::{
    composition::model::{Shape, Slide, SlideAudio},
    foundation::core::Rect,
    foundation::error::{MorphdeckError, MorphdeckResult},
    geometry::bounds::{TextMeasure, effective_rect},
};

/// Opaque token linking one rectangle to its reused counterpart on the next slide.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SharedId(pub u32);

/// Hands out [`SharedId`]s in allocation order, one allocator per synthesis run.
#[derive(Debug, Default)]
pub struct SharedIdAllocator {
    next: u32,
}

impl SharedIdAllocator {
    /// Next unused token.
    pub fn allocate(&mut self) -> SharedId {
        let id = SharedId(self.next);
        self.next += 1;
        id
    }
}

/// Engine-side annotations for one shape instance.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationAttributes {
    /// Link to the rectangle this one morphs from on the previous slide.
    pub shared_in: Option<SharedId>,
    /// Link to the rectangle this one morphs into on the next slide.
    pub shared_out: Option<SharedId>,
    /// Id of the non-text shape this text sits inside.
    pub container_id: Option<String>,
    /// Stagger before this shape's own enter segment, in seconds.
    pub enter_delay: Option<f64>,
}

impl AnimationAttributes {
    /// Shape gets a reveal of its own rather than morphing in.
    pub fn enters(&self) -> bool {
        self.shared_in.is_none()
    }

    /// Shape hides on its own rather than handing off to a morph target.
    pub fn exits(&self) -> bool {
        self.shared_out.is_none()
    }
}

/// A shape plus the geometry and attributes computed for it so far.
#[derive(Clone, Debug, PartialEq)]
pub struct StagedShape {
    /// Caller's shape, cloned.
    pub shape: Shape,
    /// Effective bounding rectangle.
    pub bounds: Rect,
    /// Attributes accumulated by the pipeline stages.
    pub attrs: AnimationAttributes,
}

/// A slide as it flows through the synthesis stages.
#[derive(Clone, Debug, PartialEq)]
pub struct StagedSlide {
    /// Position in the deck.
    pub index: usize,
    /// Shapes in z-order.
    pub shapes: Vec<StagedShape>,
    /// Fully visible dwell time in seconds.
    pub duration: f64,
    /// Audio cue copied from the input slide.
    pub audio: Option<SlideAudio>,
}

impl StagedSlide {
    /// Position of the shape with `id`.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.shapes.iter().position(|s| s.shape.id() == id)
    }

    /// Shape carrying `shared_out == id`, i.e. the morph source for a link.
    pub fn morph_source(&self, id: SharedId) -> Option<&StagedShape> {
        self.shapes.iter().find(|s| s.attrs.shared_out == Some(id))
    }
}

/// Clone the caller's slides into staged form with effective bounds and empty attributes.
pub fn stage_slides(slides: &[Slide], measure: &dyn TextMeasure) -> Vec<StagedSlide> {
    slides
        .iter()
        .enumerate()
        .map(|(index, slide)| StagedSlide {
            index,
            shapes: slide
                .shapes
                .iter()
                .map(|shape| StagedShape {
                    bounds: effective_rect(shape, measure),
                    shape: shape.clone(),
                    attrs: AnimationAttributes::default(),
                })
                .collect(),
            duration: slide.duration,
            audio: slide.audio.clone(),
        })
        .collect()
}

/// Resolve the rectangle a morph target was matched with on the previous slide.
///
/// Both ends of a link must be rectangles and the source must exist; anything else means the
/// matcher produced an inconsistent link.
pub fn resolve_morph_source<'a>(
    prev: Option<&'a StagedSlide>,
    target: &StagedShape,
) -> MorphdeckResult<Option<&'a StagedShape>> {
    let Some(id) = target.attrs.shared_in else {
        return Ok(None);
    };
    let prev = prev.ok_or_else(|| {
        MorphdeckError::synthesis(format!(
            "shape '{}' has a morph link but no previous slide",
            target.shape.id()
        ))
    })?;
    let source = prev.morph_source(id).ok_or_else(|| {
        MorphdeckError::synthesis(format!(
            "shape '{}' links to shared id {} missing from slide {}",
            target.shape.id(),
            id.0,
            prev.index
        ))
    })?;
    if source.shape.as_rect().is_none() || target.shape.as_rect().is_none() {
        return Err(MorphdeckError::synthesis(format!(
            "shared id {} links non-rect shapes ('{}' -> '{}')",
            id.0,
            source.shape.id(),
            target.shape.id()
        )));
    }
    Ok(Some(source))
}

#[cfg(test)]
#[path = "../../tests/unit/composition/staged.rs"]
mod tests;
