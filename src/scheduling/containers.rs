use crate::composition::staged::StagedSlide;

/// Position of the shape that visually contains the text at `text_pos`, if any.
///
/// Only shapes drawn earlier (beneath the text) are considered, topmost first. The first
/// non-text shape covering at least `coverage` of the text's area wins.
pub fn find_container(slide: &StagedSlide, text_pos: usize, coverage: f64) -> Option<usize> {
    let text = slide.shapes.get(text_pos)?;
    if !text.shape.is_text() {
        return None;
    }
    let text_area = text.bounds.area();
    if text_area <= 0.0 {
        return None;
    }
    (0..text_pos).rev().find(|&j| {
        let candidate = &slide.shapes[j];
        !candidate.shape.is_text()
            && candidate.bounds.intersect(text.bounds).area() / text_area >= coverage
    })
}

/// Stage: record `container_id` on every text that sits inside another shape.
pub fn resolve_containers(mut slides: Vec<StagedSlide>, coverage: f64) -> Vec<StagedSlide> {
    for slide in &mut slides {
        for pos in 0..slide.shapes.len() {
            let Some(container) = find_container(slide, pos, coverage) else {
                continue;
            };
            let container_id = slide.shapes[container].shape.id().to_string();
            tracing::debug!(
                slide = slide.index,
                text = slide.shapes[pos].shape.id(),
                container = container_id.as_str(),
                "text container resolved"
            );
            slide.shapes[pos].attrs.container_id = Some(container_id);
        }
    }
    slides
}

#[cfg(test)]
#[path = "../../tests/unit/scheduling/containers.rs"]
mod tests;
