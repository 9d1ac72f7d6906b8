use crate::composition::staged::StagedSlide;

/// Stage: stagger entering shapes largest-first and chain contained text after its container.
///
/// Every shape without an incoming morph link is ranked by area (descending, ties in z-order)
/// and gets `rank * stagger_sec`. With `morph_targets_slide_in`, morph targets are ranked too,
/// since they get an enter of their own after the morph. A text with a container then takes the container's delay plus
/// `enter_exit_sec`, so it starts revealing once the container is fully in.
pub fn schedule_enter_delays(
    mut slides: Vec<StagedSlide>,
    stagger_sec: f64,
    enter_exit_sec: f64,
    morph_targets_slide_in: bool,
) -> Vec<StagedSlide> {
    for slide in &mut slides {
        let mut entering: Vec<usize> = (0..slide.shapes.len())
            .filter(|&i| morph_targets_slide_in || slide.shapes[i].attrs.enters())
            .collect();
        entering.sort_by(|&a, &b| {
            slide.shapes[b].bounds.area().total_cmp(&slide.shapes[a].bounds.area())
        });
        for (rank, &pos) in entering.iter().enumerate() {
            slide.shapes[pos].attrs.enter_delay = Some(rank as f64 * stagger_sec);
        }

        for pos in 0..slide.shapes.len() {
            let Some(container_id) = slide.shapes[pos].attrs.container_id.as_deref() else {
                continue;
            };
            let container_delay = slide
                .position_of(container_id)
                .and_then(|c| slide.shapes[c].attrs.enter_delay)
                .unwrap_or(0.0);
            slide.shapes[pos].attrs.enter_delay = Some(container_delay + enter_exit_sec);
        }

        for shape in &slide.shapes {
            if let Some(delay) = shape.attrs.enter_delay {
                tracing::trace!(
                    slide = slide.index,
                    shape = shape.shape.id(),
                    delay,
                    "enter delay"
                );
            }
        }
    }
    slides
}

#[cfg(test)]
#[path = "../../tests/unit/scheduling/delays.rs"]
mod tests;
