use crate::{
    foundation::core::{Canvas, Rect},
    foundation::math::ratio_of_min_max,
};

/// Similarity of two rectangles on a stage; `1.0` for identical rects, negative when they sit
/// far apart relative to the stage.
///
/// Mean of a size term (per-axis `min/max` extent ratio) and a position term. The position term
/// rewards a shared edge on each axis: it uses whichever of the two edge alignments
/// (left/left or right/right, top/top or bottom/bottom) is closer, normalised by half the stage
/// dimension.
pub fn rect_match_score(a: Rect, b: Rect, stage: Canvas) -> f64 {
    let size = (ratio_of_min_max(a.width(), b.width()) + ratio_of_min_max(a.height(), b.height()))
        / 2.0;

    let dx = (a.x0 - b.x0).abs().min((a.x1 - b.x1).abs());
    let dy = (a.y0 - b.y0).abs().min((a.y1 - b.y1).abs());
    let pos_x = 1.0 - dx / (stage.width_f64() / 2.0);
    let pos_y = 1.0 - dy / (stage.height_f64() / 2.0);
    let position = (pos_x + pos_y) / 2.0;

    (size + position) / 2.0
}

#[cfg(test)]
#[path = "../../tests/unit/matching/score.rs"]
mod tests;
