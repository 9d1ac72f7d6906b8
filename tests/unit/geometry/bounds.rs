use super::*;
use crate::composition::dsl::{rect, text, video};

#[test]
fn non_text_shapes_use_stored_size() {
    let m = EstimatedTextMeasure::default();
    let r = effective_rect(&rect("r", 10.0, 20.0, 30.0, 40.0).into(), &m);
    assert_eq!(r, Rect::new(10.0, 20.0, 40.0, 60.0));
    let v = effective_rect(&video("v", 0.0, 0.0, 64.0, 36.0, "v.mp4").into(), &m);
    assert_eq!(v.area(), 64.0 * 36.0);
}

#[test]
fn estimated_text_wraps_per_paragraph() {
    let m = EstimatedTextMeasure::default();
    // 20px font -> 10px advance -> 10 glyphs per 100px line.
    let one_line = text("t", 0.0, 0.0, 100.0, "0123456789").font_size(20.0).line_height(1.0);
    assert_eq!(m.text_height(&one_line), 20.0);

    let wrapped = text("t", 0.0, 0.0, 100.0, "0123456789A").font_size(20.0).line_height(1.0);
    assert_eq!(m.text_height(&wrapped), 40.0);

    let paragraphs = text("t", 0.0, 0.0, 100.0, "a\n\nb").font_size(20.0).line_height(1.5);
    assert_eq!(m.text_height(&paragraphs), 90.0);
}

#[test]
fn custom_measure_drives_text_rect() {
    struct Fixed;
    impl TextMeasure for Fixed {
        fn text_height(&self, _text: &TextShape) -> f64 {
            12.5
        }
    }
    let r = effective_rect(&text("t", 5.0, 5.0, 50.0, "anything").into(), &Fixed);
    assert_eq!(r, Rect::new(5.0, 5.0, 55.0, 17.5));
}
