use super::*;

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 1080).is_err());
    assert!(Canvas::new(1920, 0).is_err());
    assert!(Canvas::new(1920, 1080).is_ok());
}

#[test]
fn canvas_rect_spans_stage() {
    let stage = Canvas::new(800, 600).unwrap();
    let r = stage.rect();
    assert_eq!(r.x0, 0.0);
    assert_eq!(r.y0, 0.0);
    assert_eq!(r.width(), 800.0);
    assert_eq!(r.height(), 600.0);
}

#[test]
fn default_stage_is_full_hd() {
    assert_eq!(Canvas::default(), Canvas { width: 1920, height: 1080 });
}
