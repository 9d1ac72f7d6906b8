use super::*;

fn stage() -> Canvas {
    Canvas {
        width: 1000,
        height: 500,
    }
}

#[test]
fn identical_rects_score_one() {
    let r = Rect::new(10.0, 20.0, 110.0, 70.0);
    assert_eq!(rect_match_score(r, r, stage()), 1.0);
}

#[test]
fn score_is_symmetric() {
    let rects = [
        Rect::new(0.0, 0.0, 100.0, 100.0),
        Rect::new(50.0, 10.0, 90.0, 300.0),
        Rect::new(900.0, 400.0, 1000.0, 500.0),
        Rect::new(-40.0, 0.0, 0.0, 0.0),
    ];
    for a in rects {
        for b in rects {
            assert_eq!(rect_match_score(a, b, stage()), rect_match_score(b, a, stage()));
        }
    }
}

#[test]
fn shared_edge_beats_shared_center() {
    let base = Rect::new(0.0, 0.0, 200.0, 100.0);
    // Same left/top edges, narrower.
    let edge_aligned = Rect::new(0.0, 0.0, 100.0, 100.0);
    // Same center, narrower: neither horizontal edge lines up.
    let centered = Rect::new(50.0, 0.0, 150.0, 100.0);
    assert!(
        rect_match_score(base, edge_aligned, stage()) > rect_match_score(base, centered, stage())
    );
}

#[test]
fn size_and_position_terms_combine_as_mean() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(0.0, 0.0, 50.0, 100.0);
    // size = (0.5 + 1) / 2, position = 1 (left and top edges align).
    assert!((rect_match_score(a, b, stage()) - 0.875).abs() < 1e-12);
}

#[test]
fn distant_rects_can_score_negative() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5000.0, 5000.0, 5400.0, 5400.0);
    assert!(rect_match_score(a, b, stage()) < 0.0);
}
