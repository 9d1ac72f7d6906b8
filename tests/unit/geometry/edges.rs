use super::*;

fn stage() -> Canvas {
    Canvas {
        width: 1000,
        height: 500,
    }
}

#[test]
fn picks_nearest_edge() {
    assert_eq!(closest_edge(Rect::new(10.0, 200.0, 60.0, 250.0), stage()), Edge::Left);
    assert_eq!(closest_edge(Rect::new(900.0, 200.0, 990.0, 250.0), stage()), Edge::Right);
    assert_eq!(closest_edge(Rect::new(400.0, 5.0, 600.0, 100.0), stage()), Edge::Top);
    assert_eq!(closest_edge(Rect::new(400.0, 300.0, 600.0, 498.0), stage()), Edge::Bottom);
}

#[test]
fn ties_follow_left_right_top_bottom() {
    // Full-stage rect touches every edge.
    assert_eq!(closest_edge(stage().rect(), stage()), Edge::Left);
    // Equidistant from right and top.
    assert_eq!(closest_edge(Rect::new(400.0, 20.0, 980.0, 300.0), stage()), Edge::Right);
    // Equidistant from top and bottom only.
    assert_eq!(closest_edge(Rect::new(300.0, 100.0, 700.0, 400.0), stage()), Edge::Top);
}

#[test]
fn overhang_counts_as_closer() {
    assert_eq!(closest_edge(Rect::new(100.0, -20.0, 300.0, 80.0), stage()), Edge::Top);
    assert!(edge_distance(Rect::new(100.0, -20.0, 300.0, 80.0), Edge::Top, stage()) < 0.0);
}

#[test]
fn horizontal_edges_are_left_and_right() {
    let horizontal: Vec<Edge> = Edge::ALL.into_iter().filter(|e| e.is_horizontal()).collect();
    assert_eq!(horizontal, vec![Edge::Left, Edge::Right]);
}
