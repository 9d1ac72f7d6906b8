use crate::foundation::core::{Canvas, Rect};

/// Stage edge a shape reveals from and hides toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    /// Left stage edge.
    Left,
    /// Right stage edge.
    Right,
    /// Top stage edge.
    Top,
    /// Bottom stage edge.
    Bottom,
}

impl Edge {
    /// Tie-break order for [`closest_edge`].
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// True for left/right.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Distance from `rect` to `edge` of the stage. Negative when the rect overhangs that edge.
pub fn edge_distance(rect: Rect, edge: Edge, stage: Canvas) -> f64 {
    match edge {
        Edge::Left => rect.x0,
        Edge::Right => stage.width_f64() - rect.x1,
        Edge::Top => rect.y0,
        Edge::Bottom => stage.height_f64() - rect.y1,
    }
}

/// Stage edge nearest to `rect`; the first edge in [`Edge::ALL`] wins ties.
pub fn closest_edge(rect: Rect, stage: Canvas) -> Edge {
    let mut best = Edge::Left;
    let mut best_dist = edge_distance(rect, Edge::Left, stage);
    for edge in &Edge::ALL[1..] {
        let d = edge_distance(rect, *edge, stage);
        if d < best_dist {
            best = *edge;
            best_dist = d;
        }
    }
    best
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/edges.rs"]
mod tests;
