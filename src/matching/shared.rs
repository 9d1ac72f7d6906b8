use crate::{
    composition::staged::{SharedId, SharedIdAllocator, StagedSlide},
    foundation::core::Canvas,
    matching::score::rect_match_score,
};

/// One morph pairing across a slide boundary.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedLink {
    /// Token stamped on both ends.
    pub id: SharedId,
    /// Shape position on the earlier slide.
    pub from: usize,
    /// Shape position on the later slide.
    pub to: usize,
    /// Score the pairing was chosen with.
    pub score: f64,
}

#[derive(Clone, Copy, Debug)]
struct Candidate {
    to: usize,
    score: f64,
}

#[derive(Debug)]
struct Entry {
    from: usize,
    // Best first.
    candidates: Vec<Candidate>,
}

impl Entry {
    fn best_score(&self) -> f64 {
        self.candidates
            .first()
            .map_or(f64::NEG_INFINITY, |c| c.score)
    }
}

/// Pair rectangles on `prev` with rectangles on `next`.
///
/// Greedy: each round the source rectangle whose best remaining candidate scores highest takes
/// that candidate, which is then withdrawn from every other source. Sorting is stable, so equal
/// scores resolve in z-order. Candidates below `min_score` are never considered.
pub fn match_shared_elements(
    prev: &StagedSlide,
    next: &StagedSlide,
    stage: Canvas,
    min_score: Option<f64>,
    ids: &mut SharedIdAllocator,
) -> Vec<SharedLink> {
    let targets: Vec<usize> = next
        .shapes
        .iter()
        .enumerate()
        .filter(|(_, s)| s.shape.as_rect().is_some())
        .map(|(i, _)| i)
        .collect();

    let mut entries: Vec<Entry> = prev
        .shapes
        .iter()
        .enumerate()
        .filter(|(_, s)| s.shape.as_rect().is_some())
        .map(|(from, source)| {
            let mut candidates: Vec<Candidate> = targets
                .iter()
                .map(|&to| Candidate {
                    to,
                    score: rect_match_score(source.bounds, next.shapes[to].bounds, stage),
                })
                .filter(|c| min_score.is_none_or(|min| c.score >= min))
                .collect();
            candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
            for c in &candidates {
                tracing::trace!(
                    from = source.shape.id(),
                    to = next.shapes[c.to].shape.id(),
                    score = c.score,
                    "rect match candidate"
                );
            }
            Entry { from, candidates }
        })
        .filter(|e| !e.candidates.is_empty())
        .collect();

    let mut links = Vec::new();
    while !entries.is_empty() {
        entries.sort_by(|a, b| b.best_score().total_cmp(&a.best_score()));
        let winner = entries.remove(0);
        let best = winner.candidates[0];

        let link = SharedLink {
            id: ids.allocate(),
            from: winner.from,
            to: best.to,
            score: best.score,
        };
        tracing::debug!(
            slide = prev.index,
            from = prev.shapes[link.from].shape.id(),
            to = next.shapes[link.to].shape.id(),
            score = link.score,
            shared_id = link.id.0,
            "shared element linked"
        );
        links.push(link);

        for entry in &mut entries {
            entry.candidates.retain(|c| c.to != best.to);
        }
        entries.retain(|e| !e.candidates.is_empty());
    }
    links
}

/// Stage: link rectangles across every adjacent slide pair.
///
/// Each boundary is matched independently; a rectangle can carry one incoming and one outgoing
/// link, so reuse chains across more than two slides.
pub fn link_shared_elements(
    mut slides: Vec<StagedSlide>,
    stage: Canvas,
    min_score: Option<f64>,
) -> Vec<StagedSlide> {
    let mut ids = SharedIdAllocator::default();
    for i in 1..slides.len() {
        let links = match_shared_elements(&slides[i - 1], &slides[i], stage, min_score, &mut ids);
        for link in links {
            slides[i - 1].shapes[link.from].attrs.shared_out = Some(link.id);
            slides[i].shapes[link.to].attrs.shared_in = Some(link.id);
        }
    }
    slides
}

#[cfg(test)]
#[path = "../../tests/unit/matching/shared.rs"]
mod tests;
