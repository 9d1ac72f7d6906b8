use crate::{
    compile::combine::Timeline,
    compile::fingerprint::{DeckFingerprint, fingerprint_deck},
    composition::model::Slide,
    foundation::error::{MorphdeckError, MorphdeckResult},
    pipeline::opts::SynthesisOpts,
    pipeline::synthesize::synthesize,
};

/// Holds the timeline of the last synthesized deck version.
///
/// Synthesis reruns only when the fingerprint of the slides plus options changes.
#[derive(Debug, Default)]
pub struct TimelineCache {
    entry: Option<(DeckFingerprint, Timeline)>,
    misses: u64,
}

impl TimelineCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached timeline for this deck version, synthesizing it first on a miss.
    ///
    /// A failed synthesis leaves the previous entry in place.
    pub fn get_or_synthesize(
        &mut self,
        slides: &[Slide],
        opts: &SynthesisOpts,
    ) -> MorphdeckResult<&Timeline> {
        let fp = fingerprint_deck(slides, opts)?;
        let hit = matches!(&self.entry, Some((cached, _)) if *cached == fp);
        if !hit {
            tracing::debug!(hi = fp.hi, lo = fp.lo, "timeline cache miss");
            let timeline = synthesize(slides, opts)?;
            self.misses += 1;
            self.entry = Some((fp, timeline));
        }
        self.entry
            .as_ref()
            .map(|(_, timeline)| timeline)
            .ok_or_else(|| MorphdeckError::synthesis("timeline cache lost its entry"))
    }

    /// Number of times synthesis actually ran.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drop the cached timeline.
    pub fn clear(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/cache.rs"]
mod tests;
