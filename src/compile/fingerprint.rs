use std::io;

use xxhash_rust::xxh3::Xxh3;

use crate::{
    composition::model::Slide, foundation::error::MorphdeckResult,
    pipeline::opts::SynthesisOpts,
};

const XXH3_SEED: u64 = 0x6d6f_7270_6864_6563;

/// Stable 128-bit identity of a deck version plus the options it is synthesized with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct DeckFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

/// Hash the JSON encoding of `slides` and `opts`.
///
/// Two decks that serialize identically get the same fingerprint, so callers can skip
/// re-synthesis when nothing observable changed.
pub fn fingerprint_deck(slides: &[Slide], opts: &SynthesisOpts) -> MorphdeckResult<DeckFingerprint> {
    let mut h = StableHasher::new();
    h.write_section(b"slides");
    serde_json::to_writer(&mut h, slides)?;
    h.write_section(b"opts");
    serde_json::to_writer(&mut h, opts)?;
    Ok(h.finish())
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_section(&mut self, tag: &[u8]) {
        self.inner.update(&(tag.len() as u64).to_le_bytes());
        self.inner.update(tag);
    }

    fn finish(self) -> DeckFingerprint {
        let v = self.inner.digest128();
        DeckFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

impl io::Write for StableHasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/fingerprint.rs"]
mod tests;
