//! Lyric selection from pre-authored fragments.
//!
//! [`select_lyrics`] builds the lyric block embedded in lyrics-mode
//! prompts. [`sheet::render_lyric_sheet`] builds the longer, annotated
//! lyric sheet of the lyric generator.

pub mod fragments;
pub mod select;
pub mod sheet;

pub use select::{generic_lyrics, select_lyrics, select_lyrics_random};
pub use sheet::{render_lyric_sheet, LyricSheetRequest};

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniform indices for choosing among candidate fragments.
///
/// Closures `FnMut(usize) -> usize` implement this, so tests can pass a
/// fixed choice. Returned indices past the end are clamped to the last
/// candidate.
pub trait FragmentPicker {
    /// Pick an index in `0..candidates`. `candidates` is never zero.
    fn pick(&mut self, candidates: usize) -> usize;
}

impl<F> FragmentPicker for F
where
    F: FnMut(usize) -> usize,
{
    fn pick(&mut self, candidates: usize) -> usize {
        self(candidates)
    }
}

/// A [`FragmentPicker`] backed by a `rand` generator.
#[derive(Debug)]
pub struct RandomPicker<R = ThreadRng> {
    rng: R,
}

impl RandomPicker<ThreadRng> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomPicker<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPicker<StdRng> {
    /// A reproducible picker.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> FragmentPicker for RandomPicker<R> {
    fn pick(&mut self, candidates: usize) -> usize {
        self.rng.gen_range(0..candidates)
    }
}

/// Choose one of `candidates` through `picker`. `None` only when empty.
pub(crate) fn choose<'a, T>(candidates: &'a [T], picker: &mut dyn FragmentPicker) -> Option<&'a T> {
    match candidates.len() {
        0 => None,
        1 => candidates.first(),
        n => candidates.get(picker.pick(n).min(n - 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_clamps_out_of_range() {
        let items = ["a", "b", "c"];
        let mut picker = |_: usize| 99;
        assert_eq!(choose(&items, &mut picker), Some(&"c"));
    }

    #[test]
    fn test_choose_single_skips_picker() {
        let items = ["only"];
        let mut picker = |_: usize| -> usize { panic!("picker must not be called") };
        assert_eq!(choose(&items, &mut picker), Some(&"only"));
    }

    #[test]
    fn test_choose_empty() {
        let items: [&str; 0] = [];
        assert_eq!(choose(&items, &mut |_: usize| 0), None);
    }

    #[test]
    fn test_seeded_picker_is_reproducible() {
        let mut a = RandomPicker::seeded(7);
        let mut b = RandomPicker::seeded(7);
        let left: Vec<usize> = (0..16).map(|_| a.pick(5)).collect();
        let right: Vec<usize> = (0..16).map(|_| b.pick(5)).collect();
        assert_eq!(left, right);
        assert!(left.iter().all(|&i| i < 5));
    }
}
