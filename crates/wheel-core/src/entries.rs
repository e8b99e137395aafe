//! Entry parsing and shuffling.
//!
//! Raw input is free text: entries may be separated by commas, newlines,
//! carriage returns, or any mix of them. Order is preserved and duplicates
//! are kept, since slice position follows list position.

use rand::Rng;
use rand::seq::SliceRandom;

/// Split raw text into trimmed, non-empty labels.
pub fn parse_entries(input: &str) -> Vec<String> {
    input
        .split([',', '\n', '\r'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Uniform in-place Fisher–Yates permutation.
pub fn shuffle_entries<R: Rng + ?Sized>(entries: &mut [String], rng: &mut R) {
    entries.shuffle(rng);
}
