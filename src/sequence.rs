//! Sequence construction: raw values, seeded random generation, and parsing
//! of user-entered text.

use crate::foundation::error::{SortvizError, SortvizResult};
use crate::model::{Element, ElementId};

/// Maximum number of elements accepted from parsed input.
pub const MAX_SEQUENCE_LEN: usize = 100;

/// Inclusive value range accepted from parsed input.
pub const VALUE_RANGE: std::ops::RangeInclusive<u32> = 1..=500;

/// Inclusive value range produced by [`generate_random_sequence`].
pub const RANDOM_VALUE_RANGE: std::ops::RangeInclusive<u32> = 10..=310;

/// Build a sequence from raw values, assigning ids `0..n` in position order.
pub fn sequence_from_values(values: &[u32]) -> Vec<Element> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Element::new(ElementId(i as u32), v))
        .collect()
}

// SplitMix64 mixing function.
fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Deterministic pseudo-random sequence of `len` elements with values in
/// [`RANDOM_VALUE_RANGE`].
///
/// The same `(len, seed)` pair always yields the same sequence, keeping trace
/// generation reproducible end to end.
pub fn generate_random_sequence(len: usize, seed: u64) -> Vec<Element> {
    let span = RANDOM_VALUE_RANGE.end() - RANDOM_VALUE_RANGE.start() + 1;
    let mut state = seed;
    (0..len)
        .map(|i| {
            state = mix64(state.wrapping_add(0x9E37_79B9_7F4A_7C15));
            let value = RANDOM_VALUE_RANGE.start() + (state % u64::from(span)) as u32;
            Element::new(ElementId(i as u32), value)
        })
        .collect()
}

/// Parse user-entered text into sorting values.
///
/// Splits on commas and whitespace, keeps integers inside [`VALUE_RANGE`],
/// and caps the result at [`MAX_SEQUENCE_LEN`] entries. Empty input or fewer
/// than two usable values is a validation error.
pub fn parse_values(input: &str) -> SortvizResult<Vec<u32>> {
    if input.trim().is_empty() {
        return Err(SortvizError::validation("please enter some numbers"));
    }

    let values: Vec<u32> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .filter_map(|tok| tok.parse::<u32>().ok())
        .filter(|v| VALUE_RANGE.contains(v))
        .take(MAX_SEQUENCE_LEN)
        .collect();

    if values.is_empty() {
        return Err(SortvizError::validation(
            "please enter valid numbers (1-500)",
        ));
    }
    if values.len() < 2 {
        return Err(SortvizError::validation("please enter at least 2 numbers"));
    }

    Ok(values)
}
