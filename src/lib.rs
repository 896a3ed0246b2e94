//! Sortviz is a deterministic trace engine for animating sorting algorithms.
//!
//! Given an input sequence, each of the seven supported algorithms produces a
//! complete, ordered, replayable [`Trace`] of every comparison, swap, and
//! state transition it performs, suitable for frame-by-frame playback
//! (forward, backward, or skip-to-end) independent of wall-clock timing.
//!
//! # Pipeline overview
//!
//! 1. **Build**: raw values -> `Vec<Element>` (stable ids assigned once)
//! 2. **Generate**: `Algorithm + &[Element] -> Trace` (synchronous and total)
//! 3. **Play** (external): index `trace[k]` to obtain the full rendered state
//!    after step `k`
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: trace generation is pure and stable for a
//!   given input; random sequences are seeded.
//! - **Full snapshots, not diffs**: every [`Step`] stores a complete copy of
//!   the sequence, trading memory for trivial random-access playback.
//! - **Caller input is never mutated**: each run works on its own private
//!   working copy.
#![forbid(unsafe_code)]

mod algorithms;
mod foundation;
mod model;
mod sequence;
mod trace;

pub use algorithms::{generate_trace, sorting_steps};
pub use foundation::error::{SortvizError, SortvizResult};
pub use model::{
    Algorithm, AlgorithmInfo, Category, Element, ElementId, ElementState, TimeComplexity,
};
pub use sequence::{
    MAX_SEQUENCE_LEN, RANDOM_VALUE_RANGE, VALUE_RANGE, generate_random_sequence, parse_values,
    sequence_from_values,
};
pub use trace::{Recorder, Step, Trace, mark_sorted, reset_states};
