//! The seven trace-generating sort implementations and their dispatcher.
//!
//! Every implementation follows the same shape:
//!
//! 1. Emit a "starting" step before any work.
//! 2. Work on a private copy of the input (states reset to default), so the
//!    caller's sequence is never mutated.
//! 3. Mark a position sorted as soon as it is known final; the marking stays
//!    visible in every subsequent step.
//! 4. Emit a "completed" step as the final trace entry.
//!
//! Swaps are value-level exchanges of the elements held at two positions;
//! `id` and `value` always travel together.

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod radix;
mod selection;

use crate::model::{Algorithm, Element};
use crate::trace::Trace;

/// Generate the full playback trace for one algorithm over one input.
///
/// The computation is synchronous and total: the whole trace is materialized
/// before returning. Degenerate inputs (length 0 or 1) still produce the
/// start/complete steps.
#[tracing::instrument(skip(elements), fields(n = elements.len()))]
pub fn generate_trace(algorithm: Algorithm, elements: &[Element]) -> Trace {
    let trace = match algorithm {
        Algorithm::Bubble => bubble::run(elements),
        Algorithm::Selection => selection::run(elements),
        Algorithm::Insertion => insertion::run(elements),
        Algorithm::Merge => merge::run(elements),
        Algorithm::Quick => quick::run(elements),
        Algorithm::Heap => heap::run(elements),
        Algorithm::Radix => radix::run(elements),
    };
    tracing::debug!(steps = trace.len(), "trace generated");
    trace
}

/// String-keyed entry point: an unrecognized selector yields an empty trace
/// rather than an error. Callers treat a zero-length trace as "nothing to
/// play".
pub fn sorting_steps(selector: &str, elements: &[Element]) -> Trace {
    match Algorithm::from_selector(selector) {
        Some(algorithm) => generate_trace(algorithm, elements),
        None => Trace::default(),
    }
}
