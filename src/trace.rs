//! Trace recording: immutable step snapshots and the per-run recorder.
//!
//! A sorting run produces a [`Trace`]: an append-only sequence of [`Step`]s,
//! each holding a full copy of the element sequence at that instant. Storing
//! full snapshots instead of diffs trades memory for trivially random-access
//! playback: any index into the trace is a complete, self-sufficient render
//! target.

use crate::model::{Element, ElementState};

/// One frame of a trace: a full sequence snapshot plus which positions were
/// under comparison or exchange at that instant.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Step {
    /// Deep copy of the sequence, with comparing/swapping states overlaid.
    pub elements: Vec<Element>,
    /// Human-readable description of the operation.
    pub description: String,
    /// Positions under comparison (zero or more).
    pub comparing: Vec<usize>,
    /// Positions being exchanged (zero or more).
    pub swapping: Vec<usize>,
}

impl Step {
    /// Capture a snapshot of `elements` with state overlays.
    ///
    /// Positions in `swapping` get state `swapping`; positions in `comparing`
    /// that are not also in `swapping` get state `comparing`; every other
    /// position keeps its current state, so `sorted` markings persist across
    /// subsequent steps. The working sequence itself is left untouched.
    pub fn capture(
        elements: &[Element],
        description: impl Into<String>,
        comparing: &[usize],
        swapping: &[usize],
    ) -> Self {
        let elements = elements
            .iter()
            .enumerate()
            .map(|(i, el)| {
                if swapping.contains(&i) {
                    el.with_state(ElementState::Swapping)
                } else if comparing.contains(&i) {
                    el.with_state(ElementState::Comparing)
                } else {
                    *el
                }
            })
            .collect();

        Self {
            elements,
            description: description.into(),
            comparing: comparing.to_vec(),
            swapping: swapping.to_vec(),
        }
    }

    /// Values of the snapshot, in position order.
    pub fn values(&self) -> Vec<u32> {
        self.elements.iter().map(|el| el.value).collect()
    }
}

/// Complete, ordered, immutable recording of one sorting run.
///
/// Consumers index `trace[k]` for `k` in `[0, len)` to obtain the rendered
/// state after step `k`; a zero-length trace means "nothing to play".
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when there is nothing to play.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Final step of the run, if any.
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Iterate over steps in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl std::ops::Index<usize> for Trace {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Accumulates the steps of one run in chronological order.
#[derive(Debug, Default)]
pub struct Recorder {
    steps: Vec<Step>,
}

impl Recorder {
    /// Empty recorder for a fresh run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture and append a step; see [`Step::capture`] for overlay rules.
    pub fn record(
        &mut self,
        elements: &[Element],
        description: impl Into<String>,
        comparing: &[usize],
        swapping: &[usize],
    ) {
        self.steps
            .push(Step::capture(elements, description, comparing, swapping));
    }

    /// Finish the run, yielding the immutable trace.
    pub fn into_trace(self) -> Trace {
        Trace { steps: self.steps }
    }
}

/// Working copy of a sequence with every state forced back to default.
///
/// Every algorithm starts from this, normalizing whatever visual state a
/// previous run left behind.
pub fn reset_states(elements: &[Element]) -> Vec<Element> {
    elements
        .iter()
        .map(|el| el.with_state(ElementState::Default))
        .collect()
}

/// Replace each targeted position with a sorted-state derived clone.
///
/// Positions outside `indices` are unchanged. Once applied, the marking is
/// visible in every subsequently captured step of the run.
pub fn mark_sorted(elements: &mut [Element], indices: &[usize]) {
    for &i in indices {
        elements[i] = elements[i].with_state(ElementState::Sorted);
    }
}
