//! Concrete end-to-end scenarios pinned against known inputs.

use sortviz::{Algorithm, ElementState, generate_trace, sequence_from_values, sorting_steps};

#[test]
fn bubble_on_5_3_4_1() {
    let trace = generate_trace(Algorithm::Bubble, &sequence_from_values(&[5, 3, 4, 1]));

    // First comparing step highlights positions 0 and 1.
    let first_compare = trace
        .iter()
        .find(|s| !s.comparing.is_empty())
        .expect("bubble records comparing steps");
    assert_eq!(first_compare.comparing, vec![0, 1]);
    assert_eq!(first_compare.values(), vec![5, 3, 4, 1]);

    // 5 > 3, so a swapping step follows, and the step after it shows the
    // exchanged arrangement.
    let swap_pos = trace
        .iter()
        .position(|s| !s.swapping.is_empty())
        .expect("bubble records a swap");
    assert_eq!(trace[swap_pos].swapping, vec![0, 1]);
    assert_eq!(trace[swap_pos + 1].values(), vec![3, 5, 4, 1]);

    let last = trace.last().unwrap();
    assert_eq!(last.values(), vec![1, 3, 4, 5]);
    assert!(
        last.elements
            .iter()
            .all(|el| el.state == ElementState::Sorted)
    );
}

#[test]
fn quick_on_3_1() {
    let trace = generate_trace(Algorithm::Quick, &sequence_from_values(&[3, 1]));
    assert!(trace.len() >= 4);

    // Last element of the span is the pivot.
    let pivot_step = trace
        .iter()
        .find(|s| s.description.starts_with("Chosen pivot"))
        .unwrap();
    assert_eq!(pivot_step.description, "Chosen pivot: 1 at position 1");

    assert_eq!(trace.last().unwrap().values(), vec![1, 3]);
}

#[test]
fn radix_on_known_multi_digit_input() {
    let input = sequence_from_values(&[170, 45, 75, 90, 802, 24, 2, 66]);
    let trace = generate_trace(Algorithm::Radix, &input);
    assert_eq!(
        trace.last().unwrap().values(),
        vec![2, 24, 45, 66, 75, 90, 170, 802]
    );
}

#[test]
fn radix_is_stable_for_duplicate_values() {
    // Ids are assigned in input order; equal values must keep that order.
    let input = sequence_from_values(&[55, 21, 55, 8, 21]);
    let trace = generate_trace(Algorithm::Radix, &input);
    let last = trace.last().unwrap();

    assert_eq!(last.values(), vec![8, 21, 21, 55, 55]);
    let ids: Vec<u32> = last.elements.iter().map(|el| el.id.0).collect();
    assert_eq!(ids, vec![3, 1, 4, 0, 2]);
}

#[test]
fn unrecognized_selector_returns_empty_trace() {
    let input = sequence_from_values(&[3, 1, 2]);
    assert_eq!(sorting_steps("bogosort", &input).len(), 0);
}
