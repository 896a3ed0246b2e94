use crate::model::Element;
use crate::trace::{Recorder, Trace, mark_sorted, reset_states};

/// Quick sort with the Lomuto partition scheme, pivoting on the last element
/// of each span. A pivot's final position is flagged sorted before recursing
/// into the two remaining partitions.
pub(crate) fn run(initial: &[Element]) -> Trace {
    let mut rec = Recorder::new();
    let mut array = reset_states(initial);
    let n = array.len();

    rec.record(&array, "Starting Quick Sort", &[], &[]);

    if n > 0 {
        sort_span(&mut array, 0, n - 1, &mut rec);
    }

    rec.record(&array, "Quick Sort completed!", &[], &[]);

    rec.into_trace()
}

fn sort_span(array: &mut [Element], low: usize, high: usize, rec: &mut Recorder) {
    if low < high {
        let pi = partition(array, low, high, rec);

        rec.record(
            array,
            format!("Pivot {} is now at its final position {pi}", array[pi].value),
            &[],
            &[],
        );
        mark_sorted(array, &[pi]);

        if pi > low {
            sort_span(array, low, pi - 1, rec);
        }
        if pi < high {
            sort_span(array, pi + 1, high, rec);
        }
    } else {
        // Degenerate single-element span: already in place.
        mark_sorted(array, &[low]);
        rec.record(
            array,
            format!("Single element at position {low} is sorted"),
            &[],
            &[],
        );
    }
}

fn partition(array: &mut [Element], low: usize, high: usize, rec: &mut Recorder) -> usize {
    let pivot = array[high].value;
    rec.record(
        array,
        format!("Chosen pivot: {pivot} at position {high}"),
        &[high],
        &[],
    );

    // Next slot for an element smaller than the pivot.
    let mut boundary = low;

    for j in low..high {
        rec.record(
            array,
            format!("Comparing {} with pivot {pivot}", array[j].value),
            &[j, high],
            &[],
        );

        if array[j].value < pivot {
            if boundary != j {
                rec.record(
                    array,
                    format!("Swapping elements at positions {boundary} and {j}"),
                    &[],
                    &[boundary, j],
                );
                array.swap(boundary, j);
            }
            boundary += 1;
        }
    }

    rec.record(
        array,
        format!("Placing pivot at position {boundary}"),
        &[],
        &[boundary, high],
    );
    array.swap(boundary, high);

    boundary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementState;
    use crate::sequence::sequence_from_values;

    #[test]
    fn sorts_and_flags_every_position() {
        let trace = run(&sequence_from_values(&[10, 80, 30, 90, 40, 50, 70]));
        let last = trace.last().unwrap();
        assert_eq!(last.values(), vec![10, 30, 40, 50, 70, 80, 90]);
        assert!(last.elements.iter().all(|el| el.state == ElementState::Sorted));
    }

    #[test]
    fn two_element_span_uses_last_element_pivot() {
        let trace = run(&sequence_from_values(&[3, 1]));
        assert!(trace.len() >= 4);
        assert!(
            trace
                .iter()
                .any(|s| s.description == "Chosen pivot: 1 at position 1")
        );
        assert_eq!(trace.last().unwrap().values(), vec![1, 3]);
    }

    #[test]
    fn pivot_is_flagged_before_recursion_steps() {
        let trace = run(&sequence_from_values(&[2, 3, 1]));
        let final_pos = trace
            .iter()
            .position(|s| s.description.contains("final position"))
            .unwrap();
        // The very next step must already show that position as sorted.
        let pi: usize = trace[final_pos]
            .description
            .rsplit(' ')
            .next()
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(
            trace[final_pos + 1].elements[pi].state,
            ElementState::Sorted
        );
    }

    #[test]
    fn reverse_sorted_input_terminates_and_sorts() {
        let trace = run(&sequence_from_values(&[5, 4, 3, 2, 1]));
        assert_eq!(trace.last().unwrap().values(), vec![1, 2, 3, 4, 5]);
    }
}
