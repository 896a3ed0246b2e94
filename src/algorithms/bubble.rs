use crate::model::Element;
use crate::trace::{Recorder, Trace, mark_sorted, reset_states};

/// Bubble sort: adjacent comparisons per pass, largest element bubbling to
/// the end of the unsorted region.
pub(crate) fn run(initial: &[Element]) -> Trace {
    let mut rec = Recorder::new();
    let mut array = reset_states(initial);
    let n = array.len();

    rec.record(&array, "Starting Bubble Sort", &[], &[]);

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            rec.record(
                &array,
                format!("Comparing elements at positions {j} and {}", j + 1),
                &[j, j + 1],
                &[],
            );

            if array[j].value > array[j + 1].value {
                rec.record(
                    &array,
                    format!("Swapping elements at positions {j} and {}", j + 1),
                    &[],
                    &[j, j + 1],
                );
                array.swap(j, j + 1);
                rec.record(&array, "Elements swapped", &[], &[]);
            }
        }

        mark_sorted(&mut array, &[n - i - 1]);
        rec.record(
            &array,
            format!("Element at position {} is now in its final position", n - i - 1),
            &[],
            &[],
        );
    }

    // Covers the single remaining element once every pass has run.
    if n > 0 {
        mark_sorted(&mut array, &[0]);
    }
    rec.record(&array, "Bubble Sort completed!", &[], &[]);

    rec.into_trace()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementState;
    use crate::sequence::sequence_from_values;

    #[test]
    fn sorts_and_flags_every_position() {
        let trace = run(&sequence_from_values(&[5, 3, 4, 1]));
        let last = trace.last().unwrap();
        assert_eq!(last.values(), vec![1, 3, 4, 5]);
        assert!(last.elements.iter().all(|el| el.state == ElementState::Sorted));
    }

    #[test]
    fn already_sorted_input_records_no_swaps() {
        let trace = run(&sequence_from_values(&[1, 2, 3]));
        assert!(trace.iter().all(|step| step.swapping.is_empty()));
        assert_eq!(trace.last().unwrap().values(), vec![1, 2, 3]);
    }

    #[test]
    fn degenerate_inputs_still_produce_start_and_complete() {
        let empty = run(&[]);
        assert_eq!(empty.len(), 2);
        assert!(empty.iter().all(|s| s.comparing.is_empty() && s.swapping.is_empty()));

        let single = run(&sequence_from_values(&[9]));
        assert_eq!(single.len(), 2);
        assert_eq!(
            single.last().unwrap().elements[0].state,
            ElementState::Sorted
        );
    }
}
