use crate::model::Element;
use crate::trace::{Recorder, Trace, mark_sorted, reset_states};

/// Insertion sort: grow a sorted prefix by shifting each key left into place.
/// The sorted region is always the entire prefix `0..=i`.
pub(crate) fn run(initial: &[Element]) -> Trace {
    let mut rec = Recorder::new();
    let mut array = reset_states(initial);
    let n = array.len();

    rec.record(&array, "Starting Insertion Sort", &[], &[]);

    if n > 0 {
        mark_sorted(&mut array, &[0]);
        rec.record(&array, "First element is considered sorted", &[], &[]);
    }

    for i in 1..n {
        let key = array[i];
        let mut slot = i;

        rec.record(
            &array,
            format!("Inserting element {} into sorted portion", key.value),
            &[i],
            &[],
        );

        while slot > 0 && array[slot - 1].value > key.value {
            rec.record(
                &array,
                format!("Comparing {} with {}", key.value, array[slot - 1].value),
                &[i, slot - 1],
                &[],
            );
            rec.record(
                &array,
                format!("Shifting element {} to the right", array[slot - 1].value),
                &[],
                &[slot - 1, slot],
            );

            array[slot] = array[slot - 1];
            slot -= 1;
        }

        array[slot] = key;

        let prefix: Vec<usize> = (0..=i).collect();
        mark_sorted(&mut array, &prefix);
        rec.record(
            &array,
            format!("Element {} inserted at position {slot}", key.value),
            &[],
            &[],
        );
    }

    rec.record(&array, "Insertion Sort completed!", &[], &[]);

    rec.into_trace()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementState;
    use crate::sequence::sequence_from_values;

    #[test]
    fn sorts_with_duplicates() {
        let trace = run(&sequence_from_values(&[3, 1, 3, 2]));
        assert_eq!(trace.last().unwrap().values(), vec![1, 2, 3, 3]);
    }

    #[test]
    fn prefix_is_fully_sorted_after_each_insertion() {
        let trace = run(&sequence_from_values(&[4, 2, 3]));
        for step in trace.iter().filter(|s| s.description.contains("inserted at position")) {
            let sorted_count = step
                .elements
                .iter()
                .take_while(|el| el.state == ElementState::Sorted)
                .count();
            assert!(sorted_count >= 2);
        }
    }

    #[test]
    fn single_element_is_immediately_sorted() {
        let trace = run(&sequence_from_values(&[7]));
        assert_eq!(trace.len(), 3); // start, first-sorted, completed
        assert_eq!(
            trace.last().unwrap().elements[0].state,
            ElementState::Sorted
        );
    }
}
