use crate::model::Element;
use crate::trace::{Recorder, Trace, mark_sorted, reset_states};

/// Selection sort: scan the unsorted region for its minimum and place it at
/// the front of that region.
pub(crate) fn run(initial: &[Element]) -> Trace {
    let mut rec = Recorder::new();
    let mut array = reset_states(initial);
    let n = array.len();

    rec.record(&array, "Starting Selection Sort", &[], &[]);

    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;
        rec.record(
            &array,
            format!("Finding minimum element in unsorted portion starting from position {i}"),
            &[i],
            &[],
        );

        for j in i + 1..n {
            rec.record(
                &array,
                format!("Comparing element at position {j} with current minimum at position {min_index}"),
                &[j, min_index],
                &[],
            );

            if array[j].value < array[min_index].value {
                min_index = j;
                rec.record(
                    &array,
                    format!("New minimum found at position {j}"),
                    &[j],
                    &[],
                );
            }
        }

        if min_index != i {
            rec.record(
                &array,
                format!("Swapping elements at positions {i} and {min_index}"),
                &[],
                &[i, min_index],
            );
            array.swap(i, min_index);
        }

        mark_sorted(&mut array, &[i]);
        rec.record(
            &array,
            format!("Element at position {i} is now in its final position"),
            &[],
            &[],
        );
    }

    if n > 0 {
        mark_sorted(&mut array, &[n - 1]);
    }
    rec.record(&array, "Selection Sort completed!", &[], &[]);

    rec.into_trace()
}
