use crate::model::Element;
use crate::trace::{Recorder, Trace, mark_sorted, reset_states};

/// Heap sort: build a max-heap bottom-up, then repeatedly move the root to
/// the shrinking heap boundary and re-heapify.
pub(crate) fn run(initial: &[Element]) -> Trace {
    let mut rec = Recorder::new();
    let mut array = reset_states(initial);
    let n = array.len();

    rec.record(&array, "Starting Heap Sort", &[], &[]);

    rec.record(&array, "Building max heap", &[], &[]);
    for i in (0..n / 2).rev() {
        sift_down(&mut array, n, i, &mut rec);
    }

    rec.record(&array, "Max heap built, starting extraction", &[], &[]);

    for i in (1..n).rev() {
        rec.record(
            &array,
            format!("Moving maximum element {} to position {i}", array[0].value),
            &[],
            &[0, i],
        );
        array.swap(0, i);

        mark_sorted(&mut array, &[i]);
        rec.record(
            &array,
            format!("Element at position {i} is now sorted"),
            &[],
            &[],
        );

        sift_down(&mut array, i, 0, &mut rec);
    }

    if n > 0 {
        mark_sorted(&mut array, &[0]);
    }
    rec.record(&array, "Heap Sort completed!", &[], &[]);

    rec.into_trace()
}

/// Restore the max-heap property at `i` within the first `n` positions.
fn sift_down(array: &mut [Element], n: usize, i: usize, rec: &mut Recorder) {
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    rec.record(array, format!("Heapifying at index {i}"), &[i], &[]);

    if left < n {
        rec.record(
            array,
            format!(
                "Comparing parent {} with left child {}",
                array[i].value, array[left].value
            ),
            &[i, left],
            &[],
        );
        if array[left].value > array[largest].value {
            largest = left;
        }
    }

    if right < n {
        rec.record(
            array,
            format!("Comparing with right child {}", array[right].value),
            &[largest, right],
            &[],
        );
        if array[right].value > array[largest].value {
            largest = right;
        }
    }

    if largest != i {
        rec.record(
            array,
            format!("Swapping {} with {}", array[i].value, array[largest].value),
            &[],
            &[i, largest],
        );
        array.swap(i, largest);
        sift_down(array, n, largest, rec);
    }
}
