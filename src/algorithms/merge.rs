use crate::model::Element;
use crate::trace::{Recorder, Trace, mark_sorted, reset_states};

/// Top-down recursive merge sort. Positions are only flagged sorted in one
/// final pass once the whole recursion has returned.
pub(crate) fn run(initial: &[Element]) -> Trace {
    let mut rec = Recorder::new();
    let mut array = reset_states(initial);
    let n = array.len();

    rec.record(&array, "Starting Merge Sort", &[], &[]);

    if n > 1 {
        sort_span(&mut array, 0, n - 1, &mut rec);
    }

    let all: Vec<usize> = (0..n).collect();
    mark_sorted(&mut array, &all);
    rec.record(&array, "Merge Sort completed!", &[], &[]);

    rec.into_trace()
}

fn sort_span(array: &mut [Element], left: usize, right: usize, rec: &mut Recorder) {
    if left < right {
        let mid = (left + right) / 2;

        rec.record(
            array,
            format!("Dividing array into [{left}-{mid}] and [{}-{right}]", mid + 1),
            &[],
            &[],
        );

        sort_span(array, left, mid, rec);
        sort_span(array, mid + 1, right, rec);
        merge(array, left, mid, right, rec);
    }
}

fn merge(array: &mut [Element], left: usize, mid: usize, right: usize, rec: &mut Recorder) {
    let left_part = array[left..=mid].to_vec();
    let right_part = array[mid + 1..=right].to_vec();

    let span: Vec<usize> = (left..=right).collect();
    rec.record(
        array,
        format!("Merging subarrays [{left}-{mid}] and [{}-{right}]", mid + 1),
        &span,
        &[],
    );

    let mut i = 0;
    let mut j = 0;
    let mut k = left;

    while i < left_part.len() && j < right_part.len() {
        rec.record(
            array,
            format!("Comparing {} and {}", left_part[i].value, right_part[j].value),
            &[left + i, mid + 1 + j],
            &[],
        );

        // Left wins ties, keeping the merge stable.
        if left_part[i].value <= right_part[j].value {
            array[k] = left_part[i];
            i += 1;
        } else {
            array[k] = right_part[j];
            j += 1;
        }
        k += 1;
    }

    while i < left_part.len() {
        array[k] = left_part[i];
        i += 1;
        k += 1;
    }

    while j < right_part.len() {
        array[k] = right_part[j];
        j += 1;
        k += 1;
    }

    rec.record(array, format!("Merged subarrays [{left}-{right}]"), &[], &[]);
}
