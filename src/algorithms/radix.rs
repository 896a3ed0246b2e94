use crate::model::Element;
use crate::trace::{Recorder, Trace, mark_sorted, reset_states};

/// LSD radix sort: one stable counting pass per decimal digit of the maximum
/// value. An all-zero input runs zero digit passes and is still emitted as a
/// valid, fully sorted trace.
pub(crate) fn run(initial: &[Element]) -> Trace {
    let mut rec = Recorder::new();
    let mut array = reset_states(initial);

    rec.record(&array, "Starting Radix Sort", &[], &[]);

    if let Some(max) = array.iter().map(|el| el.value).max() {
        rec.record(&array, format!("Maximum value is {max}"), &[], &[]);

        let mut exp: u64 = 1;
        while u64::from(max) / exp > 0 {
            counting_pass(&mut array, exp, &mut rec);
            exp *= 10;
        }
    }

    let all: Vec<usize> = (0..array.len()).collect();
    mark_sorted(&mut array, &all);
    rec.record(&array, "Radix Sort completed!", &[], &[]);

    rec.into_trace()
}

fn digit_at(value: u32, exp: u64) -> usize {
    (u64::from(value) / exp % 10) as usize
}

fn digit_place_name(exp: u64) -> &'static str {
    match exp {
        1 => "ones",
        10 => "tens",
        100 => "hundreds",
        1000 => "thousands",
        _ => "higher digits",
    }
}

/// Stable counting sort keyed on the digit selected by `exp`.
fn counting_pass(array: &mut [Element], exp: u64, rec: &mut Recorder) {
    rec.record(
        array,
        format!(
            "Sorting by digit at position {exp} ({})",
            digit_place_name(exp)
        ),
        &[],
        &[],
    );

    let mut count = [0usize; 10];
    for i in 0..array.len() {
        let value = array[i].value;
        let digit = digit_at(value, exp);
        count[digit] += 1;
        rec.record(
            array,
            format!("Element {value} has digit {digit} at position {exp}"),
            &[i],
            &[],
        );
    }

    // Cumulative counts give each digit bucket its end position.
    for d in 1..10 {
        count[d] += count[d - 1];
    }

    // Fill right-to-left so equal digits keep their input order. Every slot
    // of the placeholder copy is overwritten.
    let mut output = array.to_vec();
    for i in (0..array.len()).rev() {
        let digit = digit_at(array[i].value, exp);
        count[digit] -= 1;
        output[count[digit]] = array[i];
    }
    array.copy_from_slice(&output);

    rec.record(
        array,
        format!("Completed sorting by digit at position {exp}"),
        &[],
        &[],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementState;
    use crate::sequence::sequence_from_values;

    #[test]
    fn sorts_multi_digit_values() {
        let trace = run(&sequence_from_values(&[170, 45, 75, 90, 802, 24, 2, 66]));
        assert_eq!(
            trace.last().unwrap().values(),
            vec![2, 24, 45, 66, 75, 90, 170, 802]
        );
    }

    #[test]
    fn equal_values_keep_input_order() {
        let trace = run(&sequence_from_values(&[21, 21, 3]));
        let last = trace.last().unwrap();
        assert_eq!(last.values(), vec![3, 21, 21]);
        assert!(last.elements[1].id < last.elements[2].id);
    }

    #[test]
    fn all_zero_input_runs_zero_digit_passes() {
        let trace = run(&sequence_from_values(&[0, 0, 0]));
        assert!(trace.iter().all(|s| !s.description.starts_with("Sorting by digit")));
        let last = trace.last().unwrap();
        assert_eq!(last.values(), vec![0, 0, 0]);
        assert!(last.elements.iter().all(|el| el.state == ElementState::Sorted));
    }

    #[test]
    fn one_pass_per_decimal_digit_of_the_maximum() {
        let trace = run(&sequence_from_values(&[802, 2]));
        let passes = trace
            .iter()
            .filter(|s| s.description.starts_with("Sorting by digit"))
            .count();
        assert_eq!(passes, 3);
    }
}
