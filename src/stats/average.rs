use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AverageError {
    #[error("cannot calculate average of empty slice")]
    EmptyInput,
}

/// Arithmetic mean of `numbers`.
///
/// Values are summed left to right in input order with plain `f64` addition, then divided by the
/// count. Reordering inputs that are not exactly representable can change the last bits of the
/// result.
#[tracing::instrument(skip(numbers), fields(len = numbers.len()))]
pub fn average(numbers: &[f64]) -> Result<f64, AverageError> {
    if numbers.is_empty() {
        return Err(AverageError::EmptyInput);
    }

    let mut sum = 0.0;

    for n in numbers {
        sum += n;
    }

    Ok(sum / numbers.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::positive_numbers(&[1.0, 2.0, 3.0, 4.0, 5.0], 3.0)]
    #[case::single(&[42.0], 42.0)]
    #[case::negative_numbers(&[-2.0, -4.0], -3.0)]
    #[case::mixed_signs(&[-5.0, 5.0], 0.0)]
    #[case::fractional(&[0.5, 1.5], 1.0)]
    fn average_of(#[case] numbers: &[f64], #[case] expected: f64) {
        assert_eq!(average(numbers), Ok(expected));
    }

    #[test]
    fn empty_slice_is_an_error() {
        let result = average(&[]);

        assert_eq!(result, Err(AverageError::EmptyInput));
        assert_eq!(
            result.unwrap_err().to_string(),
            "cannot calculate average of empty slice"
        );
    }

    #[test]
    fn recomputing_is_idempotent() {
        let numbers = [1.0, 2.0, 3.0, 4.0, 5.0];

        assert_eq!(average(&numbers), average(&numbers));
    }

    #[test]
    fn exact_inputs_are_order_independent() {
        assert_eq!(
            average(&[5.0, 4.0, 3.0, 2.0, 1.0]),
            average(&[1.0, 2.0, 3.0, 4.0, 5.0])
        );
    }

    #[test]
    fn sums_in_input_order() {
        // 1e16 + 1.0 rounds back to 1e16, so the order of accumulation is observable
        let numbers = [1e16, 1.0, -1e16];

        let mut expected = 0.0;
        for n in numbers {
            expected += n;
        }

        assert_eq!(average(&numbers), Ok(expected / 3.0));
    }
}
