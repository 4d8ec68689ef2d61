//! Small numeric helpers.

/// Signed fold-change between two non-negative values.
///
/// Up-regulation comes back positive, down-regulation negative, no change
/// zero. Division by zero is sidestepped by returning the non-zero side
/// directly:
///
/// | lhs | rhs | result | change |
/// |-----|-----|--------|--------|
/// | 1   | 2   | -2     | down   |
/// | 2   | 1   | 2      | up     |
/// | 1   | 0   | 1      | up     |
/// | 0   | 1   | -1     | down   |
/// | 1   | 1   | 0      | none   |
///
/// Inputs are assumed non-negative; behavior for negative inputs is
/// unspecified.
pub fn fold_change(lhs: f64, rhs: f64) -> f64 {
    if lhs == rhs {
        0.0
    } else if lhs < rhs {
        if lhs == 0.0 { -rhs } else { -(rhs / lhs) }
    } else if rhs == 0.0 {
        lhs
    } else {
        lhs / rhs
    }
}

/// Running cumulative sum, same length as the input.
///
/// `out[0] = values[0]` and `out[i] = out[i - 1] + values[i]`. An empty
/// input yields an empty vector.
pub fn cumulative_sum<T: Into<f64> + Copy>(values: &[T]) -> Vec<f64> {
    let mut total = 0.0;
    values
        .iter()
        .map(|value| {
            total += (*value).into();
            total
        })
        .collect()
}
