use delimfile::{cumulative_sum, fold_change};

const EPS: f64 = 1e-15;

#[test]
fn fold_change_reference_table() {
    assert!((fold_change(1.0, 2.0) - -2.0).abs() < EPS);
    assert!((fold_change(2.0, 1.0) - 2.0).abs() < EPS);
    assert!((fold_change(1.0, 0.0) - 1.0).abs() < EPS);
    assert!((fold_change(0.0, 1.0) - -1.0).abs() < EPS);
    assert!((fold_change(1.0, 1.0) - 0.0).abs() < EPS);
}

#[test]
fn fold_change_divides_when_neither_side_is_zero() {
    assert!((fold_change(6.0, 2.0) - 3.0).abs() < EPS);
    assert!((fold_change(2.0, 6.0) - -3.0).abs() < EPS);
    assert!((fold_change(0.5, 0.25) - 2.0).abs() < EPS);
}

#[test]
fn cumulative_sum_runs_left_to_right() {
    assert_eq!(
        cumulative_sum(&[1.0, 2.0, 3.0, 4.0, 5.0]),
        vec![1.0, 3.0, 6.0, 10.0, 15.0]
    );
}

#[test]
fn cumulative_sum_accepts_integers() {
    assert_eq!(cumulative_sum(&[1i32, 2, 3, 4, 5]), vec![1.0, 3.0, 6.0, 10.0, 15.0]);
}

#[test]
fn cumulative_sum_of_a_single_value_is_itself() {
    assert_eq!(cumulative_sum(&[7.5]), vec![7.5]);
}

#[test]
fn cumulative_sum_of_empty_input_is_empty() {
    let empty: [f64; 0] = [];
    assert!(cumulative_sum(&empty).is_empty());
}

#[test]
fn cumulative_sum_handles_negative_steps() {
    assert_eq!(cumulative_sum(&[5.0, -2.0, -3.0]), vec![5.0, 3.0, 0.0]);
}
