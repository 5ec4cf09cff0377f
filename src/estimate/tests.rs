use super::*;

use crate::error::MatrizError;
use crate::primitives::Matrix;

fn column(values: &[f32]) -> Matrix {
    Matrix::from_vec(values.len(), 1, values.to_vec()).expect("one column")
}

#[test]
fn test_linear_regression_recovers_line() {
    // y = 2x + 1
    let x = column(&[1.0, 2.0, 3.0, 4.0]);
    let y = column(&[3.0, 5.0, 7.0, 9.0]);

    let mut model = LinearRegression::new()
        .with_learning_rate(0.1)
        .with_iterations(2000);
    model.fit(&x, &y).expect("consistent shapes");

    let theta = model.theta().expect("fitted");
    assert!((theta.get(0, 0).expect("intercept") - 1.0).abs() < 0.05);
    assert!((theta.get(1, 0).expect("slope") - 2.0).abs() < 0.05);

    let prediction = model
        .predict(&Matrix::scalar(5.0))
        .expect("fitted")
        .to_scalar()
        .expect("one example in, one prediction out");
    assert!((prediction - 11.0).abs() < 0.1);
}

#[test]
fn test_linear_regression_cost_decreases() {
    let x = column(&[1.0, 2.0, 3.0, 4.0]);
    let y = column(&[3.0, 5.0, 7.0, 9.0]);

    let mut model = LinearRegression::new()
        .with_learning_rate(0.05)
        .with_iterations(200);
    model.fit(&x, &y).expect("consistent shapes");

    let history = model.cost_history();
    assert_eq!(history.len(), 200);
    assert!(history[199] < history[0]);
}

#[test]
fn test_linear_regression_with_penalty_shrinks_slope() {
    let x = column(&[1.0, 2.0, 3.0, 4.0]);
    let y = column(&[3.0, 5.0, 7.0, 9.0]);

    let mut plain = LinearRegression::new()
        .with_learning_rate(0.1)
        .with_iterations(2000);
    plain.fit(&x, &y).expect("consistent shapes");
    let mut penalized = LinearRegression::new()
        .with_learning_rate(0.1)
        .with_l2_penalty(10.0)
        .with_iterations(2000);
    penalized.fit(&x, &y).expect("consistent shapes");

    let plain_slope = plain.theta().expect("fitted").get(1, 0).expect("slope");
    let shrunk_slope = penalized.theta().expect("fitted").get(1, 0).expect("slope");
    assert!(shrunk_slope.abs() < plain_slope.abs());
}

#[test]
fn test_linear_regression_rejects_bad_shapes() {
    let x = column(&[1.0, 2.0, 3.0]);
    let mut model = LinearRegression::new();
    assert!(model.fit(&x, &column(&[1.0, 2.0])).is_err());
    let wide_labels = Matrix::ones(3, 2);
    assert!(matches!(
        model.fit(&x, &wide_labels),
        Err(MatrizError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_linear_regression_rejects_bad_learning_rate() {
    let x = column(&[1.0, 2.0]);
    let y = column(&[1.0, 2.0]);
    let mut model = LinearRegression::new().with_learning_rate(0.0);
    assert!(matches!(
        model.fit(&x, &y),
        Err(MatrizError::InvalidParameter { .. })
    ));
}

#[test]
fn test_unfitted_predict_fails() {
    let model = LinearRegression::new();
    assert!(model.predict(&Matrix::scalar(1.0)).is_err());
    assert!(model.theta().is_err());

    let classifier = LogisticRegression::new();
    assert!(classifier.predict(&Matrix::scalar(1.0)).is_err());

    let multiclass = OneVsAll::new();
    assert!(multiclass.predict(&Matrix::scalar(1.0)).is_err());
}

#[test]
fn test_predict_rejects_mismatched_width() {
    let x = Matrix::ones(4, 2);
    let y = column(&[0.0, 0.0, 1.0, 1.0]);
    let mut model = LinearRegression::new().with_iterations(10);
    model.fit(&x, &y).expect("consistent shapes");
    assert!(matches!(
        model.predict(&Matrix::ones(1, 3)),
        Err(MatrizError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_logistic_regression_separates_classes() {
    let x = column(&[0.0, 1.0, 2.0, 3.0, 7.0, 8.0, 9.0, 10.0]);
    let y = column(&[0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);

    let mut model = LogisticRegression::new()
        .with_learning_rate(0.05)
        .with_iterations(3000);
    model.fit(&x, &y).expect("consistent shapes");

    assert_eq!(model.accuracy(&x, &y), Ok(1.0));
    assert_eq!(model.precision(&x, &y), Ok(1.0));
    assert_eq!(model.recall(&x, &y), Ok(1.0));
    assert_eq!(model.f1_score(&x, &y), Ok(1.0));

    let low = model
        .predict(&Matrix::scalar(0.5))
        .expect("fitted")
        .to_scalar()
        .expect("1x1");
    let high = model
        .predict(&Matrix::scalar(9.5))
        .expect("fitted")
        .to_scalar()
        .expect("1x1");
    assert!(low < 0.5);
    assert!(high > 0.5);
}

#[test]
fn test_logistic_regression_probabilities_stay_in_range() {
    let x = column(&[0.0, 1.0, 5.0, 6.0]);
    let y = column(&[0.0, 0.0, 1.0, 1.0]);
    let mut model = LogisticRegression::new()
        .with_learning_rate(0.1)
        .with_iterations(500);
    model.fit(&x, &y).expect("consistent shapes");

    let probabilities = model.predict(&x).expect("fitted");
    assert!(probabilities
        .as_slice()
        .iter()
        .all(|&p| (0.0..=1.0).contains(&p)));

    let binary = model.predict_binary(&x).expect("fitted");
    assert!(binary.as_slice().iter().all(|&b| b == 0.0 || b == 1.0));
}

#[test]
fn test_logistic_regression_cost_decreases() {
    let x = column(&[0.0, 1.0, 5.0, 6.0]);
    let y = column(&[0.0, 0.0, 1.0, 1.0]);
    let mut model = LogisticRegression::new()
        .with_learning_rate(0.1)
        .with_iterations(300);
    model.fit(&x, &y).expect("consistent shapes");

    let history = model.cost_history();
    assert_eq!(history.len(), 300);
    assert!(history[299] < history[0]);
}

#[test]
fn test_one_vs_all_recovers_three_classes() {
    // Three tight clusters at the corners of the unit square.
    let x = Matrix::from_rows(&[
        vec![0.0, 0.0],
        vec![0.1, 0.1],
        vec![0.0, 0.1],
        vec![1.0, 0.0],
        vec![1.1, 0.1],
        vec![1.0, 0.1],
        vec![0.0, 1.0],
        vec![0.1, 1.1],
        vec![0.1, 1.0],
    ])
    .expect("rectangular grid");
    let y = column(&[0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0]);

    let mut model = OneVsAll::new()
        .with_learning_rate(0.5)
        .with_iterations(5000);
    model.fit(&x, &y).expect("consistent shapes");

    let mut labels = model.labels();
    labels.sort_by(f32::total_cmp);
    assert_eq!(labels, vec![0.0, 1.0, 2.0]);

    assert_eq!(model.accuracy(&x, &y), Ok(1.0));
    let predicted = model
        .predict(&Matrix::from_rows(&[vec![1.05, 0.05]]).expect("one example"))
        .expect("fitted")
        .to_scalar()
        .expect("one prediction");
    assert_eq!(predicted, 1.0);
}
