use super::*;

use crate::error::MatrizError;
use crate::primitives::Matrix;

fn m(text: &str) -> Matrix {
    Matrix::parse(text).expect("well-formed test fixture")
}

// A * A+ * A ~ A and A+ * A * A+ ~ A+.
fn assert_penrose(a: &Matrix, pinv: &Matrix, tolerance: f32) {
    let back = a
        .mul(pinv)
        .expect("compatible shapes")
        .mul(a)
        .expect("compatible shapes");
    assert!(back.approx_eq(a, tolerance), "A*A+*A differs:\n{back}");

    let pinv_back = pinv
        .mul(a)
        .expect("compatible shapes")
        .mul(pinv)
        .expect("compatible shapes");
    assert!(
        pinv_back.approx_eq(pinv, tolerance),
        "A+*A*A+ differs:\n{pinv_back}"
    );
}

#[test]
fn test_square_pseudo_inverse_matches_inverse() {
    let a = m("0 1 -2;3 4 5;6 7 8");
    let pinv = pseudo_invert(&a).expect("full-rank input");
    let expected = m("-0.25 -1.8333 1.0833;0.5 1 -0.5;-0.25 0.5 -0.25");
    assert!(pinv.approx_eq(&expected, 1e-3), "got\n{pinv}");
}

#[test]
fn test_tall_pseudo_inverse_fixture() {
    let a = m("5 2 1;5 1 4;9 9 10;4 1 -100;-1 20 20");
    let pinv = a.pinv().expect("full-rank input");
    assert_eq!(pinv.size(), (3, 5));
    let expected = m("0.0383 0.0408 0.0627 0.0015 -0.0342;\
                      -0.0033 -0.0061 0.0061 0.0098 0.0474;\
                      0.0013 0.0018 0.0025 -0.0098 -0.0009");
    assert!(pinv.approx_eq(&expected, 1e-3), "got\n{pinv}");
    assert_penrose(&a, &pinv, 1e-2);
}

#[test]
fn test_wide_pseudo_inverse() {
    // m < n takes the transposed branch through the smaller Gram matrix.
    let a = m("10 20 30 40 50;1 2 3 4 5;-1 -2 -3 -4 -5");
    let pinv = a.pinv().expect("rank-positive input");
    assert_eq!(pinv.size(), (5, 3));
    assert_penrose(&a, &pinv, 1e-2);
}

#[test]
fn test_rank_deficient_input() {
    let a = m("1 2;2 4");
    let pinv = a.pinv().expect("rank-one input still has a pseudo-inverse");
    assert_penrose(&a, &pinv, 1e-2);
}

#[test]
fn test_scalar_pseudo_inverse() {
    let a = m("4");
    let pinv = a.pinv().expect("nonzero scalar");
    assert!((pinv.to_scalar().expect("1x1") - 0.25).abs() < 1e-5);
}

#[test]
fn test_column_vector_pseudo_inverse() {
    let a = m("1;2;2");
    let pinv = a.pinv().expect("nonzero column");
    // A+ = A^T / |A|^2.
    let expected = m("0.1111 0.2222 0.2222");
    assert!(pinv.approx_eq(&expected, 1e-3), "got\n{pinv}");
}

#[test]
fn test_zero_matrix_is_rejected() {
    assert!(matches!(
        pseudo_invert(&Matrix::zeros(3, 2)),
        Err(MatrizError::Singular { .. })
    ));
}
