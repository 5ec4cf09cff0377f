use super::*;

use crate::error::MatrizError;
use crate::primitives::Matrix;

fn m(text: &str) -> Matrix {
    Matrix::parse(text).expect("well-formed test fixture")
}

#[test]
fn test_identity_inverts_to_itself() {
    let eye = Matrix::identity(4);
    let inv = invert(&eye).expect("identity is invertible");
    assert!(inv.approx_eq(&eye, 1e-6));
}

#[test]
fn test_inverse_with_deferred_first_pivot() {
    // The top-left pivot starts at zero and only becomes usable on the
    // retry pass.
    let a = m("0 1 -2;3 4 5;6 7 8");
    let inv = a.inv().expect("matrix is invertible");
    let expected = m("-0.25 -1.8333 1.0833;0.5 1 -0.5;-0.25 0.5 -0.25");
    assert!(inv.approx_eq(&expected, 1e-3), "got\n{inv}");
}

#[test]
fn test_inverse_times_original_is_identity() {
    let a = m("5 2 4;3 4 5;-800 0 -1");
    let inv = a.inv().expect("matrix is invertible");
    let eye = Matrix::identity(3);
    assert!(a.mul(&inv).expect("3x3 times 3x3").approx_eq(&eye, 1e-3));
    assert!(inv.mul(&a).expect("3x3 times 3x3").approx_eq(&eye, 1e-3));
}

#[test]
fn test_inverse_of_inverse_is_original() {
    let a = m("10 30 2;10 10 -100;10 0 0");
    let back = a
        .inv()
        .expect("matrix is invertible")
        .inv()
        .expect("inverse is invertible");
    assert!(back.approx_eq(&a, 1e-2), "got\n{back}");
}

#[test]
fn test_five_by_five_inverse() {
    // Assembled from the smaller fixtures the same way the slicing API is
    // meant to compose.
    let fbt = m("5 2 1;5 1 4;9 9 10;4 1 -100;-1 20 20");
    let tbt1 = m("0 1 -2;3 4 5;6 7 8");
    let tbt2 = m("5 2 4;3 4 5;-800 0 -1");
    let lower_right = tbt1
        .select_cols(&[1, 2])
        .expect("columns exist")
        .select_rows(&[0, 1])
        .expect("rows exist");
    let right = tbt2
        .select_cols(&[0, 1])
        .expect("columns exist")
        .concat_v(&lower_right)
        .expect("2 columns each");
    let fbf = fbt.concat_h(&right).expect("5 rows each");

    let inv = fbf.inv().expect("matrix is invertible");
    let expected = m("0.3359 -0.1379 0.0014 -0.0074 -0.0270;\
                      0.1105 -0.1072 0.0005 0.0056 0.0438;\
                      0.0241 -0.0160 0.0001 -0.0106 -0.0011;\
                      0.0053 -0.0030 -0.0012 -0.0002 0.0002;\
                      -0.4756 0.4674 -0.0011 0.0186 0.0237");
    assert!(inv.approx_eq(&expected, 1e-3), "got\n{inv}");
}

#[test]
fn test_non_square_is_rejected() {
    let wide = m("10 20 30 40 50;1 2 3 4 5;-1 -2 -3 -4 -5");
    assert!(matches!(
        invert(&wide),
        Err(MatrizError::NotSquare { rows: 3, cols: 5 })
    ));
    let tall = m("5 2 1;5 1 4;9 9 10;4 1 -100;-1 20 20");
    assert!(tall.inv().is_err());
}

#[test]
fn test_singular_is_rejected() {
    // The second pivot collapses to zero during elimination and cannot be
    // rescued by the retry pass.
    let singular = m("1 1;1 1");
    assert!(matches!(
        invert(&singular),
        Err(MatrizError::Singular { .. })
    ));
}

#[test]
fn test_below_tolerance_pivot_is_rejected() {
    let nearly_singular = m("1e-6 0;0 1");
    assert!(invert(&nearly_singular).is_err());
}
