use proptest::collection::vec;
use proptest::prelude::*;

use dense_linalg::linalg::{determinant, invert, strassen};
use dense_linalg::{Matrix, Vector};

fn int_matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<i64>> {
    vec(-100i64..100, rows * cols).prop_map(move |d| Matrix::from_vec(rows, cols, d).unwrap())
}

fn any_int_matrix() -> impl Strategy<Value = Matrix<i64>> {
    (1usize..12, 1usize..12).prop_flat_map(|(r, c)| int_matrix(r, c))
}

/// Square pair whose size is not a power of two.
fn strassen_pair() -> impl Strategy<Value = (Matrix<i64>, Matrix<i64>)> {
    (3usize..40)
        .prop_filter("non-power-of-two size", |n| !n.is_power_of_two())
        .prop_flat_map(|n| (int_matrix(n, n), int_matrix(n, n)))
}

/// Strictly diagonally dominant, hence invertible and well conditioned.
fn dominant_matrix() -> impl Strategy<Value = Matrix<f64>> {
    (2usize..10).prop_flat_map(|n| {
        vec(-1.0f64..1.0, n * n).prop_map(move |d| {
            let mut a = Matrix::from_vec(n, n, d).unwrap();
            for i in 0..n {
                a[(i, i)] += n as f64;
            }
            a
        })
    })
}

proptest! {
    #[test]
    fn transpose_involution(a in any_int_matrix()) {
        prop_assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn strassen_equals_direct((a, b) in strassen_pair()) {
        prop_assert_eq!(strassen(&a, &b).unwrap(), a.multiply(&b).unwrap());
    }

    #[test]
    fn inverse_is_two_sided(a in dominant_matrix()) {
        let inv = invert(&a).unwrap();
        let n = a.rows();
        let left = inv.multiply(&a).unwrap();
        let right = a.multiply(&inv).unwrap();
        for i in 0..n {
            for j in 0..n {
                let e = if i == j { 1.0 } else { 0.0 };
                prop_assert!((left[(i, j)] - e).abs() < 1e-10);
                prop_assert!((right[(i, j)] - e).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn determinant_matches_lu(a in dominant_matrix()) {
        let d = determinant(&a).unwrap();
        let lu = a.lu().unwrap().det();
        prop_assert!((d - lu).abs() <= 1e-9 * lu.abs());
    }

    #[test]
    fn display_parse_round_trip(a in any_int_matrix()) {
        let text = a.to_string();
        prop_assert_eq!(text.parse::<Matrix<i64>>().unwrap(), a);
    }

    #[test]
    fn vector_concat_len(a in vec(-10i32..10, 1..50), b in vec(-10i32..10, 1..50)) {
        let va = Vector::from_slice(&a).unwrap();
        let vb = Vector::from_slice(&b).unwrap();
        let c = va.concat(&vb).unwrap();
        prop_assert_eq!(c.len(), a.len() + b.len());
        prop_assert_eq!(c.sum(), va.sum() + vb.sum());
    }
}
