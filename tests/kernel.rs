use approx::{assert_abs_diff_eq, assert_relative_eq};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dense_linalg::config::{MAX_MATRIX_ELEMENTS, MAX_VECTOR_LEN};
use dense_linalg::linalg::{determinant, invert, pseudoinverse, strassen};
use dense_linalg::{Axis, Error, Matrix, Vector};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_matrix_near(a: &Matrix<f64>, b: &Matrix<f64>, eps: f64) {
    assert_eq!(a.size(), b.size());
    for i in 0..a.rows() {
        for j in 0..a.cols() {
            assert_abs_diff_eq!(a[(i, j)], b[(i, j)], epsilon = eps);
        }
    }
}

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix<f64> {
    let data = (0..rows * cols).map(|_| rng.gen_range(-1.0..1.0)).collect();
    Matrix::from_vec(rows, cols, data).unwrap()
}

// ── Inversion ───────────────────────────────────────────────────────

#[test]
fn invert_known_3x3() {
    init_logger();
    let a = Matrix::<f64>::from_rows(&[[7.0, 2.0, 1.0], [0.0, 3.0, -1.0], [-3.0, 4.0, -2.0]]).unwrap();
    let expected =
        Matrix::<f64>::from_rows(&[[-2.0, 8.0, -5.0], [3.0, -11.0, 7.0], [9.0, -34.0, 21.0]]).unwrap();
    assert_matrix_near(&invert(&a).unwrap(), &expected, 1e-10);
}

#[test]
fn invert_is_two_sided() {
    init_logger();
    let a = Matrix::<f64>::from_rows(&[
        [3.0, 2.0, -1.0, 4.0],
        [2.0, 1.0, 5.0, 7.0],
        [0.0, 5.0, 2.0, -6.0],
        [-1.0, 2.0, 1.0, 0.0],
    ])
    .unwrap();
    let inv = a.invert().unwrap();
    let id = Matrix::eye(4).unwrap();
    assert_matrix_near(&a.multiply(&inv).unwrap(), &id, 1e-10);
    assert_matrix_near(&inv.multiply(&a).unwrap(), &id, 1e-10);
}

#[test]
fn invert_random_well_conditioned() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for n in [2, 5, 9, 16] {
        let mut a = random_matrix(&mut rng, n, n);
        for i in 0..n {
            a[(i, i)] += n as f64;
        }
        let id = Matrix::eye(n).unwrap();
        assert_matrix_near(&a.multiply(&invert(&a).unwrap()).unwrap(), &id, 1e-10);
    }
}

#[test]
fn invert_singular_is_nan() {
    init_logger();
    let a = Matrix::<f64>::from_rows(&[[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 0.0, 1.0]]).unwrap();
    let inv = invert(&a).unwrap();
    assert_eq!(inv.size(), (3, 3));
    assert!(inv.iter().all(|x| x.is_nan()));
}

#[test]
fn invert_rejects_non_square() {
    let a = Matrix::<f64>::zeros(2, 3).unwrap();
    assert!(matches!(invert(&a), Err(Error::NonSquare { rows: 2, cols: 3, .. })));
}

// ── Pseudoinverse ───────────────────────────────────────────────────

#[test]
fn pseudoinverse_tall_is_left_inverse() {
    init_logger();
    let a = Matrix::<f64>::from_rows(&[[-3.0, -4.0], [4.0, 6.0], [1.0, 1.0]]).unwrap();
    let p = pseudoinverse(&a).unwrap();
    assert_eq!(p.size(), (2, 3));
    assert_matrix_near(&p.multiply(&a).unwrap(), &Matrix::eye(2).unwrap(), 1e-10);
}

#[test]
fn pseudoinverse_wide_is_right_inverse() {
    init_logger();
    let a = Matrix::<f64>::from_rows(&[[1.0, 0.0, 2.0], [0.0, 1.0, -1.0]]).unwrap();
    let p = a.pseudoinverse().unwrap();
    assert_eq!(p.size(), (3, 2));
    assert_matrix_near(&a.multiply(&p).unwrap(), &Matrix::eye(2).unwrap(), 1e-10);
}

#[test]
fn pseudoinverse_rank_deficient_is_nan() {
    init_logger();
    let a = Matrix::<f64>::from_rows(&[[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]]).unwrap();
    let p = pseudoinverse(&a).unwrap();
    assert_eq!(p.size(), (2, 3));
    assert!(p.has_nan());
}

// ── Strassen ────────────────────────────────────────────────────────

#[test]
fn strassen_known_3x3() {
    let a = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
    let b = Matrix::from_rows(&[[1, -2, 3], [4, -5, 2], [-9, -2, 8]]).unwrap();
    let c = strassen(&a, &b).unwrap();
    assert_eq!(
        c,
        Matrix::from_rows(&[[-18, -18, 31], [-30, -45, 70], [-42, -72, 109]]).unwrap()
    );
}

#[test]
fn strassen_matches_direct_for_floats() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(42);
    for n in [5, 33, 100] {
        let a = random_matrix(&mut rng, n, n);
        let b = random_matrix(&mut rng, n, n);
        assert_matrix_near(&strassen(&a, &b).unwrap(), &a.multiply(&b).unwrap(), 1e-9);
    }
}

// ── Determinant ─────────────────────────────────────────────────────

#[test]
fn determinant_known_4x4() {
    let a = Matrix::<f64>::from_rows(&[
        [3.0, 2.0, -1.0, 4.0],
        [2.0, 1.0, 5.0, 7.0],
        [0.0, 5.0, 2.0, -6.0],
        [-1.0, 2.0, 1.0, 0.0],
    ])
    .unwrap();
    assert_relative_eq!(determinant(&a).unwrap(), -418.0, max_relative = 1e-12);
}

#[test]
fn determinant_agrees_with_lu() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut a = random_matrix(&mut rng, 6, 6);
    for i in 0..6 {
        a[(i, i)] += 4.0;
    }
    let lu = a.lu().unwrap();
    assert_relative_eq!(a.determinant().unwrap(), lu.det(), max_relative = 1e-9);
}

// ── Containers ──────────────────────────────────────────────────────

#[test]
fn transpose_is_involution() {
    let mut rng = StdRng::seed_from_u64(3);
    let a = random_matrix(&mut rng, 4, 7);
    assert_eq!(a.transpose().size(), (7, 4));
    assert_eq!(a.transpose().transpose(), a);
}

#[test]
fn builders_compose() {
    let d = Vector::<f64>::from_slice(&[1.0, 2.0, 3.0]).unwrap();
    let m = Matrix::from_diag(&d).unwrap();
    assert_eq!(m.diag().unwrap(), d);
    assert_eq!(m.trace().unwrap(), 6.0);

    let o = Matrix::outer_product(&d, &Vector::ones(2).unwrap()).unwrap();
    assert_eq!(o.size(), (3, 2));
    assert_eq!(o.get_col(1).unwrap(), d);

    let h = m.concat_hor(&o).unwrap();
    assert_eq!(h.size(), (3, 5));
    let v = h.concat_ver(&Matrix::zeros(1, 5).unwrap()).unwrap();
    assert_eq!(v.size(), (4, 5));
    assert_eq!(v.get_row(3).unwrap(), Vector::zeros(5).unwrap());
}

#[test]
fn literal_round_trip() {
    let m: Matrix<i64> = "[1 -2 3;4 5 -6]".parse().unwrap();
    assert_eq!(m.size(), (2, 3));
    assert_eq!(m.to_string(), "[1 -2 3;4 5 -6]");
    assert_eq!(m.to_string().parse::<Matrix<i64>>().unwrap(), m);

    let v: Vector<f64> = "[0.5 +1 -2.25]".parse().unwrap();
    assert_eq!(v, Vector::<f64>::from_slice(&[0.5, 1.0, -2.25]).unwrap());

    assert!(matches!("[1 2;3]".parse::<Matrix<f64>>(), Err(Error::Parse { .. })));
    assert!(matches!("[1 x 2]".parse::<Vector<f64>>(), Err(Error::Parse { .. })));
}

// ── Error surface ───────────────────────────────────────────────────

#[test]
fn capacity_ceilings() {
    assert_eq!(
        Vector::<f64>::zeros(MAX_VECTOR_LEN + 1),
        Err(Error::Capacity {
            requested: MAX_VECTOR_LEN + 1,
            max: MAX_VECTOR_LEN
        })
    );
    assert!(Vector::<f64>::zeros(MAX_VECTOR_LEN).is_ok());
    assert!(matches!(
        Matrix::<f64>::zeros(16_001, 16_000),
        Err(Error::Capacity { max: MAX_MATRIX_ELEMENTS, .. })
    ));
    assert!(matches!(
        Matrix::<f64>::zeros(usize::MAX, 2),
        Err(Error::Capacity { .. })
    ));
}

#[test]
fn index_out_of_range() {
    let m = Matrix::<f64>::zeros(2, 2).unwrap();
    assert_eq!(
        m.get(2, 1),
        Err(Error::IndexOutOfRange {
            op: "get",
            axis: Axis::Row,
            index: 2,
            len: 2
        })
    );
    let v = Vector::<f64>::zeros(3).unwrap();
    assert!(matches!(v.get(3), Err(Error::IndexOutOfRange { .. })));
    assert!(matches!(
        v.get_range(2, 1),
        Err(Error::InvalidRange { .. })
    ));
}

#[test]
#[should_panic(expected = "out of range")]
fn index_operator_panics() {
    let m = Matrix::<f64>::zeros(2, 2).unwrap();
    let _ = m[(0, 2)];
}

#[test]
fn divide_by_zero() {
    let m = Matrix::<f64>::from_rows(&[[1.0, 2.0]]).unwrap();
    assert_eq!(m.div_scalar(0.0), Err(Error::DivideByZero { op: "div_scalar" }));
    let v = Vector::from_slice(&[1, 2]).unwrap();
    assert!(matches!(v.div_scalar(0), Err(Error::DivideByZero { .. })));
}

#[test]
fn dimension_mismatch() {
    let a = Matrix::<f64>::zeros(2, 3).unwrap();
    let b = Matrix::<f64>::zeros(2, 3).unwrap();
    assert!(matches!(a.multiply(&b), Err(Error::DimensionMismatch { .. })));
    assert!(matches!(
        a.add(&Matrix::zeros(3, 2).unwrap()),
        Err(Error::DimensionMismatch { .. })
    ));
}
