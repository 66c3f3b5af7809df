use rand::{rngs::StdRng, SeedableRng};
use rref::{
    domains::{
        float::RR,
        rational::{Rational, RationalField, Q},
        Ring,
    },
    tensors::{
        elimination::{gauss_jordan, EliminationError},
        matrix::Matrix,
    },
};

/// Build `[A | A x]` for a random `A` and `x`.
fn random_system(rng: &mut StdRng, n: u32) -> (Matrix<RationalField>, Vec<Rational>) {
    let a: Vec<Rational> = (0..n * n).map(|_| Q.sample(rng, (-9, 10))).collect();
    let x: Vec<Rational> = (0..n)
        .map(|_| Q.sample(rng, (-20, 21)) / Q.sample(rng, (1, 7)))
        .collect();

    let b: Vec<Rational> = (0..n as usize)
        .map(|r| {
            let mut s = Rational::zero();
            for c in 0..n as usize {
                Q.add_assign(&mut s, &Q.mul(&a[r * n as usize + c], &x[c]));
            }
            s
        })
        .collect();

    let a = Matrix::from_linear(a, n, n, Q).unwrap();
    let b = Matrix::from_linear(b, n, 1, Q).unwrap();
    (a.augment(&b).unwrap(), x)
}

#[test]
fn random_exact_solutions() {
    let mut rng = StdRng::seed_from_u64(42);

    let mut solved = 0;
    for _ in 0..50 {
        let (mut m, x) = random_system(&mut rng, 4);
        m.gauss_jordan().unwrap();

        if let Some(sol) = m.solution() {
            assert_eq!(sol, x);
            solved += 1;
        } else {
            // a singular system keeps at least one row without its pivot
            assert!(!m.is_identity_block());
        }
    }

    assert!(solved > 0);
}

#[test]
fn float_agrees_with_exact() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..20 {
        let (m, _) = random_system(&mut rng, 3);
        let mut f = m.map(|r| r.to_f64(), RR);
        let mut q = m.clone();

        f.gauss_jordan().unwrap();
        q.gauss_jordan().unwrap();

        if let (Some(fs), Some(qs)) = (f.solution(), q.solution()) {
            for (a, b) in fs.iter().zip(&qs) {
                assert!((a - b.to_f64()).abs() < 1e-6 * (1. + b.to_f64().abs()));
            }
        }
    }
}

#[test]
fn float_rounding_is_visible() {
    // the float result is the nearest double, the exact field keeps 1/3
    let mut f = Matrix::from_nested_vec(vec![vec![3., 1.]], RR).unwrap();
    f.gauss_jordan().unwrap();
    assert_eq!(f[(0, 1)], 1. / 3.);

    let mut q = Matrix::from_nested_vec(vec![vec![3.into(), 1.into()]], Q).unwrap();
    q.gauss_jordan().unwrap();
    assert_eq!(q[(0, 1)], Rational::new(1, 3));
    assert_eq!(q[(0, 1)].to_decimal().unwrap().to_string(), "0.(3)");
}

#[test]
fn dimension_errors_leave_storage_untouched() {
    let mut rows = vec![vec![1., 2.], vec![3., 4.], vec![5., 6.]];
    let orig = rows.clone();

    let err = gauss_jordan(&RR, &mut rows, 3, 2).unwrap_err();
    assert_eq!(err, EliminationError::InvalidDimensions { nrows: 3, ncols: 2 });
    assert_eq!(
        err.to_string(),
        "Invalid dimensions for elimination: 3 rows and 2 columns"
    );
    assert_eq!(rows, orig);

    let err = gauss_jordan(&RR, &mut rows, 4, 4).unwrap_err();
    assert!(matches!(err, EliminationError::OutOfBounds { .. }));
    assert_eq!(rows, orig);
}

#[test]
fn inconsistent_system_is_not_an_error() {
    // x + y = 1, 2x + 2y = 3 is inconsistent: the second row keeps a non-zero right-hand side
    let mut m = Matrix::from_nested_vec(
        vec![
            vec![1.into(), 1.into(), 1.into()],
            vec![2.into(), 2.into(), 3.into()],
        ],
        Q,
    )
    .unwrap();

    assert_eq!(m.gauss_jordan(), Ok(()));
    assert_eq!(m[(1, 1)], Rational::zero());
    assert_eq!(m[(1, 2)], Rational::one());
    assert_eq!(m.solution(), None);
}
