use legendre_core::numerics::special::{index_of, nm_of, size, LegendreNm, SurfaceHarmonics};
use legendre_core::numerics::{stable_sum, within_tolerance};

fn assert_scalar_close(label: &str, expected: f64, actual: f64, abs_tol: f64, rel_tol: f64) {
    let abs_diff = (actual - expected).abs();
    let rel_diff = abs_diff / expected.abs().max(1.0);
    assert!(
        abs_diff <= abs_tol || rel_diff <= rel_tol,
        "{label} expected={expected:.15e} actual={actual:.15e} abs_diff={abs_diff:.15e} rel_diff={rel_diff:.15e}"
    );
}

#[test]
fn high_degree_evaluation_stays_finite() {
    let table = LegendreNm::<f64>::new(2000);
    assert_eq!(table.len(), 2_003_001);

    let pnm = table.values(0.5).expect("valid evaluation");
    for (idx, value) in pnm.iter().enumerate() {
        assert!(
            value.is_finite(),
            "non-finite value {value} at idx={idx} (n,m)={:?}",
            nm_of(idx, 2000)
        );
    }

    // The zonal column never underflows to zero away from the poles.
    for n in [0, 1, 500, 1000, 2000] {
        assert!(pnm[index_of(n, 0, 2000)].abs() > 0.0, "n={n}");
    }
}

#[test]
fn degree_one_and_two_match_closed_forms_across_the_interval() {
    let table = LegendreNm::<f64>::new(2);

    for step in 0..=40 {
        let costheta = (step as f64 - 20.0) / 20.0;
        let sintheta = (1.0 - costheta * costheta).sqrt();
        let pnm = table.values(costheta).expect("valid evaluation");

        let cases = [
            ("P10", index_of(1, 0, 2), 3.0f64.sqrt() * costheta),
            ("P11", index_of(1, 1, 2), 3.0f64.sqrt() * sintheta),
            (
                "P20",
                index_of(2, 0, 2),
                5.0f64.sqrt() * (3.0 * costheta * costheta - 1.0) / 2.0,
            ),
            (
                "P21",
                index_of(2, 1, 2),
                15.0f64.sqrt() * costheta * sintheta,
            ),
            (
                "P22",
                index_of(2, 2, 2),
                15.0f64.sqrt() * sintheta * sintheta / 2.0,
            ),
        ];
        for (label, idx, expected) in cases {
            assert!(
                within_tolerance(expected, pnm[idx], 1.0e-14, 1.0e-13, 1.0e-15),
                "{label} costheta={costheta} expected={expected:.15e} actual={:.15e}",
                pnm[idx]
            );
        }
    }
}

#[test]
fn per_degree_power_sums_follow_the_addition_theorem() {
    // For 4-pi normalized functions, sum over orders of Pnm^2 equals 2n+1
    // at every point of the interval.
    let nmax = 120;
    let table = LegendreNm::<f64>::new(nmax);

    for costheta in [-0.99, -0.5, 0.0, 0.31, 0.87] {
        let pnm = table.values(costheta).expect("valid evaluation");
        for n in 0..=nmax {
            let squares: Vec<f64> = (0..=n)
                .map(|m| {
                    let value = pnm[index_of(n, m, nmax)];
                    value * value
                })
                .collect();
            let power = stable_sum(&squares);
            assert_scalar_close(
                &format!("degree {n} at costheta={costheta}"),
                (2 * n + 1) as f64,
                power,
                1.0e-9,
                1.0e-11,
            );
        }
    }
}

#[test]
fn low_degree_norms_integrate_to_the_convention() {
    // Simpson quadrature of Pnm^2 over [-1, 1]; 4-pi normalization fixes the
    // integral at 2 for zonal entries and 4 otherwise.
    let table = LegendreNm::<f64>::new(2);
    let intervals = 200;
    let step = 2.0 / intervals as f64;

    for (label, n, m, expected) in [
        ("P10", 1usize, 0usize, 2.0),
        ("P11", 1, 1, 4.0),
        ("P21", 2, 1, 4.0),
    ] {
        let idx = index_of(n, m, 2);
        let square_at = |x: f64| -> f64 {
            let pnm = table.values(x).expect("valid evaluation");
            pnm[idx] * pnm[idx]
        };

        let mut integral = square_at(-1.0) + square_at(1.0);
        for k in 1..intervals {
            let x = -1.0 + step * k as f64;
            integral += square_at(x) * if k % 2 == 1 { 4.0 } else { 2.0 };
        }
        integral *= step / 3.0;

        assert_scalar_close(label, expected, integral, 1.0e-6, 1.0e-6);
    }
}

#[test]
fn every_output_slot_is_overwritten_on_each_call() {
    let nmax = 30;
    let table = LegendreNm::<f64>::new(nmax);
    let sentinel = 999.0;
    let mut pnm = vec![sentinel; size(nmax)];

    table.evaluate(0.9, &mut pnm).expect("valid evaluation");
    assert!(pnm.iter().all(|&value| value != sentinel));

    // A second call at a different point must not leave stale entries.
    let first = pnm.clone();
    table.evaluate(-0.2, &mut pnm).expect("valid evaluation");
    for (n, m) in [(1, 0), (1, 1), (15, 7), (30, 0), (30, 30)] {
        let idx = index_of(n, m, nmax);
        assert_ne!(pnm[idx], first[idx], "stale slot n={n} m={m}");
    }
}

/// Independent validation data for a unit load at lon 0.5, lat 53.0
/// (4-pi normalized, nmax 5).
const UNIT_LOAD_BASIS: [(usize, usize, f64, f64); 21] = [
    (0, 0, 0.10000000000000e+01, 0.00000000000000e+00),
    (1, 0, 0.13832772801306e+01, 0.00000000000000e+00),
    (2, 0, 0.10212748929338e+01, 0.00000000000000e+00),
    (3, 0, 0.19977631019326e+00, 0.00000000000000e+00),
    (4, 0, -0.71104388667820e+00, 0.00000000000000e+00),
    (5, 0, -0.13303831637421e+01, 0.00000000000000e+00),
    (1, 1, 0.10423345064422e+01, 0.90963154314668e-02),
    (2, 1, 0.18614043905837e+01, 0.16244230021762e-01),
    (3, 1, 0.21343981280424e+01, 0.18626610276269e-01),
    (4, 1, 0.16696066487732e+01, 0.14570436486416e-01),
    (5, 1, 0.59290758193332e+00, 0.51742260796706e-02),
    (2, 2, 0.70125429368904e+00, 0.12240439227534e-01),
    (3, 2, 0.14817439746500e+01, 0.25863937284512e-01),
    (4, 2, 0.21041449543880e+01, 0.36727986797224e-01),
    (5, 2, 0.22445390503895e+01, 0.39178574858469e-01),
    (3, 3, 0.45575270596480e+00, 0.11934304613339e-01),
    (4, 3, 0.10919408843509e+01, 0.28593478355801e-01),
    (5, 3, 0.17913385584263e+01, 0.46907850994811e-01),
    (4, 4, 0.29083907068701e+00, 0.10156324146655e-01),
    (5, 4, 0.77036706491121e+00, 0.26901810697799e-01),
    (5, 5, 0.18351146735867e+00, 0.80122836994040e-02),
];

#[test]
fn surface_basis_matches_independent_unit_load_table() {
    let mut harmonics = SurfaceHarmonics::new(5);
    let basis = harmonics.basis(0.5, 53.0).expect("valid point");

    for (n, m, expected_cosine, expected_sine) in UNIT_LOAD_BASIS {
        let (cosine, sine) = basis.at(n, m);
        assert_scalar_close(
            &format!("C n={n} m={m}"),
            expected_cosine,
            cosine,
            1.0e-13,
            5.0e-13,
        );
        assert_scalar_close(
            &format!("S n={n} m={m}"),
            expected_sine,
            sine,
            1.0e-13,
            5.0e-13,
        );
    }
}
