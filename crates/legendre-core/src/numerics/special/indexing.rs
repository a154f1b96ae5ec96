//! Triangular degree/order storage addressing.
//!
//! A spherical-harmonic coefficient set up to maximum degree `nmax` is a
//! triangular family indexed by degree `n` and order `m` with
//! `0 <= m <= n <= nmax`. These functions map that family onto a flat array
//! ordered by increasing order, then by degree within each order, so the run
//! for order `m` starts right after the run for order `m - 1` ends. Producer
//! and consumers of the same array must agree on `nmax`.

/// Linear storage slot for degree `n` and order `m` under maximum degree
/// `nmax`. Requires `m <= n <= nmax`.
pub fn index_of(n: usize, m: usize, nmax: usize) -> usize {
    assert!(m <= n, "order {m} exceeds degree {n}");
    assert!(n <= nmax, "degree {n} exceeds maximum degree {nmax}");
    m * (nmax + 1) - m * (m + 1) / 2 + n
}

/// Degree/order pair stored at `index`, the exact inverse of [`index_of`].
///
/// The order is recovered by solving the triangular-number run boundary in
/// real arithmetic; the estimate is then corrected in integer arithmetic
/// because the square root can land one run off when `index` sits exactly on
/// a boundary.
pub fn nm_of(index: usize, nmax: usize) -> (usize, usize) {
    assert!(
        index < size(nmax),
        "index {index} exceeds storage for maximum degree {nmax}"
    );

    let half = (2 * nmax + 3) as f64 / 2.0;
    let estimate = half - (half * half - 2.0 * index as f64).sqrt();
    let mut m = (estimate.floor().max(0.0) as usize).min(nmax);
    while m > 0 && index < index_of(m, m, nmax) {
        m -= 1;
    }
    while m < nmax && index >= index_of(m + 1, m + 1, nmax) {
        m += 1;
    }

    let n = m + (index - index_of(m, m, nmax));
    (n, m)
}

/// Number of valid (degree, order) pairs for maximum degree `nmax`.
pub fn size(nmax: usize) -> usize {
    (nmax + 1) * (nmax + 2) / 2
}
