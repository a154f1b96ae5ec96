//! Unnormalized Legendre polynomials, the order-0 special case of the
//! associated functions.
//!
//! The three-term recurrence here needs no rescaling: zonal polynomial
//! magnitudes stay bounded on [-1, 1]. Evaluation always recomputes; reuse
//! of a previous result is an explicit opt-in through [`CachedLegendre`]
//! rather than hidden state.

use num_traits::Float;

/// Fills `pn` with the unnormalized Legendre polynomials `P_0..P_nmax`
/// at `costheta`, where `nmax = pn.len() - 1`.
pub fn legendre_into<T: Float>(costheta: T, pn: &mut [T]) {
    let Some(first) = pn.first_mut() else {
        return;
    };
    *first = T::one();
    if pn.len() == 1 {
        return;
    }
    pn[1] = costheta;

    let mut pnmin2 = T::one();
    let mut pnmin1 = costheta;
    for n in 2..pn.len() {
        let value = (cast::<T>((2 * n - 1) as f64) * costheta * pnmin1
            - cast::<T>((n - 1) as f64) * pnmin2)
            / cast::<T>(n as f64);
        pnmin2 = pnmin1;
        pnmin1 = value;
        pn[n] = value;
    }
}

/// Allocating convenience wrapper around [`legendre_into`].
pub fn legendre<T: Float>(nmax: usize, costheta: T) -> Vec<T> {
    let mut pn = vec![T::zero(); nmax + 1];
    legendre_into(costheta, &mut pn);
    pn
}

/// Memoizes the most recent [`legendre`] evaluation.
///
/// The memo key is the exact bit pattern of the input, so reuse only happens
/// for bit-identical arguments and a NaN input behaves like any other key
/// instead of defeating an `==` comparison.
#[derive(Debug, Clone)]
pub struct CachedLegendre {
    key: Option<u64>,
    pn: Vec<f64>,
}

impl CachedLegendre {
    pub fn new(nmax: usize) -> Self {
        Self {
            key: None,
            pn: vec![0.0; nmax + 1],
        }
    }

    pub fn nmax(&self) -> usize {
        self.pn.len() - 1
    }

    /// Returns the polynomials at `costheta`, recomputing only when the
    /// input differs bitwise from the previous call.
    pub fn values(&mut self, costheta: f64) -> &[f64] {
        let key = costheta.to_bits();
        if self.key != Some(key) {
            legendre_into(costheta, &mut self.pn);
            self.key = Some(key);
        }
        &self.pn
    }
}

fn cast<T: Float>(value: f64) -> T {
    T::from(value).expect("finite f64 must be representable in the scalar type")
}
