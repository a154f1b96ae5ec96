//! Fast fully normalized associated Legendre functions.
//!
//! [`LegendreNm`] precomputes the square-root recursion weights once per
//! maximum degree, so evaluating a point costs one `sqrt` for `sin(theta)`
//! and otherwise only multiplies and adds. Raw associated Legendre
//! magnitudes span hundreds of orders of magnitude across the degree/order
//! triangle; the recursion therefore carries its sectorial seed in a
//! rescaled domain and removes the rescaling only when writing each output
//! slot, which keeps every intermediate inside the scalar type's range for
//! maximum degrees well into the thousands.

use crate::domain::{LegendreError, LegendreResult};
use crate::numerics::special::indexing::{index_of, size};
use num_traits::Float;

/// Precomputed recursion weights for fully normalized associated Legendre
/// functions up to a fixed maximum degree.
///
/// The table is immutable after construction and carries no per-call state,
/// so one instance can serve concurrent evaluations as long as each call
/// supplies its own output buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendreNm<T> {
    nmax: usize,
    len: usize,
    /// Sectorial growth weights, indexed by order.
    wnn: Vec<T>,
    /// Degree-recurrence weights, indexed like the output buffer.
    wnm: Vec<T>,
}

/// Per-order scratch state of the degree recurrence: the two previous
/// rescaled values, the current one, and the running rescaling factor that
/// converts them back to true magnitude.
#[derive(Debug, Clone, Copy)]
struct OrderScratch<T> {
    pnmin2: T,
    pnmin1: T,
    pn: T,
    sectorial: T,
}

impl<T: Float> LegendreNm<T> {
    pub fn new(nmax: usize) -> Self {
        let len = size(nmax);
        let mut wnn = vec![T::zero(); nmax + 1];
        let mut wnm = vec![T::zero(); len];

        if nmax >= 1 {
            wnn[1] = cast::<T>(3.0).sqrt();
        }
        for (n, weight) in wnn.iter_mut().enumerate().skip(2) {
            *weight = (cast::<T>((2 * n + 1) as f64) / cast::<T>((2 * n) as f64)).sqrt();
        }

        for m in 0..=nmax {
            for n in (m + 1)..=nmax {
                let ratio =
                    (2 * n + 1) as f64 / (n + m) as f64 * (2 * n - 1) as f64 / (n - m) as f64;
                wnm[index_of(n, m, nmax)] = cast::<T>(ratio).sqrt();
            }
        }

        Self {
            nmax,
            len,
            wnn,
            wnm,
        }
    }

    pub fn nmax(&self) -> usize {
        self.nmax
    }

    /// Number of output slots, `(nmax + 1)(nmax + 2) / 2`.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fills `pnm` with the fully normalized associated Legendre value for
    /// every `(n, m)` pair up to the table's maximum degree, addressed
    /// through [`index_of`].
    ///
    /// `costheta` must lie in `[-1, 1]` and `pnm` must hold at least
    /// [`Self::len`] slots; every slot up to that length is overwritten on
    /// each call.
    pub fn evaluate(&self, costheta: T, pnm: &mut [T]) -> LegendreResult<()> {
        if !(costheta >= -T::one() && costheta <= T::one()) {
            return Err(LegendreError::CosthetaOutOfRange {
                costheta: costheta.to_f64().unwrap_or(f64::NAN),
            });
        }
        if pnm.len() < self.len {
            return Err(LegendreError::OutputTooSmall {
                nmax: self.nmax,
                required: self.len,
                actual: pnm.len(),
            });
        }

        let sin_theta = (T::one() - costheta * costheta).sqrt();
        let seed = stability_seed::<T>();

        let mut scratch = OrderScratch {
            pnmin2: T::zero(),
            pnmin1: T::zero(),
            pn: T::zero(),
            sectorial: T::one() / seed,
        };

        // Degree 0, order 0 is unnormalized by construction.
        pnm[0] = T::one();

        for m in 0..self.nmax {
            let diagonal = index_of(m, m, self.nmax);
            scratch.pnmin2 = seed;

            // Off-diagonal element n = m + 1 straight from the sectorial seed.
            scratch.pnmin1 = self.wnm[diagonal + 1] * costheta * scratch.pnmin2;
            pnm[diagonal + 1] = scratch.pnmin1 * scratch.sectorial;

            for n in (m + 2)..=self.nmax {
                let idx = index_of(n, m, self.nmax);
                scratch.pn = self.wnm[idx]
                    * (costheta * scratch.pnmin1 - scratch.pnmin2 / self.wnm[idx - 1]);
                pnm[idx] = scratch.pn * scratch.sectorial;
                scratch.pnmin2 = scratch.pnmin1;
                scratch.pnmin1 = scratch.pn;
            }

            // Advance n,n -> n+1,n+1 and emit the next sectorial.
            scratch.sectorial = scratch.sectorial * self.wnn[m + 1] * sin_theta;
            pnm[index_of(m + 1, m + 1, self.nmax)] = scratch.sectorial * seed;
        }

        Ok(())
    }

    /// Allocating convenience wrapper around [`Self::evaluate`].
    pub fn values(&self, costheta: T) -> LegendreResult<Vec<T>> {
        let mut pnm = vec![T::zero(); self.len];
        self.evaluate(costheta, &mut pnm)?;
        Ok(pnm)
    }
}

/// Sectorial rescaling seed, derived from the scalar type's dynamic range.
///
/// The exponent reproduces 1e-280 for `f64` (dynamic range ~1e-308) and
/// scales equivalently for narrower types, leaving the same relative
/// headroom before the rescaled recursion values would underflow.
fn stability_seed<T: Float>() -> T {
    T::min_positive_value().powf(cast::<T>(0.91))
}

fn cast<T: Float>(value: f64) -> T {
    T::from(value).expect("finite f64 must be representable in the scalar type")
}
