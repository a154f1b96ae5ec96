//! Real 4-pi normalized surface spherical-harmonic basis functions.
//!
//! For gravity-field work the basis at a geographic point is the pair
//! `Pnm(sin lat) * cos(m lon)` and `Pnm(sin lat) * sin(m lon)`; evaluating a
//! unit load or a spherical-harmonic series at that point reduces to dot
//! products against these values. The evaluator owns one coefficient table
//! and a scratch buffer so repeated points only pay the recursion itself.

use crate::common::constants::DEG2RAD;
use crate::domain::{LegendreError, LegendreResult};
use crate::numerics::special::indexing::{index_of, size};
use crate::numerics::special::legendre_nm::LegendreNm;

#[derive(Debug, Clone)]
pub struct SurfaceHarmonics {
    legendre: LegendreNm<f64>,
    pnm: Vec<f64>,
}

/// Basis values at one point, addressed through [`index_of`] with the
/// `nmax` the evaluator was built for.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceHarmonicBasis {
    nmax: usize,
    cosine: Vec<f64>,
    sine: Vec<f64>,
}

impl SurfaceHarmonics {
    pub fn new(nmax: usize) -> Self {
        Self {
            legendre: LegendreNm::new(nmax),
            pnm: vec![0.0; size(nmax)],
        }
    }

    pub fn nmax(&self) -> usize {
        self.legendre.nmax()
    }

    /// Evaluates the basis at a longitude/latitude point given in degrees.
    ///
    /// Latitude must lie in `[-90, 90]`; it is converted to colatitude for
    /// the associated Legendre recursion. Longitude only enters through
    /// `cos(m lon)` / `sin(m lon)` and is accepted unwrapped.
    pub fn basis(&mut self, lon: f64, lat: f64) -> LegendreResult<SurfaceHarmonicBasis> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(LegendreError::LatitudeOutOfRange { latitude: lat });
        }

        let costheta = (lat * DEG2RAD).sin();
        self.legendre.evaluate(costheta, &mut self.pnm)?;

        let nmax = self.nmax();
        let lambda = lon * DEG2RAD;
        let mut cosine = vec![0.0; self.pnm.len()];
        let mut sine = vec![0.0; self.pnm.len()];
        for m in 0..=nmax {
            let (sin_m, cos_m) = (m as f64 * lambda).sin_cos();
            for n in m..=nmax {
                let idx = index_of(n, m, nmax);
                cosine[idx] = self.pnm[idx] * cos_m;
                sine[idx] = self.pnm[idx] * sin_m;
            }
        }

        Ok(SurfaceHarmonicBasis {
            nmax,
            cosine,
            sine,
        })
    }
}

impl SurfaceHarmonicBasis {
    pub fn nmax(&self) -> usize {
        self.nmax
    }

    pub fn cosine(&self) -> &[f64] {
        &self.cosine
    }

    pub fn sine(&self) -> &[f64] {
        &self.sine
    }

    /// Cosine and sine basis values for one degree/order pair.
    pub fn at(&self, n: usize, m: usize) -> (f64, f64) {
        let idx = index_of(n, m, self.nmax);
        (self.cosine[idx], self.sine[idx])
    }
}
