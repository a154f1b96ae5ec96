pub mod harmonics;
pub mod indexing;
pub mod legendre;
pub mod legendre_nm;

pub use harmonics::{SurfaceHarmonicBasis, SurfaceHarmonics};
pub use indexing::{index_of, nm_of, size};
pub use legendre::{legendre, legendre_into, CachedLegendre};
pub use legendre_nm::LegendreNm;
