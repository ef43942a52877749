//! A small nuclear data library
//!
//! `nucdata` answers simple per-nuclide questions: the atomic weight and the
//! bound neutron scattering lengths (coherent, incoherent and total) of an
//! isotope. Isotopes may be named by a `ZZAAAM` integer (`Z*10000 + A*10 + M`)
//! or by a name such as `"H1"`, `"Pd-105"` or `"AM242M"`:
//! ```
//! use num_complex::Complex64;
//!
//! assert_eq!(15.99491461957, nucdata::nuc_weight(80160).unwrap());
//! assert_eq!(Complex64::new(-3.7406e-13, 0.0), nucdata::b_coherent("H1").unwrap());
//! assert_eq!(nucdata::b("SM149").unwrap(), nucdata::b(621490).unwrap());
//! ```
//!
//! The free functions use the bundled reference table. Custom tables can be
//! built with [data::NucData].
//!
//! On top of the lookups [stream::MassStream] represents isotopic
//! compositions, e.g. to compute the mean atomic weight of a fuel.
//!
//! The library does not aim to provide evaluated data of its own. Bundled
//! values are a compact selection meant for quick estimates.
//!
pub mod conversions;
pub mod data;
pub mod error;
pub mod identifier;
pub mod isoname;
pub mod stream;
mod tables;

use num_complex::Complex64;

use crate::data::reference_data;
use crate::error::NucDataError;
use crate::identifier::NucId;

///
/// Atomic weight of a nuclide in amu
///
/// Fails with [NucDataError::UnknownIsotope] if the reference table has no
/// entry and with [NucDataError::InvalidIdentifier] if the identifier does
/// not name a nuclide.
/// ```
/// assert_eq!(235.043931368, nucdata::nuc_weight(922350).unwrap());
/// assert!(nucdata::nuc_weight("Og-294").is_err());
/// assert!(nucdata::nuc_weight("Og-2944").is_err());
/// ```
///
pub fn nuc_weight(id: impl Into<NucId>) -> Result<f64, NucDataError> {
    reference_data().nuc_weight(id)
}

///
/// Coherent bound scattering length in cm
///
/// ```
/// use num_complex::Complex64;
///
/// assert_eq!(
///     Complex64::new(4.01e-13, -5.62e-15),
///     nucdata::b_coherent(491150).unwrap()
/// );
/// ```
///
pub fn b_coherent(id: impl Into<NucId>) -> Result<Complex64, NucDataError> {
    reference_data().b_coherent(id)
}

///
/// Incoherent bound scattering length in cm
///
/// ```
/// use num_complex::Complex64;
///
/// assert_eq!(
///     Complex64::new(-2.6e-13, 0.0),
///     nucdata::b_incoherent("PD105").unwrap()
/// );
/// ```
///
pub fn b_incoherent(id: impl Into<NucId>) -> Result<Complex64, NucDataError> {
    reference_data().b_incoherent(id)
}

///
/// Total bound scattering length in cm
///
/// Equal to `sqrt(|b_coherent|² + |b_incoherent|²)`.
///
pub fn b(id: impl Into<NucId>) -> Result<f64, NucDataError> {
    reference_data().b(id)
}
