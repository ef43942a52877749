//! Per-nuclide reference data and the lookups on it
//!
//! [NucData] holds two tables: atomic weights and bound neutron scattering
//! lengths. Both are keyed by [Nuclide], so any identifier accepted by
//! [NucId] can be used for a lookup.
//!
//! The bundled values are available through [NucData::reference] or, without
//! building a new table, through [reference_data] and the free functions at
//! the crate root.
//!
//! # Atomic weights
//! A single precise value is stored per nuclide. Comparing it with a mass
//! number (e.g. `16.0` for O-16) is deprecated; use
//! [Nuclide::mass_number](crate::isoname::Nuclide::mass_number) for that, and
//! [weights_match] to compare precise weights.
//!
use itertools::Itertools;
use lazy_static::lazy_static;
use log::trace;
use num_complex::Complex64;
use std::collections::HashMap;

use crate::error::{IdentifierError, NucDataError};
use crate::identifier::NucId;
use crate::isoname::Nuclide;
use crate::tables;

/// Relative tolerance for comparing atomic weights
pub const WEIGHT_TOLERANCE: f64 = 1e-9;

///
/// Compare two atomic weights with [WEIGHT_TOLERANCE]
///
/// ```
/// use nucdata::data::weights_match;
///
/// assert!(weights_match(15.99491461957, 15.994914619570001));
/// assert!(!weights_match(15.99491461957, 16.0));
/// ```
///
pub fn weights_match(a: f64, b: f64) -> bool {
    (a - b).abs() <= WEIGHT_TOLERANCE * a.abs().max(b.abs())
}

fn resolve(id: impl Into<NucId>) -> Result<Nuclide, IdentifierError> {
    let id: NucId = id.into();
    id.normalize()
}

///
/// Coherent and incoherent bound scattering lengths of a nuclide (cm)
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatteringLengths {
    pub coherent: Complex64,
    pub incoherent: Complex64,
}

impl ScatteringLengths {
    pub fn new(coherent: Complex64, incoherent: Complex64) -> Self {
        Self {
            coherent,
            incoherent,
        }
    }

    ///
    /// Total bound scattering length `sqrt(|b_c|² + |b_i|²)`
    ///
    pub fn total(&self) -> f64 {
        (self.coherent.norm_sqr() + self.incoherent.norm_sqr()).sqrt()
    }
}

///
/// Table of nuclear data
///
/// ```
/// use nucdata::data::NucData;
/// use num_complex::Complex64;
///
/// let data = NucData::reference();
/// assert_eq!(15.99491461957, data.nuc_weight(80160).unwrap());
/// assert_eq!(Complex64::new(-3.7406e-13, 0.0), data.b_coherent("H1").unwrap());
///
/// // Custom tables start empty
/// let mut custom = NucData::new();
/// assert!(custom.nuc_weight("O16").is_err());
/// custom.insert_weight("O16", 16.0).unwrap();
/// assert_eq!(16.0, custom.nuc_weight(80160).unwrap());
/// ```
///
#[derive(Debug, Clone, Default)]
pub struct NucData {
    weights: HashMap<Nuclide, f64>,
    scattering: HashMap<Nuclide, ScatteringLengths>,
}

impl NucData {
    ///
    /// Create a new, empty table
    ///
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Create a table filled with the bundled reference values
    ///
    pub fn reference() -> Self {
        let weights = tables::ATOMIC_WEIGHTS
            .iter()
            .filter_map(|&(id, weight)| Nuclide::from_zzaaam(id).ok().map(|n| (n, weight)))
            .collect();
        let scattering = tables::SCATTERING_LENGTHS
            .iter()
            .filter_map(|&(id, [bc_re, bc_im, bi_re, bi_im])| {
                Nuclide::from_zzaaam(id).ok().map(|n| {
                    (
                        n,
                        ScatteringLengths::new(
                            Complex64::new(bc_re, bc_im),
                            Complex64::new(bi_re, bi_im),
                        ),
                    )
                })
            })
            .collect();
        Self {
            weights,
            scattering,
        }
    }

    ///
    /// Set the atomic weight of a nuclide
    ///
    /// Weight must be positive and finite. Returns the previous value if any.
    ///
    pub fn insert_weight(
        &mut self,
        id: impl Into<NucId>,
        weight: f64,
    ) -> Result<Option<f64>, NucDataError> {
        let nuclide = resolve(id)?;
        if !(weight.is_finite() && weight > 0.0) {
            return Err(NucDataError::InvalidValue {
                nuclide,
                quantity: "atomic weight",
                value: weight.to_string(),
            });
        }
        Ok(self.weights.insert(nuclide, weight))
    }

    ///
    /// Set the scattering lengths of a nuclide
    ///
    /// Returns the previous values if any.
    ///
    pub fn insert_scattering(
        &mut self,
        id: impl Into<NucId>,
        coherent: Complex64,
        incoherent: Complex64,
    ) -> Result<Option<ScatteringLengths>, NucDataError> {
        let nuclide = resolve(id)?;
        for b in [coherent, incoherent] {
            if !(b.re.is_finite() && b.im.is_finite()) {
                return Err(NucDataError::InvalidValue {
                    nuclide,
                    quantity: "scattering length",
                    value: b.to_string(),
                });
            }
        }
        Ok(self
            .scattering
            .insert(nuclide, ScatteringLengths::new(coherent, incoherent)))
    }

    pub fn has_weight(&self, id: impl Into<NucId>) -> bool {
        resolve(id).map_or(false, |n| self.weights.contains_key(&n))
    }

    pub fn has_scattering(&self, id: impl Into<NucId>) -> bool {
        resolve(id).map_or(false, |n| self.scattering.contains_key(&n))
    }

    ///
    /// Sorted list of nuclides with any data
    ///
    pub fn nuclides(&self) -> Vec<Nuclide> {
        self.weights
            .keys()
            .chain(self.scattering.keys())
            .copied()
            .sorted()
            .dedup()
            .collect()
    }

    ///
    /// Number of nuclides with any data
    ///
    pub fn len(&self) -> usize {
        self.nuclides().len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty() && self.scattering.is_empty()
    }

    ///
    /// Atomic weight of a nuclide in amu
    ///
    /// ```
    /// use nucdata::data::NucData;
    ///
    /// let data = NucData::reference();
    /// assert_eq!(235.043931368, data.nuc_weight(922350).unwrap());
    /// assert_eq!(242.059550625, data.nuc_weight("Am-242m").unwrap());
    /// ```
    ///
    pub fn nuc_weight(&self, id: impl Into<NucId>) -> Result<f64, NucDataError> {
        let nuclide = resolve(id)?;
        trace!("Atomic weight lookup for {nuclide}");
        self.weights
            .get(&nuclide)
            .copied()
            .ok_or(NucDataError::UnknownIsotope {
                nuclide,
                table: "atomic weight",
            })
    }

    ///
    /// Both scattering lengths of a nuclide
    ///
    pub fn scattering_lengths(
        &self,
        id: impl Into<NucId>,
    ) -> Result<ScatteringLengths, NucDataError> {
        let nuclide = resolve(id)?;
        trace!("Scattering length lookup for {nuclide}");
        self.scattering
            .get(&nuclide)
            .copied()
            .ok_or(NucDataError::UnknownIsotope {
                nuclide,
                table: "scattering length",
            })
    }

    ///
    /// Coherent bound scattering length in cm
    ///
    pub fn b_coherent(&self, id: impl Into<NucId>) -> Result<Complex64, NucDataError> {
        Ok(self.scattering_lengths(id)?.coherent)
    }

    ///
    /// Incoherent bound scattering length in cm
    ///
    pub fn b_incoherent(&self, id: impl Into<NucId>) -> Result<Complex64, NucDataError> {
        Ok(self.scattering_lengths(id)?.incoherent)
    }

    ///
    /// Total bound scattering length in cm
    ///
    /// Magnitude of the coherent and incoherent parts combined:
    /// `sqrt(|b_coherent|² + |b_incoherent|²)`
    ///
    pub fn b(&self, id: impl Into<NucId>) -> Result<f64, NucDataError> {
        Ok(self.scattering_lengths(id)?.total())
    }
}

lazy_static! {
    static ref REFERENCE_DATA: NucData = NucData::reference();
}

///
/// Shared table with the bundled reference values
///
/// Built on first use.
///
pub fn reference_data() -> &'static NucData {
    &REFERENCE_DATA
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IdentifierErrorKind;

    #[test]
    fn test_reference_tables_are_valid() {
        // Every bundled entry must survive normalisation
        let data = NucData::reference();
        assert_eq!(tables::ATOMIC_WEIGHTS.len(), data.weights.len());
        assert_eq!(tables::SCATTERING_LENGTHS.len(), data.scattering.len());

        // Sorted and unique keys
        assert!(tables::ATOMIC_WEIGHTS
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.0 < b.0));
        assert!(tables::SCATTERING_LENGTHS
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.0 < b.0));

        for (_, weight) in tables::ATOMIC_WEIGHTS {
            assert!(*weight > 0.0);
        }
    }

    #[test]
    fn test_nuc_weight() {
        let data = reference_data();
        assert_eq!(15.99491461957, data.nuc_weight(80160).unwrap());
        assert_eq!(235.043931368, data.nuc_weight(922350).unwrap());
        assert_eq!(242.059550625, data.nuc_weight(952421).unwrap());

        // Ground state and isomer are different entries
        assert_ne!(
            data.nuc_weight("Am242").unwrap(),
            data.nuc_weight("Am242m").unwrap()
        );
    }

    #[test]
    fn test_scattering() {
        let data = reference_data();
        assert_eq!(
            Complex64::new(-3.7406e-13, 0.0),
            data.b_coherent("H1").unwrap()
        );
        assert_eq!(
            Complex64::new(4.01e-13, -5.62e-15),
            data.b_coherent(491150).unwrap()
        );
        assert_eq!(
            Complex64::new(-2.6e-13, 0.0),
            data.b_incoherent("PD105").unwrap()
        );
        assert_eq!(
            Complex64::new(3.14e-12, -1.03e-12),
            data.b_incoherent(621490).unwrap()
        );
    }

    #[test]
    fn test_total_scattering() {
        let data = reference_data();
        let bc = data.b_coherent(621490).unwrap();
        let bi = data.b_incoherent("SM149").unwrap();
        let expected = (bc.norm().powi(2) + bi.norm().powi(2)).sqrt();
        let b = data.b("SM149").unwrap();
        assert!((b - expected).abs() <= 1e-12 * expected);
        assert_eq!(b, data.b(621490).unwrap());

        // Purely real lengths
        let h1 = data.b("H1").unwrap();
        assert!((h1 - 3.7406e-13_f64.hypot(2.5274e-12)).abs() <= 1e-12 * h1);
    }

    #[test]
    fn test_errors() {
        let data = reference_data();

        // Valid but absent
        match data.nuc_weight(1182990) {
            Err(NucDataError::UnknownIsotope { nuclide, table }) => {
                assert_eq!(1182990, nuclide.zzaaam());
                assert_eq!("atomic weight", table);
            }
            other => panic!("Wrong result {:?}", other),
        }
        assert!(matches!(
            data.b_coherent("U"),
            Err(NucDataError::UnknownIsotope { .. })
        ));
        // Weight known, scattering not
        assert!(data.nuc_weight("Am241").is_ok());
        assert!(matches!(
            data.b("Am241"),
            Err(NucDataError::UnknownIsotope { .. })
        ));

        // Malformed
        match data.b_incoherent("PD-105-X") {
            Err(NucDataError::InvalidIdentifier { source }) => {
                assert_eq!(IdentifierErrorKind::Pattern, source.kind())
            }
            other => panic!("Wrong result {:?}", other),
        }
        assert!(matches!(
            data.nuc_weight(-80160),
            Err(NucDataError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn test_insert() {
        let mut data = NucData::new();
        assert!(data.is_empty());

        assert_eq!(None, data.insert_weight("U235", 235.0).unwrap());
        assert_eq!(Some(235.0), data.insert_weight(922350, 235.04).unwrap());
        assert!(data.insert_weight("U238", -1.0).is_err());
        assert!(data.insert_weight("U238", f64::NAN).is_err());
        assert!(data.insert_weight("Uu238", 238.0).is_err());

        let bc = Complex64::new(1.0e-12, 0.0);
        let bi = Complex64::new(0.0, -1.0e-13);
        assert_eq!(None, data.insert_scattering("U238", bc, bi).unwrap());
        assert!(data
            .insert_scattering("U238", Complex64::new(f64::INFINITY, 0.0), bi)
            .is_err());

        assert!(data.has_weight("u-235"));
        assert!(!data.has_weight("U238"));
        assert!(data.has_scattering(922380));
        assert!(!data.has_scattering("not a nuclide"));

        assert_eq!(2, data.len());
        itertools::assert_equal(
            data.nuclides().iter().map(|n| n.zzaaam()),
            vec![922350, 922380],
        );
        assert_eq!(bc, data.b_coherent("U238").unwrap());
    }

    #[test]
    fn test_weights_match() {
        assert!(weights_match(235.043931368, 235.043931368));
        assert!(!weights_match(235.043931368, 235.0));
        assert!(weights_match(1.0, 1.0 + 1e-12));
    }
}
