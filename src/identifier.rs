//! Isotope identifiers as accepted by the lookup functions
//!
use std::fmt;

use crate::error::IdentifierError;
use crate::isoname::Nuclide;

///
/// Either a `ZZAAAM` integer or a name of a nuclide
///
/// Lookups take `impl Into<NucId>`, so integers, strings and already
/// normalised [Nuclide]s can all be passed directly:
/// ```
/// use nucdata::identifier::NucId;
///
/// let by_number = NucId::from(491150);
/// let by_name = NucId::from("In115");
/// assert_eq!(by_number.normalize().unwrap(), by_name.normalize().unwrap());
/// ```
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NucId {
    Zzaaam(i32),
    Name(String),
    Nuclide(Nuclide),
}

impl NucId {
    ///
    /// Resolve to the canonical nuclide key
    ///
    /// Fails if the integer is not a valid `ZZAAAM` number or the string does
    /// not follow any of the forms accepted by [Nuclide]'s `FromStr`.
    ///
    pub fn normalize(&self) -> Result<Nuclide, IdentifierError> {
        match self {
            NucId::Zzaaam(id) => Nuclide::from_zzaaam(*id),
            NucId::Name(name) => name.parse(),
            NucId::Nuclide(nuc) => Ok(*nuc),
        }
    }
}

impl From<i32> for NucId {
    fn from(id: i32) -> Self {
        NucId::Zzaaam(id)
    }
}

impl From<u32> for NucId {
    fn from(id: u32) -> Self {
        // Values which do not fit keep their digits, which fail as a pattern
        match i32::try_from(id) {
            Ok(id) => NucId::Zzaaam(id),
            Err(_) => NucId::Name(id.to_string()),
        }
    }
}

impl From<&str> for NucId {
    fn from(name: &str) -> Self {
        NucId::Name(name.to_string())
    }
}

impl From<String> for NucId {
    fn from(name: String) -> Self {
        NucId::Name(name)
    }
}

impl From<&String> for NucId {
    fn from(name: &String) -> Self {
        NucId::Name(name.clone())
    }
}

impl From<Nuclide> for NucId {
    fn from(nuc: Nuclide) -> Self {
        NucId::Nuclide(nuc)
    }
}

impl From<&Nuclide> for NucId {
    fn from(nuc: &Nuclide) -> Self {
        NucId::Nuclide(*nuc)
    }
}

impl fmt::Display for NucId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NucId::Zzaaam(id) => write!(f, "{id}"),
            NucId::Name(name) => write!(f, "{name}"),
            NucId::Nuclide(nuc) => write!(f, "{nuc}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IdentifierErrorKind;

    #[test]
    fn test_equivalent_forms() {
        let forms: Vec<NucId> = vec![
            621490.into(),
            621490u32.into(),
            "SM149".into(),
            "sm-149".to_string().into(),
            "621490".into(),
            Nuclide::from_zzaaam(621490).unwrap().into(),
        ];
        for id in &forms {
            assert_eq!(621490, id.normalize().unwrap().zzaaam(), "{}", id);
        }
    }

    #[test]
    fn test_invalid_identifiers() {
        assert_eq!(
            IdentifierErrorKind::Pattern,
            NucId::from(-5).normalize().unwrap_err().kind()
        );
        let err = NucId::from(u32::MAX).normalize().unwrap_err();
        assert_eq!(IdentifierErrorKind::Pattern, err.kind());
        assert!(err.to_string().contains("4294967295"), "{}", err);
        assert_eq!(
            IdentifierErrorKind::UnknownElement,
            NucId::from("Qq12").normalize().unwrap_err().kind()
        );
        assert_eq!(
            IdentifierErrorKind::Pattern,
            NucId::from("not a nuclide").normalize().unwrap_err().kind()
        );
    }

    #[test]
    fn test_display() {
        assert_eq!("80160", NucId::from(80160).to_string());
        assert_eq!("PD105", NucId::from("PD105").to_string());
        assert_eq!(
            "Am-242m",
            NucId::from(Nuclide::from_zzaaam(952421).unwrap()).to_string()
        );
    }
}
