//! Defines the error type used by nucdata
//!
use std::fmt::Display;
use thiserror::Error;

use crate::isoname::Nuclide;

#[derive(Error, Debug)]
pub enum NucDataError {
    ///
    /// Identifier could not be normalised to a nuclide
    ///
    #[error("NucData: Invalid isotope identifier:\n  {source}")]
    InvalidIdentifier {
        #[from]
        source: IdentifierError,
    },

    ///
    /// Identifier is valid but the table has no entry for it
    ///
    #[error("NucData: No {table} data for {nuclide}")]
    UnknownIsotope {
        nuclide: Nuclide,
        table: &'static str,
    },

    ///
    /// Value rejected when inserted into a table
    ///
    #[error("NucData: Invalid {quantity} for {nuclide}: {value}")]
    InvalidValue {
        nuclide: Nuclide,
        quantity: &'static str,
        value: String,
    },

    ///
    ///
    ///
    #[error("NucData: Encountered parsing error:\n  {source}")]
    Parse {
        #[from]
        source: ParseError,
    },

    ///
    /// Encountered an I/O error
    ///
    #[error("NucData: Encountered I/O error:\n  {source}")]
    IOError {
        #[from]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed conversion of '{context}' due to: {kind}")]
    Float {
        kind: std::num::ParseFloatError,
        context: String,
    },
    #[error("Failed conversion of '{context}' due to: {kind}")]
    Int {
        kind: std::num::ParseIntError,
        context: String,
    },
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum IdentifierErrorKind {
    #[error("Atomic number {z} is outside of 1-118 range")]
    OutOfRange { z: i32 },
    #[error("Unknown element symbol")]
    UnknownElement,
    #[error("Invalid mass number {a}")]
    InvalidMassNumber { a: i32 },
    #[error("Invalid metastable state {m}")]
    InvalidMetaState { m: i32 },
    #[error("Does not follow any known nuclide naming pattern")]
    Pattern,
}

///
/// Error for an identifier which does not name a nuclide
///
#[derive(Error, Debug, Clone)]
pub struct IdentifierError {
    kind: IdentifierErrorKind,
    context: String,
}

impl IdentifierError {
    pub fn new(kind: IdentifierErrorKind, context: &str) -> Self {
        Self {
            kind,
            context: context.to_string(),
        }
    }

    ///
    /// Get the reason for the failure
    ///
    pub fn kind(&self) -> IdentifierErrorKind {
        self.kind
    }
}

impl Display for IdentifierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}': {}", self.context, self.kind)
    }
}
