//! Element symbols and the canonical nuclide key
//!
//! Every nuclide is stored as a [Nuclide], which is a triple of atomic number
//! `Z`, mass number `A` and metastable state `M`. A few textual and integer
//! forms are in common use and all of them convert to and from [Nuclide]:
//!
//! | Form      | O-16     | Am-242m   | Natural U |
//! | --------- | -------- | --------- | --------- |
//! | `ZZAAAM`  | `80160`  | `952421`  | `920000`  |
//! | `LLAAAM`  | `O16`    | `AM242M`  | `U`       |
//! | name      | `O-16`   | `Am-242m` | `U`       |
//! | MCNP      | `8016`   | `95642`   | `92000`   |
//!
//! Mass number `0` denotes a natural element.
//!
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::conversions::to_i32;
use crate::error::{IdentifierError, IdentifierErrorKind};

const ELEMENT_SYMBOLS: &[&str] = &[
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh",
    "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Largest supported atomic number
pub const MAX_ATOMIC_NUMBER: u32 = 118;

/// Largest supported mass number
pub const MAX_MASS_NUMBER: u32 = 299;

/// Largest supported metastable state
pub const MAX_META_STATE: u32 = 9;

lazy_static! {
    /// Map of element symbols (upper case) to atomic number
    static ref ELEMENT_ATOMIC_NUMBERS: HashMap<String, u32> = ELEMENT_SYMBOLS
        .iter()
        .enumerate()
        .map(|(idx, sym)| (sym.to_ascii_uppercase(), idx as u32 + 1))
        .collect();

    /// Symbol, optional dash, optional mass number, optional metastable marker
    static ref NUCLIDE_PATTERN: Regex =
        Regex::new(r"^([a-zA-Z]{1,2})-?(\d{1,3})?(?:([mM])(\d)?)?$").unwrap();

    /// Lanthanides: La-Lu
    pub static ref LANTHANIDES: BTreeSet<u32> = (57..=71).collect();

    /// Actinides: Ac-Lr
    pub static ref ACTINIDES: BTreeSet<u32> = (89..=103).collect();

    /// Transuranics: every element heavier than U
    pub static ref TRANSURANICS: BTreeSet<u32> = (93..=MAX_ATOMIC_NUMBER).collect();

    /// Minor actinides: actinides heavier than U, without Pu
    pub static ref MINOR_ACTINIDES: BTreeSet<u32> =
        ACTINIDES.iter().copied().filter(|&z| z > 92 && z != 94).collect();

    /// Fission products: every element lighter than the actinides
    pub static ref FISSION_PRODUCTS: BTreeSet<u32> = (1..89).collect();
}

///
/// Return element symbol given its atomic number
///
/// First letter is capitalised. That is:
/// ```
/// use nucdata::isoname::element_symbol;
///
/// assert_eq!("H", element_symbol(1).unwrap());
/// assert_eq!("Pu", element_symbol(94).unwrap());
///
/// // Is error outside the range
/// assert!(element_symbol(0).is_err());
/// assert!(element_symbol(119).is_err());
/// ```
///
pub fn element_symbol(atomic_number: u32) -> Result<&'static str, IdentifierError> {
    if atomic_number == 0 || atomic_number > MAX_ATOMIC_NUMBER {
        return Err(IdentifierError::new(
            IdentifierErrorKind::OutOfRange {
                z: atomic_number as i32,
            },
            &atomic_number.to_string(),
        ));
    }
    Ok(ELEMENT_SYMBOLS[atomic_number as usize - 1])
}

///
/// Return atomic number of an element given its symbol
///
/// Symbol is case insensitive. All "Pu", "pu", "PU" and "pU" should be accepted.
/// ```
/// use nucdata::isoname::atomic_number;
///
/// assert_eq!(94, atomic_number("Pu").unwrap());
/// assert_eq!(94, atomic_number("pu").unwrap());
/// assert_eq!(94, atomic_number("PU").unwrap());
/// assert_eq!(94, atomic_number("pU").unwrap());
///
/// assert!(atomic_number("Xx").is_err());
/// ```
///
pub fn atomic_number(symbol: &str) -> Result<u32, IdentifierError> {
    ELEMENT_ATOMIC_NUMBERS
        .get(&symbol.to_ascii_uppercase())
        .copied()
        .ok_or_else(|| IdentifierError::new(IdentifierErrorKind::UnknownElement, symbol))
}

///
/// Canonical key of a nuclide
///
/// Ordering follows the `ZZAAAM` number, so that sorted collections list
/// nuclides by element first.
///
/// ```
/// use nucdata::isoname::Nuclide;
///
/// let am: Nuclide = "Am-242m".parse().unwrap();
/// assert_eq!(952421, am.zzaaam());
/// assert_eq!("AM242M", am.to_llaaam());
/// assert_eq!("Am-242m", am.to_string());
/// assert_eq!(am, Nuclide::from_zzaaam(952421).unwrap());
/// ```
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Nuclide {
    z: u32,
    a: u32,
    m: u32,
}

impl Nuclide {
    ///
    /// Build a nuclide from its components
    ///
    /// `a == 0` denotes the natural element and cannot be metastable.
    /// Otherwise the mass number may not be smaller than the atomic number.
    ///
    pub fn new(z: u32, a: u32, m: u32) -> Result<Self, IdentifierError> {
        let context = format!("Z={z} A={a} M={m}");
        if z == 0 || z > MAX_ATOMIC_NUMBER {
            return Err(IdentifierError::new(
                IdentifierErrorKind::OutOfRange { z: z as i32 },
                &context,
            ));
        }
        if a > MAX_MASS_NUMBER || (a != 0 && a < z) {
            return Err(IdentifierError::new(
                IdentifierErrorKind::InvalidMassNumber { a: a as i32 },
                &context,
            ));
        }
        if m > MAX_META_STATE || (a == 0 && m != 0) {
            return Err(IdentifierError::new(
                IdentifierErrorKind::InvalidMetaState { m: m as i32 },
                &context,
            ));
        }
        Ok(Self { z, a, m })
    }

    ///
    /// Natural element with a given atomic number
    ///
    pub fn element(z: u32) -> Result<Self, IdentifierError> {
        Self::new(z, 0, 0)
    }

    ///
    /// Decode a `Z*10000 + A*10 + M` integer
    ///
    /// ```
    /// use nucdata::isoname::Nuclide;
    ///
    /// let u = Nuclide::from_zzaaam(922350).unwrap();
    /// assert_eq!((92, 235, 0), (u.atomic_number(), u.mass_number(), u.meta_state()));
    ///
    /// assert!(Nuclide::from_zzaaam(-80160).is_err());
    /// assert!(Nuclide::from_zzaaam(2350).is_err());
    /// ```
    ///
    pub fn from_zzaaam(zzaaam: i32) -> Result<Self, IdentifierError> {
        if zzaaam < 0 {
            return Err(IdentifierError::new(
                IdentifierErrorKind::Pattern,
                &zzaaam.to_string(),
            ));
        }
        let id = zzaaam as u32;
        Self::new(id / 10000, (id / 10) % 1000, id % 10)
            .map_err(|e| IdentifierError::new(e.kind(), &zzaaam.to_string()))
    }

    ///
    /// Decode an MCNP identifier
    ///
    /// MCNP uses `Z*1000 + A`. Metastable states are encoded by shifting the
    /// mass number by `300 + 100*M`, so Am-242m is `95642`.
    ///
    /// ```
    /// use nucdata::isoname::Nuclide;
    ///
    /// assert_eq!(922350, Nuclide::from_mcnp(92235).unwrap().zzaaam());
    /// assert_eq!(952421, Nuclide::from_mcnp(95642).unwrap().zzaaam());
    /// assert_eq!(95642, Nuclide::from_zzaaam(952421).unwrap().to_mcnp());
    /// ```
    ///
    pub fn from_mcnp(mcnp: i32) -> Result<Self, IdentifierError> {
        if mcnp < 0 {
            return Err(IdentifierError::new(
                IdentifierErrorKind::Pattern,
                &mcnp.to_string(),
            ));
        }
        let id = mcnp as u32;
        let z = id / 1000;
        let raw_a = id % 1000;
        // Lowest metastable state that gives a sensible mass number wins
        let (a, m) = if raw_a > MAX_MASS_NUMBER {
            (1..=MAX_META_STATE)
                .filter_map(|m| raw_a.checked_sub(300 + 100 * m).map(|a| (a, m)))
                .find(|&(a, _)| a <= MAX_MASS_NUMBER)
                .unwrap_or((raw_a, 0))
        } else {
            (raw_a, 0)
        };
        Self::new(z, a, m).map_err(|e| IdentifierError::new(e.kind(), &mcnp.to_string()))
    }

    /// Atomic number `Z`
    pub fn atomic_number(&self) -> u32 {
        self.z
    }

    /// Mass number `A` (0 for natural element)
    pub fn mass_number(&self) -> u32 {
        self.a
    }

    /// Metastable state `M`
    pub fn meta_state(&self) -> u32 {
        self.m
    }

    pub fn is_metastable(&self) -> bool {
        self.m > 0
    }

    pub fn is_element(&self) -> bool {
        self.a == 0
    }

    ///
    /// Element symbol with first letter capitalised
    ///
    pub fn symbol(&self) -> &'static str {
        // z is range-checked on construction
        ELEMENT_SYMBOLS[self.z as usize - 1]
    }

    pub fn zzaaam(&self) -> i32 {
        (self.z * 10000 + self.a * 10 + self.m) as i32
    }

    ///
    /// MCNP identifier
    ///
    /// Higher metastable states use the same scheme with larger offsets.
    ///
    pub fn to_mcnp(&self) -> i32 {
        let a = if self.m > 0 {
            self.a + 300 + 100 * self.m
        } else {
            self.a
        };
        (self.z * 1000 + a) as i32
    }

    ///
    /// Upper case symbol followed by mass number and `M` marker
    ///
    /// ```
    /// use nucdata::isoname::Nuclide;
    ///
    /// assert_eq!("PD105", Nuclide::from_zzaaam(461050).unwrap().to_llaaam());
    /// assert_eq!("U", Nuclide::from_zzaaam(920000).unwrap().to_llaaam());
    /// ```
    ///
    pub fn to_llaaam(&self) -> String {
        let sym = self.symbol().to_ascii_uppercase();
        match (self.a, self.m) {
            (0, _) => sym,
            (a, 0) => format!("{sym}{a}"),
            (a, 1) => format!("{sym}{a}M"),
            (a, m) => format!("{sym}{a}M{m}"),
        }
    }

    ///
    /// Return true if nuclide belongs to an element in the set
    ///
    pub fn in_elements(&self, elements: &BTreeSet<u32>) -> bool {
        elements.contains(&self.z)
    }
}

impl fmt::Display for Nuclide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.a, self.m) {
            (0, _) => write!(f, "{}", self.symbol()),
            (a, 0) => write!(f, "{}-{}", self.symbol(), a),
            (a, 1) => write!(f, "{}-{}m", self.symbol(), a),
            (a, m) => write!(f, "{}-{}m{}", self.symbol(), a, m),
        }
    }
}

impl TryFrom<i32> for Nuclide {
    type Error = IdentifierError;
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_zzaaam(value)
    }
}

impl FromStr for Nuclide {
    type Err = IdentifierError;

    ///
    /// Convert from any supported string form
    ///
    /// Accepts `LLAAAM` and the dashed names in any case, as well as a
    /// `ZZAAAM` number written as text.
    /// ```
    /// use nucdata::isoname::Nuclide;
    ///
    /// let h1: Nuclide = "H1".parse().unwrap();
    /// assert_eq!(10010, h1.zzaaam());
    ///
    /// // Case and dash do not matter
    /// for name in ["PD105", "pd105", "Pd-105", "461050"] {
    ///     assert_eq!(461050, name.parse::<Nuclide>().unwrap().zzaaam());
    /// }
    ///
    /// // Metastable states
    /// assert_eq!(952421, "AM242M".parse::<Nuclide>().unwrap().zzaaam());
    /// assert_eq!(952422, "Am-242m2".parse::<Nuclide>().unwrap().zzaaam());
    ///
    /// // Natural element
    /// assert_eq!(920000, "U".parse::<Nuclide>().unwrap().zzaaam());
    ///
    /// assert!("Q235".parse::<Nuclide>().is_err());
    /// assert!("U-235-m".parse::<Nuclide>().is_err());
    /// ```
    ///
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            let id = to_i32(trimmed)
                .map_err(|_| IdentifierError::new(IdentifierErrorKind::Pattern, s))?;
            return Self::from_zzaaam(id);
        }

        let groups = NUCLIDE_PATTERN
            .captures(trimmed)
            .ok_or_else(|| IdentifierError::new(IdentifierErrorKind::Pattern, s))?;

        let z = atomic_number(&groups[1]).map_err(|e| IdentifierError::new(e.kind(), s))?;
        let a = match groups.get(2) {
            Some(digits) => digits
                .as_str()
                .parse::<u32>()
                .map_err(|_| IdentifierError::new(IdentifierErrorKind::Pattern, s))?,
            None => 0,
        };
        let m = match (groups.get(3), groups.get(4)) {
            (None, _) => 0,
            (Some(_), None) => 1,
            (Some(_), Some(digit)) => digit.as_str().parse::<u32>().unwrap_or(0),
        };
        if groups.get(3).is_some() && m == 0 {
            return Err(IdentifierError::new(
                IdentifierErrorKind::InvalidMetaState { m: 0 },
                s,
            ));
        }
        Self::new(z, a, m).map_err(|e| IdentifierError::new(e.kind(), s))
    }
}
