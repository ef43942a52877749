//! Isotopic compositions with a total mass
//!
//! A [MassStream] is a normalised composition (weight fraction per nuclide)
//! together with the mass of the whole stream. Streams can be read from
//! simple text files, split into sub-streams by element or nuclide and mixed
//! together with the usual arithmetic operators.
//!
use log::warn;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io::{BufRead, BufReader, Read};
use std::ops::{Add, Div, Mul};
use std::path::Path;

use crate::conversions::to_f64;
use crate::data::NucData;
use crate::error::NucDataError;
use crate::identifier::NucId;
use crate::isoname::{
    self, Nuclide, ACTINIDES, FISSION_PRODUCTS, LANTHANIDES, MINOR_ACTINIDES, TRANSURANICS,
};

/// Composition: weight (or weight fraction) per nuclide
pub type CompDict = BTreeMap<Nuclide, f64>;

///
/// Normalised isotopic composition and its total mass
///
/// ```
/// use nucdata::stream::{CompDict, MassStream};
///
/// let mut comp = CompDict::new();
/// comp.insert("U235".parse().unwrap(), 1.0);
/// comp.insert("U238".parse().unwrap(), 3.0);
///
/// // Negative mass means 'use the sum of the composition'
/// let ms = MassStream::new(comp, -1.0, "fuel");
/// assert_eq!(4.0, ms.mass());
/// assert_eq!(0.25, ms.comp()[&"U235".parse().unwrap()]);
/// ```
///
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MassStream {
    comp: CompDict,
    mass: f64,
    name: String,
}

impl MassStream {
    ///
    /// Create a stream from a composition
    ///
    /// The composition is normalised to sum to 1 (unless its sum is 0).
    /// If `mass` is negative, the sum of the composition before
    /// normalisation is used as the mass.
    ///
    pub fn new(comp: CompDict, mass: f64, name: &str) -> Self {
        let mut stream = Self {
            comp,
            mass,
            name: name.to_string(),
        };
        stream.norm_comp();
        stream
    }

    ///
    /// Read a composition from a text source
    ///
    /// The source is a whitespace separated sequence of `<nuclide> <weight>`
    /// pairs. Any nuclide form is accepted. Entries with a name that does not
    /// identify a nuclide are skipped with a warning.
    ///
    /// Weights of nuclides must be finite and non-negative.
    ///
    /// A nuclide listed more than once gets the sum of its weights. This
    /// differs from bright's `load_from_text`, where the last entry wins.
    ///
    /// ```
    /// use nucdata::stream::MassStream;
    ///
    /// let text = "U235 0.05\n922380 0.95\n";
    /// let ms = MassStream::from_reader(text.as_bytes(), 10.0, "LEU").unwrap();
    /// assert_eq!(10.0, ms.mass());
    /// assert_eq!(2, ms.comp().len());
    /// ```
    ///
    pub fn from_reader(source: impl Read, mass: f64, name: &str) -> Result<Self, NucDataError> {
        let mut tokens = Vec::new();
        for line in BufReader::new(source).lines() {
            let line = line?;
            tokens.extend(line.split_whitespace().map(str::to_string));
        }

        let mut comp = CompDict::new();
        for pair in tokens.chunks(2) {
            let key = &pair[0];
            // Trailing name without a weight
            let Some(value) = pair.get(1) else {
                warn!("Nuclide '{key}' in '{name}' has no weight and is skipped");
                continue;
            };
            let weight = to_f64(value)?;
            let nuclide = match key.parse::<Nuclide>() {
                Ok(nuclide) => nuclide,
                Err(e) => {
                    warn!("Skipping '{key}' in '{name}' which is not a nuclide: {e}");
                    continue;
                }
            };
            if !weight.is_finite() || weight < 0.0 {
                return Err(NucDataError::InvalidValue {
                    nuclide,
                    quantity: "weight",
                    value: value.to_string(),
                });
            }
            *comp.entry(nuclide).or_insert(0.0) += weight;
        }
        Ok(Self::new(comp, mass, name))
    }

    ///
    /// Read a composition from a text file
    ///
    /// See [MassStream::from_reader] for the format.
    ///
    pub fn from_text_file(
        path: impl AsRef<Path>,
        mass: f64,
        name: &str,
    ) -> Result<Self, NucDataError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, mass, name)
    }

    fn comp_sum(&self) -> f64 {
        self.comp.values().sum()
    }

    fn norm_comp(&mut self) {
        let sum = self.comp_sum();
        if sum != 1.0 && sum != 0.0 {
            for weight in self.comp.values_mut() {
                *weight /= sum;
            }
        }
        if self.mass < 0.0 {
            self.mass = sum;
        }
    }

    pub fn comp(&self) -> &CompDict {
        &self.comp
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    ///
    /// Set the mass of the stream to 1
    ///
    pub fn normalize(&mut self) {
        self.mass = 1.0;
    }

    ///
    /// Composition scaled to absolute masses
    ///
    pub fn mult_by_mass(&self) -> CompDict {
        if self.mass == 1.0 {
            return self.comp.clone();
        }
        self.comp
            .iter()
            .map(|(nuc, frac)| (*nuc, frac * self.mass))
            .collect()
    }

    ///
    /// Mean atomic weight of the stream
    ///
    /// Computed as `1 / Σ(wᵢ / Aᵢ)` with weights of the nuclides taken from
    /// `data`. An empty stream has an atomic weight of 0.
    ///
    /// ```
    /// use nucdata::data::{reference_data, weights_match};
    /// use nucdata::stream::{CompDict, MassStream};
    ///
    /// let comp: CompDict = [("O16".parse().unwrap(), 1.0)].into_iter().collect();
    /// let ms = MassStream::new(comp, 1.0, "oxygen");
    /// let a = ms.atomic_weight(reference_data()).unwrap();
    /// assert!(weights_match(15.99491461957, a));
    /// ```
    ///
    pub fn atomic_weight(&self, data: &NucData) -> Result<f64, NucDataError> {
        let mut inverse_a = 0.0;
        for (nuclide, frac) in &self.comp {
            inverse_a += frac / data.nuc_weight(nuclide)?;
        }
        if inverse_a == 0.0 {
            return Ok(0.0);
        }
        Ok(1.0 / inverse_a)
    }

    ///
    /// Extract a sub-stream selected by integers
    ///
    /// Each integer is either a `ZZAAAM` number of a nuclide or an atomic
    /// number selecting the whole element. The sub-stream keeps absolute
    /// masses, so its mass is the mass of the selected part.
    ///
    /// ```
    /// use nucdata::stream::MassStream;
    ///
    /// let text = "U235 1.0 U238 2.0 Pu239 1.0";
    /// let ms = MassStream::from_reader(text.as_bytes(), 8.0, "fuel").unwrap();
    ///
    /// let u = ms.sub_stream_by_ids([92], "U");
    /// assert_eq!(6.0, u.mass());
    ///
    /// let pu = ms.sub_stream_by_ids([942390], "Pu-239");
    /// assert_eq!(2.0, pu.mass());
    /// ```
    ///
    pub fn sub_stream_by_ids(&self, ids: impl IntoIterator<Item = i32>, name: &str) -> Self {
        let ids: BTreeSet<i32> = ids.into_iter().collect();
        let cd = self
            .comp
            .iter()
            .filter(|(nuc, _)| {
                ids.contains(&nuc.zzaaam()) || ids.contains(&(nuc.atomic_number() as i32))
            })
            .map(|(nuc, frac)| (*nuc, frac * self.mass))
            .collect();
        Self::new(cd, -1.0, name)
    }

    ///
    /// Extract a sub-stream selected by names
    ///
    /// Each name is an element symbol, an atomic number written as text, or
    /// any nuclide form. Names that are neither are skipped with a warning.
    ///
    pub fn sub_stream<'a>(&self, names: impl IntoIterator<Item = &'a str>, name: &str) -> Self {
        let mut ids = BTreeSet::new();
        for entry in names {
            if let Ok(z) = isoname::atomic_number(entry) {
                ids.insert(z as i32);
                continue;
            }
            if let Ok(z) = entry.trim().parse::<u32>() {
                if isoname::element_symbol(z).is_ok() {
                    ids.insert(z as i32);
                    continue;
                }
            }
            match NucId::from(entry).normalize() {
                Ok(nuclide) => {
                    ids.insert(nuclide.zzaaam());
                }
                Err(e) => warn!(
                    "Skipping '{entry}' which could not be converted to a nuclide nor an element: {e}"
                ),
            }
        }
        self.sub_stream_by_ids(ids, name)
    }

    fn sub_stream_by_elements(&self, elements: &BTreeSet<u32>, name: &str) -> Self {
        self.sub_stream_by_ids(elements.iter().map(|&z| z as i32), name)
    }

    /// Uranium part of the stream
    pub fn get_u(&self, name: &str) -> Self {
        self.sub_stream_by_ids([92], name)
    }

    /// Plutonium part of the stream
    pub fn get_pu(&self, name: &str) -> Self {
        self.sub_stream_by_ids([94], name)
    }

    /// Lanthanide part of the stream
    pub fn get_lan(&self, name: &str) -> Self {
        self.sub_stream_by_elements(&LANTHANIDES, name)
    }

    /// Actinide part of the stream
    pub fn get_act(&self, name: &str) -> Self {
        self.sub_stream_by_elements(&ACTINIDES, name)
    }

    /// Transuranic part of the stream
    pub fn get_tru(&self, name: &str) -> Self {
        self.sub_stream_by_elements(&TRANSURANICS, name)
    }

    /// Minor actinide part of the stream
    pub fn get_ma(&self, name: &str) -> Self {
        self.sub_stream_by_elements(&MINOR_ACTINIDES, name)
    }

    /// Fission product part of the stream
    pub fn get_fp(&self, name: &str) -> Self {
        self.sub_stream_by_elements(&FISSION_PRODUCTS, name)
    }
}

impl fmt::Display for MassStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mass Stream: {}", self.name)?;
        writeln!(f, "\tMass: {}", self.mass)?;
        writeln!(f, "\t---------")?;
        for (nuclide, frac) in &self.comp {
            writeln!(f, "\t{}\t{}", nuclide.to_llaaam(), frac)?;
        }
        Ok(())
    }
}

impl Add<f64> for MassStream {
    type Output = MassStream;

    fn add(self, y: f64) -> Self::Output {
        MassStream::new(self.comp, self.mass + y, &self.name)
    }
}

impl Add<&MassStream> for &MassStream {
    type Output = MassStream;

    ///
    /// Mix two streams
    ///
    /// Absolute masses of each nuclide are added. The result has no name.
    ///
    fn add(self, y: &MassStream) -> Self::Output {
        let mut cd = self.mult_by_mass();
        for (nuc, mass) in y.mult_by_mass() {
            *cd.entry(nuc).or_insert(0.0) += mass;
        }
        MassStream::new(cd, -1.0, "")
    }
}

impl Add<MassStream> for MassStream {
    type Output = MassStream;

    fn add(self, y: MassStream) -> Self::Output {
        &self + &y
    }
}

impl Mul<f64> for MassStream {
    type Output = MassStream;

    fn mul(self, y: f64) -> Self::Output {
        MassStream::new(self.comp, self.mass * y, &self.name)
    }
}

impl Div<f64> for MassStream {
    type Output = MassStream;

    fn div(self, y: f64) -> Self::Output {
        MassStream::new(self.comp, self.mass / y, &self.name)
    }
}
