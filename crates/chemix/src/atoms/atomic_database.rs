// External Crate Imports
use ahash::{HashMap, HashMapExt};
use itertools::Itertools;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::ToPrimitive;

// Local Crate Imports
use super::{errors::DatabaseError, periodic_table::PERIODIC_TABLE};
use crate::Element;

// Public API ==========================================================================================================

/// The element table that formulas are resolved against
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AtomicDatabase {
    pub(super) elements: HashMap<String, ElementDescription>,
    pub(super) symbols: HashMap<u32, String>,
}

/// One row of a custom element table, see [`AtomicDatabase::new`]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ElementEntry<'s> {
    pub symbol: &'s str,
    pub name: &'s str,
    pub atomic_number: u32,
    pub standard_mass: Decimal,
}

impl AtomicDatabase {
    pub fn new<'s>(entries: impl IntoIterator<Item = ElementEntry<'s>>) -> Result<Self, DatabaseError> {
        let entries: Vec<_> = entries.into_iter().collect();

        let duplicate_symbols: Vec<_> = entries.iter().map(|e| e.symbol).duplicates().collect();
        if !duplicate_symbols.is_empty() {
            return Err(DatabaseError::duplicate_symbols(duplicate_symbols));
        }

        let duplicate_numbers: Vec<_> = entries.iter().map(|e| e.atomic_number).duplicates().collect();
        if !duplicate_numbers.is_empty() {
            return Err(DatabaseError::duplicate_atomic_numbers(duplicate_numbers));
        }

        let mut elements = HashMap::with_capacity(entries.len());
        let mut symbols = HashMap::with_capacity(entries.len());
        for entry in entries {
            let (symbol, description) = validate_entry(entry)?;
            symbols.insert(description.atomic_number, symbol.clone());
            elements.insert(symbol, description);
        }

        Ok(Self { elements, symbols })
    }

    #[must_use]
    pub fn get_by_symbol(&self, symbol: impl AsRef<str>) -> Option<Element<'_>> {
        self.elements
            .get_key_value(symbol.as_ref())
            .map(|(symbol, description)| Element {
                symbol,
                description,
            })
    }

    #[must_use]
    pub fn get_by_atomic_number(&self, atomic_number: u32) -> Option<Element<'_>> {
        self.symbols
            .get(&atomic_number)
            .and_then(|symbol| self.get_by_symbol(symbol))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Default for AtomicDatabase {
    fn default() -> Self {
        // SAFETY: The embedded periodic table is checked by `build_default_atomic_database` below
        Self::new(PERIODIC_TABLE).unwrap()
    }
}

// Internal Representation =============================================================================================

#[derive(Clone, Eq, PartialEq, Debug)]
pub(crate) struct ElementDescription {
    pub(crate) name: String,
    pub(crate) atomic_number: u32,
    pub(crate) mass_number: u32,
    pub(crate) standard_mass: Decimal,
}

fn validate_entry(
    ElementEntry {
        symbol,
        name,
        atomic_number,
        standard_mass,
    }: ElementEntry,
) -> Result<(String, ElementDescription), DatabaseError> {
    if !is_element_symbol(symbol) {
        return Err(DatabaseError::InvalidSymbol(symbol.to_owned()));
    }

    if atomic_number == 0 {
        return Err(DatabaseError::ZeroAtomicNumber(symbol.to_owned()));
    }

    // NOTE: The nucleon count of an element's default nuclide is taken from its standard mass, with halves rounded up
    let mass_number = (standard_mass > Decimal::ZERO)
        .then(|| {
            standard_mass
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_u32()
        })
        .flatten()
        .filter(|&a| a >= atomic_number)
        .ok_or_else(|| DatabaseError::implausible_mass(symbol, atomic_number, standard_mass))?;

    let description = ElementDescription {
        name: name.to_owned(),
        atomic_number,
        mass_number,
        standard_mass,
    };
    Ok((symbol.to_owned(), description))
}

fn is_element_symbol(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase()) && chars.all(|c| c.is_ascii_lowercase())
}

// Module Tests ========================================================================================================
