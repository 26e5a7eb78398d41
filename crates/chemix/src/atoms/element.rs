use std::fmt::{self, Display, Formatter};

use crate::{AtomicDatabase, Element, Mass, Massive};

use super::errors::AtomicLookupError;

impl<'a> Element<'a> {
    pub fn new(db: &'a AtomicDatabase, symbol: impl AsRef<str>) -> Result<Self, AtomicLookupError> {
        let symbol = symbol.as_ref();
        db.get_by_symbol(symbol)
            .ok_or_else(|| AtomicLookupError::symbol(symbol))
    }

    pub fn from_atomic_number(
        db: &'a AtomicDatabase,
        atomic_number: u32,
    ) -> Result<Self, AtomicLookupError> {
        db.get_by_atomic_number(atomic_number)
            .ok_or(AtomicLookupError::AtomicNumber(atomic_number))
    }

    #[must_use]
    pub const fn symbol(&self) -> &'a str {
        self.symbol
    }

    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.description.name
    }

    #[must_use]
    pub const fn atomic_number(&self) -> u32 {
        self.description.atomic_number
    }

    /// The nucleon count of this element's default nuclide
    #[must_use]
    pub const fn mass_number(&self) -> u32 {
        self.description.mass_number
    }

    /// The tabulated, natural-abundance-averaged mass of this element
    #[must_use]
    pub fn standard_mass(&self) -> Mass {
        Mass(self.description.standard_mass)
    }

    #[must_use]
    pub const fn natural_protons(&self) -> u32 {
        self.atomic_number()
    }

    #[must_use]
    pub const fn natural_neutrons(&self) -> u32 {
        // NOTE: `AtomicDatabase` validation guarantees that the mass number is never below the atomic number
        self.mass_number() - self.atomic_number()
    }

    /// Neutral atoms carry one electron per proton
    #[must_use]
    pub const fn natural_electrons(&self) -> u32 {
        self.atomic_number()
    }
}

impl Display for Element<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

impl Massive for Element<'_> {
    fn mass(&self) -> Mass {
        self.standard_mass()
    }
}
