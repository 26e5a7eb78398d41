use std::fmt::{self, Display, Formatter};

use ahash::HashSet;

use crate::{
    AtomicDatabase, Charge, Charged, ChemixError, Compound, Constituents, FormulaNode, Mass, Massive, Result,
};

impl<'a> Compound<'a> {
    /// Parses and flattens `formula`. A compound is either built completely or not at all
    pub fn new(db: &'a AtomicDatabase, formula: impl AsRef<str>) -> Result<Self> {
        let formula = formula.as_ref();
        let structure = FormulaNode::parse(db, formula)?;
        let constituents = structure
            .flatten()
            .ok_or_else(|| ChemixError::count_overflow(formula))?;

        Ok(Self {
            formula: formula.to_owned(),
            structure,
            constituents,
        })
    }

    /// The formula exactly as it was given
    #[must_use]
    pub fn formula(&self) -> &str {
        &self.formula
    }

    #[must_use]
    pub const fn structure(&self) -> &FormulaNode<'a> {
        &self.structure
    }

    #[must_use]
    pub const fn constituents(&self) -> &Constituents<'a> {
        &self.constituents
    }

    /// The sum of each element's standard mass times its number of atoms
    #[must_use]
    pub fn molecular_mass(&self) -> Mass {
        self.constituents.iter().map(Massive::mass).sum()
    }

    /// The mass of the compound when built from the particles of each element's default nuclide. This ignores
    /// isotopic abundances and binding energies, so it drifts from [`Compound::molecular_mass()`] as atoms get
    /// heavier
    #[must_use]
    pub fn particle_mass(&self) -> Mass {
        self.constituents
            .iter()
            .map(|entry| entry.atom_count() * entry.atom().mass())
            .sum()
    }

    #[must_use]
    pub fn atom_count(&self) -> u64 {
        self.constituents
            .iter()
            .map(|entry| u64::from(entry.atom_count().get()))
            .sum()
    }

    #[must_use]
    pub fn species_symbols(&self) -> HashSet<&'a str> {
        self.constituents.symbols().collect()
    }
}

impl Massive for Compound<'_> {
    fn mass(&self) -> Mass {
        self.molecular_mass()
    }
}

impl Charged for Compound<'_> {
    fn charge(&self) -> Charge {
        self.constituents.iter().map(Charged::charge).sum()
    }
}

impl Display for Compound<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formula)
    }
}
