use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{AtomicDatabase, Compound, Mass, Result, SpeciesEntry, Substance};

use super::errors::SubstanceError;

const PERCENT: Decimal = dec!(100);

impl<'a> Substance<'a> {
    /// Builds a mixture from `(formula, quantity)` pairs, keeping them in the order given.
    ///
    /// Every formula is parsed up front, so the first invalid formula, negative or repeated entry, or a total
    /// quantity of zero, fails the whole substance. Totals too large for a [`Decimal`] are reported as errors
    pub fn new<S: AsRef<str>>(
        db: &'a AtomicDatabase,
        quantities: impl IntoIterator<Item = (S, Decimal)>,
    ) -> Result<Self> {
        let mut compounds: Vec<(Compound<'a>, Decimal)> = Vec::new();
        for (formula, quantity) in quantities {
            let formula = formula.as_ref();
            if quantity < Decimal::ZERO {
                return Err(SubstanceError::negative_quantity(formula, quantity).into());
            }
            if compounds.iter().any(|(compound, _)| compound.formula() == formula) {
                return Err(SubstanceError::DuplicateSpecies(formula.to_owned()).into());
            }
            compounds.push((Compound::new(db, formula)?, quantity));
        }

        let mut total_quantity = Decimal::ZERO;
        let mut total_mass = Decimal::ZERO;
        let mut masses = Vec::with_capacity(compounds.len());
        for (compound, quantity) in &compounds {
            let overflow = || SubstanceError::quantity_overflow(compound.formula());
            let mass = compound
                .molecular_mass()
                .value()
                .checked_mul(*quantity)
                .ok_or_else(overflow)?;
            total_quantity = total_quantity.checked_add(*quantity).ok_or_else(overflow)?;
            total_mass = total_mass.checked_add(mass).ok_or_else(overflow)?;
            masses.push(mass);
        }
        if total_quantity.is_zero() {
            return Err(SubstanceError::UndefinedWeightPercent.into());
        }

        // NOTE: Every element has a positive standard mass and at least one quantity is positive, so the total mass
        // can't be zero here. Each share is at most the total, so the percentages can't overflow either
        let species = compounds
            .into_iter()
            .zip(masses)
            .map(|((compound, quantity), mass)| SpeciesEntry {
                quantity,
                weight_percent: quantity / total_quantity * PERCENT,
                mass_percent: mass / total_mass * PERCENT,
                compound,
            })
            .collect();

        Ok(Self {
            species,
            total_quantity,
            total_mass: Mass(total_mass),
        })
    }

    /// Every species, in the order they were given
    #[must_use]
    pub fn species(&self) -> &[SpeciesEntry<'a>] {
        &self.species
    }

    #[must_use]
    pub fn get(&self, formula: impl AsRef<str>) -> Option<&SpeciesEntry<'a>> {
        let formula = formula.as_ref();
        self.species.iter().find(|species| species.formula() == formula)
    }

    #[must_use]
    pub const fn total_quantity(&self) -> Decimal {
        self.total_quantity
    }

    /// The sum of each species' molecular mass times its quantity
    #[must_use]
    pub const fn total_mass(&self) -> Mass {
        self.total_mass
    }
}

impl<'a> SpeciesEntry<'a> {
    #[must_use]
    pub fn formula(&self) -> &str {
        self.compound.formula()
    }

    #[must_use]
    pub const fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// This species' share of the total quantity, from 0 to 100
    #[must_use]
    pub const fn weight_percent(&self) -> Decimal {
        self.weight_percent
    }

    /// This species' share of the total mass, from 0 to 100
    #[must_use]
    pub const fn mass_percent(&self) -> Decimal {
        self.mass_percent
    }

    #[must_use]
    pub const fn compound(&self) -> &Compound<'a> {
        &self.compound
    }
}

#[cfg(test)]
mod tests {
    use once_cell::sync::Lazy;

    use crate::{ChemixError, ParseErrorKind};

    use super::*;

    static DB: Lazy<AtomicDatabase> = Lazy::new(AtomicDatabase::default);

    fn limestone_mixture() -> Substance<'static> {
        Substance::new(
            &DB,
            [("CaCO3", dec!(1)), ("CO2", dec!(2)), ("CaO", dec!(0.5))],
        )
        .unwrap()
    }

    fn substance_error(quantities: &[(&str, Decimal)]) -> ChemixError {
        *Substance::new(&DB, quantities.iter().copied()).unwrap_err()
    }

    #[test]
    fn weight_percentages() {
        let mixture = limestone_mixture();
        assert_eq!(mixture.total_quantity(), dec!(3.5));

        let percentages: Vec<_> = mixture
            .species()
            .iter()
            .map(|species| (species.formula(), species.weight_percent()))
            .collect();
        assert_eq!(
            percentages,
            vec![
                ("CaCO3", dec!(1) / dec!(3.5) * dec!(100)),
                ("CO2", dec!(2) / dec!(3.5) * dec!(100)),
                ("CaO", dec!(0.5) / dec!(3.5) * dec!(100)),
            ]
        );

        let total: Decimal = percentages.iter().map(|(_, percent)| percent).sum();
        assert!((total - dec!(100)).abs() < dec!(0.000001));
    }

    #[test]
    fn mass_percentages() {
        let mixture = limestone_mixture();
        let calcium_carbonate = Compound::new(&DB, "CaCO3").unwrap().molecular_mass();
        let carbon_dioxide = Compound::new(&DB, "CO2").unwrap().molecular_mass();
        let quicklime = Compound::new(&DB, "CaO").unwrap().molecular_mass();

        let total_mass = calcium_carbonate + carbon_dioxide * dec!(2) + quicklime * dec!(0.5);
        assert_eq!(mixture.total_mass(), total_mass);

        let carbon_dioxide_species = mixture.get("CO2").unwrap();
        assert_eq!(
            carbon_dioxide_species.mass_percent(),
            (carbon_dioxide * dec!(2)).value() / total_mass.value() * dec!(100)
        );

        let total: Decimal = mixture.species().iter().map(SpeciesEntry::mass_percent).sum();
        assert!((total - dec!(100)).abs() < dec!(0.000001));
    }

    #[test]
    fn species_lookup() {
        let mixture = limestone_mixture();
        let quicklime = mixture.get("CaO").unwrap();
        assert_eq!(quicklime.quantity(), dec!(0.5));
        assert_eq!(quicklime.compound(), &Compound::new(&DB, "CaO").unwrap());
        assert_eq!(quicklime.formula(), "CaO");
        // Species are looked up by the formula they were given as, not by composition
        assert_eq!(mixture.get("OCa"), None);
        assert_eq!(mixture.get("H2O"), None);
    }

    #[test]
    fn insertion_order_is_kept() {
        let mixture = Substance::new(&DB, [("O2", dec!(21)), ("N2", dec!(78)), ("Ar", dec!(1))]).unwrap();
        let formulas: Vec<_> = mixture.species().iter().map(SpeciesEntry::formula).collect();
        assert_eq!(formulas, vec!["O2", "N2", "Ar"]);
        assert_eq!(mixture.get("N2").unwrap().weight_percent(), dec!(78));

        let owned_formulas = vec![("Ar".to_owned(), dec!(1)), ("O2".to_owned(), dec!(3))];
        let mixture = Substance::new(&DB, owned_formulas).unwrap();
        assert_eq!(mixture.species()[0].formula(), "Ar");
        assert_eq!(mixture.species()[1].weight_percent(), dec!(75));
    }

    #[test]
    fn zero_quantities_are_kept() {
        let mixture = Substance::new(&DB, [("H2O", dec!(2)), ("NaCl", dec!(0))]).unwrap();
        assert_eq!(mixture.species().len(), 2);
        let salt = mixture.get("NaCl").unwrap();
        assert!(salt.weight_percent().is_zero());
        assert!(salt.mass_percent().is_zero());
        assert_eq!(mixture.get("H2O").unwrap().weight_percent(), dec!(100));
    }

    #[test]
    fn undefined_weight_percentages() {
        let error = substance_error(&[("H2O", dec!(0)), ("NaCl", dec!(0))]);
        assert_eq!(error, ChemixError::from(SubstanceError::UndefinedWeightPercent));
        let error = substance_error(&[]);
        assert_eq!(error, ChemixError::from(SubstanceError::UndefinedWeightPercent));
    }

    #[test]
    fn invalid_quantities() {
        let error = substance_error(&[("H2O", dec!(1)), ("NaCl", dec!(-0.5))]);
        assert_eq!(
            error,
            ChemixError::from(SubstanceError::negative_quantity("NaCl", dec!(-0.5)))
        );

        let error = substance_error(&[("H2O", dec!(1)), ("NaCl", dec!(2)), ("H2O", dec!(3))]);
        assert_eq!(
            error,
            ChemixError::from(SubstanceError::DuplicateSpecies("H2O".to_owned()))
        );
    }

    #[test]
    fn quantity_overflow() {
        let error = substance_error(&[("H", Decimal::MAX), ("He", Decimal::MAX)]);
        assert_eq!(
            error,
            ChemixError::from(SubstanceError::quantity_overflow("H"))
        );

        // Each mass fits on its own, but their sum doesn't
        let error = substance_error(&[("H", dec!(3e28)), ("H2", dec!(3e28))]);
        assert_eq!(
            error,
            ChemixError::from(SubstanceError::quantity_overflow("H2"))
        );

        let error = substance_error(&[("H2O", dec!(1)), ("H2SO4", dec!(1e27))]);
        assert_eq!(
            error,
            ChemixError::from(SubstanceError::quantity_overflow("H2SO4"))
        );

        // Large quantities are fine as long as their masses still fit
        let mixture = Substance::new(&DB, [("H2", dec!(1e26)), ("O2", dec!(1e26))]).unwrap();
        assert_eq!(mixture.get("O2").unwrap().weight_percent(), dec!(50));
        assert_eq!(mixture.total_quantity(), dec!(2e26));
    }

    #[test]
    fn invalid_formulas_fail_fast() {
        let error = substance_error(&[("H2O", dec!(1)), ("Ca(OH", dec!(2))]);
        match error {
            ChemixError::Parse { error } => {
                assert_eq!(error.kind(), &ParseErrorKind::UnbalancedGroup('('));
                assert_eq!(error.formula(), "Ca(OH");
            }
            error => panic!("expected a parse error, got {error:?}"),
        }

        // Even when the total would otherwise be zero, bad formulas are reported first
        let error = substance_error(&[("Xy", dec!(0))]);
        assert!(matches!(error, ChemixError::Parse { .. }));
    }
}
