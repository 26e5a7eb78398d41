use miette::Diagnostic;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum SubstanceError {
    #[diagnostic(help("give at least one species a quantity greater than 0"))]
    #[error("weight percentages are undefined when the total quantity of a substance is 0")]
    UndefinedWeightPercent,

    #[error("the quantity of {formula:?} was {quantity}, but quantities cannot be negative")]
    NegativeQuantity { formula: String, quantity: Decimal },

    #[diagnostic(help("combine the quantities of repeated species into a single entry"))]
    #[error("the species {0:?} was listed more than once")]
    DuplicateSpecies(String),

    #[diagnostic(help("use smaller quantities or give them in a larger unit"))]
    #[error("the quantity of {formula:?} pushed the totals of the substance past the largest representable number")]
    QuantityOverflow { formula: String },
}

impl SubstanceError {
    pub(crate) fn negative_quantity(formula: &str, quantity: Decimal) -> Self {
        let formula = formula.to_owned();

        Self::NegativeQuantity { formula, quantity }
    }

    pub(crate) fn quantity_overflow(formula: &str) -> Self {
        let formula = formula.to_owned();

        Self::QuantityOverflow { formula }
    }
}
