use itertools::Itertools;
use miette::Diagnostic;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum AtomicLookupError {
    #[diagnostic(help("double-check for typos, or add a new entry to the atomic database"))]
    #[error("the element {0:?} could not be found in the supplied atomic database")]
    Symbol(String),

    #[diagnostic(help("double-check for typos, or add a new entry to the atomic database"))]
    #[error("no element with atomic number {0} could be found in the supplied atomic database")]
    AtomicNumber(u32),
}

impl AtomicLookupError {
    pub(crate) fn symbol(symbol: &str) -> Self {
        Self::Symbol(symbol.to_owned())
    }
}

#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum DatabaseError {
    #[error(
        "expected a single uppercase ASCII letter optionally followed by lowercase ASCII letters, got {0:?}"
    )]
    InvalidSymbol(String),

    #[diagnostic(help("every element symbol must be unique"))]
    #[error("the following element symbols were defined more than once: {0}")]
    DuplicateSymbols(String),

    #[diagnostic(help("every atomic number must be unique"))]
    #[error("the following atomic numbers were defined more than once: {0}")]
    DuplicateAtomicNumbers(String),

    #[error("the element {0:?} was given an atomic number of 0")]
    ZeroAtomicNumber(String),

    #[diagnostic(help(
        "standard masses are given in unified atomic mass units (u) and should never round to fewer nucleons than \
        the element has protons"
    ))]
    #[error("the standard mass {mass} u is implausible for {symbol:?} (atomic number {atomic_number})")]
    ImplausibleMass {
        symbol: String,
        atomic_number: u32,
        mass: Decimal,
    },
}

impl DatabaseError {
    pub(crate) fn duplicate_symbols<'s>(symbols: impl IntoIterator<Item = &'s str>) -> Self {
        Self::DuplicateSymbols(display_vec(symbols))
    }

    pub(crate) fn duplicate_atomic_numbers(atomic_numbers: impl IntoIterator<Item = u32>) -> Self {
        Self::DuplicateAtomicNumbers(display_vec(atomic_numbers))
    }

    pub(crate) fn implausible_mass(symbol: &str, atomic_number: u32, mass: Decimal) -> Self {
        let symbol = symbol.to_owned();

        Self::ImplausibleMass {
            symbol,
            atomic_number,
            mass,
        }
    }
}

fn display_vec<I: Ord + ToString>(items: impl IntoIterator<Item = I>) -> String {
    format!("[{}]", items.into_iter().sorted().map(|i| i.to_string()).join(", "))
}
