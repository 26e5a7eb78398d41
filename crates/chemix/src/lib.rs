//! Chemical formulas, compounds, and mixtures built on a particle-level model of atoms

pub mod atoms;
pub mod compounds;
pub mod errors;
pub mod parsers;
pub mod substances;
#[cfg(test)]
mod testing_tools;

use std::num::NonZeroU32;

// External Crate Imports
use derive_more::{Add, Display, From, Into, IsVariant, Mul, Neg, Sub, Sum};
use rust_decimal::Decimal;
use serde::Serialize;
use static_assertions::assert_impl_all;

// Re-exports
pub use atoms::{
    InvalidCountError,
    atomic_database::{AtomicDatabase, ElementEntry},
    errors::{AtomicLookupError, DatabaseError},
};
pub use errors::{ChemixError, Result};
pub use parsers::errors::{ParseError, ParseErrorKind};
pub use substances::errors::SubstanceError;

// NOTE: For the types in this module, 'a lifetimes indicate references to the AtomicDatabase. Values are immutable
// once built, so everything here is safe to share between threads
// ---------------------------------------------------------------------------------------------------------------------

/// A single periodic-table entry, borrowed from an [`AtomicDatabase`]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Element<'a> {
    symbol: &'a str,
    description: &'a atoms::atomic_database::ElementDescription,
}

/// The three sub-atomic particles that make up an [`Atom`]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, IsVariant)]
pub enum Particle {
    Proton,
    Neutron,
    Electron,
}

/// A specific nuclide or ion: explicit particle counts, optionally tied to the [`Element`] it was built from
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Atom<'a> {
    element: Option<Element<'a>>,
    protons: u32,
    neutrons: u32,
    electrons: u32,
}

/// Typed options for building an [`Atom`]. Unset counts default to the element's natural counts, or to zero when
/// no element is given
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct AtomSpec<'a> {
    pub element: Option<Element<'a>>,
    pub proton_count: Option<u32>,
    pub neutron_count: Option<u32>,
    pub electron_count: Option<u32>,
}

// ---------------------------------------------------------------------------------------------------------------------

/// A parsed chemical formula: either a single element or an ordered group of multiplied children
#[derive(Clone, Eq, PartialEq, Debug, IsVariant)]
pub enum FormulaNode<'a> {
    Element(Element<'a>),
    Group(Vec<(FormulaNode<'a>, Count)>),
}

/// The flattened composition of a formula, one entry per element, kept in order of first occurrence
#[derive(Clone, Eq, Debug, Default)]
pub struct Constituents<'a>(Vec<ConstituentEntry<'a>>);

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ConstituentEntry<'a> {
    element: Element<'a>,
    atom_count: Count,
    atom: Atom<'a>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Compound<'a> {
    formula: String,
    structure: FormulaNode<'a>,
    constituents: Constituents<'a>,
}

/// A mixture of compounds, each present in some relative quantity
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Substance<'a> {
    species: Vec<SpeciesEntry<'a>>,
    total_quantity: Decimal,
    total_mass: Mass,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SpeciesEntry<'a> {
    quantity: Decimal,
    weight_percent: Decimal,
    mass_percent: Decimal,
    compound: Compound<'a>,
}

// ---------------------------------------------------------------------------------------------------------------------

/// A positive number of atoms, or a positive multiplier in a formula
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize)]
pub struct Count(NonZeroU32);

/// A mass in unified atomic mass units
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Debug,
    Default,
    Serialize,
    Add,
    Sub,
    Neg,
    Mul,
    Sum,
    From,
    Into,
    Display,
)]
#[display("{_0} u")]
pub struct Mass(Decimal);

/// An electric charge in elementary charges
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Debug,
    Default,
    Serialize,
    Add,
    Sub,
    Neg,
    Mul,
    Sum,
    From,
    Into,
    Display,
)]
#[display("{_0} e")]
pub struct Charge(i64);

// =====================================================================================================================

pub trait Massive {
    fn mass(&self) -> Mass;
}

pub trait Charged {
    fn charge(&self) -> Charge;
}

// Blanket impls

macro_rules! massive_ref_impls {
    ($($ref_type:ty),+ $(,)?) => {
        $(
            impl<T: Massive> Massive for $ref_type {
                fn mass(&self) -> Mass {
                    (**self).mass()
                }
            }
        )+
    };
}

massive_ref_impls!(&T, Box<T>);

macro_rules! charged_ref_impls {
    ($($ref_type:ty),+ $(,)?) => {
        $(
            impl<T: Charged> Charged for $ref_type {
                fn charge(&self) -> Charge {
                    (**self).charge()
                }
            }
        )+
    };
}

charged_ref_impls!(&T, Box<T>);

assert_impl_all!(AtomicDatabase: Send, Sync);
assert_impl_all!(Element<'static>: Send, Sync, Copy);
assert_impl_all!(Atom<'static>: Send, Sync, Copy);
assert_impl_all!(Compound<'static>: Send, Sync);
assert_impl_all!(Substance<'static>: Send, Sync);
assert_impl_all!(Box<ChemixError>: Send, Sync);
