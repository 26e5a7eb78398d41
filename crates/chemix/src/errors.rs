use miette::Diagnostic;
use thiserror::Error;

use crate::{
    atoms::errors::{AtomicLookupError, DatabaseError},
    parsers::errors::ParseError,
    substances::errors::SubstanceError,
};

pub type Result<T, E = Box<ChemixError>> = std::result::Result<T, E>;

#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum ChemixError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse {
        #[from]
        error: ParseError,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Lookup {
        #[from]
        error: AtomicLookupError,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Database {
        #[from]
        error: DatabaseError,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Substance {
        #[from]
        error: SubstanceError,
    },

    #[diagnostic(help("split the formula into smaller compounds, or use a smaller multiplier"))]
    #[error("the number of atoms in {formula:?} does not fit in a 32-bit count")]
    CountOverflow { formula: String },
}

impl ChemixError {
    pub(crate) fn count_overflow(formula: &str) -> Self {
        let formula = formula.to_owned();

        Self::CountOverflow { formula }
    }
}

// NOTE: Most of the public API returns `Box<ChemixError>` to keep `Result`s small, so these save an extra
// `.map_err(|e| Box::new(e.into()))` at every call site
macro_rules! boxed_from_impls {
    ($($error:ty),+ $(,)?) => {
        $(
            impl From<$error> for Box<ChemixError> {
                fn from(value: $error) -> Self {
                    Box::new(value.into())
                }
            }
        )+
    };
}

boxed_from_impls!(ParseError, AtomicLookupError, DatabaseError, SubstanceError);
