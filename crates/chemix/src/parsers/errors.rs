use std::{fmt, iter};

use miette::{Diagnostic, LabeledSpan, SourceCode, SourceSpan};
use thiserror::Error;

use crate::atoms::{InvalidCountError, errors::AtomicLookupError};

/// A formula that could not be parsed, along with the span of the token that broke it
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("{kind}")]
pub struct ParseError {
    formula: String,
    span: SourceSpan,
    kind: ParseErrorKind,
}

#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum ParseErrorKind {
    #[diagnostic(help("a formula needs at least one element symbol, like the H and O in H2O"))]
    #[error("expected a chemical formula, but got an empty string")]
    EmptyFormula,

    #[diagnostic(help("remove the empty brackets, or put the formula they were meant to repeat inside them"))]
    #[error("groups and hydrate segments must contain at least one element")]
    EmptyGroup,

    #[diagnostic(help(
        "every '(' needs a matching ')' and every '[' a matching ']'; hydrate separators like '·' can only \
        appear outside of groups"
    ))]
    #[error("the group delimiter {0:?} is unbalanced")]
    UnbalancedGroup(char),

    #[diagnostic(transparent)]
    #[error(transparent)]
    UnknownElement(Box<AtomicLookupError>),

    #[diagnostic(transparent)]
    #[error(transparent)]
    InvalidMultiplier(InvalidCountError),

    #[diagnostic(help(
        "multipliers follow the element or group they repeat, like the 2 in H2O; a leading coefficient is only \
        allowed after a hydrate separator, like the 5 in CuSO4·5H2O"
    ))]
    #[error("expected an element or group before this multiplier")]
    MissingTerm,

    #[diagnostic(help(
        "formulas are built from element symbols, counts, '()' or '[]' groups, and the hydrate separators '·', \
        '•' or '*'"
    ))]
    #[error("the character {0:?} can't appear in a chemical formula")]
    InvalidCharacter(char),
}

impl ParseError {
    pub(crate) fn new(formula: &str, span: impl Into<SourceSpan>, kind: ParseErrorKind) -> Self {
        Self {
            formula: formula.to_owned(),
            span: span.into(),
            kind,
        }
    }

    /// The complete formula that failed to parse
    #[must_use]
    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// The byte span of the offending token within [`ParseError::formula()`]
    #[must_use]
    pub const fn span(&self) -> SourceSpan {
        self.span
    }

    #[must_use]
    pub const fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

impl ParseErrorKind {
    const fn label(&self) -> &'static str {
        match self {
            Self::EmptyFormula => "empty formula",
            Self::EmptyGroup => "nothing to repeat here",
            Self::UnbalancedGroup(_) => "unbalanced delimiter",
            Self::UnknownElement(_) => "unknown element",
            Self::InvalidMultiplier(_) => "invalid multiplier",
            Self::MissingTerm => "multiplier without an element or group",
            Self::InvalidCharacter(_) => "invalid character",
        }
    }
}

impl Diagnostic for ParseError {
    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.kind.help()
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.formula)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some(self.kind.label().to_owned()), self.span);
        Some(Box::new(iter::once(label)))
    }
}
