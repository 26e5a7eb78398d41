use std::{
    fmt::{self, Display, Formatter},
    num::NonZeroU32,
    ops::Mul,
    str::FromStr,
};

use miette::Diagnostic;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::{Charge, Count, Mass};

impl Count {
    #[must_use]
    pub const fn new(n: u32) -> Option<Self> {
        match NonZeroU32::new(n) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.get()).map(Self)
    }

    #[must_use]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        self.0.checked_mul(rhs.0).map(Self)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Diagnostic, Error)]
pub enum InvalidCountError {
    #[error("expected at least one ASCII digit")]
    Empty,

    #[error("expected only ASCII digits")]
    NotADigit,

    #[diagnostic(help("a multiplier of 0 would remove the preceding element or group entirely"))]
    #[error("counts must be greater than 0")]
    Zero,

    #[diagnostic(help(
        "if you've mistakenly included a leading zero, like NH02, try just NH2 instead"
    ))]
    #[error("counts cannot start with 0")]
    LeadingZero,

    #[error("counts cannot be larger than {}", u32::MAX)]
    TooLarge,
}

/// Count = digit - "0" , { digit } ;
impl FromStr for Count {
    type Err = InvalidCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InvalidCountError::Empty);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidCountError::NotADigit);
        }
        if s.bytes().all(|b| b == b'0') {
            return Err(InvalidCountError::Zero);
        }
        if s.starts_with('0') {
            return Err(InvalidCountError::LeadingZero);
        }
        // NOTE: Only digits remain at this point, so the only way for parsing to fail is overflow
        s.parse()
            .ok()
            .and_then(Self::new)
            .ok_or(InvalidCountError::TooLarge)
    }
}

impl Mul<Mass> for Count {
    type Output = Mass;

    fn mul(self, rhs: Mass) -> Self::Output {
        Mass(Decimal::from(self.get()) * rhs.0)
    }
}

impl Mul<Charge> for Count {
    type Output = Charge;

    fn mul(self, rhs: Charge) -> Self::Output {
        Charge(i64::from(self.get()) * rhs.0)
    }
}

impl Display for Count {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let count = self.get();
        if count > 1 {
            write!(f, "{count}")?;
        }
        Ok(())
    }
}

impl Default for Count {
    fn default() -> Self {
        Self(NonZeroU32::MIN)
    }
}

impl From<Count> for u32 {
    fn from(value: Count) -> Self {
        value.get()
    }
}
