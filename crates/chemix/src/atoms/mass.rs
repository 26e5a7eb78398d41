use rust_decimal::Decimal;

use crate::Mass;

impl Mass {
    pub const ZERO: Self = Self(Decimal::ZERO);

    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[must_use]
    pub fn round_dp(self, dp: u32) -> Self {
        Self(self.0.round_dp(dp))
    }
}
