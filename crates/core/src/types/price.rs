//! Type-safe price representation using decimal arithmetic.
//!
//! Every amount in the storefront is a [`Decimal`] number of US dollars
//! (not cents). Floating point never touches money.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price in US dollars, the only currency the store sells in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price {
    /// Amount in dollars, not cents.
    pub amount: Decimal,
}

impl Price {
    /// Symbol prefixed to every formatted amount.
    pub const SYMBOL: &'static str = "$";

    /// Create a USD price.
    #[must_use]
    pub const fn usd(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Create a USD price from whole dollars.
    #[must_use]
    pub fn usd_whole(dollars: i64) -> Self {
        Self::usd(Decimal::from(dollars))
    }

    /// Format with two decimal places (e.g., "$178.00").
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{}{rounded:.2}", Self::SYMBOL)
    }

    /// Format without cents when the amount is whole (e.g., "$89", "$9.99").
    ///
    /// Catalog cards use this; order totals always use [`Price::display`].
    #[must_use]
    pub fn display_compact(&self) -> String {
        if self.amount.fract().is_zero() {
            format!("{}{}", Self::SYMBOL, self.amount.trunc())
        } else {
            self.display()
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
