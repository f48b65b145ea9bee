//! Order summary shown beside the cart: promo discount, shipping, and tax.
//!
//! Amounts are rounded to cents (half away from zero) component by
//! component, and the total is the sum of the rounded components, so the
//! lines on the page always add up to the total on the page.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Orders with a subtotal strictly above this ship free.
pub const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(75, 0, 0, false, 0);

/// Flat shipping fee below the free-shipping threshold ($9.99).
pub const FLAT_SHIPPING: Decimal = Decimal::from_parts(999, 0, 0, false, 2);

/// Sales tax applied to the discounted subtotal (8%).
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Errors returned when a promo code cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromoError {
    #[error("enter a promo code")]
    Empty,
    #[error("promo code {0} is not valid")]
    Unknown(String),
}

/// Promo codes the store honors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromoCode {
    /// 10% off the subtotal for newsletter subscribers.
    Welcome10,
}

impl PromoCode {
    /// The code as customers type it.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Welcome10 => "WELCOME10",
        }
    }

    /// Fraction of the subtotal taken off.
    #[must_use]
    pub const fn rate(self) -> Decimal {
        match self {
            Self::Welcome10 => Decimal::from_parts(10, 0, 0, false, 2),
        }
    }
}

impl FromStr for PromoCode {
    type Err = PromoError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.is_empty() {
            return Err(PromoError::Empty);
        }
        if code.eq_ignore_ascii_case(Self::Welcome10.code()) {
            Ok(Self::Welcome10)
        } else {
            Err(PromoError::Unknown(code.to_uppercase()))
        }
    }
}

/// Order summary lines for a given cart subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub promo: Option<PromoCode>,
    pub discount: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl OrderSummary {
    /// Compute the summary for `subtotal` with an optional promo.
    ///
    /// The discount always follows the subtotal passed in, so changing cart
    /// quantities after applying a code changes the discount with them.
    #[must_use]
    pub fn compute(subtotal: Decimal, promo: Option<PromoCode>) -> Self {
        let subtotal = to_cents(subtotal);
        let discount = promo.map_or(Decimal::ZERO, |code| to_cents(subtotal * code.rate()));
        let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
            Decimal::ZERO
        } else {
            FLAT_SHIPPING
        };
        let tax = to_cents((subtotal - discount) * TAX_RATE);
        let total = subtotal - discount + shipping + tax;

        Self {
            subtotal,
            promo,
            discount,
            shipping,
            tax,
            total,
        }
    }

    #[must_use]
    pub fn ships_free(&self) -> bool {
        self.shipping.is_zero()
    }
}

fn to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
