//! Money types with precise decimal arithmetic
//!
//! Reimbursement amounts are computed with rust_decimal so that cents-per-
//! kilometre rates never pick up floating-point noise. Amounts stay exact
//! as computed; rounding to the display precision happens only when a
//! value is formatted.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use thiserror::Error;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// Currency codes following ISO 4217
///
/// AUD is the operating currency for the reimbursement programme; the
/// remaining codes exist for multi-site trials billed elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    AUD,
    NZD,
    USD,
    GBP,
    EUR,
}

impl Currency {
    /// Display precision; every supported currency uses cents
    pub fn decimal_places(&self) -> u32 {
        2
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::AUD => "$",
            Currency::NZD => "NZ$",
            Currency::USD => "US$",
            Currency::GBP => "£",
            Currency::EUR => "€",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::AUD => "AUD",
            Currency::NZD => "NZD",
            Currency::USD => "USD",
            Currency::GBP => "GBP",
            Currency::EUR => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A monetary amount tagged with its currency
///
/// Arithmetic across currencies is refused rather than silently mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(dec!(0), currency)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// The amount rounded to the currency's display precision
    pub fn rounded(&self) -> Decimal {
        self.amount.round_dp(self.currency.decimal_places())
    }

    /// Addition that refuses mismatched currencies
    pub fn checked_add(self, other: Money) -> Result<Money, MoneyError> {
        let (lhs, rhs) = Self::same_currency(self, other)?;
        Ok(Self::new(lhs + rhs, self.currency))
    }

    /// Subtraction that refuses mismatched currencies
    pub fn checked_sub(self, other: Money) -> Result<Money, MoneyError> {
        let (lhs, rhs) = Self::same_currency(self, other)?;
        Ok(Self::new(lhs - rhs, self.currency))
    }

    /// Scales by a factor (e.g., kilometres against a per-km rate)
    pub fn scale(self, factor: Decimal) -> Money {
        Self::new(self.amount * factor, self.currency)
    }

    /// Divides by a scalar (e.g., for per-claim averages)
    pub fn divide(self, divisor: Decimal) -> Result<Money, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self::new(self.amount / divisor, self.currency))
    }

    fn same_currency(a: Money, b: Money) -> Result<(Decimal, Decimal), MoneyError> {
        if a.currency == b.currency {
            Ok((a.amount, b.amount))
        } else {
            Err(MoneyError::CurrencyMismatch(
                a.currency.to_string(),
                b.currency.to_string(),
            ))
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:.dp$}",
            self.currency.symbol(),
            self.rounded(),
            dp = self.currency.decimal_places() as usize
        )
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(other)
            .expect("Currency mismatch in Money::add")
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.checked_sub(other)
            .expect("Currency mismatch in Money::sub")
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn addition_is_commutative(
            a in -1_000_000i64..1_000_000i64,
            b in -1_000_000i64..1_000_000i64
        ) {
            let ma = Money::new(Decimal::new(a, 2), Currency::AUD);
            let mb = Money::new(Decimal::new(b, 2), Currency::AUD);

            prop_assert_eq!(ma + mb, mb + ma);
        }

        #[test]
        fn zero_is_additive_identity(a in -1_000_000i64..1_000_000i64) {
            let m = Money::new(Decimal::new(a, 2), Currency::AUD);
            prop_assert_eq!(m + Money::zero(Currency::AUD), m);
        }
    }
}
