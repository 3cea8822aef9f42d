//! Goods
//!
//! The two ways a scanned good can carry a price: a flat per-unit price, or a
//! per-pound rate multiplied by a measured quantity.

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

use crate::{
    pricing::{self, PricingError},
    render,
};

/// A good priced at a flat amount per unit.
#[derive(Clone, Debug, PartialEq)]
pub struct FlatGood<'a> {
    name: String,
    price: Money<'a, Currency>,
}

impl<'a> FlatGood<'a> {
    /// Creates a new flat-priced good.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Money<'a, Currency>) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Returns the display name of the good.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price of the good.
    #[must_use]
    pub fn price(&self) -> Money<'a, Currency> {
        self.price
    }
}

/// A good priced by weight: a per-pound rate and a measured quantity.
#[derive(Clone, Debug, PartialEq)]
pub struct WeighedGood<'a> {
    name: String,
    rate: Money<'a, Currency>,
    quantity: Decimal,
}

impl<'a> WeighedGood<'a> {
    /// Creates a new weighed good from a per-pound rate and a quantity in
    /// pounds.
    #[must_use]
    pub fn new(name: impl Into<String>, rate: Money<'a, Currency>, quantity: Decimal) -> Self {
        Self {
            name: name.into(),
            rate,
            quantity,
        }
    }

    /// Returns the display name of the good.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the per-pound rate.
    #[must_use]
    pub fn unit_rate(&self) -> Money<'a, Currency> {
        self.rate
    }

    /// Returns the measured quantity in pounds.
    #[must_use]
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Calculates the rate times the quantity, rounded to the nearest cent.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::AmountOverflow`] if the amount cannot be
    /// represented in minor units.
    pub fn price(&self) -> Result<Money<'a, Currency>, PricingError> {
        pricing::weighed_price(&self.rate, self.quantity)
    }

    /// Returns the quantity formatted to two decimal places.
    #[must_use]
    pub fn quantity_description(&self) -> String {
        format!("{:.2}", self.quantity)
    }

    /// Returns the per-pound rate as a two-decimal currency string.
    #[must_use]
    pub fn unit_rate_description(&self) -> String {
        render::amount(&self.rate)
    }
}

/// A scanned good with a computable price.
///
/// The pricing kinds form a closed set so the receipt renderer can match
/// exhaustively; adding a third kind is a compile-time-checked change.
#[derive(Clone, Debug, PartialEq)]
pub enum Good<'a> {
    /// A good priced at a flat amount per unit.
    Flat(FlatGood<'a>),

    /// A good priced by weight.
    Weighed(WeighedGood<'a>),
}

impl<'a> Good<'a> {
    /// Creates a flat-priced good.
    #[must_use]
    pub fn flat(name: impl Into<String>, price: Money<'a, Currency>) -> Self {
        Good::Flat(FlatGood::new(name, price))
    }

    /// Creates a weighed good from a per-pound rate and a quantity in pounds.
    #[must_use]
    pub fn weighed(name: impl Into<String>, rate: Money<'a, Currency>, quantity: Decimal) -> Self {
        Good::Weighed(WeighedGood::new(name, rate, quantity))
    }

    /// Returns the display name of the good.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Good::Flat(flat) => flat.name(),
            Good::Weighed(weighed) => weighed.name(),
        }
    }

    /// Returns the price of the good in its currency.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::AmountOverflow`] if a weighed amount cannot be
    /// represented in minor units.
    pub fn price(&self) -> Result<Money<'a, Currency>, PricingError> {
        match self {
            Good::Flat(flat) => Ok(flat.price()),
            Good::Weighed(weighed) => weighed.price(),
        }
    }

    /// Returns the currency the good is priced in.
    #[must_use]
    pub fn currency(&self) -> &'a Currency {
        match self {
            Good::Flat(flat) => flat.price.currency(),
            Good::Weighed(weighed) => weighed.rate.currency(),
        }
    }
}
