//! Checkout
//!
//! A register owning the one transaction currently being rung up.

use std::mem;

use rusty_money::{Money, iso::Currency};

use crate::{
    goods::Good,
    pricing::PricingError,
    transaction::{Transaction, TransactionError},
};

/// A register with a single open transaction.
///
/// Each register instance owns its transaction outright, so multiple
/// simultaneous registers stay independent.
#[derive(Debug)]
pub struct Checkout<'a> {
    transaction: Transaction<'a>,
}

impl<'a> Checkout<'a> {
    /// Opens a register with an empty transaction in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Checkout {
            transaction: Transaction::new(currency),
        }
    }

    /// Scans a good into the open transaction.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::CurrencyMismatch`] if the good is priced in
    /// a different currency than the register.
    pub fn scan(&mut self, good: Good<'a>) -> Result<(), TransactionError> {
        self.transaction.append(good)
    }

    /// Returns the open transaction's subtotal, for mid-transaction display.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a price cannot be computed or the money
    /// arithmetic fails.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, PricingError> {
        self.transaction.subtotal()
    }

    /// Completes the open transaction and starts a fresh one.
    ///
    /// The returned transaction is detached from the register: later scans do
    /// not affect it.
    pub fn finalize(&mut self) -> Transaction<'a> {
        let currency = self.transaction.currency();
        mem::replace(&mut self.transaction, Transaction::new(currency))
    }
}
