//! Transaction
//!
//! The ordered, append-only sequence of goods scanned since a register was
//! opened or last finalized.

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    goods::Good,
    pricing::{self, PricingError},
    render,
};

/// Errors related to building up a transaction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionError {
    /// A good's currency differs from the transaction currency
    /// (position, good currency, transaction currency).
    #[error("good {0} has currency {1}, but the transaction has currency {2}")]
    CurrencyMismatch(usize, &'static str, &'static str),
}

/// An in-progress or completed transaction: goods in scan order plus the
/// currency every good must be priced in.
#[derive(Debug, Clone)]
pub struct Transaction<'a> {
    goods: SmallVec<[Good<'a>; 8]>,
    currency: &'static Currency,
}

impl<'a> Transaction<'a> {
    /// Creates an empty transaction in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Transaction {
            goods: SmallVec::new(),
            currency,
        }
    }

    /// Appends a good to the end of the transaction.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionError::CurrencyMismatch`] if the good is priced in
    /// a different currency than the transaction.
    pub fn append(&mut self, good: Good<'a>) -> Result<(), TransactionError> {
        let good_currency = good.currency();
        if good_currency != self.currency {
            return Err(TransactionError::CurrencyMismatch(
                self.goods.len(),
                good_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        self.goods.push(good);
        Ok(())
    }

    /// Returns the goods in scan order.
    #[must_use]
    pub fn goods(&self) -> &[Good<'a>] {
        &self.goods
    }

    /// Returns the number of goods in the transaction.
    #[must_use]
    pub fn len(&self) -> usize {
        self.goods.len()
    }

    /// Checks if the transaction holds no goods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.goods.is_empty()
    }

    /// Returns the currency of the transaction.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Calculates the sum of the goods' prices.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a price cannot be computed or the money
    /// arithmetic fails.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, PricingError> {
        pricing::total_of(&self.goods, self.currency)
    }

    /// Calculates the amount payable.
    ///
    /// Currently identical to [`Transaction::subtotal`]; kept as a distinct
    /// operation so a future fee layer can diverge them.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a price cannot be computed or the money
    /// arithmetic fails.
    pub fn total(&self) -> Result<Money<'a, Currency>, PricingError> {
        self.subtotal()
    }

    /// Renders the transaction as receipt text, one line per good in scan
    /// order, closed by a separator and the total.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a price cannot be computed or the money
    /// arithmetic fails.
    pub fn render(&self) -> Result<String, PricingError> {
        let mut out = String::from(render::HEADER);
        out.push('\n');

        for good in &self.goods {
            out.push_str(&render::good_line(good, &good.price()?));
            out.push('\n');
        }

        out.push_str(&render::trailer(&self.total()?));
        Ok(out)
    }
}
