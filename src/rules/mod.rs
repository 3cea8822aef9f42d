//! Rules
//!
//! Promotional pricing rules. A rule holds only its own configuration and is
//! a pure function over an ordered good sequence: it never references the
//! transaction the goods came from.

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{goods::Good, pricing::PricingError};

pub mod bundle_discount;
pub mod buy_n_get_one_free;

pub use bundle_discount::BundleDiscount;
pub use buy_n_get_one_free::BuyNGetOneFree;

/// Errors related to rule configuration or application.
#[derive(Debug, Error, PartialEq)]
pub enum RuleError {
    /// A good's currency differs from the currency the rule was applied with
    /// (position, good currency, applied currency).
    #[error("good {0} has currency {1}, but the rule was applied with currency {2}")]
    CurrencyMismatch(usize, &'static str, &'static str),

    /// The group size leaves no paid goods per group.
    #[error("group size {0} is too small; a group needs at least 2 goods")]
    GroupSizeTooSmall(usize),

    /// A bundle spans fewer than two distinct product names.
    #[error("a bundle needs at least 2 distinct product names, got {0}")]
    TooFewProducts(usize),

    /// Errors bubbled up from price computation.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// The outcome of applying a rule: the discounted receipt text and the amount
/// payable after discounts.
#[derive(Debug, Clone)]
pub struct DiscountedReceipt<'a> {
    rendered: String,
    total: Money<'a, Currency>,
}

impl<'a> DiscountedReceipt<'a> {
    pub(crate) fn new(rendered: String, total: Money<'a, Currency>) -> Self {
        Self { rendered, total }
    }

    /// Returns the receipt text with discounts applied.
    #[must_use]
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// Returns the amount payable after discounts.
    #[must_use]
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }
}

/// Discount rule enum
#[derive(Debug, Clone)]
pub enum DiscountRule {
    /// Every Nth matching good in scan order is free.
    BuyNGetOneFree(BuyNGetOneFree),

    /// Matching goods bundled across several names get a percentage discount.
    BundleDiscount(BundleDiscount),
}

impl DiscountRule {
    /// Applies the inner rule to an ordered good sequence.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::CurrencyMismatch`] if a good is priced in a
    /// different currency than the rule was applied with.
    pub fn apply<'a>(
        &self,
        goods: &[Good<'a>],
        currency: &'static Currency,
    ) -> Result<DiscountedReceipt<'a>, RuleError> {
        match self {
            DiscountRule::BuyNGetOneFree(rule) => rule.apply(goods, currency),
            DiscountRule::BundleDiscount(rule) => rule.apply(goods, currency),
        }
    }
}

/// Checks that a good is priced in the currency the rule was applied with.
pub(crate) fn ensure_currency(
    position: usize,
    good: &Good<'_>,
    currency: &'static Currency,
) -> Result<(), RuleError> {
    let good_currency = good.currency();
    if good_currency == currency {
        Ok(())
    } else {
        Err(RuleError::CurrencyMismatch(
            position,
            good_currency.iso_alpha_code,
            currency.iso_alpha_code,
        ))
    }
}
