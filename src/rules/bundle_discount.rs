//! Bundle discount
//!
//! Goods bundled across several named products get a percentage off, one
//! complete bundle per occurrence of the scarcest name.

use decimal_percentage::Percentage;
use rustc_hash::{FxHashMap, FxHashSet};
use rusty_money::{Money, iso::Currency};

use crate::{
    goods::Good,
    pricing, render,
    rules::{DiscountedReceipt, RuleError, ensure_currency},
};

/// A rule discounting goods bundled in equal-sized groups across two or more
/// named products.
///
/// The number of complete bundles is bounded by the scarcest eligible name;
/// a configured name with no occurrences bounds it to zero.
#[derive(Debug, Clone)]
pub struct BundleDiscount {
    names: FxHashSet<String>,
    rate: Percentage,
}

impl BundleDiscount {
    /// Creates a bundle over the given product names at the standard 10% rate.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::TooFewProducts`] if fewer than two distinct names
    /// are given.
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Result<Self, RuleError> {
        Self::with_rate(names, Percentage::from(0.1))
    }

    /// Creates a bundle over the given product names at a custom discount rate.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::TooFewProducts`] if fewer than two distinct names
    /// are given.
    pub fn with_rate<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        rate: Percentage,
    ) -> Result<Self, RuleError> {
        let names: FxHashSet<String> = names.into_iter().map(Into::into).collect();
        if names.len() < 2 {
            return Err(RuleError::TooFewProducts(names.len()));
        }

        Ok(Self { names, rate })
    }

    /// Returns the discount rate.
    #[must_use]
    pub fn rate(&self) -> Percentage {
        self.rate
    }

    /// Applies the rule to an ordered good sequence, producing the discounted
    /// receipt text and total.
    ///
    /// Each discounted good renders as its full-price line immediately
    /// followed by a discount annotation; its contribution to the total is
    /// the price minus the discount.
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
        let mut buckets: FxHashMap<&str, usize> = FxHashMap::default();
        for good in goods {
            if self.names.contains(good.name()) {
                *buckets.entry(good.name()).or_insert(0) += 1;
            }
        }

        // Complete bundles achievable, bounded by the scarcest configured
        // name. Absent names count zero occurrences.
        let group_count = self
            .names
            .iter()
            .map(|name| buckets.get(name.as_str()).copied().unwrap_or(0))
            .min()
            .unwrap_or(0);

        // Per-name allotment of discounted occurrences, consumed in scan order.
        let mut remaining: FxHashMap<&str, usize> = self
            .names
            .iter()
            .map(|name| (name.as_str(), group_count))
            .collect();

        let mut out = String::from(render::HEADER);
        out.push('\n');

        let mut total: Money<'a, Currency> = Money::from_minor(0, currency);

        for (position, good) in goods.iter().enumerate() {
            ensure_currency(position, good, currency)?;

            let price = good.price()?;
            out.push_str(&render::good_line(good, &price));
            out.push('\n');

            match remaining.get_mut(good.name()) {
                Some(allotment) if *allotment > 0 => {
                    *allotment -= 1;
                    let discount = pricing::percent_of(&price, self.rate)?;
                    out.push_str(&render::discount_line(&discount));
                    out.push('\n');
                    total = total.add(price.sub(discount)?)?;
                }
                _ => {
                    total = total.add(price)?;
                }
            }
        }

        out.push_str(&render::trailer(&total));
        Ok(DiscountedReceipt::new(out, total))
    }
}
