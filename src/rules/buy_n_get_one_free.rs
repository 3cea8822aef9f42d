//! Buy-N-get-one-free
//!
//! Every time a full group of matching goods has been rung up, the last good
//! of that group is free.

use rusty_money::{Money, iso::Currency};

use crate::{
    goods::Good,
    render,
    rules::{DiscountedReceipt, RuleError, ensure_currency},
};

/// Default number of matching goods per group (buy two, get the third free).
pub const DEFAULT_GROUP_SIZE: usize = 3;

/// A rule making every Nth matching good free, in scan order.
///
/// The freebie is the *last* good of each full group as encountered, never
/// the cheapest one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyNGetOneFree {
    target: String,
    group_size: usize,
}

impl BuyNGetOneFree {
    /// Creates a rule targeting the named product with the default group size.
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            group_size: DEFAULT_GROUP_SIZE,
        }
    }

    /// Creates a rule with a custom group size.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::GroupSizeTooSmall`] for group sizes below 2, which
    /// would leave no paid goods in a group.
    pub fn with_group_size(
        target: impl Into<String>,
        group_size: usize,
    ) -> Result<Self, RuleError> {
        if group_size < 2 {
            return Err(RuleError::GroupSizeTooSmall(group_size));
        }

        Ok(Self {
            target: target.into(),
            group_size,
        })
    }

    /// Returns the targeted product name.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the group size.
    #[must_use]
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Applies the rule to an ordered good sequence, producing the discounted
    /// receipt text and total.
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
        let matching = goods.iter().filter(|good| good.name() == self.target).count();
        let full_groups = matching / self.group_size;

        let mut out = String::from(render::HEADER);
        out.push('\n');

        let mut total: Money<'a, Currency> = Money::from_minor(0, currency);
        let mut seen = 0_usize;
        let mut granted = 0_usize;

        for (position, good) in goods.iter().enumerate() {
            ensure_currency(position, good, currency)?;

            if good.name() == self.target {
                seen += 1;
                if seen % self.group_size == 0 && granted < full_groups {
                    granted += 1;
                    out.push_str(&render::good_line(good, &Money::from_minor(0, currency)));
                    out.push('\n');
                    continue;
                }
            }

            let price = good.price()?;
            total = total.add(price)?;
            out.push_str(&render::good_line(good, &price));
            out.push('\n');
        }

        out.push_str(&render::trailer(&total));
        Ok(DiscountedReceipt::new(out, total))
    }
}
