//! Render
//!
//! Receipt text helpers shared by [`Transaction::render`] and the discount
//! rules, so the plain and discounted renderings cannot drift apart.
//!
//! [`Transaction::render`]: crate::transaction::Transaction::render

use rusty_money::{Money, iso::Currency};

use crate::goods::Good;

/// First line of every receipt.
pub(crate) const HEADER: &str = "Receipt:";

/// Separator between the item lines and the total.
pub(crate) const SEPARATOR: &str = "------------------";

/// Formats an amount as a dollar sign and exactly two decimals.
///
/// `Money`'s display inserts digit-grouping separators from $1,000 up; the
/// receipt contract has none, so amounts are formatted from minor units here.
pub(crate) fn amount(money: &Money<'_, Currency>) -> String {
    let minor = money.to_minor_units();
    format!("${}.{:02}", minor / 100, minor % 100)
}

/// Formats the receipt line for a good at the given displayed price.
///
/// Rules pass a price other than `good.price()` when a good is given away.
pub(crate) fn good_line(good: &Good<'_>, displayed: &Money<'_, Currency>) -> String {
    match good {
        Good::Flat(flat) => format!("{}: {}", flat.name(), amount(displayed)),
        Good::Weighed(weighed) => format!(
            "{} @ {}/lb x {}lb: {}",
            weighed.name(),
            weighed.unit_rate_description(),
            weighed.quantity_description(),
            amount(displayed),
        ),
    }
}

/// Formats the annotation line for a discounted good.
pub(crate) fn discount_line(saving: &Money<'_, Currency>) -> String {
    format!("→ Discount: -{}", amount(saving))
}

/// Formats the separator and total lines that close a receipt.
pub(crate) fn trailer(total: &Money<'_, Currency>) -> String {
    format!("{SEPARATOR}\nTOTAL: {}", amount(total))
}
