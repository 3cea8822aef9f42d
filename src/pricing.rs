//! Pricing
//!
//! Monetary computation helpers shared by weighed-good pricing and the
//! discount rules. All derived amounts pass through a single rounding policy:
//! round to the nearest cent, midpoint away from zero.

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::goods::Good;

/// Errors that can occur while computing derived prices.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// A computed amount could not be represented in minor units.
    #[error("computed amount cannot be represented in minor units")]
    AmountOverflow,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Rounds an amount in minor units to the nearest cent, midpoint away from
/// zero.
///
/// # Errors
///
/// Returns [`PricingError::AmountOverflow`] if the rounded amount does not
/// fit in minor units.
pub fn round_minor(minor: Decimal) -> Result<i64, PricingError> {
    minor
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(PricingError::AmountOverflow)
}

/// Calculates the price of a weighed good: rate times quantity, rounded to
/// the nearest cent.
///
/// # Errors
///
/// Returns [`PricingError::AmountOverflow`] if the amount cannot be
/// represented in minor units.
pub fn weighed_price<'a>(
    rate: &Money<'a, Currency>,
    quantity: Decimal,
) -> Result<Money<'a, Currency>, PricingError> {
    let minor = Decimal::from(rate.to_minor_units())
        .checked_mul(quantity)
        .ok_or(PricingError::AmountOverflow)?;

    Ok(Money::from_minor(round_minor(minor)?, rate.currency()))
}

/// Calculates a percentage of a price, rounded to the nearest cent.
///
/// # Errors
///
/// Returns [`PricingError::AmountOverflow`] if the amount cannot be
/// represented in minor units.
pub fn percent_of<'a>(
    price: &Money<'a, Currency>,
    rate: Percentage,
) -> Result<Money<'a, Currency>, PricingError> {
    let minor = rate * Decimal::from(price.to_minor_units());

    Ok(Money::from_minor(round_minor(minor)?, price.currency()))
}

/// Sums the prices of the given goods, starting from zero of the given
/// currency so an empty sequence totals zero.
///
/// # Errors
///
/// Returns a [`PricingError`] if a price cannot be computed or the money
/// arithmetic fails.
pub fn total_of<'a>(
    goods: &[Good<'a>],
    currency: &'static Currency,
) -> Result<Money<'a, Currency>, PricingError> {
    goods
        .iter()
        .try_fold(Money::from_minor(0, currency), |total, good| {
            Ok(total.add(good.price()?)?)
        })
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn round_minor_half_cent_rounds_away_from_zero() -> TestResult {
        assert_eq!(round_minor(Decimal::new(345, 1))?, 35);
        assert_eq!(round_minor(Decimal::new(344, 1))?, 34);

        Ok(())
    }

    #[test]
    fn weighed_price_rounds_to_nearest_cent() -> TestResult {
        let rate = Money::from_minor(89, iso::USD);

        let price = weighed_price(&rate, Decimal::new(125, 2))?;

        assert_eq!(price, Money::from_minor(111, iso::USD));

        Ok(())
    }

    #[test]
    fn percent_of_rounds_to_nearest_cent() -> TestResult {
        let rate = Percentage::from(0.1);

        assert_eq!(
            percent_of(&Money::from_minor(349, iso::USD), rate)?,
            Money::from_minor(35, iso::USD)
        );
        assert_eq!(
            percent_of(&Money::from_minor(599, iso::USD), rate)?,
            Money::from_minor(60, iso::USD)
        );

        Ok(())
    }

    #[test]
    fn percent_of_half_cent_rounds_away_from_zero() -> TestResult {
        // 10% of 345 cents is 34.5 cents, which rounds up to 35.
        let discount = percent_of(&Money::from_minor(345, iso::USD), Percentage::from(0.1))?;

        assert_eq!(discount, Money::from_minor(35, iso::USD));

        Ok(())
    }

    #[test]
    fn total_of_sums_prices_in_scan_order() -> TestResult {
        let goods = [
            Good::flat("Beans (8oz Can)", Money::from_minor(199, iso::USD)),
            Good::flat("Pencil", Money::from_minor(99, iso::USD)),
        ];

        assert_eq!(total_of(&goods, iso::USD)?, Money::from_minor(298, iso::USD));

        Ok(())
    }

    #[test]
    fn total_of_no_goods_is_zero() -> TestResult {
        let goods: [Good<'static>; 0] = [];

        assert_eq!(total_of(&goods, iso::USD)?, Money::from_minor(0, iso::USD));

        Ok(())
    }
}
