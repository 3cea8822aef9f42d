//! Tally
//!
//! Tally is a point-of-sale checkout and receipt engine: goods scanned at a
//! register accumulate into a transaction, line and aggregate totals are
//! computed in minor currency units, and promotional pricing rules turn the
//! scanned sequence into a discounted receipt rendering.

pub mod checkout;
pub mod goods;
pub mod prelude;
pub mod pricing;
pub mod rules;
pub mod transaction;

mod render;
