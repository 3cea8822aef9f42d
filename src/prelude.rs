//! Tally prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    checkout::Checkout,
    goods::{FlatGood, Good, WeighedGood},
    pricing::PricingError,
    rules::{BundleDiscount, BuyNGetOneFree, DiscountRule, DiscountedReceipt, RuleError},
    transaction::{Transaction, TransactionError},
};
