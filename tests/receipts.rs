//! End-to-end checkout scenarios: scan goods at a register, finalize, render
//! the receipt, and apply discount rules to the finalized sequence.

use rust_decimal::Decimal;
use rusty_money::{Money, iso};
use testresult::TestResult;

use tally::{
    checkout::Checkout,
    goods::Good,
    rules::{BundleDiscount, BuyNGetOneFree, DiscountRule},
};

fn item(name: &str, cents: i64) -> Good<'static> {
    Good::flat(name, Money::from_minor(cents, iso::USD))
}

#[test]
fn one_item_receipt() -> TestResult {
    let mut register = Checkout::new(iso::USD);

    register.scan(item("Beans (8oz Can)", 199))?;
    assert_eq!(register.subtotal()?, Money::from_minor(199, iso::USD));

    let receipt = register.finalize();
    assert_eq!(receipt.total()?, Money::from_minor(199, iso::USD));

    assert_eq!(
        receipt.render()?,
        "Receipt:\n\
         Beans (8oz Can): $1.99\n\
         ------------------\n\
         TOTAL: $1.99"
    );

    Ok(())
}

#[test]
fn three_different_items_receipt() -> TestResult {
    let mut register = Checkout::new(iso::USD);

    register.scan(item("Beans (8oz Can)", 199))?;
    register.scan(item("Pencil", 99))?;
    register.scan(item("Granols Bars (Box, 8ct)", 499))?;

    let receipt = register.finalize();
    assert_eq!(receipt.total()?, Money::from_minor(797, iso::USD));

    assert_eq!(
        receipt.render()?,
        "Receipt:\n\
         Beans (8oz Can): $1.99\n\
         Pencil: $0.99\n\
         Granols Bars (Box, 8ct): $4.99\n\
         ------------------\n\
         TOTAL: $7.97"
    );

    Ok(())
}

#[test]
fn rendered_total_matches_the_computed_total() -> TestResult {
    let mut register = Checkout::new(iso::USD);

    register.scan(item("Beans (8oz Can)", 199))?;
    register.scan(item("Pencil", 99))?;

    let receipt = register.finalize();
    let rendered = receipt.render()?;

    assert!(rendered.ends_with("TOTAL: $2.98"), "rendered was: {rendered}");
    assert_eq!(receipt.total()?, Money::from_minor(298, iso::USD));

    Ok(())
}

#[test]
fn buy_three_get_one_free_on_a_finalized_transaction() -> TestResult {
    let mut register = Checkout::new(iso::USD);

    register.scan(item("Beans", 199))?;
    register.scan(item("Beans", 199))?;
    register.scan(item("Beans", 199))?;
    register.scan(item("Beans", 199))?;
    register.scan(item("Pencil", 99))?;

    let receipt = register.finalize();

    let promo = BuyNGetOneFree::new("Beans");
    let discounted = promo.apply(receipt.goods(), iso::USD)?;

    assert_eq!(
        discounted.rendered(),
        "Receipt:\n\
         Beans: $1.99\n\
         Beans: $1.99\n\
         Beans: $0.00\n\
         Beans: $1.99\n\
         Pencil: $0.99\n\
         ------------------\n\
         TOTAL: $6.96"
    );
    assert_eq!(discounted.total(), Money::from_minor(696, iso::USD));

    Ok(())
}

#[test]
fn bundle_discount_on_a_finalized_transaction() -> TestResult {
    let mut register = Checkout::new(iso::USD);

    register.scan(item("Ketchup", 349))?;
    register.scan(item("Beer", 599))?;
    register.scan(item("Beer", 599))?;
    register.scan(item("Ketchup", 349))?;
    register.scan(item("Pencil", 99))?;

    let receipt = register.finalize();

    let promo = BundleDiscount::new(["Ketchup", "Beer"])?;
    let discounted = promo.apply(receipt.goods(), iso::USD)?;

    assert_eq!(
        discounted.rendered(),
        "Receipt:\n\
         Ketchup: $3.49\n\
         → Discount: -$0.35\n\
         Beer: $5.99\n\
         → Discount: -$0.60\n\
         Beer: $5.99\n\
         → Discount: -$0.60\n\
         Ketchup: $3.49\n\
         → Discount: -$0.35\n\
         Pencil: $0.99\n\
         ------------------\n\
         TOTAL: $18.05"
    );
    assert_eq!(discounted.total(), Money::from_minor(1805, iso::USD));

    Ok(())
}

#[test]
fn weighed_item_receipt() -> TestResult {
    let mut register = Checkout::new(iso::USD);

    register.scan(Good::weighed(
        "Bananas",
        Money::from_minor(89, iso::USD),
        Decimal::new(125, 2),
    ))?;

    let receipt = register.finalize();

    assert_eq!(
        receipt.render()?,
        "Receipt:\n\
         Bananas @ $0.89/lb x 1.25lb: $1.11\n\
         ------------------\n\
         TOTAL: $1.11"
    );
    assert_eq!(receipt.total()?, Money::from_minor(111, iso::USD));

    Ok(())
}

#[test]
fn rules_can_be_applied_uniformly_through_the_enum() -> TestResult {
    let mut register = Checkout::new(iso::USD);

    register.scan(item("Beans", 199))?;
    register.scan(item("Beans", 199))?;
    register.scan(item("Beans", 199))?;
    register.scan(item("Ketchup", 349))?;
    register.scan(item("Beer", 599))?;

    let receipt = register.finalize();

    let rules = [
        DiscountRule::BuyNGetOneFree(BuyNGetOneFree::new("Beans")),
        DiscountRule::BundleDiscount(BundleDiscount::new(["Ketchup", "Beer"])?),
    ];

    let totals: Vec<Money<'_, _>> = rules
        .iter()
        .map(|rule| rule.apply(receipt.goods(), iso::USD).map(|discounted| discounted.total()))
        .collect::<Result<_, _>>()?;

    // Buy-3-get-1: one free Beans. Bundle: 10% off Ketchup and Beer.
    assert_eq!(
        totals,
        [
            Money::from_minor(199 * 2 + 349 + 599, iso::USD),
            Money::from_minor(199 * 3 + 314 + 539, iso::USD),
        ]
    );

    Ok(())
}

#[test]
fn four_digit_amounts_render_without_digit_grouping() -> TestResult {
    let mut register = Checkout::new(iso::USD);

    register.scan(item("TV", 100_197))?;

    let receipt = register.finalize();

    assert_eq!(
        receipt.render()?,
        "Receipt:\n\
         TV: $1001.97\n\
         ------------------\n\
         TOTAL: $1001.97"
    );

    Ok(())
}

#[test]
fn finalize_starts_a_fresh_transaction() -> TestResult {
    let mut register = Checkout::new(iso::USD);

    register.scan(item("Beans (8oz Can)", 199))?;
    let first = register.finalize();

    register.scan(item("Pencil", 99))?;
    let second = register.finalize();

    assert_eq!(first.total()?, Money::from_minor(199, iso::USD));
    assert_eq!(second.total()?, Money::from_minor(99, iso::USD));
    assert_eq!(register.subtotal()?, Money::from_minor(0, iso::USD));

    Ok(())
}

#[test]
fn empty_transaction_renders_an_item_less_receipt() -> TestResult {
    let mut register = Checkout::new(iso::USD);

    let receipt = register.finalize();

    assert_eq!(receipt.total()?, Money::from_minor(0, iso::USD));
    assert_eq!(
        receipt.render()?,
        "Receipt:\n------------------\nTOTAL: $0.00"
    );

    Ok(())
}
