use engine::{
    Cart, Clothing, Computation, DiscountedTotal, Electronics, EngineError, Entry, EntryKind,
    Money, PrintDetails, TotalPrice, discounted_subtotal,
};

fn money(major: i64, fraction: u8) -> Money {
    Money::from_major(major, fraction).unwrap()
}

fn scenario_cart() -> Cart {
    let mut cart = Cart::new();
    cart.append(Entry::new(EntryKind::Book, "Rust in Action", "McNamara", money(10, 0), 2).unwrap());
    cart.append(Entry::new(EntryKind::Electronics, "Monitor", "Dell", money(250, 0), 1).unwrap());
    cart.append(Entry::new(EntryKind::Clothing, "Jeans", "32", money(20, 0), 3).unwrap());
    cart
}

#[test]
fn mixed_cart_totals() {
    let cart = scenario_cart();
    assert_eq!(engine::run_total(&cart), money(330, 0));
    assert_eq!(engine::run_discounted_total(&cart), money(303, 0));
}

#[test]
fn cheap_electronics_are_not_discounted() {
    let mut cart = Cart::new();
    cart.append(Electronics::new("Keyboard", "Keyco", money(100, 0), 1).unwrap().into());
    assert_eq!(engine::run_discounted_total(&cart), money(100, 0));
    assert_eq!(discounted_subtotal(&cart.snapshot()[0]), money(100, 0));
}

#[test]
fn empty_cart_yields_zero_and_no_lines() {
    let cart = Cart::new();
    assert_eq!(engine::run_total(&cart), Money::ZERO);
    assert_eq!(engine::run_discounted_total(&cart), Money::ZERO);
    assert!(engine::run_print_details(&cart).is_empty());
}

#[test]
fn print_yields_one_line_per_entry_in_order() {
    let cart = scenario_cart();
    let lines = engine::run_print_details(&cart);
    assert_eq!(lines.len(), cart.len());
    assert!(lines[0].starts_with("[Book] Rust in Action by McNamara"));
    assert!(lines[1].starts_with("[Electronics] Monitor - Dell - "));
    assert!(lines[2].starts_with("[Clothing] Jeans (size 32)"));
    assert!(lines[2].ends_with("Rs.20.00 x 3 = Rs.60.00"));
}

#[test]
fn total_matches_sum_of_subtotals() {
    let cart = scenario_cart();
    let expected = cart
        .iter()
        .fold(Money::ZERO, |acc, entry| acc.saturating_add(entry.subtotal()));
    assert_eq!(engine::run_total(&cart), expected);
}

#[test]
fn fresh_passes_are_identical() {
    let cart = scenario_cart();
    let before = cart.snapshot();

    assert_eq!(cart.compute(TotalPrice::new()), cart.compute(TotalPrice::new()));
    assert_eq!(
        cart.compute(DiscountedTotal::new()),
        cart.compute(DiscountedTotal::new())
    );
    assert_eq!(
        cart.compute(PrintDetails::new()),
        cart.compute(PrintDetails::new())
    );
    assert_eq!(cart.snapshot(), before);
}

#[test]
fn run_pass_leaves_result_in_accumulator() {
    let cart = scenario_cart();
    let mut total = TotalPrice::new();
    cart.run_pass(&mut total);
    assert_eq!(total.finish(), money(330, 0));
}

#[test]
fn clear_empties_cart_but_not_snapshots() {
    let mut cart = scenario_cart();
    let snapshot = cart.snapshot();
    cart.clear();
    assert!(cart.is_empty());
    assert_eq!(engine::run_total(&cart), Money::ZERO);
    assert_eq!(snapshot.len(), 3);
}

#[test]
fn invalid_entries_are_rejected() {
    assert!(matches!(
        Entry::new(EntryKind::Book, "Bad", "x", Money::new(-1), 1),
        Err(EngineError::InvalidEntry(_))
    ));
    assert!(matches!(
        Clothing::new("Bad", "x", money(1, 0), 0),
        Err(EngineError::InvalidEntry(_))
    ));
}

#[test]
fn order_does_not_change_totals() {
    let forward = scenario_cart();
    let reversed: Cart = forward.snapshot().into_iter().rev().collect();
    assert_eq!(engine::run_total(&forward), engine::run_total(&reversed));
    assert_eq!(
        engine::run_discounted_total(&forward),
        engine::run_discounted_total(&reversed)
    );
    assert_ne!(
        engine::run_print_details(&forward),
        engine::run_print_details(&reversed)
    );
}
