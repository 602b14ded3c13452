//! Per-variant discount rules.
//!
//! | Variant     | Rule                                         |
//! |-------------|----------------------------------------------|
//! | Book        | 5% off the subtotal                          |
//! | Electronics | 20.00 off when the subtotal exceeds 200.00   |
//! | Clothing    | 10% off the subtotal                         |
//!
//! Rules never look at other entries or at the cart as a whole. A cart-wide
//! rule (coupon, minimum spend) belongs in its own computation.
//!
//! Percentages are applied exactly in hundredths of a minor unit and the sum
//! is rounded half-up to minor units once, in [`Computation::finish`].

use crate::{Book, Clothing, Computation, Electronics, Entry, Money};

const BOOK_PERCENT: i128 = 95;
const CLOTHING_PERCENT: i128 = 90;
const ELECTRONICS_THRESHOLD: Money = Money::new(200_00);
const ELECTRONICS_FLAT_OFF: Money = Money::new(20_00);

/// Sums independently discounted subtotals.
#[derive(Debug, Default)]
pub struct DiscountedTotal {
    /// Hundredths of a minor unit.
    total_scaled: i128,
}

impl DiscountedTotal {
    pub fn new() -> Self {
        Self::default()
    }

    fn add_percent(&mut self, subtotal: Money, percent: i128) {
        self.total_scaled += i128::from(subtotal.minor()) * percent;
    }
}

impl Computation for DiscountedTotal {
    type Output = Money;

    fn visit_book(&mut self, book: &Book) {
        self.add_percent(book.item().subtotal(), BOOK_PERCENT);
    }

    fn visit_electronics(&mut self, electronics: &Electronics) {
        let subtotal = electronics.item().subtotal();
        let discounted = if subtotal > ELECTRONICS_THRESHOLD {
            subtotal - ELECTRONICS_FLAT_OFF
        } else {
            subtotal
        };
        self.add_percent(discounted, 100);
    }

    fn visit_clothing(&mut self, clothing: &Clothing) {
        self.add_percent(clothing.item().subtotal(), CLOTHING_PERCENT);
    }

    fn finish(self) -> Money {
        // Every rule keeps the amount non-negative, so half-up is `+ 50`.
        let rounded = (self.total_scaled + 50) / 100;
        Money::new(i64::try_from(rounded).unwrap_or(i64::MAX))
    }
}

/// Discounted subtotal of a single entry, rounded like a full pass.
pub fn discounted_subtotal(entry: &Entry) -> Money {
    let mut discount = DiscountedTotal::new();
    entry.accept(&mut discount);
    discount.finish()
}
