use crate::{Book, Clothing, Computation, Electronics, Item, Money};

/// Sums the subtotals of all visited entries, no discount applied.
#[derive(Debug, Default)]
pub struct TotalPrice {
    total: Money,
}

impl TotalPrice {
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, item: &Item) {
        self.total = self.total.saturating_add(item.subtotal());
    }
}

impl Computation for TotalPrice {
    type Output = Money;

    fn visit_book(&mut self, book: &Book) {
        self.add(book.item());
    }

    fn visit_electronics(&mut self, electronics: &Electronics) {
        self.add(electronics.item());
    }

    fn visit_clothing(&mut self, clothing: &Clothing) {
        self.add(clothing.item());
    }

    fn finish(self) -> Money {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_subtotals() {
        let mut total = TotalPrice::new();
        total.visit_book(&Book::new("A", "x", Money::new(1000), 2).unwrap());
        total.visit_electronics(&Electronics::new("B", "y", Money::new(25_000), 1).unwrap());
        total.visit_clothing(&Clothing::new("C", "M", Money::new(2000), 3).unwrap());
        assert_eq!(total.finish(), Money::new(33_000));
    }

    #[test]
    fn empty_pass_is_zero() {
        assert_eq!(TotalPrice::new().finish(), Money::ZERO);
    }
}
