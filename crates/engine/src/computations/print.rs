use crate::{Book, Clothing, Computation, Electronics, Item};

/// Collects one description line per visited entry, in visit order.
#[derive(Debug, Default)]
pub struct PrintDetails {
    lines: Vec<String>,
}

impl PrintDetails {
    pub fn new() -> Self {
        Self::default()
    }
}

fn priced(item: &Item) -> String {
    format!(
        "Rs.{} x {} = Rs.{}",
        item.unit_price(),
        item.quantity(),
        item.subtotal()
    )
}

impl Computation for PrintDetails {
    type Output = Vec<String>;

    fn visit_book(&mut self, book: &Book) {
        let item = book.item();
        self.lines.push(format!(
            "[Book] {} by {} - {}",
            item.name(),
            book.author(),
            priced(item)
        ));
    }

    fn visit_electronics(&mut self, electronics: &Electronics) {
        let item = electronics.item();
        self.lines.push(format!(
            "[Electronics] {} - {} - {}",
            item.name(),
            electronics.brand(),
            priced(item)
        ));
    }

    fn visit_clothing(&mut self, clothing: &Clothing) {
        let item = clothing.item();
        self.lines.push(format!(
            "[Clothing] {} (size {}) - {}",
            item.name(),
            clothing.size(),
            priced(item)
        ));
    }

    fn finish(self) -> Vec<String> {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Entry, Money};

    fn describe(entry: &Entry) -> String {
        let mut print = PrintDetails::new();
        entry.accept(&mut print);
        let mut lines = print.finish();
        assert_eq!(lines.len(), 1);
        lines.remove(0)
    }

    #[test]
    fn formats_each_variant() {
        let book = Book::new("The Art of Java", "Ada Coder", Money::new(2999), 1).unwrap();
        assert_eq!(
            describe(&book.into()),
            "[Book] The Art of Java by Ada Coder - Rs.29.99 x 1 = Rs.29.99"
        );

        let phone = Electronics::new("Smartphone X", "PhoneCo", Money::new(69_900), 1).unwrap();
        assert_eq!(
            describe(&phone.into()),
            "[Electronics] Smartphone X - PhoneCo - Rs.699.00 x 1 = Rs.699.00"
        );

        let shirt = Clothing::new("T-Shirt", "M", Money::new(1950), 2).unwrap();
        assert_eq!(
            describe(&shirt.into()),
            "[Clothing] T-Shirt (size M) - Rs.19.50 x 2 = Rs.39.00"
        );
    }

    #[test]
    fn empty_pass_has_no_lines() {
        assert!(PrintDetails::new().finish().is_empty());
    }
}
