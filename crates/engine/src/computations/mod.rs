//! Computations over cart entries.
//!
//! A [`Computation`] has one operation per entry variant and observes the
//! whole variant, specific attribute included. [`Entry::accept`] selects the
//! operation with an exhaustive `match`, so adding a variant forces every
//! computation in the crate to handle it.
//!
//! Operations only read the entry; all accumulation stays in the
//! computation's own state. A computation is built fresh for each pass and
//! consumed by [`Computation::finish`], so state never leaks between passes.
//!
//! [`Entry::accept`]: crate::Entry::accept

use crate::{Book, Clothing, Electronics};

pub use discount::{DiscountedTotal, discounted_subtotal};
pub use print::PrintDetails;
pub use total::TotalPrice;

mod discount;
mod print;
mod total;

pub trait Computation {
    type Output;

    fn visit_book(&mut self, book: &Book);

    fn visit_electronics(&mut self, electronics: &Electronics);

    fn visit_clothing(&mut self, clothing: &Clothing);

    /// Consumes the accumulator and returns the result of the pass.
    fn finish(self) -> Self::Output
    where
        Self: Sized;
}
