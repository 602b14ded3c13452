//! Cart engine.
//!
//! Entries ([`Book`], [`Electronics`], [`Clothing`]) live in a [`Cart`];
//! derived views are [`Computation`]s driven over the cart in insertion
//! order. The three shipped computations are [`PrintDetails`],
//! [`TotalPrice`] and [`DiscountedTotal`].
//!
//! ```rust
//! use engine::{Cart, Entry, EntryKind, Money};
//!
//! let mut cart = Cart::new();
//! cart.append(Entry::new(EntryKind::Book, "Dune", "Herbert", Money::new(10_00), 2)?);
//! assert_eq!(engine::run_total(&cart), Money::new(20_00));
//! assert_eq!(engine::run_discounted_total(&cart), Money::new(19_00));
//! # Ok::<(), engine::EngineError>(())
//! ```

pub use cart::Cart;
pub use computations::{
    Computation, DiscountedTotal, PrintDetails, TotalPrice, discounted_subtotal,
};
pub use entry::{Book, Clothing, Electronics, Entry, EntryKind, Item};
pub use error::EngineError;
pub use money::Money;

mod cart;
mod computations;
mod entry;
mod error;
mod money;

pub type ResultEngine<T> = Result<T, EngineError>;

/// One description line per entry, in cart order.
pub fn run_print_details(cart: &Cart) -> Vec<String> {
    cart.compute(PrintDetails::new())
}

/// Sum of all subtotals.
pub fn run_total(cart: &Cart) -> Money {
    cart.compute(TotalPrice::new())
}

/// Sum of the per-variant discounted subtotals.
pub fn run_discounted_total(cart: &Cart) -> Money {
    cart.compute(DiscountedTotal::new())
}
