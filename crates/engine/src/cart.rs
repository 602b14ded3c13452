//! The ordered collection of entries.

use crate::{Computation, Entry};

/// Insertion-ordered container that exclusively owns its entries.
///
/// The cart is a plain single-threaded value: callers that share it across
/// threads must serialize `append`, `clear` and passes themselves. A second
/// reader (e.g. a rendering layer) should work on a [`Cart::snapshot`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<Entry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `entry` at the end of the cart.
    pub fn append(&mut self, entry: Entry) {
        tracing::trace!(kind = %entry.kind(), name = entry.name(), "append entry");
        self.entries.push(entry);
    }

    /// Discards every entry. Earlier snapshots are unaffected.
    pub fn clear(&mut self) {
        tracing::debug!(discarded = self.entries.len(), "clear cart");
        self.entries.clear();
    }

    /// Independent copy of the current entries, in insertion order.
    pub fn snapshot(&self) -> Vec<Entry> {
        self.entries.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Visits every entry with `computation`, in insertion order.
    ///
    /// The result stays in `computation`; see [`Cart::compute`] for the
    /// consuming variant.
    pub fn run_pass<C: Computation + ?Sized>(&self, computation: &mut C) {
        tracing::debug!(entries = self.entries.len(), "run pass");
        for entry in &self.entries {
            entry.accept(computation);
        }
    }

    /// Runs one pass with a fresh `computation` and returns its result.
    pub fn compute<C: Computation>(&self, mut computation: C) -> C::Output {
        self.run_pass(&mut computation);
        computation.finish()
    }
}

impl Extend<Entry> for Cart {
    fn extend<T: IntoIterator<Item = Entry>>(&mut self, iter: T) {
        for entry in iter {
            self.append(entry);
        }
    }
}

impl FromIterator<Entry> for Cart {
    fn from_iter<T: IntoIterator<Item = Entry>>(iter: T) -> Self {
        let mut cart = Cart::new();
        cart.extend(iter);
        cart
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
