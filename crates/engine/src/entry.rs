//! Cart entries.
//!
//! An [`Entry`] is one priced catalog line. The set of variants is closed:
//! [`Book`], [`Electronics`] and [`Clothing`]. Every variant carries the
//! shared [`Item`] attributes (name, unit price, quantity) plus one attribute
//! of its own (author, brand, size).
//!
//! Entries are immutable once built. The constructors enforce
//! `unit_price >= 0` and `quantity >= 1`; deserialized entries go through the
//! same checks.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Computation, EngineError, Money, ResultEngine};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Book,
    Electronics,
    Clothing,
}

impl EntryKind {
    pub const ALL: [EntryKind; 3] = [Self::Book, Self::Electronics, Self::Clothing];

    /// Type tag used in human-readable output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Book => "Book",
            Self::Electronics => "Electronics",
            Self::Clothing => "Clothing",
        }
    }

    /// Name of the variant-specific attribute.
    pub fn attribute_label(self) -> &'static str {
        match self {
            Self::Book => "author",
            Self::Electronics => "brand",
            Self::Clothing => "size",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EntryKind {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "book" => Ok(Self::Book),
            "electronics" => Ok(Self::Electronics),
            "clothing" => Ok(Self::Clothing),
            other => Err(EngineError::InvalidEntry(format!(
                "unknown entry kind: {other}"
            ))),
        }
    }
}

/// Attributes shared by every entry variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawItem")]
pub struct Item {
    name: String,
    #[serde(rename = "unit_price_minor")]
    unit_price: Money,
    quantity: u32,
}

#[derive(Deserialize)]
struct RawItem {
    name: String,
    unit_price_minor: Money,
    quantity: u32,
}

impl TryFrom<RawItem> for Item {
    type Error = EngineError;

    fn try_from(raw: RawItem) -> Result<Self, Self::Error> {
        Item::new(raw.name, raw.unit_price_minor, raw.quantity)
    }
}

impl Item {
    /// Validates the shared attributes.
    ///
    /// Fails with [`EngineError::InvalidEntry`] when the price is negative,
    /// the quantity is zero, or the subtotal does not fit in [`Money`].
    pub fn new(name: impl Into<String>, unit_price: Money, quantity: u32) -> ResultEngine<Self> {
        let name = name.into();
        if unit_price.is_negative() {
            return Err(EngineError::InvalidEntry(format!(
                "unit price of '{name}' must be >= 0, got {unit_price}"
            )));
        }
        if quantity < 1 {
            return Err(EngineError::InvalidEntry(format!(
                "quantity of '{name}' must be >= 1"
            )));
        }
        if unit_price.checked_mul(quantity).is_none() {
            return Err(EngineError::InvalidEntry(format!(
                "subtotal of '{name}' is too large"
            )));
        }
        Ok(Self {
            name,
            unit_price,
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `unit_price × quantity`, recomputed on every call.
    pub fn subtotal(&self) -> Money {
        // Overflow is rejected by `Item::new`.
        Money::new(self.unit_price.minor() * i64::from(self.quantity))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(flatten)]
    item: Item,
    author: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> ResultEngine<Self> {
        Ok(Self {
            item: Item::new(title, unit_price, quantity)?,
            author: author.into(),
        })
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Electronics {
    #[serde(flatten)]
    item: Item,
    brand: String,
}

impl Electronics {
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> ResultEngine<Self> {
        Ok(Self {
            item: Item::new(name, unit_price, quantity)?,
            brand: brand.into(),
        })
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clothing {
    #[serde(flatten)]
    item: Item,
    size: String,
}

impl Clothing {
    pub fn new(
        name: impl Into<String>,
        size: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> ResultEngine<Self> {
        Ok(Self {
            item: Item::new(name, unit_price, quantity)?,
            size: size.into(),
        })
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn size(&self) -> &str {
        &self.size
    }
}

/// One priced catalog line in a [`Cart`](crate::Cart).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entry {
    Book(Book),
    Electronics(Electronics),
    Clothing(Clothing),
}

impl Entry {
    /// Builds an entry of the given kind.
    ///
    /// `attribute` is the author, brand or size depending on `kind`.
    pub fn new(
        kind: EntryKind,
        name: impl Into<String>,
        attribute: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> ResultEngine<Self> {
        Ok(match kind {
            EntryKind::Book => Entry::Book(Book::new(name, attribute, unit_price, quantity)?),
            EntryKind::Electronics => {
                Entry::Electronics(Electronics::new(name, attribute, unit_price, quantity)?)
            }
            EntryKind::Clothing => {
                Entry::Clothing(Clothing::new(name, attribute, unit_price, quantity)?)
            }
        })
    }

    /// Routes to the operation of `computation` matching this variant.
    pub fn accept<C: Computation + ?Sized>(&self, computation: &mut C) {
        match self {
            Entry::Book(book) => computation.visit_book(book),
            Entry::Electronics(electronics) => computation.visit_electronics(electronics),
            Entry::Clothing(clothing) => computation.visit_clothing(clothing),
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Book(_) => EntryKind::Book,
            Entry::Electronics(_) => EntryKind::Electronics,
            Entry::Clothing(_) => EntryKind::Clothing,
        }
    }

    pub fn item(&self) -> &Item {
        match self {
            Entry::Book(book) => book.item(),
            Entry::Electronics(electronics) => electronics.item(),
            Entry::Clothing(clothing) => clothing.item(),
        }
    }

    /// Author, brand or size.
    pub fn attribute(&self) -> &str {
        match self {
            Entry::Book(book) => book.author(),
            Entry::Electronics(electronics) => electronics.brand(),
            Entry::Clothing(clothing) => clothing.size(),
        }
    }

    pub fn name(&self) -> &str {
        self.item().name()
    }

    pub fn unit_price(&self) -> Money {
        self.item().unit_price()
    }

    pub fn quantity(&self) -> u32 {
        self.item().quantity()
    }

    pub fn subtotal(&self) -> Money {
        self.item().subtotal()
    }
}

impl From<Book> for Entry {
    fn from(book: Book) -> Self {
        Entry::Book(book)
    }
}

impl From<Electronics> for Entry {
    fn from(electronics: Electronics) -> Self {
        Entry::Electronics(electronics)
    }
}

impl From<Clothing> for Entry {
    fn from(clothing: Clothing) -> Self {
        Entry::Clothing(clothing)
    }
}
