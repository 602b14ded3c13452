//! Text input parsing for the presentation layer.
//!
//! The engine never sees malformed numbers: prices and quantities are parsed
//! here and only well-typed values are handed to [`Entry::new`], which still
//! performs the domain checks (negative price, zero quantity).

use engine::{Entry, EntryKind, Money};

use crate::error::Result;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid number for price")]
    InvalidPrice,
    #[error("Invalid number for quantity")]
    InvalidQuantity,
    #[error("Name is required")]
    MissingName,
    #[error("Unknown item type: {0}")]
    UnknownKind(String),
    #[error("Malformed item: {0}")]
    MalformedItem(String),
    #[error("Unterminated quote")]
    UnterminatedQuote,
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// Raw, unvalidated fields of an item to add.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct ItemForm {
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub attribute: String,
    pub price: String,
    #[serde(default = "default_quantity")]
    pub quantity: String,
}

fn default_quantity() -> String {
    "1".to_string()
}

impl ItemForm {
    /// Parses the fields and builds the entry.
    ///
    /// A blank attribute becomes `-`.
    pub fn into_entry(self) -> Result<Entry> {
        let kind = parse_kind(&self.kind)?;
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ParseError::MissingName.into());
        }
        let attribute = match self.attribute.trim() {
            "" => "-",
            other => other,
        };
        let price = parse_price(&self.price)?;
        let quantity = parse_quantity(&self.quantity)?;
        Ok(Entry::new(kind, name, attribute, price, quantity)?)
    }
}

pub fn parse_kind(raw: &str) -> std::result::Result<EntryKind, ParseError> {
    raw.parse()
        .map_err(|_| ParseError::UnknownKind(raw.trim().to_string()))
}

/// Parses a decimal string into [`Money`].
///
/// Accepts `.` or `,` as decimal separator and an optional leading `+`/`-`.
///
/// Validation rules:
/// - max 2 fractional digits (rejects `12.345`)
/// - rejects empty/invalid strings
pub fn parse_price(raw: &str) -> std::result::Result<Money, ParseError> {
    let invalid = || ParseError::InvalidPrice;

    let trimmed = raw.trim();
    let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
        (true, stripped)
    } else if let Some(stripped) = trimmed.strip_prefix('+') {
        (false, stripped)
    } else {
        (false, trimmed)
    };

    let rest = rest.trim().replace(',', ".");
    let mut parts = rest.split('.');
    let major_str = parts.next().ok_or_else(invalid)?;
    let fraction_str = parts.next();
    if parts.next().is_some() {
        return Err(invalid());
    }

    if major_str.is_empty() || !major_str.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let major: i64 = major_str.parse().map_err(|_| invalid())?;

    let fraction: u8 = match fraction_str {
        None | Some("") => 0,
        Some(frac) => {
            if !frac.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
            match frac.len() {
                1 => frac.parse::<u8>().map_err(|_| invalid())? * 10,
                2 => frac.parse::<u8>().map_err(|_| invalid())?,
                _ => return Err(invalid()),
            }
        }
    };

    let amount = Money::from_major(major, fraction).ok_or_else(invalid)?;
    if negative {
        Ok(Money::new(-amount.minor()))
    } else {
        Ok(amount)
    }
}

/// Largest quantity accepted for a single line.
pub const MAX_QUANTITY: u32 = 100;

/// Parses a quantity of at most [`MAX_QUANTITY`].
///
/// Zero parses; the engine rejects it as an invalid entry.
pub fn parse_quantity(raw: &str) -> std::result::Result<u32, ParseError> {
    match raw.trim().parse() {
        Ok(quantity) if quantity <= MAX_QUANTITY => Ok(quantity),
        _ => Err(ParseError::InvalidQuantity),
    }
}

/// Parses `KIND:NAME:ATTRIBUTE:PRICE[:QTY]` as given on the command line.
pub fn parse_item_spec(raw: &str) -> std::result::Result<ItemForm, ParseError> {
    let parts: Vec<&str> = raw.split(':').collect();
    let (kind, name, attribute, price, quantity) = match parts.as_slice() {
        [kind, name, attribute, price] => (kind, name, attribute, price, "1"),
        [kind, name, attribute, price, quantity] => (kind, name, attribute, price, *quantity),
        _ => return Err(ParseError::MalformedItem(raw.to_string())),
    };
    Ok(ItemForm {
        kind: kind.to_string(),
        name: name.to_string(),
        attribute: attribute.to_string(),
        price: price.to_string(),
        quantity: quantity.to_string(),
    })
}

/// Splits a shell line on whitespace, keeping double-quoted runs together.
pub fn split_words(line: &str) -> std::result::Result<Vec<String>, ParseError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quoted {
        return Err(ParseError::UnterminatedQuote);
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
