//! Text and JSON rendering of cart views.

use engine::{Entry, Money};
use serde::Serialize;

use crate::{error::Result, settings::OutputFormat};

#[derive(Serialize)]
struct Amount {
    minor: i64,
    text: String,
}

impl From<Money> for Amount {
    fn from(money: Money) -> Self {
        Self {
            minor: money.minor(),
            text: money.to_string(),
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    lines: &'a [String],
    total: Amount,
    discounted_total: Amount,
}

#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// One row per entry: `00 - Book | Dune | Rs.9.99 x2`.
    pub fn listing(&self, entries: &[Entry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
            OutputFormat::Text => Ok(entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    format!(
                        "{index:02} - {} | {} | Rs.{} x{}",
                        entry.kind().label(),
                        entry.name(),
                        entry.unit_price(),
                        entry.quantity()
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    pub fn details(&self, lines: &[String]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(lines)?),
            OutputFormat::Text => {
                let mut out = String::from("Cart Details:");
                for line in lines {
                    out.push('\n');
                    out.push_str(line);
                }
                Ok(out)
            }
        }
    }

    pub fn total(&self, total: Money) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&Amount::from(total))?),
            OutputFormat::Text => Ok(format!("Total price (no discounts): Rs.{total}")),
        }
    }

    pub fn discounted(&self, total: Money) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&Amount::from(total))?),
            OutputFormat::Text => Ok(format!("Discounted total (rules applied): Rs.{total}")),
        }
    }

    pub fn report(&self, lines: &[String], total: Money, discounted: Money) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&Report {
                lines,
                total: total.into(),
                discounted_total: discounted.into(),
            })?),
            OutputFormat::Text => {
                let mut out = String::new();
                for line in lines {
                    out.push_str(line);
                    out.push('\n');
                }
                out.push_str(&format!("\nTotal (no discounts): Rs.{total}\n"));
                out.push_str(&format!("Discounted total: Rs.{discounted}"));
                Ok(out)
            }
        }
    }
}
