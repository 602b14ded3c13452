//! Handles settings for the application.
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML file
//! (`shopeasy.toml` unless `--config` is given), `SHOPEASY_*` environment
//! variables, then command-line flags.
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

use crate::{error::Result, parsing};

const DEFAULT_CONFIG_PATH: &str = "shopeasy.toml";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
    pub format: OutputFormat,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Cart {
    pub seed_samples: bool,
    pub items: Vec<parsing::ItemForm>,
}

impl Default for Cart {
    fn default() -> Self {
        Self {
            seed_samples: true,
            items: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub cart: Cart,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// List the cart rows.
    List,
    /// Print one detail line per item.
    Details,
    /// Total price without discounts.
    Total,
    /// Total price with the per-type discount rules applied.
    Discount,
    /// Details, total and discounted total together.
    Report,
    /// Interactive shell reading commands from stdin.
    Shell,
}

#[derive(Debug, Parser)]
#[command(name = "shopeasy")]
#[command(about = "Shopping cart with pluggable computations (details, total, discounts)")]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the log level (e.g. `debug`).
    #[arg(long)]
    level: Option<String>,
    /// Override the output format.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Start from an empty cart instead of the sample items.
    #[arg(long)]
    no_samples: bool,
    /// Extra item, `KIND:NAME:ATTRIBUTE:PRICE[:QTY]`. Repeatable.
    #[arg(long = "item", value_name = "ITEM")]
    items: Vec<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Parsed command line merged with the configuration sources.
#[derive(Debug)]
pub struct Invocation {
    pub settings: Settings,
    pub command: Command,
}

pub fn load() -> Result<Invocation> {
    merge(Args::parse(), environment())
}

/// `SHOPEASY_APP__LEVEL` sets `app.level`.
fn environment() -> config::Environment {
    config::Environment::with_prefix("SHOPEASY")
        .prefix_separator("_")
        .separator("__")
}

/// Layers the config file and `environment` under the command-line flags.
fn merge(args: Args, environment: config::Environment) -> Result<Invocation> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(config_path).required(false))
        .add_source(environment)
        .build()?
        .try_deserialize()?;

    if let Some(level) = args.level {
        settings.app.level = level;
    }
    if let Some(format) = args.format {
        settings.app.format = format;
    }
    if args.no_samples {
        settings.cart.seed_samples = false;
    }
    for raw in &args.items {
        settings.cart.items.push(parsing::parse_item_spec(raw)?);
    }

    Ok(Invocation {
        settings,
        command: args.command.unwrap_or(Command::Report),
    })
}
