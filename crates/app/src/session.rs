//! Cart session: the actions a user can take and how they map onto the
//! engine.

use std::io::{BufRead, Write};

use engine::{Book, Cart, Clothing, Electronics, Entry, EntryKind, Money, ResultEngine};

use crate::{
    error::{AppError, Result},
    parsing::{self, ItemForm, ParseError},
    render::Renderer,
    settings::{self, Command},
};

const COMMANDS: &str = "\
  list                                          show cart rows
  details                                       one line per item
  total                                         total without discounts
  discount                                      total with discounts applied
  report                                        details and both totals
  clear                                         empty the cart
  help                                          this message
  quit                                          leave the shell
Quote fields containing spaces: add book \"The Art of Java\" \"Ada Coder\" 29.99";

/// Shell help, with one `add` line per entry kind.
pub fn help_text() -> String {
    let mut out = String::from("Commands:\n");
    for kind in EntryKind::ALL {
        let usage = format!(
            "add {} <name> <{}> <price> [qty]",
            kind.label().to_ascii_lowercase(),
            kind.attribute_label()
        );
        out.push_str(&format!("  {usage:<46}new {kind} item\n"));
    }
    out.push_str(COMMANDS);
    out
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Add(ItemForm),
    List,
    Details,
    Total,
    Discount,
    Report,
    Clear,
    Help,
    Quit,
}

impl Action {
    /// Parses one shell line. Blank lines yield `None`.
    pub fn parse(line: &str) -> std::result::Result<Option<Self>, ParseError> {
        let words = parsing::split_words(line)?;
        let Some((head, rest)) = words.split_first() else {
            return Ok(None);
        };

        let action = match head.to_ascii_lowercase().as_str() {
            "add" => match rest {
                [kind, name, attribute, price] => Action::Add(ItemForm {
                    kind: kind.clone(),
                    name: name.clone(),
                    attribute: attribute.clone(),
                    price: price.clone(),
                    quantity: "1".to_string(),
                }),
                [kind, name, attribute, price, quantity] => Action::Add(ItemForm {
                    kind: kind.clone(),
                    name: name.clone(),
                    attribute: attribute.clone(),
                    price: price.clone(),
                    quantity: quantity.clone(),
                }),
                _ => return Err(ParseError::MalformedItem(rest.join(" "))),
            },
            "list" | "ls" => Action::List,
            "details" | "print" => Action::Details,
            "total" => Action::Total,
            "discount" => Action::Discount,
            "report" | "all" => Action::Report,
            "clear" => Action::Clear,
            "help" | "?" => Action::Help,
            "quit" | "exit" => Action::Quit,
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        };
        Ok(Some(action))
    }

    /// Maps a one-shot subcommand. `shell` has no single action.
    pub fn from_command(command: Command) -> Option<Self> {
        match command {
            Command::List => Some(Action::List),
            Command::Details => Some(Action::Details),
            Command::Total => Some(Action::Total),
            Command::Discount => Some(Action::Discount),
            Command::Report => Some(Action::Report),
            Command::Shell => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

/// The three items a fresh cart starts with.
pub fn sample_entries() -> ResultEngine<Vec<Entry>> {
    Ok(vec![
        Book::new("The Art of Java", "Ada Coder", Money::new(29_99), 1)?.into(),
        Electronics::new("Smartphone X", "PhoneCo", Money::new(699_00), 1)?.into(),
        Clothing::new("T-Shirt", "M", Money::new(19_50), 2)?.into(),
    ])
}

/// Builds the starting cart from settings. Invalid items are skipped.
pub fn seed_cart(settings: &settings::Cart) -> Cart {
    let mut cart = Cart::new();
    if settings.seed_samples {
        match sample_entries() {
            Ok(entries) => cart.extend(entries),
            Err(err) => tracing::warn!("failed to build sample items: {err}"),
        }
    }
    for form in &settings.items {
        match form.clone().into_entry() {
            Ok(entry) => cart.append(entry),
            Err(err) => tracing::warn!(name = %form.name, "skipping configured item: {err}"),
        }
    }
    tracing::debug!(items = cart.len(), "cart seeded");
    cart
}

#[derive(Debug)]
pub struct Session {
    cart: Cart,
    renderer: Renderer,
}

impl Session {
    pub fn new(cart: Cart, renderer: Renderer) -> Self {
        Self { cart, renderer }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn execute(&mut self, action: Action) -> Result<Reply> {
        let text = match action {
            Action::Add(form) => {
                let entry = form.into_entry()?;
                tracing::info!(kind = %entry.kind(), name = entry.name(), "item added");
                self.cart.append(entry);
                self.renderer.listing(&self.cart.snapshot())?
            }
            Action::List => self.renderer.listing(&self.cart.snapshot())?,
            Action::Details => self.renderer.details(&engine::run_print_details(&self.cart))?,
            Action::Total => self.renderer.total(engine::run_total(&self.cart))?,
            Action::Discount => self
                .renderer
                .discounted(engine::run_discounted_total(&self.cart))?,
            Action::Report => self.renderer.report(
                &engine::run_print_details(&self.cart),
                engine::run_total(&self.cart),
                engine::run_discounted_total(&self.cart),
            )?,
            Action::Clear => {
                self.cart.clear();
                "Cart cleared.".to_string()
            }
            Action::Help => help_text(),
            Action::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Text(text))
    }

    /// Reads actions line by line until `quit` or end of input.
    ///
    /// Input mistakes are reported on `output` and the shell keeps going.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            let reply = match Action::parse(&line) {
                Ok(None) => continue,
                Ok(Some(action)) => self.execute(action),
                Err(err) => Err(err.into()),
            };
            match reply {
                Ok(Reply::Quit) => break,
                Ok(Reply::Text(text)) => {
                    if !text.is_empty() {
                        writeln!(output, "{text}")?;
                    }
                }
                Err(err @ (AppError::Parse(_) | AppError::Engine(_))) => {
                    writeln!(output, "error: {err}")?;
                }
                Err(err) => return Err(err),
            }
            output.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::OutputFormat;

    fn session(seed: bool) -> Session {
        let cart = seed_cart(&settings::Cart {
            seed_samples: seed,
            items: Vec::new(),
        });
        Session::new(cart, Renderer::new(OutputFormat::Text))
    }

    fn run(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn samples_seed_three_items() {
        let session = session(true);
        assert_eq!(session.cart().len(), 3);
        assert_eq!(engine::run_total(session.cart()), Money::new(767_99));
    }

    #[test]
    fn configured_items_follow_samples_and_bad_ones_are_skipped() {
        let cart = seed_cart(&settings::Cart {
            seed_samples: true,
            items: vec![
                parsing::parse_item_spec("book:Dune:Herbert:9.99:2").unwrap(),
                parsing::parse_item_spec("book:Bad:x:-1").unwrap(),
            ],
        });
        assert_eq!(cart.len(), 4);
        assert_eq!(cart.snapshot()[3].name(), "Dune");
    }

    #[test]
    fn parses_add_with_default_quantity() {
        let action = Action::parse(r#"add electronics "Smart TV" Acme 250"#)
            .unwrap()
            .unwrap();
        let Action::Add(form) = action else {
            panic!("expected add");
        };
        assert_eq!(form.name, "Smart TV");
        assert_eq!(form.quantity, "1");
    }

    #[test]
    fn parse_rejects_unknown_and_short_add() {
        assert!(matches!(
            Action::parse("checkout"),
            Err(ParseError::UnknownCommand(_))
        ));
        assert!(matches!(
            Action::parse("add book Dune"),
            Err(ParseError::MalformedItem(_))
        ));
        assert_eq!(Action::parse("  "), Ok(None));
    }

    #[test]
    fn shell_runs_scenario() {
        let mut session = session(false);
        let out = run(
            &mut session,
            "add book \"Rust in Action\" McNamara 10 2\n\
             add electronics Monitor Dell 250\n\
             add clothing Jeans 32 20 3\n\
             total\n\
             discount\n",
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "00 - Book | Rust in Action | Rs.10.00 x2");
        assert!(out.contains("Total price (no discounts): Rs.330.00"));
        assert!(out.contains("Discounted total (rules applied): Rs.303.00"));
    }

    #[test]
    fn shell_reports_input_errors_and_continues() {
        let mut session = session(false);
        let out = run(
            &mut session,
            "add book Dune Herbert abc\n\
             add book \"\" Herbert 1\n\
             add clothing Hat S 5 0\n\
             add book Dune Herbert 5 x\n\
             add book Dune Herbert 5 101\n\
             frobnicate\n\
             total\n",
        );
        assert!(out.contains("error: Invalid number for price"));
        assert!(out.contains("error: Name is required"));
        assert!(out.contains("error: Invalid entry"));
        assert_eq!(out.matches("error: Invalid number for quantity").count(), 2);
        assert!(out.contains("error: Unknown command: frobnicate"));
        assert!(out.contains("Total price (no discounts): Rs.0.00"));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn shell_stops_at_quit() {
        let mut session = session(true);
        let out = run(&mut session, "clear\nquit\ntotal\n");
        assert_eq!(out, "Cart cleared.\n");
        assert!(session.cart().is_empty());
    }

    #[test]
    fn report_lists_details_then_totals() {
        let mut session = session(true);
        let Reply::Text(text) = session.execute(Action::Report).unwrap() else {
            panic!("expected text");
        };
        assert_eq!(
            text,
            "[Book] The Art of Java by Ada Coder - Rs.29.99 x 1 = Rs.29.99\n\
             [Electronics] Smartphone X - PhoneCo - Rs.699.00 x 1 = Rs.699.00\n\
             [Clothing] T-Shirt (size M) - Rs.19.50 x 2 = Rs.39.00\n\
             \n\
             Total (no discounts): Rs.767.99\n\
             Discounted total: Rs.742.59"
        );
    }

    #[test]
    fn help_lists_an_add_line_per_kind() {
        let help = help_text();
        assert!(help.starts_with("Commands:\n"));
        assert!(help.contains("add book <name> <author> <price> [qty]"));
        assert!(help.contains("add electronics <name> <brand> <price> [qty]"));
        assert!(help.contains("add clothing <name> <size> <price> [qty]"));
        assert!(help.contains("quit"));
    }
}
