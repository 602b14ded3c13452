use std::io;

use render::Renderer;
use session::{Action, Reply, Session};

mod error;
mod parsing;
mod render;
mod session;
mod settings;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let invocation = settings::load()?;
    let settings = invocation.settings;

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(format!(
            "shopeasy={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let cart = session::seed_cart(&settings.cart);
    let mut session = Session::new(cart, Renderer::new(settings.app.format));
    tracing::debug!(items = session.cart().len(), "session ready");

    match Action::from_command(invocation.command) {
        Some(action) => {
            if let Reply::Text(text) = session.execute(action)? {
                println!("{text}");
            }
        }
        None => {
            tracing::info!("Starting shell, type `help` for commands...");
            session.run(io::stdin().lock(), io::stdout().lock())?;
        }
    }

    Ok(())
}
