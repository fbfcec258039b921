//! `stockdesk` CLI: argument parsing and the per-invocation session.

pub mod session;
pub mod telemetry;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use session::Session;

/// Inventory stock lookup.
#[derive(Debug, Parser)]
#[command(name = "stockdesk", version, about = "Look up product stock from a static inventory file")]
pub struct Cli {
    /// Directory containing `data/inventory.json` and `i18n/<locale>.json`.
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub data_dir: PathBuf,

    /// Locale override (e.g. `en-US`, `de-DE`); defaults to the system locale.
    #[arg(long, value_name = "LOCALE")]
    pub lang: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up stock status for a product identifier.
    Lookup {
        /// Product identifier (case-insensitive).
        id: String,

        /// Emit the structured result as JSON instead of rendered text.
        #[arg(long)]
        json: bool,
    },

    /// List all loaded products.
    List {
        /// Emit the product list as JSON instead of rendered text.
        #[arg(long)]
        json: bool,
    },
}

/// Execute a parsed invocation and return what should go to stdout.
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let locale = stockdesk_i18n::resolve_locale(cli.lang.as_deref());
    let session = Session::open(&cli.data_dir, &locale);

    let output = match &cli.command {
        Command::Lookup { id, json: false } => session.lookup_text(id),
        Command::Lookup { id, json: true } => {
            serde_json::to_string_pretty(&session.lookup_json(id))?
        }
        Command::List { json: false } => session.list_text(),
        Command::List { json: true } => serde_json::to_string_pretty(session.inventory())?,
    };
    Ok(output)
}
