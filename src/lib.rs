//! Agenda import/lookup library root.
//! Exposes the CLI parsers, the two high-level entry points used by the
//! binaries, and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod source;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{ImportCli, LookupCli};
use config::Config;
use errors::AppResult;

/// Entry point of `import_agenda`
pub fn run_import() -> AppResult<()> {
    let cli = ImportCli::parse();
    let cfg = Config::load()?.with_overrides(cli.db.as_deref(), cli.start_row);
    cli::commands::import::handle(&cli, &cfg)
}

/// Entry point of `lookup_agenda`
pub fn run_lookup() -> AppResult<()> {
    let cli = LookupCli::parse();
    let cfg = Config::load()?.with_overrides(cli.db.as_deref(), None);
    cli::commands::lookup::handle(&cli, &cfg)
}
