use super::ls::LsArgs;
use super::tables::TablesArgs;
use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mole")]
#[command(about = "Export Chrome browser history as line-delimited JSON")]
pub struct Cli {
    /// Path to the Chrome History database. Searched for under the home
    /// directory when omitted.
    #[arg(long, global = true, env = "MOLE_DB", value_hint = ValueHint::FilePath)]
    pub db: Option<PathBuf>,

    // no command exports the `urls` table
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Export every row of a history table.
    Ls(LsArgs),
    /// List the tables that can be exported.
    Tables(TablesArgs),
}
