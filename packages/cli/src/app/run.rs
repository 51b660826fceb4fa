use super::context::AppContext;
use crate::cli::root::{Cli, Command};
use crate::commands;
use crate::error::CliError;
use clap::error::ErrorKind;
use clap::Parser;
use mole_history::registry::DEFAULT_TABLE;
use std::ffi::OsString;
use std::io::{BufWriter, Write};

pub fn run() -> Result<(), CliError> {
    let cli = match parse(std::env::args_os()) {
        Ok(cli) => cli,
        Err(CliError::Args(err)) if is_informational(&err) => {
            return err
                .print()
                .map_err(|source| CliError::io("failed to print help", source));
        }
        Err(err) => return Err(err),
    };
    let context = AppContext::from_cli(&cli);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    dispatch(&context, cli.command, &mut out)?;
    out.flush().map_err(|source| CliError::io("failed to flush stdout", source))
}

/// Parses the command line without exiting; usage errors become
/// [`CliError::Args`].
pub fn parse<I, T>(args: I) -> Result<Cli, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Ok(Cli::try_parse_from(args)?)
}

/// `--help` and `--version` surface as clap errors but are not failures.
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

pub fn dispatch<W: Write>(
    context: &AppContext,
    command: Option<Command>,
    out: &mut W,
) -> Result<(), CliError> {
    match command {
        None => commands::export::run(context, DEFAULT_TABLE, out),
        Some(Command::Ls(args)) => commands::export::run(context, &args.tablename, out),
        Some(Command::Tables(args)) => commands::tables::run(args, out),
    }
}
