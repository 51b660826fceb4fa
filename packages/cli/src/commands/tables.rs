use crate::cli::tables::{TablesArgs, TablesOutputFormat};
use crate::error::CliError;
use crate::output;
use mole_history::registry;
use std::io::Write;

pub fn run<W: Write>(args: TablesArgs, out: &mut W) -> Result<(), CliError> {
    let descriptors = registry::descriptors();
    match args.format {
        TablesOutputFormat::Json => output::write_descriptors_ndjson(out, descriptors),
        TablesOutputFormat::Table => output::write_descriptors_table(out, descriptors),
    }
}
