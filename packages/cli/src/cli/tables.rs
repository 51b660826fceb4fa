use clap::{Args, ValueEnum};

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum TablesOutputFormat {
    Table,
    Json,
}

#[derive(Debug, Args)]
pub struct TablesArgs {
    /// Output format for the table listing.
    #[arg(long, value_enum, default_value_t = TablesOutputFormat::Table)]
    pub format: TablesOutputFormat,
}
