use clap::Args;

#[derive(Debug, Args)]
pub struct LsArgs {
    /// History table to export, e.g. `urls` or `visits`.
    #[arg(value_name = "TABLENAME")]
    pub tablename: String,
}
