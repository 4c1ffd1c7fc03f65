use clap::{Parser, Subcommand};

use crate::summarize::SummarizeArgs;

#[derive(Parser)]
#[command(
    name = "ghsum",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Fetch a GitHub issue with its full context and generate a summary
    Summarize(SummarizeArgs),
}
