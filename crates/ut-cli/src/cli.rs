use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "undotree",
    about = "undotree: branching, content-addressed undo history",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// History configuration (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Commit each file's content in order and print the resulting tree
    Replay(ReplayArgs),
    /// Print the edit script between two files
    Diff(DiffArgs),
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Files whose contents become successive states; the first is the initial snapshot
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    /// Undo this many times after replaying
    #[arg(long, default_value = "0")]
    pub undo: usize,
}

#[derive(Args)]
pub struct DiffArgs {
    pub before: PathBuf,
    pub after: PathBuf,
}
