use crate::flow::Flow;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "signals")]
#[command(about = "An event and signal log management CLI")]
pub struct AppArgs {
    #[arg(long, help = "Show the entries of a collection", conflicts_with = "create")]
    pub visualise: bool,

    #[arg(long, help = "Create a new signal collection")]
    pub create: bool,

    #[arg(
        long = "collections-dir",
        help = "Directory holding the collection files (or set SIGNALS_COLLECTIONS_DIR)"
    )]
    pub collections_dir: Option<PathBuf>,

    #[arg(long, help = "JSON config file path")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Log what the tool is doing to stderr")]
    pub verbose: bool,
}

impl AppArgs {
    pub fn from_cli() -> Self {
        <Self as Parser>::parse()
    }

    /// The workflow selected by the flags. Appending is the default.
    pub fn flow(&self) -> Flow {
        if self.visualise {
            Flow::Visualise
        } else if self.create {
            Flow::Create
        } else {
            Flow::Append
        }
    }
}
