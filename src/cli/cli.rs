use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Build an in-memory directory tree")]
pub struct Cli {
    /// Directories to create, after the script has run
    pub paths: Vec<String>,

    /// YAML file with a `commands` list to run first
    #[clap(long, short)]
    pub script: Option<PathBuf>,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// Print the whole tree once all commands have run
    #[clap(long)]
    pub show_tree: bool,

    /// Never color the outcome lines
    #[clap(long)]
    pub no_color: bool,
}
