use std::path::PathBuf;

use supports_color::Stream;

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub paths: Vec<String>,
    pub script: Option<PathBuf>,
    pub show_tree: bool,
    pub color: bool,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        let color = !cli.no_color && supports_color::on(Stream::Stdout).is_some();
        Self {
            paths: cli.paths,
            script: cli.script,
            show_tree: cli.show_tree,
            color,
        }
    }
}
