use colored::{Color, Colorize};

use crate::filesystem::{MkdirError, NavigationError};

/// Result of running one command, ready to be printed
#[derive(Debug)]
pub enum Outcome {
    Created { path: String },
    MkdirFailed(MkdirError),
    ChangedDirectory { path: String },
    NavigationFailed { verb: &'static str, error: NavigationError },
    WorkingDirectory(String),
    Listing(Vec<String>),
    Tree(String),
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Outcome::MkdirFailed(_) | Outcome::NavigationFailed { .. }
        )
    }
}

/// Turns outcomes into the lines shown to the user
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn format(&self, outcome: &Outcome) -> String {
        match outcome {
            Outcome::Created { path } => format!(
                "{}: node {} successfully created",
                self.label("MKDIR SUCCESS", Color::Green),
                path
            ),
            Outcome::MkdirFailed(error) => format!(
                "{}: {}",
                self.label("MKDIR ERROR", Color::Red),
                Self::describe_mkdir_error(error)
            ),
            Outcome::ChangedDirectory { path } => format!(
                "{}: current directory is {}",
                self.label("CD SUCCESS", Color::Green),
                path
            ),
            Outcome::NavigationFailed { verb, error } => format!(
                "{}: {}",
                self.label(&format!("{} ERROR", verb.to_uppercase()), Color::Red),
                error
            ),
            Outcome::WorkingDirectory(path) => path.clone(),
            Outcome::Listing(names) => names.join("  "),
            Outcome::Tree(rendered) => rendered.trim_end().to_string(),
        }
    }

    fn describe_mkdir_error(error: &MkdirError) -> String {
        match error {
            MkdirError::InvalidTarget { .. } => "no path provided".to_string(),
            MkdirError::ParentNotFound { token } => {
                format!("parent directory not found, directory {token} does not exist")
            }
            MkdirError::AlreadyExists { name } => format!("directory '{name}' already exists"),
            MkdirError::AllocationFailure { .. } => "memory allocation failed".to_string(),
            MkdirError::PathTooLong { .. } => error.to_string().to_lowercase(),
        }
    }

    fn label(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }
}
