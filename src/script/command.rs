use derive_more::Display;
use tracing::warn;

/// One line of a command script
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Command {
    #[display("mkdir {_0}")]
    Mkdir(String),
    #[display("cd {_0}")]
    Cd(String),
    #[display("pwd")]
    Pwd,
    #[display("ls {_0}")]
    Ls(String),
    #[display("tree")]
    Tree,
}

impl Command {
    /// Parses `verb [argument]`. Unknown verbs and surplus arguments are
    /// skipped with a warning.
    pub fn from_line(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let verb = words.next()?;
        let argument = words.next().unwrap_or_default().to_string();

        if let Some(extra) = words.next() {
            warn!("Unexpected argument '{}' in command '{}'. Skipping.", extra, line);
            return None;
        }

        match verb {
            "mkdir" => Some(Command::Mkdir(argument)),
            "cd" => Some(Command::Cd(argument)),
            "ls" => Some(Command::Ls(argument)),
            "pwd" | "tree" if !argument.is_empty() => {
                warn!("Command '{}' takes no argument. Skipping.", verb);
                None
            }
            "pwd" => Some(Command::Pwd),
            "tree" => Some(Command::Tree),
            _ => {
                warn!("Unknown command '{}'. Skipping.", verb);
                None
            }
        }
    }
}
