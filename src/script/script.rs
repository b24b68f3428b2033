use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    string::FromUtf8Error,
};

use compio::fs;
use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::debug;

use crate::script::Command;

const COMMANDS_KEY: &str = "commands";

/// Ordered list of commands loaded from a YAML script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    commands: Vec<Command>,
}

impl Script {
    pub async fn read(path: &Path) -> Result<Self, ScriptError> {
        debug!("Reading script file: {}", path.display());
        let bytes = fs::read(path).await.context(ReadSnafu {
            file_path: path.to_path_buf(),
        })?;
        debug!("Successfully read script file: {} bytes", bytes.len());

        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: path.to_path_buf(),
        })?;
        contents.as_str().try_into()
    }

    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }

    fn parse_commands_from_yaml(
        top_level: &LinkedHashMap<Yaml, Yaml>,
    ) -> Result<Vec<Command>, ScriptError> {
        let Some(section) =
            top_level.get(&Yaml::Value(Scalar::String(Cow::Borrowed(COMMANDS_KEY))))
        else {
            debug!("Script has no '{}' section", COMMANDS_KEY);
            return Ok(Vec::new());
        };

        let commands = section
            .as_sequence()
            .ok_or(ScriptError::CommandsNotSequence)?
            .iter()
            .filter_map(|entry| {
                let line = entry.as_str();
                if line.is_none() {
                    debug!("Skipping invalid command entry: {:?}", entry);
                }
                line
            })
            .filter_map(Command::from_line)
            .collect::<Vec<_>>();

        Ok(commands)
    }
}

impl TryFrom<&str> for Script {
    type Error = ScriptError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let document = documents.first().ok_or(ScriptError::MalformedScript)?;

        let top_level = document.as_mapping().ok_or(ScriptError::TopLevelNotMap)?;
        let commands = Self::parse_commands_from_yaml(top_level)?;
        debug!("Parsed {} commands", commands.len());

        Ok(Script { commands })
    }
}

#[derive(Debug, Snafu)]
pub enum ScriptError {
    #[snafu(display("Failed to read the script file: {}", file_path.display()))]
    ReadError {
        file_path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Script file {} is not valid UTF-8", file_path.display()))]
    EncodingError {
        file_path: PathBuf,
        source: FromUtf8Error,
    },
    #[snafu(display("Failed to parse the script file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted script file"))]
    MalformedScript,
    #[snafu(display("Top level of script should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Commands section should be a list"))]
    CommandsNotSequence,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[compio::test]
    async fn script_returns_error_on_nonexistent_file() {
        let result = Script::read(Path::new("nonexistent.yaml")).await;
        assert!(matches!(result, Err(ScriptError::ReadError { .. })));
    }

    #[compio::test]
    async fn script_reads_commands_from_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "commands:\n  - mkdir /usr\n  - cd /usr\n  - pwd")
            .expect("Failed to write to temp file");

        let script = Script::read(file.path()).await.expect("Failed to read script");

        assert_eq!(
            script.into_commands(),
            vec![
                Command::Mkdir("/usr".into()),
                Command::Cd("/usr".into()),
                Command::Pwd
            ]
        );
    }

    #[compio::test]
    async fn script_returns_error_on_invalid_utf8() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(&[0xff, 0xfe, 0x00])
            .expect("Failed to write to temp file");

        let result = Script::read(file.path()).await;

        assert!(matches!(result, Err(ScriptError::EncodingError { .. })));
    }

    #[test]
    fn script_returns_error_on_invalid_yaml() {
        let result: Result<Script, _> = "invalid: yaml: content: [unclosed".try_into();
        assert!(matches!(result, Err(ScriptError::ParseError { .. })));
    }

    #[test]
    fn script_returns_error_on_empty_file() {
        let result: Result<Script, _> = "".try_into();
        assert!(matches!(result, Err(ScriptError::MalformedScript)));
    }

    #[test]
    fn script_returns_error_when_top_level_is_not_map() {
        let result: Result<Script, _> = "- mkdir /a\n- mkdir /b".try_into();
        assert!(matches!(result, Err(ScriptError::TopLevelNotMap)));
    }

    #[test]
    fn script_returns_error_when_commands_is_not_sequence() {
        let result: Result<Script, _> = "commands:\n  first: mkdir /a".try_into();
        assert!(matches!(result, Err(ScriptError::CommandsNotSequence)));
    }

    #[test]
    fn script_handles_missing_commands_section() {
        let result: Result<Script, _> = "other: value".try_into();
        assert_eq!(result.unwrap(), Script::default());
    }

    #[test]
    fn script_skips_invalid_entries() {
        let yaml = r#"
commands:
  - mkdir /a
  - 42
  - [nested, list]
  - frobnicate /a
  - tree
"#;
        let script: Script = yaml.try_into().unwrap();
        assert_eq!(
            script.into_commands(),
            vec![Command::Mkdir("/a".into()), Command::Tree]
        );
    }

    #[test]
    fn script_keeps_declaration_order() {
        let yaml = "commands:\n  - mkdir /c\n  - mkdir /a\n  - mkdir /b";
        let script: Script = yaml.try_into().unwrap();
        let paths: Vec<String> = script
            .into_commands()
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(paths, vec!["mkdir /c", "mkdir /a", "mkdir /b"]);
    }
}
