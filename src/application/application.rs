use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::application::RuntimeConfig;
use crate::application::report::{Outcome, Reporter};
use crate::filesystem::Namespace;
use crate::script::{Command, Script, ScriptError};

pub struct Application;

impl Application {
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        let commands = Self::load_commands(&app_config).await?;
        info!("Running {} commands", commands.len());

        let reporter = Reporter::new(app_config.color);
        let mut namespace = Namespace::new();
        let failures = Self::run_commands(&mut namespace, &commands)
            .inspect(|outcome| println!("{}", reporter.format(outcome)))
            .filter(Outcome::is_failure)
            .count();

        if failures > 0 {
            warn!("{} of {} commands failed", failures, commands.len());
        }
        info!("Tree holds {} nodes", namespace.tree().len());

        if app_config.show_tree {
            println!("{}", reporter.format(&Outcome::Tree(namespace.render())));
        }

        Ok(())
    }

    /// Script commands first, then one `mkdir` per positional path
    async fn load_commands(app_config: &RuntimeConfig) -> Result<Vec<Command>, ApplicationError> {
        let mut commands = match &app_config.script {
            Some(path) => Script::read(path)
                .await
                .context(ScriptSnafu)?
                .into_commands(),
            None => Vec::new(),
        };
        commands.extend(app_config.paths.iter().cloned().map(Command::Mkdir));
        Ok(commands)
    }

    fn run_commands<'a>(
        namespace: &'a mut Namespace,
        commands: &'a [Command],
    ) -> impl Iterator<Item = Outcome> + 'a {
        commands.iter().map(move |command| {
            debug!("Executing '{}'", command);
            Self::execute(namespace, command)
        })
    }

    fn execute(namespace: &mut Namespace, command: &Command) -> Outcome {
        match command {
            Command::Mkdir(path) => match namespace.mkdir(path) {
                Ok(_) => Outcome::Created { path: path.clone() },
                Err(error) => Outcome::MkdirFailed(error),
            },
            Command::Cd(path) => match namespace.chdir(path) {
                Ok(_) => Outcome::ChangedDirectory {
                    path: namespace.pwd(),
                },
                Err(error) => Outcome::NavigationFailed { verb: "cd", error },
            },
            Command::Pwd => Outcome::WorkingDirectory(namespace.pwd()),
            Command::Ls(path) => match namespace.list(path) {
                Ok(names) => Outcome::Listing(names),
                Err(error) => Outcome::NavigationFailed { verb: "ls", error },
            },
            Command::Tree => Outcome::Tree(namespace.render()),
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading the command script"))]
    ScriptError { source: ScriptError },
}
