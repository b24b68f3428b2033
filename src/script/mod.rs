mod command;
mod script;

pub use command::Command;
pub use script::{Script, ScriptError};
