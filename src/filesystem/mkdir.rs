use std::collections::TryReserveError;

use snafu::{ResultExt, Snafu, ensure};
use tracing::{debug, info};

use super::namespace::Anchors;
use super::node::{NodeId, NodeName};
use super::resolver::{MAX_PATH_LEN, ResolveError, split_path};
use super::tree::Tree;

/// Creates a directory at `path`, appending it after its existing siblings.
///
/// The tree is left untouched on every error.
pub fn mkdir(tree: &mut Tree, anchors: &Anchors, path: &str) -> Result<NodeId, MkdirError> {
    ensure!(path != "/", InvalidTargetSnafu { path });

    let split = split_path(tree, anchors, path).map_err(|error| match error {
        ResolveError::PathTooLong { length } => MkdirError::PathTooLong { length },
        ResolveError::DirectoryNotFound { token } => MkdirError::ParentNotFound { token },
    })?;

    let name = NodeName::new(&split.base_name);
    if name.as_str().len() < split.base_name.len() {
        debug!(
            "Name '{}' truncated to '{}'",
            split.base_name,
            name.as_str()
        );
    }

    ensure!(
        tree.find_child(split.parent, name.as_str()).is_none(),
        AlreadyExistsSnafu {
            name: name.as_str()
        }
    );

    let id = tree
        .append_directory(split.parent, name)
        .context(AllocationFailureSnafu)?;
    info!(
        "Created directory '{}' as node {}, tree holds {} nodes",
        path,
        id,
        tree.len()
    );

    Ok(id)
}

#[derive(Debug, Snafu)]
pub enum MkdirError {
    #[snafu(display("No directory name in path '{}'", path))]
    InvalidTarget { path: String },
    #[snafu(display("Path is {} bytes long, the limit is {}", length, MAX_PATH_LEN))]
    PathTooLong { length: usize },
    #[snafu(display("Parent directory not found: '{}' does not exist", token))]
    ParentNotFound { token: String },
    #[snafu(display("Directory '{}' already exists", name))]
    AlreadyExists { name: String },
    #[snafu(display("Memory allocation failed"))]
    AllocationFailure { source: TryReserveError },
}
