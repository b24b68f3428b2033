use snafu::{ResultExt, Snafu};
use tracing::debug;

use super::mkdir::{MkdirError, mkdir};
use super::node::NodeId;
use super::resolver::{ResolveError, split_path};
use super::tree::Tree;

/// Reference points for path resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchors {
    /// Start of absolute paths
    pub root: NodeId,
    /// Start of relative paths
    pub cwd: NodeId,
}

impl Anchors {
    pub fn at_root(tree: &Tree) -> Self {
        Self {
            root: tree.root(),
            cwd: tree.root(),
        }
    }
}

/// A tree together with the anchors used to navigate it.
#[derive(Debug, Clone)]
pub struct Namespace {
    tree: Tree,
    anchors: Anchors,
}

impl Namespace {
    pub fn new() -> Self {
        let tree = Tree::new();
        let anchors = Anchors::at_root(&tree);
        Self { tree, anchors }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn mkdir(&mut self, path: &str) -> Result<NodeId, MkdirError> {
        mkdir(&mut self.tree, &self.anchors, path)
    }

    /// Resolves every component of `path` to a directory.
    ///
    /// `/` is the root and an empty path is the current directory.
    pub fn resolve_directory(&self, path: &str) -> Result<NodeId, NavigationError> {
        let split = split_path(&self.tree, &self.anchors, path).context(ResolveSnafu { path })?;
        if split.base_name.is_empty() {
            return Ok(split.parent);
        }
        self.tree
            .find_child(split.parent, &split.base_name)
            .ok_or_else(|| NavigationError::NotFound {
                path: path.to_string(),
            })
    }

    /// Moves the current directory anchor. An empty path goes back to root.
    pub fn chdir(&mut self, path: &str) -> Result<NodeId, NavigationError> {
        let target = if path.is_empty() {
            self.anchors.root
        } else {
            self.resolve_directory(path)?
        };
        debug!("Changing current directory to node {}", target);
        self.anchors.cwd = target;
        Ok(target)
    }

    pub fn pwd(&self) -> String {
        self.tree.path_of(self.anchors.cwd)
    }

    /// Names of the entries directly below `path`, in creation order
    pub fn list(&self, path: &str) -> Result<Vec<String>, NavigationError> {
        let directory = self.resolve_directory(path)?;
        Ok(self
            .tree
            .children(directory)
            .filter_map(|child| self.tree.node(child))
            .map(|node| node.name().to_string())
            .collect())
    }

    pub fn render(&self) -> String {
        self.tree.render(self.anchors.root)
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Snafu)]
pub enum NavigationError {
    #[snafu(display("Cannot resolve '{}': {}", path, source))]
    ResolveError { path: String, source: ResolveError },
    #[snafu(display("Directory '{}' does not exist", path))]
    NotFound { path: String },
}
