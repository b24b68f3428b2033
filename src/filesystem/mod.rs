//! In-memory directory tree with path resolution.
//!
//! Nodes live in an arena and link to each other through parent,
//! first-child and next-sibling handles. Paths are resolved against an
//! explicit pair of anchors: the root for absolute paths and the current
//! directory for relative ones.

mod mkdir;
mod namespace;
mod node;
mod resolver;
mod tree;

pub use mkdir::MkdirError;
pub use namespace::{Namespace, NavigationError};
#[cfg(test)]
pub use resolver::MAX_PATH_LEN;
