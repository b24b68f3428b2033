use std::collections::TryReserveError;

use tracing::debug;

use super::node::{EntryType, Node, NodeId, NodeName};

const ROOT_NAME: &str = "/";

/// Arena holding every node of a directory tree.
///
/// Nodes are never removed, so a [`NodeId`] handed out by the tree stays
/// valid for the tree's whole lifetime. Children are kept as a singly linked
/// list threaded through `first_child` and `next_sibling`.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(
                NodeName::new(ROOT_NAME),
                EntryType::Directory,
                None,
            )],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::from(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Iterates over the children of `parent` in sibling order
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.node(parent).and_then(Node::first_child),
        }
    }

    /// Returns the first directory child of `parent` called `name`.
    /// Children of any other type never match.
    pub fn find_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.children(parent).find(|&child| {
            self.node(child)
                .is_some_and(|node| node.is_directory() && node.name.matches(name))
        })
    }

    /// Links a new directory at the tail of `parent`'s child list.
    pub(super) fn append_directory(
        &mut self,
        parent: NodeId,
        name: NodeName,
    ) -> Result<NodeId, TryReserveError> {
        self.append_entry(parent, name, EntryType::Directory)
    }

    fn append_entry(
        &mut self,
        parent: NodeId,
        name: NodeName,
        entry_type: EntryType,
    ) -> Result<NodeId, TryReserveError> {
        self.nodes.try_reserve(1)?;

        let id = NodeId::from(self.nodes.len());
        let tail = self.children(parent).last();
        self.nodes.push(Node::new(name, entry_type, Some(parent)));

        match tail {
            Some(last) => self.nodes[last.index()].next_sibling = Some(id),
            None => self.nodes[parent.index()].first_child = Some(id),
        }

        debug!("Linked node {} under parent {}", id, parent);
        Ok(id)
    }

    /// Builds the absolute path of `id` by walking parent links.
    pub fn path_of(&self, id: NodeId) -> String {
        let mut components = Vec::new();
        let mut current = self.node(id);
        while let Some(node) = current {
            let Some(parent) = node.parent() else {
                break;
            };
            components.push(node.name());
            current = self.node(parent);
        }

        if components.is_empty() {
            return ROOT_NAME.to_string();
        }
        components
            .iter()
            .rev()
            .fold(String::new(), |mut path, component| {
                path.push('/');
                path.push_str(component);
                path
            })
    }

    /// Renders the subtree below `id`, one entry per line, children indented
    /// by two spaces per level.
    pub fn render(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.render_into(id, 0, &mut out);
        out
    }

    fn render_into(&self, id: NodeId, depth: usize, out: &mut String) {
        let Some(node) = self.node(id) else {
            return;
        };
        out.push_str(&"  ".repeat(depth));
        out.push_str(node.name());
        if node.is_directory() && node.parent.is_some() {
            out.push('/');
        }
        out.push('\n');
        for child in self.children(id) {
            self.render_into(child, depth + 1, out);
        }
    }

    #[cfg(test)]
    pub(super) fn append_file(&mut self, parent: NodeId, name: &str) -> NodeId {
        self.append_entry(parent, NodeName::new(name), EntryType::File)
            .expect("Failed to grow arena")
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a child list, following `next_sibling` links.
pub struct Children<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.node(current).and_then(Node::next_sibling);
        Some(current)
    }
}
