use derive_more::{Display, From, Into};

/// Size of the name field, terminator included.
pub const NAME_CAPACITY: usize = 64;

/// Longest name text a node can hold.
pub const MAX_NAME_LEN: usize = NAME_CAPACITY - 1;

/// Stable handle of a node inside a [`Tree`](super::Tree) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
#[display("#{_0}")]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Represents the kind of a tree entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EntryType {
    #[display("D")]
    Directory,
    /// Modeled tag only, never produced outside tests
    #[allow(dead_code)]
    #[display("F")]
    File,
}

/// Node name clipped to [`MAX_NAME_LEN`] bytes.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct NodeName(String);

impl NodeName {
    pub fn new(name: &str) -> Self {
        Self(Self::clip(name).to_string())
    }

    /// Returns the longest prefix of `name` that fits the name field without
    /// splitting a character.
    pub fn clip(name: &str) -> &str {
        if name.len() <= MAX_NAME_LEN {
            return name;
        }
        let mut end = MAX_NAME_LEN;
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        &name[..end]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact comparison against a probe clipped the same way as stored names.
    pub fn matches(&self, probe: &str) -> bool {
        self.0 == Self::clip(probe)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(super) name: NodeName,
    pub(super) entry_type: EntryType,
    pub(super) parent: Option<NodeId>,
    pub(super) first_child: Option<NodeId>,
    pub(super) next_sibling: Option<NodeId>,
}

impl Node {
    pub(super) fn new(name: NodeName, entry_type: EntryType, parent: Option<NodeId>) -> Self {
        Self {
            name,
            entry_type,
            parent,
            first_child: None,
            next_sibling: None,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn is_directory(&self) -> bool {
        self.entry_type == EntryType::Directory
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    pub fn next_sibling(&self) -> Option<NodeId> {
        self.next_sibling
    }
}
