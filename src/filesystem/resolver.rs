use snafu::{Snafu, ensure};
use tracing::debug;

use super::namespace::Anchors;
use super::node::NodeId;
use super::tree::Tree;

pub const SEPARATOR: char = '/';

/// Longest path text accepted by the resolver.
pub const MAX_PATH_LEN: usize = 255;

/// A path split into its final component and the directory that holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPath {
    /// Directory reached by walking `dir_name` from the anchor
    pub parent: NodeId,
    pub base_name: String,
    pub dir_name: String,
}

/// Splits `path` at its last separator and walks the directory prefix.
///
/// Absolute paths start at the root anchor, relative ones at the current
/// directory. Empty tokens in the prefix are skipped. The returned parent is
/// the anchor itself when the prefix holds no tokens.
pub fn split_path(tree: &Tree, anchors: &Anchors, path: &str) -> Result<SplitPath, ResolveError> {
    ensure!(
        path.len() <= MAX_PATH_LEN,
        PathTooLongSnafu { length: path.len() }
    );

    let mut current = if path.starts_with(SEPARATOR) {
        anchors.root
    } else {
        anchors.cwd
    };

    let (dir_name, base_name) = match path.rfind(SEPARATOR) {
        Some(index) => (&path[..index], &path[index + 1..]),
        None => ("", path),
    };
    debug!(
        "Split '{}' into directory '{}' and base name '{}'",
        path, dir_name, base_name
    );

    for token in dir_name.split(SEPARATOR).filter(|token| !token.is_empty()) {
        current = tree
            .find_child(current, token)
            .ok_or_else(|| ResolveError::DirectoryNotFound {
                token: token.to_string(),
            })?;
        debug!("Resolved '{}' to node {}", token, current);
    }

    Ok(SplitPath {
        parent: current,
        base_name: base_name.to_string(),
        dir_name: dir_name.to_string(),
    })
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum ResolveError {
    #[snafu(display("Path is {} bytes long, the limit is {}", length, MAX_PATH_LEN))]
    PathTooLong { length: usize },
    #[snafu(display("Directory '{}' does not exist", token))]
    DirectoryNotFound { token: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::node::NodeName;
    use rstest::*;

    /// Builds `/usr/bin` and `/home` and anchors the current directory at `/usr`
    fn fixture() -> (Tree, Anchors) {
        let mut tree = Tree::new();
        let root = tree.root();
        let usr = tree.append_directory(root, NodeName::new("usr")).unwrap();
        tree.append_directory(usr, NodeName::new("bin")).unwrap();
        tree.append_directory(root, NodeName::new("home")).unwrap();
        let anchors = Anchors { root, cwd: usr };
        (tree, anchors)
    }

    #[rstest]
    #[case("/usr/bin/ls", "/usr/bin", "ls", "/usr/bin")]
    #[case("/usr/local", "/usr", "local", "/usr")]
    #[case("/new", "", "new", "/")]
    #[case("/", "", "", "/")]
    #[case("//usr//bin", "//usr/", "bin", "/usr")]
    #[case("bin/x", "bin", "x", "/usr/bin")]
    #[case("x", "", "x", "/usr")]
    #[case("", "", "", "/usr")]
    #[case("bin/", "bin", "", "/usr/bin")]
    fn test_split_path(
        #[case] path: &str,
        #[case] dir_name: &str,
        #[case] base_name: &str,
        #[case] parent_path: &str,
    ) {
        let (tree, anchors) = fixture();
        let split = split_path(&tree, &anchors, path).unwrap();

        assert_eq!(split.dir_name, dir_name);
        assert_eq!(split.base_name, base_name);
        assert_eq!(tree.path_of(split.parent), parent_path);
    }

    #[rstest]
    #[case("/missing/x", "missing")]
    #[case("/usr/missing/deeper/x", "missing")]
    #[case("home/x", "home")]
    fn test_split_path_reports_missing_token(#[case] path: &str, #[case] token: &str) {
        let (tree, anchors) = fixture();
        let result = split_path(&tree, &anchors, path);

        assert_eq!(
            result,
            Err(ResolveError::DirectoryNotFound {
                token: token.to_string()
            })
        );
    }

    #[test]
    fn test_split_path_rejects_long_path() {
        let (tree, anchors) = fixture();
        let path = format!("/{}", "a".repeat(MAX_PATH_LEN));

        let result = split_path(&tree, &anchors, &path);

        assert_eq!(
            result,
            Err(ResolveError::PathTooLong {
                length: MAX_PATH_LEN + 1
            })
        );
    }

    #[test]
    fn test_split_path_accepts_path_at_limit() {
        let (tree, anchors) = fixture();
        let path = format!("/{}", "a".repeat(MAX_PATH_LEN - 1));

        let split = split_path(&tree, &anchors, &path).unwrap();

        assert_eq!(split.parent, anchors.root);
    }

    #[test]
    fn test_split_path_does_not_traverse_files() {
        let (mut tree, anchors) = fixture();
        tree.append_file(anchors.root, "etc");

        let result = split_path(&tree, &anchors, "/etc/passwd");

        assert!(matches!(
            result,
            Err(ResolveError::DirectoryNotFound { token }) if token == "etc"
        ));
    }

    #[test]
    fn test_error_display() {
        let error = ResolveError::DirectoryNotFound {
            token: "x".to_string(),
        };
        assert_eq!(error.to_string(), "Directory 'x' does not exist");
    }
}
