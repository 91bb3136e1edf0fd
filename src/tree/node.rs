use std::collections::BTreeMap;

/// Children of a directory, keyed by entry name.
///
/// `BTreeMap` keeps siblings in byte order of their names, which for UTF-8
/// strings is codepoint order, no matter how the filesystem listed them.
pub type Tree = BTreeMap<String, TreeNode>;

/// A single entry in a directory diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// Regular file (or anything that is not a directory). Never has children.
    File,
    /// Directory with its (possibly empty) children.
    Directory(Tree),
    /// Ignored directory shown by name only; its contents are never read.
    Placeholder,
}

impl TreeNode {
    /// Directories and placeholders render with a trailing `/`.
    pub fn is_dir_like(&self) -> bool {
        !matches!(self, TreeNode::File)
    }

    /// Children to descend into, if any.
    pub fn children(&self) -> Option<&Tree> {
        match self {
            TreeNode::Directory(children) => Some(children),
            TreeNode::File | TreeNode::Placeholder => None,
        }
    }
}
