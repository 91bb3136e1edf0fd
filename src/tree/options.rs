use std::collections::HashSet;

/// Configuration options for building a directory tree.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Include files as leaf entries
    pub include_files: bool,

    /// Entry names that are hidden or shown collapsed
    pub ignored_names: HashSet<String>,

    /// Show ignored entries as empty placeholders instead of dropping them
    pub show_ignored_as_placeholder: bool,

    /// Follow symbolic links to directories
    pub follow_symlinks: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            include_files: false,
            ignored_names: HashSet::new(),
            show_ignored_as_placeholder: false,
            follow_symlinks: true,
        }
    }
}

impl BuildOptions {
    /// Create a new BuildOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether files appear in the tree
    pub fn with_files(mut self, include: bool) -> Self {
        self.include_files = include;
        self
    }

    /// Set the ignored entry names
    pub fn with_ignored<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether ignored entries are kept as placeholders
    pub fn with_placeholders(mut self, show: bool) -> Self {
        self.show_ignored_as_placeholder = show;
        self
    }

    /// Set whether to follow symbolic links
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored_names.contains(name)
    }
}
