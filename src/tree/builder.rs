use std::fs::{self, Metadata};
use std::io;
use std::os::unix::fs::MetadataExt;
use std::path::Path;

use crate::error::{FolderForgeError, Result};

use super::node::{Tree, TreeNode};
use super::options::BuildOptions;

/// Walk `root` and build the nested tree of its contents.
///
/// The root itself is not part of the result; the returned map holds its
/// children. Ignored names are matched before an entry is followed or opened,
/// so they are either dropped or kept as [`TreeNode::Placeholder`] without
/// touching the filesystem. A directory that cannot be listed aborts the
/// build, as does a followed symlink that leads back to one of its ancestors.
/// A broken symlink is listed as a file.
pub fn build_tree(root: &Path, options: &BuildOptions) -> Result<Tree> {
    let metadata = fs::metadata(root).map_err(|e| FolderForgeError::io(root, e))?;
    if !metadata.is_dir() {
        return Err(FolderForgeError::NotADirectory(root.to_path_buf()));
    }

    let mut ancestors = vec![identity(&metadata)];
    let tree = build_dir(root, options, &mut ancestors)?;

    tracing::debug!(root = %root.display(), entries = tree.len(), "Built tree");
    Ok(tree)
}

/// Device and inode of a directory, used to spot followed links that loop.
fn identity(metadata: &Metadata) -> (u64, u64) {
    (metadata.dev(), metadata.ino())
}

fn build_dir(
    path: &Path,
    options: &BuildOptions,
    ancestors: &mut Vec<(u64, u64)>,
) -> Result<Tree> {
    let read_dir = fs::read_dir(path).map_err(|e| FolderForgeError::io(path, e))?;

    let mut entries = read_dir
        .collect::<io::Result<Vec<_>>>()
        .map_err(|e| FolderForgeError::io(path, e))?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut tree = Tree::new();
    for entry in entries {
        let name = entry.file_name().to_string_lossy().into_owned();
        let child_path = entry.path();

        if options.is_ignored(&name) {
            if options.show_ignored_as_placeholder {
                tracing::trace!(path = %child_path.display(), "Ignored entry kept as placeholder");
                tree.insert(name, TreeNode::Placeholder);
            } else {
                tracing::trace!(path = %child_path.display(), "Ignored entry dropped");
            }
            continue;
        }

        match directory_metadata(&child_path, options)? {
            Some(metadata) => {
                let id = identity(&metadata);
                if ancestors.contains(&id) {
                    return Err(FolderForgeError::SymlinkLoop(child_path));
                }

                ancestors.push(id);
                let children = build_dir(&child_path, options, ancestors)?;
                ancestors.pop();

                tree.insert(name, TreeNode::Directory(children));
            }
            None if options.include_files => {
                tree.insert(name, TreeNode::File);
            }
            None => {}
        }
    }

    Ok(tree)
}

/// Metadata of `path` when it should be descended into, `None` when it is listed as a file.
fn directory_metadata(path: &Path, options: &BuildOptions) -> Result<Option<Metadata>> {
    let link_metadata = fs::symlink_metadata(path).map_err(|e| FolderForgeError::io(path, e))?;

    if !link_metadata.file_type().is_symlink() {
        return Ok(link_metadata.is_dir().then_some(link_metadata));
    }
    if !options.follow_symlinks {
        return Ok(None);
    }

    match fs::metadata(path) {
        Ok(target) => Ok(target.is_dir().then_some(target)),
        Err(e) if is_dangling(&e) => {
            tracing::trace!(path = %path.display(), error = %e, "Dangling symlink listed as file");
            Ok(None)
        }
        Err(e) => Err(FolderForgeError::io(path, e)),
    }
}

/// A link whose target is missing or resolves through itself.
fn is_dangling(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::NotFound || err.raw_os_error() == Some(nix::libc::ELOOP)
}
