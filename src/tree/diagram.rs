use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{FolderForgeError, Result};

use super::node::Tree;
use super::render::{render, LineSink, WriterSink};

/// Layout of a saved diagram file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramStyle {
    /// Connector lines only.
    Plain,
    /// Root header and connector lines inside a ```` ```text ```` block.
    Fenced,
}

/// Header line naming the diagrammed root, e.g. `project/`.
pub fn root_label(root: &Path) -> String {
    let resolved = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    match resolved.file_name() {
        Some(name) => format!("{}/", name.to_string_lossy()),
        None => resolved.display().to_string(),
    }
}

/// Write the diagram of `tree` to `root/file_name`.
///
/// Tree lines are rendered once and also sent to `mirrors` (typically the
/// terminal). Header and fences only go to the file. Returns the file path.
pub fn write_diagram(
    root: &Path,
    file_name: &str,
    tree: &Tree,
    style: DiagramStyle,
    mirrors: &mut [&mut dyn LineSink],
) -> Result<PathBuf> {
    let path = root.join(file_name);
    let file = File::create(&path).map_err(|e| FolderForgeError::io(&path, e))?;
    let mut sink = WriterSink(BufWriter::new(file));

    let io_err = |e| FolderForgeError::io(&path, e);

    if style == DiagramStyle::Fenced {
        sink.emit("```text").map_err(io_err)?;
        sink.emit(&root_label(root)).map_err(io_err)?;
    }

    {
        let mut sinks: Vec<&mut dyn LineSink> = Vec::with_capacity(mirrors.len() + 1);
        sinks.push(&mut sink);
        for mirror in mirrors.iter_mut() {
            sinks.push(&mut **mirror);
        }
        render(tree, &mut sinks).map_err(io_err)?;
    }

    if style == DiagramStyle::Fenced {
        sink.emit("```").map_err(io_err)?;
    }

    sink.into_inner().flush().map_err(io_err)?;

    tracing::info!(path = %path.display(), ?style, "Saved tree diagram");
    Ok(path)
}
