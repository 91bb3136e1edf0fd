//! Create mode: prompt for nested folders, then diagram them.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::console::Console;
use crate::error::Result;
use crate::scaffold::{create_folder, parse_selection, write_stub, FolderRegistry, StubOutcome};
use crate::tree::{
    build_tree, render, root_label, write_diagram, BuildOptions, DiagramStyle, WriterSink,
};

/// Run the create flow against `root`.
pub fn run<R: BufRead, W: Write>(
    root: &Path,
    config: &Config,
    console: &mut Console<R, W>,
) -> Result<()> {
    let registry = prompt_folders(root, console)?;
    tracing::info!(created = registry.len(), "Finished creating folders");

    let options = BuildOptions::new().with_follow_symlinks(config.read.follow_symlinks);
    let tree = build_tree(root, &options)?;

    console.say("")?;
    console.heading("Project Structure:")?;
    console.say(root_label(root))?;
    render(&tree, &mut [&mut WriterSink(console.output())])?;

    if console.confirm("Do you want to create readme stub files?")? {
        create_stubs(&registry, console)?;
    }

    let tree_file = &config.output.tree_file;
    if console.confirm(&format!("Do you want to save the folder tree as {}?", tree_file))? {
        write_diagram(
            root,
            tree_file,
            &tree,
            DiagramStyle::Fenced,
            &mut [&mut WriterSink(console.output())],
        )?;
        console.success(&format!(
            "Diagram saved as {} in {}",
            tree_file,
            root.display()
        ))?;
    }

    console.say("")?;
    console.success("All done!")
}

/// Ask for subfolder names until the user stops, creating each one.
///
/// Answering yes to "has a subfolder" descends into the new folder; an empty
/// name returns to the parent. Pending folders live on an explicit stack so
/// nesting depth is bounded by memory, not by the call stack.
pub fn prompt_folders<R: BufRead, W: Write>(
    root: &Path,
    console: &mut Console<R, W>,
) -> Result<FolderRegistry> {
    let mut registry = FolderRegistry::new();
    let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];

    while let Some(current) = pending.last().cloned() {
        console.say("")?;
        console.say(format!("Current path: {}", current.display()))?;

        let name = console.ask("Enter subfolder name (or empty to stop)")?;
        if name.is_empty() {
            pending.pop();
            continue;
        }

        let folder = current.join(&name);
        create_folder(&folder)?;
        let index = registry.register(folder.clone());
        console.say(format!("Created: {} [{}]", folder.display(), index))?;

        if console.confirm(&format!("Does '{}' have a subfolder?", name))? {
            pending.push(folder);
        }
    }

    Ok(registry)
}

/// List the created folders and write stubs for the ones the user picks.
///
/// Numbers that are not valid or not listed are skipped silently. The
/// selection is asked for even when the list is empty.
pub fn create_stubs<R: BufRead, W: Write>(
    registry: &FolderRegistry,
    console: &mut Console<R, W>,
) -> Result<()> {
    console.say("")?;
    console.say("Folders available for stub creation:")?;
    for folder in registry.iter() {
        console.say(format!("[{}] {}", folder.index, folder.path.display()))?;
    }

    let answer = console.ask("Enter folder numbers to create stubs for (comma-separated)")?;

    for index in parse_selection(&answer) {
        let Some(folder) = registry.get(index) else {
            tracing::debug!(index, "No folder with this number");
            continue;
        };

        if let StubOutcome::Created(path) = write_stub(folder)? {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            console.say(format!("Created {} in: {}", file_name, folder.display()))?;
        }
    }

    Ok(())
}
