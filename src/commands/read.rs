//! Read mode: diagram an existing directory.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::config::Config;
use crate::console::Console;
use crate::error::Result;
use crate::tree::{
    build_tree, render, root_label, write_diagram, BuildOptions, DiagramStyle, WriterSink,
};

/// Answers collected before walking the directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadChoices {
    pub show_files: bool,
    pub ignore_usual: bool,
    pub show_ignored: bool,
}

impl ReadChoices {
    /// Builder options for these answers. The ignore list only applies when
    /// the user asked for it.
    pub fn build_options(&self, config: &Config) -> BuildOptions {
        let ignored: Vec<String> = if self.ignore_usual {
            config.read.ignored_folders.clone()
        } else {
            Vec::new()
        };

        BuildOptions::new()
            .with_files(self.show_files)
            .with_ignored(ignored)
            .with_placeholders(self.ignore_usual && self.show_ignored)
            .with_follow_symlinks(config.read.follow_symlinks)
    }
}

/// Run the read flow against `root`.
pub fn run<R: BufRead, W: Write>(
    root: &Path,
    config: &Config,
    console: &mut Console<R, W>,
) -> Result<()> {
    let choices = prompt_choices(config, console)?;
    tracing::debug!(?choices, "Read mode choices");

    let tree = build_tree(root, &choices.build_options(config))?;

    console.say(root_label(root))?;

    let tree_file = &config.output.tree_file;
    let save = console.confirm(&format!("Do you want to save this diagram as {}?", tree_file))?;

    if save {
        write_diagram(
            root,
            tree_file,
            &tree,
            DiagramStyle::Plain,
            &mut [&mut WriterSink(console.output())],
        )?;
        console.success(&format!(
            "Diagram saved as {} in {}",
            tree_file,
            root.display()
        ))?;
    } else {
        render(&tree, &mut [&mut WriterSink(console.output())])?;
    }

    Ok(())
}

fn prompt_choices<R: BufRead, W: Write>(
    config: &Config,
    console: &mut Console<R, W>,
) -> Result<ReadChoices> {
    let show_files = console.confirm("Show files in the diagram?")?;

    let ignore_usual = console.confirm(&format!(
        "Would you like to ignore usually ignored folders ({})?",
        ignore_preview(&config.read.ignored_folders)
    ))?;

    let show_ignored = ignore_usual
        && console
            .confirm("Do you want to show the ignored folders in the diagram (without their contents)?")?;

    Ok(ReadChoices {
        show_files,
        ignore_usual,
        show_ignored,
    })
}

/// First few ignored names, e.g. `node_modules/, __pycache__/, .git/, etc.`
fn ignore_preview(names: &[String]) -> String {
    const SHOWN: usize = 3;

    let mut preview: Vec<String> = names.iter().take(SHOWN).map(|n| format!("{}/", n)).collect();
    if names.len() > SHOWN {
        preview.push("etc.".to_string());
    }
    if preview.is_empty() {
        "none configured".to_string()
    } else {
        preview.join(", ")
    }
}
