//! FolderForge - interactive folder scaffolding and tree diagrams
//!
//! This crate provides functionality for:
//! - Building an ordered tree of a directory, with ignored folders hidden or collapsed
//! - Rendering trees with box-drawing connectors to any number of sinks
//! - Interactively creating nested folders, stub files and `TREE.md` diagrams

pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod scaffold;
pub mod signals;
pub mod tree;

// Re-export commonly used types
pub use config::Config;
pub use error::{FolderForgeError, Result};
pub use tree::{build_tree, render, render_lines, BuildOptions, Tree, TreeNode};
