mod builder;
mod diagram;
mod node;
mod options;
mod render;

pub use builder::build_tree;
pub use diagram::{root_label, write_diagram, DiagramStyle};
pub use node::{Tree, TreeNode};
pub use options::BuildOptions;
pub use render::{render, render_lines, LineSink, WriterSink, BRANCH, CORNER, PIPE, SPACE};
