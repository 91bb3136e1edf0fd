use std::io::{self, Write};

use super::node::Tree;

/// Connector for every entry except the last at its level.
pub const BRANCH: &str = "├── ";
/// Connector for the last entry at its level.
pub const CORNER: &str = "└── ";
/// Prefix continuation below a non-last entry.
pub const PIPE: &str = "│   ";
/// Prefix continuation below the last entry.
pub const SPACE: &str = "    ";

/// Destination for rendered diagram lines.
pub trait LineSink {
    fn emit(&mut self, line: &str) -> io::Result<()>;
}

impl LineSink for Vec<String> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Adapts any writer (stdout, a file) into a sink, one line per `emit`.
pub struct WriterSink<W: Write>(pub W);

impl<W: Write> WriterSink<W> {
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.0, "{}", line)
    }
}

/// Render `tree` depth-first, sending each line to every sink in order.
pub fn render(tree: &Tree, sinks: &mut [&mut dyn LineSink]) -> io::Result<()> {
    render_level(tree, "", sinks)
}

/// Render `tree` into a vector of lines.
pub fn render_lines(tree: &Tree) -> Vec<String> {
    let mut lines = Vec::new();
    // Vec sinks never fail
    let _ = render(tree, &mut [&mut lines]);
    lines
}

fn render_level(tree: &Tree, prefix: &str, sinks: &mut [&mut dyn LineSink]) -> io::Result<()> {
    let total = tree.len();

    for (i, (name, node)) in tree.iter().enumerate() {
        let is_last = i + 1 == total;
        let connector = if is_last { CORNER } else { BRANCH };

        let line = if node.is_dir_like() {
            format!("{}{}{}/", prefix, connector, name)
        } else {
            format!("{}{}{}", prefix, connector, name)
        };

        for sink in sinks.iter_mut() {
            sink.emit(&line)?;
        }

        if let Some(children) = node.children() {
            let extension = if is_last { SPACE } else { PIPE };
            render_level(children, &format!("{}{}", prefix, extension), sinks)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeNode;

    fn dir(entries: Vec<(&str, TreeNode)>) -> TreeNode {
        TreeNode::Directory(
            entries
                .into_iter()
                .map(|(name, node)| (name.to_string(), node))
                .collect(),
        )
    }

    fn tree(entries: Vec<(&str, TreeNode)>) -> Tree {
        match dir(entries) {
            TreeNode::Directory(children) => children,
            _ => unreachable!(),
        }
    }

    fn create_test_tree() -> Tree {
        tree(vec![
            (
                "src",
                dir(vec![
                    ("bin", dir(vec![("tool.rs", TreeNode::File)])),
                    ("lib.rs", TreeNode::File),
                ]),
            ),
            ("node_modules", TreeNode::Placeholder),
            ("Cargo.toml", TreeNode::File),
            ("docs", dir(vec![])),
        ])
    }

    #[test]
    fn test_render_basic() {
        let t = tree(vec![
            ("a", dir(vec![("x.txt", TreeNode::File)])),
            ("b", dir(vec![])),
        ]);

        assert_eq!(render_lines(&t), vec!["├── a/", "│   └── x.txt", "└── b/"]);
    }

    #[test]
    fn test_render_nested_prefixes() {
        let lines = render_lines(&create_test_tree());
        assert_eq!(
            lines,
            vec![
                "├── Cargo.toml",
                "├── docs/",
                "├── node_modules/",
                "└── src/",
                "    ├── bin/",
                "    │   └── tool.rs",
                "    └── lib.rs",
            ]
        );
    }

    #[test]
    fn test_render_empty_tree() {
        assert!(render_lines(&Tree::new()).is_empty());
    }

    #[test]
    fn test_render_is_deterministic() {
        let t = create_test_tree();
        assert_eq!(render_lines(&t), render_lines(&t));
    }

    #[test]
    fn test_trailing_slash_only_for_dirs() {
        for line in render_lines(&create_test_tree()) {
            let name = line.rsplit("── ").next().unwrap();
            let is_dir = matches!(name, "docs/" | "node_modules/" | "src/" | "bin/");
            assert_eq!(name.ends_with('/'), is_dir, "line: {}", line);
        }
    }

    #[test]
    fn test_one_corner_per_level() {
        let t = tree(vec![
            ("a", TreeNode::File),
            ("b", TreeNode::File),
            ("c", TreeNode::File),
        ]);
        let lines = render_lines(&t);

        let corners: Vec<_> = lines.iter().filter(|l| l.starts_with(CORNER)).collect();
        assert_eq!(corners, vec!["└── c"]);
        assert_eq!(lines.iter().filter(|l| l.starts_with(BRANCH)).count(), 2);
    }

    #[test]
    fn test_placeholder_is_not_expanded() {
        let t = tree(vec![("node_modules", TreeNode::Placeholder)]);
        assert_eq!(render_lines(&t), vec!["└── node_modules/"]);
    }

    #[test]
    fn test_render_to_multiple_sinks() {
        let t = create_test_tree();
        let mut collected: Vec<String> = Vec::new();
        let mut written = WriterSink(Vec::<u8>::new());

        render(&t, &mut [&mut collected, &mut written]).unwrap();

        let text = String::from_utf8(written.into_inner()).unwrap();
        assert_eq!(text, format!("{}\n", collected.join("\n")));
        assert_eq!(collected, render_lines(&t));
    }

    struct FailingSink;

    impl LineSink for FailingSink {
        fn emit(&mut self, _line: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_failing_sink_surfaces_error() {
        let t = create_test_tree();
        let mut collected: Vec<String> = Vec::new();
        let result = render(&t, &mut [&mut collected, &mut FailingSink]);

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(collected.len(), 1);
    }
}
