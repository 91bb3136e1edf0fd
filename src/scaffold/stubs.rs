use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FolderForgeError, Result};

/// What happened to a requested stub file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubOutcome {
    Created(PathBuf),
    /// The stub was already there and was left alone.
    Exists(PathBuf),
}

/// Parse a comma-separated list of folder numbers.
///
/// Tokens that are not plain non-negative integers are dropped without
/// complaint. Range checking is left to the caller.
pub fn parse_selection(input: &str) -> Vec<usize> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let parsed = token
                .chars()
                .all(|c| c.is_ascii_digit())
                .then(|| token.parse::<usize>().ok())
                .flatten();
            if parsed.is_none() {
                tracing::debug!(token, "Dropping invalid folder number");
            }
            parsed
        })
        .collect()
}

/// `<folder>/<folder name>.md`
pub fn stub_path(folder: &Path) -> PathBuf {
    let name = folder
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    folder.join(format!("{}.md", name))
}

/// Write a markdown stub holding a single `# <folder name>` heading.
pub fn write_stub(folder: &Path) -> Result<StubOutcome> {
    let path = stub_path(folder);
    if path.exists() {
        tracing::debug!(path = %path.display(), "Stub already exists");
        return Ok(StubOutcome::Exists(path));
    }

    let name = folder
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    fs::write(&path, format!("# {}\n", name)).map_err(|e| FolderForgeError::io(&path, e))?;
    tracing::debug!(path = %path.display(), "Created stub");

    Ok(StubOutcome::Created(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_selection_basic() {
        assert_eq!(parse_selection("1,2,3"), vec![1, 2, 3]);
        assert_eq!(parse_selection(" 4 , 2 "), vec![4, 2]);
    }

    #[test]
    fn test_parse_selection_drops_invalid() {
        assert_eq!(parse_selection("1, x, 3,,-2, 99"), vec![1, 3, 99]);
        assert_eq!(parse_selection("+5, 2.0, 7"), vec![7]);
    }

    #[test]
    fn test_parse_selection_empty() {
        assert!(parse_selection("").is_empty());
        assert!(parse_selection(" , ,").is_empty());
    }

    #[test]
    fn test_parse_selection_overflow_dropped() {
        assert_eq!(parse_selection("99999999999999999999999999, 1"), vec![1]);
    }

    #[test]
    fn test_stub_path() {
        assert_eq!(
            stub_path(Path::new("/proj/docs")),
            PathBuf::from("/proj/docs/docs.md")
        );
    }

    #[test]
    fn test_write_stub() {
        let tmp = TempDir::new().unwrap();
        let folder = tmp.path().join("api");
        fs::create_dir(&folder).unwrap();

        let outcome = write_stub(&folder).unwrap();
        assert_eq!(outcome, StubOutcome::Created(folder.join("api.md")));
        assert_eq!(fs::read_to_string(folder.join("api.md")).unwrap(), "# api\n");
    }

    #[test]
    fn test_write_stub_keeps_existing() {
        let tmp = TempDir::new().unwrap();
        let folder = tmp.path().join("api");
        fs::create_dir(&folder).unwrap();
        fs::write(folder.join("api.md"), "hand written").unwrap();

        let outcome = write_stub(&folder).unwrap();
        assert_eq!(outcome, StubOutcome::Exists(folder.join("api.md")));
        assert_eq!(
            fs::read_to_string(folder.join("api.md")).unwrap(),
            "hand written"
        );
    }

    #[test]
    fn test_write_stub_missing_folder_fails() {
        let tmp = TempDir::new().unwrap();
        assert!(write_stub(&tmp.path().join("gone")).is_err());
    }
}
