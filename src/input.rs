//! Input acquisition: stdin, a single file, or several files joined as one stream

use crate::error::{AppError, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where the benchmark stream comes from
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// One or more files, joined in order
    Files(Vec<PathBuf>),
}

impl InputSource {
    /// Pick the source for a list of paths; no paths means stdin
    pub fn from_paths(paths: &[PathBuf]) -> Self {
        if paths.is_empty() {
            Self::Stdin
        } else {
            Self::Files(paths.to_vec())
        }
    }

    /// Short description for logs
    pub fn describe(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::Files(paths) => paths.iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Read the full stream into memory
    pub fn read_to_string(&self) -> Result<String> {
        match self {
            Self::Stdin => read_from(std::io::stdin().lock(), "<stdin>"),
            Self::Files(paths) => concat_files(paths),
        }
    }
}

/// Read everything from a reader
pub fn read_from<R: Read>(mut reader: R, label: &str) -> Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)
        .map_err(|e| AppError::io(format!("{}: {}", label, e)))?;
    Ok(text)
}

/// Read a single file
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| AppError::io(format!("{}: {}", path.display(), e)))
}

/// Join the raw contents of every file in order.
///
/// No separator is inserted: a file without a trailing newline runs
/// straight into the next one, exactly as if the files had been `cat`ed.
pub fn concat_files(paths: &[PathBuf]) -> Result<String> {
    let mut combined = String::new();
    for path in paths {
        combined.push_str(&read_file(path)?);
    }
    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_source_selection() {
        assert_eq!(InputSource::from_paths(&[]), InputSource::Stdin);
        let paths = vec![PathBuf::from("a.yaml"), PathBuf::from("b.yaml")];
        assert_eq!(InputSource::from_paths(&paths), InputSource::Files(paths.clone()));
        assert_eq!(InputSource::from_paths(&paths).describe(), "a.yaml, b.yaml");
    }

    #[test]
    fn test_read_from_reader() {
        let text = read_from("a: 1\n".as_bytes(), "test").unwrap();
        assert_eq!(text, "a: 1\n");
    }

    #[test]
    fn test_concat_preserves_order_without_separator() {
        let first = temp_with("---\na: 1");
        let second = temp_with("\n---\nb: 2\n");
        let combined = concat_files(&[first.path().to_path_buf(), second.path().to_path_buf()]).unwrap();
        assert_eq!(combined, "---\na: 1\n---\nb: 2\n");
    }

    #[test]
    fn test_missing_file_names_path() {
        let error = read_file(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert_eq!(error.category(), "IO");
        assert!(error.to_string().contains("/definitely/not/here.yaml"));
    }

    #[test]
    fn test_single_file_source() {
        let file = temp_with("x: [1, 2]\n");
        let source = InputSource::from_paths(&[file.path().to_path_buf()]);
        assert_eq!(source.read_to_string().unwrap(), "x: [1, 2]\n");
    }
}
