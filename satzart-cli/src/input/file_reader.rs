//! File and stdin reading

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Source name used for standard input
pub const STDIN_SOURCE: &str = "<stdin>";

/// One document to analyse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// File path or `<stdin>`
    pub source: String,
    /// Document content
    pub text: String,
}

impl Input {
    /// True if the content is empty after trimming
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a file into an [`Input`]
    pub fn read_input(path: &Path) -> Result<Input> {
        Ok(Input {
            source: path.display().to_string(),
            text: Self::read_text(path)?,
        })
    }

    /// Read all of standard input
    pub fn read_stdin() -> Result<Input> {
        Self::read_from(io::stdin().lock(), STDIN_SOURCE)
    }

    /// Read a whole stream as UTF-8 text
    pub fn read_from<R: Read>(mut reader: R, source: &str) -> Result<Input> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .with_context(|| format!("Failed to read {source}"))?;
        Ok(Input {
            source: source.to_string(),
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("satz.conllu");

        let content = "# text = Er schläft.\n";
        fs::write(&file_path, content).unwrap();

        let input = FileReader::read_input(&file_path).unwrap();
        assert_eq!(input.text, content);
        assert!(input.source.ends_with("satz.conllu"));
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let result = FileReader::read_text(Path::new("/nonexistent/file.conllu"));
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_read_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("latin1.txt");
        fs::write(&file_path, b"Sch\xF6n").unwrap();

        let err = FileReader::read_text(&file_path).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_read_from_stream() {
        let input = FileReader::read_from("  \n".as_bytes(), STDIN_SOURCE).unwrap();
        assert_eq!(input.source, "<stdin>");
        assert!(input.is_blank());
    }

    #[cfg(unix)]
    #[test]
    fn test_read_text_permission_denied() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("no_read.conllu");
        fs::write(&file_path, "content").unwrap();

        let mut permissions = fs::metadata(&file_path).unwrap().permissions();
        permissions.set_mode(0o000);
        fs::set_permissions(&file_path, permissions).unwrap();

        let readable = fs::File::open(&file_path).is_ok();
        let result = FileReader::read_text(&file_path);
        // root can still open the file
        assert_eq!(result.is_ok(), readable);

        let mut permissions = fs::metadata(&file_path).unwrap().permissions();
        permissions.set_mode(0o644);
        fs::set_permissions(&file_path, permissions).unwrap();
    }
}
