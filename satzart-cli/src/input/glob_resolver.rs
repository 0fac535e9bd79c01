//! Input file resolution
//!
//! A pattern is a literal file, a directory or a glob. Literal files are taken
//! as given. Directories and glob matches keep only annotated or plain text
//! files, so `korpus/` or `korpus/*` skip models and notes stored alongside.

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::{glob, Pattern};
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions picked up from directories and glob matches
pub const INPUT_EXTENSIONS: &[&str] = &["conllu", "conll", "txt"];

/// True if the file has one of [`INPUT_EXTENSIONS`]
pub fn is_input_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            INPUT_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Resolve file patterns to a sorted, duplicate-free list of input files
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let literal = Path::new(pattern);
        if literal.is_dir() {
            files.extend(directory_inputs(literal)?);
        } else if Pattern::escape(pattern) == *pattern {
            if literal.is_file() {
                files.push(literal.to_path_buf());
            }
        } else {
            files.extend(glob_inputs(pattern)?);
        }
    }

    if files.is_empty() {
        anyhow::bail!(
            "No files found matching the provided patterns (directories and globs match {})",
            INPUT_EXTENSIONS
                .iter()
                .map(|ext| format!("*.{ext}"))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    files.sort();
    files.dedup();

    Ok(files)
}

fn glob_inputs(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.to_string()))?;

    let mut files = Vec::new();
    for path_result in paths {
        let path = path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;
        if path.is_file() && is_input_file(&path) {
            files.push(path);
        } else if path.is_file() {
            log::debug!("skipping {}: not a CoNLL-U or text file", path.display());
        }
    }
    Ok(files)
}

fn directory_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read directory: {}", dir.display()))?
            .path();
        if path.is_file() && is_input_file(&path) {
            files.push(path);
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn pattern(dir: &TempDir, tail: &str) -> String {
        dir.path().join(tail).display().to_string()
    }

    #[test]
    fn test_resolve_sorted_and_deduplicated() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.conllu"), "").unwrap();
        fs::write(dir.path().join("a.conllu"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let files = resolve_patterns(&[
            pattern(&dir, "*.conllu"),
            pattern(&dir, "a.conllu"),
        ])
        .unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.conllu", "b.conllu"]);
    }

    #[test]
    fn test_glob_keeps_input_extensions() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("roman.conllu"), "").unwrap();
        fs::write(dir.path().join("brief.TXT"), "").unwrap();
        fs::write(dir.path().join("de.udpipe"), "").unwrap();

        let files = resolve_patterns(&[pattern(&dir, "*")]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["brief.TXT", "roman.conllu"]);
    }

    #[test]
    fn test_directory_expands_to_inputs() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.conll"), "").unwrap();
        fs::write(dir.path().join("b.conllu"), "").unwrap();
        fs::write(dir.path().join("model.bin"), "").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.conllu"), "").unwrap();

        let files = resolve_patterns(&[dir.path().display().to_string()]).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("a.conll"), dir.path().join("b.conllu")]
        );
    }

    #[test]
    fn test_literal_file_taken_as_given() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("satz.dat");
        fs::write(&path, "").unwrap();

        assert_eq!(
            resolve_patterns(&[path.display().to_string()]).unwrap(),
            vec![path]
        );
    }

    #[test]
    fn test_directories_are_ignored() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub.conllu")).unwrap();
        assert!(resolve_patterns(&[pattern(&dir, "*.conllu")]).is_err());
    }

    #[test]
    fn test_no_match() {
        let err = resolve_patterns(&["/nonexistent/*.conllu".to_string()]).unwrap_err();
        assert!(err.to_string().contains("No files found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }
}
