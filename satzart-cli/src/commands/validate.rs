//! Validate command implementation

use anyhow::Result;
use clap::Args;
use satzart_core::Lexicon;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the lexicon file to validate
    #[arg(short = 'l', long, value_name = "FILE", required = true)]
    pub lexicon: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating lexicon: {}", self.lexicon.display());

        match Lexicon::from_file(&self.lexicon) {
            Ok(lexicon) => {
                println!("✓ Lexicon is valid!");
                println!("  Language code: {}", lexicon.code());
                println!("  Language name: {}", lexicon.name());
                Ok(())
            }
            Err(e) => {
                println!("✗ Lexicon is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const VALID: &str = r#"
[metadata]
code = "de-test"
name = "Test German"

[markers]
subordinators = ["weil"]

[coordination]
coordinators = ["und"]
comma_connectors = ["und"]

[infinitive]
particle = "zu"

[punctuation]
commas = [","]

[relations]
conjunct = ["conj"]
subject = ["nsubj"]

[windows]
subordinator_lookahead = 9
purpose_lookahead = 9
"#;

    fn validate(content: &str) -> Result<()> {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        ValidateArgs {
            lexicon: temp_file.path().to_path_buf(),
        }
        .execute()
    }

    #[test]
    fn test_validate_valid_lexicon() {
        assert!(validate(VALID).is_ok());
    }

    #[test]
    fn test_validate_empty_subordinators() {
        let content = VALID.replace(r#"subordinators = ["weil"]"#, "subordinators = []");
        assert!(validate(&content).is_err());
    }

    #[test]
    fn test_validate_malformed_toml() {
        assert!(validate("[metadata\ncode = ").is_err());
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            lexicon: PathBuf::from("/nonexistent/lexicon.toml"),
        };
        assert!(args.execute().is_err());
    }
}
