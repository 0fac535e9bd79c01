use super::lexicon::Lexicon;
use crate::error::{CoreError, Result};
use std::collections::HashMap;
use std::sync::OnceLock;

static LEXICONS: OnceLock<std::result::Result<HashMap<String, Lexicon>, CoreError>> =
    OnceLock::new();

macro_rules! embed_lexicon {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

fn load_embedded_lexicons() -> Result<HashMap<String, Lexicon>> {
    let mut lexicons = HashMap::new();

    let embedded = [embed_lexicon!("de", "../../configs/lexicon/german.toml")];

    for (code, toml_content) in embedded {
        let lexicon = Lexicon::from_toml_str(code, toml_content)?;

        if lexicon.code() != code {
            return Err(CoreError::InvalidLexicon(format!(
                "Lexicon code mismatch: expected {}, got {}",
                code,
                lexicon.code()
            )));
        }

        lexicons.insert(code.to_string(), lexicon);
    }

    Ok(lexicons)
}

fn embedded() -> Result<&'static HashMap<String, Lexicon>> {
    LEXICONS
        .get_or_init(load_embedded_lexicons)
        .as_ref()
        .map_err(Clone::clone)
}

/// Get an embedded lexicon by language code
pub fn get_lexicon(code: &str) -> Result<&'static Lexicon> {
    embedded()?
        .get(code)
        .ok_or_else(|| CoreError::UnsupportedLexicon(code.to_string()))
}

/// Codes of all embedded lexicons, sorted
pub fn list_available_lexicons() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = embedded()
        .map(|lexicons| lexicons.keys().map(String::as_str).collect())
        .unwrap_or_default();
    codes.sort_unstable();
    codes
}
