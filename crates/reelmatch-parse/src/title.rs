use std::collections::HashSet;

use regex::Regex;
use thiserror::Error;

/// Joins title words: any run of characters that stays inside one path
/// segment. Lets "The Office" match "The.Office" or "The_Office (US)" but
/// never lets a title straddle a directory boundary.
const WORD_SEPARATOR: &str = r"[^\\/]+";

#[derive(Debug, Error)]
pub enum TitleError {
    #[error("series title {0:?} has no words left after filtering")]
    Empty(String),

    #[error("series title pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),
}

/// Compiled filename-matching pattern for one configured series title.
///
/// Built once per series and reused across every path queried against it.
/// Construction applies the configured ignore sets: ignored characters are
/// replaced with spaces, the title is split into lowercased words, ignored
/// words are dropped, and the survivors are joined with [`WORD_SEPARATOR`].
#[derive(Debug, Clone)]
pub struct TitlePattern {
    regex: Regex,
}

impl TitlePattern {
    pub fn build(
        title: &str,
        chars_to_ignore: &HashSet<char>,
        words_to_ignore: &HashSet<String>,
    ) -> Result<Self, TitleError> {
        let spaced: String = title
            .chars()
            .map(|c| if chars_to_ignore.contains(&c) { ' ' } else { c })
            .collect();

        let words: Vec<String> = spaced
            .split(' ')
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty() && !words_to_ignore.contains(w))
            .collect();

        if words.is_empty() {
            return Err(TitleError::Empty(title.to_string()));
        }

        let joined = words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join(WORD_SEPARATOR);

        let regex = Regex::new(&format!("(?i){joined}"))?;
        Ok(Self { regex })
    }

    /// Does this series title plausibly appear in the given path?
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// The underlying pattern source, for diagnostics.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
