use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Identity signals harvested from a single movie filename.
///
/// Every field is optional; an empty set is a normal outcome for an
/// uncooperative filename, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieSignals {
    /// Candidate title: everything before a parenthesized year.
    pub name: Option<String>,
    /// Parenthesized four-digit year.
    pub year: Option<i32>,
    /// Disc number from a "disc"/"dvd" marker.
    pub disc: Option<u32>,
    /// External catalog id from square brackets.
    pub catalog_id: Option<u64>,
}

// ── Regex patterns (compiled once) ──────────────────────────────

/// "Some Movie (1999)...": the text before the year is the candidate title.
static RE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<name>.+)\(\d{4}\)").unwrap());

/// A parenthesized four-digit year anywhere in the name. The greedy prefix
/// keeps the last occurrence, matching the title capture above.
static RE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".*\((?P<year>\d{4})\)").unwrap());

/// "Disc 2", "dvd_1", "disc.3". Physical media layout, not identity.
static RE_DISC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:disc|dvd)[-_. ]*(?P<disc>\d+)").unwrap());

/// "[0120338]": a bracketed external catalog id.
static RE_CATALOG_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(?P<id>\d+)\]").unwrap());

impl MovieSignals {
    /// Run every extraction against a bare filename.
    pub fn scan(file_name: &str) -> Self {
        Self {
            name: movie_name(file_name),
            year: movie_year(file_name),
            disc: disc_number(file_name),
            catalog_id: catalog_id(file_name),
        }
    }
}

/// Candidate title text preceding a parenthesized year, untrimmed.
pub fn movie_name(file_name: &str) -> Option<String> {
    let caps = RE_NAME.captures(file_name)?;
    Some(caps["name"].to_string())
}

/// Parenthesized four-digit year.
pub fn movie_year(file_name: &str) -> Option<i32> {
    let caps = RE_YEAR.captures(file_name)?;
    caps["year"].parse().ok()
}

/// Disc number following a "disc" or "dvd" word.
pub fn disc_number(file_name: &str) -> Option<u32> {
    let caps = RE_DISC.captures(file_name)?;
    caps["disc"].parse().ok()
}

/// Number enclosed in square brackets.
pub fn catalog_id(file_name: &str) -> Option<u64> {
    let caps = RE_CATALOG_ID.captures(file_name)?;
    caps["id"].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_year() {
        assert_eq!(
            movie_name("The Thin Man (1934).mkv").as_deref(),
            Some("The Thin Man ")
        );
        assert_eq!(movie_year("The Thin Man (1934).mkv"), Some(1934));
    }

    #[test]
    fn test_name_requires_year() {
        assert_eq!(movie_name("The Thin Man.mkv"), None);
        assert_eq!(movie_year("The Thin Man.mkv"), None);
        // Non-year parenthetical is not enough.
        assert_eq!(movie_name("The Thin Man (remux).mkv"), None);
    }

    #[test]
    fn test_disc_variants() {
        assert_eq!(disc_number("Movie.Disc.2.mkv"), Some(2));
        assert_eq!(disc_number("movie dvd_1.iso"), Some(1));
        assert_eq!(disc_number("Movie (1999) DISC 3.mkv"), Some(3));
        assert_eq!(disc_number("Movie (1999).mkv"), None);
    }

    #[test]
    fn test_disc_is_independent_of_other_signals() {
        let signals = MovieSignals::scan("Unknown Thing disc 2.avi");
        assert_eq!(signals.disc, Some(2));
        assert_eq!(signals.name, None);
        assert_eq!(signals.year, None);
        assert_eq!(signals.catalog_id, None);
    }

    #[test]
    fn test_catalog_id() {
        assert_eq!(catalog_id("Se7en (1995) [0114369].mkv"), Some(114369));
        assert_eq!(catalog_id("Se7en (1995).mkv"), None);
    }
}
