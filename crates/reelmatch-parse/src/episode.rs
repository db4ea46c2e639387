use regex::Regex;
use std::sync::LazyLock;

/// Result of a successful season/episode extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeMarker {
    /// Parsed season number.
    pub season: u32,
    /// Parsed episode number.
    pub episode: u32,
}

// ── Regex patterns (compiled once) ──────────────────────────────

/// Inline marker: "S01E02", "s1.e2", "S01xE02", "s01 e02".
static RE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)s(?P<season>\d+)[-_x. ]?e(?P<episode>\d+)").unwrap());

/// Directory layout: ".../Season 3/Episode 07 - name.mkv" or ".../season3/07.mkv".
/// The episode number must directly follow the season directory, optionally
/// prefixed by an "episode" word. Assumes `/`-normalized separators.
static RE_FOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)/+season[-_. ]*(?P<season>\d+)/+(?:episode[-_. ]*)*(?P<episode>\d+)").unwrap()
});

/// Match an inline "SxxEyy"-style marker anywhere in the bare filename.
pub fn try_marker(file_name: &str) -> Option<EpisodeMarker> {
    let caps = RE_MARKER.captures(file_name)?;
    let season: u32 = caps["season"].parse().ok()?;
    let episode: u32 = caps["episode"].parse().ok()?;
    Some(EpisodeMarker { season, episode })
}

/// Match a season directory plus episode-numbered filename against the full
/// path. The caller must normalize separators to `/` first (see
/// [`crate::path::normalize_separators`]).
pub fn try_folder(normalized_path: &str) -> Option<EpisodeMarker> {
    let caps = RE_FOLDER.captures(normalized_path)?;
    let season: u32 = caps["season"].parse().ok()?;
    let episode: u32 = caps["episode"].parse().ok()?;
    Some(EpisodeMarker { season, episode })
}
