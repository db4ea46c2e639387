use reelmatch_parse::{date, episode, path, TitlePattern};

use crate::config::AppConfig;
use crate::error::ReelmatchError;
use crate::locator::Locator;
use crate::models::Series;

/// Per-series matcher holding the compiled title pattern.
///
/// Built once from a series configuration and reused across every file path
/// queried against it; nothing here touches the catalog or the network.
#[derive(Debug, Clone)]
pub struct SeriesMatcher {
    series: Series,
    pattern: TitlePattern,
}

impl SeriesMatcher {
    /// Compile the title pattern from the configured ignore sets.
    pub fn new(series: Series, config: &AppConfig) -> Result<Self, ReelmatchError> {
        let pattern = TitlePattern::build(
            &series.title,
            &config.title_chars_to_ignore(),
            &config.title_words_to_ignore(),
        )?;
        Ok(Self { series, pattern })
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    /// Does the path plausibly belong to this series?
    pub fn matches_series_title(&self, file_path: &str) -> bool {
        self.pattern.is_match(file_path)
    }

    /// Extract an episode locator from the path.
    ///
    /// Strategies in precedence order: inline SxxEyy marker on the bare
    /// filename, season-directory layout on the normalized full path, then
    /// a broadcast date on the bare filename. At most one locator is
    /// produced; an inline marker always beats a date that happens to be
    /// present in the same name.
    pub fn match_episode(&self, file_path: &str) -> Option<Locator> {
        let normalized = path::normalize_separators(file_path);
        let file_name = path::file_name(&normalized);

        if let Some(m) =
            episode::try_marker(file_name).or_else(|| episode::try_folder(&normalized))
        {
            return Some(Locator::Episode {
                series: self.series.clone(),
                season: m.season,
                episode: m.episode,
            });
        }

        date::try_extract(file_name).map(|d| Locator::AirDate {
            series: self.series.clone(),
            year: d.year,
            month: d.month,
            day: d.day,
        })
    }
}
