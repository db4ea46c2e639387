use tracing::warn;

use crate::catalog::Catalog;
use crate::error::ReelmatchError;
use crate::models::{Episode, Series};
use crate::provider::TvProvider;

/// A minimal structured key sufficient to resolve one episode's metadata.
///
/// Produced per match attempt and consumed once by [`Locator::resolve`].
/// The two variants identify an episode either by its season/episode
/// coordinates or by its original broadcast date.
#[derive(Debug, Clone)]
pub enum Locator {
    Episode {
        series: Series,
        season: u32,
        episode: u32,
    },
    AirDate {
        series: Series,
        year: i32,
        month: u32,
        day: u32,
    },
}

impl Locator {
    /// Resolve this locator into full episode metadata.
    ///
    /// Read-through with write-back: the catalog is consulted first, the
    /// provider only on a catalog miss, and a provider hit is persisted
    /// before being returned, so resolving an equivalent locator again is
    /// satisfied locally. A total miss is `Ok(None)` with a diagnostic,
    /// never an error; collaborator faults propagate as `Err`.
    pub fn resolve(
        &self,
        catalog: &Catalog,
        provider: &impl TvProvider,
    ) -> Result<Option<Episode>, ReelmatchError> {
        match self {
            Locator::Episode {
                series,
                season,
                episode,
            } => {
                if let Some(found) = catalog.get_episode(series.id, *season, *episode)? {
                    return Ok(Some(found));
                }
                match provider.specific_episode(series, *season, *episode)? {
                    Some(found) => {
                        catalog.add_episode(&found, series)?;
                        Ok(Some(found))
                    }
                    None => {
                        warn!(
                            series = %series.title,
                            season = *season,
                            episode = *episode,
                            "season/episode does not exist for series"
                        );
                        Ok(None)
                    }
                }
            }
            Locator::AirDate {
                series,
                year,
                month,
                day,
            } => {
                if let Some(found) =
                    catalog.get_episode_by_date(series.id, *year, *month, *day)?
                {
                    return Ok(Some(found));
                }
                match provider.specific_episode_by_date(series, *year, *month, *day)? {
                    Some(found) => {
                        catalog.add_episode(&found, series)?;
                        Ok(Some(found))
                    }
                    None => {
                        warn!(
                            series = %series.title,
                            date = %format!("{year:04}-{month:02}-{day:02}"),
                            "no episode of series aired on date"
                        );
                        Ok(None)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use chrono::NaiveDate;

    use super::*;

    fn series() -> Series {
        Series {
            id: 1,
            tvdb_id: Some(73244),
            title: "The Office (US)".into(),
        }
    }

    fn episode() -> Episode {
        Episode {
            series_id: 1,
            season: 2,
            episode: 5,
            title: "Halloween".into(),
            air_date: NaiveDate::from_ymd_opt(2005, 10, 18),
        }
    }

    /// Counts remote calls; answers with the scripted episode, if any.
    struct ScriptedTv {
        episode: Option<Episode>,
        calls: Cell<u32>,
    }

    impl ScriptedTv {
        fn new(episode: Option<Episode>) -> Self {
            Self {
                episode,
                calls: Cell::new(0),
            }
        }
    }

    impl TvProvider for ScriptedTv {
        fn specific_episode(
            &self,
            _series: &Series,
            _season: u32,
            _episode: u32,
        ) -> Result<Option<Episode>, ReelmatchError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.episode.clone())
        }

        fn specific_episode_by_date(
            &self,
            _series: &Series,
            _year: i32,
            _month: u32,
            _day: u32,
        ) -> Result<Option<Episode>, ReelmatchError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.episode.clone())
        }
    }

    #[test]
    fn test_catalog_hit_skips_provider() {
        let catalog = Catalog::open_memory().unwrap();
        catalog.add_episode(&episode(), &series()).unwrap();
        let provider = ScriptedTv::new(None);

        let locator = Locator::Episode {
            series: series(),
            season: 2,
            episode: 5,
        };
        let found = locator.resolve(&catalog, &provider).unwrap().unwrap();
        assert_eq!(found.title, "Halloween");
        assert_eq!(provider.calls.get(), 0);
    }

    #[test]
    fn test_remote_hit_populates_catalog_once() {
        let catalog = Catalog::open_memory().unwrap();
        let provider = ScriptedTv::new(Some(episode()));

        let locator = Locator::Episode {
            series: series(),
            season: 2,
            episode: 5,
        };
        assert!(locator.resolve(&catalog, &provider).unwrap().is_some());
        assert_eq!(provider.calls.get(), 1);

        // Equivalent locator resolves from the catalog alone.
        assert!(locator.resolve(&catalog, &provider).unwrap().is_some());
        assert_eq!(provider.calls.get(), 1);
    }

    #[test]
    fn test_date_locator_populates_catalog_once() {
        let catalog = Catalog::open_memory().unwrap();
        let provider = ScriptedTv::new(Some(episode()));

        let locator = Locator::AirDate {
            series: series(),
            year: 2005,
            month: 10,
            day: 18,
        };
        let found = locator.resolve(&catalog, &provider).unwrap().unwrap();
        assert_eq!((found.season, found.episode), (2, 5));
        assert_eq!(provider.calls.get(), 1);

        assert!(locator.resolve(&catalog, &provider).unwrap().is_some());
        assert_eq!(provider.calls.get(), 1);
    }

    #[test]
    fn test_total_miss_is_none_not_error() {
        let catalog = Catalog::open_memory().unwrap();
        let provider = ScriptedTv::new(None);

        let locator = Locator::Episode {
            series: series(),
            season: 9,
            episode: 99,
        };
        assert!(locator.resolve(&catalog, &provider).unwrap().is_none());
    }

    #[test]
    fn test_provider_fault_propagates() {
        struct Faulty;
        impl TvProvider for Faulty {
            fn specific_episode(
                &self,
                _: &Series,
                _: u32,
                _: u32,
            ) -> Result<Option<Episode>, ReelmatchError> {
                Err(ReelmatchError::Provider("timeout".into()))
            }
            fn specific_episode_by_date(
                &self,
                _: &Series,
                _: i32,
                _: u32,
                _: u32,
            ) -> Result<Option<Episode>, ReelmatchError> {
                Err(ReelmatchError::Provider("timeout".into()))
            }
        }
        let catalog = Catalog::open_memory().unwrap();
        let locator = Locator::Episode {
            series: series(),
            season: 2,
            episode: 5,
        };
        assert!(locator.resolve(&catalog, &Faulty).is_err());
    }
}
