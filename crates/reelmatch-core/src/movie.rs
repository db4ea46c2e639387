use tracing::debug;

use reelmatch_parse::path;
use reelmatch_parse::MovieSignals;

use crate::catalog::Catalog;
use crate::error::ReelmatchError;
use crate::models::MovieMatch;
use crate::provider::MovieProvider;

/// Identify the movie a file path refers to.
///
/// Strategies run in strict order, stopping at the first success:
/// a bracketed catalog id looked up locally, then a harvested
/// name-plus-year remote lookup, then the raw extension-stripped base name
/// handed to the provider as a last resort. `Ok(None)` is the expected
/// outcome for a path no strategy can place; faults from the catalog or
/// provider propagate as `Err`.
pub fn match_movie(
    file_path: &str,
    catalog: &Catalog,
    provider: &impl MovieProvider,
) -> Result<Option<MovieMatch>, ReelmatchError> {
    let file_name = path::file_name(file_path).to_string();
    let signals = MovieSignals::scan(&file_name);

    // Disc info reflects physical media layout, not identity; it is carried
    // through no matter which strategy ends up matching.
    let disc = signals.disc;

    // Strategy 1: a bracketed catalog id, the fastest of matches.
    if let Some(id) = signals.catalog_id {
        if let Some(movie) = catalog.get_movie(id)? {
            catalog.add_movie(&movie)?;
            debug!(id, title = %movie.title, "matched movie by catalog id");
            return Ok(Some(MovieMatch {
                file_name,
                movie,
                disc,
            }));
        }
    }

    // Strategy 2: harvested name (and year, when present) as a remote query.
    if let Some(name) = &signals.name {
        let mut query = name.trim().to_string();
        if let Some(year) = signals.year {
            query.push_str(&format!(" ({year})"));
        }
        if let Some(movie) = provider.lookup_movie(&query)? {
            catalog.add_movie(&movie)?;
            debug!(query = %query, title = %movie.title, "matched movie by name lookup");
            return Ok(Some(MovieMatch {
                file_name,
                movie,
                disc,
            }));
        }
    }

    // Strategy 3: last resort. Hand the provider the base name with the
    // extension stripped and let it puzzle the title out itself. An
    // extension-only name like ".mkv" leaves an empty stem, and an empty
    // query is never sent.
    let stem = path::file_stem(&file_name);
    if !stem.is_empty() {
        if let Some(movie) = provider.lookup_movie(stem)? {
            catalog.add_movie(&movie)?;
            debug!(query = stem, title = %movie.title, "matched movie from raw base name");
            return Ok(Some(MovieMatch {
                file_name,
                movie,
                disc,
            }));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::models::Movie;

    /// Records every query; answers the ones present in the script.
    struct ScriptedMovies {
        queries: RefCell<Vec<String>>,
        script: Vec<(String, Movie)>,
    }

    impl ScriptedMovies {
        fn new(script: Vec<(&str, Movie)>) -> Self {
            Self {
                queries: RefCell::new(Vec::new()),
                script: script
                    .into_iter()
                    .map(|(q, m)| (q.to_string(), m))
                    .collect(),
            }
        }

        fn queries(&self) -> Vec<String> {
            self.queries.borrow().clone()
        }
    }

    impl MovieProvider for ScriptedMovies {
        fn lookup_movie(&self, query: &str) -> Result<Option<Movie>, ReelmatchError> {
            self.queries.borrow_mut().push(query.to_string());
            Ok(self
                .script
                .iter()
                .find(|(q, _)| q == query)
                .map(|(_, m)| m.clone()))
        }
    }

    fn se7en() -> Movie {
        Movie {
            imdb_id: 114369,
            title: "Se7en".into(),
            year: Some(1995),
        }
    }

    #[test]
    fn test_catalog_id_wins_over_name_heuristics() {
        let catalog = Catalog::open_memory().unwrap();
        catalog.add_movie(&se7en()).unwrap();
        let provider = ScriptedMovies::new(vec![]);

        let m = match_movie("movies/Se7en (1995) [0114369].mkv", &catalog, &provider)
            .unwrap()
            .unwrap();
        assert_eq!(m.movie.imdb_id, 114369);
        // The year was right there, but the id branch must run first.
        assert!(provider.queries().is_empty());
    }

    #[test]
    fn test_name_lookup_sends_composed_query() {
        let catalog = Catalog::open_memory().unwrap();
        let provider = ScriptedMovies::new(vec![("Se7en (1995)", se7en())]);

        let m = match_movie("movies/Se7en (1995).mkv", &catalog, &provider)
            .unwrap()
            .unwrap();
        assert_eq!(m.movie.title, "Se7en");
        assert_eq!(provider.queries(), vec!["Se7en (1995)".to_string()]);
        // The remote hit was written back to the catalog.
        assert!(catalog.get_movie(114369).unwrap().is_some());
    }

    #[test]
    fn test_last_resort_uses_stripped_base_name() {
        let catalog = Catalog::open_memory().unwrap();
        let provider = ScriptedMovies::new(vec![("The Thin Man", se7en())]);

        let m = match_movie("The Thin Man.mkv", &catalog, &provider)
            .unwrap()
            .unwrap();
        assert_eq!(m.movie.imdb_id, 114369);
        assert_eq!(provider.queries(), vec!["The Thin Man".to_string()]);
    }

    #[test]
    fn test_disc_number_carried_on_any_branch() {
        let catalog = Catalog::open_memory().unwrap();
        let provider = ScriptedMovies::new(vec![("Se7en (1995)", se7en())]);

        let m = match_movie("Se7en (1995) disc 2.mkv", &catalog, &provider)
            .unwrap()
            .unwrap();
        assert_eq!(m.disc, Some(2));
    }

    #[test]
    fn test_total_miss_is_none_not_error() {
        let catalog = Catalog::open_memory().unwrap();
        let provider = ScriptedMovies::new(vec![]);

        let result = match_movie("garbled_rip_final2.avi", &catalog, &provider).unwrap();
        assert!(result.is_none());
        // Both the composed query path (no name extracted) and the last
        // resort ran with real text, never an empty query.
        assert_eq!(provider.queries(), vec!["garbled_rip_final2".to_string()]);
    }

    #[test]
    fn test_extension_only_name_sends_no_query() {
        let catalog = Catalog::open_memory().unwrap();
        let provider = ScriptedMovies::new(vec![]);

        let result = match_movie("movies/.mkv", &catalog, &provider).unwrap();
        assert!(result.is_none());
        // Nothing to ask about: the provider must never see an empty query.
        assert!(provider.queries().is_empty());
    }

    #[test]
    fn test_provider_fault_propagates() {
        struct Faulty;
        impl MovieProvider for Faulty {
            fn lookup_movie(&self, _query: &str) -> Result<Option<Movie>, ReelmatchError> {
                Err(ReelmatchError::Provider("connection reset".into()))
            }
        }
        let catalog = Catalog::open_memory().unwrap();
        assert!(match_movie("Se7en (1995).mkv", &catalog, &Faulty).is_err());
    }
}
