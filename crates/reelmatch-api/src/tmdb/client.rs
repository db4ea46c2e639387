use reqwest::blocking::{Client, Response};

use reelmatch_core::models::Movie;
use reelmatch_core::provider::MovieProvider;
use reelmatch_core::ReelmatchError;

use super::error::TmdbError;
use super::types::{ExternalIdsResponse, MovieSearchResponse, TmdbMovie};

const BASE_URL: &str = "https://api.themoviedb.org/3";

/// TMDB v3 client for movie lookups.
pub struct TmdbClient {
    api_key: String,
    http: Client,
}

impl TmdbClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }

    /// Check the HTTP response for errors and return the body text on failure.
    fn check_response(resp: Response) -> Result<Response, TmdbError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().unwrap_or_default();
            tracing::warn!(status, "TMDB API error");
            Err(TmdbError::Api {
                status,
                message: body,
            })
        }
    }

    /// Search for a movie by name, optionally constrained to a release year.
    /// Returns the first (best-ranked) result.
    pub fn search_movie(
        &self,
        name: &str,
        year: Option<i32>,
    ) -> Result<Option<TmdbMovie>, TmdbError> {
        let mut params = vec![
            ("api_key", self.api_key.clone()),
            ("query", name.to_string()),
        ];
        if let Some(year) = year {
            params.push(("year", year.to_string()));
        }

        let resp = self
            .http
            .get(format!("{BASE_URL}/search/movie"))
            .query(&params)
            .send()?;
        let resp = Self::check_response(resp)?;

        let page: MovieSearchResponse =
            resp.json().map_err(|e| TmdbError::Parse(e.to_string()))?;
        Ok(page.results.into_iter().next())
    }

    /// Fetch the IMDb id for a TMDB movie, as a bare number.
    pub fn imdb_id(&self, tmdb_id: u64) -> Result<Option<u64>, TmdbError> {
        let resp = self
            .http
            .get(format!("{BASE_URL}/movie/{tmdb_id}/external_ids"))
            .query(&[("api_key", self.api_key.as_str())])
            .send()?;
        let resp = Self::check_response(resp)?;

        let ids: ExternalIdsResponse =
            resp.json().map_err(|e| TmdbError::Parse(e.to_string()))?;
        Ok(ids
            .imdb_id
            .and_then(|id| id.trim_start_matches("tt").parse().ok()))
    }
}

impl MovieProvider for TmdbClient {
    fn lookup_movie(&self, query: &str) -> Result<Option<Movie>, ReelmatchError> {
        let (name, year) = split_query(query);
        let Some(found) = self.search_movie(name, year)? else {
            return Ok(None);
        };
        let imdb_id = self.imdb_id(found.id)?;
        Ok(to_movie(found, imdb_id))
    }
}

/// Convert a search hit into a catalog record. The catalog keys movies by
/// IMDb id, so a hit TMDB cannot cross-reference is reported as a miss
/// rather than stored under a key from the wrong id namespace.
fn to_movie(found: TmdbMovie, imdb_id: Option<u64>) -> Option<Movie> {
    let Some(imdb_id) = imdb_id else {
        tracing::debug!(tmdb_id = found.id, title = %found.title, "search hit has no IMDb id");
        return None;
    };
    Some(Movie {
        imdb_id,
        year: found.year(),
        title: found.title,
    })
}

/// Peel a trailing " (1999)" year suffix off a composed lookup query.
fn split_query(query: &str) -> (&str, Option<i32>) {
    if let Some((name, rest)) = query.rsplit_once(" (") {
        if let Some(year) = rest.strip_suffix(')') {
            if year.len() == 4 {
                if let Ok(year) = year.parse() {
                    return (name, Some(year));
                }
            }
        }
    }
    (query, None)
}
