use std::sync::Mutex;

use reqwest::blocking::{Client, Response};

use reelmatch_core::models::{Episode, Series};
use reelmatch_core::provider::TvProvider;
use reelmatch_core::ReelmatchError;

use super::error::TvdbError;
use super::types::{EpisodesResponse, LoginResponse, TvdbEpisode};

const BASE_URL: &str = "https://api4.thetvdb.com/v4";

/// TheTVDB v4 client for specific-episode lookups.
///
/// Authentication is a `/login` handshake exchanging the API key for a
/// bearer token; the token is fetched lazily on the first request and
/// cached for the life of the client.
pub struct TvdbClient {
    api_key: String,
    http: Client,
    token: Mutex<Option<String>>,
}

impl TvdbClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
            token: Mutex::new(None),
        }
    }

    fn check_response(resp: Response) -> Result<Response, TvdbError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().unwrap_or_default();
            tracing::warn!(status, "TVDB API error");
            Err(TvdbError::Api {
                status,
                message: body,
            })
        }
    }

    /// Exchange the API key for a bearer token, caching it.
    fn token(&self) -> Result<String, TvdbError> {
        let mut token = self
            .token
            .lock()
            .map_err(|_| TvdbError::Auth("token lock poisoned".into()))?;
        if let Some(t) = token.as_ref() {
            return Ok(t.clone());
        }

        let resp = self
            .http
            .post(format!("{BASE_URL}/login"))
            .json(&serde_json::json!({ "apikey": self.api_key }))
            .send()?;
        let resp = Self::check_response(resp)?;

        let login: LoginResponse = resp.json().map_err(|e| TvdbError::Parse(e.to_string()))?;
        *token = Some(login.data.token.clone());
        Ok(login.data.token)
    }

    /// Query the default episode order of a series, filtered server-side.
    /// `filters` are query parameters like `("season", "2")`.
    fn episodes(
        &self,
        series_tvdb_id: u64,
        filters: &[(&str, String)],
    ) -> Result<Vec<TvdbEpisode>, TvdbError> {
        let token = self.token()?;
        let resp = self
            .http
            .get(format!(
                "{BASE_URL}/series/{series_tvdb_id}/episodes/default"
            ))
            .bearer_auth(token)
            .query(filters)
            .send()?;

        // A series with no episodes in the requested slice is a 404, which
        // for our purposes is an empty page, not a fault.
        if resp.status().as_u16() == 404 {
            return Ok(Vec::new());
        }
        let resp = Self::check_response(resp)?;

        let page: EpisodesResponse = resp.json().map_err(|e| TvdbError::Parse(e.to_string()))?;
        Ok(page.data.episodes)
    }

    fn remote_id(series: &Series) -> Result<u64, ReelmatchError> {
        series.tvdb_id.ok_or_else(|| {
            ReelmatchError::Provider(format!(
                "series '{}' has no TVDB id configured",
                series.title
            ))
        })
    }
}

fn to_episode(raw: TvdbEpisode, series: &Series) -> Episode {
    Episode {
        series_id: series.id,
        season: raw.season_number,
        episode: raw.episode_number,
        title: raw.name.unwrap_or_default(),
        air_date: raw.aired.and_then(|d| d.parse().ok()),
    }
}

impl TvProvider for TvdbClient {
    fn specific_episode(
        &self,
        series: &Series,
        season: u32,
        episode: u32,
    ) -> Result<Option<Episode>, ReelmatchError> {
        let id = Self::remote_id(series)?;
        let filters = [
            ("season", season.to_string()),
            ("episodeNumber", episode.to_string()),
        ];
        let found = self
            .episodes(id, &filters)?
            .into_iter()
            .find(|e| e.season_number == season && e.episode_number == episode);
        Ok(found.map(|e| to_episode(e, series)))
    }

    fn specific_episode_by_date(
        &self,
        series: &Series,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<Option<Episode>, ReelmatchError> {
        let id = Self::remote_id(series)?;
        let date = format!("{year:04}-{month:02}-{day:02}");
        let filters = [("airDate", date.clone())];
        let found = self
            .episodes(id, &filters)?
            .into_iter()
            .find(|e| e.aired.as_deref() == Some(date.as_str()));
        Ok(found.map(|e| to_episode(e, series)))
    }
}
