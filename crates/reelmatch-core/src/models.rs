use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A configured series the caller wants file paths matched against.
///
/// Owned by the caller; matchers only read it. The `id` is the local catalog
/// key, `tvdb_id` the remote provider's key when known.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    pub id: i64,
    pub tvdb_id: Option<u64>,
    pub title: String,
}

/// An authoritative movie record, keyed by its external catalog id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub imdb_id: u64,
    pub title: String,
    pub year: Option<i32>,
}

/// An authoritative episode record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub series_id: i64,
    pub season: u32,
    pub episode: u32,
    pub title: String,
    pub air_date: Option<NaiveDate>,
}

/// Successful movie identification for one file path.
#[derive(Debug, Clone)]
pub struct MovieMatch {
    /// The bare filename the match was made from.
    pub file_name: String,
    pub movie: Movie,
    /// Disc number, if the filename carried one. Extracted regardless of
    /// which strategy produced the movie.
    pub disc: Option<u32>,
}
