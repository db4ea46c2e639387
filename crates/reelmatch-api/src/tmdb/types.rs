use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MovieSearchResponse {
    pub results: Vec<TmdbMovie>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovie {
    pub id: u64,
    pub title: String,
    /// ISO date, e.g. "1995-09-22". Sometimes an empty string.
    pub release_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExternalIdsResponse {
    /// IMDb id in "tt0114369" form.
    pub imdb_id: Option<String>,
}

impl TmdbMovie {
    /// Release year, when the date field is present and well-formed.
    pub fn year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?;
        date.get(..4)?.parse().ok()
    }
}
