use std::path::Path;

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::ReelmatchError;
use crate::models::{Episode, Movie, Series};

const SCHEMA: &str = include_str!("../../../migrations/001_initial.sql");

/// SQLite-backed catalog of previously resolved movies and episodes.
///
/// Sits in front of the remote providers as a read-through cache: lookups
/// consult it first, and remote hits are written back so an equivalent
/// lookup is later satisfied locally. All inserts are idempotent upserts.
pub struct Catalog {
    conn: Connection,
}

impl Catalog {
    /// Open (or create) the catalog at the given path and run migrations.
    pub fn open(path: &Path) -> Result<Self, ReelmatchError> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Open an in-memory catalog (for tests).
    pub fn open_memory() -> Result<Self, ReelmatchError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    // ── Movies ──────────────────────────────────────────────────

    pub fn get_movie(&self, imdb_id: u64) -> Result<Option<Movie>, ReelmatchError> {
        // An id beyond the SQLite integer range cannot be in the catalog.
        let Ok(key) = i64::try_from(imdb_id) else {
            return Ok(None);
        };
        self.conn
            .query_row(
                "SELECT imdb_id, title, year FROM movies WHERE imdb_id = ?1",
                params![key],
                |row| {
                    Ok(Movie {
                        imdb_id: row.get::<_, i64>(0)? as u64,
                        title: row.get(1)?,
                        year: row.get(2)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    /// Insert a movie, replacing any previous record with the same id.
    pub fn add_movie(&self, movie: &Movie) -> Result<(), ReelmatchError> {
        // An unrepresentable key cannot be stored; the next lookup for it
        // is a plain miss either way.
        let Ok(key) = i64::try_from(movie.imdb_id) else {
            return Ok(());
        };
        self.conn.execute(
            "INSERT OR REPLACE INTO movies (imdb_id, title, year) VALUES (?1, ?2, ?3)",
            params![key, movie.title, movie.year],
        )?;
        Ok(())
    }

    // ── Episodes ────────────────────────────────────────────────

    pub fn get_episode(
        &self,
        series_id: i64,
        season: u32,
        episode: u32,
    ) -> Result<Option<Episode>, ReelmatchError> {
        self.conn
            .query_row(
                "SELECT series_id, season, episode, title, air_date
                 FROM episodes WHERE series_id = ?1 AND season = ?2 AND episode = ?3",
                params![series_id, season, episode],
                row_to_episode,
            )
            .optional()
            .map_err(Into::into)
    }

    pub fn get_episode_by_date(
        &self,
        series_id: i64,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<Option<Episode>, ReelmatchError> {
        // A nonsense calendar date cannot be in the catalog.
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            return Ok(None);
        };
        self.conn
            .query_row(
                "SELECT series_id, season, episode, title, air_date
                 FROM episodes WHERE series_id = ?1 AND air_date = ?2",
                params![series_id, date.to_string()],
                row_to_episode,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Insert an episode under the given series, replacing any previous
    /// record with the same (series, season, episode) key. Ensures the
    /// series row itself exists.
    pub fn add_episode(&self, episode: &Episode, series: &Series) -> Result<(), ReelmatchError> {
        self.conn.execute(
            "INSERT OR IGNORE INTO series (id, tvdb_id, title) VALUES (?1, ?2, ?3)",
            params![
                series.id,
                series.tvdb_id.and_then(|v| i64::try_from(v).ok()),
                series.title
            ],
        )?;
        self.conn.execute(
            "INSERT OR REPLACE INTO episodes (series_id, season, episode, title, air_date)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                series.id,
                episode.season,
                episode.episode,
                episode.title,
                episode.air_date.map(|d| d.to_string()),
            ],
        )?;
        Ok(())
    }
}

fn row_to_episode(row: &rusqlite::Row<'_>) -> rusqlite::Result<Episode> {
    let air_date: Option<String> = row.get(4)?;
    Ok(Episode {
        series_id: row.get(0)?,
        season: row.get(1)?,
        episode: row.get(2)?,
        title: row.get(3)?,
        air_date: air_date.and_then(|s| s.parse().ok()),
    })
}
