//! Capability traits for the remote metadata services.
//!
//! The matchers and locators only ever see these traits; concrete clients
//! live in `reelmatch-api`. Every method distinguishes a definite miss
//! (`Ok(None)`) from a collaborator fault (`Err`); the two are never
//! folded into one channel.

use crate::error::ReelmatchError;
use crate::models::{Episode, Movie, Series};

/// A remote service that can resolve a free-text query into a movie record.
pub trait MovieProvider {
    /// Look up a movie by name, optionally suffixed with " (year)".
    fn lookup_movie(&self, query: &str) -> Result<Option<Movie>, ReelmatchError>;
}

/// A remote service that can resolve one specific episode of a series.
pub trait TvProvider {
    fn specific_episode(
        &self,
        series: &Series,
        season: u32,
        episode: u32,
    ) -> Result<Option<Episode>, ReelmatchError>;

    fn specific_episode_by_date(
        &self,
        series: &Series,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<Option<Episode>, ReelmatchError>;
}
