//! Blocking HTTP clients for the remote metadata providers.
//!
//! `TmdbClient` resolves movie queries, `TvdbClient` resolves specific
//! episodes; both implement the provider traits from `reelmatch-core` so
//! the matchers stay service-agnostic.

pub mod tmdb;
pub mod tvdb;

pub use tmdb::TmdbClient;
pub use tvdb::TvdbClient;
