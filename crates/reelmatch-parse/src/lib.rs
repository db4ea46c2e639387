//! Filename and path parsing for media identification.
//!
//! Everything in this crate is pure text matching: a fixed library of
//! patterns compiled once, plus per-series title patterns built from
//! configured ignore sets. No I/O, no lookups. A pattern that does not
//! match returns `None`; that is the normal outcome for most inputs.

pub mod date;
pub mod episode;
pub mod movie;
pub mod path;
pub mod title;

pub use date::AirDate;
pub use episode::EpisodeMarker;
pub use movie::MovieSignals;
pub use title::{TitleError, TitlePattern};
