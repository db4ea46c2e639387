//! Core matching logic: decide which movie or episode a file path refers to,
//! using only the path text, then resolve that identity through the local
//! catalog with remote-provider fallback.

pub mod catalog;
pub mod config;
pub mod error;
pub mod locator;
pub mod models;
pub mod movie;
pub mod provider;
pub mod series;

pub use error::ReelmatchError;
