//! Crawler for the pokemondb.net national pokedex.
//!
//! [`extractor`] turns one detail page into [`models::PokemonRecord`]s;
//! [`crawler::Crawler`] drives it across the catalog with a
//! [`traits::PageFetcher`] and a [`traits::RecordSink`].

pub mod config;
pub mod crawler;
pub mod database;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod models;
pub mod traits;
