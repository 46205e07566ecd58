//! Pokedex - An interactive shell over a remote creature catalog
//!
//! Browses location areas, explores their encounters and catches creatures,
//! with responses kept in an expiring in-memory cache.

pub mod cache;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod repl;
pub mod session;
pub mod tasks;

pub use cache::ExpiringCache;
pub use client::CatalogClient;
pub use commands::CommandRegistry;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use fetch::Fetcher;
pub use repl::{Repl, ReplExit};
pub use session::Session;
pub use tasks::spawn_reaper_task;
