//! Background Tasks Module
//!
//! # Tasks
//! - Cache reaper: removes expired cache entries once per TTL

mod cleanup;

pub use cleanup::spawn_reaper_task;
