// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod progress;
pub mod scrape;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::options::ScrapeOptions;
pub use data::{Schedule, ScheduleState, Score};
pub use error::{Result, ScrapeError};
