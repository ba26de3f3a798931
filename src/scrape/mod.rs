// src/scrape/mod.rs
pub mod builder;
pub mod classify;
mod scrape;

pub use builder::build;
pub use classify::classify;
pub use scrape::{collect_month, collect_season, fetch_month, fetch_season, month_url, parse_month};
