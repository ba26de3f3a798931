// src/config/options.rs
use std::ops::RangeInclusive;
use std::time::Duration;

use chrono::{Datelike, Local};

use super::consts::*;

/// What to scrape and how politely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Season year; the only value most callers ever set.
    pub year: i32,
    /// Scheme + host, no trailing slash.
    pub base_url: String,
    /// Months walked by a season scrape, in order.
    pub months: RangeInclusive<u32>,
    /// Sleep between consecutive month requests.
    pub request_pause: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            year: Local::now().year(),
            base_url: s!(BASE_URL),
            months: FIRST_MONTH..=LAST_MONTH,
            request_pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }
}

impl ScrapeOptions {
    pub fn for_year(year: i32) -> Self {
        Self { year, ..Self::default() }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.request_pause = pause;
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = s!(base_url.trim_end_matches('/'));
        self
    }
}
