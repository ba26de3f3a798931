// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://npb.jp";

// Season
pub const FIRST_MONTH: u32 = 3;
pub const LAST_MONTH: u32 = 10;

// Pause between month requests
pub const REQUEST_PAUSE_MS: u64 = 1_000; // be polite

// Logging
pub const LOG_FILE: &str = ".store/debug.log";
