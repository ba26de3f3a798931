//! # Scraping “specs” module
//!
//! Page-specific knowledge of the site's markup: which selectors reach the
//! data, which literal markers the site prints, and how a raw table row is
//! flattened into text fields.
//!
//! ## What lives here
//! - **Selectors and markers** for `schedule_MM_detail.html`.
//! - **Pure extraction**: `<tr>` element → `RawRow` of trimmed strings.
//!   Missing cells become `""`, never an error.
//!
//! ## What does **not** live here
//! - **Fetching**: `core::net`.
//! - **Meaning**: state classification and the typed `Schedule` are built in
//!   `scrape::{classify, builder}`.
//!
//! ## Typical call chain
//! ```text
//! scrape::collect_season → scrape::collect_month → Fetch::get
//!                                               ↘ specs::schedule::parse_rows
//!                                               ↘ classify + build per row
//! ```
//!
//! ## Testing notes
//! Everything here runs offline against inline HTML fixtures.
pub mod schedule;
