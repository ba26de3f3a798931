// src/error.rs
use thiserror::Error;

/// Everything that can stop a month or season scrape.
///
/// Missing cells inside a row are not errors; the row extractor turns them
/// into empty strings.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The HTTP client could not be set up (TLS backend, system config).
    #[error("Failed to build HTTP client: {reason}")]
    Client { reason: String },

    /// Transport-level failure: DNS, connect, TLS, body read.
    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The server answered with a non-success status (e.g. a season that is not published).
    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    /// The row id's MMDD fragment is not a calendar date in the season year.
    #[error("Invalid date fragment {fragment:?} for {year} (month page {month:02})")]
    DateParse { fragment: String, year: i32, month: u32 },

    /// A pitcher note without the full-width colon between role and name.
    #[error("Pitcher note {note:?} has no '：' separator")]
    MalformedPitcherNote { note: String },

    #[error("Invalid selector {selector:?}: {reason}")]
    Selector { selector: &'static str, reason: String },
}

impl ScrapeError {
    /// True for both transport and status failures.
    pub fn is_fetch(&self) -> bool {
        matches!(self, ScrapeError::Fetch { .. } | ScrapeError::HttpStatus { .. })
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_kind_covers_transport_and_status() {
        let transport = ScrapeError::Fetch { url: s!("u"), reason: s!("dns") };
        let status = ScrapeError::HttpStatus { url: s!("u"), status: 404 };
        let note = ScrapeError::MalformedPitcherNote { note: s!("山田") };
        assert!(transport.is_fetch());
        assert!(status.is_fetch());
        assert!(!note.is_fetch());
    }

    #[test]
    fn client_setup_failure_has_its_own_message() {
        let e = ScrapeError::Client { reason: s!("no TLS backend") };
        assert_eq!(e.to_string(), "Failed to build HTTP client: no TLS backend");
        assert!(!e.is_fetch());
    }

    #[test]
    fn date_error_names_fragment_and_page() {
        let e = ScrapeError::DateParse { fragment: s!("0230"), year: 2024, month: 2 };
        assert_eq!(e.to_string(), r#"Invalid date fragment "0230" for 2024 (month page 02)"#);
    }
}
