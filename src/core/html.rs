// src/core/html.rs
use scraper::{ElementRef, Selector};

use crate::error::{Result, ScrapeError};

/// Compile a CSS selector, keeping the source text in the error.
pub fn selector(css: &'static str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ScrapeError::Selector { selector: css, reason: e.to_string() })
}

/// ASCII whitespace plus NBSP. The ideographic space is not in this set:
/// the site uses it inside names (`山本　由伸`).
fn is_collapsible(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0C' | '\u{a0}')
}

/// Collapse runs of ASCII whitespace/NBSP to one space, then trim both ends
/// with `char::is_whitespace` (which does include U+3000).
pub fn collapse_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for ch in s.chars() {
        if is_collapsible(ch) {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    s!(out.trim())
}

/// All descendant text of `el`, whitespace-collapsed and trimmed.
pub fn trim_text(el: ElementRef<'_>) -> String {
    collapse_ws(&el.text().collect::<String>())
}

/// Trimmed text of the first match under `scope`, or "".
pub fn first_text(scope: ElementRef<'_>, sel: &Selector) -> String {
    scope.select(sel).next().map(trim_text).unwrap_or_else(|| s!())
}

/// Trimmed text of the last match under `scope`, or "".
pub fn last_text(scope: ElementRef<'_>, sel: &Selector) -> String {
    scope.select(sel).last().map(trim_text).unwrap_or_else(|| s!())
}
