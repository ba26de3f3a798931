// src/scrape/scrape.rs
use std::{thread, time::Instant};

use crate::{
    config::options::ScrapeOptions,
    core::net::{Fetch, HttpFetch},
    data::Schedule,
    error::Result,
    progress::Progress,
    specs::schedule::{parse_rows, Selectors},
};

use super::builder::build;

/// `https://npb.jp/games/2024/schedule_04_detail.html`
pub fn month_url(base_url: &str, year: i32, month: u32) -> String {
    format!("{base_url}/games/{year}/schedule_{month:02}_detail.html")
}

/// Offline half of a month scrape: document → schedules.
/// The first row that fails to build aborts the month.
pub fn parse_month(html_doc: &str, year: i32, month: u32) -> Result<Vec<Schedule>> {
    let sel = Selectors::new()?;
    let t = Instant::now();
    let rows = parse_rows(html_doc, &sel);
    logd!("Schedule {year}-{month:02}: {} rows parsed in {:?}", rows.len(), t.elapsed());

    rows.iter().map(|row| build(year, month, row)).collect()
}

/// Fetch and build one month. A month without a published table is `Ok(vec![])`.
pub fn collect_month(
    fetch: &dyn Fetch,
    opts: &ScrapeOptions,
    month: u32,
) -> Result<Vec<Schedule>> {
    let url = month_url(&opts.base_url, opts.year, month);
    logd!("GET {url}");
    let html_doc = fetch.get(&url)?;
    parse_month(&html_doc, opts.year, month)
}

/// Walk `opts.months` in order and concatenate every month's schedules.
///
/// Sleeps `opts.request_pause` between requests. Any failing month aborts the
/// whole season; nothing gathered so far is returned.
pub fn collect_season(
    fetch: &dyn Fetch,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<Schedule>> {
    let months: Vec<u32> = opts.months.clone().collect();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(months.len());
        p.log(&format!("Season {}: months {:?}", opts.year, opts.months));
    }

    let mut schedules = Vec::new();
    for (i, &month) in months.iter().enumerate() {
        if i > 0 && !opts.request_pause.is_zero() {
            thread::sleep(opts.request_pause); // be polite
        }

        match collect_month(fetch, opts, month) {
            Ok(mut games) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(month, games.len());
                }
                schedules.append(&mut games);
            }
            Err(e) => {
                loge!("Season {} month {month:02}: {e}", opts.year);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(month);
                    p.finish();
                }
                return Err(e);
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!("Season {}: {} schedules", opts.year, schedules.len());
    Ok(schedules)
}

/// `collect_month` over the default HTTP client.
pub fn fetch_month(opts: &ScrapeOptions, month: u32) -> Result<Vec<Schedule>> {
    collect_month(&HttpFetch::new()?, opts, month)
}

/// `collect_season` over the default HTTP client, without progress reporting.
pub fn fetch_season(opts: &ScrapeOptions) -> Result<Vec<Schedule>> {
    collect_season(&HttpFetch::new()?, opts, None)
}
