// src/cli.rs
use std::{env, time::Duration};

use color_eyre::eyre::{bail, eyre, Result};

use crate::{
    config::options::ScrapeOptions,
    core::net::HttpFetch,
    progress::Progress,
    scrape,
};

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    pub scrape: ScrapeOptions,
    /// Single month instead of the season loop.
    pub month: Option<u32>,
}

/// Month-by-month status on stderr; schedules go to stdout.
struct StderrProgress;

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("Fetching {total} months…");
    }
    fn item_done(&mut self, month: u32, games: usize) {
        eprintln!("  {month:02}: {games} rows");
    }
    fn item_failed(&mut self, month: u32) {
        eprintln!("  {month:02}: failed");
    }
}

pub fn run() -> Result<()> {
    let params = parse_args(env::args().skip(1))?;
    let fetch = HttpFetch::new()?;

    let mut progress = StderrProgress;
    let schedules = match params.month {
        Some(month) => scrape::collect_month(&fetch, &params.scrape, month)?,
        None => {
            let progress: &mut dyn Progress = &mut progress;
            scrape::collect_season(&fetch, &params.scrape, Some(progress))?
        }
    };

    for s in &schedules {
        println!("{s}");
    }
    eprintln!("{} schedules", schedules.len());
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<Params>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params { scrape: ScrapeOptions::default(), month: None };

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--year" | "-y" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --year"))?;
                params.scrape.year = v.parse().map_err(|_| eyre!("Invalid year: {v}"))?;
            }
            "--month" | "-m" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --month"))?;
                let m: u32 = v.parse().map_err(|_| eyre!("Invalid month: {v}"))?;
                if !(1..=12).contains(&m) {
                    bail!("Month out of range (1..12): {m}");
                }
                params.month = Some(m);
            }
            "--pause-ms" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --pause-ms"))?;
                let ms: u64 = v.parse().map_err(|_| eyre!("Invalid pause: {v}"))?;
                params.scrape.request_pause = Duration::from_millis(ms);
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other => bail!("Unknown arg: {other}"),
        }
    }

    Ok(params)
}
