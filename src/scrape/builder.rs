// src/scrape/builder.rs
use chrono::NaiveDate;

use crate::data::{Schedule, ScheduleState, Score};
use crate::error::{Result, ScrapeError};
use crate::specs::schedule::RawRow;

use super::classify::classify;

/// Full-width colon between role and name in a pitcher note (`勝：山田`).
pub const PITCHER_SEP: char = '：';

/// `MMDD` + season year → date. `month` is the page being parsed, used for error context.
pub fn parse_date(year: i32, month: u32, fragment: &str) -> Result<NaiveDate> {
    let err = || ScrapeError::DateParse { fragment: s!(fragment), year, month };

    let chars: Vec<char> = fragment.chars().collect();
    let mm: String = chars.iter().take(2).collect();
    let dd: String = chars[chars.len().saturating_sub(2)..].iter().collect();

    let m: u32 = mm.parse().map_err(|_| err())?;
    let d: u32 = dd.parse().map_err(|_| err())?;
    NaiveDate::from_ymd_opt(year, m, d).ok_or_else(err)
}

/// Name part of a pitcher note; "" for a blank note.
pub fn pitcher_name(note: &str) -> Result<String> {
    if note.trim().is_empty() {
        return Ok(s!());
    }
    note.split(PITCHER_SEP)
        .nth(1)
        .map(|name| s!(name.trim()))
        .ok_or_else(|| ScrapeError::MalformedPitcherNote { note: s!(note) })
}

/// Turn one extracted row into a `Schedule`.
///
/// Pitcher notes are only read for the two states that use them, so a stray
/// note on a cancelled date never fails the row.
pub fn build(year: i32, month: u32, row: &RawRow) -> Result<Schedule> {
    let state = classify(row);
    let date = parse_date(year, month, &row.date)?;

    let mut starting_pitcher_home = s!();
    let mut starting_pitcher_away = s!();
    let mut winning_pitcher = s!();
    let mut losing_pitcher = s!();

    match state {
        ScheduleState::MatchAlreadyHeld => {
            winning_pitcher = pitcher_name(&row.pitcher1)?;
            losing_pitcher = pitcher_name(&row.pitcher2)?;
        }
        ScheduleState::NotYetHeld => {
            starting_pitcher_home = pitcher_name(&row.pitcher1)?;
            starting_pitcher_away = pitcher_name(&row.pitcher2)?;
        }
        _ => {}
    }

    Ok(Schedule {
        state,
        date,
        time: row.time.clone(),
        venue: row.venue.clone(),
        home: Score::new(row.team_home.clone(), row.score_home.clone()),
        away: Score::new(row.team_away.clone(), row.score_away.clone()),
        starting_pitcher_home,
        starting_pitcher_away,
        winning_pitcher,
        losing_pitcher,
        remarks: row.remarks.clone(),
    })
}
