// src/data.rs
//
// Value types produced by a scrape. Built once per table row by
// scrape::builder and never mutated afterwards.

use std::fmt;

use chrono::NaiveDate;

/// Game status of one schedule row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScheduleState {
    /// 開催済: score is posted.
    MatchAlreadyHeld,
    /// 未開催: no score yet; starting pitchers may be announced.
    NotYetHeld,
    /// 予備日: reserve date kept open for rained-out games.
    PreparationDay,
    /// 中止
    Cancelled,
    /// ノーゲーム: started but called before it became official.
    NoGame,
}

impl ScheduleState {
    pub const ALL: [ScheduleState; 5] = [
        ScheduleState::MatchAlreadyHeld,
        ScheduleState::NotYetHeld,
        ScheduleState::PreparationDay,
        ScheduleState::Cancelled,
        ScheduleState::NoGame,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScheduleState::MatchAlreadyHeld => "MATCH_ALREADY_HELD",
            ScheduleState::NotYetHeld => "NOT_YET_HELD",
            ScheduleState::PreparationDay => "PREPARATION_DAY",
            ScheduleState::Cancelled => "CANCELLED",
            ScheduleState::NoGame => "NO_GAME",
        }
    }

    /// Wording used on the site.
    pub fn label(self) -> &'static str {
        match self {
            ScheduleState::MatchAlreadyHeld => "開催済",
            ScheduleState::NotYetHeld => "未開催",
            ScheduleState::PreparationDay => "予備日",
            ScheduleState::Cancelled => "中止",
            ScheduleState::NoGame => "ノーゲーム",
        }
    }
}

impl fmt::Display for ScheduleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Team name plus score. The score stays text: "" until the game is played.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub team: String,
    pub score: String,
}

impl Score {
    pub fn new(team: impl Into<String>, score: impl Into<String>) -> Self {
        Self { team: team.into(), score: score.into() }
    }
}

/// One game (or placeholder date) on the season schedule.
///
/// Pitcher fields depend on `state`:
/// - `NotYetHeld`: `starting_pitcher_*` may be set, winning/losing are empty.
/// - `MatchAlreadyHeld`: `winning_pitcher`/`losing_pitcher` may be set, starters are empty.
/// - anything else: all four are empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    pub state: ScheduleState,
    pub date: NaiveDate,
    pub time: String,
    pub venue: String,
    pub home: Score,
    pub away: Score,
    pub starting_pitcher_home: String,
    pub starting_pitcher_away: String,
    pub winning_pitcher: String,
    pub losing_pitcher: String,
    pub remarks: String,
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<5} {:<18} {} {:>2} - {:<2} {}",
            self.date.format("%Y-%m-%d"),
            self.time,
            self.state,
            self.home.team,
            self.home.score,
            self.away.score,
            self.away.team,
        )?;
        if !self.venue.is_empty() {
            write!(f, " @ {}", self.venue)?;
        }
        match self.state {
            ScheduleState::MatchAlreadyHeld => {
                write!(f, " W:{} L:{}", self.winning_pitcher, self.losing_pitcher)?
            }
            ScheduleState::NotYetHeld => write!(
                f,
                " SP:{} / {}",
                self.starting_pitcher_home, self.starting_pitcher_away
            )?,
            _ => {}
        }
        if !self.remarks.is_empty() {
            write!(f, " ({})", self.remarks)?;
        }
        Ok(())
    }
}
