// src/scrape/classify.rs
use crate::data::ScheduleState;
use crate::specs::schedule::{RawRow, CANCELLED_MARK, NO_GAME_MARK, PREPARATION_DAY_MARK};

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Decide the game state of a row. Rules run in order, first hit wins:
///
/// 1. cancel marker `(予備日)` → `PreparationDay`
/// 2. cancel marker `中止` → `Cancelled`
/// 3. cancel marker `ノーゲーム` → `NoGame`
/// 4. blank home score → `NotYetHeld`
/// 5. otherwise → `MatchAlreadyHeld`
///
/// Markers must match exactly; any other cancel text falls through to the score
/// rules. Only the home score is consulted.
pub fn classify(row: &RawRow) -> ScheduleState {
    let cancel = row.cancel.as_str();
    match cancel {
        c if !is_blank(c) && c == PREPARATION_DAY_MARK => ScheduleState::PreparationDay,
        c if !is_blank(c) && c == CANCELLED_MARK => ScheduleState::Cancelled,
        c if !is_blank(c) && c == NO_GAME_MARK => ScheduleState::NoGame,
        _ if is_blank(&row.score_home) => ScheduleState::NotYetHeld,
        _ => ScheduleState::MatchAlreadyHeld,
    }
}
