// src/specs/schedule.rs
use scraper::{ElementRef, Html, Selector};

use crate::core::html::{first_text, last_text, selector, trim_text};
use crate::error::Result;

/// Path from the document root to the game rows of one month.
pub const ROWS: &str = "#schedule_detail > div > table > tbody > tr";

pub const PREPARATION_DAY_MARK: &str = "(予備日)";
pub const CANCELLED_MARK: &str = "中止";
pub const NO_GAME_MARK: &str = "ノーゲーム";

/// Compiled selectors for one month page. Build once, reuse for every row.
pub struct Selectors {
    pub rows: Selector,
    td: Selector,
    time: Selector,
    place: Selector,
    team1: Selector,
    score1: Selector,
    team2: Selector,
    score2: Selector,
    cancel: Selector,
    pit: Selector,
    comment: Selector,
}

impl Selectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            rows: selector(ROWS)?,
            td: selector("td")?,
            time: selector(".time")?,
            place: selector(".place")?,
            team1: selector(".team1")?,
            score1: selector(".score1")?,
            team2: selector(".team2")?,
            score2: selector(".score2")?,
            cancel: selector(".cancel")?,
            pit: selector(".pit")?,
            comment: selector(".comment")?,
        })
    }
}

/// Text fields of one schedule row, exactly as the page shows them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRow {
    /// MMDD taken from the row id.
    pub date: String,
    pub time: String,
    pub venue: String,
    pub team_home: String,
    pub score_home: String,
    pub team_away: String,
    pub score_away: String,
    pub cancel: String,
    /// First `.pit` note of the row.
    pub pitcher1: String,
    /// Last `.pit` note; the same element as `pitcher1` when the row has one note.
    pub pitcher2: String,
    pub remarks: String,
}

impl RawRow {
    pub fn extract(row: ElementRef<'_>, sel: &Selectors) -> Self {
        Self {
            date: date_fragment(row),
            time: first_text(row, &sel.time),
            venue: first_text(row, &sel.place),
            team_home: first_text(row, &sel.team1),
            score_home: first_text(row, &sel.score1),
            team_away: first_text(row, &sel.team2),
            score_away: first_text(row, &sel.score2),
            cancel: first_text(row, &sel.cancel),
            pitcher1: first_text(row, &sel.pit),
            pitcher2: last_text(row, &sel.pit),
            remarks: first_text(row, &sel.comment),
        }
    }
}

/// Header and spacer rows have an empty first cell (or no cell at all).
pub fn is_invalid(row: ElementRef<'_>, sel: &Selectors) -> bool {
    row.select(&sel.td)
        .next()
        .map(trim_text)
        .unwrap_or_default()
        .is_empty()
}

/// Last four characters of the row id (`date0328` → `0328`), "" without an id.
pub fn date_fragment(row: ElementRef<'_>) -> String {
    let id = row.value().attr("id").unwrap_or("");
    let skip = id.chars().count().saturating_sub(4);
    id.chars().skip(skip).collect()
}

/// All valid rows of a month page in document order.
/// A page without the schedule table yields an empty list.
pub fn parse_rows(html_doc: &str, sel: &Selectors) -> Vec<RawRow> {
    let doc = Html::parse_document(html_doc);
    doc.select(&sel.rows)
        .filter(|row| !is_invalid(*row, sel))
        .map(|row| RawRow::extract(row, sel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(rows: &str) -> String {
        format!(
            r#"<html><body>
              <div id="schedule_detail"><div><table>
                <thead><tr><th>日付</th><th>対戦</th></tr></thead>
                <tbody>{rows}</tbody>
              </table></div></div>
            </body></html>"#
        )
    }

    #[test]
    fn extracts_a_played_game() {
        let doc = page(
            r#"<tr id="date0329">
                 <th>3/29（金）</th>
                 <td><div class="team1">阪神</div>
                     <div class="score1"> 3 </div>
                     <div class="score2">1</div>
                     <div class="team2">巨人</div>
                     <div class="place">甲子園</div>
                     <div class="time">18:00</div>
                 </td>
                 <td><div class="pit">勝：山田</div><div class="pit">敗：佐藤</div></td>
                 <td><div class="comment">  開幕戦 </div></td>
               </tr>"#,
        );
        let sel = Selectors::new().unwrap();
        let rows = parse_rows(&doc, &sel);

        assert_eq!(rows.len(), 1);
        let r = &rows[0];
        assert_eq!(r.date, "0329");
        assert_eq!(r.team_home, "阪神");
        assert_eq!(r.score_home, "3");
        assert_eq!(r.score_away, "1");
        assert_eq!(r.team_away, "巨人");
        assert_eq!(r.venue, "甲子園");
        assert_eq!(r.time, "18:00");
        assert_eq!(r.pitcher1, "勝：山田");
        assert_eq!(r.pitcher2, "敗：佐藤");
        assert_eq!(r.remarks, "開幕戦");
        assert_eq!(r.cancel, "");
    }

    #[test]
    fn missing_cells_are_empty_strings() {
        let doc = page(r#"<tr><td>(予備日)</td></tr>"#);
        let sel = Selectors::new().unwrap();
        let rows = parse_rows(&doc, &sel);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], RawRow::default());
    }

    #[test]
    fn single_pitcher_note_fills_both_slots() {
        let doc = page(
            r#"<tr id="date0402"><td><div class="team1">ヤクルト</div>
                 <div class="pit">予告：高橋</div></td></tr>"#,
        );
        let sel = Selectors::new().unwrap();
        let r = &parse_rows(&doc, &sel)[0];
        assert_eq!(r.pitcher1, "予告：高橋");
        assert_eq!(r.pitcher2, r.pitcher1);
    }

    #[test]
    fn ideographic_space_inside_names_survives() {
        let doc = page(&format!(
            r#"<tr id="date0405"><td><div class="team1">オリックス</div>
                 <div class="pit"> 勝：山本{sp}由伸 </div>
                 <div class="comment">
                   降雨{sp}コールド  </div></td></tr>"#,
            sp = '\u{3000}'
        ));
        let sel = Selectors::new().unwrap();
        let r = &parse_rows(&doc, &sel)[0];
        assert_eq!(r.pitcher1, "勝：山本\u{3000}由伸");
        assert_eq!(r.remarks, "降雨\u{3000}コールド");
    }

    #[test]
    fn invalid_rows_are_skipped() {
        let doc = page(
            r#"<tr id="date0401"><td>  </td><td><div class="team1">広島</div></td></tr>
               <tr><th>only a header cell</th></tr>
               <tr id="date0401"><td><div class="team1">中日</div></td></tr>"#,
        );
        let sel = Selectors::new().unwrap();
        let rows = parse_rows(&doc, &sel);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].team_home, "中日");
    }

    #[test]
    fn header_rows_outside_tbody_are_ignored() {
        let sel = Selectors::new().unwrap();
        let rows = parse_rows(&page(""), &sel);
        assert!(rows.is_empty());
    }

    #[test]
    fn page_without_schedule_table_has_no_rows() {
        let sel = Selectors::new().unwrap();
        let rows = parse_rows("<html><body><p>準備中</p></body></html>", &sel);
        assert!(rows.is_empty());
    }

    #[test]
    fn date_fragment_takes_last_four_chars() {
        let doc = page(
            r#"<tr id="date1005"><td>x</td></tr>
               <tr id="05"><td>x</td></tr>
               <tr><td>x</td></tr>"#,
        );
        let sel = Selectors::new().unwrap();
        let dates: Vec<_> = parse_rows(&doc, &sel).into_iter().map(|r| r.date).collect();
        assert_eq!(dates, ["1005", "05", ""]);
    }
}
