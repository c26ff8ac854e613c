//! Birth date derivation from age and season of birth.

use crate::constants::season_anchors;
use crate::models::Season;

/// Derive an ISO-8601 birth date string
///
/// The year is `current_year - age`; month and day come from the season's
/// anchor, or January 1st when the season is not recognized.
pub fn gen_birth_date(age: i64, season: &str, current_year: i32) -> String {
    let birth_year = i64::from(current_year).saturating_sub(age);
    let (month, day) = Season::from_label(season)
        .map(|s| s.anchor())
        .unwrap_or(season_anchors::FALLBACK);

    format!("{}-{:02}-{:02}", birth_year, month, day)
}
