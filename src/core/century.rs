use crate::domain::model::Separator;
use crate::utils::error::{PnrError, Result};
use chrono::NaiveDate;

// 365.25 * 100: the '+' separator means the person is at least this old.
const DAYS_IN_CENTURY: i64 = 36_525;

/// Resolves the century of a two-digit year using the separator and today's
/// date. Candidates are tried newest first (2000, 1900, 1800); combinations
/// that do not exist in a given century (Feb 29 outside leap years) are
/// skipped. An empty selection is a date error, never a panic.
pub fn resolve(
    yy: u32,
    month: u32,
    day: u32,
    separator: Separator,
    today: NaiveDate,
) -> Result<NaiveDate> {
    let mut candidates = [2000, 1900, 1800]
        .into_iter()
        .filter_map(|century| NaiveDate::from_ymd_opt((century + yy) as i32, month, day));

    let resolved = match separator {
        // Over 100 years old: the most recent candidate a full century back.
        Separator::Plus => candidates.find(|d| (today - *d).num_days() >= DAYS_IN_CENTURY),
        // Under 100: the latest candidate not in the future. Candidates are
        // in descending order, so the first match is the latest.
        Separator::Hyphen | Separator::None => candidates.find(|d| *d <= today),
    };

    resolved.ok_or_else(|| PnrError::Century {
        text: format!("{:02}{:02}{:02}", yy, month, day),
    })
}
