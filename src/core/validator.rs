use crate::core::{century, checksum};
use crate::domain::model::{GenderHint, Separator, ValidationOutcome};
use crate::domain::ports::{Clock, SystemClock};
use crate::utils::error::{PnrError, Result};
use chrono::NaiveDate;

/// Validates a personnummer against the system clock.
pub fn validate(input: &str) -> ValidationOutcome {
    validate_at(input, &SystemClock)
}

/// Validates a personnummer, resolving the century against an injected
/// clock. All failures are folded into the outcome; nothing panics on bad
/// input.
pub fn validate_at(input: &str, clock: &impl Clock) -> ValidationOutcome {
    match check(input, clock.today()) {
        Ok(outcome) => outcome,
        Err(error) => ValidationOutcome::invalid(error),
    }
}

/// Projects the validity flag, discarding the derived fields.
pub fn is_valid(input: &str) -> bool {
    validate(input).is_valid
}

fn check(input: &str, today: NaiveDate) -> Result<ValidationOutcome> {
    let trimmed = input.trim();
    let separator = Separator::detect(trimmed);

    let digits: Vec<u8> = trimmed
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();

    if digits.len() != 10 && digits.len() != 12 {
        return Err(PnrError::DigitCount {
            found: digits.len(),
        });
    }

    // The last 10 digits feed the checksum regardless of input length.
    let last10 = if digits.len() == 12 {
        &digits[2..]
    } else {
        &digits[..]
    };

    let birth_date = if digits.len() == 12 {
        parse_full_date(&digits[..8])?
    } else {
        let (yy, month, day) = split_short_date(&digits[..6]);
        // Parse-validity gate on the 2000s-normalized form, before the
        // separator decides the real century.
        if NaiveDate::from_ymd_opt(2000 + yy as i32, month, day).is_none() {
            return Err(PnrError::Date {
                text: digit_string(&digits[..6]),
                layout: "YYMMDD",
            });
        }
        century::resolve(yy, month, day, separator, today)?
    };

    checksum::verify(last10)?;

    let normalized = format!(
        "{}{}{}",
        birth_date.format("%Y%m%d"),
        separator.as_char(),
        digit_string(&last10[6..])
    );

    Ok(ValidationOutcome::valid(
        normalized,
        birth_date,
        GenderHint::from_serial_digit(last10[8]),
    ))
}

fn parse_full_date(digits: &[u8]) -> Result<NaiveDate> {
    let year = fold(&digits[..4]) as i32;
    let month = fold(&digits[4..6]);
    let day = fold(&digits[6..8]);

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| PnrError::Date {
        text: digit_string(digits),
        layout: "YYYYMMDD",
    })
}

fn split_short_date(digits: &[u8]) -> (u32, u32, u32) {
    (fold(&digits[..2]), fold(&digits[2..4]), fold(&digits[4..6]))
}

fn fold(digits: &[u8]) -> u32 {
    digits.iter().fold(0, |acc, &d| acc * 10 + u32::from(d))
}

fn digit_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}
