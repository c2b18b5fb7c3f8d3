use chrono::NaiveDate;
use pnr_check::{is_valid, validate, validate_at, FixedClock, GenderHint};

fn clock() -> FixedClock {
    FixedClock::new(NaiveDate::from_ymd_opt(2026, 8, 7).unwrap())
}

fn is_valid_at(input: &str) -> bool {
    validate_at(input, &clock()).is_valid
}

#[test]
fn test_empty_or_wrong_digit_count_is_a_format_error() {
    for input in ["", "   ", "123", "12345678901", "1234567890123"] {
        let outcome = validate_at(input, &clock());
        assert!(!outcome.is_valid, "expected {:?} to be invalid", input);
        assert!(
            outcome.error_message.contains("10 or 12 digits"),
            "unexpected message for {:?}: {}",
            input,
            outcome.error_message
        );
    }
}

#[test]
fn test_impossible_dates_are_rejected() {
    for input in ["991332-1234", "19991332-1234", "190002291234"] {
        let outcome = validate_at(input, &clock());
        assert!(!outcome.is_valid, "expected {:?} to be invalid", input);
        assert!(
            outcome.error_message.contains("date"),
            "unexpected message for {:?}: {}",
            input,
            outcome.error_message
        );
    }
}

#[test]
fn test_all_separator_renderings_validate_alike() {
    let digits_only = is_valid_at("199001010017");
    for input in ["19900101-0017", "199001010017", "19900101+0017"] {
        assert_eq!(is_valid_at(input), digits_only, "separator variant {:?}", input);
    }
}

#[test]
fn test_twelve_digit_form_agrees_with_its_ten_digit_suffix() {
    assert_eq!(is_valid_at("199001010017"), is_valid_at("9001010017"));
    assert_eq!(is_valid_at("198112189876"), is_valid_at("8112189876"));
    // Agreement also holds for a broken check digit.
    assert_eq!(is_valid_at("199001010018"), is_valid_at("9001010018"));
}

#[test]
fn test_altered_check_digit_is_a_checksum_error() {
    let outcome = validate_at("199001010018", &clock());
    assert!(!outcome.is_valid);
    assert!(outcome.error_message.contains("checksum"));

    for wrong in ["0", "1", "2", "3", "4", "5", "6", "8", "9"] {
        let input = format!("19900101001{}", wrong);
        assert!(!is_valid_at(&input), "expected {:?} to be invalid", input);
    }
}

#[test]
fn test_valid_inputs_pass() {
    for input in [
        "199001010017",
        "19900101-0017",
        "19900101+0017",
        "9001010017",
        "900101-0017",
        "811218-9876",
        "19811218+9876",
    ] {
        assert!(is_valid_at(input), "expected {:?} to be valid", input);
    }
}

#[test]
fn test_valid_outcome_carries_normalized_form_and_birth_date() {
    let outcome = validate_at("19900101-0017", &clock());
    assert!(outcome.is_valid);
    assert_eq!(outcome.normalized, "19900101-0017");
    assert_eq!(outcome.birth_date, NaiveDate::from_ymd_opt(1990, 1, 1));
    assert!(outcome.error_message.is_empty());
}

#[test]
fn test_normalization_keeps_the_detected_separator() {
    assert_eq!(validate_at("19900101+0017", &clock()).normalized, "19900101+0017");
    // No separator normalizes to '-'
    assert_eq!(validate_at("199001010017", &clock()).normalized, "19900101-0017");
}

#[test]
fn test_ten_digit_century_resolution_follows_the_separator() {
    // '-' picks the latest birth date not in the future.
    let hyphen = validate_at("121212-1212", &clock());
    assert_eq!(hyphen.birth_date, NaiveDate::from_ymd_opt(2012, 12, 12));
    assert_eq!(hyphen.normalized, "20121212-1212");

    // '+' reaches back at least a century for the same digits.
    let plus = validate_at("121212+1212", &clock());
    assert_eq!(plus.birth_date, NaiveDate::from_ymd_opt(1912, 12, 12));
    assert_eq!(plus.normalized, "19121212+1212");

    // A '+' year too recent for the 1900s lands in the 1800s.
    let old = validate_at("900101+0017", &clock());
    assert_eq!(old.birth_date, NaiveDate::from_ymd_opt(1890, 1, 1));
}

#[test]
fn test_explicit_century_overrides_separator_resolution() {
    let outcome = validate_at("191212121212", &clock());
    assert_eq!(outcome.birth_date, NaiveDate::from_ymd_opt(1912, 12, 12));
}

#[test]
fn test_gender_hint_follows_the_second_to_last_digit() {
    let male = validate_at("19900101-0017", &clock());
    assert_eq!(male.gender_hint, Some(GenderHint::Male));

    let female = validate_at("19900101-0025", &clock());
    assert!(female.is_valid);
    assert_eq!(female.gender_hint, Some(GenderHint::Female));
}

#[test]
fn test_invalid_outcome_has_no_derived_fields() {
    let outcome = validate_at("199001010018", &clock());
    assert!(!outcome.is_valid);
    assert!(outcome.normalized.is_empty());
    assert!(outcome.birth_date.is_none());
    assert!(outcome.gender_hint.is_none());
    assert!(!outcome.error_message.is_empty());
}

#[test]
fn test_system_clock_entry_point_accepts_explicit_century_inputs() {
    // 12-digit inputs never consult the clock, so the production entry
    // point is deterministic for them.
    let outcome = validate("199001010017");
    assert!(outcome.is_valid);
    assert_eq!(outcome.birth_date, NaiveDate::from_ymd_opt(1990, 1, 1));
}

#[test]
fn test_is_valid_projects_the_full_validation() {
    assert!(is_valid("199001010017"));
    assert!(!is_valid("199001010018"));
    assert!(!is_valid("123"));
}

#[test]
fn test_outcome_serializes_to_json() {
    let outcome = validate_at("19900101-0017", &clock());
    let json: serde_json::Value = serde_json::from_str(&serde_json::to_string(&outcome).unwrap()).unwrap();
    assert_eq!(json["is_valid"], true);
    assert_eq!(json["normalized"], "19900101-0017");
    assert_eq!(json["birth_date"], "1990-01-01");
    assert_eq!(json["gender_hint"], "male");
    assert_eq!(json["error_message"], "");
}
