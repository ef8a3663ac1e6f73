use super::*;

#[test]
fn defaults_match_tagger_thresholds() {
    let cfg = MatchConfig::default();
    assert_eq!(cfg.phash_threshold, 8);
    assert!((cfg.duration_tolerance_secs - 5.0).abs() < f64::EPSILON);
}

#[test]
fn parse_threshold_defaults_when_unset() {
    assert_eq!(parse_threshold(None), Ok(DEFAULT_PHASH_THRESHOLD));
    assert_eq!(parse_threshold(Some(" 12 ")), Ok(12));
}

#[test]
fn parse_threshold_rejects_garbage() {
    let err = parse_threshold(Some("eight")).unwrap_err();
    assert_eq!(err.error_code(), "E_CONFIG_PARSE");
    assert!(err.to_string().contains(PHASH_THRESHOLD_ENV));
}

#[test]
fn parse_tolerance_rejects_negative_and_non_finite() {
    assert!(parse_tolerance(Some("-1")).is_err());
    assert!(parse_tolerance(Some("NaN")).is_err());
    assert!(parse_tolerance(Some("abc")).is_err());
    assert_eq!(parse_tolerance(Some("2.5")), Ok(2.5));
}

#[test]
fn overrides_replace_only_present_values() {
    let cfg = MatchConfig::default().with_phash_threshold(Some(4)).with_duration_tolerance(None);
    assert_eq!(cfg.phash_threshold, 4);
    assert!((cfg.duration_tolerance_secs - DEFAULT_DURATION_TOLERANCE_SECS).abs() < f64::EPSILON);
}

/// The only test in this crate that touches these variables.
#[test]
fn from_env_reads_and_validates_variables() {
    unsafe {
        std::env::set_var(PHASH_THRESHOLD_ENV, "10");
        std::env::set_var(DURATION_TOLERANCE_ENV, "3");
    }
    let cfg = MatchConfig::from_env().expect("config");
    assert_eq!(cfg.phash_threshold, 10);
    assert!((cfg.duration_tolerance_secs - 3.0).abs() < f64::EPSILON);

    unsafe { std::env::set_var(PHASH_THRESHOLD_ENV, "-3") };
    assert!(MatchConfig::from_env().is_err());

    unsafe {
        std::env::remove_var(PHASH_THRESHOLD_ENV);
        std::env::remove_var(DURATION_TOLERANCE_ENV);
    }
    assert_eq!(MatchConfig::from_env().expect("config"), MatchConfig::default());
}
