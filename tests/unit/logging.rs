use super::*;

#[test]
fn missing_or_blank_directive_uses_crate_default() {
    for directive in [None, Some(""), Some("   ")] {
        let (filter, rejected) = filter_from(directive);
        assert_eq!(filter.to_string(), "sponsor=info");
        assert!(rejected.is_none());
    }
}

#[test]
fn valid_directive_is_used_as_is() {
    let (filter, rejected) = filter_from(Some(" sponsor=debug "));
    assert_eq!(filter.to_string(), "sponsor=debug");
    assert!(rejected.is_none());
}

#[test]
fn invalid_directive_falls_back_and_is_reported() {
    let (filter, rejected) = filter_from(Some("sponsor=loud"));
    assert_eq!(filter.to_string(), "sponsor=info");
    assert_eq!(rejected.as_deref(), Some("sponsor=loud"));
}

#[test]
fn log_file_is_named_after_the_crate() {
    assert_eq!(LOG_FILE_PREFIX, "sponsor.log");
}
