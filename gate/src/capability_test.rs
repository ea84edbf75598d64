use super::*;

#[test]
fn fixed_clock_returns_its_instant() {
    assert_eq!(FixedClock(42).now_millis(), 42);
}

#[test]
fn system_clock_is_after_2020() {
    // 2020-01-01T00:00:00Z
    assert!(SystemClock.now_millis() > 1_577_836_800_000);
}

#[test]
fn static_reader_returns_configured_token() {
    assert_eq!(StaticTokenReader::new("a.b.c").read_token().as_deref(), Some("a.b.c"));
    assert_eq!(StaticTokenReader::empty().read_token(), None);
}
