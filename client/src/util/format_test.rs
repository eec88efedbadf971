use super::*;

#[test]
fn money_renders_two_decimals() {
    assert_eq!(money(1234.5), "\u{20B9} 1234.50");
    assert_eq!(money(0.0), "\u{20B9} 0.00");
    assert_eq!(money(99.999), "\u{20B9} 100.00");
}

#[test]
fn opt_money_falls_back_to_placeholder() {
    assert_eq!(opt_money(Some(5.0)), "\u{20B9} 5.00");
    assert_eq!(opt_money(None), MISSING);
}

#[test]
fn opt_text_trims_and_falls_back() {
    assert_eq!(opt_text(Some(" savings ")), "savings");
    assert_eq!(opt_text(Some("  ")), MISSING);
    assert_eq!(opt_text(None), MISSING);
}

#[test]
fn recipient_combines_account_and_bank() {
    assert_eq!(recipient(Some("AC200"), Some("First National")), "AC200 (First National)");
    assert_eq!(recipient(Some(" AC200 "), None), "AC200");
    assert_eq!(recipient(None, Some("First National")), "First National");
    assert_eq!(recipient(None, None), MISSING);
    assert_eq!(recipient(Some("  "), Some("")), MISSING);
}

#[test]
fn timestamp_normalizes_parseable_values() {
    assert_eq!(timestamp(Some("2024-03-07T09:30:15")), "2024-03-07 09:30");
    assert_eq!(timestamp(Some("2024-03-07 09:30:15.123")), "2024-03-07 09:30");
    assert_eq!(timestamp(Some("2024-03-07")), "2024-03-07 00:00");
}

#[test]
fn timestamp_keeps_unparseable_values_verbatim() {
    assert_eq!(timestamp(Some("last tuesday")), "last tuesday");
}

#[test]
fn timestamp_blank_is_placeholder() {
    assert_eq!(timestamp(None), MISSING);
    assert_eq!(timestamp(Some("   ")), MISSING);
}
