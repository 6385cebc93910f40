use super::*;

#[test]
fn datetime_rearranges_iso_to_br() {
    assert_eq!(format_datetime_br("2026-08-10T08:30:00"), "10/08/2026 08:30");
    assert_eq!(format_datetime_br("2026-12-01T23:05:59.123Z"), "01/12/2026 23:05");
}

#[test]
fn datetime_passes_through_non_iso_input() {
    assert_eq!(format_datetime_br("amanhã"), "amanhã");
    assert_eq!(format_datetime_br(""), "");
    assert_eq!(format_datetime_br("10/08/2026"), "10/08/2026");
}

#[test]
fn currency_groups_thousands_and_uses_comma() {
    assert_eq!(format_currency_brl(1234.5), "R$ 1.234,50");
    assert_eq!(format_currency_brl(0.0), "R$ 0,00");
    assert_eq!(format_currency_brl(999.99), "R$ 999,99");
    assert_eq!(format_currency_brl(1_000_000.0), "R$ 1.000.000,00");
}

#[test]
fn currency_rounds_to_cents() {
    assert_eq!(format_currency_brl(10.006), "R$ 10,01");
    assert_eq!(format_currency_brl(10.004), "R$ 10,00");
}

#[test]
fn currency_handles_negative_values() {
    assert_eq!(format_currency_brl(-1500.0), "-R$ 1.500,00");
}
