use super::*;

#[test]
fn valid_form_builds_request_with_seconds() {
    let req = validate_plantao_form(
        "2",
        " Cardiologia ",
        "2026-08-10T08:00",
        "2026-08-10T20:00",
        "1500",
    )
    .expect("valid");
    assert_eq!(req.hospital_id, 2);
    assert_eq!(req.especialidade, "Cardiologia");
    assert_eq!(req.inicio, "2026-08-10T08:00:00");
    assert_eq!(req.fim, "2026-08-10T20:00:00");
    assert!((req.valor - 1500.0).abs() < f64::EPSILON);
}

#[test]
fn missing_hospital_is_rejected_first() {
    assert_eq!(
        validate_plantao_form("", "Cardio", "a", "b", "1"),
        Err("Selecione um hospital.")
    );
}

#[test]
fn start_must_precede_end() {
    assert_eq!(
        validate_plantao_form("1", "Cardio", "2026-08-10T20:00", "2026-08-10T08:00", "100"),
        Err("O início deve ser anterior ao fim.")
    );
    assert_eq!(
        validate_plantao_form("1", "Cardio", "2026-08-10T08:00", "2026-08-10T08:00", "100"),
        Err("O início deve ser anterior ao fim.")
    );
}

#[test]
fn value_accepts_comma_decimal_and_rejects_zero() {
    let req =
        validate_plantao_form("1", "Cardio", "2026-08-10T08:00", "2026-08-10T20:00", "1234,56")
            .expect("valid");
    assert!((req.valor - 1234.56).abs() < 1e-9);

    assert_eq!(
        validate_plantao_form("1", "Cardio", "2026-08-10T08:00", "2026-08-10T20:00", "0"),
        Err("Informe um valor maior que zero.")
    );
    assert_eq!(
        validate_plantao_form("1", "Cardio", "2026-08-10T08:00", "2026-08-10T20:00", "abc"),
        Err("Informe um valor maior que zero.")
    );
}

#[test]
fn to_iso_seconds_only_touches_minute_precision() {
    assert_eq!(to_iso_seconds("2026-08-10T08:00"), "2026-08-10T08:00:00");
    assert_eq!(to_iso_seconds("2026-08-10T08:00:30"), "2026-08-10T08:00:30");
}
