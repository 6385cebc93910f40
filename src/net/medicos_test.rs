use super::*;

#[test]
fn disponibilidade_url_requires_window_only() {
    assert_eq!(
        disponibilidade_url("/api/v1/medicos", "2026-08-10T08:00", "2026-08-10T20:00", None),
        "/api/v1/medicos/disponibilidade?inicio=2026-08-10T08:00&fim=2026-08-10T20:00"
    );
}

#[test]
fn disponibilidade_url_appends_especialidade_when_set() {
    let url = disponibilidade_url("/m", "a", "b", Some("Cardiologia"));
    assert_eq!(url, "/m/disponibilidade?inicio=a&fim=b&especialidade=Cardiologia");
}

#[test]
fn disponibilidade_url_skips_empty_especialidade() {
    let url = disponibilidade_url("/m", "a", "b", Some(""));
    assert_eq!(url, "/m/disponibilidade?inicio=a&fim=b");
}
