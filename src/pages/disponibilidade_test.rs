use super::*;

fn row(di: &str, hi: &str, df: &str, hf: &str) -> PeriodoRow {
    PeriodoRow {
        data_inicio: di.to_owned(),
        hora_inicio: hi.to_owned(),
        data_fim: df.to_owned(),
        hora_fim: hf.to_owned(),
    }
}

#[test]
fn combine_joins_date_and_time_with_seconds() {
    assert_eq!(
        combine_date_time("2026-08-10", "08:00"),
        Some("2026-08-10T08:00:00".to_owned())
    );
}

#[test]
fn combine_requires_both_parts() {
    assert_eq!(combine_date_time("", "08:00"), None);
    assert_eq!(combine_date_time("2026-08-10", "  "), None);
}

#[test]
fn montar_periodos_builds_iso_windows() {
    let periodos =
        montar_periodos(&[row("2026-08-10", "08:00", "2026-08-10", "20:00")]).expect("valid");
    assert_eq!(periodos.len(), 1);
    assert_eq!(periodos[0].inicio, "2026-08-10T08:00:00");
    assert_eq!(periodos[0].fim, "2026-08-10T20:00:00");
    assert_eq!(periodos[0].id, None);
}

#[test]
fn montar_periodos_rejects_incomplete_rows() {
    assert_eq!(
        montar_periodos(&[row("2026-08-10", "", "2026-08-10", "20:00")]),
        Err("Preencha todos os campos do período.")
    );
}

#[test]
fn montar_periodos_rejects_inverted_windows() {
    assert_eq!(
        montar_periodos(&[row("2026-08-11", "08:00", "2026-08-10", "20:00")]),
        Err("O início de cada período deve ser anterior ao fim.")
    );
}

#[test]
fn montar_periodos_rejects_empty_form() {
    assert_eq!(montar_periodos(&[]), Err("Adicione pelo menos um período."));
}

#[test]
fn montar_periodos_spanning_midnight_is_valid() {
    let periodos =
        montar_periodos(&[row("2026-08-10", "19:00", "2026-08-11", "07:00")]).expect("valid");
    assert_eq!(periodos[0].fim, "2026-08-11T07:00:00");
}
