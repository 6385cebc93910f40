use super::*;

#[test]
fn montar_filtros_parses_hospital_id() {
    let filtros = montar_filtros("2", "");
    assert_eq!(filtros.hospital_id, Some(2));
    assert_eq!(filtros.data, None);
}

#[test]
fn montar_filtros_empty_select_means_all_hospitals() {
    assert_eq!(montar_filtros("", "").hospital_id, None);
    assert_eq!(montar_filtros("  ", "").hospital_id, None);
}

#[test]
fn montar_filtros_keeps_non_empty_date() {
    let filtros = montar_filtros("", "2026-08-10");
    assert_eq!(filtros.data.as_deref(), Some("2026-08-10"));
}

#[test]
fn montar_filtros_ignores_non_numeric_hospital() {
    assert_eq!(montar_filtros("todos", "").hospital_id, None);
}
