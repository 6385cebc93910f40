use super::*;

#[test]
fn disponiveis_url_always_carries_pagination() {
    let url = disponiveis_url("/api/v1/plantoes", &PlantaoFiltros::default(), 0, 10);
    assert_eq!(url, "/api/v1/plantoes/disponiveis?page=0&size=10");
}

#[test]
fn disponiveis_url_appends_set_filters() {
    let filtros = PlantaoFiltros {
        hospital_id: Some(2),
        data: Some("2026-08-10".to_owned()),
    };
    let url = disponiveis_url("/p", &filtros, 1, 20);
    assert_eq!(url, "/p/disponiveis?page=1&size=20&hospitalId=2&data=2026-08-10");
}

#[test]
fn disponiveis_url_skips_empty_data_filter() {
    let filtros = PlantaoFiltros { hospital_id: None, data: Some(String::new()) };
    assert_eq!(disponiveis_url("/p", &filtros, 0, 10), "/p/disponiveis?page=0&size=10");
}
