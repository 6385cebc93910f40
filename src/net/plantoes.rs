//! Shift postings over `/api/v1/plantoes`.

#[cfg(test)]
#[path = "plantoes_test.rs"]
mod plantoes_test;

use crate::auth::session::Session;
use crate::config;
use crate::net::http::{self, ApiError};
use crate::net::types::{Page, Plantao, PlantaoRequest};

/// Search filters for the paginated "disponíveis" listing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlantaoFiltros {
    pub hospital_id: Option<i64>,
    pub data: Option<String>,
}

fn base_url() -> String {
    format!("{}/api/v1/plantoes", config::api_base())
}

/// Query URL for available shifts with pagination and optional filters.
pub fn disponiveis_url(base: &str, filtros: &PlantaoFiltros, page: i64, size: i64) -> String {
    let mut url = format!("{base}/disponiveis?page={page}&size={size}");
    if let Some(hospital_id) = filtros.hospital_id {
        url.push_str(&format!("&hospitalId={hospital_id}"));
    }
    if let Some(data) = filtros.data.as_deref() {
        if !data.is_empty() {
            url.push_str("&data=");
            url.push_str(data);
        }
    }
    url
}

/// Shifts assigned to the logged-in physician.
pub async fn meus_plantoes(session: Session) -> Result<Vec<Plantao>, ApiError> {
    http::get_json(session, &format!("{}/meus-plantoes", base_url())).await
}

pub async fn buscar(session: Session, id: i64) -> Result<Plantao, ApiError> {
    http::get_json(session, &format!("{}/{id}", base_url())).await
}

pub async fn buscar_disponiveis(
    session: Session,
    filtros: &PlantaoFiltros,
    page: i64,
    size: i64,
) -> Result<Page<Plantao>, ApiError> {
    let url = disponiveis_url(&base_url(), filtros, page, size);
    http::get_json(session, &url).await
}

/// Apply for a shift; the backend returns the updated posting.
pub async fn candidatar_se(session: Session, plantao_id: i64) -> Result<Plantao, ApiError> {
    http::post_empty(session, &format!("{}/{plantao_id}/candidatar-se", base_url())).await
}

pub async fn criar(session: Session, plantao: &PlantaoRequest) -> Result<Plantao, ApiError> {
    http::post_json(session, &base_url(), plantao).await
}
