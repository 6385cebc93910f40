//! Hospital CRUD over `/api/v1/hospitais`.

use crate::auth::session::Session;
use crate::config;
use crate::net::http::{self, ApiError};
use crate::net::types::{Hospital, HospitalRequest};

fn base_url() -> String {
    format!("{}/api/v1/hospitais", config::api_base())
}

pub async fn listar(session: Session) -> Result<Vec<Hospital>, ApiError> {
    http::get_json(session, &base_url()).await
}

pub async fn buscar(session: Session, id: i64) -> Result<Hospital, ApiError> {
    http::get_json(session, &format!("{}/{id}", base_url())).await
}

pub async fn criar(session: Session, hospital: &HospitalRequest) -> Result<Hospital, ApiError> {
    http::post_json(session, &base_url(), hospital).await
}

pub async fn atualizar(
    session: Session,
    id: i64,
    hospital: &HospitalRequest,
) -> Result<Hospital, ApiError> {
    http::put_json(session, &format!("{}/{id}", base_url()), hospital).await
}

pub async fn excluir(session: Session, id: i64) -> Result<(), ApiError> {
    http::delete(session, &format!("{}/{id}", base_url())).await
}
