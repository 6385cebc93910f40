//! Specialty catalog over `/api/v1/especialidades`.

use crate::auth::session::Session;
use crate::config;
use crate::net::http::{self, ApiError};
use crate::net::types::{Especialidade, EspecialidadeRequest};

fn base_url() -> String {
    format!("{}/api/v1/especialidades", config::api_base())
}

pub async fn listar(session: Session) -> Result<Vec<Especialidade>, ApiError> {
    http::get_json(session, &base_url()).await
}

pub async fn criar(
    session: Session,
    especialidade: &EspecialidadeRequest,
) -> Result<Especialidade, ApiError> {
    http::post_json(session, &base_url(), especialidade).await
}
