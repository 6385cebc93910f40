//! Physician roster and availability over `/api/v1/medicos`.

#[cfg(test)]
#[path = "medicos_test.rs"]
mod medicos_test;

use crate::auth::session::Session;
use crate::config;
use crate::net::http::{self, ApiError};
use crate::net::types::{
    DefinirDisponibilidadeRequest, Medico, MedicoDisponivel, MedicoRequest,
    PeriodoDisponibilidade,
};

fn base_url() -> String {
    format!("{}/api/v1/medicos", config::api_base())
}

/// Query URL for physicians available in a window, optionally narrowed to
/// one specialty.
pub fn disponibilidade_url(base: &str, inicio: &str, fim: &str, especialidade: Option<&str>) -> String {
    let mut url = format!("{base}/disponibilidade?inicio={inicio}&fim={fim}");
    if let Some(especialidade) = especialidade {
        if !especialidade.is_empty() {
            url.push_str("&especialidade=");
            url.push_str(especialidade);
        }
    }
    url
}

pub async fn listar(session: Session) -> Result<Vec<Medico>, ApiError> {
    http::get_json(session, &base_url()).await
}

pub async fn buscar(session: Session, id: i64) -> Result<Medico, ApiError> {
    http::get_json(session, &format!("{}/{id}", base_url())).await
}

pub async fn criar(session: Session, medico: &MedicoRequest) -> Result<Medico, ApiError> {
    http::post_json(session, &base_url(), medico).await
}

pub async fn atualizar(session: Session, id: i64, medico: &MedicoRequest) -> Result<Medico, ApiError> {
    http::put_json(session, &format!("{}/{id}", base_url()), medico).await
}

pub async fn find_disponiveis(
    session: Session,
    inicio: &str,
    fim: &str,
    especialidade: Option<&str>,
) -> Result<Vec<MedicoDisponivel>, ApiError> {
    let url = disponibilidade_url(&base_url(), inicio, fim, especialidade);
    http::get_json(session, &url).await
}

/// Availability windows the logged-in physician has declared.
pub async fn minha_disponibilidade(session: Session) -> Result<Vec<PeriodoDisponibilidade>, ApiError> {
    http::get_json(session, &format!("{}/minha-disponibilidade", base_url())).await
}

pub async fn salvar_minha_disponibilidade(
    session: Session,
    periodos: Vec<PeriodoDisponibilidade>,
) -> Result<(), ApiError> {
    let request = DefinirDisponibilidadeRequest { periodos };
    http::post_unit(session, &format!("{}/minha-disponibilidade", base_url()), &request).await
}

pub async fn excluir_disponibilidade(session: Session, periodo_id: i64) -> Result<(), ApiError> {
    http::delete(session, &format!("{}/minha-disponibilidade/{periodo_id}", base_url())).await
}
