//! Own-profile endpoints over `/api/v1/profile`.

use crate::auth::session::Session;
use crate::config;
use crate::net::http::{self, ApiError};
use crate::net::types::{ProfileResponse, ProfileUpdateRequest};

fn base_url() -> String {
    format!("{}/api/v1/profile", config::api_base())
}

pub async fn meu_perfil(session: Session) -> Result<ProfileResponse, ApiError> {
    http::get_json(session, &format!("{}/me", base_url())).await
}

pub async fn atualizar_meu_perfil(
    session: Session,
    payload: &ProfileUpdateRequest,
) -> Result<ProfileResponse, ApiError> {
    http::put_json(session, &format!("{}/me", base_url()), payload).await
}
