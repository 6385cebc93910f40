//! Role-split dashboard statistics over `/api/v1/dashboard/stats`.

use crate::auth::session::Session;
use crate::config;
use crate::net::http::{self, ApiError};
use crate::net::types::{AdminStats, MedicoStats};

fn base_url() -> String {
    format!("{}/api/v1/dashboard/stats", config::api_base())
}

pub async fn admin_stats(session: Session) -> Result<AdminStats, ApiError> {
    http::get_json(session, &format!("{}/admin", base_url())).await
}

pub async fn medico_stats(session: Session) -> Result<MedicoStats, ApiError> {
    http::get_json(session, &format!("{}/medico", base_url())).await
}
