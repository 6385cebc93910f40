//! Notification REST endpoints over `/api/v1/notifications`.
//!
//! The live push channel is [`crate::net::ws`]; these calls only seed and
//! reset the unread counter.

use crate::auth::session::Session;
use crate::config;
use crate::net::http::{self, ApiError};
use crate::net::types::UnreadCount;

fn base_url() -> String {
    format!("{}/api/v1/notifications", config::api_base())
}

pub async fn unread_count(session: Session) -> Result<UnreadCount, ApiError> {
    http::get_json(session, &format!("{}/unread-count", base_url())).await
}

pub async fn marcar_todas_lidas(session: Session) -> Result<(), ApiError> {
    http::put_unit(session, &format!("{}/read-all", base_url()), &serde_json::json!({})).await
}
