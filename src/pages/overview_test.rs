use super::*;
use base64::Engine as _;
use base64::engine::general_purpose;

fn session_with_roles(roles: &[&str]) -> SessionState {
    let payload = serde_json::json!({ "sub": "u@x.com", "scope": roles });
    let body = general_purpose::URL_SAFE_NO_PAD.encode(payload.to_string());
    SessionState::from_token(Some(&format!("hdr.{body}.sig")))
}

#[test]
fn admins_and_schedulers_get_admin_stats() {
    for role in ["ROLE_ADMIN", "ROLE_HOSPITAL_ADMIN", "ROLE_ESCALISTA"] {
        let state = session_with_roles(&[role]);
        assert_eq!(dashboard_audience(&state), DashboardAudience::AdminLike);
    }
}

#[test]
fn medico_gets_medico_stats() {
    let state = session_with_roles(&["ROLE_MEDICO"]);
    assert_eq!(dashboard_audience(&state), DashboardAudience::Medico);
}

#[test]
fn admin_wins_over_combined_accounts() {
    let state = session_with_roles(&["ROLE_MEDICO", "ROLE_ADMIN"]);
    assert_eq!(dashboard_audience(&state), DashboardAudience::AdminLike);
}

#[test]
fn roleless_session_sees_no_stats() {
    let state = session_with_roles(&[]);
    assert_eq!(dashboard_audience(&state), DashboardAudience::Nenhum);
}
