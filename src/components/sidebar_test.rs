use super::*;
use base64::Engine as _;
use base64::engine::general_purpose;

fn session_with_roles(roles: &[&str]) -> SessionState {
    let payload = serde_json::json!({ "sub": "u@x.com", "scope": roles });
    let body = general_purpose::URL_SAFE_NO_PAD.encode(payload.to_string());
    SessionState::from_token(Some(&format!("hdr.{body}.sig")))
}

#[test]
fn logged_out_sees_nothing() {
    let state = SessionState::logged_out();
    assert!(!visible_for(&state, &[]));
    assert!(!visible_for(&state, &["ADMIN"]));
}

#[test]
fn unrestricted_entries_show_for_any_authenticated_user() {
    let state = session_with_roles(&["ROLE_MEDICO"]);
    assert!(visible_for(&state, &[]));
}

#[test]
fn restricted_entries_follow_the_role_predicate() {
    let medico = session_with_roles(&["ROLE_MEDICO"]);
    assert!(visible_for(&medico, &["MEDICO"]));
    assert!(!visible_for(&medico, &["ADMIN", "HOSPITAL_ADMIN"]));

    let escalista = session_with_roles(&["ROLE_ESCALISTA"]);
    assert!(visible_for(&escalista, &["ADMIN", "HOSPITAL_ADMIN", "ESCALISTA"]));
}
