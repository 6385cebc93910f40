use super::*;
use base64::Engine as _;
use base64::engine::general_purpose;

fn medico_token() -> String {
    let payload = serde_json::json!({
        "sub": "joao@example.com",
        "fullName": "João Lima",
        "scope": ["ROLE_MEDICO"],
    });
    let body = general_purpose::URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("hdr.{body}.sig")
}

#[test]
fn from_token_none_is_logged_out() {
    let state = SessionState::from_token(None);
    assert!(!state.is_authenticated());
    assert!(state.roles().is_empty());
    assert_eq!(state.display_name(), None);
    assert_eq!(state.subject_email(), None);
}

#[test]
fn from_token_decodes_claims() {
    let token = medico_token();
    let state = SessionState::from_token(Some(&token));
    assert!(state.is_authenticated());
    assert_eq!(state.roles(), ["ROLE_MEDICO"]);
    assert!(state.has_role("medico"));
    assert_eq!(state.display_name(), Some("João Lima"));
    assert_eq!(state.subject_email(), Some("joao@example.com"));
}

#[test]
fn malformed_token_is_authenticated_but_roleless() {
    let state = SessionState::from_token(Some("garbage"));
    assert!(state.is_authenticated());
    assert!(state.roles().is_empty());
    assert!(!state.has_role("admin"));
}

#[test]
fn apply_login_publishes_flag_and_claims_together() {
    token::clear();
    let session = RwSignal::new(SessionState::logged_out());
    let token_value = medico_token();

    apply_login(session, &token_value);

    let state = session.get_untracked();
    assert!(state.is_authenticated());
    assert!(state.has_role("MEDICO"));
    assert_eq!(token::read(), Some(token_value));
    token::clear();
}

#[test]
fn apply_logout_clears_storage_and_state() {
    let session = RwSignal::new(SessionState::logged_out());
    apply_login(session, &medico_token());

    apply_logout(session);

    assert!(!session.get_untracked().is_authenticated());
    assert_eq!(token::read(), None);
}

#[test]
fn apply_logout_twice_stays_logged_out() {
    let session = RwSignal::new(SessionState::logged_out());
    apply_login(session, &medico_token());

    apply_logout(session);
    apply_logout(session);

    assert!(!session.get_untracked().is_authenticated());
    assert_eq!(token::read(), None);
}

#[test]
fn init_session_picks_up_persisted_token() {
    token::save(&medico_token());
    let state = init_session();
    assert!(state.is_authenticated());
    assert!(state.has_role("medico"));
    token::clear();

    assert!(!init_session().is_authenticated());
}
