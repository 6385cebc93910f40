use super::*;
use base64::Engine as _;
use base64::engine::general_purpose;

fn session_from(payload: serde_json::Value) -> SessionState {
    let body = general_purpose::URL_SAFE_NO_PAD.encode(payload.to_string());
    SessionState::from_token(Some(&format!("hdr.{body}.sig")))
}

#[test]
fn prefers_full_name() {
    let state = session_from(serde_json::json!({
        "sub": "ana@example.com",
        "fullName": "Ana Souza",
    }));
    assert_eq!(header_user_name(&state), "Ana Souza");
}

#[test]
fn falls_back_to_subject_email() {
    let state = session_from(serde_json::json!({ "sub": "ana@example.com" }));
    assert_eq!(header_user_name(&state), "ana@example.com");
}

#[test]
fn undecodable_token_gets_neutral_name() {
    let state = SessionState::from_token(Some("garbage"));
    assert_eq!(header_user_name(&state), "Usuário");
}

#[test]
fn logged_out_gets_neutral_name() {
    assert_eq!(header_user_name(&SessionState::logged_out()), "Usuário");
}
