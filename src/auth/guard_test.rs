use super::*;
use base64::Engine as _;
use base64::engine::general_purpose;

fn session_with_roles(roles: &[&str]) -> SessionState {
    let payload = serde_json::json!({ "sub": "u@x.com", "scope": roles });
    let body = general_purpose::URL_SAFE_NO_PAD.encode(payload.to_string());
    SessionState::from_token(Some(&format!("hdr.{body}.sig")))
}

#[test]
fn unauthenticated_is_sent_to_login_before_role_check() {
    let state = SessionState::logged_out();
    assert_eq!(evaluate(&state, &["ADMIN"]), GuardOutcome::RedirectToLogin);
    assert_eq!(evaluate(&state, &[]), GuardOutcome::RedirectToLogin);
}

#[test]
fn under_privileged_is_sent_to_overview_not_login() {
    let state = session_with_roles(&["ROLE_MEDICO"]);
    assert_eq!(
        evaluate(&state, &["ADMIN", "HOSPITAL_ADMIN"]),
        GuardOutcome::RedirectToOverview
    );
}

#[test]
fn matching_role_allows() {
    let state = session_with_roles(&["ROLE_ADMIN"]);
    assert_eq!(evaluate(&state, &["ADMIN"]), GuardOutcome::Allow);
}

#[test]
fn any_single_role_match_suffices() {
    let state = session_with_roles(&["ROLE_ESCALISTA"]);
    assert_eq!(
        evaluate(&state, &["ADMIN", "HOSPITAL_ADMIN", "ESCALISTA"]),
        GuardOutcome::Allow
    );
}

#[test]
fn no_required_roles_only_needs_authentication() {
    let state = session_with_roles(&[]);
    assert_eq!(evaluate(&state, &[]), GuardOutcome::Allow);
}

#[test]
fn roleless_session_fails_any_role_requirement() {
    // Malformed token: authenticated, but no claims decoded.
    let state = SessionState::from_token(Some("garbage"));
    assert_eq!(evaluate(&state, &["MEDICO"]), GuardOutcome::RedirectToOverview);
}
