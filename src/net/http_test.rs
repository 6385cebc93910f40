use super::*;

#[test]
fn login_and_register_paths_are_exempt() {
    assert!(is_auth_exempt("http://localhost:8080/auth/login"));
    assert!(is_auth_exempt("http://localhost:8080/auth/register"));
    assert!(is_auth_exempt("/auth/login?sessionExpired=true"));
}

#[test]
fn api_paths_are_not_exempt() {
    assert!(!is_auth_exempt("http://localhost:8080/api/v1/hospitais"));
    assert!(!is_auth_exempt("http://localhost:8080/api/v1/plantoes/7/candidatar-se"));
}

#[test]
fn bearer_header_formats_credential() {
    assert_eq!(bearer_header("abc"), "Bearer abc");
}

#[test]
fn force_logout_only_on_401_outside_exempt_paths() {
    assert!(should_force_logout(401, "/api/v1/plantoes"));
    assert!(!should_force_logout(401, "/auth/login"));
    assert!(!should_force_logout(403, "/api/v1/plantoes"));
    assert!(!should_force_logout(500, "/api/v1/plantoes"));
}

#[test]
fn session_expired_redirect_targets_login_with_flag() {
    assert!(SESSION_EXPIRED_REDIRECT.starts_with("/auth/login"));
    assert!(SESSION_EXPIRED_REDIRECT.contains("sessionExpired=true"));
}

#[test]
fn error_message_prefers_backend_message_field() {
    let body = r#"{"message":"CNPJ já cadastrado"}"#;
    assert_eq!(error_message_from_body(400, body), "CNPJ já cadastrado");
}

#[test]
fn error_message_falls_back_to_status_line() {
    assert_eq!(error_message_from_body(500, "not json"), "Erro 500");
    assert_eq!(error_message_from_body(404, r#"{"detail":"x"}"#), "Erro 404");
    assert_eq!(error_message_from_body(400, ""), "Erro 400");
}

#[test]
fn api_error_exposes_status_only_for_http_failures() {
    let err = ApiError::Status { status: 401, message: "x".to_owned() };
    assert_eq!(err.status(), Some(401));
    assert_eq!(ApiError::Network("down".to_owned()).status(), None);
    assert_eq!(ApiError::Unavailable.status(), None);
}
