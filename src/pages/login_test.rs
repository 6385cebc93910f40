use super::*;

#[test]
fn validate_trims_and_builds_request() {
    let req = validate_login_input("  ana@example.com  ", " s3nha ").expect("valid");
    assert_eq!(req.email, "ana@example.com");
    assert_eq!(req.password, "s3nha");
}

#[test]
fn validate_requires_both_fields() {
    assert_eq!(validate_login_input("", "senha"), Err("Informe email e senha."));
    assert_eq!(validate_login_input("a@b.com", "   "), Err("Informe email e senha."));
}

#[test]
fn unauthorized_maps_to_bad_credentials_message() {
    let err = ApiError::Status { status: 401, message: "Erro 401".to_owned() };
    assert_eq!(
        login_error_message(&err),
        "Credenciais inválidas. Verifique seu email e senha."
    );
}

#[test]
fn backend_message_is_passed_through_for_other_statuses() {
    let err = ApiError::Status { status: 423, message: "Conta bloqueada".to_owned() };
    assert_eq!(login_error_message(&err), "Conta bloqueada");
}

#[test]
fn network_failures_get_generic_message() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(
        login_error_message(&err),
        "Ocorreu um erro ao tentar fazer login. Tente novamente mais tarde."
    );
}
