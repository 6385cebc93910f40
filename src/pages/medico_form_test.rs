use super::*;

#[test]
fn valid_creation_requires_password() {
    let req = validate_medico_form("Dr. Pedro", "CRM/RJ 12345", "3", "p@x.com", "s3gura!", false)
        .expect("valid");
    assert_eq!(req.especialidade_id, 3);
    assert_eq!(req.password.as_deref(), Some("s3gura!"));
}

#[test]
fn creation_without_password_is_rejected() {
    assert_eq!(
        validate_medico_form("Dr. Pedro", "CRM 1", "3", "p@x.com", "", false),
        Err("Informe uma senha com pelo menos 6 caracteres.")
    );
    assert_eq!(
        validate_medico_form("Dr. Pedro", "CRM 1", "3", "p@x.com", "curta", false),
        Err("Informe uma senha com pelo menos 6 caracteres.")
    );
}

#[test]
fn edit_mode_allows_empty_password() {
    let req = validate_medico_form("Dr. Pedro", "CRM 1", "3", "p@x.com", "", true).expect("valid");
    assert_eq!(req.password, None);
}

#[test]
fn especialidade_must_be_selected() {
    assert_eq!(
        validate_medico_form("Dr. Pedro", "CRM 1", "", "p@x.com", "s3gura!", false),
        Err("Selecione uma especialidade.")
    );
}

#[test]
fn identity_fields_are_required() {
    assert_eq!(
        validate_medico_form("", "CRM 1", "3", "p@x.com", "s3gura!", false),
        Err("Preencha nome, CRM e email.")
    );
}
