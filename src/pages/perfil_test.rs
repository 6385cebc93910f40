use super::*;

#[test]
fn minimal_update_keeps_password_and_medico_fields_out() {
    let req = validate_perfil_form("Ana Souza", "", "", "", false, "", "").expect("valid");
    assert_eq!(req.full_name, "Ana Souza");
    assert_eq!(req.telefone, None);
    assert_eq!(req.password, None);
    assert_eq!(req.crm, None);
    assert_eq!(req.especialidade_id, None);
}

#[test]
fn full_name_is_required() {
    assert_eq!(
        validate_perfil_form("  ", "", "", "", false, "", ""),
        Err("Informe o nome completo.")
    );
}

#[test]
fn password_change_requires_confirmation_match() {
    assert_eq!(
        validate_perfil_form("Ana", "", "s3gura!", "outra", false, "", ""),
        Err("As senhas não conferem.")
    );
    let req = validate_perfil_form("Ana", "", "s3gura!", "s3gura!", false, "", "").expect("valid");
    assert_eq!(req.password.as_deref(), Some("s3gura!"));
}

#[test]
fn short_passwords_are_rejected() {
    assert_eq!(
        validate_perfil_form("Ana", "", "curta", "curta", false, "", ""),
        Err("A nova senha deve ter pelo menos 6 caracteres.")
    );
}

#[test]
fn medico_must_keep_crm() {
    assert_eq!(
        validate_perfil_form("Dr. João", "", "", "", true, "  ", "3"),
        Err("Informe o CRM.")
    );
    let req = validate_perfil_form("Dr. João", "", "", "", true, "CRM/RJ 1", "3").expect("valid");
    assert_eq!(req.crm.as_deref(), Some("CRM/RJ 1"));
    assert_eq!(req.especialidade_id, Some(3));
}

#[test]
fn non_numeric_especialidade_is_dropped() {
    let req = validate_perfil_form("Dr. João", "", "", "", true, "CRM 1", "").expect("valid");
    assert_eq!(req.especialidade_id, None);
}
