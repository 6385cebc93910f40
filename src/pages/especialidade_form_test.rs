use super::*;

#[test]
fn trims_and_accepts_plain_names() {
    let req = validate_especialidade_form("  Cardiologia  ").expect("valid");
    assert_eq!(req.nome, "Cardiologia");
}

#[test]
fn accepts_accents_spaces_and_hyphens() {
    assert!(validate_especialidade_form("Clínica Médico-Cirúrgica").is_ok());
}

#[test]
fn rejects_empty_and_symbolic_names() {
    assert!(validate_especialidade_form("   ").is_err());
    assert!(validate_especialidade_form("Cardio123").is_err());
    assert!(validate_especialidade_form("UTI!").is_err());
}
