use super::*;

#[test]
fn valid_form_builds_request_with_trimmed_fields() {
    let req = validate_hospital_form(
        " Hospital Central ",
        "12.345.678/0001-90",
        "",
        "(21) 99999-0000",
        "  ",
    )
    .expect("valid");
    assert_eq!(req.nome, "Hospital Central");
    assert_eq!(req.endereco, None);
    assert_eq!(req.telefone2, None);
}

#[test]
fn required_fields_are_enforced() {
    let err = Err("Preencha nome, CNPJ e telefone principal.");
    assert_eq!(validate_hospital_form("", "c", "", "t", ""), err);
    assert_eq!(validate_hospital_form("n", " ", "", "t", ""), err);
    assert_eq!(validate_hospital_form("n", "c", "", "", ""), err);
}

#[test]
fn optional_fields_survive_when_present() {
    let req = validate_hospital_form("n", "c", "Rua A, 1", "t1", "t2").expect("valid");
    assert_eq!(req.endereco.as_deref(), Some("Rua A, 1"));
    assert_eq!(req.telefone2.as_deref(), Some("t2"));
}
