use super::*;

fn roles(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_owned()).collect()
}

#[test]
fn normalize_prepends_prefix_and_uppercases() {
    assert_eq!(normalize_role("admin"), "ROLE_ADMIN");
    assert_eq!(normalize_role("Medico"), "ROLE_MEDICO");
}

#[test]
fn normalize_keeps_existing_prefix_case_insensitively() {
    assert_eq!(normalize_role("ROLE_ADMIN"), "ROLE_ADMIN");
    assert_eq!(normalize_role("role_admin"), "ROLE_ADMIN");
}

#[test]
fn normalize_empty_name_is_bare_prefix() {
    assert_eq!(normalize_role(""), "ROLE_");
}

#[test]
fn has_role_matches_bare_and_prefixed_spellings() {
    let granted = roles(&["ROLE_ADMIN"]);
    assert!(has_role(&granted, "admin"));
    assert!(has_role(&granted, "ADMIN"));
    assert!(has_role(&granted, "ROLE_ADMIN"));
    assert!(has_role(&granted, "role_admin"));
}

#[test]
fn has_role_does_not_match_substrings() {
    let granted = roles(&["ROLE_ADMIN"]);
    assert!(!has_role(&granted, "hospital_admin"));
    assert!(!has_role(&granted, "adm"));
}

#[test]
fn has_role_is_case_insensitive_on_the_granted_side() {
    let granted = roles(&["role_medico"]);
    assert!(has_role(&granted, "MEDICO"));
}

#[test]
fn has_role_empty_inputs_grant_nothing() {
    assert!(!has_role(&[], "admin"));
    assert!(!has_role(&roles(&["ROLE_ADMIN"]), ""));
}
