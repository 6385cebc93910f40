use super::*;

#[test]
fn normalize_base_strips_trailing_slash() {
    assert_eq!(normalize_base("http://localhost:8080/"), "http://localhost:8080");
    assert_eq!(normalize_base("https://api.example.com///"), "https://api.example.com");
}

#[test]
fn normalize_base_trims_whitespace() {
    assert_eq!(normalize_base("  http://localhost:8080 "), "http://localhost:8080");
}

#[test]
fn normalize_base_keeps_clean_origin_unchanged() {
    assert_eq!(normalize_base("https://plantao.example.com"), "https://plantao.example.com");
}

#[test]
fn api_base_has_no_trailing_slash() {
    assert!(!api_base().ends_with('/'));
}
