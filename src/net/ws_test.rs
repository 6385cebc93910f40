use super::*;

#[test]
fn ws_url_swaps_http_for_ws_and_carries_token() {
    assert_eq!(
        notifications_ws_url("http://localhost:8080", "abc"),
        "ws://localhost:8080/ws?token=abc"
    );
}

#[test]
fn ws_url_swaps_https_for_wss() {
    assert_eq!(
        notifications_ws_url("https://api.example.com", "t"),
        "wss://api.example.com/ws?token=t"
    );
}

#[test]
fn ws_url_defaults_bare_host_to_ws() {
    assert_eq!(notifications_ws_url("localhost:8080", "t"), "ws://localhost:8080/ws?token=t");
}

#[test]
fn parse_notification_reads_payload() {
    let n = parse_notification(
        r#"{"id":3,"message":"Candidatura aprovada","read":false,"createdAt":"2026-08-07T10:00:00"}"#,
    )
    .expect("notification");
    assert_eq!(n.id, 3);
    assert_eq!(n.message, "Candidatura aprovada");
}

#[test]
fn parse_notification_rejects_non_payloads() {
    assert!(parse_notification("ping").is_none());
    assert!(parse_notification("{}").is_none());
}
