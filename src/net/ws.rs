//! WebSocket subscriber for server-pushed notifications.
//!
//! Connects once the user is authenticated, feeds incoming JSON payloads
//! into [`NotificationsState`], and reconnects with capped exponential
//! backoff. The credential travels as a query parameter since the browser
//! WebSocket API cannot set headers. All connection logic is gated behind
//! the `csr` feature; off-browser only the pure helpers exist.

#[cfg(test)]
#[path = "ws_test.rs"]
mod ws_test;

use crate::net::types::Notification;
#[cfg(feature = "csr")]
use crate::state::notifications::NotificationsState;

/// WebSocket endpoint for a backend origin and credential: `http(s)`
/// swaps to `ws(s)` and the token rides the query string.
pub fn notifications_ws_url(base: &str, credential: &str) -> String {
    let ws_base = if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        format!("ws://{base}")
    };
    format!("{ws_base}/ws?token={credential}")
}

/// Parse one pushed message; anything that is not a notification payload
/// is dropped silently.
pub fn parse_notification(text: &str) -> Option<Notification> {
    serde_json::from_str(text).ok()
}

/// Spawn the subscriber lifecycle as a local async task.
#[cfg(feature = "csr")]
pub fn spawn_notification_client(notifications: leptos::prelude::RwSignal<NotificationsState>) {
    leptos::task::spawn_local(client_loop(notifications));
}

/// Main connection loop with reconnect logic. While logged out it idles
/// and re-checks the store, so a later login picks the channel back up.
#[cfg(feature = "csr")]
async fn client_loop(notifications: leptos::prelude::RwSignal<NotificationsState>) {
    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    loop {
        let Some(credential) = crate::auth::token::read() else {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms)))
                .await;
            continue;
        };

        let url = notifications_ws_url(&crate::config::api_base(), &credential);
        match connect_and_listen(&url, notifications).await {
            Ok(()) => {
                leptos::logging::log!("notificações: conexão encerrada");
                backoff_ms = 1000;
            }
            Err(e) => {
                leptos::logging::warn!("notificações: erro no WebSocket: {e}");
            }
        }

        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

/// Listen on one connection until it closes or errors.
#[cfg(feature = "csr")]
async fn connect_and_listen(
    url: &str,
    notifications: leptos::prelude::RwSignal<NotificationsState>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;
    use leptos::prelude::Update;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (_write, mut read) = ws.split();

    while let Some(msg) = read.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                if let Some(notification) = parse_notification(&text) {
                    notifications.update(|state| state.record(notification));
                }
            }
            Ok(Message::Bytes(_)) => {}
            Err(e) => return Err(e.to_string()),
        }
    }
    Ok(())
}
