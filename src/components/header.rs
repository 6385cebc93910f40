//! Top bar: current page title, notification badge, and the session's
//! display name.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::auth::session::{Session, SessionState};
use crate::state::notifications::NotificationsState;
use crate::state::ui::UiState;

/// Name shown in the header: full name when the token carries one, the
/// login email otherwise, a neutral fallback when neither decoded.
pub fn header_user_name(state: &SessionState) -> String {
    state
        .display_name()
        .or_else(|| state.subject_email())
        .unwrap_or("Usuário")
        .to_owned()
}

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<Session>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    let unread = move || notifications.get().unread_count;

    let on_bell = move |_| {
        if notifications.get_untracked().unread_count == 0 {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::notifications::marcar_todas_lidas(session).await {
                Ok(()) => notifications.update(NotificationsState::mark_all_read),
                Err(e) => leptos::logging::warn!("falha ao marcar notificações lidas: {e}"),
            }
        });
    };

    view! {
        <header class="header">
            <h1 class="header__title">{move || ui.get().page_title}</h1>

            <div class="header__actions">
                <button class="header__bell" on:click=on_bell title="Notificações">
                    "🔔"
                    <Show when=move || { unread() > 0 }>
                        <span class="header__badge">{unread}</span>
                    </Show>
                </button>
                <span class="header__user">{move || header_user_name(&session.get())}</span>
            </div>
        </header>
    }
}
