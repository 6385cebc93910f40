//! Authenticated shell: sidebar, header, and the routed outlet.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::auth::guard::Guarded;
use crate::components::header::Header;
use crate::components::sidebar::Sidebar;

#[component]
pub fn DashboardShell() -> impl IntoView {
    #[cfg(feature = "csr")]
    seed_unread_badge();

    view! {
        <Guarded>
            <div class="dashboard">
                <Sidebar/>
                <div class="dashboard__main">
                    <Header/>
                    <main class="dashboard__content">
                        <Outlet/>
                    </main>
                </div>
            </div>
        </Guarded>
    }
}

/// Load the initial unread count whenever an authenticated session is
/// (re-)established while the shell is mounted.
#[cfg(feature = "csr")]
fn seed_unread_badge() {
    use crate::auth::session::Session;
    use crate::state::notifications::NotificationsState;

    let session = expect_context::<Session>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    Effect::new(move || {
        if !session.get().is_authenticated() {
            return;
        }
        leptos::task::spawn_local(async move {
            match crate::net::notifications::unread_count(session).await {
                Ok(body) => notifications.update(|state| state.set_unread(body.count)),
                Err(e) => leptos::logging::warn!("falha ao carregar notificações: {e}"),
            }
        });
    });
}
