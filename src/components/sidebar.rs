//! Collapsible navigation sidebar with role-gated sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Visibility here is cosmetic; the real enforcement is the route guard.
//! Both read the same session projection so they cannot disagree.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::guard::LOGIN_PATH;
use crate::auth::session::{Session, SessionState, apply_logout};
use crate::state::ui::UiState;

/// Navigation entries: label, target, and the roles that may see them.
/// An empty role list means every authenticated user.
const NAV_ITEMS: &[(&str, &str, &[&str])] = &[
    ("Visão Geral", "/dashboard", &[]),
    ("Plantões", "/dashboard/plantoes", &[]),
    ("Buscar Plantões", "/dashboard/plantoes/buscar", &["MEDICO"]),
    ("Minha Disponibilidade", "/dashboard/disponibilidade", &["MEDICO"]),
    ("Novo Plantão", "/dashboard/plantoes/novo", &["ADMIN", "HOSPITAL_ADMIN", "ESCALISTA"]),
    ("Hospitais", "/dashboard/hospitais", &["ADMIN", "HOSPITAL_ADMIN"]),
    ("Médicos", "/dashboard/medicos", &["ADMIN", "HOSPITAL_ADMIN", "ESCALISTA"]),
    ("Especialidades", "/dashboard/especialidades", &["ADMIN"]),
    ("Meu Perfil", "/dashboard/perfil", &[]),
];

/// Whether a nav entry applies to the current session.
pub fn visible_for(state: &SessionState, roles: &[&str]) -> bool {
    if !state.is_authenticated() {
        return false;
    }
    roles.is_empty() || roles.iter().any(|role| state.has_role(role))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<Session>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let collapsed = move || ui.get().sidebar_collapsed;
    let on_toggle = move |_| ui.update(UiState::toggle_sidebar);

    let on_logout = move |_| {
        apply_logout(session);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <aside class="sidebar" class=("sidebar--collapsed", collapsed)>
            <div class="sidebar__brand">
                <span class="sidebar__logo">"F"</span>
                <Show when=move || !collapsed()>
                    <span class="sidebar__title">"FluxivaMed"</span>
                </Show>
            </div>

            <button class="sidebar__toggle" on:click=on_toggle title="Recolher menu">
                {move || if collapsed() { "»" } else { "«" }}
            </button>

            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .iter()
                    .map(|(label, href, roles)| {
                        view! {
                            <Show when=move || visible_for(&session.get(), roles)>
                                <a href=*href class="sidebar__link">
                                    {*label}
                                </a>
                            </Show>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <button class="sidebar__logout" on:click=on_logout>
                "Sair"
            </button>
        </aside>
    }
}
