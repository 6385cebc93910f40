//! Create-specialty form, admin-only.

#[cfg(test)]
#[path = "especialidade_form_test.rs"]
mod especialidade_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::guard::Guarded;
use crate::auth::session::Session;
use crate::net::types::EspecialidadeRequest;
use crate::state::ui::UiState;

/// Specialty names: non-empty, letters/spaces/hyphens only.
pub fn validate_especialidade_form(nome: &str) -> Result<EspecialidadeRequest, &'static str> {
    let nome = nome.trim();
    if nome.is_empty() {
        return Err("Informe o nome da especialidade.");
    }
    let valido = nome
        .chars()
        .all(|c| c.is_alphabetic() || c == ' ' || c == '-');
    if !valido {
        return Err("Use apenas letras, espaços e hífens.");
    }
    Ok(EspecialidadeRequest { nome: nome.to_owned() })
}

/// Roles accepted for this view.
const ROLES_ESPECIALIDADES: &[&str] = &["ADMIN"];

#[component]
pub fn EspecialidadeFormPage() -> impl IntoView {
    view! {
        <Guarded roles=ROLES_ESPECIALIDADES>
            <EspecialidadeFormInner/>
        </Guarded>
    }
}

#[component]
fn EspecialidadeFormInner() -> impl IntoView {
    let session = expect_context::<Session>();
    let ui = expect_context::<RwSignal<UiState>>();
    ui.update(|u| u.page_title = "Nova Especialidade".to_owned());
    let navigate = use_navigate();

    let nome = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(None);

        let request = match validate_especialidade_form(&nome.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };

        busy.set(true);
        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::especialidades::criar(session, &request).await {
                    Ok(_) => navigate("/dashboard/especialidades", NavigateOptions::default()),
                    Err(e) => {
                        error.set(Some(format!("Não foi possível salvar a especialidade: {e}")));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <section class="form-page">
            <form class="form" on:submit=on_submit>
                <label class="form__field">
                    "Nome"
                    <input
                        type="text"
                        placeholder="Cardiologia"
                        prop:value=move || nome.get()
                        on:input=move |ev| nome.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || error.get().is_some()>
                    <p class="error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Criar Especialidade"
                </button>
            </form>
        </section>
    }
}
