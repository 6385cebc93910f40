//! Create/edit hospital form; the route decides the mode via the `id`
//! parameter.

#[cfg(test)]
#[path = "hospital_form_test.rs"]
mod hospital_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::auth::guard::Guarded;
use crate::auth::session::Session;
use crate::net::hospitais;
use crate::net::types::HospitalRequest;
use crate::state::ui::UiState;

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() { None } else { Some(value.to_owned()) }
}

/// Require nome, CNPJ, and the primary phone; the rest is optional.
pub fn validate_hospital_form(
    nome: &str,
    cnpj: &str,
    endereco: &str,
    telefone1: &str,
    telefone2: &str,
) -> Result<HospitalRequest, &'static str> {
    let nome = nome.trim();
    let cnpj = cnpj.trim();
    let telefone1 = telefone1.trim();
    if nome.is_empty() || cnpj.is_empty() || telefone1.is_empty() {
        return Err("Preencha nome, CNPJ e telefone principal.");
    }
    Ok(HospitalRequest {
        nome: nome.to_owned(),
        cnpj: cnpj.to_owned(),
        endereco: optional(endereco),
        telefone1: telefone1.to_owned(),
        telefone2: optional(telefone2),
    })
}

/// Roles accepted for this view.
const ROLES_HOSPITAL_FORM: &[&str] = &["ADMIN"];

#[component]
pub fn HospitalFormPage() -> impl IntoView {
    view! {
        <Guarded roles=ROLES_HOSPITAL_FORM>
            <HospitalFormInner/>
        </Guarded>
    }
}

#[component]
fn HospitalFormInner() -> impl IntoView {
    let session = expect_context::<Session>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let params = use_params_map();
    let hospital_id = params.read_untracked().get("id").and_then(|raw| raw.parse::<i64>().ok());
    let is_edit = hospital_id.is_some();
    ui.update(|u| {
        u.page_title =
            if is_edit { "Editar Hospital".to_owned() } else { "Novo Hospital".to_owned() };
    });

    let nome = RwSignal::new(String::new());
    let cnpj = RwSignal::new(String::new());
    let endereco = RwSignal::new(String::new());
    let telefone1 = RwSignal::new(String::new());
    let telefone2 = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Edit mode: pre-fill from the existing record.
    #[cfg(feature = "csr")]
    if let Some(id) = hospital_id {
        leptos::task::spawn_local(async move {
            match hospitais::buscar(session, id).await {
                Ok(hospital) => {
                    nome.set(hospital.nome);
                    cnpj.set(hospital.cnpj);
                    endereco.set(hospital.endereco.unwrap_or_default());
                    telefone1.set(hospital.telefone1);
                    telefone2.set(hospital.telefone2.unwrap_or_default());
                }
                Err(e) => {
                    error.set(Some(format!("Não foi possível carregar o hospital: {e}")));
                }
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(None);

        let request = match validate_hospital_form(
            &nome.get(),
            &cnpj.get(),
            &endereco.get(),
            &telefone1.get(),
            &telefone2.get(),
        ) {
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
                let saved = match hospital_id {
                    Some(id) => hospitais::atualizar(session, id, &request).await,
                    None => hospitais::criar(session, &request).await,
                };
                match saved {
                    Ok(_) => navigate("/dashboard/hospitais", NavigateOptions::default()),
                    Err(e) => {
                        error.set(Some(format!("Não foi possível salvar o hospital: {e}")));
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
                        prop:value=move || nome.get()
                        on:input=move |ev| nome.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "CNPJ"
                    <input
                        type="text"
                        placeholder="00.000.000/0000-00"
                        prop:value=move || cnpj.get()
                        on:input=move |ev| cnpj.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Endereço"
                    <input
                        type="text"
                        prop:value=move || endereco.get()
                        on:input=move |ev| endereco.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Telefone principal"
                    <input
                        type="tel"
                        prop:value=move || telefone1.get()
                        on:input=move |ev| telefone1.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Telefone secundário"
                    <input
                        type="tel"
                        prop:value=move || telefone2.get()
                        on:input=move |ev| telefone2.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || error.get().is_some()>
                    <p class="error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {if is_edit { "Salvar Alterações" } else { "Criar Hospital" }}
                </button>
            </form>
        </section>
    }
}
