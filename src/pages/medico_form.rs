//! Create/edit physician form; password is required only on creation.

#[cfg(test)]
#[path = "medico_form_test.rs"]
mod medico_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::auth::guard::Guarded;
use crate::auth::session::Session;
use crate::net::types::{Especialidade, MedicoRequest};
use crate::state::ui::UiState;

/// Validate the raw form values into a request payload. `is_edit` relaxes
/// the password requirement (kept unchanged server-side when absent).
pub fn validate_medico_form(
    nome_completo: &str,
    crm: &str,
    especialidade_raw: &str,
    email: &str,
    password: &str,
    is_edit: bool,
) -> Result<MedicoRequest, &'static str> {
    let nome_completo = nome_completo.trim();
    let crm = crm.trim();
    let email = email.trim();
    if nome_completo.is_empty() || crm.is_empty() || email.is_empty() {
        return Err("Preencha nome, CRM e email.");
    }
    let Ok(especialidade_id) = especialidade_raw.trim().parse::<i64>() else {
        return Err("Selecione uma especialidade.");
    };
    let password = password.trim();
    let password = if password.is_empty() {
        if !is_edit {
            return Err("Informe uma senha com pelo menos 6 caracteres.");
        }
        None
    } else if password.len() < 6 {
        return Err("Informe uma senha com pelo menos 6 caracteres.");
    } else {
        Some(password.to_owned())
    };
    Ok(MedicoRequest {
        nome_completo: nome_completo.to_owned(),
        crm: crm.to_owned(),
        especialidade_id,
        email: email.to_owned(),
        password,
    })
}

/// Roles accepted for this view.
const ROLES_MEDICO_FORM: &[&str] = &["ADMIN", "HOSPITAL_ADMIN"];

#[component]
pub fn MedicoFormPage() -> impl IntoView {
    view! {
        <Guarded roles=ROLES_MEDICO_FORM>
            <MedicoFormInner/>
        </Guarded>
    }
}

#[component]
fn MedicoFormInner() -> impl IntoView {
    let session = expect_context::<Session>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let params = use_params_map();
    let medico_id = params.read_untracked().get("id").and_then(|raw| raw.parse::<i64>().ok());
    let is_edit = medico_id.is_some();
    ui.update(|u| {
        u.page_title = if is_edit { "Editar Médico".to_owned() } else { "Novo Médico".to_owned() };
    });

    let nome_completo = RwSignal::new(String::new());
    let crm = RwSignal::new(String::new());
    let especialidade_raw = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let especialidades = LocalResource::new(move || async move {
        crate::net::especialidades::listar(session).await.unwrap_or_default()
    });

    // Edit mode: pre-fill from the existing record.
    #[cfg(feature = "csr")]
    if let Some(id) = medico_id {
        leptos::task::spawn_local(async move {
            match crate::net::medicos::buscar(session, id).await {
                Ok(medico) => {
                    nome_completo.set(medico.nome_completo);
                    crm.set(medico.crm);
                    email.set(medico.email);
                    especialidade_raw
                        .set(medico.especialidade_id.map(|id| id.to_string()).unwrap_or_default());
                }
                Err(e) => error.set(Some(format!("Não foi possível carregar o médico: {e}"))),
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(None);

        let request = match validate_medico_form(
            &nome_completo.get(),
            &crm.get(),
            &especialidade_raw.get(),
            &email.get(),
            &password.get(),
            is_edit,
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
                let saved = match medico_id {
                    Some(id) => crate::net::medicos::atualizar(session, id, &request).await,
                    None => crate::net::medicos::criar(session, &request).await,
                };
                match saved {
                    Ok(_) => navigate("/dashboard/medicos", NavigateOptions::default()),
                    Err(e) => {
                        error.set(Some(format!("Não foi possível salvar o médico: {e}")));
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
                    "Nome completo"
                    <input
                        type="text"
                        prop:value=move || nome_completo.get()
                        on:input=move |ev| nome_completo.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "CRM"
                    <input
                        type="text"
                        placeholder="CRM/UF 00000"
                        prop:value=move || crm.get()
                        on:input=move |ev| crm.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Especialidade"
                    <select
                        prop:value=move || especialidade_raw.get()
                        on:change=move |ev| especialidade_raw.set(event_target_value(&ev))
                    >
                        <option value="">"Selecione..."</option>
                        {move || {
                            especialidades
                                .get()
                                .unwrap_or_default()
                                .into_iter()
                                .map(|e: Especialidade| {
                                    view! { <option value=e.id.to_string()>{e.nome}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="form__field">
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || !is_edit>
                    <label class="form__field">
                        "Senha inicial"
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                </Show>

                <Show when=move || error.get().is_some()>
                    <p class="error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {if is_edit { "Salvar Alterações" } else { "Cadastrar Médico" }}
                </button>
            </form>
        </section>
    }
}
