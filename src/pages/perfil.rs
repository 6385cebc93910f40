//! Own-profile view and edit form, with médico-specific fields.

#[cfg(test)]
#[path = "perfil_test.rs"]
mod perfil_test;

use leptos::prelude::*;

use crate::auth::guard::Guarded;
use crate::auth::session::Session;
use crate::net::perfil;
use crate::net::types::{Especialidade, ProfileUpdateRequest};
use crate::state::ui::UiState;

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() { None } else { Some(value.to_owned()) }
}

/// Validate the profile form. The password pair is only enforced when the
/// user typed a new one; médicos must keep a CRM on file.
pub fn validate_perfil_form(
    full_name: &str,
    telefone: &str,
    password: &str,
    confirm: &str,
    is_medico: bool,
    crm: &str,
    especialidade_raw: &str,
) -> Result<ProfileUpdateRequest, &'static str> {
    let full_name = full_name.trim();
    if full_name.is_empty() {
        return Err("Informe o nome completo.");
    }

    let password = password.trim();
    let password = if password.is_empty() {
        None
    } else {
        if password.len() < 6 {
            return Err("A nova senha deve ter pelo menos 6 caracteres.");
        }
        if password != confirm.trim() {
            return Err("As senhas não conferem.");
        }
        Some(password.to_owned())
    };

    let crm = crm.trim();
    if is_medico && crm.is_empty() {
        return Err("Informe o CRM.");
    }

    Ok(ProfileUpdateRequest {
        full_name: full_name.to_owned(),
        telefone: optional(telefone),
        password,
        crm: if is_medico { Some(crm.to_owned()) } else { None },
        especialidade_id: if is_medico {
            especialidade_raw.trim().parse::<i64>().ok()
        } else {
            None
        },
    })
}

#[component]
pub fn PerfilPage() -> impl IntoView {
    view! {
        <Guarded>
            <PerfilInner/>
        </Guarded>
    }
}

#[component]
fn PerfilInner() -> impl IntoView {
    let session = expect_context::<Session>();
    let ui = expect_context::<RwSignal<UiState>>();
    ui.update(|u| u.page_title = "Meu Perfil".to_owned());

    let is_medico = session.get_untracked().has_role("MEDICO");

    let email = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let telefone = RwSignal::new(String::new());
    let crm = RwSignal::new(String::new());
    let especialidade_raw = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let feedback = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let especialidades = LocalResource::new(move || async move {
        if is_medico {
            crate::net::especialidades::listar(session).await.unwrap_or_default()
        } else {
            Vec::new()
        }
    });

    // Pre-fill from the stored profile.
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match perfil::meu_perfil(session).await {
            Ok(profile) => {
                email.set(profile.email);
                full_name.set(profile.full_name);
                telefone.set(profile.telefone.unwrap_or_default());
                crm.set(profile.crm.unwrap_or_default());
                especialidade_raw
                    .set(profile.especialidade_id.map(|id| id.to_string()).unwrap_or_default());
            }
            Err(e) => feedback.set(Some(format!("Não foi possível carregar o perfil: {e}"))),
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        feedback.set(None);

        let request = match validate_perfil_form(
            &full_name.get(),
            &telefone.get(),
            &password.get(),
            &confirm.get(),
            is_medico,
            &crm.get(),
            &especialidade_raw.get(),
        ) {
            Ok(request) => request,
            Err(message) => {
                feedback.set(Some(message.to_owned()));
                return;
            }
        };

        busy.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match perfil::atualizar_meu_perfil(session, &request).await {
                Ok(_) => {
                    feedback.set(Some("Perfil atualizado com sucesso!".to_owned()));
                    password.set(String::new());
                    confirm.set(String::new());
                }
                Err(e) => feedback.set(Some(format!("Erro ao atualizar o perfil: {e}"))),
            }
            busy.set(false);
        });
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
                    "Email"
                    <input type="email" prop:value=move || email.get() disabled=true/>
                </label>
                <label class="form__field">
                    "Nome completo"
                    <input
                        type="text"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Telefone"
                    <input
                        type="tel"
                        prop:value=move || telefone.get()
                        on:input=move |ev| telefone.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || is_medico>
                    <label class="form__field">
                        "CRM"
                        <input
                            type="text"
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
                </Show>

                <label class="form__field">
                    "Nova senha"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Confirmar nova senha"
                    <input
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || feedback.get().is_some()>
                    <p class="feedback">{move || feedback.get().unwrap_or_default()}</p>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Salvar Perfil"
                </button>
            </form>
        </section>
    }
}
