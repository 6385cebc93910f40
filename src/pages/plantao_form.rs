//! Create-shift form for administrators and schedulers.

#[cfg(test)]
#[path = "plantao_form_test.rs"]
mod plantao_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::guard::Guarded;
use crate::auth::session::Session;
use crate::net::types::{Hospital, MedicoDisponivel, PlantaoRequest};
use crate::state::ui::UiState;

/// `datetime-local` inputs submit `YYYY-MM-DDTHH:MM`; the backend expects
/// seconds present.
pub fn to_iso_seconds(raw: &str) -> String {
    if raw.len() == 16 { format!("{raw}:00") } else { raw.to_owned() }
}

/// Validate the raw form values into a request payload.
///
/// ISO-8601 strings order lexicographically, so the start-before-end rule
/// is a plain string comparison.
pub fn validate_plantao_form(
    hospital_raw: &str,
    especialidade: &str,
    inicio: &str,
    fim: &str,
    valor_raw: &str,
) -> Result<PlantaoRequest, &'static str> {
    let Ok(hospital_id) = hospital_raw.trim().parse::<i64>() else {
        return Err("Selecione um hospital.");
    };
    let especialidade = especialidade.trim();
    if especialidade.is_empty() {
        return Err("Informe a especialidade.");
    }
    let (inicio, fim) = (inicio.trim(), fim.trim());
    if inicio.is_empty() || fim.is_empty() {
        return Err("Informe início e fim do plantão.");
    }
    if inicio >= fim {
        return Err("O início deve ser anterior ao fim.");
    }
    let valor = valor_raw.trim().replace(',', ".").parse::<f64>().unwrap_or(0.0);
    if valor <= 0.0 {
        return Err("Informe um valor maior que zero.");
    }
    Ok(PlantaoRequest {
        hospital_id,
        especialidade: especialidade.to_owned(),
        inicio: to_iso_seconds(inicio),
        fim: to_iso_seconds(fim),
        valor,
    })
}

/// Roles accepted for this view.
const ROLES_CRIAR_PLANTAO: &[&str] = &["ADMIN", "HOSPITAL_ADMIN", "ESCALISTA"];

#[component]
pub fn CriarPlantaoPage() -> impl IntoView {
    view! {
        <Guarded roles=ROLES_CRIAR_PLANTAO>
            <CriarPlantaoInner/>
        </Guarded>
    }
}

#[component]
fn CriarPlantaoInner() -> impl IntoView {
    let session = expect_context::<Session>();
    let ui = expect_context::<RwSignal<UiState>>();
    ui.update(|u| u.page_title = "Novo Plantão".to_owned());
    let navigate = use_navigate();

    let hospital_raw = RwSignal::new(String::new());
    let especialidade = RwSignal::new(String::new());
    let inicio = RwSignal::new(String::new());
    let fim = RwSignal::new(String::new());
    let valor_raw = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let hospitais = LocalResource::new(move || async move {
        crate::net::hospitais::listar(session).await.unwrap_or_default()
    });

    // Availability preview: which physicians could take this window.
    let disponiveis = RwSignal::new(None::<Vec<MedicoDisponivel>>);

    let on_ver_disponiveis = move |_| {
        let (inicio_raw, fim_raw) = (inicio.get(), fim.get());
        if inicio_raw.trim().is_empty() || fim_raw.trim().is_empty() {
            error.set(Some("Informe início e fim para consultar médicos.".to_owned()));
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let especialidade_atual = especialidade.get_untracked();
            let filtro = especialidade_atual.trim();
            let filtro = if filtro.is_empty() { None } else { Some(filtro) };
            match crate::net::medicos::find_disponiveis(
                session,
                &to_iso_seconds(inicio_raw.trim()),
                &to_iso_seconds(fim_raw.trim()),
                filtro,
            )
            .await
            {
                Ok(lista) => disponiveis.set(Some(lista)),
                Err(e) => error.set(Some(format!("Erro ao buscar médicos disponíveis: {e}"))),
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(None);

        let request = match validate_plantao_form(
            &hospital_raw.get(),
            &especialidade.get(),
            &inicio.get(),
            &fim.get(),
            &valor_raw.get(),
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
                match crate::net::plantoes::criar(session, &request).await {
                    Ok(_) => {
                        navigate("/dashboard/plantoes", NavigateOptions::default());
                    }
                    Err(e) => {
                        error.set(Some(format!("Não foi possível criar o plantão: {e}")));
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
                    "Hospital"
                    <select
                        prop:value=move || hospital_raw.get()
                        on:change=move |ev| hospital_raw.set(event_target_value(&ev))
                    >
                        <option value="">"Selecione..."</option>
                        {move || {
                            hospitais
                                .get()
                                .unwrap_or_default()
                                .into_iter()
                                .map(|h: Hospital| {
                                    view! {
                                        <option value=h
                                            .id
                                            .map(|id| id.to_string())
                                            .unwrap_or_default()>{h.nome}</option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="form__field">
                    "Especialidade"
                    <input
                        type="text"
                        prop:value=move || especialidade.get()
                        on:input=move |ev| especialidade.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Início"
                    <input
                        type="datetime-local"
                        prop:value=move || inicio.get()
                        on:input=move |ev| inicio.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Fim"
                    <input
                        type="datetime-local"
                        prop:value=move || fim.get()
                        on:input=move |ev| fim.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Valor (R$)"
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        prop:value=move || valor_raw.get()
                        on:input=move |ev| valor_raw.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || error.get().is_some()>
                    <p class="error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <div class="form__actions">
                    <button class="btn" type="button" on:click=on_ver_disponiveis>
                        "Ver médicos disponíveis"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Criar Plantão"
                    </button>
                </div>
            </form>

            <Show when=move || disponiveis.get().is_some()>
                <div class="disponiveis">
                    <h3>"Médicos disponíveis no período"</h3>
                    {move || {
                        let lista = disponiveis.get().unwrap_or_default();
                        if lista.is_empty() {
                            view! {
                                <p class="empty">"Nenhum médico disponível para o período."</p>
                            }
                                .into_any()
                        } else {
                            view! {
                                <ul class="disponiveis__list">
                                    {lista
                                        .into_iter()
                                        .map(|m| {
                                            view! {
                                                <li>
                                                    {format!(
                                                        "{} — {} ({})",
                                                        m.nome_completo,
                                                        m.especialidade,
                                                        m.crm,
                                                    )}
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </Show>
        </section>
    }
}
