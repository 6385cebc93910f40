//! Physician-side search of open shifts, with filters, pagination, and
//! the candidatar-se action.

#[cfg(test)]
#[path = "plantao_buscar_test.rs"]
mod plantao_buscar_test;

use leptos::prelude::*;

use crate::auth::guard::Guarded;
use crate::auth::session::Session;
use crate::net::plantoes::{self, PlantaoFiltros};
use crate::net::types::Hospital;
use crate::pages::plantao_list::{PlantaoTable, can_next, can_prev};
use crate::state::ui::UiState;

const PAGE_SIZE: i64 = 10;

/// Build the search filters from the raw form values. The hospital select
/// submits an empty string for "all"; dates pass through as `YYYY-MM-DD`.
pub fn montar_filtros(hospital_raw: &str, data_raw: &str) -> PlantaoFiltros {
    PlantaoFiltros {
        hospital_id: hospital_raw.trim().parse::<i64>().ok(),
        data: {
            let data = data_raw.trim();
            if data.is_empty() { None } else { Some(data.to_owned()) }
        },
    }
}

/// Roles accepted for this view.
const ROLES_BUSCAR: &[&str] = &["MEDICO"];

#[component]
pub fn BuscarPlantoesPage() -> impl IntoView {
    view! {
        <Guarded roles=ROLES_BUSCAR>
            <BuscarPlantoesInner/>
        </Guarded>
    }
}

#[component]
fn BuscarPlantoesInner() -> impl IntoView {
    let session = expect_context::<Session>();
    let ui = expect_context::<RwSignal<UiState>>();
    ui.update(|u| u.page_title = "Buscar Plantões".to_owned());

    let hospital_raw = RwSignal::new(String::new());
    let data_raw = RwSignal::new(String::new());
    let filtros = RwSignal::new(PlantaoFiltros::default());
    let page = RwSignal::new(0i64);
    let feedback = RwSignal::new(None::<String>);

    let hospitais = LocalResource::new(move || async move {
        crate::net::hospitais::listar(session).await.unwrap_or_default()
    });

    let resultados = LocalResource::new(move || {
        let filtros = filtros.get();
        let current = page.get();
        async move { plantoes::buscar_disponiveis(session, &filtros, current, PAGE_SIZE).await }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        feedback.set(None);
        page.set(0);
        filtros.set(montar_filtros(&hospital_raw.get(), &data_raw.get()));
    };

    let on_candidatar = move |plantao_id: i64| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match plantoes::candidatar_se(session, plantao_id).await {
                Ok(atualizado) => {
                    feedback.set(Some(format!(
                        "Candidatura para o plantão de {} enviada com sucesso!",
                        atualizado.especialidade
                    )));
                    resultados.refetch();
                }
                Err(e) => {
                    feedback.set(Some(format!("Erro: {e}")));
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = plantao_id;
        }
    };

    view! {
        <section class="buscar-plantoes">
            <form class="filter-form" on:submit=on_submit>
                <label class="filter-form__field">
                    "Hospital"
                    <select
                        prop:value=move || hospital_raw.get()
                        on:change=move |ev| hospital_raw.set(event_target_value(&ev))
                    >
                        <option value="">"Todos"</option>
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
                <label class="filter-form__field">
                    "Data"
                    <input
                        type="date"
                        prop:value=move || data_raw.get()
                        on:input=move |ev| data_raw.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit">
                    "Buscar"
                </button>
            </form>

            <Show when=move || feedback.get().is_some()>
                <p class="feedback">{move || feedback.get().unwrap_or_default()}</p>
            </Show>

            <Suspense fallback=move || view! { <p class="loading">"Buscando plantões..."</p> }>
                {move || {
                    resultados
                        .get()
                        .map(|result| match result {
                            Ok(paginado) => {
                                let prev_disabled = !can_prev(paginado.number);
                                let next_disabled = !can_next(&paginado);
                                let linhas = paginado.content.clone();
                                view! {
                                    <PlantaoTable plantoes=linhas.clone()/>
                                    <div class="plantao-actions">
                                        {linhas
                                            .iter()
                                            .map(|p| {
                                                let id = p.id;
                                                let especialidade = p.especialidade.clone();
                                                view! {
                                                    <button
                                                        class="btn btn--primary"
                                                        on:click=move |_| on_candidatar(id)
                                                    >
                                                        {format!("Candidatar-se ({especialidade})")}
                                                    </button>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                    <div class="pagination">
                                        <button
                                            class="btn"
                                            disabled=prev_disabled
                                            on:click=move |_| page.update(|p| *p -= 1)
                                        >
                                            "Anterior"
                                        </button>
                                        <button
                                            class="btn"
                                            disabled=next_disabled
                                            on:click=move |_| page.update(|p| *p += 1)
                                        >
                                            "Próxima"
                                        </button>
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </section>
    }
}
