//! Shift listing, split by role: physicians see their own shifts,
//! administrators and schedulers browse the paginated open postings.

#[cfg(test)]
#[path = "plantao_list_test.rs"]
mod plantao_list_test;

use leptos::prelude::*;

use crate::auth::session::Session;
use crate::net::plantoes::{self, PlantaoFiltros};
use crate::net::types::{Page, Plantao};
use crate::pages::overview::{DashboardAudience, dashboard_audience};
use crate::state::ui::UiState;
use crate::util::format::{format_currency_brl, format_datetime_br};

const PAGE_SIZE: i64 = 10;

pub fn can_prev(number: i64) -> bool {
    number > 0
}

pub fn can_next<T>(page: &Page<T>) -> bool {
    !page.last
}

#[derive(Clone, Debug)]
enum ListData {
    Meus(Vec<Plantao>),
    Paginado(Page<Plantao>),
    SemPermissao,
    Erro(String),
}

#[component]
pub fn PlantaoListPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let ui = expect_context::<RwSignal<UiState>>();
    ui.update(|u| u.page_title = "Plantões".to_owned());

    let page = RwSignal::new(0i64);

    let data = LocalResource::new(move || {
        let current = page.get();
        async move {
            match dashboard_audience(&session.get_untracked()) {
                DashboardAudience::Medico => match plantoes::meus_plantoes(session).await {
                    Ok(list) => ListData::Meus(list),
                    Err(e) => ListData::Erro(e.to_string()),
                },
                DashboardAudience::AdminLike => {
                    match plantoes::buscar_disponiveis(
                        session,
                        &PlantaoFiltros::default(),
                        current,
                        PAGE_SIZE,
                    )
                    .await
                    {
                        Ok(paginado) => ListData::Paginado(paginado),
                        Err(e) => ListData::Erro(e.to_string()),
                    }
                }
                DashboardAudience::Nenhum => ListData::SemPermissao,
            }
        }
    });

    view! {
        <section class="plantao-list">
            <Suspense fallback=move || view! { <p class="loading">"Carregando plantões..."</p> }>
                {move || {
                    data.get()
                        .map(|data| match data {
                            ListData::Meus(list) => {
                                view! {
                                    <h3>"Meus plantões"</h3>
                                    <PlantaoTable plantoes=list/>
                                }
                                    .into_any()
                            }
                            ListData::Paginado(paginado) => {
                                let prev_disabled = !can_prev(paginado.number);
                                let next_disabled = !can_next(&paginado);
                                view! {
                                    <h3>"Plantões disponíveis"</h3>
                                    <PlantaoTable plantoes=paginado.content.clone()/>
                                    <div class="pagination">
                                        <button
                                            class="btn"
                                            disabled=prev_disabled
                                            on:click=move |_| page.update(|p| *p -= 1)
                                        >
                                            "Anterior"
                                        </button>
                                        <span class="pagination__info">
                                            {format!(
                                                "Página {} de {}",
                                                paginado.number + 1,
                                                paginado.total_pages.max(1),
                                            )}
                                        </span>
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
                            ListData::SemPermissao => {
                                view! {
                                    <p class="error">
                                        "Usuário sem permissão para visualizar plantões."
                                    </p>
                                }
                                    .into_any()
                            }
                            ListData::Erro(message) => {
                                view! { <p class="error">{message}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

/// Shared shift table used by the list and search views.
#[component]
pub fn PlantaoTable(plantoes: Vec<Plantao>) -> impl IntoView {
    let has_rows = !plantoes.is_empty();
    view! {
        <Show
            when=move || has_rows
            fallback=|| view! { <p class="empty">"Nenhum plantão encontrado."</p> }
        >
            <table class="table">
                <thead>
                    <tr>
                        <th>"Hospital"</th>
                        <th>"Especialidade"</th>
                        <th>"Início"</th>
                        <th>"Fim"</th>
                        <th>"Valor"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {plantoes
                        .clone()
                        .into_iter()
                        .map(|p| {
                            view! {
                                <tr>
                                    <td>{p.nome_hospital.clone().unwrap_or_else(|| "—".to_owned())}</td>
                                    <td>{p.especialidade.clone()}</td>
                                    <td>{format_datetime_br(&p.inicio)}</td>
                                    <td>{format_datetime_br(&p.fim)}</td>
                                    <td>{format_currency_brl(p.valor)}</td>
                                    <td>{p.status.clone()}</td>
                                    <td>
                                        <a
                                            href=format!("/dashboard/plantoes/{}", p.id)
                                            class="table__link"
                                        >
                                            "Detalhes"
                                        </a>
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </Show>
    }
}
