//! Detail view of a single shift posting.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::auth::session::Session;
use crate::net::plantoes;
use crate::state::ui::UiState;
use crate::util::format::{format_currency_brl, format_datetime_br};

#[component]
pub fn PlantaoDetalhesPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let ui = expect_context::<RwSignal<UiState>>();
    ui.update(|u| u.page_title = "Detalhes do Plantão".to_owned());

    let params = use_params_map();
    let id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    };

    let plantao = LocalResource::new(move || {
        let id = id();
        async move {
            match id {
                Some(id) => plantoes::buscar(session, id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    view! {
        <section class="plantao-detalhes">
            <Suspense fallback=move || view! { <p class="loading">"Carregando plantão..."</p> }>
                {move || {
                    plantao
                        .get()
                        .map(|result| match result {
                            Ok(Some(p)) => {
                                view! {
                                    <div class="detail-card">
                                        <h3>{p.especialidade.clone()}</h3>
                                        <dl>
                                            <dt>"Hospital"</dt>
                                            <dd>
                                                {p
                                                    .nome_hospital
                                                    .clone()
                                                    .unwrap_or_else(|| "—".to_owned())}
                                            </dd>
                                            <dt>"Médico"</dt>
                                            <dd>
                                                {p
                                                    .nome_medico
                                                    .clone()
                                                    .unwrap_or_else(|| "Sem candidato".to_owned())}
                                            </dd>
                                            <dt>"Início"</dt>
                                            <dd>{format_datetime_br(&p.inicio)}</dd>
                                            <dt>"Fim"</dt>
                                            <dd>{format_datetime_br(&p.fim)}</dd>
                                            <dt>"Valor"</dt>
                                            <dd>{format_currency_brl(p.valor)}</dd>
                                            <dt>"Status"</dt>
                                            <dd>{p.status.clone()}</dd>
                                        </dl>
                                    </div>
                                }
                                    .into_any()
                            }
                            Ok(None) => {
                                view! { <p class="error">"Plantão não encontrado."</p> }.into_any()
                            }
                            Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </section>
    }
}
