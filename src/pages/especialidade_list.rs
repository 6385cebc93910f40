//! Specialty catalog, admin-only.

use leptos::prelude::*;

use crate::auth::guard::Guarded;
use crate::auth::session::Session;
use crate::net::especialidades;
use crate::net::types::Especialidade;
use crate::state::ui::UiState;

/// Roles accepted for this view.
const ROLES_ESPECIALIDADES: &[&str] = &["ADMIN"];

#[component]
pub fn EspecialidadeListPage() -> impl IntoView {
    view! {
        <Guarded roles=ROLES_ESPECIALIDADES>
            <EspecialidadeListInner/>
        </Guarded>
    }
}

#[component]
fn EspecialidadeListInner() -> impl IntoView {
    let session = expect_context::<Session>();
    let ui = expect_context::<RwSignal<UiState>>();
    ui.update(|u| u.page_title = "Especialidades".to_owned());

    let especialidades =
        LocalResource::new(move || async move { especialidades::listar(session).await });

    view! {
        <section class="especialidade-list">
            <div class="list-header">
                <a href="/dashboard/especialidades/nova" class="btn btn--primary">
                    "+ Nova Especialidade"
                </a>
            </div>

            <Suspense fallback=move || {
                view! { <p class="loading">"Carregando especialidades..."</p> }
            }>
                {move || {
                    especialidades
                        .get()
                        .map(|result| match result {
                            Ok(lista) => {
                                view! {
                                    <table class="table">
                                        <thead>
                                            <tr>
                                                <th>"Id"</th>
                                                <th>"Nome"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {lista
                                                .into_iter()
                                                .map(|e: Especialidade| {
                                                    view! {
                                                        <tr>
                                                            <td>{e.id}</td>
                                                            <td>{e.nome.clone()}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! {
                                    <p class="error">
                                        {format!("Não foi possível carregar as especialidades: {e}")}
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}
