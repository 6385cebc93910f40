//! Physician roster for administrators and schedulers.

use leptos::prelude::*;

use crate::auth::guard::Guarded;
use crate::auth::session::Session;
use crate::net::medicos;
use crate::net::types::Medico;
use crate::state::ui::UiState;

/// Roles accepted for this view.
const ROLES_MEDICOS: &[&str] = &["ADMIN", "HOSPITAL_ADMIN", "ESCALISTA"];

#[component]
pub fn MedicoListPage() -> impl IntoView {
    view! {
        <Guarded roles=ROLES_MEDICOS>
            <MedicoListInner/>
        </Guarded>
    }
}

#[component]
fn MedicoListInner() -> impl IntoView {
    let session = expect_context::<Session>();
    let ui = expect_context::<RwSignal<UiState>>();
    ui.update(|u| u.page_title = "Médicos".to_owned());

    let medicos = LocalResource::new(move || async move { medicos::listar(session).await });

    view! {
        <section class="medico-list">
            <div class="list-header">
                <a href="/dashboard/medicos/novo" class="btn btn--primary">
                    "+ Novo Médico"
                </a>
            </div>

            <Suspense fallback=move || view! { <p class="loading">"Carregando médicos..."</p> }>
                {move || {
                    medicos
                        .get()
                        .map(|result| match result {
                            Ok(lista) => {
                                view! {
                                    <table class="table">
                                        <thead>
                                            <tr>
                                                <th>"Nome"</th>
                                                <th>"Email"</th>
                                                <th>"CRM"</th>
                                                <th>"Especialidade"</th>
                                                <th>"Telefone"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {lista
                                                .into_iter()
                                                .map(|m: Medico| {
                                                    view! {
                                                        <tr>
                                                            <td>{m.nome_completo.clone()}</td>
                                                            <td>{m.email.clone()}</td>
                                                            <td>{m.crm.clone()}</td>
                                                            <td>
                                                                {m
                                                                    .especialidade_nome
                                                                    .clone()
                                                                    .unwrap_or_else(|| "—".to_owned())}
                                                            </td>
                                                            <td>
                                                                {m
                                                                    .telefone
                                                                    .clone()
                                                                    .unwrap_or_else(|| "—".to_owned())}
                                                            </td>
                                                            <td>
                                                                <a
                                                                    href=format!(
                                                                        "/dashboard/medicos/{}/editar",
                                                                        m.id,
                                                                    )
                                                                    class="table__link"
                                                                >
                                                                    "Editar"
                                                                </a>
                                                            </td>
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
                                        {format!("Não foi possível carregar os médicos: {e}")}
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
