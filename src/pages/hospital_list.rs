//! Hospital roster with edit/delete actions.

use leptos::prelude::*;

use crate::auth::guard::Guarded;
use crate::auth::session::Session;
use crate::net::hospitais;
use crate::net::types::Hospital;
use crate::state::ui::UiState;

/// Roles accepted for this view.
const ROLES_HOSPITAIS: &[&str] = &["ADMIN", "HOSPITAL_ADMIN"];

#[component]
pub fn HospitalListPage() -> impl IntoView {
    view! {
        <Guarded roles=ROLES_HOSPITAIS>
            <HospitalListInner/>
        </Guarded>
    }
}

#[component]
fn HospitalListInner() -> impl IntoView {
    let session = expect_context::<Session>();
    let ui = expect_context::<RwSignal<UiState>>();
    ui.update(|u| u.page_title = "Hospitais".to_owned());

    let feedback = RwSignal::new(None::<String>);
    let hospitais = LocalResource::new(move || async move { hospitais::listar(session).await });

    let on_excluir = move |id: i64| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match hospitais::excluir(session, id).await {
                Ok(()) => {
                    feedback.set(Some("Hospital excluído.".to_owned()));
                    hospitais.refetch();
                }
                Err(e) => feedback.set(Some(format!("Erro ao excluir hospital: {e}"))),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    };

    view! {
        <section class="hospital-list">
            <div class="list-header">
                <a href="/dashboard/hospitais/novo" class="btn btn--primary">
                    "+ Novo Hospital"
                </a>
            </div>

            <Show when=move || feedback.get().is_some()>
                <p class="feedback">{move || feedback.get().unwrap_or_default()}</p>
            </Show>

            <Suspense fallback=move || view! { <p class="loading">"Carregando hospitais..."</p> }>
                {move || {
                    hospitais
                        .get()
                        .map(|result| match result {
                            Ok(lista) => {
                                view! {
                                    <table class="table">
                                        <thead>
                                            <tr>
                                                <th>"Nome"</th>
                                                <th>"CNPJ"</th>
                                                <th>"Telefone"</th>
                                                <th>"Endereço"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {lista
                                                .into_iter()
                                                .map(|h: Hospital| {
                                                    let id = h.id;
                                                    view! {
                                                        <tr>
                                                            <td>{h.nome.clone()}</td>
                                                            <td>{h.cnpj.clone()}</td>
                                                            <td>{h.telefone1.clone()}</td>
                                                            <td>
                                                                {h
                                                                    .endereco
                                                                    .clone()
                                                                    .unwrap_or_else(|| "—".to_owned())}
                                                            </td>
                                                            <td>
                                                                {id
                                                                    .map(|id| {
                                                                        view! {
                                                                            <span class="table__actions">
                                                                                <a
                                                                                    href=format!("/dashboard/hospitais/{id}/editar")
                                                                                    class="table__link"
                                                                                >
                                                                                    "Editar"
                                                                                </a>
                                                                                <button
                                                                                    class="btn btn--danger"
                                                                                    on:click=move |_| on_excluir(id)
                                                                                >
                                                                                    "Excluir"
                                                                                </button>
                                                                            </span>
                                                                        }
                                                                    })}
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
                                        {format!("Não foi possível carregar os hospitais: {e}")}
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
