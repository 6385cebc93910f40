//! Physician availability editor: declare new windows, review and delete
//! saved ones.

#[cfg(test)]
#[path = "disponibilidade_test.rs"]
mod disponibilidade_test;

use leptos::prelude::*;

use crate::auth::guard::Guarded;
use crate::auth::session::Session;
use crate::net::medicos;
use crate::net::types::PeriodoDisponibilidade;
use crate::state::ui::UiState;
use crate::util::format::format_datetime_br;

/// One editable row of the availability form, date and time split the way
/// the inputs collect them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PeriodoRow {
    pub data_inicio: String,
    pub hora_inicio: String,
    pub data_fim: String,
    pub hora_fim: String,
}

/// `2026-08-10` + `08:00` → `2026-08-10T08:00:00`; empty parts yield
/// `None`.
pub fn combine_date_time(data: &str, hora: &str) -> Option<String> {
    let (data, hora) = (data.trim(), hora.trim());
    if data.is_empty() || hora.is_empty() {
        return None;
    }
    Some(format!("{data}T{hora}:00"))
}

/// Turn the form rows into request periods, enforcing complete rows and
/// start-before-end.
pub fn montar_periodos(rows: &[PeriodoRow]) -> Result<Vec<PeriodoDisponibilidade>, &'static str> {
    let mut periodos = Vec::with_capacity(rows.len());
    for row in rows {
        let inicio = combine_date_time(&row.data_inicio, &row.hora_inicio)
            .ok_or("Preencha todos os campos do período.")?;
        let fim = combine_date_time(&row.data_fim, &row.hora_fim)
            .ok_or("Preencha todos os campos do período.")?;
        if inicio >= fim {
            return Err("O início de cada período deve ser anterior ao fim.");
        }
        periodos.push(PeriodoDisponibilidade { id: None, inicio, fim });
    }
    if periodos.is_empty() {
        return Err("Adicione pelo menos um período.");
    }
    Ok(periodos)
}

/// Roles accepted for this view.
const ROLES_DISPONIBILIDADE: &[&str] = &["MEDICO"];

#[component]
pub fn DisponibilidadePage() -> impl IntoView {
    view! {
        <Guarded roles=ROLES_DISPONIBILIDADE>
            <DisponibilidadeInner/>
        </Guarded>
    }
}

#[component]
fn DisponibilidadeInner() -> impl IntoView {
    let session = expect_context::<Session>();
    let ui = expect_context::<RwSignal<UiState>>();
    ui.update(|u| u.page_title = "Minha Disponibilidade".to_owned());

    let rows = RwSignal::new(vec![PeriodoRow::default()]);
    let feedback = RwSignal::new(None::<String>);

    let salvos = LocalResource::new(move || async move {
        medicos::minha_disponibilidade(session).await.unwrap_or_default()
    });

    let on_add_row = move |_| rows.update(|r| r.push(PeriodoRow::default()));

    let on_remove_row = move |idx: usize| {
        rows.update(|r| {
            if r.len() > 1 {
                r.remove(idx);
            }
        });
    };

    let on_salvar = move |_| {
        feedback.set(None);
        let periodos = match montar_periodos(&rows.get()) {
            Ok(periodos) => periodos,
            Err(message) => {
                feedback.set(Some(message.to_owned()));
                return;
            }
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match medicos::salvar_minha_disponibilidade(session, periodos).await {
                Ok(()) => {
                    feedback.set(Some("Disponibilidade salva com sucesso!".to_owned()));
                    rows.set(vec![PeriodoRow::default()]);
                    salvos.refetch();
                }
                Err(e) => feedback.set(Some(format!("Erro ao salvar disponibilidade: {e}"))),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = periodos;
        }
    };

    let on_excluir_salvo = move |periodo_id: i64| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match medicos::excluir_disponibilidade(session, periodo_id).await {
                Ok(()) => salvos.refetch(),
                Err(e) => feedback.set(Some(format!("Erro ao remover período: {e}"))),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = periodo_id;
        }
    };

    view! {
        <section class="disponibilidade">
            <h3>"Novos períodos"</h3>
            <div class="periodo-rows">
                {move || {
                    rows.get()
                        .iter()
                        .enumerate()
                        .map(|(idx, row)| periodo_row_view(rows, idx, row, on_remove_row))
                        .collect::<Vec<_>>()
                }}
            </div>
            <div class="periodo-actions">
                <button class="btn" on:click=on_add_row>
                    "+ Adicionar período"
                </button>
                <button class="btn btn--primary" on:click=on_salvar>
                    "Salvar disponibilidade"
                </button>
            </div>

            <Show when=move || feedback.get().is_some()>
                <p class="feedback">{move || feedback.get().unwrap_or_default()}</p>
            </Show>

            <h3>"Períodos salvos"</h3>
            <Suspense fallback=move || view! { <p class="loading">"Carregando períodos..."</p> }>
                {move || {
                    salvos
                        .get()
                        .map(|periodos| {
                            if periodos.is_empty() {
                                view! { <p class="empty">"Nenhum período cadastrado."</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <ul class="periodo-list">
                                        {periodos
                                            .into_iter()
                                            .map(|p| {
                                                view! {
                                                    <li class="periodo-list__item">
                                                        <span>
                                                            {format!(
                                                                "{} — {}",
                                                                format_datetime_br(&p.inicio),
                                                                format_datetime_br(&p.fim),
                                                            )}
                                                        </span>
                                                        {p
                                                            .id
                                                            .map(|id| {
                                                                view! {
                                                                    <button
                                                                        class="btn btn--danger"
                                                                        on:click=move |_| on_excluir_salvo(id)
                                                                    >
                                                                        "Remover"
                                                                    </button>
                                                                }
                                                            })}
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

/// One editable period row; writes go straight back into the shared rows
/// signal by index.
fn periodo_row_view<F: Fn(usize) + Copy + 'static>(
    rows: RwSignal<Vec<PeriodoRow>>,
    idx: usize,
    row: &PeriodoRow,
    on_remove: F,
) -> impl IntoView + use<F> {
    let set_field = move |apply: fn(&mut PeriodoRow, String), value: String| {
        rows.update(|r| {
            if let Some(row) = r.get_mut(idx) {
                apply(row, value);
            }
        });
    };

    view! {
        <div class="periodo-row">
            <input
                type="date"
                prop:value=row.data_inicio.clone()
                on:input=move |ev| set_field(|r, v| r.data_inicio = v, event_target_value(&ev))
            />
            <input
                type="time"
                prop:value=row.hora_inicio.clone()
                on:input=move |ev| set_field(|r, v| r.hora_inicio = v, event_target_value(&ev))
            />
            <input
                type="date"
                prop:value=row.data_fim.clone()
                on:input=move |ev| set_field(|r, v| r.data_fim = v, event_target_value(&ev))
            />
            <input
                type="time"
                prop:value=row.hora_fim.clone()
                on:input=move |ev| set_field(|r, v| r.hora_fim = v, event_target_value(&ev))
            />
            <button class="btn btn--danger" on:click=move |_| on_remove(idx)>
                "Remover"
            </button>
        </div>
    }
}
