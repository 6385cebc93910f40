//! Landing page: role-dependent stat cards.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use leptos::prelude::*;

use crate::auth::session::{Session, SessionState};
use crate::components::header::header_user_name;
use crate::net::dashboard;
use crate::net::types::{AdminStats, MedicoStats};
use crate::state::ui::UiState;
use crate::util::format::format_currency_brl;

/// Which stats block the session gets; administrators and schedulers win
/// over a combined admin+médico account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardAudience {
    AdminLike,
    Medico,
    Nenhum,
}

pub fn dashboard_audience(state: &SessionState) -> DashboardAudience {
    if state.has_role("ADMIN") || state.has_role("HOSPITAL_ADMIN") || state.has_role("ESCALISTA") {
        DashboardAudience::AdminLike
    } else if state.has_role("MEDICO") {
        DashboardAudience::Medico
    } else {
        DashboardAudience::Nenhum
    }
}

#[derive(Clone, Debug)]
enum StatsView {
    Admin(AdminStats),
    Medico(MedicoStats),
    Nenhum,
    Erro(String),
}

#[component]
pub fn OverviewPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let ui = expect_context::<RwSignal<UiState>>();
    ui.update(|u| u.page_title = "Visão Geral".to_owned());

    let stats = LocalResource::new(move || async move {
        match dashboard_audience(&session.get_untracked()) {
            DashboardAudience::AdminLike => match dashboard::admin_stats(session).await {
                Ok(s) => StatsView::Admin(s),
                Err(e) => StatsView::Erro(e.to_string()),
            },
            DashboardAudience::Medico => match dashboard::medico_stats(session).await {
                Ok(s) => StatsView::Medico(s),
                Err(e) => StatsView::Erro(e.to_string()),
            },
            DashboardAudience::Nenhum => StatsView::Nenhum,
        }
    });

    view! {
        <section class="overview">
            <h2 class="overview__greeting">
                {move || format!("Bem-vindo(a), {}", header_user_name(&session.get()))}
            </h2>

            <Suspense fallback=move || {
                view! { <p class="loading">"Carregando indicadores..."</p> }
            }>
                {move || {
                    stats
                        .get()
                        .map(|view| match view {
                            StatsView::Admin(s) => admin_cards(&s).into_any(),
                            StatsView::Medico(s) => medico_cards(&s).into_any(),
                            StatsView::Nenhum => {
                                view! {
                                    <p class="overview__empty">
                                        "Nenhum indicador disponível para o seu perfil."
                                    </p>
                                }
                                    .into_any()
                            }
                            StatsView::Erro(message) => {
                                view! { <p class="error">{message}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

fn admin_cards(stats: &AdminStats) -> impl IntoView {
    view! {
        <div class="overview__cards">
            <StatCard label="Plantões disponíveis" value=stats.plantoes_disponiveis.to_string()/>
            <StatCard label="Candidaturas pendentes" value=stats.plantoes_pendentes.to_string()/>
            <StatCard label="Médicos cadastrados" value=stats.total_medicos.to_string()/>
            <StatCard
                label="Faturamento previsto"
                value=format_currency_brl(stats.faturamento_previsto)
            />
        </div>
    }
}

fn medico_cards(stats: &MedicoStats) -> impl IntoView {
    view! {
        <div class="overview__cards">
            <StatCard label="Próximos plantões" value=stats.proximos_plantoes.to_string()/>
            <StatCard label="Candidaturas pendentes" value=stats.candidaturas_pendentes.to_string()/>
            <StatCard label="Pagamentos pendentes" value=stats.pagamentos_pendentes.to_string()/>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
