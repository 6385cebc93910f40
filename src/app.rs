//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::auth::session::{SessionState, init_session};
use crate::pages::dashboard::DashboardShell;
use crate::pages::disponibilidade::DisponibilidadePage;
use crate::pages::especialidade_form::EspecialidadeFormPage;
use crate::pages::especialidade_list::EspecialidadeListPage;
use crate::pages::hospital_form::HospitalFormPage;
use crate::pages::hospital_list::HospitalListPage;
use crate::pages::login::LoginPage;
use crate::pages::medico_form::MedicoFormPage;
use crate::pages::medico_list::MedicoListPage;
use crate::pages::overview::OverviewPage;
use crate::pages::perfil::PerfilPage;
use crate::pages::plantao_buscar::BuscarPlantoesPage;
use crate::pages::plantao_detalhes::PlantaoDetalhesPage;
use crate::pages::plantao_form::CriarPlantaoPage;
use crate::pages::plantao_list::PlantaoListPage;
use crate::state::notifications::NotificationsState;
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides the session and shared state contexts, wires the websocket
/// notification subscriber, and sets up client-side routing. The session
/// is seeded from whatever credential survived in storage, so a reload
/// keeps the user logged in.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session: RwSignal<SessionState> = RwSignal::new(init_session());
    let ui = RwSignal::new(UiState::default());
    let notifications = RwSignal::new(NotificationsState::default());

    provide_context(session);
    provide_context(ui);
    provide_context(notifications);

    #[cfg(feature = "csr")]
    crate::net::ws::spawn_notification_client(notifications);

    view! {
        <Title text="FluxivaMed"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/auth/login"/> }>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Redirect path="/auth/login"/> }
                />
                <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>

                <ParentRoute path=StaticSegment("dashboard") view=DashboardShell>
                    <Route path=StaticSegment("") view=OverviewPage/>
                    <Route path=StaticSegment("overview") view=OverviewPage/>

                    <Route path=StaticSegment("plantoes") view=PlantaoListPage/>
                    <Route
                        path=(StaticSegment("plantoes"), StaticSegment("novo"))
                        view=CriarPlantaoPage
                    />
                    <Route
                        path=(StaticSegment("plantoes"), StaticSegment("buscar"))
                        view=BuscarPlantoesPage
                    />
                    <Route
                        path=(StaticSegment("plantoes"), ParamSegment("id"))
                        view=PlantaoDetalhesPage
                    />

                    <Route path=StaticSegment("hospitais") view=HospitalListPage/>
                    <Route
                        path=(StaticSegment("hospitais"), StaticSegment("novo"))
                        view=HospitalFormPage
                    />
                    <Route
                        path=(
                            StaticSegment("hospitais"),
                            ParamSegment("id"),
                            StaticSegment("editar"),
                        )
                        view=HospitalFormPage
                    />

                    <Route path=StaticSegment("medicos") view=MedicoListPage/>
                    <Route
                        path=(StaticSegment("medicos"), StaticSegment("novo"))
                        view=MedicoFormPage
                    />
                    <Route
                        path=(
                            StaticSegment("medicos"),
                            ParamSegment("id"),
                            StaticSegment("editar"),
                        )
                        view=MedicoFormPage
                    />

                    <Route path=StaticSegment("especialidades") view=EspecialidadeListPage/>
                    <Route
                        path=(StaticSegment("especialidades"), StaticSegment("nova"))
                        view=EspecialidadeFormPage
                    />

                    <Route path=StaticSegment("disponibilidade") view=DisponibilidadePage/>
                    <Route path=StaticSegment("perfil") view=PerfilPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
