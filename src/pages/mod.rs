//! Route views.
//!
//! Every dashboard page wraps itself in [`crate::auth::guard::Guarded`]
//! (directly or via the shell) and talks to the backend through the
//! feature services; pure form/validation helpers sit next to the
//! components so they test off-browser.

pub mod dashboard;
pub mod disponibilidade;
pub mod especialidade_form;
pub mod especialidade_list;
pub mod hospital_form;
pub mod hospital_list;
pub mod login;
pub mod medico_form;
pub mod medico_list;
pub mod overview;
pub mod perfil;
pub mod plantao_buscar;
pub mod plantao_detalhes;
pub mod plantao_form;
pub mod plantao_list;
