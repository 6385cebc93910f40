//! Login page: email + password against the backend's `/auth/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::http::ApiError;
use crate::net::types::LoginRequest;

/// Trim and require both fields before hitting the backend.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Informe email e senha.");
    }
    Ok(LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// User-facing message for a failed login attempt.
pub fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Status { status: 401, .. } => {
            "Credenciais inválidas. Verifique seu email e senha.".to_owned()
        }
        ApiError::Status { message, .. } => message.clone(),
        _ => "Ocorreu um erro ao tentar fazer login. Tente novamente mais tarde.".to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<crate::auth::session::Session>();
    let query = use_query_map();
    let navigate = leptos_router::hooks::use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let session_expired = move || query.read().get("sessionExpired").is_some();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(None);

        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };

        busy.set(true);
        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::auth_api::login(session, &credentials).await {
                    Ok(resp) if !resp.access_token.is_empty() => {
                        crate::auth::session::apply_login(session, &resp.access_token);
                        navigate(
                            crate::auth::guard::OVERVIEW_PATH,
                            leptos_router::NavigateOptions::default(),
                        );
                    }
                    Ok(_) => {
                        crate::auth::session::apply_logout(session);
                        error.set(Some("Resposta de login sem token de acesso.".to_owned()));
                        busy.set(false);
                    }
                    Err(e) => {
                        error.set(Some(login_error_message(&e)));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"FluxivaMed"</h1>
                <p class="login-card__subtitle">"Gestão de plantões médicos"</p>

                <Show when=session_expired>
                    <p class="login-message login-message--warn">
                        "Sua sessão expirou. Entre novamente."
                    </p>
                </Show>

                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="voce@exemplo.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="senha"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Entrar"
                    </button>
                </form>

                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>
            </div>
        </div>
    }
}
