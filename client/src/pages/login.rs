//! Login page: username + password against `/auth/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use api::ApiConfig;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use session::Session;

use crate::router::guard::REDIRECT_PARAM;
use crate::state::auth::AuthState;

fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

fn login_failed_message(err: &api::ApiError) -> String {
    match err.status() {
        Some(401) => "Incorrect username or password.".to_owned(),
        Some(status) => format!("Login failed: server returned {status}."),
        None => format!("Login failed: {err}"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let config = expect_context::<ApiConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user_value, pass_value) = match validate_login_input(&username.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        let Some(client) = crate::net::connect(&config, &session) else {
            info.set("API client unavailable.".to_owned());
            return;
        };
        let target = crate::router::guard::post_login_target(query.read().get(REDIRECT_PARAM).as_deref());
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match client.login(&user_value, &pass_value).await {
                    Ok(_) if client.session().is_authenticated() => {
                        auth.set(AuthState::from_session(client.session()));
                        info.set(String::new());
                        navigate(&target, leptos_router::NavigateOptions::default());
                    }
                    Ok(_) => info.set("Login failed: no token in server reply.".to_owned()),
                    Err(e) => info.set(login_failed_message(&e)),
                }
                password.set(String::new());
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (client, user_value, pass_value, target, auth, &navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Hydromap"</h1>
                <p class="login-card__subtitle">"Dam safety monitoring"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn login-submit" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-info">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
