//! Top bar with the signed-in user, navigation links, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shown on every protected page. Logout is local only: the session is
//! cleared and the router is sent to `/login`.

use api::ApiConfig;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use session::Session;

use crate::router::AppRoute;
use crate::state::auth::AuthState;

#[component]
pub fn SessionBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<Session>();
    let config = expect_context::<ApiConfig>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        match crate::net::connect(&config, &session) {
            Some(client) => client.logout(),
            None => session.clear(),
        }
        auth.set(AuthState::default());
        navigate(AppRoute::Login.path(), NavigateOptions::default());
    };

    view! {
        <header class="session-bar">
            <A href=AppRoute::Home.path()>"Map"</A>
            <Show when=move || auth.get().is_admin()>
                <A href=AppRoute::Admin.path()>"Admin"</A>
            </Show>
            <span class="session-bar__spacer"></span>
            <span class="session-bar__user">{move || auth.get().display_name()}</span>
            <button class="btn session-bar__logout" on:click=on_logout>
                "Log out"
            </button>
        </header>
    }
}
