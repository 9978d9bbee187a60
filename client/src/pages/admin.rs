//! Administration page: account details and the latest reading per point.

use api::{ApiConfig, LatestMeasurement};
use leptos::prelude::*;
use session::Session;

use crate::components::session_bar::SessionBar;
use crate::state::auth::AuthState;

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let config = expect_context::<ApiConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let latest = RwSignal::new(Vec::<LatestMeasurement>::new());
    let error = RwSignal::new(None::<String>);

    let client = crate::net::connect(&config, &session);
    #[cfg(feature = "csr")]
    {
        if let Some(client) = client {
            leptos::task::spawn_local(async move {
                match client.latest_measurements().await {
                    Ok(rows) => latest.set(rows),
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = client;
    }

    let role = move || {
        auth.get()
            .user
            .map_or_else(|| "unknown".to_owned(), |u| u.role)
    };

    view! {
        <div class="admin-page">
            <SessionBar/>
            <section class="admin-page__account">
                <h2>"Account"</h2>
                <p>{move || auth.get().display_name()} " (" {role} ")"</p>
            </section>
            <section class="admin-page__latest">
                <h2>"Latest readings"</h2>
                <Show when=move || error.get().is_some()>
                    <p class="admin-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <table>
                    <thead>
                        <tr><th>"Point"</th><th>"Name"</th><th>"Value"</th><th>"Time"</th></tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || latest.get()
                            key=|row| row.point_code.clone()
                            children=move |row| {
                                view! {
                                    <tr>
                                        <td>{row.point_code}</td>
                                        <td>{row.point_name}</td>
                                        <td>{format!("{:.3}", row.value)}</td>
                                        <td>{row.time}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>
        </div>
    }
}
