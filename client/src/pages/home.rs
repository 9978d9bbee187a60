//! Map viewer landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The globe itself is mounted by the map viewer; this page owns the data
//! it is fed with: the monitoring point inventory, fetched through the
//! authenticated API client once on mount.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use api::{ApiConfig, MonitorPoint};
use leptos::prelude::*;
use session::Session;

use crate::components::session_bar::SessionBar;

fn format_position(point: &MonitorPoint) -> String {
    format!("{:.5}, {:.5} @ {:.1} m", point.latitude, point.longitude, point.height)
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let config = expect_context::<ApiConfig>();

    let points = RwSignal::new(Vec::<MonitorPoint>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let client = crate::net::connect(&config, &session);
    #[cfg(feature = "csr")]
    {
        if let Some(client) = client {
            leptos::task::spawn_local(async move {
                match client.points().await {
                    Ok(list) => points.set(list),
                    // A 401 has already expired the session; the app-level
                    // subscriber is redirecting.
                    Err(e) => error.set(Some(e.to_string())),
                }
                loading.set(false);
            });
        } else {
            loading.set(false);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = client;
        loading.set(false);
    }

    view! {
        <div class="home-page">
            <SessionBar/>
            <section class="point-list">
                <h2>"Monitoring points"</h2>
                <Show when=move || loading.get()>
                    <p>"Loading points..."</p>
                </Show>
                <Show when=move || error.get().is_some()>
                    <p class="point-list__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <ul>
                    <For
                        each=move || points.get()
                        key=|point| point.point_code.clone()
                        children=move |point| {
                            let position = format_position(&point);
                            view! {
                                <li class="point-list__item">
                                    <span class="point-list__code">{point.point_code}</span>
                                    <span class="point-list__name">{point.point_name}</span>
                                    <span class="point-list__type">{point.device_type}</span>
                                    <span class="point-list__position">{position}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </section>
        </div>
    }
}
