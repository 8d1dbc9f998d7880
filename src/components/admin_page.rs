//! Admin Page Component
//!
//! Platform-wide stats and the agent roster. Reached only by superusers;
//! routing redirects everyone else before this renders.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::format_day;
use crate::api;
use crate::models::{PlatformStats, UserAccount};
use crate::session::use_session;
use crate::sync::{is_alive, view_alive};

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = use_session();

    let (stats, set_stats) = signal::<Option<PlatformStats>>(None);
    let (users, set_users) = signal::<Vec<UserAccount>>(Vec::new());
    let (loading, set_loading) = signal(true);

    let alive = view_alive();
    spawn_local(async move {
        match api::platform_stats().await {
            Ok(data) => {
                if is_alive(&alive) {
                    set_stats.set(Some(data));
                }
            }
            Err(err) => {
                if is_alive(&alive) {
                    session.handle_api_error(&err);
                }
            }
        }
        match api::list_users().await {
            Ok(items) => {
                if is_alive(&alive) {
                    set_users.set(items);
                    set_loading.set(false);
                }
            }
            Err(err) => {
                if is_alive(&alive) {
                    set_loading.set(false);
                    session.handle_api_error(&err);
                }
            }
        }
    });

    view! {
        <div class="page">
            <h2 class="page-heading">"Platform Overview"</h2>
            {move || {
                stats
                    .get()
                    .map(|stats| {
                        view! {
                            <div class="metric-cards">
                                <div class="metric-card">
                                    <h3>"Total Agents"</h3>
                                    <p class="metric-value">{stats.total_agents}</p>
                                </div>
                                <div class="metric-card">
                                    <h3>"Total Deals"</h3>
                                    <p class="metric-value">{stats.total_deals}</p>
                                </div>
                                <div class="metric-card">
                                    <h3>"Avg Deals / Agent"</h3>
                                    <p class="metric-value">
                                        {format!("{:.1}", stats.avg_deals_per_agent)}
                                    </p>
                                </div>
                                <div class="metric-card">
                                    <h3>"New This Week"</h3>
                                    <p class="metric-value">{stats.new_agents_week}</p>
                                </div>
                            </div>
                        }
                    })
            }}

            <Show when=move || !loading.get() fallback=|| view! { <div class="page-loading">"Loading..."</div> }>
                <table class="record-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Status"</th>
                            <th>"Joined"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            users
                                .get()
                                .into_iter()
                                .map(|user| {
                                    let name = {
                                        let full = format!("{} {}", user.first_name, user.last_name);
                                        if full.trim().is_empty() {
                                            "-".to_string()
                                        } else {
                                            full.trim().to_string()
                                        }
                                    };
                                    view! {
                                        <tr>
                                            <td class="cell-strong">
                                                {name}
                                                {user
                                                    .is_superuser
                                                    .then(|| view! { <span class="badge">"Admin"</span> })}
                                            </td>
                                            <td>{user.email}</td>
                                            <td>
                                                <span class={if user.is_active {
                                                    "badge badge-active"
                                                } else {
                                                    "badge"
                                                }}>{if user.is_active { "Active" } else { "Inactive" }}</span>
                                            </td>
                                            <td>{format_day(&user.date_joined)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
