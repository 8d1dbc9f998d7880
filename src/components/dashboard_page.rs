//! Dashboard Page Component
//!
//! Metric cards, stage funnel, recent activity, plus the todo and schedule
//! widgets.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::format_day;
use super::{ScheduleWidget, TodoWidget};
use crate::api;
use crate::models::{format_currency, DashboardStats};
use crate::session::use_session;
use crate::sync::{is_alive, view_alive};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();

    let (stats, set_stats) = signal::<Option<DashboardStats>>(None);
    let (loading, set_loading) = signal(true);

    let alive = view_alive();
    spawn_local(async move {
        match api::dashboard_stats().await {
            Ok(data) => {
                if is_alive(&alive) {
                    set_stats.set(Some(data));
                    set_loading.set(false);
                }
            }
            Err(err) => {
                web_sys::console::error_1(&format!("dashboard stats failed: {err}").into());
                if is_alive(&alive) {
                    set_loading.set(false);
                    session.handle_api_error(&err);
                }
            }
        }
    });

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <div class="page-loading">"Loading..."</div> }>
            {move || {
                stats
                    .get()
                    .map(|stats| {
                        let funnel_max = stats
                            .deals_by_status
                            .iter()
                            .map(|row| row.count)
                            .max()
                            .unwrap_or(0)
                            .max(1);
                        view! {
                            <div class="dashboard">
                                <div class="metric-cards">
                                    <div class="metric-card">
                                        <h3>"Total Active Deals"</h3>
                                        <p class="metric-value">{stats.total_active_deals}</p>
                                        <p class="muted">"in pipeline"</p>
                                    </div>
                                    <div class="metric-card">
                                        <h3>"Closed Volume"</h3>
                                        <p class="metric-value accent">
                                            {format_currency(stats.closed_volume)}
                                        </p>
                                        <p class="muted">"Year to Date"</p>
                                    </div>
                                    <div class="metric-card">
                                        <h3>"Win Rate"</h3>
                                        <p class="metric-value">{format!("{}%", stats.win_rate)}</p>
                                        <p class="muted">"Conversion"</p>
                                    </div>
                                </div>

                                <div class="dashboard-grid">
                                    <div class="widget funnel-widget">
                                        <h3 class="widget-title">"Deal Funnel"</h3>
                                        {stats
                                            .deals_by_status
                                            .iter()
                                            .map(|row| {
                                                let width = row.count * 100 / funnel_max;
                                                view! {
                                                    <div class="funnel-row">
                                                        <span class="funnel-label">{row.stage.clone()}</span>
                                                        <div class="funnel-track">
                                                            <div
                                                                class="funnel-bar"
                                                                style=format!("width:{width}%")
                                                            ></div>
                                                        </div>
                                                        <span class="funnel-count">{row.count}</span>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                        <h3 class="widget-title">"Recent Activity"</h3>
                                        {stats
                                            .recent_transactions
                                            .iter()
                                            .map(|deal| {
                                                view! {
                                                    <div class="recent-row">
                                                        <span class="recent-address">
                                                            {deal
                                                                .property_address
                                                                .clone()
                                                                .unwrap_or_else(|| "Unlisted".to_string())}
                                                        </span>
                                                        <span class="badge">{deal.stage.clone()}</span>
                                                        <span class="recent-value">
                                                            {format_currency(deal.value)}
                                                        </span>
                                                        <span class="muted">{format_day(&deal.created_at)}</span>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <TodoWidget/>
                                    <ScheduleWidget events=stats.todays_schedule.clone()/>
                                </div>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
