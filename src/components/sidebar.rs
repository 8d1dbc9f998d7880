//! Sidebar Component
//!
//! Left navigation rail with the signed-in user and sign-out action.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::route::Route;
use crate::session::use_session;

const NAV_ITEMS: &[(Route, &str)] = &[
    (Route::Dashboard, "Dashboard"),
    (Route::Properties, "Properties"),
    (Route::Contacts, "Contacts"),
    (Route::Deals, "Deals"),
    (Route::Transactions, "Transactions"),
    (Route::Calendar, "Calendar"),
    (Route::Settings, "Settings"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    let nav_button = move |route: Route, label: &'static str| {
        view! {
            <button
                class=move || {
                    if ctx.route.get() == route { "nav-item active" } else { "nav-item" }
                }
                on:click=move |_| ctx.navigate(route)
            >
                {label}
            </button>
        }
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">"Estate CRM"</div>
            <nav class="sidebar-nav">
                {NAV_ITEMS
                    .iter()
                    .map(|(route, label)| nav_button(*route, label))
                    .collect_view()}
                <Show when=move || {
                    session.state().get().claims().is_some_and(|claims| claims.is_superuser)
                }>
                    {nav_button(Route::Admin, "Admin")}
                </Show>
            </nav>
            <div class="sidebar-footer">
                <div class="sidebar-user">
                    {move || {
                        session
                            .state()
                            .get()
                            .claims()
                            .and_then(|claims| {
                                claims.email.clone().or_else(|| claims.username.clone())
                            })
                            .unwrap_or_default()
                    }}
                </div>
                <button class="logout-btn" on:click=move |_| session.logout()>
                    "Sign Out"
                </button>
            </div>
        </aside>
    }
}
