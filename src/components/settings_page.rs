//! Settings Page Component
//!
//! Read-only account details pulled from the decoded access token.

use leptos::prelude::*;

use crate::session::use_session;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="page">
            <h2 class="page-heading">"Settings"</h2>
            <div class="widget settings-card">
                <h3 class="widget-title">"Account"</h3>
                {move || {
                    session
                        .state()
                        .get()
                        .claims()
                        .map(|claims| {
                            view! {
                                <dl class="settings-list">
                                    <dt>"Email"</dt>
                                    <dd>
                                        {claims.email.clone().unwrap_or_else(|| "-".to_string())}
                                    </dd>
                                    <dt>"Username"</dt>
                                    <dd>
                                        {claims.username.clone().unwrap_or_else(|| "-".to_string())}
                                    </dd>
                                    <dt>"User ID"</dt>
                                    <dd>{claims.user_id}</dd>
                                    <dt>"Organization"</dt>
                                    <dd>
                                        {claims
                                            .organization_id
                                            .map(|id| id.to_string())
                                            .unwrap_or_else(|| "-".to_string())}
                                    </dd>
                                    <dt>"Role"</dt>
                                    <dd>
                                        {if claims.is_superuser { "Administrator" } else { "Agent" }}
                                    </dd>
                                </dl>
                            }
                        })
                }}
                <button class="danger-btn" on:click=move |_| session.logout()>
                    "Sign out"
                </button>
            </div>
        </div>
    }
}
