//! Signup Page Component
//!
//! Creates an account and signs straight in. The email doubles as the
//! username, lowercased before it goes over the wire.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::input_value;
use crate::api::RegisterArgs;
use crate::context::use_app_context;
use crate::route::Route;
use crate::session::{normalize_identifier, use_session};

#[component]
pub fn SignupPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let first_name = first_name.get();
        let last_name = last_name.get();
        let email = email.get();
        let password = password.get();
        if email.trim().is_empty() || password.len() < 6 {
            ctx.toast_error("Enter an email and a password of at least 6 characters");
            return;
        }
        set_submitting.set(true);
        spawn_local(async move {
            let username = normalize_identifier(&email);
            let args = RegisterArgs {
                username: &username,
                email: &username,
                password: &password,
                first_name: &first_name,
                last_name: &last_name,
            };
            let _ = session.register(&args).await;
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <p class="auth-subtitle">"Enter your details to get started"</p>
                <form class="auth-form" on:submit=submit>
                    <div class="form-row">
                        <label>
                            "First Name"
                            <input
                                type="text"
                                placeholder="John"
                                prop:value=move || first_name.get()
                                on:input=move |ev| set_first_name.set(input_value(&ev))
                            />
                        </label>
                        <label>
                            "Last Name"
                            <input
                                type="text"
                                placeholder="Doe"
                                prop:value=move || last_name.get()
                                on:input=move |ev| set_last_name.set(input_value(&ev))
                            />
                        </label>
                    </div>
                    <label>
                        "Email"
                        <input
                            type="email"
                            placeholder="agent@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(input_value(&ev))
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(input_value(&ev))
                        />
                    </label>
                    <button type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Creating..." } else { "Create Account" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "Already have an account? "
                    <a href="#/login" on:click=move |_| ctx.navigate(Route::Login)>
                        "Sign in"
                    </a>
                </p>
            </div>
        </div>
    }
}
