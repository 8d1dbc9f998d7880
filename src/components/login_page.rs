//! Login Page Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::input_value;
use crate::context::use_app_context;
use crate::route::Route;
use crate::session::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get();
        let password = password.get();
        if email.trim().is_empty() || password.is_empty() {
            return;
        }
        set_submitting.set(true);
        spawn_local(async move {
            // failure is toasted inside login; session state stays untouched
            let _ = session.login(&email, &password).await;
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-subtitle">"Sign in to your agency workspace"</p>
                <form class="auth-form" on:submit=submit>
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
                        {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "No account yet? "
                    <a href="#/signup" on:click=move |_| ctx.navigate(Route::Signup)>
                        "Create one"
                    </a>
                </p>
            </div>
        </div>
    }
}
