//! Toast Host Component
//!
//! Renders the toast queue in a fixed corner; click dismisses early.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_app_context().toasts;

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .items()
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=toast.level.css_class() on:click=move |_| toasts.dismiss(id)>
                                {toast.message}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
