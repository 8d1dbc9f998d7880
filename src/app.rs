//! Application Root
//!
//! Wires up contexts, restores the session, guards routes, and swaps pages
//! on the route signal.

use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

use crate::components::{
    AdminPage, CalendarPage, ContactsPage, DashboardPage, DealsPage, LoginPage, PropertiesPage,
    SettingsPage, Sidebar, SignupPage, ToastHost, TransactionsPage,
};
use crate::context::AppContext;
use crate::route::{self, Route};
use crate::session::{SessionContext, SessionState};

fn page_view(route: Route) -> AnyView {
    match route {
        Route::Dashboard => view! { <DashboardPage/> }.into_any(),
        Route::Properties => view! { <PropertiesPage/> }.into_any(),
        Route::Contacts => view! { <ContactsPage/> }.into_any(),
        Route::Deals => view! { <DealsPage/> }.into_any(),
        Route::Transactions => view! { <TransactionsPage/> }.into_any(),
        Route::Calendar => view! { <CalendarPage/> }.into_any(),
        Route::Admin => view! { <AdminPage/> }.into_any(),
        Route::Settings => view! { <SettingsPage/> }.into_any(),
        // guarded before render; kept total so the match stays exhaustive
        Route::Login => view! { <LoginPage/> }.into_any(),
        Route::Signup => view! { <SignupPage/> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(route::current_route());
    let session = SessionContext::new(ctx);
    provide_context(ctx);
    provide_context(session);

    // Synchronous, so gated views never flash before the token check.
    session.bootstrap();

    // Back/forward buttons and hand-typed hashes land on the route signal.
    let on_hash = Closure::<dyn FnMut()>::new(move || {
        ctx.route.set(route::current_route());
    });
    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("hashchange", on_hash.as_ref().unchecked_ref());
    }
    on_hash.forget();

    // Route guard: anonymous users stay on the auth pages, signed-in users
    // skip them, and the admin page needs the superuser claim.
    Effect::new(move |_| {
        let route = ctx.route.get();
        match session.state().get() {
            SessionState::Loading => {}
            SessionState::Anonymous => {
                if route.requires_auth() {
                    ctx.navigate(Route::Login);
                }
            }
            SessionState::Authenticated(claims) => {
                if !route.requires_auth() || (route == Route::Admin && !claims.is_superuser) {
                    ctx.navigate(Route::Dashboard);
                }
            }
        }
    });

    Effect::new(move |_| {
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            document.set_title(&format!("{} | Estate CRM", ctx.route.get().title()));
        }
    });

    view! {
        <ToastHost/>
        {move || {
            let route = ctx.route.get();
            match session.state().get() {
                SessionState::Loading => {
                    view! { <div class="splash">"Loading..."</div> }.into_any()
                }
                SessionState::Anonymous => {
                    match route {
                        Route::Signup => view! { <SignupPage/> }.into_any(),
                        _ => view! { <LoginPage/> }.into_any(),
                    }
                }
                SessionState::Authenticated(_) => {
                    if route.requires_auth() {
                        view! {
                            <div class="app-shell">
                                <Sidebar/>
                                <main class="app-main">
                                    <header class="app-header">
                                        <h1>{route.title()}</h1>
                                    </header>
                                    {page_view(route)}
                                </main>
                            </div>
                        }
                            .into_any()
                    } else {
                        // the guard effect redirects in the same tick
                        view! { <div class="splash">"Loading..."</div> }.into_any()
                    }
                }
            }
        }}
    }
}
