//! Application Context
//!
//! App-wide navigation and notification state provided via Leptos context.

use leptos::prelude::*;

use crate::route::{self, Route};
use crate::toast::{ToastLevel, Toasts};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub route: RwSignal<Route>,
    pub toasts: Toasts,
}

impl AppContext {
    pub fn new(initial: Route) -> Self {
        Self {
            route: RwSignal::new(initial),
            toasts: Toasts::new(),
        }
    }

    /// Switches the rendered view and mirrors it into the location hash.
    pub fn navigate(&self, route: Route) {
        self.route.set(route);
        route::set_location_hash(route);
    }

    pub fn toast_success(&self, message: impl Into<String>) {
        self.toasts.push(ToastLevel::Success, message);
    }

    pub fn toast_error(&self, message: impl Into<String>) {
        self.toasts.push(ToastLevel::Error, message);
    }

    pub fn toast_info(&self, message: impl Into<String>) {
        self.toasts.push(ToastLevel::Info, message);
    }
}

/// Get the app context from context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
