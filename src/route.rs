//! Route Handling
//!
//! Signal-driven view switching synced to the URL hash. No router crate;
//! the app swaps views on a `Route` signal the same way workspaces swap on
//! a tab signal.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    Dashboard,
    Properties,
    Contacts,
    Deals,
    Transactions,
    Calendar,
    Admin,
    Settings,
}

impl Route {
    pub fn hash(self) -> &'static str {
        match self {
            Route::Login => "#/login",
            Route::Signup => "#/signup",
            Route::Dashboard => "#/dashboard",
            Route::Properties => "#/properties",
            Route::Contacts => "#/contacts",
            Route::Deals => "#/deals",
            Route::Transactions => "#/transactions",
            Route::Calendar => "#/calendar",
            Route::Admin => "#/admin",
            Route::Settings => "#/settings",
        }
    }

    pub fn from_hash(hash: &str) -> Option<Route> {
        match hash.trim_start_matches('#') {
            "/login" => Some(Route::Login),
            "/signup" => Some(Route::Signup),
            "" | "/" | "/dashboard" => Some(Route::Dashboard),
            "/properties" => Some(Route::Properties),
            "/contacts" => Some(Route::Contacts),
            "/deals" => Some(Route::Deals),
            "/transactions" => Some(Route::Transactions),
            "/calendar" => Some(Route::Calendar),
            "/admin" => Some(Route::Admin),
            "/settings" => Some(Route::Settings),
            _ => None,
        }
    }

    /// Anything past the login/signup pair gates on an authenticated session.
    pub fn requires_auth(self) -> bool {
        !matches!(self, Route::Login | Route::Signup)
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Login => "Sign In",
            Route::Signup => "Create Account",
            Route::Dashboard => "Dashboard",
            Route::Properties => "Properties",
            Route::Contacts => "Contacts",
            Route::Deals => "Deals",
            Route::Transactions => "Transactions",
            Route::Calendar => "Calendar",
            Route::Admin => "Admin",
            Route::Settings => "Settings",
        }
    }
}

/// Route encoded in the current location hash, defaulting to the dashboard.
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .and_then(|hash| Route::from_hash(&hash))
        .unwrap_or(Route::Dashboard)
}

pub fn set_location_hash(route: Route) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(route.hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_roundtrip() {
        for route in [
            Route::Login,
            Route::Signup,
            Route::Dashboard,
            Route::Properties,
            Route::Contacts,
            Route::Deals,
            Route::Transactions,
            Route::Calendar,
            Route::Admin,
            Route::Settings,
        ] {
            assert_eq!(Route::from_hash(route.hash()), Some(route));
        }
    }

    #[test]
    fn test_unknown_and_empty_hashes() {
        assert_eq!(Route::from_hash(""), Some(Route::Dashboard));
        assert_eq!(Route::from_hash("#/"), Some(Route::Dashboard));
        assert_eq!(Route::from_hash("#/nope"), None);
    }

    #[test]
    fn test_auth_gating() {
        assert!(!Route::Login.requires_auth());
        assert!(!Route::Signup.requires_auth());
        assert!(Route::Dashboard.requires_auth());
        assert!(Route::Admin.requires_auth());
    }
}
