//! Session State
//!
//! Single source of truth for the signed-in user. Owns the
//! Loading / Anonymous / Authenticated state machine, restores it from the
//! persisted token at startup, and carries login, register and logout.
//! Views subscribe through context instead of checking tokens themselves.

use leptos::prelude::*;

use crate::api::{self, ApiError, LoginArgs, RegisterArgs};
use crate::context::AppContext;
use crate::models::{Claims, TokenPair};
use crate::route::Route;
use crate::token;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Startup, before the persisted credential has been inspected. Gated
    /// views must not render authenticated content in this state.
    Loading,
    Anonymous,
    Authenticated(Claims),
}

impl SessionState {
    pub fn claims(&self) -> Option<&Claims> {
        match self {
            SessionState::Authenticated(claims) => Some(claims),
            _ => None,
        }
    }
}

/// Login identifiers are compared case-insensitively server-side; send them
/// lowercased so "Agent@Example.com" and "agent@example.com" are one account.
pub fn normalize_identifier(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Outcome of inspecting a persisted access token at startup. The bool asks
/// the caller to clear storage (stale or unreadable credential).
fn bootstrap_state(stored: Option<String>, now_ms: i64) -> (SessionState, bool) {
    match stored {
        None => (SessionState::Anonymous, false),
        Some(stored) => match token::decode_claims(&stored) {
            Ok(claims) if !claims.is_expired(now_ms) => {
                (SessionState::Authenticated(claims), false)
            }
            _ => (SessionState::Anonymous, true),
        },
    }
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
    app: AppContext,
}

impl SessionContext {
    pub fn new(app: AppContext) -> Self {
        Self {
            state: RwSignal::new(SessionState::Loading),
            app,
        }
    }

    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    /// Restores the session from the persisted token. Runs synchronously at
    /// mount, so gated views never observe authenticated content before the
    /// credential has been checked.
    pub fn bootstrap(&self) {
        let (state, clear) = bootstrap_state(token::load_access_token(), now_ms());
        if clear {
            token::clear_tokens();
        }
        self.state.set(state);
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let username = normalize_identifier(email);
        let tokens = match api::obtain_token(&LoginArgs {
            username: &username,
            password,
        })
        .await
        {
            Ok(tokens) => tokens,
            Err(err) => {
                self.app.toast_error(err.to_string());
                return Err(err);
            }
        };
        self.finish_sign_in(tokens)
    }

    pub async fn register(&self, profile: &RegisterArgs<'_>) -> Result<(), ApiError> {
        let response = match api::register(profile).await {
            Ok(response) => response,
            Err(err) => {
                self.app.toast_error(err.to_string());
                return Err(err);
            }
        };
        match response.into_tokens() {
            Some(tokens) => self.finish_sign_in(tokens),
            // acknowledged without credentials: sign in with what we just sent
            None => self.login(profile.email, profile.password).await,
        }
    }

    /// Clears both persisted tokens and drops to Anonymous. Idempotent apart
    /// from the redirect and notification.
    pub fn logout(&self) {
        token::clear_tokens();
        self.state.set(SessionState::Anonymous);
        self.app.navigate(Route::Login);
        self.app.toast_info("Signed out");
    }

    /// Routes a failed authenticated call: a 401 is the server telling us the
    /// credential is dead, so the session is torn down; anything else is a
    /// toast.
    pub fn handle_api_error(&self, err: &ApiError) {
        match err {
            ApiError::Unauthorized(_) => self.logout(),
            other => self.app.toast_error(other.to_string()),
        }
    }

    fn finish_sign_in(&self, tokens: TokenPair) -> Result<(), ApiError> {
        token::store_tokens(&tokens);
        match token::decode_claims(&tokens.access) {
            Ok(claims) => {
                self.state.set(SessionState::Authenticated(claims));
                self.app.toast_success("Signed in");
                self.app.navigate(Route::Dashboard);
                Ok(())
            }
            Err(err) => {
                token::clear_tokens();
                let err = ApiError::Decode(err.to_string());
                self.app.toast_error(err.to_string());
                Err(err)
            }
        }
    }
}

/// Get the session context from context
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    fn make_token(claims_json: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims_json.as_bytes());
        format!("{header}.{payload}.sig")
    }

    #[test]
    fn test_bootstrap_without_token_is_anonymous() {
        let (state, clear) = bootstrap_state(None, 0);
        assert_eq!(state, SessionState::Anonymous);
        assert!(!clear);
    }

    #[test]
    fn test_bootstrap_with_expired_token_clears_storage() {
        let token = make_token(r#"{"user_id":1,"exp":1000}"#);
        let (state, clear) = bootstrap_state(Some(token), 2_000_000);
        assert_eq!(state, SessionState::Anonymous);
        assert!(clear);
    }

    #[test]
    fn test_bootstrap_with_garbage_token_clears_storage() {
        let (state, clear) = bootstrap_state(Some("garbage".to_string()), 0);
        assert_eq!(state, SessionState::Anonymous);
        assert!(clear);
    }

    #[test]
    fn test_bootstrap_with_valid_token_is_authenticated() {
        let token =
            make_token(r#"{"user_id":7,"email":"agent@example.com","exp":2000000000}"#);
        let (state, clear) = bootstrap_state(Some(token.clone()), 1_000_000);
        assert!(!clear);
        let claims = state.claims().expect("authenticated");
        assert_eq!(claims, &crate::token::decode_claims(&token).expect("decode"));
        assert_eq!(claims.user_id, 7);
    }

    #[test]
    fn test_repeated_bootstrap_after_clear_stays_anonymous() {
        // logout clears storage; bootstrapping again from the cleared state
        // must land in the same place
        let (first, _) = bootstrap_state(None, 0);
        let (second, clear) = bootstrap_state(None, 0);
        assert_eq!(first, second);
        assert!(!clear);
    }

    #[test]
    fn test_normalize_identifier() {
        assert_eq!(
            normalize_identifier("Agent@Example.com"),
            "agent@example.com"
        );
        assert_eq!(normalize_identifier("  agent@example.com  "), "agent@example.com");
    }
}
