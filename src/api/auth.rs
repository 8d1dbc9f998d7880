//! Authentication Endpoints

use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::models::TokenPair;

#[derive(Serialize)]
pub struct LoginArgs<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct RegisterArgs<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
}

/// The register endpoint usually returns tokens directly; older deployments
/// acknowledge without them, in which case the caller logs in afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub refresh: Option<String>,
}

impl RegisterResponse {
    pub fn into_tokens(self) -> Option<TokenPair> {
        match (self.access, self.refresh) {
            (Some(access), Some(refresh)) => Some(TokenPair { access, refresh }),
            _ => None,
        }
    }
}

/// Exchanges credentials for an access/refresh pair.
pub async fn obtain_token(args: &LoginArgs<'_>) -> Result<TokenPair, ApiError> {
    super::post_json("/token/", args).await
}

pub async fn register(args: &RegisterArgs<'_>) -> Result<RegisterResponse, ApiError> {
    super::post_json("/accounts/register/", args).await
}
