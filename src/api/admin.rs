//! Admin Endpoints
//!
//! User roster and platform-wide statistics; superuser only.

use super::ApiError;
use crate::models::{PlatformStats, UserAccount};

pub async fn list_users() -> Result<Vec<UserAccount>, ApiError> {
    super::get_json("/accounts/users/").await
}

pub async fn platform_stats() -> Result<PlatformStats, ApiError> {
    super::get_json("/accounts/platform-stats/").await
}
