//! Event Endpoints

use serde::Serialize;

use super::ApiError;
use crate::models::EventItem;

#[derive(Serialize)]
pub struct NewEvent<'a> {
    pub title: &'a str,
    pub start_time: &'a str,
    #[serde(rename = "type")]
    pub kind: &'a str,
}

pub async fn list_events() -> Result<Vec<EventItem>, ApiError> {
    super::get_json("/events/").await
}

pub async fn create_event(args: &NewEvent<'_>) -> Result<EventItem, ApiError> {
    super::post_json("/events/", args).await
}

pub async fn delete_event(id: u32) -> Result<(), ApiError> {
    super::delete(&format!("/events/{id}/")).await
}
