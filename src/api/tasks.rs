//! Task Endpoints
//!
//! Backs the dashboard todo widget.

use serde::Serialize;

use super::ApiError;
use crate::models::Task;

#[derive(Serialize)]
struct NewTask<'a> {
    title: &'a str,
}

#[derive(Serialize)]
struct CompletedPatch {
    is_completed: bool,
}

pub async fn list_tasks() -> Result<Vec<Task>, ApiError> {
    super::get_json("/tasks/").await
}

pub async fn create_task(title: &str) -> Result<Task, ApiError> {
    super::post_json("/tasks/", &NewTask { title }).await
}

pub async fn set_task_completed(id: u32, is_completed: bool) -> Result<Task, ApiError> {
    super::patch_json(&format!("/tasks/{id}/"), &CompletedPatch { is_completed }).await
}

pub async fn delete_task(id: u32) -> Result<(), ApiError> {
    super::delete(&format!("/tasks/{id}/")).await
}
