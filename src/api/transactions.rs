//! Transaction Endpoints

use serde::Serialize;

use super::ApiError;
use crate::models::Transaction;

#[derive(Serialize)]
pub struct NewTransaction<'a> {
    pub name: &'a str,
    pub property: u32,
    pub contact: u32,
    pub stage: &'a str,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_date: Option<&'a str>,
}

#[derive(Serialize)]
struct ArchivedPatch {
    is_archived: bool,
}

pub async fn list_transactions() -> Result<Vec<Transaction>, ApiError> {
    super::get_json("/transactions/").await
}

pub async fn create_transaction(args: &NewTransaction<'_>) -> Result<Transaction, ApiError> {
    super::post_json("/transactions/", args).await
}

pub async fn set_transaction_archived(id: u32, is_archived: bool) -> Result<Transaction, ApiError> {
    super::patch_json(&format!("/transactions/{id}/"), &ArchivedPatch { is_archived }).await
}

pub async fn delete_transaction(id: u32) -> Result<(), ApiError> {
    super::delete(&format!("/transactions/{id}/")).await
}
