//! Deal Endpoints

use serde::Serialize;

use super::ApiError;
use crate::models::Deal;

#[derive(Serialize)]
pub struct NewDeal<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<u32>,
    pub stage: &'a str,
    pub value: f64,
    pub probability: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_date: Option<&'a str>,
}

pub async fn list_deals() -> Result<Vec<Deal>, ApiError> {
    super::get_json("/deals/").await
}

pub async fn create_deal(args: &NewDeal<'_>) -> Result<Deal, ApiError> {
    super::post_json("/deals/", args).await
}

pub async fn delete_deal(id: u32) -> Result<(), ApiError> {
    super::delete(&format!("/deals/{id}/")).await
}
