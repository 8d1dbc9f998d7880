//! Property Endpoints

use serde::Serialize;

use super::ApiError;
use crate::models::Property;

#[derive(Serialize)]
pub struct NewProperty<'a> {
    pub address: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub zip_code: &'a str,
    pub list_price: f64,
    pub status: &'a str,
    pub property_type: &'a str,
    pub bedrooms: i32,
    pub bathrooms: f64,
    pub square_feet: i32,
}

pub async fn list_properties() -> Result<Vec<Property>, ApiError> {
    super::get_json("/properties/").await
}

pub async fn create_property(args: &NewProperty<'_>) -> Result<Property, ApiError> {
    super::post_json("/properties/", args).await
}

pub async fn delete_property(id: u32) -> Result<(), ApiError> {
    super::delete(&format!("/properties/{id}/")).await
}
