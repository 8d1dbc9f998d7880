//! Contact Endpoints

use serde::Serialize;

use super::ApiError;
use crate::models::Contact;

#[derive(Serialize)]
pub struct NewContact<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub role: &'a str,
}

pub async fn list_contacts() -> Result<Vec<Contact>, ApiError> {
    super::get_json("/contacts/").await
}

pub async fn create_contact(args: &NewContact<'_>) -> Result<Contact, ApiError> {
    super::post_json("/contacts/", args).await
}

pub async fn delete_contact(id: u32) -> Result<(), ApiError> {
    super::delete(&format!("/contacts/{id}/")).await
}
