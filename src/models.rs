//! Frontend Models
//!
//! Data structures matching the CRM backend's JSON payloads. Identifiers are
//! assigned server-side and unique within each collection.

use serde::{Deserialize, Serialize};

/// Decoded payload of the access token.
///
/// The backend stamps custom claims next to the standard expiry; everything
/// except `user_id` and `exp` is optional because older tokens predate some
/// of the custom fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub organization_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub is_superuser: bool,
    /// Expiry, seconds since epoch.
    pub exp: i64,
}

/// Access/refresh token pair returned by the token and register endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Todo task shown on the dashboard widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub is_completed: bool,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: u32,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub list_price: f64,
    pub status: String,
    pub property_type: String,
    pub bedrooms: i32,
    pub bathrooms: f64,
    pub square_feet: i32,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub contact: Option<u32>,
    #[serde(default)]
    pub client_name: Option<String>,
    pub stage: String,
    pub value: f64,
    #[serde(default)]
    pub probability: i32,
    #[serde(default)]
    pub closing_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub property: Option<u32>,
    #[serde(default)]
    pub contact: Option<u32>,
    #[serde(default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub status_name: Option<String>,
    pub stage: String,
    pub value: f64,
    #[serde(default)]
    pub close_date: Option<String>,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Calendar/schedule entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventItem {
    pub id: u32,
    pub title: String,
    pub start_time: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Row of the admin user roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: u32,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub is_active: bool,
    pub date_joined: String,
    #[serde(default)]
    pub is_superuser: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformStats {
    pub total_agents: u32,
    pub total_deals: u32,
    pub avg_deals_per_agent: f64,
    pub new_agents_week: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageCount {
    pub stage: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentDeal {
    pub id: u32,
    #[serde(rename = "property__address", default)]
    pub property_address: Option<String>,
    pub value: f64,
    pub stage: String,
    pub created_at: String,
}

/// Aggregates rendered on the main dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_active_deals: u32,
    pub closed_volume: f64,
    pub win_rate: f64,
    pub deals_by_status: Vec<StageCount>,
    pub recent_transactions: Vec<RecentDeal>,
    pub todays_schedule: Vec<EventItem>,
}

pub const PROPERTY_STATUSES: &[&str] = &["Active", "Pending", "Sold"];

pub const PROPERTY_TYPES: &[&str] = &[
    "Single Family",
    "Condo",
    "Townhouse",
    "Multi-Family",
    "Land",
];

pub const CONTACT_ROLES: &[&str] = &["Buyer", "Seller", "Agent", "Other"];

pub const TRANSACTION_STAGES: &[&str] = &[
    "Prospect",
    "Active",
    "Under Contract",
    "Closed Won",
    "Closed Lost",
];

pub const DEAL_STAGES: &[&str] = &[
    "NEW",
    "NEGOTIATION",
    "UNDER_CONTRACT",
    "CLOSED_WON",
    "CLOSED_LOST",
];

pub const EVENT_KINDS: &[&str] = &["Call", "Meeting", "Email", "Other"];

/// Short code used in the transactions table, e.g. "Single Family" -> "SF".
pub fn property_type_code(property_type: Option<&str>) -> String {
    match property_type {
        None | Some("") => "-".to_string(),
        Some("Single Family") => "SF".to_string(),
        Some("Multi-Family") => "MF".to_string(),
        Some("Condo") => "CO".to_string(),
        Some("Townhouse") => "TH".to_string(),
        Some("Land") => "LD".to_string(),
        Some(other) => other.chars().take(2).collect::<String>().to_uppercase(),
    }
}

/// "$1,250,000" style formatting without a locale dependency.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round() as i64;
    let negative = rounded < 0;
    let digits = rounded.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();
    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(950.0), "$950");
        assert_eq!(format_currency(1250000.0), "$1,250,000");
        assert_eq!(format_currency(-42000.0), "-$42,000");
    }

    #[test]
    fn test_property_type_code() {
        assert_eq!(property_type_code(Some("Single Family")), "SF");
        assert_eq!(property_type_code(Some("Land")), "LD");
        assert_eq!(property_type_code(Some("Ranch")), "RA");
        assert_eq!(property_type_code(None), "-");
    }

    #[test]
    fn test_transaction_deserializes_with_missing_optionals() {
        let json = r#"{"id":7,"name":"12 Oak St","stage":"Active","value":420000.0}"#;
        let tx: Transaction = serde_json::from_str(json).expect("deserialize");
        assert_eq!(tx.id, 7);
        assert!(!tx.is_archived);
        assert!(tx.close_date.is_none());
    }

    #[test]
    fn test_event_kind_field_rename() {
        let json = r#"{"id":1,"title":"Showing","start_time":"2026-08-27T10:00:00Z","type":"Meeting"}"#;
        let event: EventItem = serde_json::from_str(json).expect("deserialize");
        assert_eq!(event.kind, "Meeting");
    }
}
