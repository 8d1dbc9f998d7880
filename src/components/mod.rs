//! View Components
//!
//! Pages and widgets, organized by screen.

mod admin_page;
mod calendar_page;
mod contacts_page;
mod dashboard_page;
mod deals_page;
mod login_page;
mod properties_page;
mod schedule_widget;
mod settings_page;
mod sidebar;
mod signup_page;
mod toast_host;
mod todo_widget;
mod transactions_page;

pub use admin_page::*;
pub use calendar_page::*;
pub use contacts_page::*;
pub use dashboard_page::*;
pub use deals_page::*;
pub use login_page::*;
pub use properties_page::*;
pub use schedule_widget::*;
pub use settings_page::*;
pub use sidebar::*;
pub use signup_page::*;
pub use toast_host::*;
pub use todo_widget::*;
pub use transactions_page::*;

use wasm_bindgen::JsCast;

/// Current value of the input that fired this event.
pub(crate) fn input_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|target| {
            target
                .dyn_ref::<web_sys::HtmlInputElement>()
                .map(|input| input.value())
        })
        .unwrap_or_default()
}

/// Current value of the select that fired this event.
pub(crate) fn select_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|target| {
            target
                .dyn_ref::<web_sys::HtmlSelectElement>()
                .map(|select| select.value())
        })
        .unwrap_or_default()
}

/// "Aug 27" from an RFC 3339 timestamp or a bare date.
pub(crate) fn format_day(raw: &str) -> String {
    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(raw) {
        return ts.format("%b %-d").to_string();
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %-d").to_string();
    }
    raw.to_string()
}

/// "2:30 PM" from an RFC 3339 timestamp.
pub(crate) fn format_time(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts.format("%-I:%M %p").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_day() {
        assert_eq!(format_day("2026-08-27T14:30:00+00:00"), "Aug 27");
        assert_eq!(format_day("2026-01-05"), "Jan 5");
        assert_eq!(format_day("not a date"), "not a date");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("2026-08-27T14:30:00+00:00"), "2:30 PM");
        assert_eq!(format_time("2026-08-27T09:05:00+00:00"), "9:05 AM");
    }
}
