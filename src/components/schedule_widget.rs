//! Schedule Widget Component
//!
//! Today's events on the dashboard, read-only.

use leptos::prelude::*;

use super::format_time;
use crate::models::EventItem;

fn kind_marker(kind: &str) -> &'static str {
    match kind {
        "Call" => "\u{260e}",
        "Meeting" => "\u{1f465}",
        "Email" => "\u{2709}",
        _ => "\u{1f4c5}",
    }
}

#[component]
pub fn ScheduleWidget(events: Vec<EventItem>) -> impl IntoView {
    view! {
        <div class="widget schedule-widget">
            <h3 class="widget-title">"Today's Schedule"</h3>
            {if events.is_empty() {
                view! { <p class="muted">"No events scheduled today."</p> }.into_any()
            } else {
                events
                    .into_iter()
                    .map(|event| {
                        view! {
                            <div class="schedule-row">
                                <span class="schedule-icon">{kind_marker(&event.kind)}</span>
                                <div class="schedule-info">
                                    <p class="schedule-title">{event.title}</p>
                                    <p class="schedule-time">{format_time(&event.start_time)}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
