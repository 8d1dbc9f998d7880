//! Calendar Page Component
//!
//! Upcoming events grouped by day, with a create form and optimistic delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{format_day, format_time, input_value, select_value};
use crate::api::{self, NewEvent};
use crate::context::use_app_context;
use crate::models::{EventItem, EVENT_KINDS};
use crate::session::use_session;
use crate::sync::{is_alive, view_alive, SyncedList};

/// Group events by calendar day, days and events both in start order.
fn group_by_day(mut events: Vec<EventItem>) -> Vec<(String, Vec<EventItem>)> {
    events.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    let mut groups: Vec<(String, Vec<EventItem>)> = Vec::new();
    for event in events {
        let day = event.start_time.chars().take(10).collect::<String>();
        match groups.last_mut() {
            Some((last_day, bucket)) if *last_day == day => bucket.push(event),
            _ => groups.push((day, vec![event])),
        }
    }
    groups
}

#[component]
pub fn CalendarPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    let events: SyncedList<EventItem> = SyncedList::new(|event| event.id);
    let (loading, set_loading) = signal(true);
    let (show_form, set_show_form) = signal(false);

    let (title, set_title) = signal(String::new());
    let (date, set_date) = signal(String::new());
    let (time, set_time) = signal(String::from("09:00"));
    let (kind, set_kind) = signal(String::from("Meeting"));
    let (saving, set_saving) = signal(false);

    let alive = view_alive();
    spawn_local(async move {
        match api::list_events().await {
            Ok(items) => {
                if is_alive(&alive) {
                    events.replace_all(items);
                    set_loading.set(false);
                }
            }
            Err(err) => {
                if is_alive(&alive) {
                    set_loading.set(false);
                    session.handle_api_error(&err);
                }
            }
        }
    });

    let create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get();
        let date = date.get();
        if title.trim().is_empty() || date.trim().is_empty() {
            ctx.toast_error("Title and date are required");
            return;
        }
        let time = time.get();
        let kind = kind.get();
        set_saving.set(true);
        spawn_local(async move {
            let start_time = format!("{}T{}:00Z", date.trim(), time.trim());
            let args = NewEvent {
                title: title.trim(),
                start_time: &start_time,
                kind: &kind,
            };
            match api::create_event(&args).await {
                Ok(created) => {
                    events.push_front(created);
                    set_show_form.set(false);
                    set_title.set(String::new());
                    ctx.toast_success("Event created");
                }
                Err(err) => session.handle_api_error(&err),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page-toolbar">
                <h2 class="page-heading">"Calendar"</h2>
                <button class="primary-btn" on:click=move |_| set_show_form.update(|v| *v = !*v)>
                    {move || if show_form.get() { "Close" } else { "Add Event" }}
                </button>
            </div>

            <Show when=move || show_form.get()>
                <form class="record-form" on:submit=create>
                    <label>
                        "Title"
                        <input
                            type="text"
                            placeholder="Listing walkthrough"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(input_value(&ev))
                        />
                    </label>
                    <div class="form-row">
                        <label>
                            "Date"
                            <input
                                type="date"
                                prop:value=move || date.get()
                                on:input=move |ev| set_date.set(input_value(&ev))
                            />
                        </label>
                        <label>
                            "Time"
                            <input
                                type="time"
                                prop:value=move || time.get()
                                on:input=move |ev| set_time.set(input_value(&ev))
                            />
                        </label>
                        <label>
                            "Type"
                            <select on:change=move |ev| set_kind.set(select_value(&ev))>
                                {EVENT_KINDS
                                    .iter()
                                    .map(|option| {
                                        view! {
                                            <option value={*option} selected={*option == "Meeting"}>
                                                {*option}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                    </div>
                    <button type="submit" class="primary-btn" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Event" }}
                    </button>
                </form>
            </Show>

            <Show when=move || !loading.get() fallback=|| view! { <div class="page-loading">"Loading..."</div> }>
                {move || {
                    let groups = group_by_day(events.items().get());
                    if groups.is_empty() {
                        view! { <p class="muted">"Nothing scheduled."</p> }.into_any()
                    } else {
                        groups
                            .into_iter()
                            .map(|(day, entries)| {
                                view! {
                                    <div class="calendar-day">
                                        <h3 class="calendar-day-label">{format_day(&day)}</h3>
                                        {entries
                                            .into_iter()
                                            .map(|event| {
                                                let id = event.id;
                                                view! {
                                                    <div class="calendar-row">
                                                        <span class="calendar-time">
                                                            {format_time(&event.start_time)}
                                                        </span>
                                                        <span class="badge">{event.kind.clone()}</span>
                                                        <span class="calendar-title">{event.title.clone()}</span>
                                                        <button
                                                            class="row-delete"
                                                            on:click=move |_| {
                                                                let snapshot = events.remove_item(id);
                                                                spawn_local(async move {
                                                                    match api::delete_event(id).await {
                                                                        Ok(()) => ctx.toast_success("Event deleted"),
                                                                        Err(err) => {
                                                                            events.restore(snapshot);
                                                                            session.handle_api_error(&err);
                                                                        }
                                                                    }
                                                                });
                                                            }
                                                        >
                                                            "\u{d7}"
                                                        </button>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: u32, start: &str) -> EventItem {
        EventItem {
            id,
            title: format!("event {id}"),
            start_time: start.to_string(),
            kind: "Meeting".to_string(),
        }
    }

    #[test]
    fn test_group_by_day_orders_days_and_entries() {
        let groups = group_by_day(vec![
            event(1, "2026-08-28T09:00:00Z"),
            event(2, "2026-08-27T15:00:00Z"),
            event(3, "2026-08-27T08:00:00Z"),
        ]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "2026-08-27");
        assert_eq!(groups[0].1[0].id, 3);
        assert_eq!(groups[0].1[1].id, 2);
        assert_eq!(groups[1].0, "2026-08-28");
    }

    #[test]
    fn test_group_by_day_empty() {
        assert!(group_by_day(Vec::new()).is_empty());
    }
}
