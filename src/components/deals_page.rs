//! Deals Page Component
//!
//! Pipeline board grouped by stage, with a create form and optimistic delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{format_day, input_value, select_value};
use crate::api::{self, NewDeal};
use crate::context::use_app_context;
use crate::models::{format_currency, Deal, DEAL_STAGES};
use crate::session::use_session;
use crate::sync::{is_alive, view_alive, SyncedList};

fn stage_label(stage: &str) -> &'static str {
    match stage {
        "NEW" => "New",
        "NEGOTIATION" => "Negotiation",
        "UNDER_CONTRACT" => "Under Contract",
        "CLOSED_WON" => "Closed Won",
        "CLOSED_LOST" => "Closed Lost",
        _ => "Other",
    }
}

#[component]
pub fn DealsPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    let deals: SyncedList<Deal> = SyncedList::new(|deal| deal.id);
    let (loading, set_loading) = signal(true);
    let (show_form, set_show_form) = signal(false);

    let (title, set_title) = signal(String::new());
    let (stage, set_stage) = signal(String::from("NEW"));
    let (value, set_value) = signal(String::new());
    let (probability, set_probability) = signal(String::from("50"));
    let (closing_date, set_closing_date) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let alive = view_alive();
    spawn_local(async move {
        match api::list_deals().await {
            Ok(items) => {
                if is_alive(&alive) {
                    deals.replace_all(items);
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
        if title.trim().is_empty() {
            ctx.toast_error("Deal title is required");
            return;
        }
        let amount = match value.get().trim().parse::<f64>() {
            Ok(amount) if amount >= 0.0 => amount,
            _ => {
                ctx.toast_error("Enter a valid deal value");
                return;
            }
        };
        let stage = stage.get();
        let probability = probability.get().trim().parse::<i32>().unwrap_or(50).clamp(0, 100);
        let closing_date = closing_date.get();
        set_saving.set(true);
        spawn_local(async move {
            let closing = closing_date.trim();
            let args = NewDeal {
                title: title.trim(),
                contact: None,
                stage: &stage,
                value: amount,
                probability,
                closing_date: (!closing.is_empty()).then_some(closing),
            };
            match api::create_deal(&args).await {
                Ok(created) => {
                    deals.push_front(created);
                    set_show_form.set(false);
                    set_title.set(String::new());
                    set_value.set(String::new());
                    set_closing_date.set(String::new());
                    ctx.toast_success("Deal created");
                }
                Err(err) => session.handle_api_error(&err),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page-toolbar">
                <h2 class="page-heading">"Pipeline"</h2>
                <button class="primary-btn" on:click=move |_| set_show_form.update(|v| *v = !*v)>
                    {move || if show_form.get() { "Close" } else { "Add Deal" }}
                </button>
            </div>

            <Show when=move || show_form.get()>
                <form class="record-form" on:submit=create>
                    <label>
                        "Title"
                        <input
                            type="text"
                            placeholder="Henderson purchase"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(input_value(&ev))
                        />
                    </label>
                    <div class="form-row">
                        <label>
                            "Stage"
                            <select on:change=move |ev| set_stage.set(select_value(&ev))>
                                {DEAL_STAGES
                                    .iter()
                                    .map(|option| {
                                        view! {
                                            <option value={*option} selected={*option == "NEW"}>
                                                {stage_label(option)}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                        <label>
                            "Value"
                            <input
                                type="number"
                                min="0"
                                prop:value=move || value.get()
                                on:input=move |ev| set_value.set(input_value(&ev))
                            />
                        </label>
                        <label>
                            "Probability %"
                            <input
                                type="number"
                                min="0"
                                max="100"
                                prop:value=move || probability.get()
                                on:input=move |ev| set_probability.set(input_value(&ev))
                            />
                        </label>
                        <label>
                            "Closing Date"
                            <input
                                type="date"
                                prop:value=move || closing_date.get()
                                on:input=move |ev| set_closing_date.set(input_value(&ev))
                            />
                        </label>
                    </div>
                    <button type="submit" class="primary-btn" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Deal" }}
                    </button>
                </form>
            </Show>

            <Show when=move || !loading.get() fallback=|| view! { <div class="page-loading">"Loading..."</div> }>
                <div class="board">
                    {move || {
                        let all = deals.items().get();
                        DEAL_STAGES
                            .iter()
                            .map(|column_stage| {
                                let cards: Vec<Deal> = all
                                    .iter()
                                    .filter(|deal| deal.stage == *column_stage)
                                    .cloned()
                                    .collect();
                                let column_total: f64 = cards.iter().map(|deal| deal.value).sum();
                                view! {
                                    <div class="board-column">
                                        <div class="board-column-header">
                                            <span>{stage_label(column_stage)}</span>
                                            <span class="muted">{cards.len()}</span>
                                        </div>
                                        <p class="board-column-total">
                                            {format_currency(column_total)}
                                        </p>
                                        {cards
                                            .into_iter()
                                            .map(|deal| {
                                                let id = deal.id;
                                                view! {
                                                    <div class="deal-card">
                                                        <div class="deal-card-header">
                                                            <span class="deal-title">{deal.title.clone()}</span>
                                                            <button
                                                                class="row-delete"
                                                                on:click=move |_| {
                                                                    let snapshot = deals.remove_item(id);
                                                                    spawn_local(async move {
                                                                        match api::delete_deal(id).await {
                                                                            Ok(()) => ctx.toast_success("Deal deleted"),
                                                                            Err(err) => {
                                                                                deals.restore(snapshot);
                                                                                session.handle_api_error(&err);
                                                                            }
                                                                        }
                                                                    });
                                                                }
                                                            >
                                                                "\u{d7}"
                                                            </button>
                                                        </div>
                                                        {deal
                                                            .client_name
                                                            .clone()
                                                            .map(|name| view! { <p class="muted">{name}</p> })}
                                                        <p class="deal-value">{format_currency(deal.value)}</p>
                                                        <div class="deal-card-footer">
                                                            <span class="muted">
                                                                {format!("{}%", deal.probability)}
                                                            </span>
                                                            {deal
                                                                .closing_date
                                                                .clone()
                                                                .map(|date| {
                                                                    view! { <span class="muted">{format_day(&date)}</span> }
                                                                })}
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
