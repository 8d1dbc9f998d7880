//! Transactions Page Component
//!
//! Ledger table with search, an archived filter, a create form that links a
//! property and a contact, and optimistic archive/delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{format_day, input_value, select_value};
use crate::api::{self, NewTransaction};
use crate::context::use_app_context;
use crate::models::{
    format_currency, property_type_code, Contact, Property, Transaction, TRANSACTION_STAGES,
};
use crate::session::use_session;
use crate::sync::{is_alive, view_alive, SyncedList};

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    let transactions: SyncedList<Transaction> = SyncedList::new(|tx| tx.id);
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (show_archived, set_show_archived) = signal(false);
    let (show_form, set_show_form) = signal(false);

    // Lookup lists for the create form selects.
    let (properties, set_properties) = signal::<Vec<Property>>(Vec::new());
    let (contacts, set_contacts) = signal::<Vec<Contact>>(Vec::new());

    let (name, set_name) = signal(String::new());
    let (property_id, set_property_id) = signal(String::new());
    let (contact_id, set_contact_id) = signal(String::new());
    let (stage, set_stage) = signal(String::from("Prospect"));
    let (value, set_value) = signal(String::new());
    let (close_date, set_close_date) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let alive = view_alive();
    spawn_local(async move {
        match api::list_transactions().await {
            Ok(items) => {
                if is_alive(&alive) {
                    transactions.replace_all(items);
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

    let alive_lookups = view_alive();
    spawn_local(async move {
        if let Ok(items) = api::list_properties().await {
            if is_alive(&alive_lookups) {
                set_properties.set(items);
            }
        }
        if let Ok(items) = api::list_contacts().await {
            if is_alive(&alive_lookups) {
                set_contacts.set(items);
            }
        }
    });

    let filtered = move || {
        let needle = search.get().to_lowercase();
        let archived = show_archived.get();
        transactions
            .items()
            .get()
            .into_iter()
            .filter(|tx| tx.is_archived == archived)
            .filter(|tx| needle.is_empty() || tx.name.to_lowercase().contains(&needle))
            .collect::<Vec<_>>()
    };

    let create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get();
        if name.trim().is_empty() {
            ctx.toast_error("Transaction name is required");
            return;
        }
        let (Ok(property), Ok(contact)) = (
            property_id.get().parse::<u32>(),
            contact_id.get().parse::<u32>(),
        ) else {
            ctx.toast_error("Pick a property and a contact");
            return;
        };
        let amount = match value.get().trim().parse::<f64>() {
            Ok(amount) if amount >= 0.0 => amount,
            _ => {
                ctx.toast_error("Enter a valid value");
                return;
            }
        };
        let stage = stage.get();
        let close_date = close_date.get();
        set_saving.set(true);
        spawn_local(async move {
            let close = close_date.trim();
            let args = NewTransaction {
                name: name.trim(),
                property,
                contact,
                stage: &stage,
                value: amount,
                close_date: (!close.is_empty()).then_some(close),
            };
            match api::create_transaction(&args).await {
                Ok(created) => {
                    transactions.push_front(created);
                    set_show_form.set(false);
                    set_name.set(String::new());
                    set_value.set(String::new());
                    set_close_date.set(String::new());
                    ctx.toast_success("Transaction created");
                }
                Err(err) => session.handle_api_error(&err),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page-toolbar">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search transactions..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(input_value(&ev))
                />
                <label class="toggle-label">
                    <input
                        type="checkbox"
                        prop:checked=move || show_archived.get()
                        on:change=move |_| set_show_archived.update(|v| *v = !*v)
                    />
                    "Show archived"
                </label>
                <button class="primary-btn" on:click=move |_| set_show_form.update(|v| *v = !*v)>
                    {move || if show_form.get() { "Close" } else { "New Transaction" }}
                </button>
            </div>

            <Show when=move || show_form.get()>
                <form class="record-form" on:submit=create>
                    <label>
                        "Name"
                        <input
                            type="text"
                            placeholder="12 Oak St purchase"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(input_value(&ev))
                        />
                    </label>
                    <div class="form-row">
                        <label>
                            "Property"
                            <select on:change=move |ev| set_property_id.set(select_value(&ev))>
                                <option value="">"Select a property"</option>
                                {move || {
                                    properties
                                        .get()
                                        .into_iter()
                                        .map(|property| {
                                            view! {
                                                <option value=property
                                                    .id
                                                    .to_string()>{property.address}</option>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </select>
                        </label>
                        <label>
                            "Contact"
                            <select on:change=move |ev| set_contact_id.set(select_value(&ev))>
                                <option value="">"Select a contact"</option>
                                {move || {
                                    contacts
                                        .get()
                                        .into_iter()
                                        .map(|contact| {
                                            view! {
                                                <option value=contact.id.to_string()>
                                                    {format!(
                                                        "{} {}",
                                                        contact.first_name,
                                                        contact.last_name,
                                                    )}
                                                </option>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </select>
                        </label>
                    </div>
                    <div class="form-row">
                        <label>
                            "Stage"
                            <select on:change=move |ev| set_stage.set(select_value(&ev))>
                                {TRANSACTION_STAGES
                                    .iter()
                                    .map(|option| {
                                        view! {
                                            <option value={*option} selected={*option == "Prospect"}>
                                                {*option}
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
                            "Close Date"
                            <input
                                type="date"
                                prop:value=move || close_date.get()
                                on:input=move |ev| set_close_date.set(input_value(&ev))
                            />
                        </label>
                    </div>
                    <button type="submit" class="primary-btn" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Transaction" }}
                    </button>
                </form>
            </Show>

            <Show when=move || !loading.get() fallback=|| view! { <div class="page-loading">"Loading..."</div> }>
                <table class="record-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Type"</th>
                            <th>"Stage"</th>
                            <th>"Value"</th>
                            <th>"Close Date"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = filtered();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="6" class="empty-row">"No transactions found."</td>
                                    </tr>
                                }
                                    .into_any()
                            } else {
                                rows.into_iter()
                                    .map(|tx| {
                                        let id = tx.id;
                                        let archived = tx.is_archived;
                                        view! {
                                            <tr>
                                                <td class="cell-strong">{tx.name.clone()}</td>
                                                <td>
                                                    <span class="badge">
                                                        {property_type_code(tx.property_type.as_deref())}
                                                    </span>
                                                </td>
                                                <td>
                                                    <span class="badge">{tx.stage.clone()}</span>
                                                </td>
                                                <td>{format_currency(tx.value)}</td>
                                                <td>
                                                    {tx
                                                        .close_date
                                                        .clone()
                                                        .map(|date| format_day(&date))
                                                        .unwrap_or_else(|| "-".to_string())}
                                                </td>
                                                <td class="cell-actions">
                                                    <button
                                                        class="row-action"
                                                        on:click=move |_| {
                                                            let snapshot = transactions
                                                                .update_item(id, |t| t.is_archived = !t.is_archived);
                                                            spawn_local(async move {
                                                                if let Err(err) = api::set_transaction_archived(
                                                                        id,
                                                                        !archived,
                                                                    )
                                                                    .await
                                                                {
                                                                    transactions.restore(snapshot);
                                                                    session.handle_api_error(&err);
                                                                }
                                                            });
                                                        }
                                                    >
                                                        {if archived { "Unarchive" } else { "Archive" }}
                                                    </button>
                                                    <button
                                                        class="row-delete"
                                                        on:click=move |_| {
                                                            let snapshot = transactions.remove_item(id);
                                                            spawn_local(async move {
                                                                match api::delete_transaction(id).await {
                                                                    Ok(()) => ctx.toast_success("Transaction deleted"),
                                                                    Err(err) => {
                                                                        transactions.restore(snapshot);
                                                                        session.handle_api_error(&err);
                                                                    }
                                                                }
                                                            });
                                                        }
                                                    >
                                                        "\u{d7}"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
