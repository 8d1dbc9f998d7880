//! Properties Page Component
//!
//! Listing card grid with search, a create form, and optimistic delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{input_value, select_value};
use crate::api::{self, NewProperty};
use crate::context::use_app_context;
use crate::models::{format_currency, Property, PROPERTY_STATUSES, PROPERTY_TYPES};
use crate::session::use_session;
use crate::sync::{is_alive, view_alive, SyncedList};

fn status_class(status: &str) -> &'static str {
    match status {
        "Active" => "badge badge-active",
        "Pending" => "badge badge-pending",
        "Sold" => "badge badge-sold",
        _ => "badge",
    }
}

#[component]
pub fn PropertiesPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    let properties: SyncedList<Property> = SyncedList::new(|property| property.id);
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (show_form, set_show_form) = signal(false);

    let (address, set_address) = signal(String::new());
    let (city, set_city) = signal(String::new());
    let (state, set_state) = signal(String::new());
    let (zip_code, set_zip_code) = signal(String::new());
    let (list_price, set_list_price) = signal(String::new());
    let (status, set_status) = signal(String::from("Active"));
    let (property_type, set_property_type) = signal(String::from("Single Family"));
    let (bedrooms, set_bedrooms) = signal(String::from("3"));
    let (bathrooms, set_bathrooms) = signal(String::from("2"));
    let (square_feet, set_square_feet) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let alive = view_alive();
    spawn_local(async move {
        match api::list_properties().await {
            Ok(items) => {
                if is_alive(&alive) {
                    properties.replace_all(items);
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

    let filtered = move || {
        let needle = search.get().to_lowercase();
        properties
            .items()
            .get()
            .into_iter()
            .filter(|property| {
                needle.is_empty()
                    || property.address.to_lowercase().contains(&needle)
                    || property.city.to_lowercase().contains(&needle)
            })
            .collect::<Vec<_>>()
    };

    let create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let address = address.get();
        if address.trim().is_empty() {
            ctx.toast_error("Address is required");
            return;
        }
        let price = match list_price.get().trim().parse::<f64>() {
            Ok(price) if price >= 0.0 => price,
            _ => {
                ctx.toast_error("Enter a valid list price");
                return;
            }
        };
        let city = city.get();
        let state = state.get();
        let zip_code = zip_code.get();
        let status = status.get();
        let property_type = property_type.get();
        let bedrooms = bedrooms.get().trim().parse::<i32>().unwrap_or(0);
        let bathrooms = bathrooms.get().trim().parse::<f64>().unwrap_or(0.0);
        let square_feet = square_feet.get().trim().parse::<i32>().unwrap_or(0);
        set_saving.set(true);
        spawn_local(async move {
            let args = NewProperty {
                address: address.trim(),
                city: city.trim(),
                state: state.trim(),
                zip_code: zip_code.trim(),
                list_price: price,
                status: &status,
                property_type: &property_type,
                bedrooms,
                bathrooms,
                square_feet,
            };
            match api::create_property(&args).await {
                Ok(created) => {
                    properties.push_front(created);
                    set_show_form.set(false);
                    set_address.set(String::new());
                    set_list_price.set(String::new());
                    set_square_feet.set(String::new());
                    ctx.toast_success("Property created");
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
                    placeholder="Search by address or city..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(input_value(&ev))
                />
                <button class="primary-btn" on:click=move |_| set_show_form.update(|v| *v = !*v)>
                    {move || if show_form.get() { "Close" } else { "Add Property" }}
                </button>
            </div>

            <Show when=move || show_form.get()>
                <form class="record-form" on:submit=create>
                    <label>
                        "Address"
                        <input
                            type="text"
                            placeholder="123 Main St"
                            prop:value=move || address.get()
                            on:input=move |ev| set_address.set(input_value(&ev))
                        />
                    </label>
                    <div class="form-row">
                        <label>
                            "City"
                            <input
                                type="text"
                                prop:value=move || city.get()
                                on:input=move |ev| set_city.set(input_value(&ev))
                            />
                        </label>
                        <label>
                            "State"
                            <input
                                type="text"
                                prop:value=move || state.get()
                                on:input=move |ev| set_state.set(input_value(&ev))
                            />
                        </label>
                        <label>
                            "Zip"
                            <input
                                type="text"
                                prop:value=move || zip_code.get()
                                on:input=move |ev| set_zip_code.set(input_value(&ev))
                            />
                        </label>
                    </div>
                    <div class="form-row">
                        <label>
                            "List Price"
                            <input
                                type="number"
                                min="0"
                                prop:value=move || list_price.get()
                                on:input=move |ev| set_list_price.set(input_value(&ev))
                            />
                        </label>
                        <label>
                            "Status"
                            <select on:change=move |ev| set_status.set(select_value(&ev))>
                                {PROPERTY_STATUSES
                                    .iter()
                                    .map(|option| {
                                        view! {
                                            <option value={*option} selected={*option == "Active"}>
                                                {*option}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                        <label>
                            "Type"
                            <select on:change=move |ev| set_property_type.set(select_value(&ev))>
                                {PROPERTY_TYPES
                                    .iter()
                                    .map(|option| {
                                        view! {
                                            <option value={*option} selected={*option == "Single Family"}>
                                                {*option}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                    </div>
                    <div class="form-row">
                        <label>
                            "Beds"
                            <input
                                type="number"
                                min="0"
                                prop:value=move || bedrooms.get()
                                on:input=move |ev| set_bedrooms.set(input_value(&ev))
                            />
                        </label>
                        <label>
                            "Baths"
                            <input
                                type="number"
                                min="0"
                                step="0.5"
                                prop:value=move || bathrooms.get()
                                on:input=move |ev| set_bathrooms.set(input_value(&ev))
                            />
                        </label>
                        <label>
                            "Sq Ft"
                            <input
                                type="number"
                                min="0"
                                prop:value=move || square_feet.get()
                                on:input=move |ev| set_square_feet.set(input_value(&ev))
                            />
                        </label>
                    </div>
                    <button type="submit" class="primary-btn" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Property" }}
                    </button>
                </form>
            </Show>

            <Show when=move || !loading.get() fallback=|| view! { <div class="page-loading">"Loading..."</div> }>
                <div class="card-grid">
                    {move || {
                        let cards = filtered();
                        if cards.is_empty() {
                            view! { <p class="muted">"No properties found."</p> }.into_any()
                        } else {
                            cards
                                .into_iter()
                                .map(|property| {
                                    let id = property.id;
                                    view! {
                                        <div class="property-card">
                                            <div class="property-card-header">
                                                <span class=status_class(
                                                    &property.status,
                                                )>{property.status.clone()}</span>
                                                <button
                                                    class="row-delete"
                                                    on:click=move |_| {
                                                        let snapshot = properties.remove_item(id);
                                                        spawn_local(async move {
                                                            match api::delete_property(id).await {
                                                                Ok(()) => ctx.toast_success("Property deleted"),
                                                                Err(err) => {
                                                                    properties.restore(snapshot);
                                                                    session.handle_api_error(&err);
                                                                }
                                                            }
                                                        });
                                                    }
                                                >
                                                    "\u{d7}"
                                                </button>
                                            </div>
                                            <p class="property-price">
                                                {format_currency(property.list_price)}
                                            </p>
                                            <p class="property-address">{property.address}</p>
                                            <p class="muted">
                                                {format!(
                                                    "{}, {} {}",
                                                    property.city,
                                                    property.state,
                                                    property.zip_code,
                                                )}
                                            </p>
                                            <p class="property-specs">
                                                {format!(
                                                    "{} bd | {} ba | {} sqft | {}",
                                                    property.bedrooms,
                                                    property.bathrooms,
                                                    property.square_feet,
                                                    property.property_type,
                                                )}
                                            </p>
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
