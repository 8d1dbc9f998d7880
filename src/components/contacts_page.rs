//! Contacts Page Component
//!
//! Roster table with search, inline create form, and optimistic delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{input_value, select_value};
use crate::api::{self, NewContact};
use crate::context::use_app_context;
use crate::models::{Contact, CONTACT_ROLES};
use crate::session::use_session;
use crate::sync::{is_alive, view_alive, SyncedList};

#[component]
pub fn ContactsPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    let contacts: SyncedList<Contact> = SyncedList::new(|contact| contact.id);
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());
    let (show_form, set_show_form) = signal(false);

    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (role, set_role) = signal(String::from("Buyer"));
    let (saving, set_saving) = signal(false);

    let alive = view_alive();
    spawn_local(async move {
        match api::list_contacts().await {
            Ok(items) => {
                if is_alive(&alive) {
                    contacts.replace_all(items);
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
        contacts
            .items()
            .get()
            .into_iter()
            .filter(|contact| {
                needle.is_empty()
                    || format!("{} {}", contact.first_name, contact.last_name)
                        .to_lowercase()
                        .contains(&needle)
                    || contact.email.to_lowercase().contains(&needle)
            })
            .collect::<Vec<_>>()
    };

    let create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let first_name = first_name.get();
        let last_name = last_name.get();
        let email = email.get();
        let phone = phone.get();
        let role = role.get();
        if first_name.trim().is_empty() || email.trim().is_empty() {
            ctx.toast_error("First name and email are required");
            return;
        }
        set_saving.set(true);
        spawn_local(async move {
            let args = NewContact {
                first_name: first_name.trim(),
                last_name: last_name.trim(),
                email: email.trim(),
                phone: phone.trim(),
                role: &role,
            };
            match api::create_contact(&args).await {
                Ok(created) => {
                    contacts.push_front(created);
                    set_show_form.set(false);
                    set_first_name.set(String::new());
                    set_last_name.set(String::new());
                    set_email.set(String::new());
                    set_phone.set(String::new());
                    ctx.toast_success("Contact created");
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
                    placeholder="Search contacts..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(input_value(&ev))
                />
                <button class="primary-btn" on:click=move |_| set_show_form.update(|v| *v = !*v)>
                    {move || if show_form.get() { "Close" } else { "Add Contact" }}
                </button>
            </div>

            <Show when=move || show_form.get()>
                <form class="record-form" on:submit=create>
                    <div class="form-row">
                        <label>
                            "First Name"
                            <input
                                type="text"
                                prop:value=move || first_name.get()
                                on:input=move |ev| set_first_name.set(input_value(&ev))
                            />
                        </label>
                        <label>
                            "Last Name"
                            <input
                                type="text"
                                prop:value=move || last_name.get()
                                on:input=move |ev| set_last_name.set(input_value(&ev))
                            />
                        </label>
                    </div>
                    <div class="form-row">
                        <label>
                            "Email"
                            <input
                                type="email"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(input_value(&ev))
                            />
                        </label>
                        <label>
                            "Phone"
                            <input
                                type="tel"
                                prop:value=move || phone.get()
                                on:input=move |ev| set_phone.set(input_value(&ev))
                            />
                        </label>
                        <label>
                            "Role"
                            <select on:change=move |ev| set_role.set(select_value(&ev))>
                                {CONTACT_ROLES
                                    .iter()
                                    .map(|option| {
                                        view! {
                                            <option value={*option} selected={*option == "Buyer"}>
                                                {*option}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                    </div>
                    <button type="submit" class="primary-btn" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Contact" }}
                    </button>
                </form>
            </Show>

            <Show when=move || !loading.get() fallback=|| view! { <div class="page-loading">"Loading..."</div> }>
                <table class="record-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Phone"</th>
                            <th>"Role"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = filtered();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="5" class="empty-row">"No contacts found."</td>
                                    </tr>
                                }
                                    .into_any()
                            } else {
                                rows.into_iter()
                                    .map(|contact| {
                                        let id = contact.id;
                                        view! {
                                            <tr>
                                                <td class="cell-strong">
                                                    {format!(
                                                        "{} {}",
                                                        contact.first_name,
                                                        contact.last_name,
                                                    )}
                                                </td>
                                                <td>{contact.email}</td>
                                                <td>{contact.phone}</td>
                                                <td>
                                                    <span class="badge">{contact.role}</span>
                                                </td>
                                                <td class="cell-actions">
                                                    <button
                                                        class="row-delete"
                                                        on:click=move |_| {
                                                            let snapshot = contacts.remove_item(id);
                                                            spawn_local(async move {
                                                                match api::delete_contact(id).await {
                                                                    Ok(()) => ctx.toast_success("Contact deleted"),
                                                                    Err(err) => {
                                                                        contacts.restore(snapshot);
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
