//! Detail/edit panel for the admin dashboard's selected user.
//!
//! DESIGN
//! ======
//! Inputs write into `AdminState::draft`; nothing is sent until "Save
//! changes", which issues one partial update with just the edited fields.

use leptos::prelude::*;

use crate::components::image_card::ImageCard;
use crate::config::ApiConfig;
use crate::net::types::Role;
use crate::state::admin::{AdminState, UserDraft};

#[component]
pub fn UserDetailPanel(
    state: RwSignal<AdminState>,
    on_save: Callback<()>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let config = StoredValue::new(use_context::<ApiConfig>().unwrap_or_default());

    let draft_value = move |read: fn(&UserDraft) -> String| {
        state.with(|s| s.draft.as_ref().map(read).unwrap_or_default())
    };
    let has_changes = move || state.with(|s| s.pending_update().is_some());
    let selected_id = move || state.with(|s| s.selected_id().map(str::to_owned));

    let images = move || {
        state.with(|s| s.selected.as_ref().map(|d| d.images.clone()).unwrap_or_default())
    };

    view! {
        <Show
            when=move || selected_id().is_some()
            fallback=|| view! { <div class="user-detail-panel user-detail-panel--empty">"Select a user to view details"</div> }
        >
            <section class="user-detail-panel">
                <h2>"User Details"</h2>
                <form
                    class="user-detail-panel__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        on_save.run(());
                    }
                >
                    <label class="user-detail-panel__label">
                        "Username"
                        <input
                            class="user-detail-panel__input"
                            type="text"
                            prop:value=move || draft_value(|d| d.username.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| s.edit_draft(|d| d.username = value));
                            }
                        />
                    </label>
                    <label class="user-detail-panel__label">
                        "Email"
                        <input
                            class="user-detail-panel__input"
                            type="email"
                            prop:value=move || draft_value(|d| d.email.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| s.edit_draft(|d| d.email = value));
                            }
                        />
                    </label>
                    <label class="user-detail-panel__label">
                        "Role"
                        <select
                            class="user-detail-panel__input"
                            prop:value=move || draft_value(|d| d.role.as_str().to_owned())
                            on:change=move |ev| {
                                if let Some(role) = Role::parse(&event_target_value(&ev)) {
                                    state.update(|s| s.edit_draft(|d| d.role = role));
                                }
                            }
                        >
                            {Role::ALL
                                .into_iter()
                                .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="user-detail-panel__label">
                        "Status"
                        <select
                            class="user-detail-panel__input"
                            prop:value=move || {
                                draft_value(|d| if d.is_active { "active" } else { "inactive" }.to_owned())
                            }
                            on:change=move |ev| {
                                let active = event_target_value(&ev) == "active";
                                state.update(|s| s.edit_draft(|d| d.is_active = active));
                            }
                        >
                            <option value="active">"Active"</option>
                            <option value="inactive">"Inactive"</option>
                        </select>
                    </label>
                    <div class="user-detail-panel__actions">
                        <button
                            class="btn"
                            type="button"
                            disabled=move || !has_changes()
                            on:click=move |_| state.update(AdminState::discard_draft)
                        >
                            "Discard"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || !has_changes()>
                            "Save changes"
                        </button>
                    </div>
                    <button
                        class="btn btn--danger user-detail-panel__delete"
                        type="button"
                        on:click=move |_| {
                            if let Some(id) = selected_id() {
                                on_delete.run(id);
                            }
                        }
                    >
                        "Delete User"
                    </button>
                </form>

                <h3 class="user-detail-panel__images-title">"User's Images"</h3>
                <div class="user-detail-panel__images">
                    {move || {
                        images()
                            .into_iter()
                            .map(|image| {
                                let src = config.with_value(|c| c.image_url(&image.filename));
                                view! { <ImageCard image=image src=src compact=true/> }
                            })
                            .collect_view()
                    }}
                </div>
            </section>
        </Show>
    }
}
