//! Admin dashboard: user list on the left, selected user's details and
//! images on the right.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::user_detail_panel::UserDetailPanel;
use crate::components::user_list_panel::UserListPanel;
use crate::hooks::admin::use_admin;
use crate::state::admin::AdminState;

pub const DELETE_USER_LABEL: &str = "Delete User";

/// Confirmation text for deleting `id`, naming the user when known.
pub fn delete_prompt(state: &AdminState, id: &str) -> String {
    let name = state
        .users
        .iter()
        .find(|u| u.id == id)
        .map(|u| u.username.as_str())
        .or_else(|| state.selected.as_ref().filter(|d| d.user.id == id).map(|d| d.user.username.as_str()));
    match name {
        Some(name) => format!("Delete {name}? Their images will be deleted too. This cannot be undone."),
        None => "Delete this user? Their images will be deleted too. This cannot be undone.".to_owned(),
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let hook = use_admin();
    let state = hook.state;
    let pending_delete = RwSignal::new(None::<String>);

    Effect::new(move || {
        leptos::task::spawn_local(hook.fetch_users());
    });

    let on_select = Callback::new(move |id: String| {
        leptos::task::spawn_local(hook.select_user(id));
    });
    let on_save = Callback::new(move |()| {
        leptos::task::spawn_local(hook.save_selected());
    });
    let on_delete = Callback::new(move |id: String| pending_delete.set(Some(id)));
    let on_confirm_delete = Callback::new(move |()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        leptos::task::spawn_local(hook.delete_user(id));
    });
    let on_cancel_delete = Callback::new(move |()| pending_delete.set(None));

    let error = move || state.with(|s| s.error.clone());
    let waiting = move || state.with(|s| s.loading() && s.users.is_empty());

    view! {
        <div class="page admin-page">
            <h1>"Admin Dashboard"</h1>
            <Show
                when=move || error().is_none()
                fallback=move || {
                    view! {
                        <div class="page-error">
                            <p>{move || format!("Error: {}", error().unwrap_or_default())}</p>
                            <button
                                class="btn"
                                type="button"
                                on:click=move |_| leptos::task::spawn_local(hook.fetch_users())
                            >
                                "Retry"
                            </button>
                        </div>
                    }
                }
            >
                <Show
                    when=move || !waiting()
                    fallback=|| view! { <div class="admin-page__loading">"Loading..."</div> }
                >
                    <div class="admin-page__columns">
                        <UserListPanel state=state on_select=on_select/>
                        <UserDetailPanel state=state on_save=on_save on_delete=on_delete/>
                    </div>
                </Show>
            </Show>

            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete User"
                    confirm_label=DELETE_USER_LABEL
                    message=state.with_untracked(|s| {
                        pending_delete.get_untracked().map(|id| delete_prompt(s, &id)).unwrap_or_default()
                    })
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            </Show>
        </div>
    }
}
