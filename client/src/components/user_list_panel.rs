//! User table for the admin dashboard's left column.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `AdminState::users` as populated by `GET /users`. Clicking a row
//! asks the page to load that user's details.

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::admin::AdminState;

#[component]
pub fn UserListPanel(state: RwSignal<AdminState>, on_select: Callback<String>) -> impl IntoView {
    let rows = move || {
        let s = state.get();
        let selected = s.selected_id().map(str::to_owned);
        let mut users = s.users;
        users.sort_by(|a, b| a.username.to_lowercase().cmp(&b.username.to_lowercase()));
        users
            .into_iter()
            .map(|u| {
                let is_selected = selected.as_deref() == Some(u.id.as_str());
                (u, is_selected)
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section class="user-list-panel">
            <h2 class="user-list-panel__title">"Users"</h2>
            <div class="user-list-panel__summary">{move || format!("{} accounts", state.with(|s| s.users.len()))}</div>
            <Show
                when=move || state.with(|s| !s.users.is_empty())
                fallback=move || view! { <div class="user-list-panel__empty">"No users."</div> }
            >
                <ul class="user-list-panel__rows">
                    {move || {
                        rows()
                            .into_iter()
                            .map(|(user, is_selected)| {
                                let id = user.id.clone();
                                let badge_class = match user.role {
                                    Role::Admin => "user-list-panel__badge user-list-panel__badge--admin",
                                    Role::User => "user-list-panel__badge",
                                };
                                view! {
                                    <li
                                        class="user-list-panel__row"
                                        class:user-list-panel__row--selected=is_selected
                                        class:user-list-panel__row--inactive=!user.is_active
                                        on:click=move |_| on_select.run(id.clone())
                                    >
                                        <div class="user-list-panel__user">
                                            <span class="user-list-panel__name">{user.username}</span>
                                            <span class="user-list-panel__email">{user.email}</span>
                                        </div>
                                        <span class=badge_class>{user.role.as_str()}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </section>
    }
}
