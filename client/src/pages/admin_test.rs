use super::*;
use crate::net::types::{Role, User, UserDetail};

fn user(id: &str, username: &str) -> User {
    User {
        id: id.to_owned(),
        username: username.to_owned(),
        email: format!("{username}@example.com"),
        role: Role::User,
        is_active: true,
    }
}

#[test]
fn delete_prompt_names_listed_user() {
    let mut state = AdminState::default();
    state.finish_fetch_users(vec![user("1", "ana"), user("2", "bo")]);
    assert!(delete_prompt(&state, "2").starts_with("Delete bo?"));
}

#[test]
fn delete_prompt_falls_back_to_selected_detail() {
    let mut state = AdminState::default();
    state.finish_select(UserDetail { user: user("9", "cy"), images: Vec::new() });
    assert!(delete_prompt(&state, "9").starts_with("Delete cy?"));
}

#[test]
fn delete_prompt_is_generic_for_unknown_id() {
    let state = AdminState::default();
    assert!(delete_prompt(&state, "404").starts_with("Delete this user?"));
}

#[test]
fn delete_dialog_confirms_with_user_label() {
    let owner = Owner::new();
    let html = owner.with(|| {
        view! {
            <ConfirmDialog
                title="Remove account"
                confirm_label=DELETE_USER_LABEL
                message="gone for good"
                on_confirm=Callback::new(|()| {})
                on_cancel=Callback::new(|()| {})
            />
        }
        .to_html()
    });
    assert!(html.contains(DELETE_USER_LABEL));
    assert!(html.contains("Remove account"));
}
