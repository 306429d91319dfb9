use futures::executor::block_on;

use super::*;
use crate::net::api::Method;
use crate::net::testing::{RecordingTransport, TEST_TOKEN, with_app_context};
use crate::net::types::Role;

const ANA: &str = r#"{"id":42,"username":"ana","email":"ana@example.com","role":"user","isActive":true}"#;
const BO: &str = r#"{"id":7,"username":"bo","email":"bo@example.com","role":"user","isActive":true}"#;

fn backend() -> RecordingTransport {
    RecordingTransport::new(|method, path| match (method, path) {
        (Method::Get, "/users") => Ok(format!(r#"{{"users":[{ANA},{BO}]}}"#)),
        (Method::Get, "/users/42") => Ok(format!(
            r#"{{"user":{{"id":42,"username":"ana","email":"ana@example.com","role":"user","isActive":true,"Images":[]}}}}"#
        )),
        (Method::Put, "/users/42") => Ok(format!(r#"{{"user":{ANA}}}"#)),
        (Method::Delete, "/users/42") => Ok(String::new()),
        _ => Err(ApiError::from_status(404, r#"{"message":"not found"}"#)),
    })
}

/// Load the list and select user 42, returning the hook.
fn with_selected_user<T>(transport: &RecordingTransport, f: impl FnOnce(AdminHook) -> T) -> T {
    with_app_context(transport, || {
        let hook = use_admin();
        block_on(hook.fetch_users());
        block_on(hook.select_user("42".to_owned()));
        f(hook)
    })
}

#[test]
fn delete_issues_request_then_refetches_and_clears_selection() {
    let transport = backend();
    with_selected_user(&transport, |hook| {
        assert!(hook.state.with_untracked(|s| s.is_selected("42")));

        block_on(hook.delete_user("42".to_owned()));

        assert_eq!(transport.calls(), vec!["GET /users", "GET /users/42", "DELETE /users/42", "GET /users"]);
        hook.state.with_untracked(|s| {
            assert!(s.selected.is_none());
            assert!(s.draft.is_none());
            assert!(!s.loading());
            assert!(s.error.is_none());
        });
    });
}

#[test]
fn save_sends_changed_fields_then_refetches_list_and_detail() {
    let transport = backend();
    with_selected_user(&transport, |hook| {
        hook.state.update(|s| {
            s.edit_draft(|d| d.username = "anna".to_owned());
            s.edit_draft(|d| d.role = Role::Admin);
        });

        block_on(hook.save_selected());

        assert_eq!(
            transport.calls(),
            vec!["GET /users", "GET /users/42", "PUT /users/42", "GET /users", "GET /users/42"]
        );
        let put = &transport.requests()[2];
        assert_eq!(put.json, Some(serde_json::json!({ "username": "anna", "role": "admin" })));
        assert_eq!(put.authorization, Some(format!("Bearer {TEST_TOKEN}")));
        assert!(hook.state.with_untracked(|s| s.is_selected("42") && !s.loading()));
    });
}

#[test]
fn save_without_changes_sends_nothing() {
    let transport = backend();
    with_selected_user(&transport, |hook| {
        block_on(hook.save_selected());
        assert_eq!(transport.calls(), vec!["GET /users", "GET /users/42"]);
    });
}

#[test]
fn failed_delete_keeps_selection_and_reports_server_message() {
    let transport = backend();
    with_selected_user(&transport, |hook| {
        block_on(hook.delete_user("99".to_owned()));

        assert_eq!(transport.calls().last().map(String::as_str), Some("DELETE /users/99"));
        hook.state.with_untracked(|s| {
            assert!(s.is_selected("42"));
            assert_eq!(s.error.as_deref(), Some("not found"));
            assert!(!s.loading());
        });
    });
}
