use super::*;
use crate::net::types::{Role, User};

fn signed_in(role: Role) -> Session {
    let mut session = Session::anonymous();
    session.login(
        User {
            id: "u1".to_owned(),
            username: "ana".to_owned(),
            email: "ana@example.com".to_owned(),
            role,
            is_active: true,
        },
        "token".to_owned(),
    );
    session
}

#[test]
fn unauthenticated_always_redirects_to_login() {
    for require_admin in [false, true] {
        assert_eq!(
            guard_outcome(&Session::anonymous(), require_admin),
            GuardOutcome::RedirectToLogin
        );
    }
}

#[test]
fn authenticated_user_renders_plain_routes() {
    for role in Role::ALL {
        assert_eq!(guard_outcome(&signed_in(role), false), GuardOutcome::Render);
    }
}

#[test]
fn admin_route_renders_for_admin() {
    assert_eq!(guard_outcome(&signed_in(Role::Admin), true), GuardOutcome::Render);
}

#[test]
fn non_admin_on_admin_route_goes_to_gallery() {
    let outcome = guard_outcome(&signed_in(Role::User), true);
    assert_eq!(outcome, GuardOutcome::RedirectToGallery);
    assert_eq!(outcome.redirect_path(), Some("/gallery"));
}

#[test]
fn restoring_session_waits_without_redirect() {
    let outcome = guard_outcome(&Session::default(), true);
    assert_eq!(outcome, GuardOutcome::Pending);
    assert_eq!(outcome.redirect_path(), None);
}

#[test]
fn login_redirect_path() {
    assert_eq!(GuardOutcome::RedirectToLogin.redirect_path(), Some("/login"));
    assert_eq!(GuardOutcome::Render.redirect_path(), None);
}
