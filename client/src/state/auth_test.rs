use super::*;

fn user(id: &str, role: Role) -> User {
    User {
        id: id.to_owned(),
        username: "ana".to_owned(),
        email: "ana@example.com".to_owned(),
        role,
        is_active: true,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_default_is_restoring_without_user() {
    let session = Session::default();
    assert!(session.restoring);
    assert!(!session.is_authenticated());
}

#[test]
fn anonymous_session_is_settled() {
    let session = Session::anonymous();
    assert!(!session.restoring);
    assert!(session.user().is_none());
    assert!(session.token().is_none());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn login_sets_user_token_and_authenticated() {
    let mut session = Session::default();
    session.login(user("1", Role::User), "tok".to_owned());
    assert!(session.is_authenticated());
    assert!(!session.restoring);
    assert_eq!(session.token(), Some("tok"));
    assert_eq!(session.role(), Some(Role::User));
    assert!(!session.is_admin());
}

#[test]
fn logout_clears_everything() {
    let mut session = Session::anonymous();
    session.login(user("1", Role::Admin), "tok".to_owned());
    session.logout();
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
    assert!(session.token().is_none());
}

#[test]
fn authenticated_iff_user_present() {
    let mut session = Session::restored(None);
    assert_eq!(session.is_authenticated(), session.user().is_some());
    session.login(user("1", Role::User), "t".to_owned());
    assert_eq!(session.is_authenticated(), session.user().is_some());
}

#[test]
fn restored_session_keeps_stored_user() {
    let stored = SessionUser { user: user("9", Role::Admin), token: "t".to_owned() };
    let session = Session::restored(Some(stored));
    assert!(session.is_admin());
    assert!(!session.restoring);
}

#[test]
fn refresh_user_only_touches_matching_id() {
    let mut session = Session::anonymous();
    session.login(user("1", Role::User), "t".to_owned());

    session.refresh_user(&user("2", Role::Admin));
    assert!(!session.is_admin());

    session.refresh_user(&user("1", Role::Admin));
    assert!(session.is_admin());
    assert_eq!(session.token(), Some("t"));
}
