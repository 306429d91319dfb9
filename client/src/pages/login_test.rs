use super::*;

#[test]
fn validate_login_input_trims_email() {
    let request = validate_login_input("  ann@example.com ", "secret").expect("valid");
    assert_eq!(request.email, "ann@example.com");
    assert_eq!(request.password, "secret");
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    let request = validate_login_input("ann@example.com", " pw ").expect("valid");
    assert_eq!(request.password, " pw ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert!(validate_login_input("", "secret").is_err());
    assert!(validate_login_input("   ", "secret").is_err());
    assert!(validate_login_input("ann@example.com", "").is_err());
}
