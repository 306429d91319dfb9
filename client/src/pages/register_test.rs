use super::*;

fn form(username: &str, email: &str, password: &str, confirm: &str) -> RegisterForm {
    RegisterForm {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        confirm: confirm.to_owned(),
    }
}

#[test]
fn validate_register_input_accepts_complete_form() {
    let request = validate_register_input(&form(" ann ", " ann@example.com", "hunter22", "hunter22")).expect("valid");
    assert_eq!(request.username, "ann");
    assert_eq!(request.email, "ann@example.com");
    assert_eq!(request.password, "hunter22");
}

#[test]
fn validate_register_input_requires_every_field() {
    assert_eq!(validate_register_input(&form("", "a@b.c", "secret", "secret")), Err("All fields are required."));
    assert_eq!(validate_register_input(&form("ann", " ", "secret", "secret")), Err("All fields are required."));
    assert_eq!(validate_register_input(&form("ann", "a@b.c", "", "")), Err("All fields are required."));
}

#[test]
fn validate_register_input_rejects_mismatched_confirmation() {
    assert_eq!(
        validate_register_input(&form("ann", "a@b.c", "secret1", "secret2")),
        Err("Passwords do not match.")
    );
}

#[test]
fn validate_register_input_enforces_minimum_length() {
    assert_eq!(
        validate_register_input(&form("ann", "a@b.c", "abc", "abc")),
        Err("Password must be at least 6 characters.")
    );
    assert!(validate_register_input(&form("ann", "a@b.c", "abcdef", "abcdef")).is_ok());
}
