use super::*;
use rules::validators::REQUIRED_MESSAGE;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  alice  ", "hunter2"),
        Ok("alice".to_owned())
    );
}

#[test]
fn validate_login_input_accepts_padded_password() {
    assert_eq!(validate_login_input("alice", " spaced "), Ok("alice".to_owned()));
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("   ", ""),
        Err(LoginErrors {
            username: Some(REQUIRED_MESSAGE.to_owned()),
            password: Some(REQUIRED_MESSAGE.to_owned()),
        })
    );
}

#[test]
fn validate_login_input_rejects_blank_password() {
    let errors = validate_login_input("alice", "   ").unwrap_err();
    assert_eq!(errors.username, None);
    assert_eq!(errors.password.as_deref(), Some(REQUIRED_MESSAGE));
}

#[test]
fn validate_login_input_accepts_any_filled_credentials() {
    assert!(validate_login_input("alice smith", "x").is_ok());
}
