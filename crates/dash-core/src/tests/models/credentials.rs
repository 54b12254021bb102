use crate::{Credentials, Registration};

#[test]
fn test_credentials_require_email_and_password() {
    assert!(Credentials::new("admin@x.com", "secret").validate().is_ok());

    let missing_password = Credentials::new("admin@x.com", "").validate().unwrap_err();
    assert_eq!(missing_password.field(), Some("password"));
    assert!(missing_password.to_string().contains("Please fill in all fields"));

    let missing_email = Credentials::new(" ", "secret").validate().unwrap_err();
    assert_eq!(missing_email.field(), Some("email"));
}

#[test]
fn test_registration_requires_every_field() {
    assert!(Registration::new("A", "a@x.com", "pw").validate().is_ok());
    assert_eq!(
        Registration::new("", "a@x.com", "pw")
            .validate()
            .unwrap_err()
            .field(),
        Some("name")
    );
}

#[test]
fn test_credentials_debug_hides_password() {
    let rendered = format!("{:?}", Credentials::new("admin@x.com", "hunter2"));

    assert!(rendered.contains("admin@x.com"));
    assert!(!rendered.contains("hunter2"));
}
