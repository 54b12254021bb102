use crate::{Region, User};

use crate::tests::at;

#[test]
fn test_user_deserializes_camel_case_wire_format() {
    let json = r#"{
        "id": "65a1",
        "name": "Ada",
        "email": "ada@example.com",
        "region": "EU",
        "isActive": true,
        "createdAt": "2024-01-01T00:00:00.000Z"
    }"#;

    let user: User = serde_json::from_str(json).unwrap();

    assert_eq!(user.id, "65a1");
    assert_eq!(user.region, Region::Europe);
    assert!(user.is_active);
    assert_eq!(user.created_at.to_rfc3339(), "2024-01-01T00:00:00+00:00");
}

#[test]
fn test_user_numeric_id_is_stored_as_string() {
    let json = r#"{"id":42,"name":"N","email":"n@x.com","region":"","isActive":false,"createdAt":"2024-03-05T10:00:00Z"}"#;

    let user: User = serde_json::from_str(json).unwrap();

    assert_eq!(user.id, "42");
    assert_eq!(user.region, Region::Unset);
}

#[test]
fn test_user_missing_optional_fields_default() {
    let json = r#"{"id":"1","email":"a@x.com","createdAt":"2024-03-05T10:00:00Z"}"#;

    let user: User = serde_json::from_str(json).unwrap();

    assert_eq!(user.name, "");
    assert_eq!(user.region, Region::Unset);
    assert!(!user.is_active);
}

#[test]
fn test_user_serializes_camel_case_keys() {
    let user = crate::tests::user("7", Region::Africa, true, at(2024, 2, 1));

    let value = serde_json::to_value(&user).unwrap();

    assert_eq!(value["isActive"], true);
    assert_eq!(value["region"], "AF");
    assert!(value.get("createdAt").is_some());
    assert!(value.get("is_active").is_none());
}

#[test]
fn test_user_has_id() {
    let mut user = crate::tests::user("1", Region::Asia, true, at(2024, 2, 1));
    assert!(user.has_id());

    user.id = "  ".to_string();
    assert!(!user.has_id());
}
