use crate::{CoreError, NewUser, Region, UserUpdate};

use crate::tests::{at, user};

#[test]
fn test_new_user_validate_accepts_complete_input() {
    let new_user = NewUser::new("A", "a@x.com", Region::NorthAmerica);
    assert!(new_user.validate().is_ok());
}

#[test]
fn test_new_user_validate_rejects_each_missing_field() {
    let cases = [
        (NewUser::new("", "a@x.com", Region::Europe), "name"),
        (NewUser::new("A", "   ", Region::Europe), "email"),
        (NewUser::new("A", "a@x.com", Region::Unset), "region"),
    ];

    for (new_user, field) in cases {
        let err = new_user.validate().unwrap_err();
        assert!(matches!(err, CoreError::Validation { .. }));
        assert_eq!(err.field(), Some(field));
    }
}

#[test]
fn test_new_user_serializes_create_body() {
    let new_user = NewUser::new("A", "a@x.com", Region::NorthAmerica);

    let value = serde_json::to_value(&new_user).unwrap();

    assert_eq!(
        value,
        serde_json::json!({"name": "A", "email": "a@x.com", "region": "NA"})
    );
}

#[test]
fn test_user_update_keeps_identity_fields() {
    let original = user("9", Region::Asia, true, at(2023, 12, 24));
    let update = UserUpdate {
        name: Some("Renamed".into()),
        is_active: Some(false),
        ..Default::default()
    };

    let updated = update.apply(&original).unwrap();

    assert_eq!(updated.id, "9");
    assert_eq!(updated.created_at, original.created_at);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.email, original.email);
    assert!(!updated.is_active);
}

#[test]
fn test_user_update_rejects_clearing_region() {
    let original = user("9", Region::Asia, true, at(2023, 12, 24));
    let update = UserUpdate {
        region: Some(Region::Unset),
        ..Default::default()
    };

    assert!(update.apply(&original).is_err());
}

#[test]
fn test_user_update_is_empty() {
    assert!(UserUpdate::default().is_empty());
    assert!(
        !UserUpdate {
            email: Some("x@y.z".into()),
            ..Default::default()
        }
        .is_empty()
    );
}
