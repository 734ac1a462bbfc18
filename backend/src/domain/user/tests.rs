//! Tests for user serialisation and field sets.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn user_serialises_with_column_names() {
    let user = User::new(UserId::new(7), "Ada Lovelace", "ada@example.com");
    let value = serde_json::to_value(&user).expect("serialise user");
    assert_eq!(
        value,
        json!({ "id": 7, "full_name": "Ada Lovelace", "email": "ada@example.com" })
    );
}

#[rstest]
fn user_deserialises_from_column_names() {
    let user: User = serde_json::from_value(json!({
        "id": 3,
        "full_name": "Grace Hopper",
        "email": "grace@example.com",
    }))
    .expect("deserialise user");
    assert_eq!(user.id(), UserId::new(3));
    assert_eq!(user.full_name(), Some("Grace Hopper"));
    assert_eq!(user.email(), Some("grace@example.com"));
}

#[rstest]
fn missing_columns_serialise_as_null() {
    let user = User::from_columns(UserId::new(4), Some("Ada Lovelace".to_owned()), None);
    let value = serde_json::to_value(&user).expect("serialise user");
    assert_eq!(
        value,
        json!({ "id": 4, "full_name": "Ada Lovelace", "email": null })
    );
    assert_eq!(user.email(), None);
}

#[rstest]
#[case(UserFields::new(), true)]
#[case(UserFields::new().with_full_name("x"), false)]
#[case(UserFields::new().with_email("x@example.com"), false)]
fn field_set_emptiness(#[case] fields: UserFields, #[case] expected: bool) {
    assert_eq!(fields.is_empty(), expected);
}

#[rstest]
fn user_id_orders_numerically() {
    assert!(UserId::new(2) < UserId::new(10));
    assert_eq!(UserId::from(5).get(), 5);
}
