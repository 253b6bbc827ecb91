use super::*;
use crate::{error::ErrorOrigin, test_fixtures};
use keel_primitives::RuntimeKind;

#[test]
fn indexes_follow_declaration_order() {
    let order = test_fixtures::order_type();

    let names: Vec<_> = order.properties().iter().map(Property::name).collect();
    let indexes: Vec<_> = order.properties().iter().map(Property::index).collect();

    assert_eq!(names, ["Id", "Number", "Placed", "Total", "Version"]);
    assert_eq!(indexes, [0, 1, 2, 3, 4]);
    assert_eq!(order.property_count(), 5);
}

#[test]
fn key_and_token_flags_are_materialized() {
    let order = test_fixtures::order_type();

    assert!(order.property("Id").unwrap().is_key());
    assert!(!order.property("Number").unwrap().is_key());
    assert!(order.property("Version").unwrap().is_concurrency_token());
    assert!(!order.property("Id").unwrap().is_concurrency_token());
}

#[test]
fn key_keeps_declared_order() {
    let entity = EntityType::builder("Pair")
        .property("A", RuntimeType::INT32)
        .property("B", RuntimeType::INT32)
        .key(["B", "A"])
        .build()
        .unwrap();

    let key: Vec<_> = entity.key().into_iter().map(Property::name).collect();

    assert_eq!(key, ["B", "A"]);
}

#[test]
fn contains_requires_matching_metadata() {
    let order = test_fixtures::order_type();
    let rebuilt = test_fixtures::order_type();
    let customer = test_fixtures::customer_type();
    let other = EntityType::builder("Other")
        .property("Id", RuntimeType::INT32)
        .property("Code", RuntimeType::TEXT)
        .key(["Code"])
        .build()
        .unwrap();

    assert!(order.contains(order.property("Number").unwrap()));
    assert!(order.contains(rebuilt.property("Id").unwrap()));
    // same name and slot, different type
    assert!(!order.contains(customer.property("Id").unwrap()));
    // same name, slot and type, not a key
    assert!(!order.contains(other.property("Id").unwrap()));
    assert!(!order.contains(customer.property("Email").unwrap()));
}

#[test]
fn lookup_by_position() {
    let order = test_fixtures::order_type();

    assert_eq!(order.property_at(1).map(Property::name), Some("Number"));
    assert!(order.property_at(5).is_none());
}

#[test]
fn builder_rejects_invalid_models() {
    let cases = [
        EntityType::builder(" ").property("Id", RuntimeType::INT32).key(["Id"]),
        EntityType::builder("E").property("", RuntimeType::INT32).key(["Id"]),
        EntityType::builder("E")
            .property("Id", RuntimeType::INT32)
            .property("Id", RuntimeType::TEXT)
            .key(["Id"]),
        EntityType::builder("E").property("Id", RuntimeType::INT32),
        EntityType::builder("E")
            .property("Id", RuntimeType::INT32)
            .key(["Missing"]),
        EntityType::builder("E")
            .property("Id", RuntimeType::INT32)
            .key(["Id", "Id"]),
        EntityType::builder("E")
            .property("Id", RuntimeType::INT32)
            .property("Blob", RuntimeType::custom(""))
            .key(["Id"]),
    ];

    for builder in cases {
        let err = builder.build().unwrap_err();

        assert!(err.is_invalid_argument(), "{err}");
        assert_eq!(err.origin, ErrorOrigin::Model);
    }
}

#[test]
fn runtime_type_names() {
    assert_eq!(RuntimeType::INT32.name(), "Int32");
    assert_eq!(RuntimeType::INT32.kind(), Some(RuntimeKind::Int32));
    assert_eq!(RuntimeType::from(RuntimeKind::Text), RuntimeType::TEXT);

    let custom = RuntimeType::custom_of::<test_fixtures::Token>();
    assert!(custom.is_custom());
    assert_eq!(custom.kind(), None);
    assert!(custom.name().ends_with("::Token"));
    assert_eq!(custom.display_name(), "Token");

    let generic = RuntimeType::custom("app::Wrapper<app::Inner>");
    assert_eq!(generic.to_string(), "Wrapper");
}
