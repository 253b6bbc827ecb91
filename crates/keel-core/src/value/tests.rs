use super::*;
use crate::test_fixtures::Token;
use proptest::prelude::*;
use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
    sync::Arc,
};
use time::macros::{datetime, offset};

fn hash_of(value: &Value) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn equality_is_variant_sensitive() {
    assert_ne!(Value::Int32(7), Value::Int64(7));
    assert_ne!(Value::Int16(7), Value::Int32(7));
    assert_ne!(Value::from("7"), Value::Int32(7));
    assert_eq!(Value::from("Ate"), Value::Text("Ate".to_string()));
}

#[test]
fn negative_zero_is_canonical() {
    let neg = Value::Float64(Float64::try_new(-0.0).unwrap());
    let pos = Value::Float64(Float64::try_new(0.0).unwrap());

    assert_eq!(neg, pos);
    assert_eq!(hash_of(&neg), hash_of(&pos));
}

#[test]
fn non_finite_floats_are_rejected() {
    assert!(Float32::try_new(f32::NAN).is_none());
    assert!(Float64::try_new(f64::INFINITY).is_none());
    assert!(matches!(
        Float64::try_from(f64::NEG_INFINITY),
        Err(ValueError::NonFinite)
    ));
    assert_eq!(f64::NAN.to_value(), Value::Null);
}

#[test]
fn fallible_float_conversion_reports_non_finite() {
    assert!(matches!(Value::try_from(f64::NAN), Err(ValueError::NonFinite)));
    assert!(matches!(
        Value::try_from(f32::INFINITY),
        Err(ValueError::NonFinite)
    ));
    assert_eq!(
        Value::try_from(1.5_f64).unwrap(),
        Value::Float64(Float64::try_new(1.5).unwrap())
    );
}

#[test]
fn opaque_values_compare_by_identity() {
    let shared = Arc::new(Token(1));
    let a = Value::Opaque(OpaqueValue::from_arc(Arc::clone(&shared)));
    let b = Value::Opaque(OpaqueValue::from_arc(shared));
    let c = Value::opaque(Token(1));

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(a, c);
}

#[test]
fn opaque_values_downcast_to_their_type() {
    let Value::Opaque(opaque) = Value::opaque(Token(5)) else {
        panic!("expected opaque value");
    };

    assert_eq!(opaque.downcast_ref::<Token>().map(|t| t.0), Some(5));
    assert!(opaque.downcast_ref::<String>().is_none());
    assert_eq!(opaque.runtime_type().display_name(), "Token");
}

#[test]
fn null_is_an_instance_of_every_type() {
    assert!(Value::Null.is_instance_of(&RuntimeType::INT32));
    assert!(Value::Null.is_instance_of(&RuntimeType::custom_of::<Token>()));
    assert_eq!(Value::Null.runtime_type(), None);
}

#[test]
fn instance_checks_follow_runtime_type() {
    assert!(Value::Int32(1).is_instance_of(&RuntimeType::INT32));
    assert!(!Value::Int32(1).is_instance_of(&RuntimeType::INT64));
    assert!(Value::opaque(Token(1)).is_instance_of(&RuntimeType::custom_of::<Token>()));
    assert!(!Value::opaque(Token(1)).is_instance_of(&RuntimeType::custom("Other")));
    assert!(!Value::from("x").is_instance_of(&RuntimeType::custom("Text")));
}

#[test]
fn qualified_custom_types_must_match_by_path() {
    let token = Value::opaque(Token(1));

    assert!(!token.is_instance_of(&RuntimeType::custom("other::Token")));
    assert!(token.is_instance_of(&RuntimeType::custom("Token")));
    assert!(
        token
            .expect_instance_of(&RuntimeType::custom("billing::Token"))
            .is_err()
    );
}

#[test]
fn mismatch_message_names_both_types() {
    let err = Value::Int32(1)
        .expect_instance_of(&RuntimeType::TEXT)
        .unwrap_err()
        .at(ErrorOrigin::Entry, "'Order.Number'");

    assert!(err.is_type_mismatch());
    assert_eq!(
        err.message,
        "'Order.Number': expected Text value, found Int32"
    );
}

#[test]
fn display_renders_readable_literals() {
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::from("Ate").to_string(), "\"Ate\"");
    assert_eq!(Value::Bytes(vec![0xde, 0xad]).to_string(), "0xdead");
    assert_eq!(Value::opaque(Token(1)).to_string(), "<Token>");
    assert_eq!(Value::Decimal(Decimal::new(1999, 2)).to_string(), "19.99");
}

#[test]
fn option_converts_to_null() {
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(Some(3_i64)), Value::Int64(3));
}

#[test]
fn field_values_do_not_widen() {
    assert_eq!(i32::from_value(&Value::Int32(4)), Some(4));
    assert_eq!(i64::from_value(&Value::Int32(4)), None);
    assert_eq!(String::from_value(&Value::Null), None);
}

#[test]
fn temporal_values_carry_their_kind() {
    let local = Value::from(datetime!(2024-03-01 12:00));
    let offset = Value::from(datetime!(2024-03-01 12:00).assume_offset(offset!(+2)));

    assert_eq!(local.runtime_type(), Some(RuntimeType::DATE_TIME));
    assert_eq!(offset.runtime_type(), Some(RuntimeType::DATE_TIME_OFFSET));
    assert_eq!(offset.tag().to_u8(), 9);
}

proptest! {
    #[test]
    fn equal_values_hash_equally(n in any::<i64>(), s in ".{0,16}") {
        let a = vec![Value::Int64(n), Value::from(s.as_str())];
        let b = vec![Value::Int64(n), Value::Text(s.clone())];

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(
            a.iter().map(hash_of).collect::<Vec<_>>(),
            b.iter().map(hash_of).collect::<Vec<_>>()
        );
    }

    #[test]
    fn finite_floats_round_trip_through_field_value(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
        let value = x.to_value();

        prop_assert_eq!(f64::from_value(&value), Some(if x == 0.0 { 0.0 } else { x }));
    }
}
