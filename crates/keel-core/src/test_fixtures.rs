//! Shared entity models for unit tests.

use crate::{
    entry::{EntityState, StateEntry},
    model::{EntityType, RuntimeType},
    value::Value,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use time::macros::datetime;

///
/// Token
/// Application type stored as an opaque key component.
///

#[derive(Debug)]
pub(crate) struct Token(pub(crate) u32);

/// `Order { Id: Int32 (key), Number: Text, Placed: DateTime, Total: Decimal, Version: Bytes (token) }`
pub(crate) fn order_type() -> Arc<EntityType> {
    EntityType::builder("Order")
        .property("Id", RuntimeType::INT32)
        .property("Number", RuntimeType::TEXT)
        .property("Placed", RuntimeType::DATE_TIME)
        .property("Total", RuntimeType::DECIMAL)
        .concurrency_token("Version", RuntimeType::BYTES)
        .key(["Id"])
        .build()
        .unwrap()
}

pub(crate) fn order_values(id: i32, number: &str) -> Vec<Value> {
    vec![
        Value::Int32(id),
        Value::from(number),
        Value::DateTime(datetime!(2024-03-01 12:00)),
        Value::Decimal(Decimal::new(1999, 2)),
        Value::Bytes(vec![0, 0, 0, 0, 0, 0, 0, 1]),
    ]
}

pub(crate) fn order_entry(id: i32, number: &str) -> StateEntry {
    StateEntry::from_values(order_type(), order_values(id, number), EntityState::Unchanged)
        .unwrap()
}

/// `Customer { Id: Int64 (key), Email: Text }`
pub(crate) fn customer_type() -> Arc<EntityType> {
    EntityType::builder("Customer")
        .property("Id", RuntimeType::INT64)
        .property("Email", RuntimeType::TEXT)
        .key(["Id"])
        .build()
        .unwrap()
}

/// `OrderLine { OrderId: Int32, Product: Text, Token: Token, Quantity: Int16 }`
/// keyed on `(OrderId, Product, Token)`.
pub(crate) fn line_type() -> Arc<EntityType> {
    EntityType::builder("OrderLine")
        .property("OrderId", RuntimeType::INT32)
        .property("Product", RuntimeType::TEXT)
        .property("Token", RuntimeType::custom_of::<Token>())
        .property("Quantity", RuntimeType::INT16)
        .key(["OrderId", "Product", "Token"])
        .build()
        .unwrap()
}

pub(crate) fn line_values(order_id: i32, product: &str, token: &Value) -> Vec<Value> {
    vec![
        Value::Int32(order_id),
        Value::from(product),
        token.clone(),
        Value::Int16(1),
    ]
}
