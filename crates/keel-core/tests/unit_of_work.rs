//! End-to-end use of the public API: materialize rows, index them by key,
//! edit tracked entries, and map the model to store types.

use keel_config::KeelConfig;
use keel_core::{
    entry::{EntityState, StateEntry},
    key::{CompositeEntityKeyFactory, EntityKey, EntityKeyFactory, KeyFactory},
    mapping::RelationalTypeMapper,
    model::{EntityType, RuntimeType},
    reader::{RowValueReader, ValueReaderExt},
    value::Value,
};
use std::{collections::HashMap, sync::Arc};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

fn product_type() -> Arc<EntityType> {
    EntityType::builder("Product")
        .property("Sku", RuntimeType::TEXT)
        .property("Region", RuntimeType::INT16)
        .property("Name", RuntimeType::TEXT)
        .property("Price", RuntimeType::DECIMAL)
        .concurrency_token("Version", RuntimeType::BYTES)
        .key(["Sku", "Region"])
        .build()
        .unwrap()
}

fn product_row(sku: &str, region: i16, name: &str) -> RowValueReader {
    [
        Value::from(sku),
        Value::Int16(region),
        Value::from(name),
        Value::Decimal(rust_decimal::Decimal::new(500, 2)),
        Value::Bytes(vec![0; 8]),
    ]
    .into_iter()
    .collect()
}

#[test]
fn identity_map_resolves_rows_to_tracked_entries() {
    init_tracing();
    let product = product_type();
    let key_props = product.key();
    let factory = KeyFactory::for_properties(&key_props).unwrap();

    let mut identity_map: HashMap<EntityKey, StateEntry> = HashMap::new();
    for (sku, region, name) in [("A-1", 1, "Anchor"), ("A-1", 2, "Anchor EU"), ("B-7", 1, "Bolt")] {
        let row = product_row(sku, region, name);
        let key = factory.create_from_reader(&product, &key_props, &row).unwrap();
        let entry = StateEntry::from_reader(Arc::clone(&product), &row).unwrap();

        assert!(identity_map.insert(key, entry).is_none());
    }

    // the same row read again resolves to the tracked instance
    let again = product_row("A-1", 2, "stale name");
    let key = factory.create_from_reader(&product, &key_props, &again).unwrap();
    let tracked = identity_map.get_mut(&key).unwrap();
    assert_eq!(
        tracked.property_value_by_name("Name").unwrap(),
        &Value::from("Anchor EU")
    );

    // editing a non-key property keeps the key stable
    let name = product.property("Name").unwrap();
    tracked
        .set_property_value(name, Value::from("Anchor Europe"))
        .unwrap();
    assert_eq!(tracked.state(), EntityState::Modified);
    assert_eq!(tracked.primary_key().unwrap(), key);

    // key properties are frozen once tracked
    let sku = product.property("Sku").unwrap();
    assert!(tracked.set_property_value(sku, Value::from("Z-9")).is_err());
}

#[test]
fn entry_and_row_produce_interchangeable_keys() {
    let product = product_type();
    let properties = vec![
        product.property("Region").unwrap(),
        product.property("Sku").unwrap(),
    ];

    let row = product_row("C-3", 4, "Clamp");
    let entry = StateEntry::from_reader(Arc::clone(&product), &row).unwrap();

    let from_row = CompositeEntityKeyFactory
        .create_from_reader(&product, &properties, &row)
        .unwrap();
    let from_entry = CompositeEntityKeyFactory
        .create_from_entry(&product, &properties, &entry)
        .unwrap();

    assert_eq!(from_row, from_entry);
    assert_eq!(from_row.to_string(), "Product(4, \"C-3\")");
    assert_eq!(row.read_value::<i16>(1).unwrap(), 4);
}

#[test]
fn new_entries_acquire_their_key_before_tracking() {
    let product = product_type();
    let mut entry = StateEntry::new(Arc::clone(&product), EntityState::Added);

    let err = entry.primary_key().unwrap_err();
    assert!(err.is_invalid_argument());

    entry
        .set_property_value(product.property("Sku").unwrap(), Value::from("D-1"))
        .unwrap();
    entry
        .set_property_value(product.property("Region").unwrap(), Value::Int16(3))
        .unwrap();

    let key = entry.primary_key().unwrap();
    assert_eq!(key.values(), &[Value::from("D-1"), Value::Int16(3)]);

    entry.accept_changes();
    assert_eq!(entry.state(), EntityState::Unchanged);
}

#[test]
fn configured_mapper_describes_the_model() {
    init_tracing();
    let config = KeelConfig::from_toml_str(
        r"
        [type_mapper]
        key_string_capacity = 32
        decimal_precision = 12
        decimal_scale = 4
        ",
    )
    .unwrap();
    let mapper = RelationalTypeMapper::with_config(&config.type_mapper).unwrap();
    let product = product_type();

    let columns: Vec<(String, String)> = product
        .properties()
        .iter()
        .map(|p| {
            let mapping = mapper.mapping_for_property(p).unwrap();
            (p.name().to_string(), mapping.store_type().to_string())
        })
        .collect();

    assert_eq!(
        columns,
        [
            ("Sku".to_string(), "varchar(32)".to_string()),
            ("Region".to_string(), "smallint".to_string()),
            ("Name".to_string(), "varchar(4000)".to_string()),
            ("Price".to_string(), "decimal(12, 4)".to_string()),
            ("Version".to_string(), "rowversion".to_string()),
        ]
    );
}

#[test]
fn unmapped_properties_are_reported() {
    let document = EntityType::builder("Document")
        .property("Id", RuntimeType::INT64)
        .property("Body", RuntimeType::BYTES)
        .key(["Id"])
        .build()
        .unwrap();
    let mapper = RelationalTypeMapper::new();

    let err = mapper
        .mapping_for_property(document.property("Body").unwrap())
        .unwrap_err();

    assert!(err.is_unsupported_type());
    assert_eq!(
        err.to_string(),
        "no type mapping for property 'Body' of type 'Bytes'"
    );
}
