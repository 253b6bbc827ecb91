#[macro_export]
macro_rules! runtime_kind_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (Bool, Boolean, name = "Bool", byte_width = Some(1)),
            (Int16, Integer, name = "Int16", byte_width = Some(2)),
            (Int32, Integer, name = "Int32", byte_width = Some(4)),
            (Int64, Integer, name = "Int64", byte_width = Some(8)),
            (Float32, Float, name = "Float32", byte_width = Some(4)),
            (Float64, Float, name = "Float64", byte_width = Some(8)),
            (Decimal, Decimal, name = "Decimal", byte_width = Some(16)),
            (DateTime, Temporal, name = "DateTime", byte_width = Some(8)),
            (DateTimeOffset, Temporal, name = "DateTimeOffset", byte_width = Some(10)),
            (Text, Textual, name = "Text", byte_width = None),
            (Bytes, Binary, name = "Bytes", byte_width = None),
        }
    };
}

#[macro_export]
macro_rules! runtime_kind_registry {
    ($macro:ident) => {
        $crate::runtime_kind_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::runtime_kind_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! metadata_from_registry {
    ( @args $kind:expr; @entries $( ($runtime:ident, $family:ident, name = $name:expr, byte_width = $width:expr) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::RuntimeKind::$runtime => $crate::RuntimeMetadata {
                    name: $name,
                    family: $crate::RuntimeFamily::$family,
                    byte_width: $width,
                },
            )*
        }
    };
}

macro_rules! all_kinds_from_registry {
    ( @entries $( ($runtime:ident, $family:ident, name = $name:expr, byte_width = $width:expr) ),* $(,)? ) => {
        [ $( $crate::RuntimeKind::$runtime ),* ]
    };
}
