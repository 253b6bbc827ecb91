use crate::value::ValueError;
use derive_more::Display;
use std::hash::{Hash, Hasher};

macro_rules! finite_float {
    ($name:ident, $prim:ty) => {
        ///
        #[doc = concat!("Finite `", stringify!($prim), "` only; -0.0 canonically stored as 0.0")]
        ///

        #[repr(transparent)]
        #[derive(Clone, Copy, Debug, Default, Display)]
        pub struct $name($prim);

        impl $name {
            /// Fallible constructor that rejects non-finite values and normalizes -0.0.
            #[must_use]
            pub fn try_new(v: $prim) -> Option<Self> {
                if !v.is_finite() {
                    return None;
                }

                // canonicalize -0.0 to 0.0 so Eq/Hash are consistent
                Some(Self(if v == 0.0 { 0.0 } else { v }))
            }

            #[must_use]
            pub const fn get(self) -> $prim {
                self.0
            }
        }

        impl Eq for $name {}

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0.to_bits() == other.0.to_bits()
            }
        }

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.0.to_bits().hash(state);
            }
        }

        impl TryFrom<$prim> for $name {
            type Error = ValueError;

            fn try_from(v: $prim) -> Result<Self, Self::Error> {
                Self::try_new(v).ok_or(ValueError::NonFinite)
            }
        }

        impl From<$name> for $prim {
            fn from(x: $name) -> Self {
                x.0
            }
        }
    };
}

finite_float!(Float32, f32);
finite_float!(Float64, f64);
