use crate::model::RuntimeType;

///
/// Property
/// Runtime metadata for one entity attribute.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Property {
    pub(super) name: String,
    pub(super) runtime_type: RuntimeType,
    /// Position of this property's value in entries and rows.
    pub(super) index: usize,
    pub(super) is_key: bool,
    pub(super) is_concurrency_token: bool,
}

impl Property {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn runtime_type(&self) -> &RuntimeType {
        &self.runtime_type
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn is_key(&self) -> bool {
        self.is_key
    }

    #[must_use]
    pub const fn is_concurrency_token(&self) -> bool {
        self.is_concurrency_token
    }
}
