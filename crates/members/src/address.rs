use serde::{Deserialize, Serialize};

use shoplite_core::ValueObject;

/// Value object: a postal address.
///
/// Immutable once constructed, compared structurally, and stored inline in the
/// owning record (copied by value, never referenced). It has no identity of
/// its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    city: String,
    street: String,
    zipcode: String,
}

impl Address {
    pub fn new(
        city: impl Into<String>,
        street: impl Into<String>,
        zipcode: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            street: street.into(),
            zipcode: zipcode.into(),
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn zipcode(&self) -> &str {
        &self.zipcode
    }
}

impl ValueObject for Address {}
