//! # Origin
//!
//! A fixed shipping origin for local use.

use crate::application::dto::Address;
use crate::application::ports::OriginAddressSource;

/// Always answers with the same origin address.
#[derive(Debug, Clone, Default)]
pub struct StaticOriginAddress {
    address: Option<Address>,
}

impl StaticOriginAddress {
    /// Origin with the given address.
    #[must_use]
    pub fn new(address: Address) -> Self {
        Self {
            address: Some(address),
        }
    }

    /// Origin with only a postal code.
    #[must_use]
    pub fn postal_code(code: impl Into<String>) -> Self {
        Self::new(Address::with_postal_code(code))
    }

    /// Origin that is not configured.
    #[must_use]
    pub fn unset() -> Self {
        Self::default()
    }
}

impl OriginAddressSource for StaticOriginAddress {
    fn origin_address(&self) -> Option<Address> {
        self.address.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_configured_address() {
        let origin = StaticOriginAddress::postal_code("01310100");
        let address = origin.origin_address();
        assert_eq!(address.as_ref().and_then(Address::postal_code), Some("01310100"));
    }

    #[test]
    fn unset_has_no_address() {
        assert!(StaticOriginAddress::unset().origin_address().is_none());
    }
}
