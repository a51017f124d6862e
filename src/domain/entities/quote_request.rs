//! # Quote Request
//!
//! The batch request handed to the carrier's rate service.

use crate::domain::entities::parcel::ParcelDescriptor;
use crate::domain::value_objects::PostalCode;
use serde::{Deserialize, Serialize};

/// Shipment-level parameters plus the parcels to price.
///
/// The packer only ever produces one representative parcel, but the carrier
/// contract accepts a sequence, so the field stays a `Vec`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Contract company code, empty for counter prices.
    pub company_code: String,
    /// Contract password, empty for counter prices.
    pub password: String,
    /// Origin CEP.
    pub origin: PostalCode,
    /// Destination CEP as entered by the customer.
    pub destination: String,
    /// Requested service codes.
    pub services: Vec<String>,
    /// Request receipt notice (aviso de recebimento).
    pub receipt_notice: bool,
    /// Request own-hands delivery (mão própria).
    pub own_hands: bool,
    /// Parcels to price.
    pub parcels: Vec<ParcelDescriptor>,
}

impl QuoteRequest {
    /// Creates a request with no services, features or parcels.
    #[must_use]
    pub fn new(origin: PostalCode, destination: impl Into<String>) -> Self {
        Self {
            company_code: String::new(),
            password: String::new(),
            origin,
            destination: destination.into(),
            services: Vec::new(),
            receipt_notice: false,
            own_hands: false,
            parcels: Vec::new(),
        }
    }

    /// Sets the contract credentials.
    #[must_use]
    pub fn with_credentials(mut self, company_code: impl Into<String>, password: impl Into<String>) -> Self {
        self.company_code = company_code.into();
        self.password = password.into();
        self
    }

    /// Sets the requested services.
    #[must_use]
    pub fn with_services(mut self, services: Vec<String>) -> Self {
        self.services = services;
        self
    }

    /// Sets the optional delivery features.
    #[must_use]
    pub fn with_features(mut self, receipt_notice: bool, own_hands: bool) -> Self {
        self.receipt_notice = receipt_notice;
        self.own_hands = own_hands;
        self
    }

    /// Appends a parcel.
    #[must_use]
    pub fn with_parcel(mut self, parcel: ParcelDescriptor) -> Self {
        self.parcels.push(parcel);
        self
    }

    /// Services joined the way the carrier expects them (`"04014,04510"`).
    #[must_use]
    pub fn services_param(&self) -> String {
        self.services.join(",")
    }
}
