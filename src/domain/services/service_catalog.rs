//! # Service Catalog
//!
//! Correios service codes with their public and full names.
//!
//! Several codes share one public name (counter and contract variants of
//! SEDEX or PAC), which is what the option ranker deduplicates on. The
//! carrier may echo codes without their leading zero (`4510` for `04510`),
//! so lookups ignore leading zeros.
//!
//! # Examples
//!
//! ```
//! use correios_rates::domain::services::service_catalog;
//!
//! assert_eq!(service_catalog::public_name("04510"), "PAC");
//! assert_eq!(service_catalog::public_name("4510"), "PAC");
//! assert_eq!(service_catalog::public_name("99999"), "99999");
//! ```

use std::borrow::Cow;

/// A known carrier service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarrierService {
    /// Carrier service code.
    pub code: &'static str,
    /// Customer-facing name.
    pub public_name: &'static str,
    /// Full name including the contract variant.
    pub full_name: &'static str,
}

const fn service(code: &'static str, public_name: &'static str, full_name: &'static str) -> CarrierService {
    CarrierService {
        code,
        public_name,
        full_name,
    }
}

/// All services known to the catalog.
pub const SERVICES: &[CarrierService] = &[
    service("40010", "SEDEX", "SEDEX sem contrato"),
    service("40045", "SEDEX a Cobrar", "SEDEX a Cobrar sem contrato"),
    service("40126", "SEDEX a Cobrar", "SEDEX a Cobrar com contrato"),
    service("40215", "SEDEX 10", "SEDEX 10 sem contrato"),
    service("40290", "SEDEX Hoje", "SEDEX Hoje sem contrato"),
    service("40096", "SEDEX", "SEDEX com contrato"),
    service("40436", "SEDEX", "SEDEX com contrato"),
    service("40444", "SEDEX", "SEDEX com contrato"),
    service("40568", "SEDEX", "SEDEX com contrato"),
    service("81019", "e-SEDEX", "e-SEDEX com contrato"),
    service("81027", "e-SEDEX", "e-SEDEX Prioritário com contrato"),
    service("41106", "PAC", "PAC sem contrato"),
    service("41068", "PAC", "PAC com contrato"),
    service("04014", "SEDEX", "SEDEX à vista"),
    service("04065", "SEDEX a Cobrar", "SEDEX a Cobrar à vista"),
    service("04162", "SEDEX", "SEDEX contrato agência"),
    service("04510", "PAC", "PAC à vista"),
    service("04669", "PAC", "PAC contrato agência"),
    service("04707", "PAC a Cobrar", "PAC a Cobrar à vista"),
    service("04782", "SEDEX 12", "SEDEX 12 à vista"),
    service("04790", "SEDEX 10", "SEDEX 10 à vista"),
    service("04804", "SEDEX Hoje", "SEDEX Hoje à vista"),
];

/// Looks up a service by code, ignoring leading zeros and whitespace.
#[must_use]
pub fn find(code: &str) -> Option<&'static CarrierService> {
    let wanted = canonical(code);
    SERVICES.iter().find(|s| canonical(s.code) == wanted)
}

/// Public display name; unknown codes are shown as the code itself.
#[must_use]
pub fn public_name(code: &str) -> Cow<'static, str> {
    match find(code) {
        Some(service) => Cow::Borrowed(service.public_name),
        None => Cow::Owned(code.trim().to_string()),
    }
}

/// Full service name for diagnostics.
#[must_use]
pub fn full_name(code: &str) -> Cow<'static, str> {
    match find(code) {
        Some(service) => Cow::Borrowed(service.full_name),
        None => Cow::Owned(format!("unknown service {}", code.trim())),
    }
}

fn canonical(code: &str) -> &str {
    let trimmed = code.trim().trim_start_matches('0');
    if trimmed.is_empty() { "0" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<&str> = SERVICES.iter().map(|s| canonical(s.code)).collect();
        assert_eq!(codes.len(), SERVICES.len());
    }

    #[test]
    fn contract_variants_share_public_name() {
        assert_eq!(public_name("04014"), public_name("04162"));
        assert_eq!(public_name("40010"), "SEDEX");
        assert_eq!(public_name("41068"), "PAC");
    }

    #[test]
    fn leading_zeros_are_ignored() {
        assert_eq!(find("4014").map(|s| s.code), Some("04014"));
        assert_eq!(find(" 04510 ").map(|s| s.public_name), Some("PAC"));
    }

    #[test]
    fn full_names_distinguish_variants() {
        assert_eq!(full_name("04014"), "SEDEX à vista");
        assert_eq!(full_name("04162"), "SEDEX contrato agência");
        assert_eq!(full_name("123"), "unknown service 123");
    }
}
