//! # Quote Rescaler
//!
//! Scales the carrier's price for the representative parcel up to the whole
//! shipment.
//!
//! Every monetary field of every successful quote is multiplied by the
//! parcel count and written back in the carrier's pt-BR form. Erroring
//! quotes carry no meaningful amounts and pass through untouched.
//!
//! # Examples
//!
//! ```
//! use correios_rates::domain::entities::ServiceQuote;
//! use correios_rates::domain::services::rescale;
//!
//! let quotes = vec![ServiceQuote::success("04510", "30,00", 7)];
//! let scaled = rescale(quotes, 3).unwrap();
//! assert_eq!(scaled[0].price, "90,00");
//! ```

use crate::domain::entities::ServiceQuote;
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::CarrierAmount;

/// Multiplies the monetary fields of successful quotes by `count`.
///
/// A count of 0 or 1 leaves the quotes exactly as received.
///
/// # Errors
///
/// Returns `DomainError::InvalidAmount` if a successful quote carries a
/// monetary field that is not a pt-BR decimal, or `DomainError::Arithmetic`
/// on overflow.
pub fn rescale(mut quotes: Vec<ServiceQuote>, count: u32) -> DomainResult<Vec<ServiceQuote>> {
    if count <= 1 {
        return Ok(quotes);
    }

    for quote in quotes.iter_mut().filter(|q| q.is_success()) {
        quote.price = scale_field(&quote.price, count)?;
        quote.receipt_notice_price = scale_field(&quote.receipt_notice_price, count)?;
        quote.own_hands_price = scale_field(&quote.own_hands_price, count)?;
        quote.declared_value_price = scale_field(&quote.declared_value_price, count)?;
    }

    Ok(quotes)
}

fn scale_field(raw: &str, count: u32) -> DomainResult<String> {
    Ok(CarrierAmount::parse_pt_br(raw)?.times(count)?.to_string())
}
