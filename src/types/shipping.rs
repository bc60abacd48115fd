//! Shipping destination payload

use serde::Serialize;

/// Destination address for shipping-rate computation.
///
/// Rendered as the URL-encoded `shipping_address[...]` query parameters the
/// two shipping-rate endpoints expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingAddress {
    /// Postal or ZIP code.
    pub zip: String,

    /// Country name.
    pub country: String,

    /// Province, state, or region name.
    pub province: String,
}

impl ShippingAddress {
    /// Create a shipping address.
    pub fn new(
        zip: impl Into<String>,
        country: impl Into<String>,
        province: impl Into<String>,
    ) -> Self {
        Self {
            zip: zip.into(),
            country: country.into(),
            province: province.into(),
        }
    }

    /// The query pairs this address contributes to a shipping-rate request.
    pub fn query_pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("shipping_address[zip]", self.zip.as_str()),
            ("shipping_address[country]", self.country.as_str()),
            ("shipping_address[province]", self.province.as_str()),
        ]
    }
}
