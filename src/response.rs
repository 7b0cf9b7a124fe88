//! Response types returned by the vpnapi.io lookup endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// Security flags for the queried address.
///
/// The flags are independent; the service may set any combination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Security {
    /// Address belongs to a VPN provider.
    #[serde(deserialize_with = "null_as_default")]
    pub vpn: bool,
    /// Address is a known proxy.
    #[serde(deserialize_with = "null_as_default")]
    pub proxy: bool,
    /// Address is a Tor exit node.
    #[serde(deserialize_with = "null_as_default")]
    pub tor: bool,
    /// Address is a relay (e.g. iCloud Private Relay).
    #[serde(deserialize_with = "null_as_default")]
    pub relay: bool,
}

/// Geolocation section of a lookup response.
///
/// Text fields are empty when the service has no value for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Location {
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,

    /// The service spells this field `contient` on the wire.
    #[serde(rename = "contient", deserialize_with = "null_as_default")]
    pub continent: String,

    #[serde(deserialize_with = "null_as_default")]
    pub region_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub continent_code: String,

    /// Decimal degrees, as text.
    #[serde(deserialize_with = "null_as_default")]
    pub latitude: String,
    /// Decimal degrees, as text.
    #[serde(deserialize_with = "null_as_default")]
    pub longitude: String,

    #[serde(deserialize_with = "null_as_default")]
    pub time_zone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub locale_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub metro_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_in_european_union: bool,
}

/// Network ownership section of a lookup response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Network {
    /// CIDR block containing the address.
    #[serde(deserialize_with = "null_as_default")]
    pub network: String,
    /// e.g. "AS7922".
    #[serde(deserialize_with = "null_as_default")]
    pub autonomous_system_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub autonomous_system_organization: String,
}

/// Top-level lookup response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Response {
    /// The queried address, echoed back by the service.
    #[serde(deserialize_with = "null_as_default")]
    pub ip: String,

    #[serde(deserialize_with = "null_as_default")]
    pub security: Security,

    #[serde(deserialize_with = "null_as_default")]
    pub location: Location,

    #[serde(deserialize_with = "null_as_default")]
    pub network: Network,

    /// Explanation for degraded results (e.g. an invalid or exhausted key).
    /// Empty when the lookup was clean.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl Response {
    /// Returns true if the service attached a message to this response.
    ///
    /// The service reports soft failures such as key problems here while
    /// still answering with HTTP 200.
    pub fn has_message(&self) -> bool {
        !self.message.is_empty()
    }
}

/// Deserialize a JSON `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
