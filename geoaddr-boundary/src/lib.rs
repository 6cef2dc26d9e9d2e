use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// A stored address record as returned by the API.
///
/// The response field names are part of the public API and
/// independent of the storage column names.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Address {
    pub id      : i64,
    pub street  : String,
    pub city    : String,
    pub state   : String,
    pub country : String,
    pub l1      : f64,
    pub l2      : f64,
}

/// Request body for creating a new address. All fields are required.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewAddress {
    pub street_no: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub coordinates_l1: f64,
    pub coordinates_l2: f64,
}

/// Request body for a partial update. Absent fields are left untouched.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct UpdateAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates_l1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates_l2: Option<f64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ResponseMessage {
    pub message: String,
}

/// Error response body with the associated HTTP status code.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
