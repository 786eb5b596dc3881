use crate::domain::{Address, Amount};
use relay_core::serde_amount;
use serde::{Deserialize, Serialize};

/// Query string of `GET /v3/orderbook`.
///
/// Everything is optional text so that bad values are reported with SRA
/// error bodies instead of the extractor's plain-text rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderbookParams {
    #[serde(default)]
    pub base_asset_data: Option<String>,
    #[serde(default)]
    pub quote_asset_data: Option<String>,
    #[serde(default)]
    pub chain_id: Option<String>,
}

/// Query string of the endpoints that only take `chainId`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainIdParams {
    #[serde(default)]
    pub chain_id: Option<String>,
}

/// Response of `POST /v3/order_config`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfigResponse {
    pub sender_address: Address,
    pub fee_recipient_address: Address,
    #[serde(with = "serde_amount")]
    pub maker_fee: Amount,
    #[serde(with = "serde_amount")]
    pub taker_fee: Amount,
}

/// Empty JSON object returned when an order is accepted
#[derive(Debug, Clone, Serialize)]
pub struct OrderAcceptedResponse {}

/// General error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ValidationFailed = 100,
    MalformedJson = 101,
}

impl ErrorCode {
    pub fn reason(self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation Failed",
            ErrorCode::MalformedJson => "Malformed JSON",
        }
    }
}

/// Per-field validation error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorCode {
    RequiredField = 1000,
    IncorrectFormat = 1001,
    ValueOutOfRange = 1004,
    InvalidSignatureOrHash = 1005,
    UnsupportedOption = 1006,
    InvalidOrder = 1007,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub code: u16,
    pub reason: String,
}

impl ValidationError {
    pub fn new(
        field: impl Into<String>,
        code: ValidationErrorCode,
        reason: impl Into<String>,
    ) -> Self {
        ValidationError {
            field: field.into(),
            code: code as u16,
            reason: reason.into(),
        }
    }
}

/// Error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub code: u16,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validation_errors: Vec<ValidationError>,
}
