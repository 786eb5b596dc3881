use crate::application::{StoreError, SubmitOrderError, ValidatorError};
use crate::domain::{ChainId, OrderStatus};
use crate::presentation::rest::dto::{
    ErrorCode, ErrorResponse, ValidationError, ValidationErrorCode,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// API error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: ErrorCode,
    pub validation_errors: Vec<ValidationError>,
}

impl ApiError {
    pub fn validation_failed(
        field: &str,
        code: ValidationErrorCode,
        reason: impl Into<String>,
    ) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            code: ErrorCode::ValidationFailed,
            validation_errors: vec![ValidationError::new(field, code, reason)],
        }
    }

    pub fn malformed_json(reason: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            code: ErrorCode::MalformedJson,
            validation_errors: vec![ValidationError::new(
                "signedOrder",
                ValidationErrorCode::IncorrectFormat,
                reason,
            )],
        }
    }

    pub fn order_not_found(order_hash: &str) -> Self {
        ApiError {
            status: StatusCode::NOT_FOUND,
            ..Self::validation_failed(
                "orderHash",
                ValidationErrorCode::InvalidOrder,
                format!("Order {order_hash} not found"),
            )
        }
    }

    pub fn missing_parameter(param: &str) -> Self {
        Self::validation_failed(
            param,
            ValidationErrorCode::RequiredField,
            format!("Mandatory parameter '{param}' was not sent"),
        )
    }

    pub fn invalid_parameter(param: &str, reason: impl Into<String>) -> Self {
        Self::validation_failed(param, ValidationErrorCode::IncorrectFormat, reason)
    }

    pub fn unsupported_chain(chain_id: ChainId, expected: ChainId) -> Self {
        Self::validation_failed(
            "chainId",
            ValidationErrorCode::UnsupportedOption,
            format!("Chain {chain_id} is not supported, this relay serves chain {expected}"),
        )
    }

    pub fn reason(&self) -> &'static str {
        self.code.reason()
    }
}

impl From<SubmitOrderError> for ApiError {
    fn from(err: SubmitOrderError) -> Self {
        match err {
            SubmitOrderError::Validator(ValidatorError::Unavailable(reason)) => {
                ApiError::validation_failed(
                    "signedOrder",
                    ValidationErrorCode::InvalidOrder,
                    format!("Order could not be validated: {reason}"),
                )
            }
            SubmitOrderError::Validator(ValidatorError::Protocol(reason)) => {
                ApiError::validation_failed(
                    "signedOrder",
                    ValidationErrorCode::InvalidOrder,
                    format!("Order validation failed: {reason}"),
                )
            }
            SubmitOrderError::NotFillable {
                valid_signature: false,
                ..
            } => ApiError::validation_failed(
                "signature",
                ValidationErrorCode::InvalidSignatureOrHash,
                "Invalid signature",
            ),
            SubmitOrderError::NotFillable {
                status: OrderStatus::Expired,
                ..
            } => ApiError::validation_failed(
                "expirationTimeSeconds",
                ValidationErrorCode::ValueOutOfRange,
                "Order has expired",
            ),
            SubmitOrderError::NotFillable {
                status, remaining, ..
            } => ApiError::validation_failed(
                "signedOrder",
                ValidationErrorCode::InvalidOrder,
                format!("Order is not fillable (status {status:?}, remaining {remaining})"),
            ),
            SubmitOrderError::Store(StoreError::DuplicateOrder(hash)) => {
                ApiError::validation_failed(
                    "signedOrder",
                    ValidationErrorCode::InvalidOrder,
                    format!("Order {hash} is already in the book"),
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            code: self.code as u16,
            reason: self.reason().to_string(),
            validation_errors: self.validation_errors,
        });
        (self.status, body).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API Error {}: {}", self.code as u16, self.reason())?;
        for e in &self.validation_errors {
            write!(f, "; {} ({}): {}", e.field, e.code, e.reason)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}
