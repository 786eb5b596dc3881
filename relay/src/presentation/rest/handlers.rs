use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
};
use serde_json::error::Category;
use std::sync::Arc;

use crate::application::{GetOrderbookQuery, GetOrderbookUseCase, OrderStore, SubmitOrderUseCase};
use crate::domain::{AssetData, ChainId, Clock, OrderHash, Orderbook, SignedOrder, StoredOrder};
use crate::presentation::rest::{ApiError, dto::*};

use super::AppState;

/// GET /v3/orderbook
pub async fn orderbook<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    Query(params): Query<OrderbookParams>,
) -> Result<Json<Orderbook>, ApiError> {
    check_chain_id(params.chain_id.as_deref(), state.chain_id)?;

    // Missing or undecodable asset data matches no orders
    let base = params.base_asset_data.as_deref().and_then(parse_asset_data);
    let quote = params.quote_asset_data.as_deref().and_then(parse_asset_data);
    let (Some(base_asset_data), Some(quote_asset_data)) = (base, quote) else {
        return Ok(Json(Orderbook::empty()));
    };

    let use_case = GetOrderbookUseCase::new(Arc::clone(&state.clock), Arc::clone(&state.store));
    let book = use_case.execute(&GetOrderbookQuery {
        base_asset_data,
        quote_asset_data,
    });

    Ok(Json(book))
}

/// POST /v3/order_config
pub async fn order_config<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    Query(params): Query<ChainIdParams>,
) -> Result<Json<OrderConfigResponse>, ApiError> {
    check_chain_id(params.chain_id.as_deref(), state.chain_id)?;

    let defaults = &state.order_config;
    Ok(Json(OrderConfigResponse {
        sender_address: defaults.sender_address,
        fee_recipient_address: defaults.fee_recipient_address,
        maker_fee: defaults.maker_fee,
        taker_fee: defaults.taker_fee,
    }))
}

/// POST /v3/order
pub async fn post_order<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    Query(params): Query<ChainIdParams>,
    body: Bytes,
) -> Result<Json<OrderAcceptedResponse>, ApiError> {
    check_chain_id(params.chain_id.as_deref(), state.chain_id)?;

    let order: SignedOrder = serde_json::from_slice(&body).map_err(order_body_error)?;

    if order.chain_id != state.chain_id {
        tracing::warn!(
            order_chain_id = order.chain_id,
            "Rejecting order signed for another chain"
        );
        return Err(ApiError::unsupported_chain(order.chain_id, state.chain_id));
    }

    let use_case = SubmitOrderUseCase::new(Arc::clone(&state.store), Arc::clone(&state.validator));
    use_case.execute(order).await?;

    Ok(Json(OrderAcceptedResponse {}))
}

/// GET /v3/order/{order_hash}
pub async fn get_order<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    Path(order_hash): Path<String>,
    Query(params): Query<ChainIdParams>,
) -> Result<Json<StoredOrder>, ApiError> {
    check_chain_id(params.chain_id.as_deref(), state.chain_id)?;

    let hash = order_hash
        .parse::<OrderHash>()
        .map_err(|e| ApiError::invalid_parameter("orderHash", e.to_string()))?;

    state
        .store
        .get(&hash)
        .map(Json)
        .ok_or_else(|| ApiError::order_not_found(&order_hash))
}

/// Empty asset data (`""` or `"0x"`) is treated like a missing parameter
fn parse_asset_data(raw: &str) -> Option<AssetData> {
    raw.parse().ok().filter(|asset: &AssetData| !asset.is_empty())
}

fn order_body_error(e: serde_json::Error) -> ApiError {
    match e.classify() {
        Category::Syntax | Category::Eof | Category::Io => ApiError::malformed_json(e.to_string()),
        Category::Data => match missing_field(&e) {
            Some(field) => ApiError::missing_parameter(&field),
            None => ApiError::invalid_parameter("signedOrder", e.to_string()),
        },
    }
}

/// Field name from serde's "missing field `name`" data error
fn missing_field(e: &serde_json::Error) -> Option<String> {
    let message = e.to_string();
    let rest = message.strip_prefix("missing field `")?;
    let end = rest.find('`')?;
    Some(rest[..end].to_string())
}

/// Every endpoint is scoped to the configured chain
fn check_chain_id(raw: Option<&str>, expected: ChainId) -> Result<(), ApiError> {
    let raw = raw.ok_or_else(|| ApiError::missing_parameter("chainId"))?;
    let chain_id: ChainId = raw.trim().parse().map_err(|_| {
        ApiError::invalid_parameter("chainId", format!("'{raw}' is not an integer"))
    })?;

    if chain_id != expected {
        tracing::warn!(chain_id, expected, "Request for unsupported chain");
        return Err(ApiError::unsupported_chain(chain_id, expected));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_chain_id() {
        assert!(check_chain_id(Some("1337"), 1337).is_ok());

        let missing = check_chain_id(None, 1337).unwrap_err();
        assert_eq!(
            missing.validation_errors[0].code,
            ValidationErrorCode::RequiredField as u16
        );

        let garbage = check_chain_id(Some("abc"), 1337).unwrap_err();
        assert_eq!(
            garbage.validation_errors[0].code,
            ValidationErrorCode::IncorrectFormat as u16
        );

        let other = check_chain_id(Some("42"), 1337).unwrap_err();
        assert_eq!(
            other.validation_errors[0].code,
            ValidationErrorCode::UnsupportedOption as u16
        );
    }

    #[test]
    fn test_parse_asset_data_rejects_non_hex() {
        assert!(parse_asset_data("0xzz").is_none());
        assert!(parse_asset_data("0xf47261b0").is_some());
    }

    #[test]
    fn test_parse_asset_data_rejects_empty() {
        assert!(parse_asset_data("").is_none());
        assert!(parse_asset_data("0x").is_none());
    }

    #[test]
    fn test_missing_order_field_is_required_field_error() {
        let err = serde_json::from_str::<SignedOrder>(r#"{"chainId": 1337}"#).unwrap_err();
        let api_error = order_body_error(err);

        let validation = &api_error.validation_errors[0];
        assert_eq!(validation.code, ValidationErrorCode::RequiredField as u16);
        assert!(!validation.field.is_empty());
        assert_ne!(validation.field, "signedOrder");
    }

    #[test]
    fn test_bad_order_field_is_incorrect_format_error() {
        let err = serde_json::from_str::<SignedOrder>(r#"{"chainId": "x"}"#).unwrap_err();
        let api_error = order_body_error(err);
        assert_eq!(
            api_error.validation_errors[0].code,
            ValidationErrorCode::IncorrectFormat as u16
        );
    }
}
