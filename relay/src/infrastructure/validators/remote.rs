use crate::application::ports::{OrderValidator, ValidatorError};
use crate::domain::{OrderRelevantState, SignedOrder};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Validator backed by an HTTP validation service.
///
/// POSTs the signed order as JSON and expects an `OrderRelevantState` body:
/// `{"orderInfo":{"orderStatus":3,"orderHash":"0x…","orderTakerAssetFilledAmount":"0"},
///   "fillableTakerAssetAmount":"…","isValidSignature":true}`
#[derive(Clone)]
pub struct RemoteOrderValidator {
    client: Client,
    url: String,
}

impl RemoteOrderValidator {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ValidatorError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ValidatorError::Unavailable(e.to_string()))?;

        Ok(RemoteOrderValidator {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl OrderValidator for RemoteOrderValidator {
    async fn order_relevant_state(
        &self,
        order: &SignedOrder,
    ) -> Result<OrderRelevantState, ValidatorError> {
        let resp = self
            .client
            .post(&self.url)
            .json(order)
            .send()
            .await
            .map_err(|e| ValidatorError::Unavailable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ValidatorError::Protocol(format!(
                "validator returned HTTP {status}"
            )));
        }

        resp.json::<OrderRelevantState>()
            .await
            .map_err(|e| ValidatorError::Protocol(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrderStatus;
    use crate::domain::test_fixtures::{WETH, ZRX, signed_order};
    use axum::{Json, Router, http::StatusCode, routing::post};
    use serde_json::{Value, json};
    use tokio::net::TcpListener;

    async fn spawn_service(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/validate")
    }

    #[tokio::test]
    async fn test_parses_service_verdict() {
        let router = Router::new().route(
            "/validate",
            post(|Json(order): Json<Value>| async move {
                // echo back something derived from the request to prove it was sent
                let remaining = order["takerAssetAmount"].clone();
                Json(json!({
                    "orderInfo": {
                        "orderStatus": 3,
                        "orderHash": format!("0x{}", "aa".repeat(32)),
                        "orderTakerAssetFilledAmount": "0"
                    },
                    "fillableTakerAssetAmount": remaining,
                    "isValidSignature": true
                }))
            }),
        );
        let url = spawn_service(router).await;
        let validator = RemoteOrderValidator::new(url.clone(), Duration::from_secs(5)).unwrap();
        assert_eq!(validator.url(), url);

        let state = validator
            .order_relevant_state(&signed_order(ZRX, WETH, u64::MAX))
            .await
            .unwrap();

        assert_eq!(state.order_info.order_status, OrderStatus::Fillable);
        assert_eq!(state.fillable_taker_asset_amount.to_string(), "10");
        assert!(state.is_fillable());
    }

    #[tokio::test]
    async fn test_http_error_is_protocol_error() {
        let router = Router::new().route(
            "/validate",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let url = spawn_service(router).await;
        let validator = RemoteOrderValidator::new(url, Duration::from_secs(5)).unwrap();

        let result = validator
            .order_relevant_state(&signed_order(ZRX, WETH, u64::MAX))
            .await;
        assert!(matches!(result, Err(ValidatorError::Protocol(_))));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_unavailable() {
        // bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let validator =
            RemoteOrderValidator::new(format!("http://{addr}/validate"), Duration::from_secs(2))
                .unwrap();
        let result = validator
            .order_relevant_state(&signed_order(ZRX, WETH, u64::MAX))
            .await;
        assert!(matches!(result, Err(ValidatorError::Unavailable(_))));
    }
}
