use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::application::OrderValidator;
use crate::domain::{ChainId, Clock};
use crate::infrastructure::{InMemoryOrderStore, OrderConfigDefaults};

/// Application state shared across handlers
pub struct AppState<C: Clock> {
    pub clock: Arc<C>,
    pub store: Arc<InMemoryOrderStore>,
    pub validator: Arc<dyn OrderValidator>,
    pub chain_id: ChainId,
    pub order_config: OrderConfigDefaults,
}

impl<C: Clock> AppState<C> {
    pub fn new(
        clock: Arc<C>,
        store: Arc<InMemoryOrderStore>,
        validator: Arc<dyn OrderValidator>,
        chain_id: ChainId,
        order_config: OrderConfigDefaults,
    ) -> Self {
        AppState {
            clock,
            store,
            validator,
            chain_id,
            order_config,
        }
    }
}

/// Create the REST API router
pub fn create_router<C: Clock + 'static>(state: Arc<AppState<C>>) -> Router {
    Router::new()
        // Standard Relayer API v3
        .route("/v3/orderbook", get(handlers::orderbook::<C>))
        .route("/v3/order_config", post(handlers::order_config::<C>))
        .route("/v3/order", post(handlers::post_order::<C>))
        .route("/v3/order/{order_hash}", get(handlers::get_order::<C>))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
