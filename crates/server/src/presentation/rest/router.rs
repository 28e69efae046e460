use axum::{
    Router,
    routing::{get, post},
};
use meridian_ports::Clock;
use meridian_registry::{ClockRing, Cursor};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use super::handlers;

/// Application state shared across handlers
///
/// Lock order is ring first, then cursor.
pub struct AppState {
    pub ring: RwLock<ClockRing>,
    pub cursor: Mutex<Cursor>,
}

impl AppState {
    pub fn new(ring: ClockRing) -> Self {
        AppState {
            ring: RwLock::new(ring),
            cursor: Mutex::new(Cursor::default()),
        }
    }

    /// Response timestamp, read from the ring's time source
    pub fn timestamp(&self) -> String {
        let clock: Arc<dyn Clock> = Arc::clone(self.ring.read().clock());
        clock.now().to_rfc3339()
    }
}

/// Create the REST API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Ring-wide views
        .route("/api/clocks", get(handlers::all_clocks))
        .route("/api/structure", get(handlers::structure))
        // Carousel navigation
        .route("/api/clock/current", get(handlers::current_clock))
        .route("/api/clock/next", get(handlers::next_clock))
        .route("/api/clock/previous", get(handlers::previous_clock))
        // Manual offsets
        .route("/api/clock/update-time", post(handlers::update_time))
        .route("/api/clock/reset-time", post(handlers::reset_time))
        // Analytics
        .route("/api/compare", get(handlers::compare))
        .route("/api/meeting-times", get(handlers::meeting_times))
        .route("/api/convert", get(handlers::convert))
        // Middleware
        .layer(CorsLayer::permissive())
        .with_state(state)
}
