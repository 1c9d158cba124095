mod auth;
mod dashboard;

use crate::view;
use anyhow::Result;
use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use shared::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use self::auth::auth_routes;
pub use self::dashboard::dashboard_routes;

/// Anything outside the static route table is a 404 page.
pub async fn handler_404() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, view::error::render_not_found())
}

pub struct AppRouter;

impl AppRouter {
    /// The full route table. Exposed separately from `serve` so tests can
    /// drive the router without a listener.
    pub fn build(app_state: Arc<AppState>) -> Router {
        Router::new()
            .merge(auth_routes(app_state.clone()))
            .merge(dashboard_routes(app_state))
            .fallback(handler_404)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);
        let app = Self::build(shared_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("Server running on http://{}", listener.local_addr()?);

        axum::serve(listener, app).await?;
        Ok(())
    }
}
