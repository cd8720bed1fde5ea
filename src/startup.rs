//! Application startup and lifecycle management.

use crate::config::Settings;
use crate::handlers::{app::health_check, ask::ask};
use crate::middleware::request_id::{request_id_middleware, REQUEST_ID_HEADER};
use crate::services::gemini::GeminiClient;
use crate::AppState;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/ai", post(ask))
        .route("/health", get(health_check))
        .fallback_service(ServeDir::new("static"))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(settings: Settings) -> anyhow::Result<Self> {
        let gemini = settings
            .google
            .api_key
            .clone()
            .map(|key| Arc::new(GeminiClient::new(key, settings.google.model.clone())));

        match &gemini {
            Some(_) => {
                tracing::info!(model = %settings.google.model, "Initialized Gemini client")
            }
            None => tracing::warn!(
                "GOOGLE_API_KEY is not set; /api/ai will answer with the unconfigured reply"
            ),
        }

        let router = build_router(AppState::new(gemini));

        // Port 0 binds an ephemeral port for testing.
        let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            anyhow::anyhow!("Failed to bind to address {}: {}", addr, e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        tracing::info!("Starting pharmacist-service on port {}", self.port);
        axum::serve(
            self.listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
    }
}
