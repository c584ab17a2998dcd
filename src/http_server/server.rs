//! # HTTP Server
//!
//! Combines the product and health routers into one Axum server.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::service::ProductService;

use super::config::HttpServerConfig;
use super::health_routes::health_routes;
use super::product_routes::{product_routes, ProductState};

/// HTTP server for the inventory API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration
    pub fn new(service: ProductService) -> Self {
        Self::with_config(HttpServerConfig::default(), service)
    }

    /// Create a server with custom configuration
    pub fn with_config(config: HttpServerConfig, service: ProductService) -> Self {
        let router = Self::build_router(&config, service);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, service: ProductService) -> Router {
        let product_state = Arc::new(ProductState::new(service));

        let cors = match config.cors_origin_header() {
            Some(origin) => CorsLayer::new()
                .allow_origin(AllowOrigin::list([origin]))
                .allow_methods(Any)
                .allow_headers(Any),
            None => {
                warn!(
                    origin = %config.cors_origin,
                    "invalid CORS origin, cross-origin requests disabled"
                );
                CorsLayer::new()
            }
        };

        Router::new()
            .merge(health_routes())
            .nest("/products", product_routes(product_state))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C or SIGTERM
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(addr.as_str()).await?;

        info!(address = %listener.local_addr()?, "inventory HTTP server listening");
        info!(origin = %self.config.cors_origin, "CORS origin allowed");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("inventory HTTP server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    #[cfg(not(unix))]
    ctrl_c.await;

    info!("shutdown signal received");
}
