mod common;
mod error;
mod roster;
mod routes;

pub use error::{ApiError, ApiResult};
pub use roster::{RosterReport, FAILURE_MESSAGE};
pub use routes::ServerRoutes;

use axum::response::IntoResponse;
use database::RosterSourceConfig;
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct RosterReportServer {
    data: RosterAppData,
}

impl RosterReportServer {
    pub fn new(data: RosterAppData) -> Self {
        RosterReportServer { data }
    }

    pub async fn run(&self, port: u16) -> std::io::Result<()> {
        let app = ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        (
                            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error - handler panicked".to_string(),
                        ).into_response()
                    }))
            )
            .with_state(self.data.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let listener = TcpListener::bind(addr).await.inspect_err(|e| {
            error!("Failed to bind to address {}: {}", addr, e);
        })?;

        info!("listen at: http://localhost:{}", port);

        axum::serve(listener, app).await
    }
}

pub struct RosterAppData {
    pub source: Arc<RosterSourceConfig>,
}

impl RosterAppData {
    pub fn new(source: RosterSourceConfig) -> Self {
        RosterAppData {
            source: Arc::new(source),
        }
    }
}

impl Clone for RosterAppData {
    fn clone(&self) -> Self {
        RosterAppData {
            source: Arc::clone(&self.source),
        }
    }
}
