use crate::ApiError;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use rust_embed::RustEmbed;

/// Cache-busting query value for stylesheet links.
pub const CSS_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

// stylesheet links carry CSS_VERSION, so an hour is enough
const ASSET_CACHE_CONTROL: &str = "public, max-age=3600";

/// Serves static files from the embedded assets
pub async fn default_handler(uri: axum::http::Uri) -> axum::response::Response {
    let path_str = uri.path().trim_start_matches('/');

    match Assets::get(path_str) {
        Some(content) => {
            let mime = mime_guess::from_path(path_str).first_or_octet_stream();
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, mime.to_string()),
                    (header::CACHE_CONTROL, ASSET_CACHE_CONTROL.to_string()),
                ],
                content.data,
            )
                .into_response()
        }
        None => ApiError::NotFound(format!("{} not found", uri.path())).into_response(),
    }
}
