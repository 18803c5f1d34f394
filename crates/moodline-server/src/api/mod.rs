mod analyze;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use moodline_engines::{Dispatcher, SentimentError};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub detail: String,
    pub request_id: String,
}

#[derive(Debug, Serialize)]
struct RootMessage {
    message: &'static str,
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            detail: detail.into(),
            request_id: request_id.into(),
        }
    }

    /// The single place where engine errors become HTTP errors.
    pub fn from_sentiment(request_id: String, error: &SentimentError) -> Self {
        match error {
            SentimentError::EmptyInput => {
                Self::new(request_id, "validation_error", error.to_string())
            }
            SentimentError::UnknownLibrary(_) => {
                Self::new(request_id, "invalid_library", error.to_string())
            }
            SentimentError::Http(_)
            | SentimentError::Neural(_)
            | SentimentError::ModelUnavailable(_) => {
                tracing::error!(request_id = %request_id, error = %error, "analysis failed");
                Self::new(request_id, "engine_unavailable", error.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.code.as_str() {
            "validation_error" | "invalid_library" => StatusCode::BAD_REQUEST,
            "engine_unavailable" => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/analyze", post(analyze::analyze))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn root() -> impl IntoResponse {
    Json(RootMessage {
        message: "Sentiment Analysis Service is running.",
    })
}
