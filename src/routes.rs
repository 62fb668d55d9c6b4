use anyhow::{anyhow, Context};
use axum::{
    body::Bytes,
    extract::DefaultBodyLimit,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::error::ApiError;
use crate::process::{process_batch, ProcessedResult};
use crate::ui;

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub results: Vec<ProcessedResult>,
}

pub fn app(config: &Config) -> Router {
    Router::new()
        .route("/", get(ui::index))
        .route("/api/process", post(process_images))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(config.max_body_bytes)),
        )
}

/// Pulls `images` out of the request body. It must be an array of strings.
/// A body that is not JSON at all, or is `null`, is an unexpected failure
/// rather than a bad `images` field.
fn parse_images(body: &[u8]) -> Result<Vec<String>, ApiError> {
    let value: Value = serde_json::from_slice(body)
        .context("request body is not JSON")
        .map_err(ApiError::Processing)?;
    if value.is_null() {
        return Err(ApiError::Processing(anyhow!("request body is null")));
    }

    match value.get("images") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_owned))
            .collect::<Option<Vec<_>>>()
            .ok_or(ApiError::InvalidImages),
        _ => Err(ApiError::InvalidImages),
    }
}

async fn process_images(body: Bytes) -> Result<Json<ProcessResponse>, ApiError> {
    let images = parse_images(&body)?;
    let results = process_batch(images).await.map_err(ApiError::Processing)?;
    Ok(Json(ProcessResponse { results }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_string_arrays() {
        let images = parse_images(br#"{"images": ["a", "b"]}"#).unwrap();
        assert_eq!(images, vec!["a".to_string(), "b".to_string()]);

        let images = parse_images(br#"{"images": [], "extra": 1}"#).unwrap();
        assert!(images.is_empty());
    }

    #[test]
    fn rejects_malformed_images() {
        let bodies: [&[u8]; 6] = [
            br#"{}"#,
            br#"{"images": null}"#,
            br#"{"images": "data:image/png;base64,AAAA"}"#,
            br#"{"images": {"0": "a"}}"#,
            br#"{"images": ["a", 3]}"#,
            br#"[]"#,
        ];
        for body in bodies {
            assert!(matches!(parse_images(body), Err(ApiError::InvalidImages)));
        }
    }

    #[test]
    fn non_json_and_null_bodies_are_processing_failures() {
        assert!(matches!(
            parse_images(b"images=a"),
            Err(ApiError::Processing(_))
        ));
        assert!(matches!(parse_images(b"null"), Err(ApiError::Processing(_))));
    }
}
