//! JSON request body guarded by a strict Content-Type check.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
};
use serde_json::Value;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Untyped JSON body. Rejects with 415 when the media type is not `application/json` and with 400
/// when the body does not parse.
#[derive(Clone, Debug)]
pub struct JsonBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        check_content_type(req.headers(), JSON_CONTENT_TYPE)?;
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge(e.body_text())
            } else {
                AppError::BadRequest(e.body_text())
            }
        })?;
        let value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::BadRequest(format!("malformed JSON: {}", e)))?;
        Ok(JsonBody(value))
    }
}

/// Media type must equal `expected`, ignoring case and any parameters such as `charset`.
pub fn check_content_type(headers: &HeaderMap, expected: &str) -> Result<(), AppError> {
    let Some(raw) = headers.get(CONTENT_TYPE) else {
        tracing::error!("no Content-Type specified");
        return Err(AppError::UnsupportedMediaType(format!(
            "Content-Type must be {}",
            expected
        )));
    };
    let media_type = raw
        .to_str()
        .ok()
        .and_then(|v| v.split(';').next())
        .map(str::trim);
    if media_type.is_some_and(|m| m.eq_ignore_ascii_case(expected)) {
        return Ok(());
    }
    tracing::error!(content_type = ?raw, "invalid Content-Type");
    Err(AppError::UnsupportedMediaType(format!(
        "Content-Type must be {}",
        expected
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(content_type: Option<&'static str>) -> HeaderMap {
        let mut h = HeaderMap::new();
        if let Some(ct) = content_type {
            h.insert(CONTENT_TYPE, HeaderValue::from_static(ct));
        }
        h
    }

    #[test]
    fn accepts_json_with_parameters() {
        assert!(check_content_type(&headers(Some("application/json")), JSON_CONTENT_TYPE).is_ok());
        assert!(check_content_type(
            &headers(Some("Application/JSON; charset=utf-8")),
            JSON_CONTENT_TYPE
        )
        .is_ok());
    }

    #[test]
    fn rejects_missing_or_other_types() {
        assert!(matches!(
            check_content_type(&headers(None), JSON_CONTENT_TYPE),
            Err(AppError::UnsupportedMediaType(_))
        ));
        assert!(matches!(
            check_content_type(&headers(Some("text/html")), JSON_CONTENT_TYPE),
            Err(AppError::UnsupportedMediaType(_))
        ));
        assert!(matches!(
            check_content_type(&headers(Some("application/json-patch+json")), JSON_CONTENT_TYPE),
            Err(AppError::UnsupportedMediaType(_))
        ));
    }
}
