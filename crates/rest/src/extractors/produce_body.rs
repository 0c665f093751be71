//! Produce item body extractor.
//!
//! Extracts a [`ProduceRepresentation`] from the request body after checking
//! that the request declares a JSON media type.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::{RestError, create_error_body};
use crate::representation::ProduceRepresentation;

/// Axum extractor for produce item bodies.
///
/// Accepts `application/json` and any `+json` media type. A missing
/// Content-Type header is rejected like any other unsupported type, and the
/// check runs before the body is read.
///
/// # Example
///
/// ```rust,ignore
/// use harvest_rest::extractors::ProduceBody;
///
/// async fn create_handler(ProduceBody(item): ProduceBody) {
///     println!("Name: {:?}", item.name);
/// }
/// ```
#[derive(Debug)]
pub struct ProduceBody(pub ProduceRepresentation);

impl ProduceBody {
    /// Consumes the extractor and returns the inner representation.
    pub fn into_inner(self) -> ProduceRepresentation {
        self.0
    }
}

/// Error type for body extraction failures.
#[derive(Debug)]
pub enum ProduceBodyRejection {
    /// The Content-Type is not a JSON media type.
    UnsupportedMediaType(String),
    /// The body is not a valid item.
    InvalidJson(String),
    /// The body could not be read, e.g. it exceeds the size limit.
    Body(axum::extract::rejection::BytesRejection),
}

impl IntoResponse for ProduceBodyRejection {
    fn into_response(self) -> Response {
        let error = match self {
            ProduceBodyRejection::UnsupportedMediaType(content_type) => {
                RestError::UnsupportedMediaType { content_type }
            }
            ProduceBodyRejection::InvalidJson(msg) => RestError::BadRequest {
                message: format!("Invalid JSON: {}", msg),
            },
            ProduceBodyRejection::Body(rejection) => {
                let status = rejection.status();
                let body = create_error_body(status, &rejection.body_text());
                return (status, axum::Json(body)).into_response();
            }
        };
        error.into_response()
    }
}

/// Returns true for `application/json` and `+json` media types.
pub fn is_json_content_type(content_type: &str) -> bool {
    match content_type.parse::<mime::Mime>() {
        Ok(mime) => {
            mime.type_() == mime::APPLICATION
                && (mime.subtype() == mime::JSON || mime.suffix() == Some(mime::JSON))
        }
        Err(_) => false,
    }
}

impl<S> FromRequest<S> for ProduceBody
where
    S: Send + Sync,
{
    type Rejection = ProduceBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Check content type (must own the string before moving req)
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if !is_json_content_type(&content_type) {
            return Err(ProduceBodyRejection::UnsupportedMediaType(content_type));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(ProduceBodyRejection::Body)?;

        let item = ProduceRepresentation::from_body(&bytes)
            .map_err(|e| ProduceBodyRejection::InvalidJson(e.to_string()))?;

        Ok(ProduceBody(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = axum::http::Request::builder()
            .method("POST")
            .uri("/fruit");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[test]
    fn test_json_content_types() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("application/json; charset=utf-8"));
        assert!(is_json_content_type("application/merge-patch+json"));
        assert!(!is_json_content_type("text/plain"));
        assert!(!is_json_content_type("application/xml"));
        assert!(!is_json_content_type(""));
    }

    #[tokio::test]
    async fn test_extracts_item() {
        let ProduceBody(item) =
            ProduceBody::from_request(request(Some("application/json"), r#"{"name":"Kiwi"}"#), &())
                .await
                .unwrap();
        assert_eq!(item, ProduceRepresentation::named("Kiwi"));
    }

    #[tokio::test]
    async fn test_text_plain_is_rejected() {
        let rejection = ProduceBody::from_request(request(Some("text/plain"), ""), &())
            .await
            .unwrap_err();
        assert!(matches!(
            rejection,
            ProduceBodyRejection::UnsupportedMediaType(ref ct) if ct == "text/plain"
        ));
        assert_eq!(
            rejection.into_response().status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }

    #[tokio::test]
    async fn test_missing_content_type_is_rejected() {
        let rejection = ProduceBody::from_request(request(None, r#"{"name":"Kiwi"}"#), &())
            .await
            .unwrap_err();
        assert_eq!(
            rejection.into_response().status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let rejection =
            ProduceBody::from_request(request(Some("application/json"), "{name:"), &())
                .await
                .unwrap_err();
        assert_eq!(rejection.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
