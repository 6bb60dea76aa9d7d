//! # Response Shaping & Content Negotiation
//!
//! Thin helpers turning domain values into HTTP responses. Pet payloads are
//! rendered as JSON or XML depending on the request's `Accept` header;
//! everything else (errors, the write-path `"SUCCESS"` body) is not
//! negotiated.
//!
//! XML rendering goes through `quick-xml`'s serde serializer. A list of
//! pets needs a document root, so the XML path wraps it in [`Pets`];
//! the JSON path serializes the bare array.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use petstore_core::{Pet, Pets};

use crate::error::ApiError;

/// Wire format selected from the request's `Accept` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// JSON — the default when the header is absent or names neither format.
    #[default]
    Json,
    /// XML — selected when the header asks for `application/xml` or
    /// `text/xml` without also accepting JSON.
    Xml,
}

impl ResponseFormat {
    /// Pick a format from an `Accept` header value.
    ///
    /// JSON wins whenever the header accepts it; only an explicit
    /// XML-without-JSON preference selects XML. No q-value parsing — this
    /// mirrors the coarse negotiation of the sample this API demonstrates.
    fn from_accept(value: Option<&str>) -> Self {
        let Some(accept) = value else {
            return Self::Json;
        };
        let accept = accept.to_ascii_lowercase();
        if accept.contains("application/json") {
            Self::Json
        } else if accept.contains("application/xml") || accept.contains("text/xml") {
            Self::Xml
        } else {
            Self::Json
        }
    }
}

#[axum::async_trait]
impl<S: Send + Sync> FromRequestParts<S> for ResponseFormat {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_accept(
            parts
                .headers
                .get(header::ACCEPT)
                .and_then(|v| v.to_str().ok()),
        ))
    }
}

/// Render a single pet in the negotiated format.
pub fn pet(format: ResponseFormat, pet: Pet) -> Response {
    match format {
        ResponseFormat::Json => Json(pet).into_response(),
        ResponseFormat::Xml => xml(&pet),
    }
}

/// Render a pet list in the negotiated format.
///
/// JSON responses are a bare array; XML responses are a `<Pets>` document.
pub fn pets(format: ResponseFormat, list: Vec<Pet>) -> Response {
    match format {
        ResponseFormat::Json => Json(list).into_response(),
        ResponseFormat::Xml => xml(&Pets::from(list)),
    }
}

/// The write-path acknowledgement: 200 with a plain `"SUCCESS"` body.
pub fn success() -> Response {
    "SUCCESS".into_response()
}

/// Serialize a value as an XML response body.
fn xml<T: Serialize>(value: &T) -> Response {
    match quick_xml::se::to_string(value) {
        Ok(body) => (
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/xml"),
            )],
            body,
        )
            .into_response(),
        Err(err) => ApiError::Internal(format!("XML serialization failed: {err}")).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use petstore_core::{PetId, PetStatus, Tag};

    fn sample_pet() -> Pet {
        Pet {
            id: PetId::new(1),
            name: "doggie".to_string(),
            status: PetStatus::Available,
            tags: vec![Tag::new("friendly").unwrap()],
        }
    }

    async fn body_string(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn absent_accept_header_defaults_to_json() {
        assert_eq!(ResponseFormat::from_accept(None), ResponseFormat::Json);
    }

    #[test]
    fn xml_accept_header_selects_xml() {
        assert_eq!(
            ResponseFormat::from_accept(Some("application/xml")),
            ResponseFormat::Xml
        );
        assert_eq!(
            ResponseFormat::from_accept(Some("text/xml")),
            ResponseFormat::Xml
        );
    }

    #[test]
    fn json_wins_when_both_are_accepted() {
        assert_eq!(
            ResponseFormat::from_accept(Some("application/json, application/xml")),
            ResponseFormat::Json
        );
    }

    #[test]
    fn unrelated_accept_header_defaults_to_json() {
        assert_eq!(
            ResponseFormat::from_accept(Some("text/html")),
            ResponseFormat::Json
        );
    }

    #[tokio::test]
    async fn pet_renders_as_xml_document() {
        let response = pet(ResponseFormat::Xml, sample_pet());
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/xml"
        );
        let body = body_string(response).await;
        assert!(body.contains("<Pet>"), "got: {body}");
        assert!(body.contains("<status>available</status>"), "got: {body}");
        assert!(body.contains("<tags>friendly</tags>"), "got: {body}");
    }

    #[tokio::test]
    async fn pet_list_renders_as_pets_document() {
        let response = pets(ResponseFormat::Xml, vec![sample_pet()]);
        let body = body_string(response).await;
        assert!(body.contains("<Pets>"), "got: {body}");
        assert!(body.contains("<pet>"), "got: {body}");
    }

    #[tokio::test]
    async fn pet_list_renders_as_bare_json_array() {
        let response = pets(ResponseFormat::Json, vec![sample_pet()]);
        let body = body_string(response).await;
        assert!(body.starts_with('['), "got: {body}");
    }

    #[tokio::test]
    async fn success_is_plain_text() {
        let response = success();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
        assert_eq!(body_string(response).await, "SUCCESS");
    }
}
