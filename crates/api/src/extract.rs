//! Form body extractor.
//!
//! Browsers submitting `FormData` send `multipart/form-data`; plain HTML
//! forms and most scripts send `application/x-www-form-urlencoded`. Both
//! decode into the same field struct here, so handlers do not care which
//! one arrived.

use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Form;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::AppError;

/// Form fields decoded into `T`.
///
/// Unknown field names are ignored and a repeated name keeps its last
/// value, whichever encoding was used. File parts of a multipart body are
/// skipped. A request without a `Content-Type` decodes as an empty form.
#[derive(Debug)]
pub struct FormFields<T>(pub T);

impl<S, T> FromRequest<S> for FormFields<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_ascii_lowercase);

        match content_type.as_deref() {
            None => decode_fields(Map::new()).map(FormFields),
            Some(ct) if ct.starts_with("multipart/form-data") => {
                let multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                let fields = collect_multipart(multipart).await?;
                decode_fields(fields).map(FormFields)
            }
            Some(_) => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                let fields = pairs
                    .into_iter()
                    .map(|(name, value)| (name, Value::String(value)))
                    .collect();
                decode_fields(fields).map(FormFields)
            }
        }
    }
}

/// Read every text part of a multipart body into a name -> value map.
///
/// When a name repeats, the last value wins.
async fn collect_multipart(mut multipart: Multipart) -> Result<Map<String, Value>, AppError> {
    let mut fields = Map::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        if field.file_name().is_some() {
            continue;
        }
        let text = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        fields.insert(name, Value::String(text));
    }

    Ok(fields)
}

fn decode_fields<T: DeserializeOwned>(fields: Map<String, Value>) -> Result<T, AppError> {
    serde_json::from_value(Value::Object(fields))
        .map_err(|e| AppError::BadRequest(format!("Invalid form data: {e}")))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Fields {
        name: Option<String>,
        color: Option<String>,
    }

    async fn extract(content_type: Option<&str>, body: &str) -> Result<Fields, AppError> {
        let mut builder = http::Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        let req = builder.body(Body::from(body.to_string())).unwrap();
        FormFields::<Fields>::from_request(req, &()).await.map(|f| f.0)
    }

    #[tokio::test]
    async fn urlencoded_body() {
        let fields = extract(
            Some("application/x-www-form-urlencoded"),
            "name=Work&color=%23ff7f2a&extra=ignored",
        )
        .await
        .unwrap();

        assert_eq!(fields.name.as_deref(), Some("Work"));
        assert_eq!(fields.color.as_deref(), Some("#ff7f2a"));
    }

    #[tokio::test]
    async fn multipart_body() {
        let body = "--XBOUNDARY\r\n\
            Content-Disposition: form-data; name=\"name\"\r\n\r\n\
            Home\r\n\
            --XBOUNDARY\r\n\
            Content-Disposition: form-data; name=\"unknown\"\r\n\r\n\
            whatever\r\n\
            --XBOUNDARY--\r\n";

        let fields = extract(Some("multipart/form-data; boundary=XBOUNDARY"), body)
            .await
            .unwrap();

        assert_eq!(
            fields,
            Fields {
                name: Some("Home".into()),
                color: None,
            }
        );
    }

    #[tokio::test]
    async fn repeated_field_keeps_last_value_in_both_encodings() {
        let urlencoded = extract(Some("application/x-www-form-urlencoded"), "name=a&name=b")
            .await
            .unwrap();

        let body = "--XBOUNDARY\r\n\
            Content-Disposition: form-data; name=\"name\"\r\n\r\n\
            a\r\n\
            --XBOUNDARY\r\n\
            Content-Disposition: form-data; name=\"name\"\r\n\r\n\
            b\r\n\
            --XBOUNDARY--\r\n";
        let multipart = extract(Some("multipart/form-data; boundary=XBOUNDARY"), body)
            .await
            .unwrap();

        assert_eq!(urlencoded.name.as_deref(), Some("b"));
        assert_eq!(urlencoded, multipart);
    }

    #[tokio::test]
    async fn missing_content_type_is_empty_form() {
        let fields = extract(None, "").await.unwrap();
        assert_eq!(
            fields,
            Fields {
                name: None,
                color: None,
            }
        );
    }

    #[tokio::test]
    async fn unsupported_content_type_is_rejected() {
        let err = extract(Some("application/json"), "{\"name\":\"x\"}")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
