//! Response validation and decoding

use bytes::Bytes;
use http::StatusCode;
use osc_core::{ApiError, Error, Result};
use quick_xml::events::Event;
use serde::de::DeserializeOwned;

use super::request::ContentType;

/// Buffered body of a successful response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    content_type: ContentType,
    body: Bytes,
}

impl Payload {
    pub fn new(content_type: ContentType, body: impl Into<Bytes>) -> Self {
        Self {
            content_type,
            body: body.into(),
        }
    }

    /// Format the body is decoded with
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Decode the body into `T`
    ///
    /// A zero-length body is not an error and yields `T::default()`. Any
    /// other body must parse completely.
    pub fn decode<T>(&self) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        if self.body.is_empty() {
            return Ok(T::default());
        }
        decode_body(self.content_type, &self.body)
    }

    /// The body as UTF-8 text
    pub fn text(&self) -> Result<String> {
        String::from_utf8(self.body.to_vec())
            .map_err(|e| Error::decode(self.content_type.format_name(), e))
    }
}

fn decode_body<T: DeserializeOwned>(content_type: ContentType, body: &[u8]) -> Result<T> {
    match content_type {
        ContentType::Json => serde_json::from_slice(body).map_err(|e| Error::decode("json", e)),
        ContentType::Xml => {
            let text = std::str::from_utf8(body).map_err(|e| Error::decode("xml", e))?;
            quick_xml::de::from_str(text).map_err(|e| Error::decode("xml", e))
        }
    }
}

/// Local name of the first element of an XML document
fn xml_root(body: &[u8]) -> Result<String> {
    let mut reader = quick_xml::Reader::from_reader(body);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => return Err(Error::decode("xml", "unexpected EOF")),
            Ok(_) => {}
            Err(e) => return Err(Error::decode("xml", e)),
        }
        buf.clear();
    }
}

/// Decode an error document returned with a failure status
///
/// An XML document must be rooted at `<error>`.
pub fn decode_api_error(content_type: ContentType, body: &[u8]) -> Result<ApiError> {
    if content_type == ContentType::Xml {
        let root = xml_root(body)?;
        if root != "error" {
            return Err(Error::decode(
                "xml",
                format!("expected element type <error> but have <{root}>"),
            ));
        }
    }
    decode_body(content_type, body)
}

/// Lower-cased status line, e.g. `404 not found`
fn status_text(status: StatusCode) -> Option<String> {
    status
        .canonical_reason()
        .map(|reason| format!("{} {}", status.as_u16(), reason).to_lowercase())
}

/// Turn a failed login response into an error
///
/// Statuses up to 399 pass. An empty body yields `server error: <status>`.
/// A body that is not an error document is surfaced verbatim. Error code
/// 1004 becomes `server error: not found`; any other document yields its
/// lower-cased description.
pub fn handle_response(
    status: StatusCode,
    content_type: Option<ContentType>,
    body: &[u8],
) -> Result<()> {
    if status.as_u16() <= 399 {
        return Ok(());
    }

    if body.is_empty() {
        return Err(match status_text(status) {
            Some(text) => Error::Server(text),
            None => Error::Server(format!("status code {}", status.as_u16())),
        });
    }

    match decode_api_error(content_type.unwrap_or(ContentType::Xml), body) {
        Ok(api_error) if api_error.is_not_found() => Err(Error::Server("not found".to_string())),
        Ok(api_error) => Err(Error::Server(api_error.description.to_lowercase())),
        Err(_) => Err(Error::UnexpectedResponse(
            String::from_utf8_lossy(body).into_owned(),
        )),
    }
}

/// Classify a response by status
///
/// 401 becomes [`Error::Unauthorized`]; any other status from 400 up is
/// decoded into an [`ApiError`]. An empty error body yields the status line.
pub(crate) fn validate_response(
    status: StatusCode,
    content_type: ContentType,
    body: &[u8],
) -> Result<()> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(Error::Unauthorized);
    }
    if status.as_u16() < 400 {
        return Ok(());
    }
    if body.is_empty() {
        return Err(Error::Server(
            status_text(status).unwrap_or_else(|| format!("status code {}", status.as_u16())),
        ));
    }
    Err(Error::Api(decode_api_error(content_type, body)?))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct Named {
        name: String,
    }

    const ERROR_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
        <error><code>1004</code><description>Unable to find entity specified in URL</description>\
        <details>Bucket not found</details><retryable>false</retryable></error>";

    #[test]
    fn test_decode_empty_body() {
        let payload = Payload::new(ContentType::Json, Bytes::new());
        let named: Named = payload.decode().unwrap();
        assert_eq!(named, Named::default());

        let payload = Payload::new(ContentType::Xml, Bytes::new());
        let named: Named = payload.decode().unwrap();
        assert_eq!(named, Named::default());
    }

    #[test]
    fn test_decode_json_and_xml() {
        let payload = Payload::new(ContentType::Json, r#"{"name":"b1"}"#);
        assert_eq!(payload.decode::<Named>().unwrap().name, "b1");

        let payload = Payload::new(ContentType::Xml, "<object_bucket><name>b2</name></object_bucket>");
        assert_eq!(payload.decode::<Named>().unwrap().name, "b2");
    }

    #[test]
    fn test_decode_truncated_body_is_error() {
        let payload = Payload::new(ContentType::Json, r#"{"name":"b1""#);
        let err = payload.decode::<Named>().unwrap_err();
        assert!(err.to_string().starts_with("response: json: "));

        let payload = Payload::new(ContentType::Xml, "<object_bucket><name>b2</name>");
        let err = payload.decode::<Named>().unwrap_err();
        assert!(err.to_string().starts_with("response: xml: "));
    }

    #[test]
    fn test_decode_api_error_xml() {
        let api_error = decode_api_error(ContentType::Xml, ERROR_XML.as_bytes()).unwrap();
        assert!(api_error.is_not_found());
        assert_eq!(api_error.details, "Bucket not found");
    }

    #[test]
    fn test_decode_api_error_wrong_root() {
        let err = decode_api_error(ContentType::Xml, b"<badformat><code>1</code></badformat>")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "response: xml: expected element type <error> but have <badformat>"
        );
    }

    #[test]
    fn test_decode_api_error_json() {
        let api_error = decode_api_error(
            ContentType::Json,
            br#"{"code":1013,"description":"Bad request","details":"Unknown parameter a","retryable":false}"#,
        )
        .unwrap();
        assert_eq!(api_error.code, 1013);
        assert_eq!(api_error.to_string(), "Bad request: Unknown parameter a");
    }

    #[test]
    fn test_handle_response_success() {
        assert!(handle_response(StatusCode::OK, None, b"").is_ok());
        assert!(handle_response(StatusCode::NO_CONTENT, None, b"ignored").is_ok());
    }

    #[test]
    fn test_handle_response_empty_body() {
        let err = handle_response(StatusCode::FORBIDDEN, None, b"").unwrap_err();
        assert_eq!(err.to_string(), "server error: 403 forbidden");

        let status = StatusCode::from_u16(499).unwrap();
        let err = handle_response(status, None, b"").unwrap_err();
        assert_eq!(err.to_string(), "server error: status code 499");
    }

    #[test]
    fn test_handle_response_error_document() {
        let body = "<error><code>1008</code><description>Failed</description></error>";
        let err =
            handle_response(StatusCode::BAD_REQUEST, Some(ContentType::Xml), body.as_bytes())
                .unwrap_err();
        assert_eq!(err.to_string(), "server error: failed");

        let err = handle_response(StatusCode::NOT_FOUND, None, ERROR_XML.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "server error: not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_handle_response_raw_body() {
        let body = "<badformat>oops</badformat>";
        let err = handle_response(StatusCode::BAD_REQUEST, None, body.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), body);
    }

    #[test]
    fn test_validate_response() {
        assert!(validate_response(StatusCode::OK, ContentType::Xml, b"").is_ok());
        assert!(matches!(
            validate_response(StatusCode::UNAUTHORIZED, ContentType::Xml, ERROR_XML.as_bytes()),
            Err(Error::Unauthorized)
        ));

        let err =
            validate_response(StatusCode::NOT_FOUND, ContentType::Xml, ERROR_XML.as_bytes())
                .unwrap_err();
        assert!(err.is_not_found());
        assert!(err.api_error().unwrap().is(&ApiError::not_found()));

        let err =
            validate_response(StatusCode::SERVICE_UNAVAILABLE, ContentType::Json, b"").unwrap_err();
        assert_eq!(err.to_string(), "server error: 503 service unavailable");
    }
}
