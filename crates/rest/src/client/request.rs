//! Outbound request values

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use http::Method;
use osc_core::{Error, Params, Result};
use serde::Serialize;
use url::Url;

pub const CONTENT_TYPE_XML: &str = "application/xml";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Wire format of a request or response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Xml,
    Json,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Xml => CONTENT_TYPE_XML,
            ContentType::Json => CONTENT_TYPE_JSON,
        }
    }

    /// Short name used in error messages
    pub fn format_name(&self) -> &'static str {
        match self {
            ContentType::Xml => "xml",
            ContentType::Json => "json",
        }
    }

    /// Map a `Content-Type` header value to a body format
    ///
    /// Parameters such as `charset` are ignored. Returns `None` for media
    /// types that are neither XML nor JSON.
    pub fn from_media_type(value: &str) -> Option<Self> {
        let media_type = value.split(';').next().unwrap_or_default().trim();
        if media_type.eq_ignore_ascii_case(CONTENT_TYPE_XML)
            || media_type.eq_ignore_ascii_case("text/xml")
        {
            Some(ContentType::Xml)
        } else if media_type.eq_ignore_ascii_case(CONTENT_TYPE_JSON) {
            Some(ContentType::Json)
        } else {
            None
        }
    }
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            CONTENT_TYPE_XML => Ok(ContentType::Xml),
            CONTENT_TYPE_JSON => Ok(ContentType::Json),
            other => Err(Error::ContentType(other.to_string())),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialized request body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    format: ContentType,
    bytes: Bytes,
}

impl Body {
    /// Serialize `value` as an XML document rooted at its serde name
    pub fn xml<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let xml = quick_xml::se::to_string(value).map_err(|e| Error::encode("xml", e))?;
        Ok(Self::from_parts(ContentType::Xml, xml))
    }

    /// Serialize `value` as an XML document rooted at `root`
    pub fn xml_with_root<T: Serialize + ?Sized>(root: &str, value: &T) -> Result<Self> {
        let xml =
            quick_xml::se::to_string_with_root(root, value).map_err(|e| Error::encode("xml", e))?;
        Ok(Self::from_parts(ContentType::Xml, xml))
    }

    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let json = serde_json::to_vec(value).map_err(|e| Error::encode("json", e))?;
        Ok(Self::from_parts(ContentType::Json, json))
    }

    /// Pass an already encoded JSON document through unchanged
    pub fn raw_json(json: impl Into<String>) -> Self {
        Self::from_parts(ContentType::Json, json.into())
    }

    fn from_parts(format: ContentType, bytes: impl Into<Bytes>) -> Self {
        Self {
            format,
            bytes: bytes.into(),
        }
    }

    pub fn format(&self) -> ContentType {
        self.format
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn bytes(&self) -> Bytes {
        self.bytes.clone()
    }
}

/// A call to the management API
///
/// Built once and handed to a [`RemoteCaller`](super::RemoteCaller) by
/// value. The content type is kept as given and checked when the call is
/// made, so an unsupported value fails before anything is sent.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    path: String,
    content_type: String,
    params: Params,
    body: Option<Body>,
}

impl Request {
    /// Create a request; the content type defaults to XML
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            content_type: CONTENT_TYPE_XML.to_string(),
            params: Params::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn xml(self) -> Self {
        self.content_type(CONTENT_TYPE_XML)
    }

    pub fn json(self) -> Self {
        self.content_type(CONTENT_TYPE_JSON)
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Add every entry of `params`, replacing existing keys
    pub fn params(mut self, params: &Params) -> Self {
        self.params
            .extend(params.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    pub fn body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn content_type_str(&self) -> &str {
        &self.content_type
    }

    pub fn query(&self) -> &Params {
        &self.params
    }

    pub fn payload(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Check the content type and that the body was encoded to match it
    pub fn validate(&self) -> Result<ContentType> {
        let content_type: ContentType = self.content_type.parse()?;
        if let Some(body) = &self.body
            && body.format() != content_type
        {
            return Err(Error::encode(
                content_type.format_name(),
                format!("body is encoded as {}", body.format().format_name()),
            ));
        }
        Ok(content_type)
    }

    /// Resolve the request against `endpoint`
    ///
    /// The endpoint's path is replaced by the request path and query
    /// parameters are form-encoded in key order.
    pub fn url(&self, endpoint: &str) -> Result<Url> {
        let mut url = Url::parse(endpoint)?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidRequest(format!(
                "endpoint is not a base URL: {endpoint}"
            )));
        }

        if self.path.starts_with('/') {
            url.set_path(&self.path);
        } else {
            url.set_path(&format!("/{}", self.path));
        }

        if self.params.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(self.params.iter());
        }
        Ok(url)
    }
}

/// Join path segments, percent-encoding each one
///
/// ```
/// use osc_rest::client::path_join;
///
/// assert_eq!(path_join(["object", "bucket", "my bucket", "info"]), "/object/bucket/my%20bucket/info");
/// ```
pub fn path_join<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments.into_iter().fold(String::new(), |mut path, segment| {
        path.push('/');
        path.push_str(&urlencoding::encode(segment.as_ref()));
        path
    })
}
