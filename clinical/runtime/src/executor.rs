//! Request execution with tracing instrumentation.
//!
//! [`RequestExecutor`] is the seam between request construction and the
//! network. [`ReqwestExecutor`] is the default implementation.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use clinical_define::RestMethod;
use futures::future::BoxFuture;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart;
use tracing::{Span, debug, instrument};
use url::Url;

use crate::auth::{Authenticator, NoAuth};
use crate::config::DEFAULT_TIMEOUT;
use crate::descriptor::{FormPart, RequestBody, RequestDescriptor};
use crate::error::{AuthError, ClientError, SdkError};
use crate::headers::{CONTENT_TYPE, Headers};
use crate::response::{Response, ResponseBody};

/// Sends a [`RequestDescriptor`] and produces its [`Response`].
///
/// Non-2xx responses, network failures and timeouts are reported as errors
/// and passed to the caller unchanged.
pub trait RequestExecutor: Send + Sync + fmt::Debug {
    fn execute(&self, request: RequestDescriptor) -> BoxFuture<'_, Result<Response, SdkError>>;
}

impl<T: RequestExecutor + ?Sized> RequestExecutor for Arc<T> {
    fn execute(&self, request: RequestDescriptor) -> BoxFuture<'_, Result<Response, SdkError>> {
        (**self).execute(request)
    }
}

/// Builder for configuring a [`ReqwestExecutor`].
#[derive(Debug)]
pub struct ReqwestExecutorBuilder {
    timeout: Duration,
    authenticator: Arc<dyn Authenticator>,
}

impl Default for ReqwestExecutorBuilder {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            authenticator: Arc::new(NoAuth),
        }
    }
}

impl ReqwestExecutorBuilder {
    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the authenticator applied to every request.
    pub fn authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = authenticator;
        self
    }

    /// Builds the executor.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<ReqwestExecutor, SdkError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Request)?;

        Ok(ReqwestExecutor {
            client,
            authenticator: self.authenticator,
        })
    }
}

/// Executes descriptors over HTTP with `reqwest`.
///
/// ## Examples
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use clinical_runtime::{BearerToken, ReqwestExecutor};
///
/// let executor = ReqwestExecutor::builder()
///     .authenticator(Arc::new(BearerToken::new("token")))
///     .build()?;
/// let response = executor.send(request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestExecutor {
    client: reqwest::Client,
    authenticator: Arc<dyn Authenticator>,
}

impl ReqwestExecutor {
    pub fn builder() -> ReqwestExecutorBuilder {
        ReqwestExecutorBuilder::default()
    }

    /// Creates an unauthenticated executor with default settings.
    pub fn new() -> Result<Self, SdkError> {
        Self::builder().build()
    }

    /// Sends the request and classifies the response body.
    ///
    /// ## Errors
    ///
    /// - [`ClientError::HttpStatus`] for non-2xx responses other than 401/403
    /// - [`AuthError::AuthenticationFailed`] for 401
    /// - [`AuthError::InsufficientPermissions`] for 403
    /// - [`ClientError::Request`] for network failures and timeouts
    #[instrument(
        name = "api_request",
        skip(self, request),
        fields(
            operation = request.operation_id,
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn send(&self, request: RequestDescriptor) -> Result<Response, SdkError> {
        Span::current().record("http.method", request.method.to_string().as_str());

        let mut url = Url::parse(&request.url).map_err(ClientError::InvalidUrl)?;
        let pairs = request.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Span::current().record("http.url", url.as_str());

        let mut headers = request.headers.clone();
        self.authenticator.authenticate(&mut headers)?;
        if !request.form_data.is_empty() {
            // reqwest writes the multipart boundary itself.
            headers.remove(CONTENT_TYPE);
        }

        let mut builder = self
            .client
            .request(to_reqwest(request.method), url)
            .headers(header_map(&headers)?);

        builder = match request.body {
            Some(RequestBody::Json(value)) => builder.body(value.to_string()),
            Some(RequestBody::Text(text)) => builder.body(text),
            Some(RequestBody::Binary(data)) => builder.body(data),
            None => builder,
        };
        if !request.form_data.is_empty() {
            builder = builder.multipart(multipart_form(request.form_data)?);
        }

        let response = builder.send().await.map_err(ClientError::Request)?;

        let status = response.status();
        let status_code = status.as_u16();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        Span::current().record("http.status_code", status_code);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());

            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);

            return Err(match status_code {
                401 => AuthError::AuthenticationFailed { message: body }.into(),
                403 => AuthError::InsufficientPermissions {
                    operation: request.operation_id.to_string(),
                }
                .into(),
                _ => ClientError::HttpStatus {
                    status: status_code,
                    status_text,
                    body,
                }
                .into(),
            });
        }

        Span::current().record("otel.status_code", "OK");

        let headers = response_headers(response.headers());
        let data: Bytes = response.bytes().await.map_err(ClientError::Request)?;
        debug!(bytes = data.len(), "response received");

        Ok(Response {
            result: ResponseBody::from_headers(&headers, data),
            status: status_code,
            status_text,
            headers,
        })
    }
}

impl RequestExecutor for ReqwestExecutor {
    fn execute(&self, request: RequestDescriptor) -> BoxFuture<'_, Result<Response, SdkError>> {
        Box::pin(self.send(request))
    }
}

fn to_reqwest(method: RestMethod) -> reqwest::Method {
    match method {
        RestMethod::Get => reqwest::Method::GET,
        RestMethod::Post => reqwest::Method::POST,
        RestMethod::Put => reqwest::Method::PUT,
        RestMethod::Delete => reqwest::Method::DELETE,
    }
}

fn header_map(headers: &Headers) -> Result<HeaderMap, ClientError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers.iter() {
        let header_name = HeaderName::try_from(name).map_err(|e| ClientError::InvalidHeader {
            name: name.to_string(),
            message: e.to_string(),
        })?;
        let header_value = HeaderValue::try_from(value).map_err(|e| ClientError::InvalidHeader {
            name: name.to_string(),
            message: e.to_string(),
        })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

fn response_headers(map: &HeaderMap) -> Headers {
    map.iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect()
}

fn multipart_form(parts: impl IntoIterator<Item = (String, FormPart)>) -> Result<multipart::Form, ClientError> {
    let mut form = multipart::Form::new();
    for (name, part) in parts {
        let mut body = multipart::Part::bytes(part.data.to_vec()).mime_str(&part.content_type)?;
        if let Some(filename) = part.filename {
            body = body.file_name(filename);
        }
        form = form.part(name, body);
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methods_map_to_reqwest() {
        assert_eq!(to_reqwest(RestMethod::Get), reqwest::Method::GET);
        assert_eq!(to_reqwest(RestMethod::Delete), reqwest::Method::DELETE);
    }

    #[test]
    fn invalid_header_names_are_reported() {
        let headers = Headers::new().with("Bad Header", "x");
        let err = header_map(&headers).unwrap_err();
        assert!(matches!(err, ClientError::InvalidHeader { ref name, .. } if name == "Bad Header"));
    }

    #[test]
    fn header_map_keeps_values() {
        let headers = Headers::new().with("Accept", "application/json");
        let map = header_map(&headers).unwrap();
        assert_eq!(map.get("accept").unwrap(), "application/json");
    }
}
