//! The generic service client.
//!
//! A [`Service`] pairs a static [`ServiceSpec`] with a [`ServiceConfig`] and
//! a [`RequestExecutor`]. Every remote operation goes through
//! [`Service::invoke`]: validate, build, execute.

use std::env;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use clinical_define::{OperationSpec, ServiceSpec};
use tracing::{debug, instrument, warn};

use crate::args::CallArguments;
use crate::auth::{Authenticator, NoAuth, authenticator_from_env};
use crate::config::{DEFAULT_TIMEOUT, ServiceConfig};
use crate::descriptor::{RequestDescriptor, build};
use crate::error::SdkError;
use crate::executor::{ReqwestExecutor, RequestExecutor};
use crate::headers::Headers;
use crate::response::Response;
use crate::validate::validate;

/// A client for one remote service.
///
/// Cloning is cheap; clones share configuration and executor.
#[derive(Clone)]
pub struct Service {
    inner: Arc<ServiceInner>,
}

struct ServiceInner {
    spec: &'static ServiceSpec,
    config: ServiceConfig,
    executor: Arc<dyn RequestExecutor>,
}

impl fmt::Debug for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Service")
            .field("service", &self.inner.spec.name)
            .field("config", &self.inner.config)
            .field("executor", &self.inner.executor)
            .finish()
    }
}

impl Service {
    /// Starts building a client for `spec` pinned to the API `version`
    /// (`YYYY-MM-DD`).
    pub fn builder(spec: &'static ServiceSpec, version: impl Into<String>) -> ServiceBuilder {
        ServiceBuilder::new(spec, version)
    }

    /// Assembles a client from already validated parts.
    pub fn from_parts(
        spec: &'static ServiceSpec,
        config: ServiceConfig,
        executor: Arc<dyn RequestExecutor>,
    ) -> Self {
        Self {
            inner: Arc::new(ServiceInner {
                spec,
                config,
                executor,
            }),
        }
    }

    pub fn spec(&self) -> &'static ServiceSpec {
        self.inner.spec
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.inner.config
    }

    /// Looks up an operation of this service.
    pub fn operation(&self, operation_id: &str) -> Result<&'static OperationSpec, SdkError> {
        self.inner
            .spec
            .find(operation_id)
            .ok_or_else(|| SdkError::UnknownOperation {
                service: self.inner.spec.name.to_string(),
                operation: operation_id.to_string(),
            })
    }

    /// Validates the arguments and builds the request without sending it.
    ///
    /// ## Errors
    ///
    /// - [`SdkError::UnknownOperation`] if the id is not in the table
    /// - [`SdkError::Validation`] if required parameters are missing
    /// - [`SdkError::Build`] if a value cannot be placed in the request
    pub fn prepare(
        &self,
        operation_id: &str,
        args: Option<CallArguments>,
    ) -> Result<RequestDescriptor, SdkError> {
        let spec = self.operation(operation_id)?;

        if let Err(err) = validate(spec.id, args.as_ref(), &spec.required_params()) {
            warn!(operation = spec.id, missing = ?err.missing, "rejecting call");
            return Err(err.into());
        }

        let args = args.unwrap_or_default();
        Ok(build(spec, &self.inner.config, &args)?)
    }

    /// Calls an operation by id.
    ///
    /// The executor is never reached when validation fails. Executor errors
    /// are returned unchanged.
    #[instrument(
        name = "invoke",
        skip_all,
        fields(service = self.inner.spec.name, operation = operation_id)
    )]
    pub async fn invoke(
        &self,
        operation_id: &str,
        args: Option<CallArguments>,
    ) -> Result<Response, SdkError> {
        let request = self.prepare(operation_id, args)?;
        debug!(method = %request.method, url = %request.url, "sending request");
        self.inner.executor.execute(request).await
    }
}

/// Builder for a [`Service`] or a typed facade around one.
///
/// `F` is the type produced by [`build`](Self::build); facades implement
/// `From<Service>`.
pub struct ServiceBuilder<F = Service> {
    spec: &'static ServiceSpec,
    version: String,
    service_url: Option<String>,
    authenticator: Option<Arc<dyn Authenticator>>,
    executor: Option<Arc<dyn RequestExecutor>>,
    default_headers: Headers,
    timeout: Duration,
    _facade: PhantomData<fn() -> F>,
}

impl<F> fmt::Debug for ServiceBuilder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceBuilder")
            .field("service", &self.spec.name)
            .field("version", &self.version)
            .field("service_url", &self.service_url)
            .field("authenticator", &self.authenticator)
            .field("executor", &self.executor)
            .field("default_headers", &self.default_headers)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl<F: From<Service>> ServiceBuilder<F> {
    pub fn new(spec: &'static ServiceSpec, version: impl Into<String>) -> Self {
        Self {
            spec,
            version: version.into(),
            service_url: None,
            authenticator: None,
            executor: None,
            default_headers: Headers::new(),
            timeout: DEFAULT_TIMEOUT,
            _facade: PhantomData,
        }
    }

    /// Overrides the service URL. Without it, `{PREFIX}_URL` is consulted,
    /// then the service's default URL.
    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = Some(url.into());
        self
    }

    /// Sets the authenticator. Without it, one is derived from the
    /// environment (see [`authenticator_from_env`]), falling back to
    /// [`NoAuth`]. Ignored when a custom executor is supplied.
    pub fn authenticator(mut self, authenticator: impl Authenticator + 'static) -> Self {
        self.authenticator = Some(Arc::new(authenticator));
        self
    }

    /// Replaces the default `reqwest` executor.
    pub fn executor(mut self, executor: impl RequestExecutor + 'static) -> Self {
        self.executor = Some(Arc::new(executor));
        self
    }

    /// Adds a header sent with every request.
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name, value);
        self
    }

    /// Sets the request timeout of the default executor.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the client.
    ///
    /// ## Errors
    ///
    /// Returns an error if the URL or version is invalid, environment
    /// credentials are incomplete, or the HTTP client cannot be constructed.
    pub fn build(self) -> Result<F, SdkError> {
        let prefix = self.spec.env_prefix();
        let url = self
            .service_url
            .or_else(|| env::var(format!("{prefix}_URL")).ok().filter(|u| !u.is_empty()))
            .unwrap_or_else(|| self.spec.default_url.to_string());

        let mut config = ServiceConfig::new(self.spec.name, url, self.version)?;
        config.default_headers = self.default_headers;

        let executor: Arc<dyn RequestExecutor> = match self.executor {
            Some(executor) => executor,
            None => {
                let authenticator: Arc<dyn Authenticator> = match self.authenticator {
                    Some(authenticator) => authenticator,
                    None => match authenticator_from_env(&prefix)? {
                        Some(authenticator) => Arc::from(authenticator),
                        None => Arc::new(NoAuth),
                    },
                };
                debug!(
                    service = self.spec.name,
                    auth = authenticator.auth_type(),
                    "creating default executor"
                );
                Arc::new(
                    ReqwestExecutor::builder()
                        .timeout(self.timeout)
                        .authenticator(authenticator)
                        .build()?,
                )
            }
        };

        Ok(F::from(Service::from_parts(self.spec, config, executor)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingExecutor;
    use clinical_define::{ParameterSpec, RestMethod, media};

    static OPERATIONS: &[OperationSpec] = &[
        OperationSpec {
            id: "listWidgets",
            method: RestMethod::Get,
            path: "/v1/widgets",
            description: "",
            params: &[ParameterSpec::query("limit", "limit")],
            accept: Some(media::APPLICATION_JSON),
            content_type: None,
        },
        OperationSpec {
            id: "getWidget",
            method: RestMethod::Get,
            path: "/v1/widgets/{widget_id}",
            description: "",
            params: &[ParameterSpec::path("widgetId", "widget_id")],
            accept: Some(media::APPLICATION_JSON),
            content_type: None,
        },
    ];

    static WIDGETS: ServiceSpec = ServiceSpec {
        name: "widget_service",
        display_name: "Widgets",
        api_version: "v1",
        default_url: "https://widgets.example.com/api",
        operations: OPERATIONS,
    };

    fn service(recorder: &RecordingExecutor) -> Service {
        Service::builder(&WIDGETS, "2023-03-31")
            .executor(recorder.clone())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn unknown_operation_is_rejected() {
        let recorder = RecordingExecutor::new();
        let err = service(&recorder).invoke("deleteWidget", None).await.unwrap_err();
        assert!(matches!(err, SdkError::UnknownOperation { .. }));
        assert_eq!(recorder.call_count(), 0);
    }

    #[tokio::test]
    async fn validation_failure_never_reaches_executor() {
        let recorder = RecordingExecutor::new();
        let err = service(&recorder).invoke("getWidget", None).await.unwrap_err();
        assert!(err.to_string().contains("Missing required parameters"));
        assert_eq!(err.missing_parameters(), Some(&["widgetId".to_string()][..]));
        assert_eq!(recorder.call_count(), 0);
    }

    #[tokio::test]
    async fn successful_call_passes_descriptor_to_executor() {
        let recorder = RecordingExecutor::new();
        let args = CallArguments::new().with("widgetId", "w 1");
        let response = service(&recorder).invoke("getWidget", Some(args)).await.unwrap();

        assert_eq!(response.status, 200);
        let request = recorder.last_request().unwrap();
        assert_eq!(request.url, "https://widgets.example.com/api/v1/widgets/w%201");
        assert_eq!(request.path_params["widget_id"], "w 1");
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn validation_failure_is_logged() {
        let recorder = RecordingExecutor::new();
        let err = service(&recorder).invoke("getWidget", None).await.unwrap_err();
        assert!(err.is_validation());
        assert!(logs_contain("rejecting call"));
        assert!(logs_contain("widgetId"));
    }

    #[test]
    fn prepare_does_not_execute() {
        let recorder = RecordingExecutor::new();
        let request = service(&recorder).prepare("listWidgets", None).unwrap();
        assert_eq!(request.query_pairs(), vec![("version", "2023-03-31")]);
        assert_eq!(recorder.call_count(), 0);
    }

    #[test]
    fn explicit_url_wins() {
        let service: Service = Service::builder(&WIDGETS, "2023-03-31")
            .service_url("http://localhost:9999/")
            .executor(RecordingExecutor::new())
            .build()
            .unwrap();
        assert_eq!(service.config().service_url, "http://localhost:9999");
    }

    #[test]
    fn invalid_version_fails_build() {
        let result: Result<Service, _> = Service::builder(&WIDGETS, "March 2023")
            .executor(RecordingExecutor::new())
            .build();
        assert!(matches!(result, Err(SdkError::Config(_))));
    }

    #[test]
    fn default_headers_reach_descriptor() {
        let service: Service = Service::builder(&WIDGETS, "2023-03-31")
            .default_header("X-Tenant", "t1")
            .executor(RecordingExecutor::new())
            .build()
            .unwrap();
        let request = service.prepare("listWidgets", None).unwrap();
        assert_eq!(request.headers.get("x-tenant"), Some("t1"));
    }
}
