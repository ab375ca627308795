//! Facade generation.

/// Declares a typed client over a [`Service`](clinical_runtime::Service).
///
/// Each `method => "operationId"` entry becomes an `async fn method(&self,
/// args)` that delegates to `Service::invoke`. `args` accepts either
/// [`CallArguments`](clinical_runtime::CallArguments) or `None`.
macro_rules! service_facade {
    (
        $(#[$meta:meta])*
        pub struct $facade:ident => $spec:path;

        $(
            $(#[$op_meta:meta])*
            $method:ident => $operation:literal;
        )*
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $facade {
            service: ::clinical_runtime::Service,
        }

        impl $facade {
            /// `(method name, operation id)` for every generated method.
            pub const METHODS: &'static [(&'static str, &'static str)] = &[
                $((stringify!($method), $operation)),*
            ];

            /// Starts building a client pinned to the API `version`
            /// (`YYYY-MM-DD`).
            pub fn builder(
                version: impl Into<String>,
            ) -> ::clinical_runtime::ServiceBuilder<Self> {
                ::clinical_runtime::ServiceBuilder::new(&$spec, version)
            }

            /// The underlying generic client.
            pub fn service(&self) -> &::clinical_runtime::Service {
                &self.service
            }

            /// Calls any operation of this service by id.
            pub async fn invoke(
                &self,
                operation_id: &str,
                args: impl Into<Option<::clinical_runtime::CallArguments>>,
            ) -> Result<::clinical_runtime::Response, ::clinical_runtime::SdkError> {
                self.service.invoke(operation_id, args.into()).await
            }

            $(
                $(#[$op_meta])*
                pub async fn $method(
                    &self,
                    args: impl Into<Option<::clinical_runtime::CallArguments>>,
                ) -> Result<::clinical_runtime::Response, ::clinical_runtime::SdkError> {
                    self.service.invoke($operation, args.into()).await
                }
            )*
        }

        impl From<::clinical_runtime::Service> for $facade {
            fn from(service: ::clinical_runtime::Service) -> Self {
                Self { service }
            }
        }
    };
}

pub(crate) use service_facade;
