//! Declarative generators for service clients.

/// Define a service client type over a [`ClientRuntime`](crate::client::ClientRuntime).
///
/// Generates the struct, its [`ServiceClient`](crate::client::ServiceClient)
/// impl and the constructors shared by every service.
macro_rules! service_client {
    ($(#[$meta:meta])* $name:ident, $metadata:path) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            runtime: ::std::sync::Arc<$crate::client::ClientRuntime>,
        }

        impl $crate::client::ServiceClient for $name {
            const METADATA: &'static $crate::client::ServiceMetadata = &$metadata;

            fn from_runtime(runtime: ::std::sync::Arc<$crate::client::ClientRuntime>) -> Self {
                Self { runtime }
            }

            fn runtime(&self) -> &$crate::client::ClientRuntime {
                &self.runtime
            }
        }

        impl $name {
            /// Create a client builder.
            pub fn builder() -> $crate::client::ClientBuilder<Self> {
                $crate::client::ClientBuilder::new()
            }

            /// Create a client from a shared configuration, using its
            /// credentials provider.
            pub fn new(config: $crate::config::ClientConfig) -> $crate::Result<Self> {
                Self::builder().config(config).build()
            }

            /// Create a client that signs with fixed credentials.
            pub fn with_credentials(
                credentials: $crate::credentials::AwsCredentials,
                config: $crate::config::ClientConfig,
            ) -> $crate::Result<Self> {
                Self::builder().config(config).credentials(credentials).build()
            }

            /// Create a client that signs with credentials from `provider`.
            pub fn with_credentials_provider(
                provider: ::std::sync::Arc<dyn $crate::credentials::CredentialsProvider>,
                config: $crate::config::ClientConfig,
            ) -> $crate::Result<Self> {
                Self::builder()
                    .config(config)
                    .credentials_provider(provider)
                    .build()
            }

            /// Create a client from a service-specific configuration.
            pub fn from_service_config(
                config: $crate::config::ServiceClientConfig,
            ) -> $crate::Result<Self> {
                Self::builder().service_config(config).build()
            }

            /// Create a client from environment variables.
            pub fn from_env() -> $crate::Result<Self> {
                Self::builder().from_env().build()
            }

            /// Send all subsequent requests to `endpoint`.
            pub fn override_endpoint(&self, endpoint: &str) -> $crate::Result<()> {
                self.runtime.override_endpoint(endpoint)
            }

            /// Client configuration.
            pub fn config(&self) -> &$crate::config::ClientConfig {
                self.runtime.config()
            }

            /// The endpoint provider in use.
            pub fn endpoint_provider(
                &self,
            ) -> &::std::sync::Arc<dyn $crate::endpoint::EndpointProvider> {
                self.runtime.endpoint_provider()
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("region", &self.runtime.config().region)
                    .finish_non_exhaustive()
            }
        }
    };
}

/// Generate the three calling conventions for each operation of a client.
///
/// For `Request: direct, callable, with_handler;` this emits:
///
/// * `direct(request)`, an `async fn` returning the outcome;
/// * `callable(request)`, which submits the call to the client executor and
///   returns an [`OperationHandle`](crate::executor::OperationHandle);
/// * `with_handler(request, handler, context)`, which submits the call and
///   invokes `handler(client, request, outcome, context)` on completion.
macro_rules! service_operations {
    ($client:ty {
        $(
            $(#[$meta:meta])*
            $input:ty => $direct:ident, $callable:ident, $with_handler:ident;
        )*
    }) => {
        impl $client {
            $(
                $(#[$meta])*
                pub async fn $direct(
                    &self,
                    request: $input,
                ) -> $crate::error::Outcome<<$input as $crate::operation::OperationInput>::Output> {
                    self.runtime.execute(&request).await
                }

                #[doc = concat!("Run [`", stringify!($direct), "`](Self::", stringify!($direct), ") on the client executor.")]
                pub fn $callable(
                    &self,
                    request: $input,
                ) -> $crate::executor::OperationHandle<<$input as $crate::operation::OperationInput>::Output> {
                    let client = self.clone();
                    $crate::executor::submit(self.runtime.executor(), async move {
                        client.$direct(request).await
                    })
                }

                #[doc = concat!("Run [`", stringify!($direct), "`](Self::", stringify!($direct), ") on the client executor and pass the outcome to `handler`.")]
                pub fn $with_handler<H>(
                    &self,
                    request: $input,
                    handler: H,
                    context: Option<::std::sync::Arc<$crate::executor::AsyncCallerContext>>,
                ) where
                    H: FnOnce(
                            &Self,
                            &$input,
                            $crate::error::Outcome<<$input as $crate::operation::OperationInput>::Output>,
                            Option<::std::sync::Arc<$crate::executor::AsyncCallerContext>>,
                        ) + Send
                        + 'static,
                {
                    let client = self.clone();
                    let task_client = self.clone();
                    let task_request = request.clone();
                    $crate::executor::submit_with(
                        self.runtime.executor(),
                        async move { task_client.$direct(task_request).await },
                        move |outcome| handler(&client, &request, outcome, context),
                    );
                }
            )*
        }
    };
}

/// Generate fluent setters for the optional members of a request.
///
/// `setters!(Request { name: String })` emits
/// `fn name(self, value: impl Into<String>) -> Self`.
macro_rules! setters {
    ($ty:ident { $($field:ident: $fty:ty),* $(,)? }) => {
        impl $ty {
            $(
                #[doc = concat!("Set `", stringify!($field), "`.")]
                pub fn $field(mut self, value: impl Into<$fty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }
    };
}

/// Fail with `MissingParameter` on the first unset member, in order.
macro_rules! check_required {
    ($this:ident, [$($field:ident = $wire:literal),*]) => {
        $(
            $crate::operation::validate::required(
                <Self as $crate::operation::OperationInput>::DESCRIPTOR.name,
                $wire,
                &$this.$field,
            )?;
        )*
    };
}

/// Implement [`OperationInput`](crate::operation::OperationInput) for an
/// AWS JSON 1.1 request: `POST /`, the request itself is the payload.
///
/// Required members are listed with their wire names. An output of `()`
/// ignores the response body.
macro_rules! json_operation {
    ($input:ident => (), $name:literal $(, required: [$($field:ident = $wire:literal),* $(,)?])?) => {
        json_operation!(@impl $input, (), $name, [$($($field = $wire),*)?], |_response| Ok(()));
    };
    ($input:ident => $output:ty, $name:literal $(, required: [$($field:ident = $wire:literal),* $(,)?])?) => {
        json_operation!(@impl $input, $output, $name, [$($($field = $wire),*)?], |response| $crate::protocol::json::parse(response));
    };
    (@impl $input:ident, $output:ty, $name:literal, [$($field:ident = $wire:literal),*], |$response:ident| $decode:expr) => {
        impl $crate::operation::OperationInput for $input {
            type Output = $output;
            const DESCRIPTOR: $crate::operation::OperationDescriptor =
                $crate::operation::OperationDescriptor::new($name, $crate::operation::HttpMethod::Post, "/");

            fn validate(&self) -> ::std::result::Result<(), $crate::error::RequestError> {
                check_required!(self, [$($field = $wire),*]);
                Ok(())
            }

            fn serialize(
                &self,
                request: &mut $crate::operation::RequestBuilder,
            ) -> ::std::result::Result<(), $crate::error::AwsError> {
                request.json_body(self)?;
                Ok(())
            }

            fn deserialize($response: &$crate::transport::HttpResponse) -> $crate::error::Outcome<$output> {
                $decode
            }
        }
    };
}

/// Implement [`OperationInput`](crate::operation::OperationInput) for an
/// AWS Query request. The block writes members into the form; the result is
/// decoded from `<{Operation}Result>`.
///
/// `query_operation!(Req => Out, "Op", required: [..], |req, form| { .. })`
macro_rules! query_operation {
    ($input:ident => (), $name:literal, $(required: [$($field:ident = $wire:literal),* $(,)?],)? |$this:ident, $form:ident| $body:block) => {
        query_operation!(@impl $input, (), $name, [$($($field = $wire),*)?], |$this, $form| $body, |_response| Ok(()));
    };
    ($input:ident => $output:ty, $name:literal, $(required: [$($field:ident = $wire:literal),* $(,)?],)? |$this:ident, $form:ident| $body:block) => {
        query_operation!(@impl $input, $output, $name, [$($($field = $wire),*)?], |$this, $form| $body,
            |response| $crate::protocol::query::parse_result(response, $name));
    };
    (@impl $input:ident, $output:ty, $name:literal, [$($field:ident = $wire:literal),*],
        |$this:ident, $form:ident| $body:block, |$response:ident| $decode:expr) => {
        impl $crate::operation::OperationInput for $input {
            type Output = $output;
            const DESCRIPTOR: $crate::operation::OperationDescriptor =
                $crate::operation::OperationDescriptor::new($name, $crate::operation::HttpMethod::Post, "/");

            fn validate(&self) -> ::std::result::Result<(), $crate::error::RequestError> {
                check_required!(self, [$($field = $wire),*]);
                Ok(())
            }

            #[allow(unused_variables)]
            fn serialize(
                &self,
                request: &mut $crate::operation::RequestBuilder,
            ) -> ::std::result::Result<(), $crate::error::AwsError> {
                let $this = self;
                let $form = request.form();
                $body
                Ok(())
            }

            fn deserialize($response: &$crate::transport::HttpResponse) -> $crate::error::Outcome<$output> {
                $decode
            }
        }
    };
}
