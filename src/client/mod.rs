//! Client layer: operation dispatch, request building, response normalization.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::GatewayConfig;
use crate::domain::{
    ArgValue, DispatchArgs, GatewayResponse, MessageOptions, MessageRequest, OperationRegistry,
    Password, RawPhoneNumber, SenderId, Username, ValidationError,
};
use crate::transport;

const DEFAULT_ENDPOINT: &str = "https://api.sendsms.ro/json";

const ACTION_FIELD: &str = "action";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

/// The gateway carries every parameter in the URL; requests are POSTs with
/// an empty body.
trait HttpTransport: Send + Sync {
    fn post<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Clone, PartialEq, Eq)]
/// Account credentials sent with every gateway call.
///
/// Immutable once constructed. The password is never included in log
/// records or `Debug` output.
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Create validated credentials.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    /// Create credentials from already-validated parts.
    pub fn from_parts(username: Username, password: Password) -> Self {
        Self { username, password }
    }

    /// The account username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    fn push_query_params(&self, params: &mut Vec<(String, String)>) {
        params.push((Username::FIELD.to_owned(), self.username.as_str().to_owned()));
        params.push((Password::FIELD.to_owned(), self.password.as_str().to_owned()));
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username.as_str())
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors raised by [`SendsmsClient`].
///
/// Network-leg failures are deliberately absent: a failed HTTP call is
/// returned as [`GatewayResponse::Failed`], not raised, so interactive and
/// batch callers share one non-throwing path for transport problems while
/// programmer errors still surface as faults.
pub enum SendsmsError {
    /// HTTP client construction failure.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The logical operation is not present in the operation registry.
    #[error("no operation called {name} found")]
    UnknownOperation { name: String },

    /// The gateway answered 2xx with something other than a JSON object.
    #[error("malformed gateway response: {0}")]
    MalformedResponse(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`SendsmsClient`].
///
/// Use this when you need to customize the endpoint, operation registry,
/// message defaults, timeout, or user-agent.
pub struct SendsmsClientBuilder {
    credentials: Credentials,
    endpoint: String,
    registry: OperationRegistry,
    defaults: MessageOptions,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SendsmsClientBuilder {
    /// Create a builder with the default endpoint, the standard operation
    /// registry, and no message defaults beyond the report mask.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            registry: OperationRegistry::standard(),
            defaults: MessageOptions::default(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the gateway endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Replace the operation registry.
    pub fn registry(mut self, registry: OperationRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Set the message defaults applied by [`SendsmsClient::send`].
    pub fn message_defaults(mut self, defaults: MessageOptions) -> Self {
        self.defaults = defaults;
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SendsmsClient`].
    pub fn build(self) -> Result<SendsmsClient, SendsmsError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SendsmsError::Transport(Box::new(err)))?;

        Ok(SendsmsClient {
            credentials: self.credentials,
            endpoint: self.endpoint,
            registry: self.registry,
            defaults: self.defaults,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level SendSMS client.
///
/// Translates a logical operation plus typed arguments into the gateway's
/// `action`-driven URL protocol, performs a single HTTP call, and
/// normalizes the JSON reply. Stateless between calls; cloning shares the
/// underlying HTTP client.
pub struct SendsmsClient {
    credentials: Credentials,
    endpoint: String,
    registry: OperationRegistry,
    defaults: MessageOptions,
    http: Arc<dyn HttpTransport>,
}

impl SendsmsClient {
    /// Create a client using the default endpoint and standard registry.
    ///
    /// For more customization, use [`SendsmsClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            registry: OperationRegistry::standard(),
            defaults: MessageOptions::default(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> SendsmsClientBuilder {
        SendsmsClientBuilder::new(credentials)
    }

    /// Build a client from a loaded [`GatewayConfig`].
    pub fn from_config(config: &GatewayConfig) -> Result<Self, SendsmsError> {
        let credentials = Credentials::new(config.username.clone(), config.password.clone())?;
        let defaults = config.messages.to_options()?;
        let registry = OperationRegistry::from_operations(config.operations.clone());

        SendsmsClientBuilder::new(credentials)
            .endpoint(config.url.clone())
            .registry(registry)
            .message_defaults(defaults)
            .build()
    }

    /// Dispatch a logical operation with ordered arguments.
    ///
    /// This is the open entry point: operations without a named wrapper
    /// (including gateway actions added through the configured operations
    /// mapping) are reachable here directly.
    ///
    /// Errors:
    /// - [`SendsmsError::UnknownOperation`] when the logical name is not
    ///   registered; no network call is made.
    /// - [`SendsmsError::MalformedResponse`] when a 2xx body is not a JSON
    ///   object.
    ///
    /// Transport failures and non-2xx statuses return
    /// `Ok(GatewayResponse::Failed { .. })`.
    pub async fn dispatch(
        &self,
        operation: &str,
        args: DispatchArgs,
    ) -> Result<GatewayResponse, SendsmsError> {
        let Some(descriptor) = self.registry.get(operation) else {
            return Err(SendsmsError::UnknownOperation {
                name: operation.to_owned(),
            });
        };

        let filtered = transport::filter_args(args);
        for key in descriptor.required_args() {
            if !filtered.iter().any(|(have, _)| have.as_str() == *key) {
                debug!(operation, argument = *key, "required argument missing");
            }
        }

        let mut params = Vec::<(String, String)>::with_capacity(filtered.len() + 3);
        params.push((ACTION_FIELD.to_owned(), descriptor.remote_action().to_owned()));
        self.credentials.push_query_params(&mut params);
        params.extend(
            filtered
                .into_iter()
                .map(|(key, value)| (key, transport::render_value(&value))),
        );

        let url = transport::build_url(&self.endpoint, &params);
        debug!(
            operation,
            action = descriptor.remote_action(),
            params = params.len(),
            "dispatching gateway request"
        );

        let response = match self.http.post(&url).await {
            Ok(response) => response,
            Err(err) => {
                warn!(operation, error = %err, "gateway transport failure");
                return Ok(GatewayResponse::Failed {
                    error_message: err.to_string(),
                });
            }
        };

        if !(200..=299).contains(&response.status) {
            warn!(
                operation,
                status = response.status,
                "gateway returned non-success HTTP status"
            );
            let body = response.body.trim();
            let error_message = if body.is_empty() {
                format!("unexpected HTTP status {}", response.status)
            } else {
                format!("unexpected HTTP status {}: {body}", response.status)
            };
            return Ok(GatewayResponse::Failed { error_message });
        }

        let mut payload = transport::decode_payload(&response.body)
            .map_err(|err| SendsmsError::MalformedResponse(Box::new(err)))?;
        if let Some(echo) = transport::extract_send_echo(&url) {
            echo.merge_into(&mut payload);
        }

        Ok(GatewayResponse::Success { payload })
    }

    /// Send an SMS message.
    ///
    /// Validates the destination and body up front; `from` falls back to
    /// the configured default sender when absent or empty. The configured
    /// report mask is always attached; the callback URL and the remaining
    /// message defaults only when configured.
    pub async fn send(
        &self,
        to: impl Into<String>,
        message: impl Into<String>,
        from: Option<&str>,
    ) -> Result<GatewayResponse, SendsmsError> {
        let mut options = self.defaults.clone();
        match from {
            Some(value) if !value.trim().is_empty() => {
                options.from = Some(SenderId::new(value)?);
            }
            _ => {}
        }

        let request = MessageRequest::parse(to, message, options)?;
        self.send_message(request).await
    }

    /// Send an already-validated [`MessageRequest`].
    pub async fn send_message(
        &self,
        request: MessageRequest,
    ) -> Result<GatewayResponse, SendsmsError> {
        self.dispatch("send", transport::encode_message_args(&request))
            .await
    }

    /// Check the routing price towards a destination number.
    pub async fn price(&self, to: impl Into<String>) -> Result<GatewayResponse, SendsmsError> {
        let to = RawPhoneNumber::new(to)?;
        self.dispatch(
            "price",
            vec![(
                RawPhoneNumber::FIELD.to_owned(),
                Some(ArgValue::from(to.raw())),
            )],
        )
        .await
    }

    /// Retrieve the account balance.
    pub async fn balance(&self) -> Result<GatewayResponse, SendsmsError> {
        self.dispatch("balance", Vec::new()).await
    }

    /// Verify connectivity with the gateway.
    pub async fn ping(&self) -> Result<GatewayResponse, SendsmsError> {
        self.dispatch("ping", Vec::new()).await
    }

    /// Retrieve account information.
    pub async fn info(&self) -> Result<GatewayResponse, SendsmsError> {
        self.dispatch("info", Vec::new()).await
    }

    /// Retrieve the phone number attached to the account.
    pub async fn number(&self) -> Result<GatewayResponse, SendsmsError> {
        self.dispatch("number", Vec::new()).await
    }
}
