use crate::core::errors::ExchangeError;
use crate::core::kernel::signer::Signer;
use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument, trace};

/// Authentication an endpoint requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Security {
    /// Public endpoint
    None,
    /// API key header only
    ApiKey,
    /// API key header plus a signature over the query string
    Signed,
}

impl Security {
    pub const fn needs_credentials(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Body of a successful response, with the status it arrived with
#[derive(Debug, Clone, PartialEq)]
pub struct RestResponse {
    pub status: u16,
    pub body: Value,
}

impl RestResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// A `200 OK` response carrying `body`
    pub fn ok(body: Value) -> Self {
        Self::new(200, body)
    }

    /// Decode the body into a response model
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ExchangeError> {
        let status = self.status;
        serde_json::from_value(self.body).map_err(|e| ExchangeError::DeserializationError {
            status,
            message: format!("Failed to decode response: {}", e),
        })
    }
}

/// REST client trait for making HTTP requests
///
/// Parameters are always sent in the query string, in the order given.
/// Implementations handle authentication according to the `Security` level
/// of each call.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Make a request and return the response body as JSON
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `endpoint` - Path relative to the base URL, or an absolute URL
    /// * `params` - Query parameters as key-value pairs
    /// * `security` - Authentication the endpoint requires
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(&str, String)],
        security: Security,
    ) -> Result<RestResponse, ExchangeError>;

    /// Make a GET request
    async fn get(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
        security: Security,
    ) -> Result<RestResponse, ExchangeError> {
        self.request(Method::GET, endpoint, params, security).await
    }

    /// Make a POST request
    async fn post(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
        security: Security,
    ) -> Result<RestResponse, ExchangeError> {
        self.request(Method::POST, endpoint, params, security).await
    }

    /// Make a PUT request
    async fn put(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
        security: Security,
    ) -> Result<RestResponse, ExchangeError> {
        self.request(Method::PUT, endpoint, params, security).await
    }

    /// Make a DELETE request
    async fn delete(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
        security: Security,
    ) -> Result<RestResponse, ExchangeError> {
        self.request(Method::DELETE, endpoint, params, security).await
    }
}

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Exchange name for logging and tracing
    pub exchange_name: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl RestClientConfig {
    /// Create a new configuration
    ///
    /// # Arguments
    /// * `base_url` - Base URL for the API
    /// * `exchange_name` - Name of the exchange
    pub fn new(base_url: String, exchange_name: String) -> Self {
        Self {
            base_url,
            exchange_name,
            timeout_seconds: 30,
            user_agent: concat!("binance-api-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder {
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
}

impl RestClientBuilder {
    pub fn new(config: RestClientConfig) -> Self {
        Self {
            config,
            signer: None,
        }
    }

    /// Set the signer for authenticated requests
    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Build the REST client
    pub fn build(self) -> Result<ReqwestRest, ExchangeError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(self.config.timeout_seconds))
            .user_agent(&self.config.user_agent)
            .build()
            .map_err(|e| {
                ExchangeError::ConfigurationError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(ReqwestRest {
            client,
            config: self.config,
            signer: self.signer,
        })
    }
}

/// A request with its final URL and headers, ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub url: String,
    pub headers: HashMap<String, String>,
}

/// Implementation of `RestClient` using reqwest
#[derive(Clone)]
pub struct ReqwestRest {
    client: Client,
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
}

impl std::fmt::Debug for ReqwestRest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestRest")
            .field("config", &self.config)
            .field("has_signer", &self.signer.is_some())
            .finish_non_exhaustive()
    }
}

impl ReqwestRest {
    /// Create a new `ReqwestRest` instance with default settings
    pub fn new(
        base_url: String,
        exchange_name: String,
        signer: Option<Arc<dyn Signer>>,
    ) -> Result<Self, ExchangeError> {
        let mut builder = RestClientBuilder::new(RestClientConfig::new(base_url, exchange_name));
        if let Some(signer) = signer {
            builder = builder.with_signer(signer);
        }
        builder.build()
    }

    pub fn config(&self) -> &RestClientConfig {
        &self.config
    }

    /// Build the full URL for an endpoint. Absolute URLs are used as given.
    fn build_url(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            endpoint.to_string()
        } else {
            format!("{}{}", self.config.base_url, endpoint)
        }
    }

    fn signer(&self) -> Result<&Arc<dyn Signer>, ExchangeError> {
        self.signer.as_ref().ok_or_else(|| {
            ExchangeError::AuthError("Authentication required but no signer provided".to_string())
        })
    }

    /// Resolve the URL, query string and authentication headers of a call
    pub fn prepare(
        &self,
        method: &Method,
        endpoint: &str,
        params: &[(&str, String)],
        security: Security,
    ) -> Result<PreparedRequest, ExchangeError> {
        let mut query = encode_query(params)?;
        let signer = if security.needs_credentials() {
            Some(self.signer()?)
        } else {
            None
        };
        let headers = match (security, signer) {
            (Security::ApiKey, Some(signer)) => signer.api_key_headers(),
            (Security::Signed, Some(signer)) => {
                let (headers, extra_params) =
                    signer.sign_request(method.as_str(), endpoint, &query, &[])?;
                let extra = encode_query(&extra_params)?;
                if !extra.is_empty() {
                    if !query.is_empty() {
                        query.push('&');
                    }
                    query.push_str(&extra);
                }
                headers
            }
            _ => HashMap::new(),
        };

        let url = self.build_url(endpoint);
        let url = if query.is_empty() {
            url
        } else {
            format!("{}?{}", url, query)
        };

        Ok(PreparedRequest { url, headers })
    }

    /// Handle the response and extract JSON
    #[instrument(skip(self, response), fields(exchange = %self.config.exchange_name, status = %response.status()))]
    async fn handle_response(&self, response: Response) -> Result<RestResponse, ExchangeError> {
        let status = response.status();
        let response_text = response.text().await?;

        trace!("Response body: {}", response_text);

        if status.is_success() {
            parse_success_body(status.as_u16(), &response_text)
        } else {
            Err(api_error(status.as_u16(), &response_text))
        }
    }
}

#[async_trait]
impl RestClient for ReqwestRest {
    #[instrument(skip(self, params), fields(exchange = %self.config.exchange_name, method = %method, endpoint = %endpoint, param_count = params.len()))]
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(&str, String)],
        security: Security,
    ) -> Result<RestResponse, ExchangeError> {
        let prepared = self.prepare(&method, endpoint, params, security)?;
        debug!(?security, "Sending request");

        let mut request = self.client.request(method, &prepared.url);
        for (key, value) in &prepared.headers {
            request = request.header(key.as_str(), value.as_str());
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }
}

/// Encode parameters as a query string, preserving their order
pub fn encode_query<K, V>(params: &[(K, V)]) -> Result<String, ExchangeError>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    serde_urlencoded::to_string(params).map_err(|e| {
        ExchangeError::SerializationError(format!("Failed to encode query parameters: {}", e))
    })
}

/// Parse a successful response body. Some endpoints answer with an empty body.
fn parse_success_body(status: u16, body: &str) -> Result<RestResponse, ExchangeError> {
    if body.trim().is_empty() {
        return Ok(RestResponse::new(status, Value::Object(serde_json::Map::new())));
    }

    serde_json::from_str(body)
        .map(|value| RestResponse::new(status, value))
        .map_err(|e| ExchangeError::DeserializationError {
            status,
            message: format!("Failed to parse JSON response: {}", e),
        })
}

/// Error payload returned by the exchange on non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: i32,
    msg: String,
}

fn api_error(status: u16, body: &str) -> ExchangeError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(error) => ExchangeError::ApiError {
            status,
            code: error.code,
            message: error.msg,
        },
        Err(_) => ExchangeError::ApiError {
            status,
            code: i32::from(status),
            message: body.to_string(),
        },
    }
}
