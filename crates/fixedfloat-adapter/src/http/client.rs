/*
[INPUT]:  HTTP configuration (base URL, timeouts, API key pair)
[OUTPUT]: Configured client issuing signed POST requests
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::http::{FixedFloatError, RequestSigner, Result};
use crate::types::ApiEnvelope;

/// Base URL for the FixedFloat API
pub const DEFAULT_BASE_URL: &str = "https://ff.io/api/v2/";

const CONTENT_TYPE_JSON: &str = "application/json; charset=UTF-8";
const API_KEY_HEADER: &str = "x-api-key";
const API_SIGN_HEADER: &str = "x-api-sign";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// API key pair issued at https://fixedfloat.com/user/apikey
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_key_header: HeaderValue,
    api_secret: String,
}

impl Credentials {
    /// Both the key and the secret must be non-empty, and the key must be
    /// a valid header value.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();
        if api_key.is_empty() || api_secret.is_empty() {
            return Err(FixedFloatError::Config(
                "Please provide an API and secret keys".to_string(),
            ));
        }

        let mut api_key_header = HeaderValue::from_str(&api_key)
            .map_err(|e| FixedFloatError::Config(format!("Invalid API key: {e}")))?;
        api_key_header.set_sensitive(true);

        Ok(Self {
            api_key,
            api_key_header,
            api_secret,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Main HTTP client for the FixedFloat API
///
/// Holds only read-only state, so a single instance can serve concurrent
/// calls and several instances with different credentials can coexist.
#[derive(Debug, Clone)]
pub struct FixedFloatClient {
    http_client: Client,
    base_url: Url,
    credentials: Credentials,
    signer: RequestSigner,
}

impl FixedFloatClient {
    /// Create a new client with default configuration
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::default(), api_key, api_secret)
    }

    /// Create a new client with custom configuration
    pub fn with_config(
        config: ClientConfig,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config_and_base_url(config, api_key, api_secret, DEFAULT_BASE_URL)
    }

    /// Create a client against an alternate API root (e.g. a mock server)
    pub fn with_config_and_base_url(
        config: ClientConfig,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        base_url: &str,
    ) -> Result<Self> {
        let credentials = Credentials::new(api_key, api_secret)?;
        let signer = RequestSigner::new(credentials.api_secret.as_bytes());

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| FixedFloatError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: normalize_base_url(base_url)?,
            credentials,
            signer,
        })
    }

    /// API root every endpoint path is appended to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Build full URL for an endpoint
    ///
    /// The endpoint is always appended to the base path, so it can never
    /// change the scheme or host.
    fn endpoint_url(&self, endpoint: &str) -> Url {
        let mut url = self.base_url.clone();
        let path = format!("{}{}", self.base_url.path(), endpoint.trim_start_matches('/'));
        url.set_path(&path);
        url
    }

    fn signed_headers(&self, body: &str) -> Result<HeaderMap> {
        let signature = self.signer.sign(body.as_bytes())?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        headers.insert(API_KEY_HEADER, self.credentials.api_key_header.clone());
        headers.insert(
            API_SIGN_HEADER,
            HeaderValue::from_str(&signature)
                .map_err(|e| FixedFloatError::Config(format!("Invalid signature header: {e}")))?,
        );
        Ok(headers)
    }

    /// Send a signed POST request and unwrap the response envelope
    ///
    /// POST {base_url}{endpoint}
    /// `body` is signed and sent byte-for-byte; pass `""` for endpoints
    /// that take no arguments.
    pub async fn request(&self, endpoint: &str, body: &str) -> Result<Value> {
        if endpoint.trim_start_matches('/').is_empty() {
            return Err(FixedFloatError::MissingEndpoint);
        }

        let url = self.endpoint_url(endpoint);
        let headers = self.signed_headers(body)?;

        debug!(endpoint, body_len = body.len(), "fixedfloat request");

        let response = self
            .http_client
            .post(url)
            .headers(headers)
            .body(body.to_owned())
            .send()
            .await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let envelope: ApiEnvelope = serde_json::from_slice(&bytes)?;
        match envelope.into_data() {
            Ok(data) => {
                debug!(endpoint, %status, "fixedfloat response ok");
                Ok(data)
            }
            Err(err) => {
                warn!(endpoint, %status, error = %err, "fixedfloat request rejected");
                Err(err)
            }
        }
    }

    /// Like [`request`](Self::request), decoding `data` into `T`
    pub async fn request_as<T>(&self, endpoint: &str, body: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let data = self.request(endpoint, body).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Serialize a payload and send it to `endpoint`
    pub(crate) async fn post_json<B>(&self, endpoint: &str, payload: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(payload)?;
        self.request(endpoint, &body).await
    }
}

fn normalize_base_url(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
