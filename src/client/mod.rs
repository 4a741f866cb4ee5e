//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    ApiToken, BalanceResponse, CostEstimate, QuickSend, QuickSendResponse, Status, StatusCode,
    ValidationError,
};

const DEFAULT_BASE_URL: &str = "https://api.sewmrsms.co.tz/api/";
const QUICK_SEND_PATH: &str = "v1/sms/quick-send";
const BALANCE_PATH: &str = "v1/account/balance";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        bearer: &'a str,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;

    fn get<'a>(
        &'a self,
        url: &'a str,
        bearer: &'a str,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        bearer: &'a str,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .bearer_auth(bearer)
                .json(&body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }

    fn get<'a>(
        &'a self,
        url: &'a str,
        bearer: &'a str,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.get(url).bearer_auth(bearer).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Authentication credentials for SewMR API calls.
///
/// SewMR authenticates every request with an API token sent as an
/// `Authorization: Bearer` header.
pub struct Auth {
    token: ApiToken,
}

impl Auth {
    /// Create credentials and validate that the token is non-empty after trimming.
    pub fn api_token(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            token: ApiToken::new(value)?,
        })
    }

    fn bearer(&self) -> &str {
        self.token.as_str()
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SewmrSmsClient`].
///
/// This error preserves:
/// - HTTP-level failures (transport failures or non-2xx bodies that are not
///   the API envelope),
/// - API-level failures (`success: false` envelopes, whatever the HTTP status),
/// - validation/parse failures.
pub enum SewmrSmsError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status with a body the client could not interpret.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// SewMR returned a `success: false` envelope with a status code/text.
    #[error("API error: {status_code:?} {status_text:?}")]
    Api {
        status_code: StatusCode,
        status_text: Option<String>,
    },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// A configured endpoint or base URL is not a valid URL.
    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`SewmrSmsClient`].
///
/// Use this when you need to point at a staging deployment or customize the
/// timeout or user-agent.
pub struct SewmrSmsClientBuilder {
    auth: Auth,
    base_url: String,
    quick_send_endpoint: Option<String>,
    balance_endpoint: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SewmrSmsClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            base_url: DEFAULT_BASE_URL.to_owned(),
            quick_send_endpoint: None,
            balance_endpoint: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL; endpoint paths are joined onto it.
    ///
    /// A missing trailing slash is added, so `https://host/api` and
    /// `https://host/api/` behave the same.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the full `sms/quick-send` endpoint URL, bypassing the base URL.
    pub fn quick_send_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.quick_send_endpoint = Some(endpoint.into());
        self
    }

    /// Override the full `account/balance` endpoint URL, bypassing the base URL.
    pub fn balance_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.balance_endpoint = Some(endpoint.into());
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

    /// Build a [`SewmrSmsClient`].
    pub fn build(self) -> Result<SewmrSmsClient, SewmrSmsError> {
        let mut base = self.base_url;
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = Url::parse(&base)?;

        let quick_send_endpoint =
            resolve_endpoint(&base, self.quick_send_endpoint, QUICK_SEND_PATH)?;
        let balance_endpoint = resolve_endpoint(&base, self.balance_endpoint, BALANCE_PATH)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SewmrSmsError::Transport(Box::new(err)))?;

        Ok(SewmrSmsClient {
            auth: self.auth,
            quick_send_endpoint,
            balance_endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn resolve_endpoint(
    base: &Url,
    explicit: Option<String>,
    path: &str,
) -> Result<String, url::ParseError> {
    let url = match explicit {
        Some(endpoint) => Url::parse(&endpoint)?,
        None => base.join(path)?,
    };
    Ok(url.as_str().to_owned())
}

#[derive(Clone)]
/// High-level SewMR SMS client.
///
/// This type orchestrates request validation, JSON encoding, bearer
/// authentication, and response parsing. By default it talks to:
/// - `https://api.sewmrsms.co.tz/api/v1/sms/quick-send` for sending,
/// - `https://api.sewmrsms.co.tz/api/v1/account/balance` for the credit balance.
pub struct SewmrSmsClient {
    auth: Auth,
    quick_send_endpoint: String,
    balance_endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for SewmrSmsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SewmrSmsClient")
            .field("auth", &self.auth)
            .field("quick_send_endpoint", &self.quick_send_endpoint)
            .field("balance_endpoint", &self.balance_endpoint)
            .field("http", &"<dyn HttpTransport>")
            .finish()
    }
}

impl SewmrSmsClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`SewmrSmsClient::builder`].
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            quick_send_endpoint: format!("{DEFAULT_BASE_URL}{QUICK_SEND_PATH}"),
            balance_endpoint: format!("{DEFAULT_BASE_URL}{BALANCE_PATH}"),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: Auth) -> SewmrSmsClientBuilder {
        SewmrSmsClientBuilder::new(auth)
    }

    /// Estimate what [`SewmrSmsClient::quick_send`] would cost, locally.
    ///
    /// Pure computation, no I/O: one credit per SMS part per recipient. The
    /// response from the API carries the authoritative billed figure.
    pub fn estimate(&self, request: &QuickSend) -> CostEstimate {
        request.estimate()
    }

    /// Broadcast one message to the request's recipients through SewMR.
    ///
    /// Errors:
    /// - [`SewmrSmsError::Api`] when SewMR returns a `success: false`
    ///   envelope (SewMR reports failures such as insufficient credit with a
    ///   non-2xx HTTP status *and* a structured body; the body wins),
    /// - [`SewmrSmsError::HttpStatus`] for non-2xx responses without a
    ///   parseable envelope,
    /// - [`SewmrSmsError::Parse`] for 2xx responses with malformed bodies.
    pub async fn quick_send(&self, request: QuickSend) -> Result<QuickSendResponse, SewmrSmsError> {
        let body = crate::transport::encode_quick_send_json(&request);
        tracing::debug!(
            recipients = request.recipients().len(),
            parts = request.message().segmentation().parts,
            "dispatching quick-send"
        );

        let response = self
            .http
            .post_json(&self.quick_send_endpoint, self.auth.bearer(), body)
            .await
            .map_err(SewmrSmsError::Transport)?;

        let parsed = match crate::transport::decode_quick_send_json_response(&response.body) {
            Ok(parsed) => parsed,
            Err(err) if (200..=299).contains(&response.status) => {
                return Err(SewmrSmsError::Parse(Box::new(err)));
            }
            Err(_) => {
                return Err(SewmrSmsError::HttpStatus {
                    status: response.status,
                    body: non_empty_body(response.body),
                });
            }
        };

        if parsed.status != Status::Ok {
            return Err(SewmrSmsError::Api {
                status_code: parsed.status_code,
                status_text: parsed.status_text,
            });
        }

        tracing::debug!(
            status = parsed.status_code.as_i32(),
            credits = parsed.credits_spent,
            "quick-send accepted"
        );
        Ok(parsed)
    }

    /// Fetch the account's remaining credit balance through SewMR.
    ///
    /// Errors mirror [`SewmrSmsClient::quick_send`].
    pub async fn check_balance(&self) -> Result<BalanceResponse, SewmrSmsError> {
        let response = self
            .http
            .get(&self.balance_endpoint, self.auth.bearer())
            .await
            .map_err(SewmrSmsError::Transport)?;

        let parsed = match crate::transport::decode_balance_json_response(&response.body) {
            Ok(parsed) => parsed,
            Err(err) if (200..=299).contains(&response.status) => {
                return Err(SewmrSmsError::Parse(Box::new(err)));
            }
            Err(_) => {
                return Err(SewmrSmsError::HttpStatus {
                    status: response.status,
                    body: non_empty_body(response.body),
                });
            }
        };

        if parsed.status != Status::Ok {
            return Err(SewmrSmsError::Api {
                status_code: parsed.status_code,
                status_text: parsed.status_text,
            });
        }

        Ok(parsed)
    }
}

fn non_empty_body(body: String) -> Option<String> {
    if body.trim().is_empty() { None } else { Some(body) }
}
