//! vpnapi.io lookup client.

use crate::error::LookupError;
use crate::observer::{RequestObserver, ResponseObserver, REDACTED_KEY};
use crate::render::Rendered;
use crate::response::Response;
use reqwest::StatusCode;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Default lookup endpoint. The address is appended directly.
pub const DEFAULT_BASE_URL: &str = "https://vpnapi.io/api/";

/// Client for the vpnapi.io lookup API.
///
/// Cheap to clone; clones share the underlying connection pool and
/// observers. Safe to use from many tasks at once.
#[derive(Clone)]
pub struct LookupClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
    request_observer: Option<Arc<dyn RequestObserver>>,
    response_observer: Option<Arc<dyn ResponseObserver>>,
}

impl LookupClient {
    /// Create a client with default settings. Obtain an API key by
    /// registering at vpnapi.io.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
            request_observer: None,
            response_observer: None,
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: impl Into<String>) -> LookupClientBuilder {
        LookupClientBuilder::new(api_key)
    }

    /// Endpoint this client queries.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up details about `ip`.
    ///
    /// The address is not validated; the service decides what it accepts.
    /// A response carrying a `message` is still returned as `Ok`.
    pub async fn query(&self, ip: &str) -> Result<Response, LookupError> {
        let url = format!("{}{}?key=", self.base_url, ip);

        if let Some(observer) = &self.request_observer {
            observer.on_request(&format!("{}{}", url, REDACTED_KEY));
        }

        debug!(ip = %ip, "Starting vpnapi.io lookup");

        let response = self
            .client
            .get(format!("{}{}", url, self.api_key))
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.without_url()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| LookupError::Body(e.without_url()))?;

        if let Some(observer) = &self.response_observer {
            observer.on_response(&status.to_string(), &body);
        }

        // Only the 2xx range is decoded
        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!(ip = %ip, "vpnapi.io rate limit exceeded");
            return Err(LookupError::RateLimited);
        }
        if status.as_u16() > 299 {
            debug!(ip = %ip, status = status.as_u16(), "vpnapi.io returned an error status");
            return Err(LookupError::UnexpectedStatus(status.as_u16()));
        }

        let parsed: Response = serde_json::from_slice(&body)?;

        debug!(
            ip = %ip,
            vpn = parsed.security.vpn,
            proxy = parsed.security.proxy,
            tor = parsed.security.tor,
            relay = parsed.security.relay,
            response = %Rendered(&parsed),
            "vpnapi.io lookup complete"
        );

        Ok(parsed)
    }
}

impl fmt::Debug for LookupClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupClient")
            .field("api_key", &REDACTED_KEY)
            .field("base_url", &self.base_url)
            .field("request_observer", &self.request_observer.is_some())
            .field("response_observer", &self.response_observer.is_some())
            .finish()
    }
}

/// Builder for [`LookupClient`].
pub struct LookupClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    client: Option<reqwest::Client>,
    request_observer: Option<Arc<dyn RequestObserver>>,
    response_observer: Option<Arc<dyn ResponseObserver>>,
}

impl LookupClientBuilder {
    fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: None,
            client: None,
            request_observer: None,
            response_observer: None,
        }
    }

    /// Query a different endpoint. The address is appended verbatim, so the
    /// URL should end with `/`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overall request timeout. No timeout is applied by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// User-Agent header sent with every request.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a preconfigured HTTP client. Timeout and user agent settings on
    /// this builder are ignored in that case.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Observe each request URL, with the API key redacted.
    pub fn request_observer(mut self, observer: impl RequestObserver + 'static) -> Self {
        self.request_observer = Some(Arc::new(observer));
        self
    }

    /// Observe each raw response before it is interpreted.
    pub fn response_observer(mut self, observer: impl ResponseObserver + 'static) -> Self {
        self.response_observer = Some(Arc::new(observer));
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<LookupClient, LookupError> {
        let client = match self.client {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                builder.build().map_err(LookupError::Build)?
            }
        };

        Ok(LookupClient {
            api_key: self.api_key,
            base_url: self.base_url,
            client,
            request_observer: self.request_observer,
            response_observer: self.response_observer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::sync::Mutex;

    #[test]
    fn test_default_base_url() {
        let client = LookupClient::new("test-key");
        assert_eq!(client.base_url(), "https://vpnapi.io/api/");
    }

    #[test]
    fn test_builder_base_url() {
        let client = LookupClient::builder("test-key")
            .base_url("http://127.0.0.1:8080/api/")
            .timeout(Duration::from_secs(5))
            .user_agent("vpnapi-test/1.0")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8080/api/");
    }

    #[test]
    fn test_debug_redacts_key() {
        let client = LookupClient::new("super-secret-key");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("super-secret-key"));
        assert!(debug.contains(REDACTED_KEY));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LookupClient>();
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Port 9 on loopback is not expected to accept connections
        let seen = Arc::new(Mutex::new(Vec::<String>::new()));
        let seen_clone = Arc::clone(&seen);

        let client = LookupClient::builder("secret")
            .base_url("http://127.0.0.1:9/api/")
            .timeout(Duration::from_secs(5))
            .request_observer(move |url: &str| seen_clone.lock().unwrap().push(url.to_string()))
            .build()
            .unwrap();

        let err = client.query("1.2.3.4").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(!err.to_string().contains("secret"));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.as_slice(), ["http://127.0.0.1:9/api/1.2.3.4?key=XXXXX"]);
    }
}
