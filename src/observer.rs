//! Hooks for observing lookup traffic.
//!
//! Observers are invoked synchronously from within [`LookupClient::query`]
//! and return nothing. A panicking observer unwinds through `query` to
//! its caller; observers are expected not to fail.
//!
//! [`LookupClient::query`]: crate::LookupClient::query

use tracing::debug;

/// Marker substituted for the API key in URLs handed to observers.
pub const REDACTED_KEY: &str = "XXXXX";

/// Maximum length of the response summary logged by [`TracingObserver`].
const SUMMARY_LIMIT: usize = 80;

/// Called immediately before a request is sent.
pub trait RequestObserver: Send + Sync {
    /// `url` is the full request URL with the API key replaced by
    /// [`REDACTED_KEY`].
    fn on_request(&self, url: &str);
}

/// Called after the response body has been read, before it is interpreted.
///
/// Runs for every status code, including failures.
pub trait ResponseObserver: Send + Sync {
    /// `status` is the status line text (e.g. "429 Too Many Requests"),
    /// `body` the raw, unparsed body.
    fn on_response(&self, status: &str, body: &[u8]);
}

impl<F> RequestObserver for F
where
    F: Fn(&str) + Send + Sync,
{
    fn on_request(&self, url: &str) {
        self(url)
    }
}

impl<F> ResponseObserver for F
where
    F: Fn(&str, &[u8]) + Send + Sync,
{
    fn on_response(&self, status: &str, body: &[u8]) {
        self(status, body)
    }
}

/// Observer that logs requests and responses at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn on_request(&self, url: &str) {
        debug!(url = %url, "Querying vpnapi.io");
    }
}

impl ResponseObserver for TracingObserver {
    fn on_response(&self, status: &str, body: &[u8]) {
        debug!(response = %summarize(status, body), "Got response");
    }
}

/// Collapse whitespace in the body and trim the summary to a single log line.
fn summarize(status: &str, body: &[u8]) -> String {
    let body = String::from_utf8_lossy(body);
    let tokens: Vec<&str> = body.split_whitespace().collect();
    let mut summary = format!("{} \"{}", status, tokens.join(" "));

    if summary.len() > SUMMARY_LIMIT {
        let mut end = SUMMARY_LIMIT;
        while !summary.is_char_boundary(end) {
            end -= 1;
        }
        summary.truncate(end);
        summary.push_str("[...]");
    }
    summary.push('"');

    summary
}
