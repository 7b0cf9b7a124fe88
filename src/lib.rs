//! Client for the vpnapi.io IP reputation API.
//!
//! Looks up whether an IP address belongs to a VPN, proxy, Tor exit node or
//! relay, along with its location and owning network.
//!
//! # Features
//!
//! - **Single lookup** - One GET per address, decoded into [`Response`]
//! - **Error taxonomy** - Rate limiting (429), other failing statuses, decode
//!   and transport failures are distinguishable via [`ErrorKind`]
//! - **Observers** - Inspect the redacted request URL and raw response body
//! - **Rendering** - Stable text rendering for logs and terminals
//!
//! # Example
//!
//! ```no_run
//! # async fn run() -> Result<(), vpnapi::LookupError> {
//! let client = vpnapi::LookupClient::new("my-api-key");
//! let response = client.query("8.8.8.8").await?;
//! print!("{}", vpnapi::render::response(&response));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod observer;
pub mod render;
pub mod response;

pub use client::{LookupClient, LookupClientBuilder, DEFAULT_BASE_URL};
pub use config::Config;
pub use error::{ErrorKind, LookupError};
pub use observer::{RequestObserver, ResponseObserver, TracingObserver, REDACTED_KEY};
pub use response::{Location, Network, Response, Security};
