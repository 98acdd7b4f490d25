//! Aviation Common - shared plumbing for the aviation data servers
//!
//! - **Config**: upstream endpoints and HTTP settings ([`Config`])
//! - **Credentials**: FAA client pair and API Ninjas key, read from the environment
//! - **HTTP**: [`UpstreamClient`] with uniform non-2xx handling
//! - **Validation**: enumerated-value and required-field checks
//!
//! Domain crates build on these and never talk to `reqwest` directly.

pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod result;
pub mod validate;

pub use config::{Config, Endpoints, HttpConfig};
pub use credentials::{
    ApiKey, Credentials, FaaCredentials, API_NINJA_KEY, FAA_CLIENT_ID, FAA_CLIENT_SECRET,
};
pub use error::{AviationError, AviationResult};
pub use http::{join_url, Auth, Query, UpstreamClient};
pub use result::{into_tool_result, pretty_json};
