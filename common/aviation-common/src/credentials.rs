//! Upstream credentials
//!
//! Read from the process environment once, at startup. Secrets are held in
//! [`SecretString`] so they never show up in `Debug` output or logs.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

/// FAA client id variable, shared by charts, NOTAM, airports and precipitation
pub const FAA_CLIENT_ID: &str = "FAA_CLIENT_ID";
/// FAA client secret variable
pub const FAA_CLIENT_SECRET: &str = "FAA_CLIENT_SECRET";
/// API Ninjas key for the aircraft specification lookup
pub const API_NINJA_KEY: &str = "API_NINJA_KEY";

/// Client id/secret pair sent as `client_id` / `client_secret` headers
#[derive(Debug)]
pub struct FaaCredentials {
    client_id: SecretString,
    client_secret: SecretString,
}

impl FaaCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: secret(client_id.into()),
            client_secret: secret(client_secret.into()),
        }
    }

    pub fn client_id(&self) -> &str {
        self.client_id.expose_secret()
    }

    pub fn client_secret(&self) -> &str {
        self.client_secret.expose_secret()
    }
}

/// API key sent as the `X-Api-Key` header
#[derive(Debug)]
pub struct ApiKey(SecretString);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(secret(key.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

fn secret(value: String) -> SecretString {
    SecretString::new(value.into_boxed_str())
}

/// Every credential the workspace knows about
///
/// A credential is present only when all of its variables are set and
/// non-blank; there is no partially configured state. Cloning shares the
/// underlying secrets.
#[derive(Debug, Default, Clone)]
pub struct Credentials {
    pub faa: Option<Arc<FaaCredentials>>,
    pub aircraft: Option<Arc<ApiKey>>,
}

impl Credentials {
    /// Read credentials from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let faa = match (non_blank(FAA_CLIENT_ID), non_blank(FAA_CLIENT_SECRET)) {
            (Some(id), Some(client_secret)) => Some(Arc::new(FaaCredentials::new(id, client_secret))),
            _ => None,
        };

        Self {
            faa,
            aircraft: non_blank(API_NINJA_KEY).map(|key| Arc::new(ApiKey::new(key))),
        }
    }

    pub fn has_faa(&self) -> bool {
        self.faa.is_some()
    }

    pub fn has_aircraft_key(&self) -> bool {
        self.aircraft.is_some()
    }

    /// Credentials for tests and embedding: FAA pair and aircraft key given directly
    pub fn with_faa(mut self, client_id: &str, client_secret: &str) -> Self {
        self.faa = Some(Arc::new(FaaCredentials::new(client_id, client_secret)));
        self
    }

    pub fn with_aircraft_key(mut self, key: &str) -> Self {
        self.aircraft = Some(Arc::new(ApiKey::new(key)));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_empty_environment() {
        let creds = Credentials::from_lookup(lookup(&[]));
        assert!(!creds.has_faa());
        assert!(!creds.has_aircraft_key());
    }

    #[test]
    fn test_faa_requires_both_halves() {
        let creds = Credentials::from_lookup(lookup(&[(FAA_CLIENT_ID, "id")]));
        assert!(!creds.has_faa());

        let creds = Credentials::from_lookup(lookup(&[
            (FAA_CLIENT_ID, "id"),
            (FAA_CLIENT_SECRET, "  "),
        ]));
        assert!(!creds.has_faa());

        let creds = Credentials::from_lookup(lookup(&[
            (FAA_CLIENT_ID, "id"),
            (FAA_CLIENT_SECRET, "secret"),
        ]));
        let faa = creds.faa.unwrap();
        assert_eq!(faa.client_id(), "id");
        assert_eq!(faa.client_secret(), "secret");
    }

    #[test]
    fn test_debug_output_redacts_secrets() {
        let creds = Credentials::from_lookup(lookup(&[
            (FAA_CLIENT_ID, "visible-id"),
            (FAA_CLIENT_SECRET, "hunter2"),
            (API_NINJA_KEY, "ninja-key"),
        ]));
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("ninja-key"));
    }
}
