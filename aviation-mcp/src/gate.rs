//! Credential gate
//!
//! Decides, once at startup, which domains are enabled. The same value
//! filters the tool listing and guards every call, so the two always agree.

use std::fmt;

use aviation_common::Credentials;

/// A group of tools backed by one upstream provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Weather,
    Charts,
    Notam,
    Aircraft,
    Airports,
    Precipitation,
}

impl Domain {
    /// Every domain, in catalog order
    pub const ALL: [Domain; 6] = [
        Domain::Weather,
        Domain::Charts,
        Domain::Notam,
        Domain::Aircraft,
        Domain::Airports,
        Domain::Precipitation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Domain::Weather => "Weather",
            Domain::Charts => "Charts",
            Domain::Notam => "NOTAM",
            Domain::Aircraft => "Aircraft",
            Domain::Airports => "Airports",
            Domain::Precipitation => "Precipitation",
        }
    }

    /// What must be configured for this domain, or `None` if it is open
    pub fn requirement(self) -> Option<&'static str> {
        match self {
            Domain::Weather => None,
            Domain::Charts | Domain::Notam | Domain::Airports | Domain::Precipitation => {
                Some("FAA API credentials: set FAA_CLIENT_ID and FAA_CLIENT_SECRET")
            }
            Domain::Aircraft => Some("an API Ninjas key: set API_NINJA_KEY"),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A call was routed to a domain whose credentials are not configured
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{domain} tools require {requirement}")]
pub struct GateClosed {
    pub domain: Domain,
    pub requirement: &'static str,
}

/// Which domains may be listed and called
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CredentialGate {
    faa: bool,
    aircraft: bool,
}

impl CredentialGate {
    pub fn from_credentials(credentials: &Credentials) -> Self {
        Self {
            faa: credentials.has_faa(),
            aircraft: credentials.has_aircraft_key(),
        }
    }

    pub fn is_enabled(&self, domain: Domain) -> bool {
        match domain {
            Domain::Weather => true,
            Domain::Charts | Domain::Notam | Domain::Airports | Domain::Precipitation => self.faa,
            Domain::Aircraft => self.aircraft,
        }
    }

    pub fn check(&self, domain: Domain) -> Result<(), GateClosed> {
        match domain.requirement() {
            Some(requirement) if !self.is_enabled(domain) => Err(GateClosed {
                domain,
                requirement,
            }),
            _ => Ok(()),
        }
    }

    pub fn enabled_domains(&self) -> Vec<Domain> {
        Domain::ALL
            .into_iter()
            .filter(|d| self.is_enabled(*d))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_credentials_enables_weather_only() {
        let gate = CredentialGate::from_credentials(&Credentials::default());
        assert_eq!(gate.enabled_domains(), vec![Domain::Weather]);
    }

    #[test]
    fn test_faa_pair_enables_faa_domains() {
        let credentials = Credentials::default().with_faa("id", "secret");
        let gate = CredentialGate::from_credentials(&credentials);
        assert_eq!(
            gate.enabled_domains(),
            vec![
                Domain::Weather,
                Domain::Charts,
                Domain::Notam,
                Domain::Airports,
                Domain::Precipitation
            ]
        );
        assert!(!gate.is_enabled(Domain::Aircraft));
    }

    #[test]
    fn test_half_configured_faa_pair_is_disabled() {
        let credentials = Credentials::from_lookup(|key| match key {
            "FAA_CLIENT_ID" => Some("id".to_string()),
            "FAA_CLIENT_SECRET" => Some("  ".to_string()),
            _ => None,
        });
        let gate = CredentialGate::from_credentials(&credentials);
        assert!(!gate.is_enabled(Domain::Charts));
    }

    #[test]
    fn test_closed_gate_names_variables() {
        let gate = CredentialGate::default();
        let err = gate.check(Domain::Notam).unwrap_err();
        assert_eq!(
            err.to_string(),
            "NOTAM tools require FAA API credentials: set FAA_CLIENT_ID and FAA_CLIENT_SECRET"
        );

        let err = gate.check(Domain::Aircraft).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Aircraft tools require an API Ninjas key: set API_NINJA_KEY"
        );

        assert!(gate.check(Domain::Weather).is_ok());
    }
}
