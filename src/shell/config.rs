use std::net::SocketAddr;

use thiserror::Error;

use crate::modules::upgrades::adapters::outbound::psa_connectwise::ConnectWiseSettings;
use crate::modules::upgrades::adapters::outbound::ticketing_client::{
    DEFAULT_BOARD, DEFAULT_TEAM, DEFAULT_TIME_ZONE, TicketSettings,
};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

const CW_BASE_URL: &str = "CW_BASE_URL";
const CW_COMPANY_ID: &str = "CW_COMPANY_ID";
const CW_PUBLIC_API_KEY: &str = "CW_PUBLIC_API_KEY";
const CW_PRIVATE_API_KEY: &str = "CW_PRIVATE_API_KEY";
const CW_CLIENT_ID: &str = "CW_CLIENT_ID";
const CW_CREDENTIALS: [&str; 5] = [
    CW_BASE_URL,
    CW_COMPANY_ID,
    CW_PUBLIC_API_KEY,
    CW_PRIVATE_API_KEY,
    CW_CLIENT_ID,
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("incomplete ConnectWise configuration; missing {}", .0.join(", "))]
    Incomplete(Vec<&'static str>),

    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    /// `None` runs against the in-memory PSA.
    pub connectwise: Option<ConnectWiseSettings>,
    pub tickets: TicketSettings,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind_addr = get("APP_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                key: "APP_BIND_ADDR",
                reason: e.to_string(),
            })?;

        let credentials: Vec<Option<String>> = CW_CREDENTIALS.iter().map(|key| get(key)).collect();
        let missing: Vec<&'static str> = CW_CREDENTIALS
            .iter()
            .zip(&credentials)
            .filter_map(|(key, value)| value.is_none().then_some(*key))
            .collect();
        let connectwise = match missing.len() {
            0 => {
                let mut values = credentials.into_iter().flatten();
                let mut next = || values.next().unwrap_or_default();
                Some(ConnectWiseSettings {
                    base_url: next(),
                    company_id: next(),
                    public_key: next(),
                    private_key: next(),
                    client_id: next(),
                })
            }
            n if n == CW_CREDENTIALS.len() => None,
            _ => return Err(ConfigError::Incomplete(missing)),
        };

        let tickets = TicketSettings {
            board: get("CW_BOARD_NAME").unwrap_or_else(|| DEFAULT_BOARD.to_string()),
            team: get("CW_TEAM_NAME").unwrap_or_else(|| DEFAULT_TEAM.to_string()),
            time_zone: get("CW_TIME_ZONE").unwrap_or_else(|| DEFAULT_TIME_ZONE.to_string()),
        };

        Ok(Self {
            bind_addr,
            connectwise,
            tickets,
        })
    }
}

#[cfg(test)]
mod settings_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| env.get(key).cloned())
    }

    const FULL: [(&str, &str); 5] = [
        ("CW_BASE_URL", "https://api-na.myconnectwise.net/v4_6_release/apis/3.0"),
        ("CW_COMPANY_ID", "acme"),
        ("CW_PUBLIC_API_KEY", "pub"),
        ("CW_PRIVATE_API_KEY", "priv"),
        ("CW_CLIENT_ID", "client-123"),
    ];

    #[rstest]
    fn it_should_fall_back_to_defaults_without_connectwise() {
        let settings = settings(&[]).unwrap();
        assert_eq!(settings.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(settings.connectwise, None);
        assert_eq!(settings.tickets, TicketSettings::default());
    }

    #[rstest]
    fn it_should_read_complete_connectwise_credentials() {
        let mut pairs = FULL.to_vec();
        pairs.push(("CW_BOARD_NAME", "Projects"));
        pairs.push(("APP_BIND_ADDR", "127.0.0.1:3000"));

        let settings = settings(&pairs).unwrap();

        let connectwise = settings.connectwise.unwrap();
        assert_eq!(connectwise.company_id, "acme");
        assert_eq!(connectwise.client_id, "client-123");
        assert_eq!(settings.tickets.board, "Projects");
        assert_eq!(settings.tickets.team, DEFAULT_TEAM);
        assert_eq!(settings.bind_addr.port(), 3000);
    }

    #[rstest]
    fn it_should_name_missing_credentials() {
        let result = settings(&[("CW_BASE_URL", "https://x"), ("CW_CLIENT_ID", "  ")]);
        assert_eq!(
            result,
            Err(ConfigError::Incomplete(vec![
                "CW_COMPANY_ID",
                "CW_PUBLIC_API_KEY",
                "CW_PRIVATE_API_KEY",
                "CW_CLIENT_ID",
            ]))
        );
    }

    #[rstest]
    fn it_should_reject_an_invalid_bind_address() {
        let result = settings(&[("APP_BIND_ADDR", "localhost")]);
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                key: "APP_BIND_ADDR",
                ..
            })
        ));
    }
}
