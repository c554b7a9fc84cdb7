//! Configuration surface: TOML files and `SENDSMS_*` environment variables.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{
    CallbackUrl, Charset, DataCoding, MessageClass, MessageOptions, ReportMask, SenderId,
    STANDARD_OPERATIONS, ValidationError,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{var} environment variable is required")]
    MissingEnv { var: &'static str },

    #[error("invalid value for {var}: {value}")]
    InvalidEnv { var: &'static str, value: String },
}

#[derive(Debug, Clone, Deserialize)]
/// Gateway configuration as supplied by the host application.
///
/// The shape mirrors the gateway's published settings: credentials, the
/// endpoint URL, per-message defaults, and the logical operation mapping.
pub struct GatewayConfig {
    pub username: String,
    pub password: String,
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default)]
    pub debug: bool,
    #[serde(default)]
    pub messages: MessageDefaults,
    #[serde(default = "default_operations")]
    pub operations: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
/// Per-message defaults applied by [`SendsmsClient::send`](crate::SendsmsClient::send).
pub struct MessageDefaults {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub callback_url: Option<String>,
    #[serde(default)]
    pub charset: Option<String>,
    #[serde(default)]
    pub coding: Option<u8>,
    /// Negative values mean "unset" (kept for parity with existing configs).
    #[serde(default)]
    pub class: Option<i8>,
    #[serde(default)]
    pub auto_detect_encoding: Option<bool>,
    /// Report mask bits: 1 delivered, 2 undelivered, 4 queued at network,
    /// 8 sent to network, 16 failed at network. 19 = delivered +
    /// undelivered + failed at network.
    #[serde(default = "default_report_mask")]
    pub report_mask: u16,
}

impl Default for MessageDefaults {
    fn default() -> Self {
        Self {
            from: None,
            callback_url: None,
            charset: None,
            coding: None,
            class: None,
            auto_detect_encoding: None,
            report_mask: default_report_mask(),
        }
    }
}

impl MessageDefaults {
    /// Convert the raw config values into validated [`MessageOptions`].
    ///
    /// Empty strings count as unset, as env-sourced configs often carry
    /// them.
    pub fn to_options(&self) -> Result<MessageOptions, ValidationError> {
        let from = match self.from.as_deref() {
            Some(value) if !value.trim().is_empty() => Some(SenderId::new(value)?),
            _ => None,
        };
        let callback_url = match self.callback_url.as_deref() {
            Some(value) if !value.trim().is_empty() => Some(CallbackUrl::new(value)?),
            _ => None,
        };
        let charset = match self.charset.as_deref() {
            Some(value) if !value.trim().is_empty() => Some(Charset::new(value)?),
            _ => None,
        };
        let class = match self.class {
            Some(value) if value >= 0 => Some(MessageClass::new(value as u8)?),
            _ => None,
        };

        Ok(MessageOptions {
            from,
            report_mask: ReportMask::new(self.report_mask)?,
            callback_url,
            charset,
            coding: self.coding.map(DataCoding::new),
            class,
            auto_detect_encoding: self.auto_detect_encoding,
            short_url: None,
        })
    }
}

fn default_url() -> String {
    "https://api.sendsms.ro/json".to_owned()
}

fn default_report_mask() -> u16 {
    19
}

/// The standard logical operation mapping, as a config default.
pub fn default_operations() -> BTreeMap<String, String> {
    STANDARD_OPERATIONS
        .iter()
        .map(|(logical, action)| ((*logical).to_owned(), (*action).to_owned()))
        .collect()
}

impl GatewayConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Load a configuration from `SENDSMS_*` environment variables.
    ///
    /// `SENDSMS_USERNAME` and `SENDSMS_PASSWORD` are required; the
    /// remaining variables (`SENDSMS_URL`, `SENDSMS_DEBUG`,
    /// `SENDSMS_FROM`, `SENDSMS_CALLBACK`, `SENDSMS_CHARSET`,
    /// `SENDSMS_CODING`, `SENDSMS_CLASS`, `SENDSMS_AUTODETECT_ENCODING`,
    /// `SENDSMS_MASK`) fall back to the defaults. Unset and empty
    /// variables are equivalent.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|var| std::env::var(var).ok())
    }

    fn from_env_with(
        lookup: impl Fn(&'static str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let get = |var: &'static str| {
            lookup(var).filter(|value| !value.trim().is_empty())
        };

        let username = get("SENDSMS_USERNAME").ok_or(ConfigError::MissingEnv {
            var: "SENDSMS_USERNAME",
        })?;
        let password = get("SENDSMS_PASSWORD").ok_or(ConfigError::MissingEnv {
            var: "SENDSMS_PASSWORD",
        })?;

        Ok(Self {
            username,
            password,
            url: get("SENDSMS_URL").unwrap_or_else(default_url),
            debug: parse_env("SENDSMS_DEBUG", get("SENDSMS_DEBUG"), parse_bool)?
                .unwrap_or(false),
            messages: MessageDefaults {
                from: get("SENDSMS_FROM"),
                callback_url: get("SENDSMS_CALLBACK"),
                charset: get("SENDSMS_CHARSET"),
                coding: parse_env("SENDSMS_CODING", get("SENDSMS_CODING"), parse_num::<u8>)?,
                class: parse_env("SENDSMS_CLASS", get("SENDSMS_CLASS"), parse_num::<i8>)?,
                auto_detect_encoding: parse_env(
                    "SENDSMS_AUTODETECT_ENCODING",
                    get("SENDSMS_AUTODETECT_ENCODING"),
                    parse_bool,
                )?,
                report_mask: parse_env("SENDSMS_MASK", get("SENDSMS_MASK"), parse_num::<u16>)?
                    .unwrap_or_else(default_report_mask),
            },
            operations: default_operations(),
        })
    }
}

fn parse_env<T>(
    var: &'static str,
    value: Option<String>,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, ConfigError> {
    match value {
        None => Ok(None),
        Some(raw) => parse(raw.trim())
            .map(Some)
            .ok_or(ConfigError::InvalidEnv { var, value: raw }),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_num<T: std::str::FromStr>(value: &str) -> Option<T> {
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn minimal_toml_gets_the_documented_defaults() {
        let config = GatewayConfig::from_toml_str(
            r#"
            username = "user"
            password = "secret"
            "#,
        )
        .unwrap();

        assert_eq!(config.url, "https://api.sendsms.ro/json");
        assert!(!config.debug);
        assert_eq!(config.messages.report_mask, 19);
        assert_eq!(config.operations, default_operations());
        assert_eq!(
            config.operations.get("send").map(String::as_str),
            Some("message_send")
        );
    }

    #[test]
    fn full_toml_round_trips_every_section() {
        let config = GatewayConfig::from_toml_str(
            r#"
            username = "user"
            password = "secret"
            url = "https://example.invalid/json"
            debug = true

            [messages]
            from = "SHOP"
            callback_url = "https://example.com/dlr"
            charset = "UTF-8"
            coding = 8
            class = 1
            auto_detect_encoding = true
            report_mask = 7

            [operations]
            send = "message_send"
            blacklist = "blacklist_get_list"
            "#,
        )
        .unwrap();

        assert!(config.debug);
        assert_eq!(config.messages.from.as_deref(), Some("SHOP"));
        assert_eq!(config.messages.class, Some(1));
        assert_eq!(config.operations.len(), 2);
        assert_eq!(
            config.operations.get("blacklist").map(String::as_str),
            Some("blacklist_get_list")
        );
    }

    #[test]
    fn to_options_validates_and_skips_unset_values() {
        let defaults = MessageDefaults {
            from: Some("SHOP".to_owned()),
            callback_url: Some("".to_owned()),
            charset: Some("UTF-8".to_owned()),
            coding: Some(8),
            class: Some(-1),
            auto_detect_encoding: Some(true),
            report_mask: 19,
        };

        let options = defaults.to_options().unwrap();
        assert_eq!(options.from.as_ref().map(|s| s.as_str()), Some("SHOP"));
        assert!(options.callback_url.is_none());
        assert_eq!(options.charset.as_ref().map(|c| c.as_str()), Some("UTF-8"));
        assert_eq!(options.coding.map(|c| c.value()), Some(8));
        assert!(options.class.is_none());
        assert_eq!(options.auto_detect_encoding, Some(true));
        assert_eq!(options.report_mask.value(), 19);
    }

    #[test]
    fn to_options_rejects_out_of_range_values() {
        let defaults = MessageDefaults {
            report_mask: 32,
            ..Default::default()
        };
        assert!(matches!(
            defaults.to_options(),
            Err(ValidationError::ReportMaskOutOfRange { .. })
        ));

        let defaults = MessageDefaults {
            class: Some(4),
            ..Default::default()
        };
        assert!(matches!(
            defaults.to_options(),
            Err(ValidationError::MessageClassOutOfRange { .. })
        ));

        let defaults = MessageDefaults {
            callback_url: Some("not a url".to_owned()),
            ..Default::default()
        };
        assert!(matches!(
            defaults.to_options(),
            Err(ValidationError::InvalidCallbackUrl { .. })
        ));
    }

    #[test]
    fn env_loading_requires_credentials() {
        let empty = HashMap::<&str, &str>::new();
        let err = GatewayConfig::from_env_with(|var| {
            empty.get(var).map(|value| (*value).to_owned())
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingEnv {
                var: "SENDSMS_USERNAME"
            }
        ));
    }

    #[test]
    fn env_loading_parses_and_defaults() {
        let vars = HashMap::from([
            ("SENDSMS_USERNAME", "user"),
            ("SENDSMS_PASSWORD", "secret"),
            ("SENDSMS_DEBUG", "true"),
            ("SENDSMS_FROM", "SHOP"),
            ("SENDSMS_MASK", "7"),
            ("SENDSMS_CLASS", ""),
        ]);

        let config = GatewayConfig::from_env_with(|var| {
            vars.get(var).map(|value| (*value).to_owned())
        })
        .unwrap();

        assert_eq!(config.username, "user");
        assert!(config.debug);
        assert_eq!(config.url, "https://api.sendsms.ro/json");
        assert_eq!(config.messages.from.as_deref(), Some("SHOP"));
        assert_eq!(config.messages.report_mask, 7);
        assert!(config.messages.class.is_none());
        assert_eq!(config.operations, default_operations());
    }

    #[test]
    fn env_loading_rejects_unparseable_values() {
        let vars = HashMap::from([
            ("SENDSMS_USERNAME", "user"),
            ("SENDSMS_PASSWORD", "secret"),
            ("SENDSMS_MASK", "lots"),
        ]);

        let err = GatewayConfig::from_env_with(|var| {
            vars.get(var).map(|value| (*value).to_owned())
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnv {
                var: "SENDSMS_MASK",
                ..
            }
        ));
    }
}
