use std::env;
use std::fmt;
use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_DATA_DIR: &str = "data";

/// Deployment stage, read from `APP_ENV`. Unknown values fall back to development.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppEnvironment {
    #[default]
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("production") || value.eq_ignore_ascii_case("prod") {
            Self::Production
        } else if value.eq_ignore_ascii_case("test") || value.eq_ignore_ascii_case("ci") {
            Self::Test
        } else {
            Self::Development
        }
    }
}

/// Settings shared by the HTTP server and the one-shot CLI commands.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Reads `.env` when present, then the `APP_*` process variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source; missing keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("APP_ENV")
            .map(|value| AppEnvironment::parse(&value))
            .unwrap_or_default();

        let port = match lookup("APP_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => DEFAULT_PORT,
        };

        let data_dir = match lookup("APP_DATA_DIR") {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyDataDir),
            Some(raw) => PathBuf::from(raw.trim()),
            None => PathBuf::from(DEFAULT_DATA_DIR),
        };

        Ok(Self {
            environment,
            server: ServerConfig {
                host: lookup("APP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port,
            },
            telemetry: TelemetryConfig {
                log_level: lookup("APP_LOG_LEVEL")
                    .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            },
            catalog: CatalogConfig { data_dir },
        })
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `localhost` maps to the IPv4 loopback; anything else must be an IP literal.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host = self.host.trim();
        let ip = if host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            host.parse::<IpAddr>()
                .map_err(|source| ConfigError::InvalidHost {
                    value: self.host.clone(),
                    source,
                })?
        };
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Fallback `EnvFilter` directive used when `RUST_LOG` is unset.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Location of the static dataset.
///
/// The directory holds `systems.json` and an optional `components/` folder
/// with one audit file per system id.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub data_dir: PathBuf,
}

impl CatalogConfig {
    pub fn systems_path(&self) -> PathBuf {
        self.data_dir.join("systems.json")
    }

    pub fn components_dir(&self) -> PathBuf {
        self.data_dir.join("components")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort {
        value: String,
    },
    InvalidHost {
        value: String,
        source: AddrParseError,
    },
    EmptyDataDir,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort { value } => {
                write!(f, "APP_PORT '{value}' is not a port number")
            }
            ConfigError::InvalidHost { value, .. } => {
                write!(f, "APP_HOST '{value}' is not an IP address or localhost")
            }
            ConfigError::EmptyDataDir => f.write_str("APP_DATA_DIR is set but empty"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source, .. } => Some(source),
            _ => None,
        }
    }
}
