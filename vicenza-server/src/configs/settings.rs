use std::path::{Path, PathBuf};
use std::{env, io};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, UtcOffset};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Database {
    pub migration_path: Option<String>,
    pub clean_start: bool,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clock {
    pub utc_offset_hours: i8,
}

impl Clock {
    pub fn offset(&self) -> UtcOffset {
        UtcOffset::from_hms(self.utc_offset_hours, 0, 0).unwrap_or(UtcOffset::UTC)
    }

    /// Wall-clock time at the dashboard's location.
    pub fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.offset())
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self { utc_offset_hours: 0 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Weather {
    Mock {
        location: String,
    },
    OpenWeather {
        api_key: String,
        city: String,
        #[serde(default = "default_openweather_url")]
        base_url: String,
    },
}

fn default_openweather_url() -> String {
    String::from("https://api.openweathermap.org/data/2.5")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct News {
    pub feed_url: String,
    pub limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gateway {
    pub host: String,
    pub port: u16,
    pub client_id: String,
    pub topic: String,
    pub auth: Option<GatewayAuth>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayAuth {
    pub cert_path: String,
    pub key_path: String,
}

const DEFAULT_CONFIG: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../", "configs/default.toml"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub logger: Logger,
    pub database: Database,
    pub clock: Clock,
    pub weather: Weather,
    pub news: News,
    pub gateway: Option<Gateway>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or("development".into());

        Self::load(Self::layers(&run_mode).add_source(Self::environment()))
    }

    /// Built-in defaults overlaid by `configs/<run_mode>.toml` when present.
    fn layers(run_mode: &str) -> ConfigBuilder<DefaultState> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::with_name(&format!("configs/{run_mode}")).required(false))
    }

    /// `VICENZA_SERVER__PORT=8080` overrides `server.port`.
    fn environment() -> Environment {
        Environment::with_prefix("VICENZA")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let mut settings: Settings = builder.build()?.try_deserialize()?;

        UtcOffset::from_hms(settings.clock.utc_offset_hours, 0, 0)
            .map_err(|e| ConfigError::Message(format!("clock.utc_offset_hours: {e}")))?;

        if let Some(auth) = settings.gateway.as_mut().and_then(|g| g.auth.as_mut()) {
            auth.cert_path = normalize_path(&auth.cert_path)
                .map_err(|e| ConfigError::Message(e.to_string()))?
                .to_string_lossy()
                .to_string();
            auth.key_path = normalize_path(&auth.key_path)
                .map_err(|e| ConfigError::Message(e.to_string()))?
                .to_string_lossy()
                .to_string();
        }

        if let Some(migrate) = &settings.database.migration_path {
            if Path::new(migrate).is_dir() {
                let migrate_path = normalize_path(migrate)
                    .map_err(|e| ConfigError::Message(e.to_string()))?
                    .to_string_lossy()
                    .to_string();

                settings.database.migration_path = Some(migrate_path);
            } else {
                settings.database.migration_path = None;
            }
        }

        Ok(settings)
    }
}

fn normalize_path(path: &str) -> io::Result<PathBuf> {
    let path_buf = PathBuf::from(path);

    Ok(if path_buf.is_absolute() {
        path_buf
    } else {
        env::current_dir()?.join(&path_buf)
    })
}
