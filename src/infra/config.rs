use std::env;

use config::ConfigError;
use serde::Deserialize;
use url::Url;

const CONFIG_PATH_ENV: &str = "SONGBOOK_CONFIG";
const ENV_PREFIX: &str = "SONGBOOK";

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_name: String,
    pub db_password: String,
    pub db_sslmode: String,
    /// Used verbatim instead of the `db_*` keys when set
    #[serde(default)]
    pub database_url: Option<String>,
}

impl Config {
    /// Reads the optional `config` file, then `SONGBOOK_*` environment
    /// variables on top of it.
    pub fn init() -> Result<Self, ConfigError> {
        let path =
            env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "config".to_string());

        config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080)?
            .set_default("db_host", "localhost")?
            .set_default("db_port", 5432)?
            .set_default("db_sslmode", "disable")?
            .add_source(config::File::with_name(&path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
    }

    pub fn database_url(&self) -> Result<String, ConfigError> {
        if let Some(url) = &self.database_url {
            return Ok(url.clone());
        }

        let invalid = |field: &str| {
            ConfigError::Message(format!("Invalid database {field}"))
        };

        let mut url = Url::parse("postgres://localhost")
            .map_err(|e| ConfigError::Message(e.to_string()))?;

        url.set_host(Some(&self.db_host))
            .map_err(|_| invalid("host"))?;
        url.set_port(Some(self.db_port))
            .map_err(|()| invalid("port"))?;
        url.set_username(&self.db_user)
            .map_err(|()| invalid("user"))?;
        url.set_password(Some(&self.db_password))
            .map_err(|()| invalid("password"))?;
        url.set_path(&self.db_name);
        url.query_pairs_mut()
            .append_pair("sslmode", &self.db_sslmode);

        Ok(url.into())
    }
}
