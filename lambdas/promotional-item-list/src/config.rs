use crate::error::ConfigError;
use model::limit::Limit;
use std::env;
use std::fmt;

pub const ENV: &str = "ENV";
pub const DEFAULT_DATA_LIMIT: &str = "DEFAULT_DATA_LIMIT";
pub const DB_HOST: &str = "DB_HOST";
pub const DB_PORT: &str = "DB_PORT";
pub const DB_USER_NAME: &str = "DB_USER_NAME";
pub const DB_PASSWORD: &str = "DB_PASSWORD";

/// Deployment stage taken from `ENV`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    Dev,
    Itg,
    Other(String),
}

impl Stage {
    pub fn from_name(name: &str) -> Stage {
        match name {
            "dev" => Stage::Dev,
            "itg" => Stage::Itg,
            other => Stage::Other(other.to_owned()),
        }
    }

    /// Non-production stages log at debug level.
    pub fn is_verbose(&self) -> bool {
        matches!(self, Stage::Dev | Stage::Itg)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Stage::Dev => write!(f, "dev"),
            Stage::Itg => write!(f, "itg"),
            Stage::Other(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub user_name: String,
    pub password: String,
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user_name", &self.user_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub stage: Stage,
    pub default_limit: Limit,
    pub database: Option<DatabaseSettings>,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let stage = lookup(ENV).ok_or(ConfigError::Missing(ENV))?;
        let default_limit =
            lookup(DEFAULT_DATA_LIMIT).ok_or(ConfigError::Missing(DEFAULT_DATA_LIMIT))?;

        Ok(Config {
            stage: Stage::from_name(&stage),
            default_limit: Limit::from_default(&default_limit),
            database: database_settings(&lookup)?,
        })
    }
}

// Either none of the DB_* variables are set, or all of them.
fn database_settings<F>(lookup: &F) -> Result<Option<DatabaseSettings>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let vars = [DB_HOST, DB_PORT, DB_USER_NAME, DB_PASSWORD];
    if vars.iter().all(|&var| lookup(var).is_none()) {
        return Ok(None);
    }

    let require = |var: &'static str| lookup(var).ok_or(ConfigError::IncompleteDatabase(var));
    let port = require(DB_PORT)?;

    Ok(Some(DatabaseSettings {
        host: require(DB_HOST)?,
        port: port
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort { value: port.clone() })?,
        user_name: require(DB_USER_NAME)?,
        password: require(DB_PASSWORD)?,
    }))
}
