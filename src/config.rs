use std::net::SocketAddr;
use std::sync::LazyLock;

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Runtime configuration, read once at startup from the environment.
///
/// Every field can be overridden with a `VAULT_` prefixed variable, e.g.
/// `VAULT_DATABASE_URL` or `VAULT_KEY` -> `vault key`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub database_url: String,
    /// Shared key protecting the restriction administration routes. Leaving
    /// it empty disables those routes entirely.
    pub key: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            database_url: "sqlite:passvault.sqlite".to_string(),
            key: String::new(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("VAULT_"))
            .extract()
            .expect("invalid VAULT_* configuration")
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::load);
