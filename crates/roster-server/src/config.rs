use std::net::SocketAddr;
use std::path::Path;

use roster_store::{IdPolicy, UpdatePolicy};
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Port the service listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 8080;

/// Server configuration, loadable from TOML. Missing keys take their
/// default value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub id_policy: IdPolicy,
    pub update_policy: UpdatePolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            id_policy: IdPolicy::default(),
            update_policy: UpdatePolicy::default(),
        }
    }
}

impl ServerConfig {
    /// Read a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
            .map_err(|e| ServerError::Config(format!("{}: {e}", path.display())))
    }

    pub fn from_toml(text: &str) -> ServerResult<Self> {
        toml::from_str(text).map_err(|e| ServerError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> ServerResult<String> {
        toml::to_string_pretty(self).map_err(|e| ServerError::Config(e.to_string()))
    }
}
