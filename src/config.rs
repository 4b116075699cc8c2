use anyhow::{Context, Result};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

// Consulted in order; the first one set wins
const PORT_VARS: [&str; 2] = ["API_PORT", "FASTAPIPORT"];

/// Listener configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Reads API_HOST and API_PORT (or legacy FASTAPIPORT), falling back to 0.0.0.0:8000
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match PORT_VARS.iter().find_map(|key| lookup(key).map(|raw| (key, raw))) {
            Some((key, raw)) => raw
                .trim()
                .parse()
                .with_context(|| format!("{key} must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(ServerConfig { host, port })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
