//! Connection configuration for [`Db::connect`](crate::Db::connect).

use serde::Deserialize;

fn default_driver() -> String {
    "postgres".to_string()
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

/// Connection parameters consumed once at connect time.
///
/// Loadable from any serde source (TOML/JSON/env layer), or assembled with
/// the builder-style setters.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectConfig {
    /// Driver name; only `postgres` (alias `pgsql`) is supported.
    #[serde(default = "default_driver")]
    pub driver: String,
    /// Database host.
    #[serde(default = "default_host")]
    pub host: String,
    /// Database port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Database name.
    pub dbname: String,
    /// Extra driver options, appended verbatim to the connection string
    /// (`key=value` pairs separated by spaces).
    #[serde(default)]
    pub options: String,
    /// Username.
    pub username: String,
    /// Password.
    #[serde(default)]
    pub password: String,
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self {
            driver: default_driver(),
            host: default_host(),
            port: default_port(),
            dbname: String::new(),
            options: String::new(),
            username: String::new(),
            password: String::new(),
        }
    }
}

impl ConnectConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the driver name.
    pub fn driver(mut self, driver: impl Into<String>) -> Self {
        self.driver = driver.into();
        self
    }

    /// Set the host.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the database name.
    pub fn dbname(mut self, dbname: impl Into<String>) -> Self {
        self.dbname = dbname.into();
        self
    }

    /// Set extra driver options.
    pub fn options(mut self, options: impl Into<String>) -> Self {
        self.options = options.into();
        self
    }

    /// Set the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Set the password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Whether the configured driver is one this layer can connect with.
    pub(crate) fn driver_supported(&self) -> bool {
        matches!(self.driver.as_str(), "postgres" | "postgresql" | "pgsql")
    }

    /// Render the driver key/value connection string.
    pub(crate) fn conn_string(&self) -> String {
        let mut conn = format!(
            "host={} port={} dbname={} user={}",
            self.host, self.port, self.dbname, self.username
        );
        if !self.password.is_empty() {
            conn.push_str(&format!(" password={}", self.password));
        }
        if !self.options.is_empty() {
            conn.push(' ');
            conn.push_str(&self.options);
        }
        conn
    }
}
