use std::fmt;

use ark_core::ArkError;

/// Default PostgreSQL port.
pub const DEFAULT_PORT: u16 = 5432;

/// Connection parameters for the sensor database.
///
/// `Debug` output redacts the password.
#[derive(Clone, PartialEq, Eq)]
pub struct PgConfig {
    /// Database host address.
    pub host: String,
    /// Port number.
    pub port: u16,
    /// Database user.
    pub user: String,
    /// Password for `user`.
    pub password: String,
    /// Database name.
    pub dbname: String,
}

impl Default for PgConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: DEFAULT_PORT,
            user: "postgres".to_string(),
            password: String::new(),
            dbname: "postgres".to_string(),
        }
    }
}

impl fmt::Debug for PgConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("dbname", &self.dbname)
            .finish()
    }
}

impl PgConfig {
    /// Environment variable names read by [`from_env`](Self::from_env).
    pub const ENV_HOST: &'static str = "POSTGRES_HOST";
    /// See [`ENV_HOST`](Self::ENV_HOST).
    pub const ENV_USER: &'static str = "POSTGRES_USER";
    /// See [`ENV_HOST`](Self::ENV_HOST).
    pub const ENV_PASSWORD: &'static str = "POSTGRES_PASSWORD";
    /// See [`ENV_HOST`](Self::ENV_HOST).
    pub const ENV_DB: &'static str = "POSTGRES_DB";
    /// See [`ENV_HOST`](Self::ENV_HOST).
    pub const ENV_PORT: &'static str = "POSTGRES_PORT";

    /// Read `POSTGRES_HOST`, `POSTGRES_USER`, `POSTGRES_PASSWORD`, `POSTGRES_DB`
    /// and `POSTGRES_PORT` from the process environment.
    ///
    /// Unset variables keep their [`Default`] value.
    ///
    /// # Errors
    /// Returns `ArkError::InvalidArg` if `POSTGRES_PORT` is set but not a valid port.
    pub fn from_env() -> Result<Self, ArkError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env) but reads variables through `lookup`.
    ///
    /// # Errors
    /// Returns `ArkError::InvalidArg` if the port value is not a valid port.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ArkError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(host) = lookup(Self::ENV_HOST) {
            cfg.host = host;
        }
        if let Some(user) = lookup(Self::ENV_USER) {
            cfg.user = user;
        }
        if let Some(password) = lookup(Self::ENV_PASSWORD) {
            cfg.password = password;
        }
        if let Some(db) = lookup(Self::ENV_DB) {
            cfg.dbname = db;
        }
        if let Some(port) = lookup(Self::ENV_PORT) {
            cfg.port = port.trim().parse().map_err(|_| {
                ArkError::InvalidArg(format!("{}: '{port}' is not a valid port", Self::ENV_PORT))
            })?;
        }
        Ok(cfg)
    }

    /// Driver-level configuration for these parameters.
    #[must_use]
    pub fn to_driver_config(&self) -> tokio_postgres::Config {
        let mut c = tokio_postgres::Config::new();
        c.host(&self.host)
            .port(self.port)
            .user(&self.user)
            .dbname(&self.dbname)
            .application_name("ark");
        if !self.password.is_empty() {
            c.password(&self.password);
        }
        c
    }
}
