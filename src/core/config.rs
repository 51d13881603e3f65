use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

/// MongoDB connection settings
///
/// Database and collection names are fixed, see [`DatabaseConfig::DATABASE_NAME`]
/// and [`DatabaseConfig::TICKET_COLLECTION`].
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub connect_timeout: Duration,
    pub server_selection_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    /// Build the configuration from the process environment.
    ///
    /// A `.env` file, if any, must already be loaded by the caller.
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_PORT: u16 = 7171;

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_var("PORT", Self::DEFAULT_PORT)?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    pub const DATABASE_NAME: &'static str = "EventiqSuport";
    pub const TICKET_COLLECTION: &'static str = "suporte";

    const DEFAULT_MAX_POOL_SIZE: u32 = 10;
    const DEFAULT_MIN_POOL_SIZE: u32 = 0;
    const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
    const DEFAULT_SERVER_SELECTION_TIMEOUT_SECS: u64 = 30;

    pub fn from_env() -> Result<Self, String> {
        let connection_string = env::var("MONGODB_CONNECTION_STRING")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| "MONGODB_CONNECTION_STRING must be set".to_string())?;

        let max_pool_size = parse_var("DB_MAX_POOL_SIZE", Self::DEFAULT_MAX_POOL_SIZE)?;
        let min_pool_size = parse_var("DB_MIN_POOL_SIZE", Self::DEFAULT_MIN_POOL_SIZE)?;
        if min_pool_size > max_pool_size {
            return Err("DB_MIN_POOL_SIZE must not exceed DB_MAX_POOL_SIZE".to_string());
        }

        let connect_timeout_secs =
            parse_var("DB_CONNECT_TIMEOUT_SECS", Self::DEFAULT_CONNECT_TIMEOUT_SECS)?;
        let server_selection_timeout_secs = parse_var(
            "DB_SERVER_SELECTION_TIMEOUT_SECS",
            Self::DEFAULT_SERVER_SELECTION_TIMEOUT_SECS,
        )?;

        Ok(Self {
            connection_string,
            max_pool_size,
            min_pool_size,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            server_selection_timeout: Duration::from_secs(server_selection_timeout_secs),
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Ticket Service API".to_string());
        let version =
            env::var("SWAGGER_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Support ticket endpoints".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

/// Read `key` and parse it, falling back to `default` when unset.
fn parse_var<T>(key: &str, default: T) -> Result<T, String>
where
    T: std::str::FromStr,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| format!("{} must be a valid number", key)),
        Err(_) => Ok(default),
    }
}
