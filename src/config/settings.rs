//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Document store configuration (MongoDB)
    pub database: DatabaseSettings,

    /// JWT session token settings
    pub jwt: JwtSettings,

    /// Session cookie settings
    pub cookie: CookieSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// Which backing store the repositories talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreDriver {
    /// A MongoDB deployment reached through `DatabaseSettings::connection_uri`
    Mongodb,
    /// Process-local collections, lost on restart
    Memory,
}

/// MongoDB configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Backing store driver
    pub driver: StoreDriver,

    /// Full connection URI; takes precedence over the credential fields
    pub uri: Option<String>,

    /// Database user
    pub user: Option<String>,

    /// Database password
    pub password: Option<String>,

    /// Atlas cluster host
    pub cluster: String,

    /// Database name
    pub name: String,

    /// Application name reported to the server
    pub app_name: String,

    /// How long an operation waits for a reachable server before failing
    pub server_selection_timeout_secs: u64,
}

/// JWT configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    /// Secret key for signing tokens
    pub secret: String,

    /// Session token expiry in minutes
    pub token_expiry_minutes: i64,
}

/// Session cookie configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CookieSettings {
    /// Cookie carrying the session token
    pub name: String,

    /// Whether the cookie is flagged `Secure`
    pub secure: bool,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins (comma-separated in env)
    pub allowed_origins: Vec<String>,
}

/// Minimum required length for JWT secret (256 bits = 32 bytes)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if it fails [`Settings::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        // Determine the running environment
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        let cors_origins = std::env::var("CORS_ORIGINS").ok().map(|origins| {
            origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect::<Vec<_>>()
        });

        Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("database.driver", "mongodb")?
            .set_default("database.cluster", "cluster0.zjzxbzp.mongodb.net")?
            .set_default("database.name", "travelBuddyDB")?
            .set_default("database.app_name", "travel-buddy")?
            .set_default("database.server_selection_timeout_secs", 5)?
            .set_default("jwt.token_expiry_minutes", 60)?
            .set_default("cookie.name", "token")?
            .set_default("cookie.secure", true)?
            .set_default("cors.allowed_origins", vec!["http://localhost:5173"])?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Load from environment variables
            // APP__SERVER__PORT=5000 -> server.port = 5000
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            // Map simple environment variables
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("database.driver", std::env::var("STORE_DRIVER").ok())?
            .set_override_option("database.uri", std::env::var("MONGODB_URI").ok())?
            .set_override_option("database.user", std::env::var("DB_USER").ok())?
            .set_override_option("database.password", std::env::var("DB_PASS").ok())?
            .set_override_option("database.cluster", std::env::var("DB_CLUSTER").ok())?
            .set_override_option("database.name", std::env::var("DB_NAME").ok())?
            .set_override_option("jwt.secret", std::env::var("ACCESS_TOKEN_SECRET").ok())?
            .set_override_option("cors.allowed_origins", cors_origins)?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| {
                settings.validate()?;
                Ok(settings)
            })
    }

    /// Check the invariants that deserialization alone cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::Message(format!(
                "JWT secret must be at least {} characters for security. Current length: {}",
                MIN_JWT_SECRET_LENGTH,
                self.jwt.secret.len()
            )));
        }

        if self.jwt.token_expiry_minutes <= 0 {
            return Err(ConfigError::Message(
                "jwt.token_expiry_minutes must be positive".into(),
            ));
        }

        if self.database.driver == StoreDriver::Mongodb
            && self.database.uri.is_none()
            && (self.database.user.is_none() || self.database.password.is_none())
        {
            return Err(ConfigError::Message(
                "MongoDB requires either MONGODB_URI or both DB_USER and DB_PASS".into(),
            ));
        }

        Ok(())
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl DatabaseSettings {
    /// Connection URI for the MongoDB client.
    ///
    /// An explicit `uri` wins; otherwise an Atlas SRV URI is assembled from
    /// the credentials and cluster host.
    pub fn connection_uri(&self) -> String {
        if let Some(uri) = &self.uri {
            return uri.clone();
        }

        format!(
            "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority",
            self.user.as_deref().unwrap_or_default(),
            self.password.as_deref().unwrap_or_default(),
            self.cluster
        )
    }
}
