//! Environment-driven configuration for the Goodbooks dashboard.
//!
//! Values come from the process environment, after loading a `.env` file if
//! one is present. Every setting has a default so a local Neo4j/MySQL pair
//! works out of the box.

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Neo4jConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: usize,
    pub fetch_size: usize,
}

impl Default for Neo4jConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: "adminadmin".to_string(),
            database: "neo4j".to_string(),
            max_connections: 10,
            fetch_size: 500,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MySqlConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
    /// Full connection string; wins over the individual parts when set
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Default for MySqlConfig {
    fn default() -> Self {
        Self {
            user: "root".to_string(),
            password: "your_password".to_string(),
            host: "localhost".to_string(),
            port: 3306,
            database: "goodbooks".to_string(),
            url: None,
            max_connections: 5,
        }
    }
}

impl MySqlConfig {
    /// Connection string in the form sqlx expects
    pub fn connection_url(&self) -> String {
        if let Some(url) = &self.url {
            return url.clone();
        }
        format!(
            "mysql://{}:{}@{}:{}/{}",
            urlencoding::encode(&self.user),
            urlencoding::encode(&self.password),
            self.host,
            self.port,
            self.database
        )
    }

    /// Connection target without credentials, for logs
    pub fn redacted(&self) -> String {
        match &self.url {
            Some(url) => match url.rsplit_once('@') {
                Some((_, target)) => format!("mysql://***@{}", target),
                None => url.clone(),
            },
            None => format!("mysql://{}:{}/{}", self.host, self.port, self.database),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Requests slower than this are logged at warn level
    pub slow_request_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8501,
            slow_request_ms: 1000,
        }
    }
}

/// Initial-position hints for the recommendation network.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Radius of the circle the similar books are placed on
    pub book_radius: f64,
    /// Radius of the innermost tag ring
    pub tag_ring_radius: f64,
    /// Distance between consecutive tag rings
    pub tag_ring_spacing: f64,
    pub tags_per_ring: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            book_radius: 400.0,
            tag_ring_radius: 200.0,
            tag_ring_spacing: 110.0,
            tags_per_ring: 12,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub neo4j: Neo4jConfig,
    pub mysql: MySqlConfig,
    pub server: ServerConfig,
    pub layout: LayoutConfig,
}

impl AppConfig {
    /// Load `.env` (if any) and read the process environment
    pub fn from_env() -> Self {
        if let Err(e) = dotenv::dotenv() {
            tracing::debug!("No .env file loaded: {}", e);
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();
        let text = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let neo4j = Neo4jConfig {
            uri: text("NEO4J_URI", &defaults.neo4j.uri),
            user: text("NEO4J_USER", &defaults.neo4j.user),
            password: text("NEO4J_PASSWORD", &defaults.neo4j.password),
            database: text("NEO4J_DATABASE", &defaults.neo4j.database),
            max_connections: parsed(&lookup, "NEO4J_MAX_CONNECTIONS", defaults.neo4j.max_connections),
            fetch_size: parsed(&lookup, "NEO4J_FETCH_SIZE", defaults.neo4j.fetch_size),
        };

        let mysql = MySqlConfig {
            user: text("MYSQL_USER", &defaults.mysql.user),
            password: text("MYSQL_PASSWORD", &defaults.mysql.password),
            host: text("MYSQL_HOST", &defaults.mysql.host),
            port: parsed(&lookup, "MYSQL_PORT", defaults.mysql.port),
            database: text("MYSQL_DATABASE", &defaults.mysql.database),
            url: lookup("MYSQL_URL").filter(|v| !v.trim().is_empty()),
            max_connections: parsed(&lookup, "MYSQL_MAX_CONNECTIONS", defaults.mysql.max_connections),
        };

        let server = ServerConfig {
            host: text("DASHBOARD_HOST", &defaults.server.host),
            port: parsed(&lookup, "DASHBOARD_PORT", defaults.server.port),
            slow_request_ms: parsed(&lookup, "SLOW_REQUEST_MS", defaults.server.slow_request_ms),
        };

        let layout = LayoutConfig {
            book_radius: parsed(&lookup, "GRAPH_BOOK_RADIUS", defaults.layout.book_radius),
            tag_ring_radius: parsed(&lookup, "GRAPH_TAG_RING_RADIUS", defaults.layout.tag_ring_radius),
            tag_ring_spacing: parsed(&lookup, "GRAPH_TAG_RING_SPACING", defaults.layout.tag_ring_spacing),
            tags_per_ring: parsed(&lookup, "GRAPH_TAGS_PER_RING", defaults.layout.tags_per_ring).max(1),
        };

        Self { neo4j, mysql, server, layout }
    }
}

fn parsed<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Ignoring invalid value for {}: {:?}", key, raw);
                default
            }
        },
        None => default,
    }
}
