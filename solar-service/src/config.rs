use anyhow::Context;
use sqlx::postgres::PgConnectOptions;
use std::env;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Connection options for sqlx. Built field by field so the password
    /// never has to be URL-escaped into a connection string.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub database: DatabaseConfig,
    /// Prometheus listener address; metrics are disabled when unset.
    pub metrics_bind_addr: Option<String>,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl AppConfig {
    /// Read the configuration from environment variables, falling back to
    /// local-development defaults. Malformed numeric values are an error.
    pub fn from_env() -> anyhow::Result<Self> {
        let port: u16 = env_or("POSTGRES_PORT", "5432")
            .parse()
            .context("POSTGRES_PORT must be a port number")?;
        let max_connections: u32 = env_or("POSTGRES_MAX_CONNECTIONS", "5")
            .parse()
            .context("POSTGRES_MAX_CONNECTIONS must be an integer")?;

        Ok(Self {
            bind_addr: env_or("BIND_ADDR", "0.0.0.0:3000"),
            database: DatabaseConfig {
                host: env_or("POSTGRES_HOST", "localhost"),
                port,
                user: env_or("POSTGRES_USER", "postgres"),
                password: env_or("POSTGRES_PASSWORD", "postgres"),
                database: env_or("POSTGRES_DB", "energy_dashboard"),
                max_connections,
            },
            metrics_bind_addr: env::var("METRICS_BIND_ADDR").ok(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_options_carry_host_port_and_database() {
        let cfg = DatabaseConfig {
            host: "db.internal".to_string(),
            port: 6543,
            user: "solar".to_string(),
            password: "secret".to_string(),
            database: "energy_dashboard".to_string(),
            max_connections: 5,
        };

        let opts = cfg.connect_options();
        assert_eq!(opts.get_host(), "db.internal");
        assert_eq!(opts.get_port(), 6543);
        assert_eq!(opts.get_username(), "solar");
        assert_eq!(opts.get_database(), Some("energy_dashboard"));
    }
}
