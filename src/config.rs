use anyhow::{Context, Result, bail};
use std::env;

/// Which key-value backend the service runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Spanner,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store_backend: StoreBackend,
    pub spanner_emulator_host: Option<String>,
    pub spanner_project: String,
    pub spanner_instance: String,
    pub spanner_database: String,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let store_backend = match env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "spanner".to_string())
            .as_str()
        {
            "spanner" => StoreBackend::Spanner,
            "memory" => StoreBackend::Memory,
            other => bail!("STORE_BACKEND must be 'spanner' or 'memory', got '{}'", other),
        };

        let spanner_emulator_host = env::var("SPANNER_EMULATOR_HOST").ok();

        // Spanner coordinates are only required when the Spanner backend is
        // selected; the memory backend needs none of them.
        let (spanner_project, spanner_instance, spanner_database) =
            if store_backend == StoreBackend::Spanner {
                (
                    env::var("SPANNER_PROJECT")
                        .context("SPANNER_PROJECT environment variable is required")?,
                    env::var("SPANNER_INSTANCE")
                        .context("SPANNER_INSTANCE environment variable is required")?,
                    env::var("SPANNER_DATABASE")
                        .context("SPANNER_DATABASE environment variable is required")?,
                )
            } else {
                (String::new(), String::new(), String::new())
            };

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            store_backend,
            spanner_emulator_host,
            spanner_project,
            spanner_instance,
            spanner_database,
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Store backend: {:?}", self.store_backend);
        if self.store_backend == StoreBackend::Spanner {
            tracing::info!(
                "  Spanner emulator: {}",
                self.spanner_emulator_host
                    .as_deref()
                    .unwrap_or("disabled (using production)")
            );
            tracing::info!("  Spanner project: {}", self.spanner_project);
            tracing::info!("  Spanner instance: {}", self.spanner_instance);
            tracing::info!("  Spanner database: {}", self.spanner_database);
        }
        tracing::info!(
            "  Service listening on: {}:{}",
            self.service_host,
            self.service_port
        );
    }
}
