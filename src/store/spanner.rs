use anyhow::{Context, Result};
use async_trait::async_trait;
use gcloud_gax::grpc::Code;
use gcloud_googleapis::spanner::admin::database::v1::{
    CreateDatabaseRequest, GetDatabaseDdlRequest, GetDatabaseRequest, UpdateDatabaseDdlRequest,
};
use gcloud_googleapis::spanner::admin::instance::v1::{
    CreateInstanceRequest, GetInstanceRequest, Instance,
};
use gcloud_spanner::admin::AdminClientConfig;
use gcloud_spanner::admin::client::Client as AdminClient;
use gcloud_spanner::client::{Client, ClientConfig};
use gcloud_spanner::mutation::insert_or_update;
use gcloud_spanner::statement::Statement;
use gcloud_spanner::value::CommitTimestamp;
use std::sync::Arc;

use super::KvStore;
use crate::config::Config;

/// Production [`KvStore`] backed by a Google Cloud Spanner table.
///
/// Values are opaque JSON-encoded strings; this layer never inspects them.
/// The table carries commit-timestamp columns as write-only metadata.
#[derive(Clone)]
pub struct SpannerStore {
    inner: Arc<Client>,
}

impl SpannerStore {
    /// Create a new store from configuration
    ///
    /// The gcloud-spanner library automatically detects the
    /// SPANNER_EMULATOR_HOST environment variable and connects to
    /// the emulator when set, or production Spanner otherwise.
    ///
    /// This function also performs auto-provisioning: it will automatically
    /// create the instance, database, and table if they don't exist.
    pub async fn from_config(config: &Config) -> Result<Self> {
        // Perform auto-provisioning first
        auto_provision(config).await?;

        let database_path = format!(
            "projects/{}/instances/{}/databases/{}",
            config.spanner_project, config.spanner_instance, config.spanner_database
        );

        match &config.spanner_emulator_host {
            Some(host) => tracing::info!("Connecting to Spanner emulator at: {}", host),
            None => tracing::info!("Connecting to production Spanner"),
        }

        // ClientConfig::default() automatically uses SPANNER_EMULATOR_HOST if set
        let client = Client::new(&database_path, ClientConfig::default())
            .await
            .context("Failed to create Spanner client")?;

        tracing::info!(
            "Successfully connected to Spanner database: {}",
            database_path
        );

        Ok(Self {
            inner: Arc::new(client),
        })
    }
}

#[async_trait]
impl KvStore for SpannerStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut statement = Statement::new("SELECT value FROM feedback_kv WHERE key = @key");
        statement.add_param("key", &key.to_string());

        let mut tx = self
            .inner
            .single()
            .await
            .context("Failed to create read transaction")?;

        let mut result_set = tx
            .query(statement)
            .await
            .context("Failed to query value from Spanner")?;

        if let Some(row) = result_set.next().await? {
            let value: String = row.column_by_name("value")?;
            tracing::debug!("Read value under key: {}", key);
            Ok(Some(value))
        } else {
            tracing::debug!("No value under key: {}", key);
            Ok(None)
        }
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        let mutation = insert_or_update(
            "feedback_kv",
            &["key", "value", "created_at", "updated_at"],
            &[
                &key.to_string(),
                &value.to_string(),
                &CommitTimestamp::new(),
                &CommitTimestamp::new(),
            ],
        );

        self.inner
            .apply(vec![mutation])
            .await
            .context("Failed to write value to Spanner")?;

        tracing::debug!("Wrote value under key: {}", key);
        Ok(())
    }

    async fn list_keys(&self, prefix: &str, limit: i64) -> Result<Vec<String>> {
        let mut statement = Statement::new(format!(
            "SELECT key FROM feedback_kv WHERE STARTS_WITH(key, @prefix) ORDER BY key LIMIT {}",
            limit.max(0)
        ));
        statement.add_param("prefix", &prefix.to_string());

        let mut tx = self
            .inner
            .single()
            .await
            .context("Failed to create read transaction for listing")?;

        let mut result_set = tx
            .query(statement)
            .await
            .context("Failed to list keys from Spanner")?;

        let mut keys = Vec::new();
        while let Some(row) = result_set.next().await? {
            let key: String = row.column_by_name("key")?;
            keys.push(key);
        }

        tracing::debug!("Listed {} keys with prefix: {}", keys.len(), prefix);
        Ok(keys)
    }

    async fn health_check(&self) -> Result<()> {
        let statement = Statement::new("SELECT 1");

        let mut tx = self
            .inner
            .single()
            .await
            .context("Failed to create health check transaction")?;

        let mut result_set = tx
            .query(statement)
            .await
            .context("Failed to execute health check query")?;

        // Just verify that we can execute the query and get a result
        if result_set.next().await?.is_some() {
            tracing::debug!("Health check query succeeded");
            Ok(())
        } else {
            Err(anyhow::anyhow!("Health check query returned no results"))
        }
    }
}

/// Automatically provision Spanner instance, database, and table
///
/// This function checks if the configured resources exist and creates them if
/// needed. It's designed to enable zero-setup local development with the
/// emulator.
async fn auto_provision(config: &Config) -> Result<()> {
    tracing::info!("Starting auto-provisioning checks...");

    let admin_client = AdminClient::new(AdminClientConfig::default())
        .await
        .context("Failed to create Spanner admin client")?;

    let project_path = format!("projects/{}", config.spanner_project);
    let instance_path = format!("{}/instances/{}", project_path, config.spanner_instance);
    let database_path = format!("{}/databases/{}", instance_path, config.spanner_database);

    ensure_instance_exists(&admin_client, config, &project_path, &instance_path).await?;
    ensure_database_exists(&admin_client, &instance_path, &database_path).await?;
    ensure_table_exists(&admin_client, &database_path).await?;

    tracing::info!("Auto-provisioning complete");
    Ok(())
}

/// Ensure the Spanner instance exists, creating it if necessary
async fn ensure_instance_exists(
    admin_client: &AdminClient,
    config: &Config,
    project_path: &str,
    instance_path: &str,
) -> Result<()> {
    let get_request = GetInstanceRequest {
        name: instance_path.to_string(),
        field_mask: None,
    };

    match admin_client.instance().get_instance(get_request, None).await {
        Ok(_) => {
            tracing::info!("Instance already exists: {}", instance_path);
            Ok(())
        }
        Err(status) if status.code() == Code::NotFound => {
            tracing::info!("Instance not found, creating: {}", instance_path);

            // For emulator, use a simple config
            let instance_config = if config.spanner_emulator_host.is_some() {
                format!("{}/instanceConfigs/emulator-config", project_path)
            } else {
                format!("{}/instanceConfigs/regional-us-central1", project_path)
            };

            let create_request = CreateInstanceRequest {
                parent: project_path.to_string(),
                instance_id: config.spanner_instance.clone(),
                instance: Some(Instance {
                    name: instance_path.to_string(),
                    config: instance_config,
                    display_name: format!("{} instance", config.spanner_instance),
                    node_count: 1,
                    ..Default::default()
                }),
            };

            let mut operation = admin_client
                .instance()
                .create_instance(create_request, None)
                .await
                .context("Failed to start instance creation")?;

            operation
                .wait(None)
                .await
                .context("Failed to create instance")?;

            tracing::info!("Instance created successfully: {}", instance_path);
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!(
            "Failed to check instance existence: {}",
            e.message()
        )),
    }
}

/// Ensure the Spanner database exists, creating it if necessary
async fn ensure_database_exists(
    admin_client: &AdminClient,
    instance_path: &str,
    database_path: &str,
) -> Result<()> {
    let get_request = GetDatabaseRequest {
        name: database_path.to_string(),
    };

    match admin_client.database().get_database(get_request, None).await {
        Ok(_) => {
            tracing::info!("Database already exists: {}", database_path);
            Ok(())
        }
        Err(status) if status.code() == Code::NotFound => {
            tracing::info!("Database not found, creating: {}", database_path);

            let database_id = database_path
                .split('/')
                .next_back()
                .context("Invalid database path")?;

            let create_request = CreateDatabaseRequest {
                parent: instance_path.to_string(),
                create_statement: format!("CREATE DATABASE `{}`", database_id),
                extra_statements: vec![],
                encryption_config: None,
                database_dialect: 1, // Google Standard SQL
                proto_descriptors: vec![],
            };

            let mut operation = admin_client
                .database()
                .create_database(create_request, None)
                .await
                .context("Failed to start database creation")?;

            operation
                .wait(None)
                .await
                .context("Failed to create database")?;

            tracing::info!("Database created successfully: {}", database_path);
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!(
            "Failed to check database existence: {}",
            e.message()
        )),
    }
}

/// Ensure the feedback_kv table exists, creating it if necessary
async fn ensure_table_exists(admin_client: &AdminClient, database_path: &str) -> Result<()> {
    let get_ddl_request = GetDatabaseDdlRequest {
        database: database_path.to_string(),
    };

    let ddl_response = admin_client
        .database()
        .get_database_ddl(get_ddl_request, None)
        .await
        .context("Failed to get database DDL")?;

    let table_exists = ddl_response.into_inner().statements.iter().any(|stmt| {
        stmt.contains("CREATE TABLE feedback_kv") || stmt.contains("CREATE TABLE `feedback_kv`")
    });

    if table_exists {
        tracing::info!("Table 'feedback_kv' already exists");
        Ok(())
    } else {
        tracing::info!("Table 'feedback_kv' not found, creating...");

        let create_table_ddl = r#"
CREATE TABLE feedback_kv (
    key STRING(MAX) NOT NULL,
    value STRING(MAX) NOT NULL,
    created_at TIMESTAMP NOT NULL OPTIONS (allow_commit_timestamp=true),
    updated_at TIMESTAMP NOT NULL OPTIONS (allow_commit_timestamp=true),
) PRIMARY KEY (key)
"#
        .trim()
        .to_string();

        let update_request = UpdateDatabaseDdlRequest {
            database: database_path.to_string(),
            statements: vec![create_table_ddl],
            operation_id: String::new(),
            proto_descriptors: vec![],
            throughput_mode: false,
        };

        let mut operation = admin_client
            .database()
            .update_database_ddl(update_request, None)
            .await
            .context("Failed to start table creation")?;

        operation
            .wait(None)
            .await
            .context("Failed to create table")?;

        tracing::info!("Table 'feedback_kv' created successfully");
        Ok(())
    }
}
