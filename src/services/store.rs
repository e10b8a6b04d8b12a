//! # Provider Store
//!
//! Persistence for providers. The matching engine only depends on the
//! [`ProviderStore`] trait, so tests can swap in an in-memory store while the
//! server runs against PostgreSQL.
//!
//! ## Implementations
//!
//! - [`PgProviderStore`] - PostgreSQL implementation backed by a `sqlx` pool

use std::time::Duration;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use thiserror::Error;
use tracing::{debug, error, info, instrument};

use crate::models::{Address, FloorMaterial, MaterialFilter, Provider, ProviderId};

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached at all.
    #[error("store unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// The store was reached but the operation failed.
    #[error("store failure: {0}")]
    Failure(#[source] sqlx::Error),

    #[error("duplicate entry")]
    DuplicateEntry,

    #[error("invalid reference")]
    InvalidReference,
}

/// Classifies a driver error into a [`StoreError`].
pub fn parse_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            StoreError::DuplicateEntry
        }
        sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
            StoreError::InvalidReference
        }
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => StoreError::Unavailable(err),
        other => StoreError::Failure(other),
    }
}

/// Storage contract required by the matching engine.
#[async_trait]
pub trait ProviderStore: Send + Sync {
    /// Lists every provider admitted by `filter`.
    ///
    /// No ordering is guaranteed and no spatial filtering is applied; both are
    /// the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] or [`StoreError::Failure`] if the
    /// providers cannot be read. An empty result is not an error.
    async fn list_by_material(&self, filter: MaterialFilter) -> Result<Vec<Provider>, StoreError>;

    /// Inserts a provider and returns its newly assigned id. The `id` field of
    /// the argument is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateEntry`] if a uniqueness constraint is
    /// violated and [`StoreError::InvalidReference`] if the record references
    /// data that does not exist.
    async fn create(&self, provider: &Provider) -> Result<ProviderId, StoreError>;

    /// Deletes every provider. Only meant for test fixtures.
    async fn clear(&self) -> Result<(), StoreError>;
}

#[derive(Debug, FromRow)]
struct ProviderRow {
    id: i64,
    name: String,
    latitude: f64,
    longitude: f64,
    radius: f64,
    rating: f64,
    wood: bool,
    carpet: bool,
    tile: bool,
}

impl From<ProviderRow> for Provider {
    fn from(row: ProviderRow) -> Self {
        Provider {
            id: row.id,
            name: row.name,
            address: Address::new(row.latitude, row.longitude),
            radius: row.radius,
            rating: row.rating,
            wood: row.wood,
            carpet: row.carpet,
            tile: row.tile,
        }
    }
}

/// PostgreSQL provider store.
#[derive(Clone)]
pub struct PgProviderStore {
    db_pool: PgPool,
}

impl PgProviderStore {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.db_pool
    }

    /// Probes the database every `interval` until a query succeeds.
    #[instrument(skip(self))]
    pub async fn wait_until_available(&self, interval: Duration) {
        loop {
            match sqlx::query("SELECT 1").execute(&self.db_pool).await {
                Ok(_) => {
                    info!("Database connection available");
                    return;
                }
                Err(e) => {
                    error!(error = %e, "Database connection failed");
                    tokio::time::sleep(interval).await;
                }
            }
        }
    }
}

#[async_trait]
impl ProviderStore for PgProviderStore {
    #[instrument(skip(self), err)]
    async fn list_by_material(&self, filter: MaterialFilter) -> Result<Vec<Provider>, StoreError> {
        let condition = match filter {
            MaterialFilter::Only(FloorMaterial::Wood) => " WHERE wood",
            MaterialFilter::Only(FloorMaterial::Carpet) => " WHERE carpet",
            MaterialFilter::Only(FloorMaterial::Tile) => " WHERE tile",
            MaterialFilter::Any => "",
        };
        let query = format!(
            "SELECT id, name, latitude, longitude, radius, rating, wood, carpet, tile \
             FROM providers{condition} ORDER BY id"
        );

        let rows = sqlx::query_as::<_, ProviderRow>(&query)
            .fetch_all(&self.db_pool)
            .await
            .map_err(parse_error)?;

        debug!(count = rows.len(), "Fetched candidate providers");
        Ok(rows.into_iter().map(Provider::from).collect())
    }

    #[instrument(skip(self, provider), fields(name = %provider.name), err)]
    async fn create(&self, provider: &Provider) -> Result<ProviderId, StoreError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO providers (name, latitude, longitude, radius, rating, wood, carpet, tile)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&provider.name)
        .bind(provider.address.latitude)
        .bind(provider.address.longitude)
        .bind(provider.radius)
        .bind(provider.rating)
        .bind(provider.wood)
        .bind(provider.carpet)
        .bind(provider.tile)
        .fetch_one(&self.db_pool)
        .await
        .map_err(parse_error)?;

        debug!(id, "Provider created");
        Ok(id)
    }

    #[instrument(skip(self), err)]
    async fn clear(&self) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM providers")
            .execute(&self.db_pool)
            .await
            .map_err(parse_error)?;

        info!(removed = result.rows_affected(), "Cleared provider store");
        Ok(())
    }
}
