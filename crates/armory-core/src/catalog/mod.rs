//! High-level async API over the resource store.
//!
//! [`Catalog`] is the storage handle front ends are given. It holds only the
//! database path; every call opens its own [`Database`] on tokio's blocking
//! pool, so a catalog can be cloned and shared freely.
//!
//! ```rust,no_run
//! use armory_core::{resources::Weapon, CatalogBuilder, ResourceKey};
//!
//! # async fn example() -> armory_core::Result<()> {
//! let catalog = CatalogBuilder::new()
//!     .with_database_path(Some("armory.db"))
//!     .build()
//!     .await?;
//!
//! let sword = catalog
//!     .create(Weapon {
//!         name: "Iron Sword".to_string(),
//!         type_id: 1,
//!         might: Some(5),
//!         durability: 40,
//!         weight: 5,
//!         range_min: 1,
//!         ..Default::default()
//!     })
//!     .await?;
//! let same = catalog.get::<Weapon>(ResourceKey::new(sword.id)).await?;
//! assert_eq!(same.name, "Iron Sword");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{ArmoryError, Result},
    params::{Lookup, ResourceKey},
    schema::Resource,
    status::OperationStatus,
};

pub mod builder;
mod lookups;

pub use builder::CatalogBuilder;

/// Async handle to the resource store.
#[derive(Debug, Clone)]
pub struct Catalog {
    db_path: PathBuf,
}

impl Catalog {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the backing database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Lists every resource of kind `R`, ordered by id.
    pub async fn list<R: Resource>(&self) -> Result<Vec<R>> {
        self.with_database(|db| db.repository::<R>().fetch_all())
            .await
    }

    /// Fetches one resource.
    ///
    /// # Errors
    ///
    /// Returns `ArmoryError::NotFound` if no resource has the key.
    pub async fn get<R: Resource>(&self, key: ResourceKey) -> Result<R> {
        self.with_database(move |db| db.repository::<R>().fetch_one(key))
            .await?
            .ok_or_else(|| not_found::<R>(key))
    }

    /// Fetches the resources matching a single-column lookup.
    pub async fn find<R: Resource>(&self, lookup: Lookup) -> Result<Vec<R>> {
        self.with_database(move |db| db.repository::<R>().fetch_by(&lookup))
            .await
    }

    /// Stores a new resource and returns it with its assigned id.
    pub async fn create<R: Resource>(&self, resource: R) -> Result<R> {
        self.with_database(move |db| db.repository::<R>().insert(resource))
            .await
    }

    /// Applies a sparse patch and returns the full updated resource.
    ///
    /// # Errors
    ///
    /// Returns `ArmoryError::NotFound` if no resource has the key.
    pub async fn update<R: Resource>(&self, key: ResourceKey, patch: R::Patch) -> Result<R> {
        self.with_database(move |db| db.repository::<R>().update(key, &patch))
            .await?
            .ok_or_else(|| not_found::<R>(key))
    }

    /// Permanently deletes a resource.
    ///
    /// # Errors
    ///
    /// Returns `ArmoryError::NotFound` if no resource has the key.
    pub async fn delete<R: Resource>(&self, key: ResourceKey) -> Result<OperationStatus> {
        let removed = self
            .with_database(move |db| db.repository::<R>().delete_existing(key))
            .await?;
        if removed {
            Ok(OperationStatus::deleted(R::LABEL))
        } else {
            Err(not_found::<R>(key))
        }
    }

    /// Whether a resource with the key exists.
    pub async fn exists<R: Resource>(&self, key: ResourceKey) -> Result<bool> {
        self.with_database(move |db| db.repository::<R>().exists(key))
            .await
    }

    /// Runs blocking database work on its own connection.
    async fn with_database<T, F>(&self, operation: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::open(&db_path)?;
            operation(&db)
        })
        .await
        .map_err(|e| ArmoryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

fn not_found<R: Resource>(key: ResourceKey) -> ArmoryError {
    ArmoryError::NotFound {
        kind: R::LABEL,
        id: key.get(),
    }
}
