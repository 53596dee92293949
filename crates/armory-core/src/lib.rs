//! Core library for the Armory game-data catalog.
//!
//! The crate stores a fixed set of resource kinds (characters, classes,
//! skills, spells, combat arts, weapons and per-character skill lists) in
//! SQLite. One generic engine serves all of them:
//!
//! - [`schema`] describes each kind as an ordered list of typed columns.
//! - [`codec`] maps integer-array columns to `Vec<i64>`.
//! - [`query`] turns sparse patches into parameterized `UPDATE` plans and
//!   derives the remaining statements from the schema.
//! - [`db`] owns the connection and implements [`Repository`].
//! - [`catalog`] is the async facade handed to front ends.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use armory_core::{
//!     params::{decode_payload, ResourceKey},
//!     resources::{Class, ClassPatch},
//!     CatalogBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = CatalogBuilder::new().build().await?;
//!
//! let lord = catalog
//!     .create(Class {
//!         name: "Lord".to_string(),
//!         rank: "Beginner".to_string(),
//!         base: vec![20, 7, 3, 6, 7, 5, 6, 3, 7],
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // Only the fields present in the payload change.
//! let patch: ClassPatch = decode_payload(r#"{"rank": "Advanced"}"#)?;
//! let lord = catalog.update::<Class>(ResourceKey::new(lord.id), patch).await?;
//! assert_eq!(lord.base.len(), 9);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod codec;
pub mod db;
pub mod error;
pub mod params;
pub mod query;
pub mod resources;
pub mod schema;
pub mod status;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogBuilder};
pub use codec::{ArrayParseError, IntArray};
pub use db::{Database, Repository};
pub use error::{ArmoryError, Result};
pub use params::{Lookup, MatchMode, ResourceKey};
pub use query::QueryPlan;
pub use resources::ResourceKind;
pub use schema::{Resource, TableSchema};
pub use status::OperationStatus;
