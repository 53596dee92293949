//! Builder for creating and configuring Catalog instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Catalog;
use crate::{
    db::Database,
    error::{ArmoryError, Result},
};

/// Builder for creating and configuring Catalog instances.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    database_path: Option<PathBuf>,
}

impl CatalogBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/armory/armory.db` or `~/.local/share/armory/armory.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the catalog, creating the database file and its tables.
    ///
    /// # Errors
    ///
    /// Returns `ArmoryError::FileSystem` if the parent directory cannot be
    /// created, `ArmoryError::XdgDirectory` if no default location is
    /// available, and `ArmoryError::Database` if provisioning fails.
    pub async fn build(self) -> Result<Catalog> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ArmoryError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || Database::open(&db_path_clone).map(drop))
            .await
            .map_err(|e| ArmoryError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        Ok(Catalog::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("armory")
            .place_data_file("armory.db")
            .map_err(|e| ArmoryError::XdgDirectory(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_build_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("armory.db");

        let catalog = CatalogBuilder::new()
            .with_database_path(Some(&path))
            .build()
            .await
            .unwrap();

        assert!(path.exists());
        assert_eq!(catalog.database_path(), path.as_path());
    }

    #[tokio::test]
    async fn test_none_path_keeps_previous_setting() {
        let builder = CatalogBuilder::new()
            .with_database_path(Some("first.db"))
            .with_database_path(None::<&str>);
        assert_eq!(builder.database_path, Some(PathBuf::from("first.db")));
    }
}
