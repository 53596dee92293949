//! Database schema initialization and migrations.

use log::debug;

use crate::{
    error::{DatabaseResultExt, Result},
    query::statements,
    resources::ResourceKind,
    schema::TableSchema,
};

impl super::Database {
    /// Creates any missing resource table, then brings existing tables up to
    /// date with their schema.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        for kind in ResourceKind::ALL {
            let schema = kind.describe();
            let ddl = statements::create_table(&schema);
            debug!("provisioning {}: {ddl}", schema.table);
            self.connection
                .execute_batch(&ddl)
                .db_context("Failed to initialize database schema")?;

            self.apply_migrations(&schema)?;
        }

        Ok(())
    }

    /// Adds columns declared by the schema but absent from an existing
    /// table. Required columns are added `NOT NULL` with the type's zero
    /// value as default, so rows already in the table stay readable.
    fn apply_migrations(&self, schema: &TableSchema) -> Result<()> {
        let existing = self.existing_columns(schema.table)?;

        for column in &schema.columns {
            if existing.iter().any(|name| name == column.name) {
                continue;
            }
            let sql_type = column.kind.sql_type;
            let mut sql = format!(
                "ALTER TABLE {} ADD COLUMN {} {}",
                schema.table,
                column.name,
                sql_type.declared_type()
            );
            if !column.kind.nullable {
                sql.push_str(" NOT NULL DEFAULT ");
                sql.push_str(sql_type.zero_literal());
            }
            debug!("migrating: {sql}");
            self.connection
                .execute(&sql, [])
                .db_context("Failed to add missing column")?;
        }

        Ok(())
    }

    fn existing_columns(&self, table: &str) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare("SELECT name FROM pragma_table_info(?1)")
            .db_context("Failed to prepare table info query")?;
        let names = stmt
            .query_map([table], |row| row.get(0))
            .db_context("Failed to read table info")?
            .collect::<rusqlite::Result<Vec<String>>>()
            .db_context("Failed to read table info")?;
        Ok(names)
    }
}
