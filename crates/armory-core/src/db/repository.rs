//! Generic CRUD engine over one resource table.

use std::marker::PhantomData;

use jiff::Timestamp;
use log::{debug, trace};
use rusqlite::{params_from_iter, types::Value, OptionalExtension};

use super::Database;
use crate::{
    codec::ArrayParseError,
    error::{ArmoryError, DatabaseResultExt, Result},
    params::{Lookup, MatchMode, ResourceKey},
    query::{statements, QueryPlan},
    schema::{
        self, column_at, columns, read_row, timestamp_value, Resource, SqlType, ID_COLUMN,
        UPDATED_AT_COLUMN,
    },
};

/// Reads and writes resources of kind `R`.
pub struct Repository<'db, R: Resource> {
    db: &'db Database,
    _kind: PhantomData<fn() -> R>,
}

impl<'db, R: Resource> Repository<'db, R> {
    pub(crate) fn new(db: &'db Database) -> Self {
        Self {
            db,
            _kind: PhantomData,
        }
    }

    /// Every stored resource, ordered by id.
    pub fn fetch_all(&self) -> Result<Vec<R>> {
        let sql = statements::select_all::<R>();
        self.query_rows(&sql, Vec::new())
    }

    /// The resource with the given key, if any.
    pub fn fetch_one(&self, key: ResourceKey) -> Result<Option<R>> {
        let sql = statements::select_by_key::<R>();
        debug!("{sql}");
        trace!("params: [{key}]");

        self.db
            .connection()
            .query_row(&sql, [key.get()], read_row::<R>)
            .optional()
            .map_err(|e| row_error::<R>("Failed to query resource", e))
    }

    /// Resources whose column matches the lookup value.
    ///
    /// # Errors
    ///
    /// Returns `ArmoryError::InvalidInput` if the column is not part of the
    /// schema, if the value cannot be converted to the column's type, or if
    /// a prefix match targets a non-text column.
    pub fn fetch_by(&self, lookup: &Lookup) -> Result<Vec<R>> {
        let field = schema::field::<R>(&lookup.column).ok_or_else(|| {
            ArmoryError::invalid_input("column").with_reason(format!(
                "unknown column '{}' for {}",
                lookup.column,
                R::KIND
            ))
        })?;
        let kind = field.kind();

        if lookup.mode == MatchMode::Prefix && kind.sql_type != SqlType::Text {
            return Err(ArmoryError::invalid_input(lookup.column.as_str())
                .with_reason("prefix matching requires a text column"));
        }

        let value = kind
            .parse_value(&lookup.value)
            .map_err(|reason| ArmoryError::invalid_input(lookup.column.as_str()).with_reason(reason))?;

        let sql = statements::select_where::<R>(field.column_name(), lookup.mode);
        self.query_rows(&sql, vec![value])
    }

    /// Stores a new resource and returns it with its id and timestamps set.
    ///
    /// Any id or timestamps already on `resource` are ignored.
    pub fn insert(&self, mut resource: R) -> Result<R> {
        let now = Timestamp::now();
        resource.set_created_at(now);
        resource.set_updated_at(now);

        let mut params: Vec<Value> = R::fields()
            .iter()
            .map(|field| field.bind(&resource))
            .collect();
        params.push(timestamp_value(now));
        params.push(timestamp_value(now));

        let sql = statements::insert::<R>();
        debug!("{sql}");
        trace!("params: {params:?}");

        let id: i64 = self
            .db
            .connection()
            .query_row(&sql, params_from_iter(params), |row| row.get(0))
            .db_context("Failed to insert resource")?;
        resource.set_id(id);

        Ok(resource)
    }

    /// Applies a sparse patch and returns the updated resource, or `None`
    /// when no row has the key.
    ///
    /// Only present patch fields are written; `updated_at` is always
    /// refreshed.
    pub fn update(&self, key: ResourceKey, patch: &R::Patch) -> Result<Option<R>> {
        let returning = columns::<R>();
        let plan = QueryPlan::update(R::TABLE)
            .always(UPDATED_AT_COLUMN, timestamp_value(Timestamp::now()))
            .build(
                R::fields(),
                patch,
                ID_COLUMN,
                Value::Integer(key.get()),
                &returning,
            );
        let (sql, params) = plan.into_parts();
        debug!("{sql}");
        trace!("params: {params:?}");

        self.db
            .connection()
            .query_row(&sql, params_from_iter(params), read_row::<R>)
            .optional()
            .map_err(|e| row_error::<R>("Failed to update resource", e))
    }

    /// Deletes the row with the given key. Returns whether a row was removed.
    pub fn delete_existing(&self, key: ResourceKey) -> Result<bool> {
        let sql = statements::delete_by_key::<R>();
        debug!("{sql}");
        trace!("params: [{key}]");

        let affected = self
            .db
            .connection()
            .execute(&sql, [key.get()])
            .db_context("Failed to delete resource")?;
        Ok(affected > 0)
    }

    /// Whether a row with the given key exists.
    pub fn exists(&self, key: ResourceKey) -> Result<bool> {
        let sql = statements::exists_by_key::<R>();
        debug!("{sql}");

        self.db
            .connection()
            .query_row(&sql, [key.get()], |row| row.get(0))
            .db_context("Failed to check resource existence")
    }

    fn query_rows(&self, sql: &str, params: Vec<Value>) -> Result<Vec<R>> {
        debug!("{sql}");
        trace!("params: {params:?}");

        let mut stmt = self
            .db
            .connection()
            .prepare(sql)
            .db_context("Failed to prepare query")?;
        let rows = stmt
            .query_map(params_from_iter(params), read_row::<R>)
            .db_context("Failed to execute query")?;

        rows.collect::<rusqlite::Result<Vec<R>>>()
            .map_err(|e| row_error::<R>("Failed to read resources", e))
    }
}

/// Maps a row-level driver error, surfacing array decode failures as
/// [`ArmoryError::Codec`] with the offending column.
fn row_error<R: Resource>(message: &str, error: rusqlite::Error) -> ArmoryError {
    if let rusqlite::Error::FromSqlConversionFailure(idx, _, source) = &error {
        if let Some(parse) = source.downcast_ref::<ArrayParseError>() {
            return ArmoryError::Codec {
                column: column_at::<R>(*idx).to_string(),
                source: parse.clone(),
            };
        }
    }
    ArmoryError::database(message).with_source(error)
}
