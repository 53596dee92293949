//! Static schemas for resource kinds.
//!
//! Every resource kind is a plain struct plus an ordered table of
//! [`Field`] descriptors. The descriptor order is the column order of a full
//! row: `id`, the descriptor columns, then `created_at` and `updated_at`.
//! Inserts and full-row reads follow that order; partial updates only visit
//! the descriptors whose patch value is present.
//!
//! Kinds are declared with the crate-internal `resource!` macro, which
//! generates the model struct, its `Patch` companion and the descriptor
//! table in one place.

use jiff::Timestamp;
use rusqlite::{types::Value, Row};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

mod column;
mod macros;

pub use column::{Column, ColumnKind, SqlType};
pub(crate) use column::{read_timestamp, timestamp_value};
pub(crate) use macros::resource;

/// Identity column shared by every table.
pub const ID_COLUMN: &str = "id";
/// Creation timestamp column shared by every table.
pub const CREATED_AT_COLUMN: &str = "created_at";
/// Modification timestamp column shared by every table.
pub const UPDATED_AT_COLUMN: &str = "updated_at";

/// A resource kind stored in its own table.
pub trait Resource:
    Default + Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Sparse update payload. Every field is optional and `None` means
    /// "leave the column alone".
    type Patch: Default + Clone + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Singular snake_case name of the kind, e.g. `combat_art`.
    const KIND: &'static str;

    /// Capitalized name used in messages, e.g. "Combat art".
    const LABEL: &'static str;

    /// Backing table name.
    const TABLE: &'static str;

    /// Field descriptors in column order.
    fn fields() -> &'static [Field<Self>];

    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
    fn created_at(&self) -> Timestamp;
    fn set_created_at(&mut self, at: Timestamp);
    fn updated_at(&self) -> Timestamp;
    fn set_updated_at(&mut self, at: Timestamp);
}

/// Describes one stored field of `R`.
pub struct Field<R: Resource> {
    pub(crate) column: &'static str,
    pub(crate) kind: ColumnKind,
    pub(crate) bind: fn(&R) -> Value,
    pub(crate) scan: fn(&mut R, &Row<'_>, usize) -> rusqlite::Result<()>,
    pub(crate) patch: fn(&R::Patch) -> Option<Value>,
}

impl<R: Resource> Field<R> {
    pub fn column_name(&self) -> &'static str {
        self.column
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    /// Whether the patch supplies a value for this field.
    pub fn is_present(&self, patch: &R::Patch) -> bool {
        (self.patch)(patch).is_some()
    }

    /// Driver value of this field on a full resource.
    pub fn bind(&self, resource: &R) -> Value {
        (self.bind)(resource)
    }

    /// Driver value supplied by a patch, if any.
    pub fn bind_patch(&self, patch: &R::Patch) -> Option<Value> {
        (self.patch)(patch)
    }

    /// Populates this field on `resource` from row position `idx`.
    pub fn scan(&self, resource: &mut R, row: &Row<'_>, idx: usize) -> rusqlite::Result<()> {
        (self.scan)(resource, row, idx)
    }
}

impl<R: Resource> std::fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("column", &self.column)
            .field("kind", &self.kind)
            .finish()
    }
}

/// All columns of `R` in full-row order.
pub fn columns<R: Resource>() -> Vec<&'static str> {
    std::iter::once(ID_COLUMN)
        .chain(R::fields().iter().map(Field::column_name))
        .chain([CREATED_AT_COLUMN, UPDATED_AT_COLUMN])
        .collect()
}

/// Looks up the descriptor for a column name.
pub fn field<R: Resource>(column: &str) -> Option<&'static Field<R>> {
    R::fields().iter().find(|field| field.column == column)
}

/// Column name at a full-row position.
pub fn column_at<R: Resource>(idx: usize) -> &'static str {
    columns::<R>().get(idx).copied().unwrap_or("?")
}

/// Decodes a full row into a resource.
pub fn read_row<R: Resource>(row: &Row<'_>) -> rusqlite::Result<R> {
    let fields = R::fields();
    let mut resource = R::default();

    resource.set_id(row.get(0)?);
    for (offset, field) in fields.iter().enumerate() {
        field.scan(&mut resource, row, offset + 1)?;
    }
    resource.set_created_at(read_timestamp(row, fields.len() + 1)?);
    resource.set_updated_at(read_timestamp(row, fields.len() + 2)?);

    Ok(resource)
}

/// Type-erased description of one resource table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSchema {
    pub kind: &'static str,
    pub table: &'static str,
    pub key_column: &'static str,
    pub columns: Vec<ColumnInfo>,
}

/// One column of a [`TableSchema`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub name: &'static str,
    #[serde(flatten)]
    pub kind: ColumnKind,
}

impl TableSchema {
    /// Describes the table backing `R`.
    pub fn of<R: Resource>() -> Self {
        Self {
            kind: R::KIND,
            table: R::TABLE,
            key_column: ID_COLUMN,
            columns: R::fields()
                .iter()
                .map(|field| ColumnInfo {
                    name: field.column,
                    kind: field.kind,
                })
                .collect(),
        }
    }
}

/// Deserializes a present patch value, so that an explicit JSON `null`
/// on a nullable field becomes `Some(None)` instead of "absent".
pub(crate) fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
