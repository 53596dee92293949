//! Column kinds and the mapping between Rust field types and driver values.

use jiff::Timestamp;
use rusqlite::{
    types::{Type, Value},
    Row,
};
use serde::Serialize;

use crate::codec::{self, IntArray};

/// Storage type of a column, independent of nullability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SqlType {
    Integer,
    Text,
    Boolean,
    IntArray,
}

impl SqlType {
    /// Declared SQLite type used when provisioning tables.
    pub fn declared_type(self) -> &'static str {
        match self {
            Self::Integer | Self::Boolean => "INTEGER",
            Self::Text | Self::IntArray => "TEXT",
        }
    }

    /// SQL literal of the value a required column holds when nothing was
    /// written to it, e.g. rows that predate the column.
    pub fn zero_literal(self) -> &'static str {
        match self {
            Self::Integer | Self::Boolean => "0",
            Self::Text => "''",
            Self::IntArray => "'{}'",
        }
    }
}

/// Storage type plus nullability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnKind {
    #[serde(rename = "type")]
    pub sql_type: SqlType,
    pub nullable: bool,
}

impl ColumnKind {
    pub const fn required(sql_type: SqlType) -> Self {
        Self {
            sql_type,
            nullable: false,
        }
    }

    pub const fn nullable(sql_type: SqlType) -> Self {
        Self {
            sql_type,
            nullable: true,
        }
    }

    /// Converts a textual lookup value into a driver value of this kind.
    pub fn parse_value(self, raw: &str) -> Result<Value, String> {
        match self.sql_type {
            SqlType::Text => Ok(Value::Text(raw.to_string())),
            SqlType::Integer => raw
                .trim()
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|e| format!("'{raw}' is not an integer: {e}")),
            SqlType::Boolean => match raw.trim() {
                "true" | "1" => Ok(Value::Integer(1)),
                "false" | "0" => Ok(Value::Integer(0)),
                _ => Err(format!("'{raw}' is not a boolean")),
            },
            SqlType::IntArray => codec::parse_array(raw)
                .map(|values| codec::encode(Some(&values)))
                .map_err(|e| e.to_string()),
        }
    }
}

/// A Rust type that can be stored in a single column.
pub trait Column: Sized {
    const KIND: ColumnKind;

    /// Value bound for this field in an insert or update.
    fn to_value(&self) -> Value;

    /// Reads the field from a row position.
    fn read(row: &Row<'_>, idx: usize) -> rusqlite::Result<Self>;
}

macro_rules! scalar_column {
    ($ty:ty, $sql_type:expr, |$v:ident| $to_value:expr) => {
        impl Column for $ty {
            const KIND: ColumnKind = ColumnKind::required($sql_type);

            fn to_value(&self) -> Value {
                let $v = self;
                $to_value
            }

            fn read(row: &Row<'_>, idx: usize) -> rusqlite::Result<Self> {
                row.get(idx)
            }
        }

        impl Column for Option<$ty> {
            const KIND: ColumnKind = ColumnKind::nullable($sql_type);

            fn to_value(&self) -> Value {
                match self {
                    Some($v) => $to_value,
                    None => Value::Null,
                }
            }

            fn read(row: &Row<'_>, idx: usize) -> rusqlite::Result<Self> {
                row.get(idx)
            }
        }
    };
}

scalar_column!(i64, SqlType::Integer, |v| Value::Integer(*v));
scalar_column!(String, SqlType::Text, |v| Value::Text(v.clone()));
scalar_column!(bool, SqlType::Boolean, |v| Value::Integer(i64::from(*v)));

impl Column for Vec<i64> {
    const KIND: ColumnKind = ColumnKind::required(SqlType::IntArray);

    fn to_value(&self) -> Value {
        codec::encode(Some(self))
    }

    fn read(row: &Row<'_>, idx: usize) -> rusqlite::Result<Self> {
        row.get::<_, IntArray>(idx)?.into_inner().ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                idx,
                Type::Null,
                "NULL in a NOT NULL array column".into(),
            )
        })
    }
}

impl Column for Option<Vec<i64>> {
    const KIND: ColumnKind = ColumnKind::nullable(SqlType::IntArray);

    fn to_value(&self) -> Value {
        codec::encode(self.as_deref())
    }

    fn read(row: &Row<'_>, idx: usize) -> rusqlite::Result<Self> {
        Ok(row.get::<_, IntArray>(idx)?.into_inner())
    }
}

/// Timestamps are stored as RFC 3339 text.
pub(crate) fn timestamp_value(at: Timestamp) -> Value {
    Value::Text(at.to_string())
}

pub(crate) fn read_timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
