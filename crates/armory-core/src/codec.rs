//! Integer array columns.
//!
//! Stat vectors and ID lists are stored as brace-delimited array literals
//! (`{1,2,3}`, `{}`), the same textual form PostgreSQL uses for `INTEGER[]`.
//! A SQL `NULL` is a distinct state from the empty array and survives a
//! round trip as `None`.

use std::num::ParseIntError;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef};
use thiserror::Error;

/// Failure to parse a stored array literal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrayParseError {
    /// The text is not wrapped in `{` and `}`
    #[error("array literal {0:?} must be enclosed in braces")]
    Unbraced(String),
    /// One of the elements is not a valid integer
    #[error("array element {element:?} is not an integer: {source}")]
    InvalidElement {
        element: String,
        #[source]
        source: ParseIntError,
    },
}

/// Decodes a stored array; `None` is the SQL `NULL` marker.
pub fn decode(raw: Option<&str>) -> Result<Option<Vec<i64>>, ArrayParseError> {
    raw.map(parse_array).transpose()
}

/// Encodes a sequence as a driver value. `None` binds as `NULL`.
pub fn encode(values: Option<&[i64]>) -> Value {
    match values {
        Some(values) => Value::Text(format_array(values)),
        None => Value::Null,
    }
}

/// Parses a brace-delimited literal such as `{4, 8, 15}`.
pub fn parse_array(raw: &str) -> Result<Vec<i64>, ArrayParseError> {
    let inner = raw
        .trim()
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| ArrayParseError::Unbraced(raw.to_string()))?;

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .map(|element| {
            let element = element.trim();
            element
                .parse::<i64>()
                .map_err(|source| ArrayParseError::InvalidElement {
                    element: element.to_string(),
                    source,
                })
        })
        .collect()
}

/// Renders a sequence as a brace-delimited literal.
pub fn format_array(values: &[i64]) -> String {
    let elements: Vec<String> = values.iter().map(i64::to_string).collect();
    format!("{{{}}}", elements.join(","))
}

/// Bind and scan adapter for nullable array columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntArray(pub Option<Vec<i64>>);

impl IntArray {
    /// Consumes the adapter, returning the decoded sequence.
    pub fn into_inner(self) -> Option<Vec<i64>> {
        self.0
    }
}

impl ToSql for IntArray {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::Owned(encode(self.0.as_deref())))
    }
}

impl FromSql for IntArray {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Null => Ok(Self(None)),
            ValueRef::Text(bytes) => {
                let text =
                    std::str::from_utf8(bytes).map_err(|e| FromSqlError::Other(Box::new(e)))?;
                parse_array(text)
                    .map(|values| Self(Some(values)))
                    .map_err(|e| FromSqlError::Other(Box::new(e)))
            }
            _ => Err(FromSqlError::InvalidType),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_null_marker() {
        assert_eq!(decode(None), Ok(None));
    }

    #[test]
    fn test_decode_empty_array() {
        assert_eq!(decode(Some("{}")), Ok(Some(vec![])));
        assert_eq!(decode(Some("{ }")), Ok(Some(vec![])));
    }

    #[test]
    fn test_decode_preserves_source_order() {
        assert_eq!(decode(Some("{3,1,2}")), Ok(Some(vec![3, 1, 2])));
        assert_eq!(decode(Some(" {-4, 10 ,0} ")), Ok(Some(vec![-4, 10, 0])));
    }

    #[test]
    fn test_decode_rejects_non_integer_element() {
        let err = decode(Some("{1,two,3}")).unwrap_err();
        match err {
            ArrayParseError::InvalidElement { element, .. } => assert_eq!(element, "two"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(decode(Some("{1,,3}")).is_err());
        assert!(decode(Some("{1,NULL}")).is_err());
    }

    #[test]
    fn test_decode_rejects_missing_braces() {
        assert_eq!(
            decode(Some("1,2,3")),
            Err(ArrayParseError::Unbraced("1,2,3".to_string()))
        );
        assert!(decode(Some("{1,2")).is_err());
    }

    #[test]
    fn test_encode_values() {
        assert_eq!(encode(None), Value::Null);
        assert_eq!(encode(Some(&[])), Value::Text("{}".to_string()));
        assert_eq!(encode(Some(&[1, 2, 3])), Value::Text("{1,2,3}".to_string()));
    }

    #[test]
    fn test_round_trip_through_text() {
        for values in [None, Some(vec![]), Some(vec![20, 5, -1, 40])] {
            let decoded = match encode(values.as_deref()) {
                Value::Null => decode(None),
                Value::Text(text) => decode(Some(&text)),
                other => panic!("unexpected encoding: {other:?}"),
            };
            assert_eq!(decoded, Ok(values));
        }
    }

    #[test]
    fn test_int_array_through_sqlite() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (v TEXT)").unwrap();

        for values in [None, Some(vec![]), Some(vec![7, 8, 9])] {
            conn.execute("DELETE FROM t", []).unwrap();
            conn.execute("INSERT INTO t (v) VALUES (?1)", [IntArray(values.clone())])
                .unwrap();
            let read: IntArray = conn.query_row("SELECT v FROM t", [], |row| row.get(0)).unwrap();
            assert_eq!(read.into_inner(), values);
        }
    }

    #[test]
    fn test_int_array_scan_reports_parse_failure() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let err = conn
            .query_row("SELECT '{1,x}'", [], |row| row.get::<_, IntArray>(0))
            .unwrap_err();
        match err {
            rusqlite::Error::FromSqlConversionFailure(0, _, source) => {
                assert!(source.downcast_ref::<ArrayParseError>().is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
