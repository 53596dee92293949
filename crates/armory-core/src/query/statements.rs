//! Fixed-shape statements derived from a resource schema.

use crate::{
    params::MatchMode,
    schema::{columns, Resource, TableSchema, CREATED_AT_COLUMN, ID_COLUMN, UPDATED_AT_COLUMN},
};

use super::Placeholders;

fn column_list<R: Resource>() -> String {
    columns::<R>().join(", ")
}

/// Every row of the table, ordered by identity.
pub fn select_all<R: Resource>() -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {ID_COLUMN}",
        column_list::<R>(),
        R::TABLE
    )
}

/// One row by identity, bound as `?1`.
pub fn select_by_key<R: Resource>() -> String {
    format!(
        "SELECT {} FROM {} WHERE {ID_COLUMN} = ?1",
        column_list::<R>(),
        R::TABLE
    )
}

/// Rows whose `column` matches `?1`.
///
/// Prefix matching compares the leading characters directly instead of
/// using `LIKE`, so it is case-sensitive and `%` or `_` in the value match
/// only themselves.
pub fn select_where<R: Resource>(column: &str, mode: MatchMode) -> String {
    let predicate = match mode {
        MatchMode::Exact => format!("{column} = ?1"),
        MatchMode::Prefix => format!("substr({column}, 1, length(?1)) = ?1"),
    };
    format!(
        "SELECT {} FROM {} WHERE {predicate} ORDER BY {ID_COLUMN}",
        column_list::<R>(),
        R::TABLE
    )
}

/// Inserts every column but the identity and returns the assigned id.
///
/// Parameters are the descriptor values in schema order followed by
/// `created_at` and `updated_at`.
pub fn insert<R: Resource>() -> String {
    let mut placeholders = Placeholders::starting_at(1);
    let columns: Vec<&str> = columns::<R>()
        .into_iter()
        .filter(|column| *column != ID_COLUMN)
        .collect();
    let values: Vec<String> = columns.iter().map(|_| placeholders.next()).collect();

    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {ID_COLUMN}",
        R::TABLE,
        columns.join(", "),
        values.join(", ")
    )
}

pub fn delete_by_key<R: Resource>() -> String {
    format!("DELETE FROM {} WHERE {ID_COLUMN} = ?1", R::TABLE)
}

pub fn exists_by_key<R: Resource>() -> String {
    format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE {ID_COLUMN} = ?1)",
        R::TABLE
    )
}

/// `CREATE TABLE IF NOT EXISTS` for a described table.
pub fn create_table(schema: &TableSchema) -> String {
    let mut definitions = vec![format!(
        "{} INTEGER PRIMARY KEY AUTOINCREMENT",
        schema.key_column
    )];
    for column in &schema.columns {
        let null = if column.kind.nullable { "" } else { " NOT NULL" };
        definitions.push(format!(
            "{} {}{null}",
            column.name,
            column.kind.sql_type.declared_type()
        ));
    }
    definitions.push(format!("{CREATED_AT_COLUMN} TEXT NOT NULL"));
    definitions.push(format!("{UPDATED_AT_COLUMN} TEXT NOT NULL"));

    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
        schema.table,
        definitions.join(",\n    ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{Class, ResourceKind, Skill};

    #[test]
    fn test_select_statements() {
        assert_eq!(
            select_all::<Skill>(),
            "SELECT id, name, skill_icon, created_at, updated_at FROM skills ORDER BY id"
        );
        assert_eq!(
            select_by_key::<Skill>(),
            "SELECT id, name, skill_icon, created_at, updated_at FROM skills WHERE id = ?1"
        );
    }

    #[test]
    fn test_select_where() {
        assert_eq!(
            select_where::<Skill>("name", MatchMode::Exact),
            "SELECT id, name, skill_icon, created_at, updated_at FROM skills \
             WHERE name = ?1 ORDER BY id"
        );
        assert!(select_where::<Skill>("name", MatchMode::Prefix)
            .contains("WHERE substr(name, 1, length(?1)) = ?1"));
    }

    #[test]
    fn test_insert_binds_every_non_key_column() {
        assert_eq!(
            insert::<Class>(),
            "INSERT INTO classes (name, rank, base, bonus, growth, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) RETURNING id"
        );
    }

    #[test]
    fn test_key_statements() {
        assert_eq!(delete_by_key::<Skill>(), "DELETE FROM skills WHERE id = ?1");
        assert_eq!(
            exists_by_key::<Skill>(),
            "SELECT EXISTS(SELECT 1 FROM skills WHERE id = ?1)"
        );
    }

    #[test]
    fn test_create_table() {
        let ddl = create_table(&ResourceKind::Class.describe());
        assert!(ddl.starts_with("CREATE TABLE IF NOT EXISTS classes ("));
        assert!(ddl.contains("id INTEGER PRIMARY KEY AUTOINCREMENT"));
        assert!(ddl.contains("base TEXT NOT NULL,"));
        assert!(ddl.contains("bonus TEXT,"));
        assert!(ddl.contains("updated_at TEXT NOT NULL\n)"));
    }

    #[test]
    fn test_create_table_is_valid_sqlite() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        for kind in ResourceKind::ALL {
            conn.execute_batch(&create_table(&kind.describe())).unwrap();
        }
        // Running twice is harmless.
        conn.execute_batch(&create_table(&ResourceKind::Weapon.describe()))
            .unwrap();
    }
}
