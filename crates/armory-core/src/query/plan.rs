//! Partial-update plans.
//!
//! A plan is the SQL text of one `UPDATE ... RETURNING` statement plus the
//! ordered values for its numbered placeholders. Only the columns whose
//! patch value is present are assigned, so a sparse patch never overwrites
//! the columns it does not mention.

use rusqlite::types::Value;

use super::Placeholders;
use crate::schema::{Field, Resource};

/// Highest parameter index SQLite accepts (`SQLITE_MAX_VARIABLE_NUMBER`).
pub const MAX_PARAMETER_INDEX: usize = 32_766;

/// SQL text and its positional parameters.
///
/// The number of placeholders in [`sql`](Self::sql) always equals
/// [`params`](Self::params)`.len()`, and the placeholder indices are
/// contiguous and increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    sql: String,
    params: Vec<Value>,
}

impl QueryPlan {
    pub(crate) fn new(sql: String, params: Vec<Value>) -> Self {
        Self { sql, params }
    }

    /// Starts a partial update of `table`.
    pub fn update(table: &'static str) -> UpdatePlanBuilder {
        UpdatePlanBuilder::new(table)
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    /// Indices of the numbered placeholders, in order of appearance.
    pub fn placeholder_indices(&self) -> Vec<usize> {
        let mut indices = Vec::new();
        let mut chars = self.sql.char_indices().peekable();
        while let Some((_, c)) = chars.next() {
            if c != '?' {
                continue;
            }
            let mut digits = String::new();
            while let Some((_, d)) = chars.peek().copied().filter(|(_, d)| d.is_ascii_digit()) {
                digits.push(d);
                chars.next();
            }
            if let Ok(index) = digits.parse() {
                indices.push(index);
            }
        }
        indices
    }
}

/// Builds the plan for one sparse update.
#[derive(Debug, Clone)]
pub struct UpdatePlanBuilder {
    table: &'static str,
    always: Vec<(&'static str, Value)>,
    base_index: usize,
}

impl UpdatePlanBuilder {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            always: Vec::new(),
            base_index: 1,
        }
    }

    /// Adds a column that is assigned regardless of the patch. Always-included
    /// columns come first, in the order they were added.
    pub fn always(mut self, column: &'static str, value: Value) -> Self {
        self.always.push((column, value));
        self
    }

    /// Sets the index of the first placeholder. SQLite numbers parameters from
    /// 1 up to [`MAX_PARAMETER_INDEX`]; values outside that range are clamped.
    pub fn base_index(mut self, base: usize) -> Self {
        self.base_index = base.clamp(1, MAX_PARAMETER_INDEX);
        self
    }

    /// Assembles `UPDATE <table> SET ... WHERE <key_column> = ?n RETURNING
    /// <returning>`.
    ///
    /// Present fields are visited in schema order and the key is bound
    /// last. With nothing to assign the statement degenerates to a no-op
    /// self-assignment of the key, which still reports whether the row
    /// exists.
    pub fn build<R: Resource>(
        self,
        fields: &[Field<R>],
        patch: &R::Patch,
        key_column: &str,
        key: Value,
        returning: &[&str],
    ) -> QueryPlan {
        let mut placeholders = Placeholders::starting_at(self.base_index);
        let capacity = self.always.len() + fields.len() + 1;
        let mut assignments: Vec<String> = Vec::with_capacity(capacity);
        let mut params = Vec::with_capacity(capacity);

        for (column, value) in self.always {
            assignments.push(format!("{column} = {}", placeholders.next()));
            params.push(value);
        }

        for field in fields {
            if let Some(value) = field.bind_patch(patch) {
                assignments.push(format!("{} = {}", field.column_name(), placeholders.next()));
                params.push(value);
            }
        }

        if assignments.is_empty() {
            assignments.push(format!("{key_column} = {key_column}"));
        }

        let mut sql = format!(
            "UPDATE {} SET {} WHERE {key_column} = {}",
            self.table,
            assignments.join(", "),
            placeholders.next()
        );
        params.push(key);

        if !returning.is_empty() {
            sql.push_str(" RETURNING ");
            sql.push_str(&returning.join(", "));
        }

        QueryPlan::new(sql, params)
    }
}
