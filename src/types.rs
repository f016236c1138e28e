use rusqlite::types::{Null, ToSql, ToSqlOutput};

use crate::schema::Entity;

/// One CSV row as decoded, cells in the order of its schema's fields.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// 1-based line in the source file, header included
    pub line: u64,
    pub values: Vec<String>,
}

/// A row after the null sentinel has been replaced with `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    pub line: u64,
    pub values: Vec<Option<String>>,
}

impl NormalizedRecord {
    /// `None` past the end of the row, `Some(None)` for a cell with no value.
    pub fn get(&self, idx: usize) -> Option<Option<&str>> {
        self.values.get(idx).map(|v| v.as_deref())
    }
}

/// A coerced cell, ready to bind as an SQL parameter
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Real(f64),
    Text(String),
    Null,
}

impl ToSql for FieldValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            FieldValue::Integer(v) => ToSqlOutput::from(*v),
            FieldValue::Real(v) => ToSqlOutput::from(*v),
            FieldValue::Text(v) => ToSqlOutput::from(v.as_str()),
            FieldValue::Null => ToSqlOutput::from(Null),
        })
    }
}

/// A validated row whose values line up with its schema's field order.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedRecord {
    pub entity: Entity,
    pub line: u64,
    pub values: Vec<FieldValue>,
}

impl TypedRecord {
    /// Value of a store column, by name
    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        let schema = self.entity.schema();
        let idx = schema.fields.iter().position(|f| f.column == column)?;
        self.values.get(idx)
    }
}
