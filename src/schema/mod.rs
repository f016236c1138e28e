//! Declarative table descriptors for the F1 dataset.
//!
//! Every entity type is described once, as data: which CSV file feeds it,
//! how each source column maps onto a store column, the column's type and
//! nullability, and which foreign keys and indexes the table carries. The
//! store initializer, the validator, the bulk loader and the index builder
//! all iterate over these descriptors instead of hand-writing per-table code.

pub mod registry;
pub mod validator;

pub use registry::{Entity, TABLES};

/// Semantic type of a column after coercion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Integer,
    Real,
    Text,
}

impl FieldType {
    pub fn sql_type(self) -> &'static str {
        match self {
            FieldType::Integer => "INTEGER",
            FieldType::Real => "REAL",
            FieldType::Text => "TEXT",
        }
    }
}

/// One column: source header name, store column name and coercion rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub source: &'static str,
    pub column: &'static str,
    pub ty: FieldType,
    pub nullable: bool,
    /// Inclusive lower bound, integer fields only
    pub min: Option<i64>,
}

impl Field {
    pub const fn required(source: &'static str, column: &'static str, ty: FieldType) -> Self {
        Self {
            source,
            column,
            ty,
            nullable: false,
            min: None,
        }
    }

    pub const fn nullable(source: &'static str, column: &'static str, ty: FieldType) -> Self {
        Self {
            source,
            column,
            ty,
            nullable: true,
            min: None,
        }
    }

    pub const fn at_least(self, min: i64) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKey {
    pub column: &'static str,
    pub parent_table: &'static str,
    pub parent_column: &'static str,
}

impl ForeignKey {
    pub const fn new(
        column: &'static str,
        parent_table: &'static str,
        parent_column: &'static str,
    ) -> Self {
        Self {
            column,
            parent_table,
            parent_column,
        }
    }
}

/// Non-unique single-column index created after the load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexDef {
    pub name: &'static str,
    pub column: &'static str,
}

impl IndexDef {
    pub const fn new(name: &'static str, column: &'static str) -> Self {
        Self { name, column }
    }
}

#[derive(Debug)]
pub struct TableSchema {
    pub entity: Entity,
    pub table: &'static str,
    pub source_file: &'static str,
    pub fields: &'static [Field],
    pub primary_key: &'static [&'static str],
    pub foreign_keys: &'static [ForeignKey],
    pub indexes: &'static [IndexDef],
}

impl TableSchema {
    pub fn field(&self, column: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.column == column)
    }

    /// Tables this one references, in declaration order
    pub fn parents(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.foreign_keys.iter().map(|fk| fk.parent_table)
    }

    pub fn create_table_sql(&self) -> String {
        let mut lines: Vec<String> = self
            .fields
            .iter()
            .map(|f| {
                let null = if f.nullable { "" } else { " NOT NULL" };
                format!("{} {}{}", f.column, f.ty.sql_type(), null)
            })
            .collect();

        if !self.primary_key.is_empty() {
            lines.push(format!("PRIMARY KEY ({})", self.primary_key.join(", ")));
        }
        for fk in self.foreign_keys {
            lines.push(format!(
                "FOREIGN KEY ({}) REFERENCES {}({})",
                fk.column, fk.parent_table, fk.parent_column
            ));
        }

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
            self.table,
            lines.join(",\n    ")
        )
    }

    /// Positional insert covering every field in declaration order
    pub fn insert_sql(&self) -> String {
        let columns: Vec<&str> = self.fields.iter().map(|f| f.column).collect();
        let placeholders: Vec<String> = (1..=self.fields.len()).map(|i| format!("?{i}")).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            columns.join(", "),
            placeholders.join(", ")
        )
    }

    pub fn create_index_sql(&self, index: &IndexDef) -> String {
        format!(
            "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
            index.name, self.table, index.column
        )
    }
}
