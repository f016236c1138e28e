use super::{Field, FieldType, TableSchema};
use crate::error::{ValidationError, ValidationReason};
use crate::types::{FieldValue, NormalizedRecord, TypedRecord};

impl TableSchema {
    /// Position in `headers` of every field's source column, in field order.
    ///
    /// A header lacking any column rejects the whole file at line 1. Extra
    /// header columns are ignored.
    pub fn header_positions(&self, headers: &[String]) -> Result<Vec<usize>, ValidationError> {
        self.fields
            .iter()
            .map(|field| {
                headers
                    .iter()
                    .position(|h| h == field.source)
                    .ok_or_else(|| self.reject(1, field, None, ValidationReason::MissingColumn))
            })
            .collect()
    }

    /// Coerce a normalized record into this table's typed row.
    ///
    /// Fields are checked in declaration order and the first rejected field
    /// fails the whole record; nothing is ever skipped or defaulted.
    pub fn validate(&self, record: &NormalizedRecord) -> Result<TypedRecord, ValidationError> {
        let mut values = Vec::with_capacity(self.fields.len());

        for (idx, field) in self.fields.iter().enumerate() {
            let raw = match record.get(idx) {
                Some(raw) => raw,
                None => {
                    return Err(self.reject(record.line, field, None, ValidationReason::MissingColumn))
                }
            };

            match coerce(field, raw) {
                Ok(value) => values.push(value),
                Err(reason) => {
                    return Err(self.reject(record.line, field, raw.map(str::to_string), reason))
                }
            }
        }

        Ok(TypedRecord {
            entity: self.entity,
            line: record.line,
            values,
        })
    }

    fn reject(
        &self,
        line: u64,
        field: &Field,
        value: Option<String>,
        reason: ValidationReason,
    ) -> ValidationError {
        ValidationError {
            entity: self.entity.name(),
            line,
            field: field.source,
            value,
            reason,
        }
    }
}

/// Apply one field's coercion rule to a normalized cell
pub fn coerce(field: &Field, raw: Option<&str>) -> Result<FieldValue, ValidationReason> {
    let raw = match raw {
        Some(raw) => raw,
        None if field.nullable => return Ok(FieldValue::Null),
        None => return Err(ValidationReason::Null),
    };

    match field.ty {
        FieldType::Text => Ok(FieldValue::Text(raw.to_string())),
        FieldType::Integer => {
            let value: i64 = raw
                .trim()
                .parse()
                .map_err(|_| ValidationReason::NotAnInteger)?;
            if let Some(min) = field.min {
                if value < min {
                    return Err(ValidationReason::BelowMinimum(min));
                }
            }
            Ok(FieldValue::Integer(value))
        }
        FieldType::Real => {
            let value: f64 = raw.trim().parse().map_err(|_| ValidationReason::NotANumber)?;
            if !value.is_finite() {
                return Err(ValidationReason::NotANumber);
            }
            Ok(FieldValue::Real(value))
        }
    }
}
