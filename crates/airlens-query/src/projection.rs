use crate::types::{DataRow, MappedField, Record};
use serde_json::Value;

/// Extract the values of `fields` from `record`, in field order.
///
/// Values pass through untouched; a field the record does not carry becomes `null`.
pub fn project_row(record: &Record, fields: &[MappedField]) -> DataRow {
    fields
        .iter()
        .map(|field| record.fields.get(&field.name).cloned().unwrap_or(Value::Null))
        .collect()
}

/// One row per record, in record order
pub fn project_rows(records: &[Record], fields: &[MappedField]) -> Vec<DataRow> {
    records
        .iter()
        .map(|record| project_row(record, fields))
        .collect()
}
