//! Translation of upstream field types into the host's semantic types.

use crate::types::{FieldDef, MappedField, SemanticType, SourceFieldType, Table};

impl SourceFieldType {
    /// Fixed lookup; unknown types fall back to text
    pub fn semantic_type(&self) -> SemanticType {
        match self {
            SourceFieldType::SingleLineText
            | SourceFieldType::MultilineText
            | SourceFieldType::RichText
            | SourceFieldType::Email
            | SourceFieldType::Url
            | SourceFieldType::PhoneNumber
            | SourceFieldType::SingleSelect
            | SourceFieldType::MultipleSelects => SemanticType::Text,
            SourceFieldType::Number
            | SourceFieldType::Currency
            | SourceFieldType::Percent
            | SourceFieldType::Rating => SemanticType::Number,
            SourceFieldType::Checkbox => SemanticType::Boolean,
            SourceFieldType::Date => SemanticType::Date,
            SourceFieldType::DateTime
            | SourceFieldType::CreatedTime
            | SourceFieldType::LastModifiedTime => SemanticType::Datetime,
            SourceFieldType::Attachment => SemanticType::Url,
            SourceFieldType::Other(_) => SemanticType::Text,
        }
    }
}

pub fn map_field(field: &FieldDef) -> MappedField {
    MappedField {
        id: field.id.clone(),
        name: field.name.clone(),
        semantic_type: field.source_type.semantic_type(),
    }
}

/// Map every field of `table`, preserving field order
pub fn map_fields(table: &Table) -> Vec<MappedField> {
    table.fields.iter().map(map_field).collect()
}
