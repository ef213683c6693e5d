use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque bearer token, supplied by the host with every request
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for building the `Authorization` header
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// A base: a named container of tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
}

/// Field type names used by the upstream API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceFieldType {
    SingleLineText,
    MultilineText,
    RichText,
    Email,
    Url,
    PhoneNumber,
    SingleSelect,
    MultipleSelects,
    Number,
    Currency,
    Percent,
    Rating,
    Checkbox,
    Date,
    DateTime,
    CreatedTime,
    LastModifiedTime,
    /// `multipleAttachments`, or the legacy `attachment`; both serialize back
    /// as `multipleAttachments`
    Attachment,
    /// Any type name outside the known vocabulary, kept verbatim
    Other(String),
}

impl SourceFieldType {
    pub fn as_str(&self) -> &str {
        match self {
            SourceFieldType::SingleLineText => "singleLineText",
            SourceFieldType::MultilineText => "multilineText",
            SourceFieldType::RichText => "richText",
            SourceFieldType::Email => "email",
            SourceFieldType::Url => "url",
            SourceFieldType::PhoneNumber => "phoneNumber",
            SourceFieldType::SingleSelect => "singleSelect",
            SourceFieldType::MultipleSelects => "multipleSelects",
            SourceFieldType::Number => "number",
            SourceFieldType::Currency => "currency",
            SourceFieldType::Percent => "percent",
            SourceFieldType::Rating => "rating",
            SourceFieldType::Checkbox => "checkbox",
            SourceFieldType::Date => "date",
            SourceFieldType::DateTime => "dateTime",
            SourceFieldType::CreatedTime => "createdTime",
            SourceFieldType::LastModifiedTime => "lastModifiedTime",
            SourceFieldType::Attachment => "multipleAttachments",
            SourceFieldType::Other(name) => name,
        }
    }
}

impl From<&str> for SourceFieldType {
    fn from(name: &str) -> Self {
        match name {
            "singleLineText" => SourceFieldType::SingleLineText,
            "multilineText" => SourceFieldType::MultilineText,
            "richText" => SourceFieldType::RichText,
            "email" => SourceFieldType::Email,
            "url" => SourceFieldType::Url,
            "phoneNumber" => SourceFieldType::PhoneNumber,
            "singleSelect" => SourceFieldType::SingleSelect,
            "multipleSelects" => SourceFieldType::MultipleSelects,
            "number" => SourceFieldType::Number,
            "currency" => SourceFieldType::Currency,
            "percent" => SourceFieldType::Percent,
            "rating" => SourceFieldType::Rating,
            "checkbox" => SourceFieldType::Checkbox,
            "date" => SourceFieldType::Date,
            "dateTime" => SourceFieldType::DateTime,
            "createdTime" => SourceFieldType::CreatedTime,
            "lastModifiedTime" => SourceFieldType::LastModifiedTime,
            "multipleAttachments" | "attachment" => SourceFieldType::Attachment,
            other => SourceFieldType::Other(other.to_string()),
        }
    }
}

impl From<String> for SourceFieldType {
    fn from(name: String) -> Self {
        SourceFieldType::from(name.as_str())
    }
}

impl From<SourceFieldType> for String {
    fn from(source_type: SourceFieldType) -> Self {
        source_type.as_str().to_string()
    }
}

impl fmt::Display for SourceFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Definition of a single field in a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub source_type: SourceFieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A table and its declared field schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub fields: Vec<FieldDef>,
}

/// Field types of the reporting host
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SemanticType {
    Text,
    Number,
    Boolean,
    Date,
    Datetime,
    Url,
}

impl SemanticType {
    /// Type name the host expects in a field definition
    pub fn host_type_name(&self) -> &'static str {
        match self {
            SemanticType::Text => "TEXT",
            SemanticType::Number => "NUMBER",
            SemanticType::Boolean => "BOOLEAN",
            SemanticType::Date => "YEAR_MONTH_DAY",
            SemanticType::Datetime => "YEAR_MONTH_DAY_HOUR",
            SemanticType::Url => "URL",
        }
    }

    pub fn concept_type(&self) -> ConceptType {
        match self {
            SemanticType::Number => ConceptType::Metric,
            _ => ConceptType::Dimension,
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticType::Text => write!(f, "TEXT"),
            SemanticType::Number => write!(f, "NUMBER"),
            SemanticType::Boolean => write!(f, "BOOLEAN"),
            SemanticType::Date => write!(f, "DATE"),
            SemanticType::Datetime => write!(f, "DATETIME"),
            SemanticType::Url => write!(f, "URL"),
        }
    }
}

/// Whether the host aggregates a field (metric) or groups by it (dimension)
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConceptType {
    Dimension,
    Metric,
}

/// A source field translated into the host vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedField {
    pub id: String,
    pub name: String,
    pub semantic_type: SemanticType,
}

/// One upstream row, keyed by field name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "createdTime", default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    /// Upstream omits empty cells, so a missing key is a normal state
    #[serde(default)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// One page of a cursor-paginated record listing
#[derive(Debug, Clone, PartialEq)]
pub struct RecordPage {
    pub records: Vec<Record>,
    /// Continuation token; `None` on the last page
    pub cursor: Option<String>,
}

/// A projected row, values in mapped-field order
pub type DataRow = Vec<serde_json::Value>;
