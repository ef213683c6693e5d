use airlens_query::{ConceptType, MappedField};
use serde::Serialize;

/// Host capability that receives the field list of a table
pub trait SchemaBuilder: Send {
    fn add_dimension(&mut self, field: &MappedField);

    fn add_metric(&mut self, field: &MappedField);

    /// Numbers become metrics, everything else a dimension
    fn add_field(&mut self, field: &MappedField) {
        match field.semantic_type.concept_type() {
            ConceptType::Metric => self.add_metric(field),
            ConceptType::Dimension => self.add_dimension(field),
        }
    }
}

/// A field definition in the host's schema format
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostField {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: &'static str,
    pub concept_type: ConceptType,
}

impl HostField {
    fn new(field: &MappedField, concept_type: ConceptType) -> Self {
        Self {
            id: field.id.clone(),
            name: field.name.clone(),
            field_type: field.semantic_type.host_type_name(),
            concept_type,
        }
    }
}

/// Default builder, collecting fields in insertion order
#[derive(Debug, Default)]
pub struct HostFields {
    fields: Vec<HostField>,
}

impl HostFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> Vec<HostField> {
        self.fields
    }
}

impl SchemaBuilder for HostFields {
    fn add_dimension(&mut self, field: &MappedField) {
        self.fields.push(HostField::new(field, ConceptType::Dimension));
    }

    fn add_metric(&mut self, field: &MappedField) {
        self.fields.push(HostField::new(field, ConceptType::Metric));
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaResponse {
    pub schema: Vec<HostField>,
}

/// One row of values, in schema order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataRowResponse {
    pub values: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataResponse {
    pub schema: Vec<HostField>,
    pub rows: Vec<DataRowResponse>,
}
