//! # airlens-query
//!
//! Core abstractions for exposing an external tables API to a reporting host.
//!
//! ## Architecture
//!
//! - **MetadataSource**: lists bases, lists tables with their field schema, and
//!   resolves a single table by name
//! - **RecordSource**: fetches one page of records; `fetch_all` drives the cursor
//!   loop on top of it
//! - **map_fields**: translates upstream field types into the host's semantic types
//! - **project_rows**: turns records into ordered value rows for a mapped field list
//!
//! ## Example
//!
//! ```rust
//! use airlens_query::{map_fields, project_rows, FieldDef, Record, SourceFieldType, Table};
//!
//! let table = Table {
//!     id: "tbl1".to_string(),
//!     name: "Tasks".to_string(),
//!     fields: vec![FieldDef {
//!         id: "f1".to_string(),
//!         name: "Name".to_string(),
//!         source_type: SourceFieldType::from("singleLineText"),
//!         description: None,
//!     }],
//! };
//!
//! let fields = map_fields(&table);
//! let record: Record = serde_json::from_str(r#"{"id":"rec1","fields":{"Name":"A"}}"#).unwrap();
//! let rows = project_rows(&[record], &fields);
//! assert_eq!(rows[0][0], "A");
//! ```

pub mod error;
pub mod mapping;
pub mod pagination;
pub mod projection;
pub mod traits;
pub mod types;

// Re-export commonly used items
pub use error::{DataError, Result};
pub use mapping::{map_field, map_fields};
pub use pagination::collect_pages;
pub use projection::{project_row, project_rows};
pub use traits::{find_table, MetadataSource, RecordSource};
pub use types::{
    Collection, ConceptType, Credential, DataRow, FieldDef, MappedField, Record, RecordPage,
    SemanticType, SourceFieldType, Table,
};
