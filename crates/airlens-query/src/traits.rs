use crate::error::{DataError, Result};
use crate::pagination::collect_pages;
use crate::types::*;
use async_trait::async_trait;
use tracing::info;

/// Lists bases and their table schemas
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Get the type name of this source
    fn source_type(&self) -> &'static str;

    /// List every base visible to `credential`, in server order
    async fn list_collections(&self, credential: &Credential) -> Result<Vec<Collection>>;

    /// List the tables of a base together with their fields
    async fn list_tables(&self, credential: &Credential, collection_id: &str)
        -> Result<Vec<Table>>;

    /// Find a table by exact name among the tables of a base
    async fn resolve_table_schema(
        &self,
        credential: &Credential,
        collection_id: &str,
        table_name: &str,
    ) -> Result<Table> {
        let tables = self.list_tables(credential, collection_id).await?;
        find_table(tables, table_name)
    }
}

/// Pick the table whose name equals `table_name` exactly
pub fn find_table(tables: Vec<Table>, table_name: &str) -> Result<Table> {
    tables
        .into_iter()
        .find(|table| table.name == table_name)
        .ok_or_else(|| DataError::not_found(format!("Table not found: {}", table_name)))
}

/// Reads table rows through cursor pagination
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch a single page; `cursor` is `None` for the first page
    async fn fetch_page(
        &self,
        credential: &Credential,
        collection_id: &str,
        table_name: &str,
        cursor: Option<&str>,
    ) -> Result<RecordPage>;

    /// Optional cap on the number of pages `fetch_all` may request
    fn max_pages(&self) -> Option<usize> {
        None
    }

    /// Fetch every record of a table, in upstream order
    async fn fetch_all(
        &self,
        credential: &Credential,
        collection_id: &str,
        table_name: &str,
    ) -> Result<Vec<Record>> {
        let records = collect_pages(self.max_pages(), |cursor| async move {
            let page = self
                .fetch_page(credential, collection_id, table_name, cursor.as_deref())
                .await?;
            Ok((page.records, page.cursor))
        })
        .await?;

        info!(
            "Fetched {} records from {}/{}",
            records.len(),
            collection_id,
            table_name
        );

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    struct StaticSource {
        tables: Vec<Table>,
        pages: Vec<RecordPage>,
        requested: Mutex<Vec<Option<String>>>,
        max_pages: Option<usize>,
    }

    impl StaticSource {
        fn with_pages(pages: Vec<RecordPage>) -> Self {
            Self {
                tables: vec![],
                pages,
                requested: Mutex::new(vec![]),
                max_pages: None,
            }
        }
    }

    #[async_trait]
    impl MetadataSource for StaticSource {
        fn source_type(&self) -> &'static str {
            "static"
        }

        async fn list_collections(&self, _credential: &Credential) -> Result<Vec<Collection>> {
            Ok(vec![])
        }

        async fn list_tables(
            &self,
            _credential: &Credential,
            _collection_id: &str,
        ) -> Result<Vec<Table>> {
            Ok(self.tables.clone())
        }
    }

    #[async_trait]
    impl RecordSource for StaticSource {
        async fn fetch_page(
            &self,
            _credential: &Credential,
            _collection_id: &str,
            _table_name: &str,
            cursor: Option<&str>,
        ) -> Result<RecordPage> {
            let mut requested = self.requested.lock().unwrap();
            requested.push(cursor.map(str::to_string));
            self.pages
                .get(requested.len() - 1)
                .cloned()
                .ok_or_else(|| DataError::network("no more pages"))
        }

        fn max_pages(&self) -> Option<usize> {
            self.max_pages
        }
    }

    fn table(name: &str) -> Table {
        Table {
            id: format!("tbl{}", name),
            name: name.to_string(),
            fields: vec![],
        }
    }

    fn record(id: &str) -> Record {
        serde_json::from_value(json!({ "id": id, "fields": {} })).unwrap()
    }

    #[tokio::test]
    async fn test_resolve_table_schema_exact_match() {
        let mut source = StaticSource::with_pages(vec![]);
        source.tables = vec![table("tasks"), table("Tasks"), table("Tasks ")];

        let resolved = source
            .resolve_table_schema(&Credential::new("key"), "app1", "Tasks")
            .await
            .unwrap();

        assert_eq!(resolved.id, "tblTasks");
    }

    #[tokio::test]
    async fn test_resolve_table_schema_not_found() {
        let mut source = StaticSource::with_pages(vec![]);
        source.tables = vec![table("Projects"), table("People")];

        let err = source
            .resolve_table_schema(&Credential::new("key"), "app1", "Tasks")
            .await
            .unwrap_err();

        assert_eq!(err, DataError::not_found("Table not found: Tasks"));
    }

    #[tokio::test]
    async fn test_fetch_all_follows_cursor() {
        let source = StaticSource::with_pages(vec![
            RecordPage {
                records: vec![record("rec1"), record("rec2")],
                cursor: Some("abc".to_string()),
            },
            RecordPage {
                records: vec![record("rec3")],
                cursor: None,
            },
        ]);

        let records = source
            .fetch_all(&Credential::new("key"), "app1", "Tasks")
            .await
            .unwrap();

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["rec1", "rec2", "rec3"]);
        assert_eq!(
            *source.requested.lock().unwrap(),
            vec![None, Some("abc".to_string())]
        );
    }

    #[tokio::test]
    async fn test_fetch_all_respects_max_pages() {
        let mut source = StaticSource::with_pages(vec![
            RecordPage {
                records: vec![record("rec1")],
                cursor: Some("p2".to_string()),
            },
            RecordPage {
                records: vec![record("rec2")],
                cursor: Some("p3".to_string()),
            },
        ]);
        source.max_pages = Some(2);

        let err = source
            .fetch_all(&Credential::new("key"), "app1", "Tasks")
            .await
            .unwrap_err();

        assert_eq!(err, DataError::PageLimitExceeded(2));
        assert_eq!(source.requested.lock().unwrap().len(), 2);
    }
}
