//! Webinar catalog
//!
//! Reads the JSON list stored under the `webinars` key. The catalog does
//! not own that list's schema or its initial population; `upsert` exists
//! so publishers and tests can seed it.

use serde_json::Value;
use tracing::{instrument, warn};

use super::traits::{KeyValueStore, WEBINARS_KEY};
use crate::error::Result;
use crate::models::WebinarRecord;

pub struct WebinarCatalog<S> {
    store: S,
}

fn id_of(value: &Value) -> Option<&str> {
    value.get("id").and_then(Value::as_str)
}

impl<S: KeyValueStore> WebinarCatalog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All readable webinars.
    ///
    /// An unset key is an empty catalog. A value that is not a JSON array is
    /// logged and read as empty; elements that do not decode as a webinar
    /// are logged and skipped without hiding their siblings.
    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Vec<WebinarRecord>> {
        let Some(raw) = self.store.get(WEBINARS_KEY)? else {
            return Ok(Vec::new());
        };

        let elements: Vec<Value> = match serde_json::from_str(&raw) {
            Ok(elements) => elements,
            Err(e) => {
                warn!(error = %e, "Ignoring malformed webinar list");
                return Ok(Vec::new());
            }
        };

        let webinars = elements
            .into_iter()
            .enumerate()
            .filter_map(|(index, element)| {
                let id = id_of(&element).map(str::to_owned);
                match serde_json::from_value(element) {
                    Ok(webinar) => Some(webinar),
                    Err(e) => {
                        warn!(index, id = ?id, error = %e, "Skipping unreadable webinar");
                        None
                    }
                }
            })
            .collect();
        Ok(webinars)
    }

    /// Find a webinar by id
    pub fn find(&self, id: &str) -> Result<Option<WebinarRecord>> {
        Ok(self.list()?.into_iter().find(|w| w.id == id))
    }

    /// Insert a webinar, replacing the element with the same id.
    ///
    /// Every other element is written back untouched, including ones this
    /// catalog cannot read. Fails without writing when the stored value is
    /// not a JSON array.
    #[instrument(skip(self, webinar), fields(webinar_id = %webinar.id))]
    pub fn upsert(&self, webinar: WebinarRecord) -> Result<()> {
        let mut elements: Vec<Value> = match self.store.get(WEBINARS_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };

        let value = serde_json::to_value(&webinar)?;
        match elements
            .iter_mut()
            .find(|element| id_of(element) == Some(webinar.id.as_str()))
        {
            Some(existing) => *existing = value,
            None => elements.push(value),
        }
        self.store
            .set(WEBINARS_KEY, &serde_json::to_string(&elements)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::storage::MemoryStore;

    fn webinar(id: &str, name: &str) -> WebinarRecord {
        WebinarRecord {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            date: "2025-03-01".into(),
            time: Some("10:00".into()),
            period: Some("AM".into()),
            thumbnail: None,
            stream_call_id: None,
        }
    }

    fn stored(store: &MemoryStore) -> Vec<Value> {
        serde_json::from_str(&store.get(WEBINARS_KEY).unwrap().unwrap()).unwrap()
    }

    const MIXED: &str = r#"[
        {"id":"good","name":"Good","date":"2025-03-01","time":"10:00","period":"AM"},
        {"id":"draft","date":"2025-04-01","hostId":"user-1"}
    ]"#;

    #[test]
    fn test_empty_store_is_empty_catalog() {
        let catalog = WebinarCatalog::new(MemoryStore::new());
        assert!(catalog.list().unwrap().is_empty());
        assert!(catalog.find("w1").unwrap().is_none());
    }

    #[test]
    fn test_upsert_then_find() {
        let catalog = WebinarCatalog::new(MemoryStore::new());
        catalog.upsert(webinar("w1", "First")).unwrap();
        catalog.upsert(webinar("w2", "Second")).unwrap();
        catalog.upsert(webinar("w1", "First, renamed")).unwrap();

        let list = catalog.list().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(catalog.find("w1").unwrap().unwrap().name, "First, renamed");
    }

    #[test]
    fn test_malformed_list_reads_as_empty() {
        let store = MemoryStore::new();
        store.set(WEBINARS_KEY, "{not json").unwrap();
        let catalog = WebinarCatalog::new(&store);
        assert!(catalog.list().unwrap().is_empty());
    }

    #[test]
    fn test_reads_list_written_by_another_client() {
        let store = MemoryStore::new();
        store
            .set(
                WEBINARS_KEY,
                r#"[{"id":"abc","name":"Live","date":"2025-03-01","time":"02:30","period":"PM","streamCallId":"s-1"}]"#,
            )
            .unwrap();
        let catalog = WebinarCatalog::new(&store);
        let found = catalog.find("abc").unwrap().unwrap();
        assert_eq!(found.stream_call_id(), Some("s-1"));
    }

    #[test]
    fn test_unreadable_sibling_does_not_hide_valid_webinar() {
        let store = MemoryStore::new();
        store.set(WEBINARS_KEY, MIXED).unwrap();
        let catalog = WebinarCatalog::new(&store);

        assert_eq!(catalog.list().unwrap().len(), 1);
        assert_eq!(catalog.find("good").unwrap().unwrap().name, "Good");
        assert!(catalog.find("draft").unwrap().is_none());
    }

    #[test]
    fn test_upsert_keeps_unreadable_and_foreign_data() {
        let store = MemoryStore::new();
        store.set(WEBINARS_KEY, MIXED).unwrap();
        let catalog = WebinarCatalog::new(&store);

        catalog.upsert(webinar("new", "New")).unwrap();

        let elements = stored(&store);
        let ids: Vec<&str> = elements.iter().filter_map(id_of).collect();
        assert_eq!(ids, vec!["good", "draft", "new"]);
        assert_eq!(elements[1]["hostId"], "user-1");
        assert_eq!(catalog.list().unwrap().len(), 2);
    }

    #[test]
    fn test_upsert_replaces_only_matching_element() {
        let store = MemoryStore::new();
        store
            .set(
                WEBINARS_KEY,
                r#"[{"id":"w1","name":"Old","date":"2025-03-01"},{"id":"w2","name":"Other","date":"2025-03-02","createdAt":"2025-01-01T00:00:00Z"}]"#,
            )
            .unwrap();
        let catalog = WebinarCatalog::new(&store);

        catalog.upsert(webinar("w1", "Renamed")).unwrap();

        let elements = stored(&store);
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0]["name"], "Renamed");
        assert_eq!(elements[1]["createdAt"], "2025-01-01T00:00:00Z");
    }

    #[test]
    fn test_upsert_refuses_to_overwrite_non_array() {
        let store = MemoryStore::new();
        store.set(WEBINARS_KEY, "{not json").unwrap();
        let catalog = WebinarCatalog::new(&store);

        assert!(matches!(
            catalog.upsert(webinar("w1", "First")),
            Err(Error::Serialization(_))
        ));
        assert_eq!(store.get(WEBINARS_KEY).unwrap().as_deref(), Some("{not json"));
    }
}
