use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use serde_json::{Map, Value};

use super::{id_matches, next_record_id, Document, StoreError};

/// Shared handle over the in-memory document. Cloning is cheap; every clone
/// sees the same data. Handlers receive a `Repository` through axum state
/// rather than reaching for a global.
///
/// Mutations are written through to the backing file when one is configured.
/// There is no cross-request transaction: concurrent updates to the same
/// record are last-writer-wins.
#[derive(Clone)]
pub struct Repository {
    document: Arc<RwLock<Document>>,
    data_file: Option<PathBuf>,
}

impl Repository {
    /// Load the document from `path`, falling back to an empty document when
    /// the file does not exist yet. Bootstraps the auth collections and
    /// persists the result immediately.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let mut document = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            Document::from_value(serde_json::from_str(&raw)?)
        } else {
            Document::default()
        };
        document.bootstrap();

        let repo = Self {
            document: Arc::new(RwLock::new(document)),
            data_file: Some(path.to_path_buf()),
        };
        repo.flush()?;
        Ok(repo)
    }

    /// Build a repository with no backing file. Used by tests.
    pub fn in_memory(mut document: Document) -> Self {
        document.bootstrap();
        Self {
            document: Arc::new(RwLock::new(document)),
            data_file: None,
        }
    }

    pub fn collection_names(&self) -> Vec<String> {
        self.read().collection_names()
    }

    pub fn has_collection(&self, name: &str) -> bool {
        self.read().has_collection(name)
    }

    /// Snapshot of a collection, in insertion order.
    pub fn records(&self, name: &str) -> Option<Vec<Value>> {
        self.read().collection(name).cloned()
    }

    pub fn count(&self, name: &str) -> usize {
        self.read().collection(name).map(Vec::len).unwrap_or(0)
    }

    /// Find a record by the raw id path segment (numeric segments compare as
    /// numbers, everything else as strings).
    pub fn find(&self, name: &str, id: &str) -> Option<Value> {
        self.read()
            .collection(name)?
            .iter()
            .find(|record| id_matches(record, id))
            .cloned()
    }

    /// First record satisfying `predicate`.
    pub fn find_where<P>(&self, name: &str, predicate: P) -> Option<Value>
    where
        P: Fn(&Value) -> bool,
    {
        self.read()
            .collection(name)?
            .iter()
            .find(|record| predicate(record))
            .cloned()
    }

    /// Append a record, assigning a timestamp-millis id when none is given,
    /// and return the stored record. Creates the collection when absent.
    pub fn insert(&self, name: &str, mut record: Map<String, Value>) -> Result<Value, StoreError> {
        let stored = {
            let mut doc = self.write();
            record.entry("id".to_string()).or_insert_with(next_record_id);
            let stored = Value::Object(record);
            doc.collection_mut(name)?.push(stored.clone());
            stored
        };
        self.flush()?;
        Ok(stored)
    }

    /// Shallow-merge `patch` into the record with the given id. Returns the
    /// updated record, or `None` when no record matches.
    pub fn merge(
        &self,
        name: &str,
        id: &str,
        patch: Map<String, Value>,
    ) -> Result<Option<Value>, StoreError> {
        let updated = {
            let mut doc = self.write();
            if !doc.has_collection(name) {
                return Ok(None);
            }
            let records = doc.collection_mut(name)?;
            match records.iter_mut().find(|record| id_matches(record, id)) {
                Some(record) => {
                    if let Some(fields) = record.as_object_mut() {
                        for (key, value) in patch {
                            fields.insert(key, value);
                        }
                    }
                    Some(record.clone())
                }
                None => None,
            }
        };
        if updated.is_some() {
            self.flush()?;
        }
        Ok(updated)
    }

    /// Mutate the first record satisfying `predicate` and return the updated
    /// record, or `None` when no record matches.
    pub fn update_where<P, F>(
        &self,
        name: &str,
        predicate: P,
        mutate: F,
    ) -> Result<Option<Value>, StoreError>
    where
        P: Fn(&Value) -> bool,
        F: FnOnce(&mut Map<String, Value>),
    {
        let updated = {
            let mut doc = self.write();
            if !doc.has_collection(name) {
                return Ok(None);
            }
            let records = doc.collection_mut(name)?;
            match records.iter_mut().find(|record| predicate(record)) {
                Some(record) => {
                    if let Some(fields) = record.as_object_mut() {
                        mutate(fields);
                    }
                    Some(record.clone())
                }
                None => None,
            }
        };
        if updated.is_some() {
            self.flush()?;
        }
        Ok(updated)
    }

    /// Remove and return the record with the given id.
    pub fn remove(&self, name: &str, id: &str) -> Result<Option<Value>, StoreError> {
        let removed = {
            let mut doc = self.write();
            if !doc.has_collection(name) {
                return Ok(None);
            }
            let records = doc.collection_mut(name)?;
            records
                .iter()
                .position(|record| id_matches(record, id))
                .map(|index| records.remove(index))
        };
        if removed.is_some() {
            self.flush()?;
        }
        Ok(removed)
    }

    /// Write the whole document back to the data file. A repository without
    /// a backing file (tests) skips this.
    fn flush(&self) -> Result<(), StoreError> {
        let Some(path) = &self.data_file else {
            return Ok(());
        };
        let serialized = serde_json::to_string_pretty(&*self.read())?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Document> {
        self.document.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Document> {
        self.document.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn repo_with(value: Value) -> Repository {
        Repository::in_memory(Document::from_value(value))
    }

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn insert_assigns_id_when_missing() {
        let repo = repo_with(json!({"contrats": []}));
        let created = repo
            .insert("contrats", object(json!({"type": "CDI"})))
            .unwrap();
        assert!(created["id"].is_number());
        assert_eq!(repo.count("contrats"), 1);
    }

    #[test]
    fn insert_keeps_explicit_id() {
        let repo = repo_with(json!({"contrats": []}));
        let created = repo
            .insert("contrats", object(json!({"id": 42, "type": "CDD"})))
            .unwrap();
        assert_eq!(created["id"], 42);
        assert_eq!(repo.find("contrats", "42").unwrap()["type"], "CDD");
    }

    #[test]
    fn find_compares_numeric_segment_as_number() {
        let repo = repo_with(json!({"contrats": [{"id": 5}, {"id": "ref-5"}]}));
        assert_eq!(repo.find("contrats", "5").unwrap()["id"], 5);
        assert_eq!(repo.find("contrats", "ref-5").unwrap()["id"], "ref-5");
        assert!(repo.find("contrats", "6").is_none());
    }

    #[test]
    fn merge_is_shallow_and_idempotent() {
        let repo = repo_with(json!({"contrats": [{"id": 1, "type": "CDI", "salaire": 1000}]}));
        let patch = object(json!({"salaire": 1200}));

        let once = repo.merge("contrats", "1", patch.clone()).unwrap().unwrap();
        assert_eq!(once["type"], "CDI");
        assert_eq!(once["salaire"], 1200);

        let twice = repo.merge("contrats", "1", patch).unwrap().unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn remove_returns_record_and_shrinks_collection() {
        let repo = repo_with(json!({"contrats": [{"id": 1}, {"id": 2}]}));
        let removed = repo.remove("contrats", "1").unwrap().unwrap();
        assert_eq!(removed["id"], 1);
        assert_eq!(repo.count("contrats"), 1);
        assert!(repo.remove("contrats", "99").unwrap().is_none());
        assert_eq!(repo.count("contrats"), 1);
    }

    #[test]
    fn update_where_mutates_matching_record() {
        let repo = repo_with(json!({"sessions": [{"id": 1, "access_token": "a"}]}));
        let updated = repo
            .update_where(
                "sessions",
                |s| s["access_token"] == "a",
                |fields| {
                    fields.insert("access_token".to_string(), json!("b"));
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated["access_token"], "b");
        assert!(repo
            .find_where("sessions", |s| s["access_token"] == "a")
            .is_none());
    }

    #[test]
    fn open_persists_bootstrap_and_reloads() {
        let path = std::env::temp_dir().join("sirh_api_repo_test.json");
        let _ = std::fs::remove_file(&path);

        let repo = Repository::open(&path).unwrap();
        repo.insert("employees", object(json!({"id": 1, "nom": "Durand"})))
            .unwrap();
        drop(repo);

        let reloaded = Repository::open(&path).unwrap();
        assert_eq!(reloaded.find("employees", "1").unwrap()["nom"], "Durand");
        assert_eq!(reloaded.count("users"), 1);

        let _ = std::fs::remove_file(&path);
    }
}
