//! Local submission records
//!
//! Each submission kind owns one JSON document with a single top-level list,
//! e.g. `{ "forms": [ ... ] }`. Writers always read the existing list, append,
//! and rewrite the whole document through a temp file + rename, so the file is
//! valid JSON after every write.
//!
//! A document that cannot be parsed is moved aside to `<file>.corrupt` (or
//! the first free `.corrupt.N` when earlier ones exist) and a
//! fresh list is started. The same policy applies to every kind.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use kiosk_core::prelude::*;
use kiosk_core::{FeedbackSubmission, FormSubmission, Submission, SubmissionKind};
use serde_json::{Map, Value};

/// A JSON document holding one named list
#[derive(Debug, Clone)]
pub struct JsonListFile {
    path: PathBuf,
    key: &'static str,
}

impl JsonListFile {
    pub fn new(path: impl Into<PathBuf>, key: &'static str) -> Self {
        Self {
            path: path.into(),
            key,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the list; a missing file is an empty list
    ///
    /// A corrupted document is quarantined and reported as an empty list.
    pub fn read(&self) -> Result<Vec<Value>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {:?}", self.path))?;
        match self.parse(&content) {
            Ok(items) => Ok(items),
            Err(reason) => {
                let err = Error::corruption(&self.path, reason);
                warn!("{}; starting a fresh list", err);
                self.quarantine()?;
                Ok(Vec::new())
            }
        }
    }

    fn parse(&self, content: &str) -> std::result::Result<Vec<Value>, String> {
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let doc: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
        match doc.get(self.key) {
            Some(Value::Array(items)) => Ok(items.clone()),
            Some(_) => Err(format!("`{}` is not a list", self.key)),
            None => Err(format!("missing `{}` list", self.key)),
        }
    }

    /// Move the document to the first free `<file>.corrupt[.N]`
    fn quarantine(&self) -> Result<()> {
        let corrupt = (0u32..)
            .map(|n| {
                let mut name = self.path.clone().into_os_string();
                match n {
                    0 => name.push(".corrupt"),
                    n => name.push(format!(".corrupt.{n}")),
                }
                PathBuf::from(name)
            })
            .find(|candidate| !candidate.exists())
            .ok_or_else(|| Error::persistence("no free quarantine name"))?;
        std::fs::rename(&self.path, &corrupt)?;
        info!("Moved corrupted record to {:?}", corrupt);
        Ok(())
    }

    /// Rewrite the whole document atomically (temp file + rename)
    pub fn write(&self, items: &[Value]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::persistence(format!("Failed to create {:?}: {}", parent, e))
                })?;
            }
        }

        let mut doc = Map::new();
        doc.insert(self.key.to_string(), Value::Array(items.to_vec()));
        let content = serde_json::to_string_pretty(&Value::Object(doc))?;

        let mut temp = self.path.clone().into_os_string();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);

        std::fs::write(&temp, content)
            .map_err(|e| Error::persistence(format!("Failed to write temp file: {}", e)))?;
        std::fs::rename(&temp, &self.path)
            .map_err(|e| Error::persistence(format!("Failed to rename temp file: {}", e)))?;
        Ok(())
    }

    /// Read-merge-write a single item, returning the new list length
    pub fn append(&self, item: Value) -> Result<usize> {
        let mut items = self.read()?;
        items.push(item);
        self.write(&items)?;
        Ok(items.len())
    }
}

/// Append-only records of form and feedback submissions
#[derive(Debug)]
pub struct RecordStore {
    dir: PathBuf,
    // Serializes read-merge-write cycles from concurrent sends
    lock: Mutex<()>,
}

impl RecordStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file(&self, kind: SubmissionKind) -> JsonListFile {
        JsonListFile::new(self.dir.join(kind.file_name()), kind.list_key())
    }

    pub fn path(&self, kind: SubmissionKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    /// Persist one submission, returning how many records of its kind exist
    pub fn append(&self, submission: &Submission) -> Result<usize> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| Error::persistence("record store lock poisoned"))?;
        let count = self.file(submission.kind()).append(submission.to_value()?)?;
        debug!("Stored {} submission #{}", submission.kind(), count);
        Ok(count)
    }

    /// Raw records of one kind, in submission order
    pub fn load(&self, kind: SubmissionKind) -> Result<Vec<Value>> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| Error::persistence("record store lock poisoned"))?;
        self.file(kind).read()
    }

    pub fn load_forms(&self) -> Result<Vec<FormSubmission>> {
        self.load(SubmissionKind::Form)?
            .into_iter()
            .map(|v| serde_json::from_value(v).map_err(Error::from))
            .collect()
    }

    pub fn load_feedbacks(&self) -> Result<Vec<FeedbackSubmission>> {
        self.load(SubmissionKind::Feedback)?
            .into_iter()
            .map(|v| serde_json::from_value(v).map_err(Error::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn form(n: usize) -> FormSubmission {
        FormSubmission {
            name: format!("Visitor {n}"),
            company_name: "Acme".into(),
            designation: "Engineer".into(),
            phone_number: "0123456789".into(),
            email: format!("visitor{n}@acme.io"),
        }
    }

    #[test]
    fn test_append_creates_file_with_list() {
        let temp = tempdir().unwrap();
        let store = RecordStore::new(temp.path());

        let count = store.append(&Submission::Form(form(1))).unwrap();
        assert_eq!(count, 1);

        let content = std::fs::read_to_string(temp.path().join("formdata.json")).unwrap();
        let doc: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(doc["forms"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_n_appends_read_back_in_order() {
        let temp = tempdir().unwrap();
        let store = RecordStore::new(temp.path());

        for n in 0..5 {
            store.append(&Submission::Form(form(n))).unwrap();
        }

        let forms = store.load_forms().unwrap();
        assert_eq!(forms.len(), 5);
        for (n, f) in forms.iter().enumerate() {
            assert_eq!(f, &form(n));
        }
    }

    #[test]
    fn test_kinds_use_separate_files() {
        let temp = tempdir().unwrap();
        let store = RecordStore::new(temp.path());

        store.append(&Submission::Form(form(0))).unwrap();
        store
            .append(&Submission::Feedback(FeedbackSubmission { star_rating: 5 }))
            .unwrap();
        store
            .append(&Submission::Feedback(FeedbackSubmission { star_rating: 2 }))
            .unwrap();

        assert_eq!(store.load_forms().unwrap().len(), 1);
        let feedbacks = store.load_feedbacks().unwrap();
        assert_eq!(
            feedbacks.iter().map(|f| f.star_rating).collect::<Vec<_>>(),
            vec![5, 2]
        );
        assert!(temp.path().join("feedback.json").exists());
    }

    #[test]
    fn test_corrupted_file_is_quarantined_and_restarted() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("feedback.json");
        // Two raw fragments appended back to back
        std::fs::write(&path, "{\"starRating\":4}{\"starRating\":3}").unwrap();

        let store = RecordStore::new(temp.path());
        let count = store
            .append(&Submission::Feedback(FeedbackSubmission { star_rating: 1 }))
            .unwrap();

        assert_eq!(count, 1);
        assert!(temp.path().join("feedback.json.corrupt").exists());
        assert_eq!(store.load_feedbacks().unwrap().len(), 1);
    }

    #[test]
    fn test_wrong_shape_is_treated_as_corrupted() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("formdata.json"), r#"{"forms": 3}"#).unwrap();

        let store = RecordStore::new(temp.path());
        assert!(store.load(SubmissionKind::Form).unwrap().is_empty());
        assert!(temp.path().join("formdata.json.corrupt").exists());
    }

    #[test]
    fn test_repeated_corruption_keeps_every_quarantined_document() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("formdata.json");
        let store = RecordStore::new(temp.path());

        std::fs::write(&path, "first broken {").unwrap();
        assert!(store.load_forms().unwrap().is_empty());
        std::fs::write(&path, "second broken {").unwrap();
        assert!(store.load_forms().unwrap().is_empty());

        let first = std::fs::read_to_string(temp.path().join("formdata.json.corrupt")).unwrap();
        let second =
            std::fs::read_to_string(temp.path().join("formdata.json.corrupt.1")).unwrap();
        assert_eq!(first, "first broken {");
        assert_eq!(second, "second broken {");
    }

    #[test]
    fn test_unreadable_record_is_an_error_not_quarantined() {
        let temp = tempdir().unwrap();
        std::fs::create_dir(temp.path().join("formdata.json")).unwrap();

        let store = RecordStore::new(temp.path());
        let err = store.load_forms().unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!temp.path().join("formdata.json.corrupt").exists());
    }

    #[test]
    fn test_empty_file_is_empty_list() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("formdata.json"), "").unwrap();

        let store = RecordStore::new(temp.path());
        assert!(store.load_forms().unwrap().is_empty());
        assert!(!temp.path().join("formdata.json.corrupt").exists());
    }

    #[test]
    fn test_append_creates_missing_directory() {
        let temp = tempdir().unwrap();
        let store = RecordStore::new(temp.path().join("nested/data"));
        store.append(&Submission::Form(form(0))).unwrap();
        assert!(store.path(SubmissionKind::Form).exists());
    }
}
