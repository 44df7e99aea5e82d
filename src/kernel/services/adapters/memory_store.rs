use crate::kernel::services::ports::{DocumentStore, StoreError};
use crate::models::AboutUs;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Process-local document store. Used by tests and `--memory` sessions.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    doc: Mutex<Option<AboutUs>>,
    fail: AtomicBool,
    writes: AtomicUsize,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(doc: AboutUs) -> Self {
        Self {
            doc: Mutex::new(Some(doc)),
            ..Self::default()
        }
    }

    /// While set, every operation fails with [`StoreError::Unavailable`].
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Option<AboutUs> {
        self.doc.lock().ok().and_then(|doc| doc.clone())
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("store offline".to_string()));
        }
        Ok(())
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn fetch(&self) -> Result<Option<AboutUs>, StoreError> {
        self.check()?;
        let doc = self
            .doc
            .lock()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        Ok(doc.clone())
    }

    fn replace(&self, doc: &AboutUs) -> Result<AboutUs, StoreError> {
        self.check()?;
        let mut slot = self
            .doc
            .lock()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        *slot = Some(doc.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(doc.clone())
    }
}
