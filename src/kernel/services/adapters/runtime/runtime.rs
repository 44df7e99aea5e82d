use super::message::AppMessage;
use crate::kernel::services::ports::{DocumentStore, SessionSource};
use crate::models::AboutUs;
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// Runs gateway calls off the UI thread; results come back as [`AppMessage`]s.
pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
    store: Arc<dyn DocumentStore>,
    session: Arc<dyn SessionSource>,
}

impl AsyncRuntime {
    pub fn new(
        tx: Sender<AppMessage>,
        store: Arc<dyn DocumentStore>,
        session: Arc<dyn SessionSource>,
    ) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        Ok(Self {
            runtime,
            tx,
            store,
            session,
        })
    }

    pub fn resolve_session(&self) {
        let tx = self.tx.clone();
        let session = self.session.clone();
        self.runtime.spawn_blocking(move || {
            let state = session.resolve();
            let _ = tx.send(AppMessage::SessionResolved(state));
        });
    }

    pub fn fetch_document(&self) {
        let tx = self.tx.clone();
        let store = self.store.clone();
        self.runtime.spawn_blocking(move || {
            let message = match store.fetch() {
                Ok(doc) => AppMessage::DocumentLoaded(doc),
                Err(e) => {
                    tracing::warn!(error = %e, "fetch document failed");
                    AppMessage::DocumentLoadFailed {
                        error: e.to_string(),
                    }
                }
            };
            let _ = tx.send(message);
        });
    }

    pub fn replace_document(&self, doc: AboutUs) {
        let tx = self.tx.clone();
        let store = self.store.clone();
        self.runtime.spawn_blocking(move || {
            let message = match store.replace(&doc) {
                Ok(saved) => AppMessage::DocumentSaved(saved),
                Err(e) => {
                    tracing::warn!(error = %e, "replace document failed");
                    AppMessage::DocumentSaveFailed {
                        error: e.to_string(),
                    }
                }
            };
            let _ = tx.send(message);
        });
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime/async_runtime.rs"]
mod tests;
