use crate::kernel::services::ports::SessionState;
use crate::models::AboutUs;

#[derive(Debug)]
pub enum AppMessage {
    SessionResolved(SessionState),
    DocumentLoaded(Option<AboutUs>),
    DocumentLoadFailed { error: String },
    DocumentSaved(AboutUs),
    DocumentSaveFailed { error: String },
}
