use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Functionality already exists: {0}")]
    DuplicateFunctionality(String),

    #[error("Event type already exists: {event_type} (functionality: {functionality})")]
    DuplicateEventType {
        functionality: String,
        event_type: String,
    },

    #[error("Functionality not found: {0}")]
    FunctionalityNotFound(String),
}
