use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum MedzError {
    #[error("Medication not found: {0}")]
    MedicationNotFound(Uuid),

    #[error("Invalid medication: {0}")]
    InvalidMedication(String),

    #[error("Failed to read slot '{slot}': {source}")]
    SlotRead {
        slot: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write slot '{slot}': {source}")]
    SlotWrite {
        slot: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, MedzError>;
