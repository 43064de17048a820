use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Empty href for item '{item_id}' in section '{section}'")]
    EmptyHref { section: String, item_id: String },

    #[error("Duplicate item id '{item_id}' in section '{section}'")]
    DuplicateItemId { section: String, item_id: String },

    #[error("Duplicate section title: {0}")]
    DuplicateSectionTitle(String),

    #[error("Unknown menu archetype: {0}")]
    UnknownArchetype(String),

    #[error("Unknown icon: {0}")]
    UnknownIcon(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MenuError>;
