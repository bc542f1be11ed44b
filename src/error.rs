use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("Invalid {field} '{value}': {expected}")]
    InvalidFormat {
        field: String,
        value: String,
        expected: String,
    },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("No contacts found.")]
    EmptyDirectory,

    #[error("Missing argument. Usage: {usage}")]
    MissingArgument { usage: String },

    #[error("Invalid {field}: {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BookError {
    pub fn contact_not_found(name: &str) -> Self {
        BookError::NotFound {
            entity_type: "Contact".into(),
            id: name.to_string(),
        }
    }

    pub fn phone_not_found(phone: &str) -> Self {
        BookError::NotFound {
            entity_type: "Phone number".into(),
            id: phone.to_string(),
        }
    }
}

pub type BookResult<T> = Result<T, BookError>;
