use thiserror::Error;

use crate::person::import::ImportError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Import(#[from] ImportError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
}

impl From<models::errors::ModelError> for ServiceError {
    fn from(e: models::errors::ModelError) -> Self {
        match e {
            models::errors::ModelError::Validation(msg) => Self::Validation(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity() {
        assert_eq!(ServiceError::not_found("Person").to_string(), "Person not found");
    }

    #[test]
    fn model_validation_keeps_message() {
        let e: ServiceError = models::errors::ModelError::Validation("Invalid person data".into()).into();
        assert!(matches!(e, ServiceError::Validation(ref m) if m == "Invalid person data"));
    }
}
