use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Fails with [`CoreError::Validation`] when `value` is empty after trimming.
pub fn ensure_required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_rejected() {
        assert_eq!(
            ensure_required("name", "   "),
            Err(CoreError::Validation("name is required".to_string()))
        );
        assert!(ensure_required("name", "Vegetarian").is_ok());
    }
}
