//! Error types for the `simdash-models` crate.
//!
//! All fallible constructors in this crate return variants of
//! [`ModelError`].

/// Errors produced when constructing or validating model types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A required text field was empty after trimming whitespace.
    #[error("field `{field}` must not be empty")]
    EmptyField {
        /// The name of the empty field.
        field: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_empty_field() {
        let err = ModelError::EmptyField {
            field: "phone".into(),
        };
        assert_eq!(err.to_string(), "field `phone` must not be empty");
    }
}
