use miette::Diagnostic;
use repogen_model::TypeName;
use thiserror::Error;

/// Result type for generation-model operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid parameter name '{name}'")]
    #[diagnostic(
        code(repogen::invalid_parameter),
        help(
            "parameter names must be non-empty identifiers: letters, digits, and underscores, not starting with a digit"
        )
    )]
    InvalidParameter { name: String },

    #[error("parameter '{name}' is already declared")]
    #[diagnostic(
        code(repogen::duplicate_parameter),
        help("the model rejects duplicate parameter names under DuplicatePolicy::Reject")
    )]
    DuplicateParameter { name: String },

    #[error("field '{name}' is already registered")]
    #[diagnostic(
        code(repogen::duplicate_field),
        help("the registry rejects duplicate field names under DuplicatePolicy::Reject")
    )]
    DuplicateField { name: String },

    #[error("no field of type '{ty}' is registered")]
    #[diagnostic(
        code(repogen::missing_logger_field),
        help("register the shared logger field before requesting guarded-logging fragments")
    )]
    MissingLoggerField { ty: TypeName },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidParameter { name: "".into() };
        assert_eq!(err.to_string(), "invalid parameter name ''");

        let err = Error::MissingLoggerField {
            ty: TypeName::named("Logger"),
        };
        assert_eq!(err.to_string(), "no field of type 'Logger' is registered");
    }
}
