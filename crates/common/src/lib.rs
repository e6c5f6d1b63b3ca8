/// Common types and utilities for the interface generator

/// State mutability of a contract function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateMutability {
    /// Does not read or modify chain state
    Pure,

    /// Reads but does not modify chain state
    View,

    /// Modifies chain state, rejects value transfers
    #[default]
    NonPayable,

    /// Modifies chain state and accepts value transfers
    Payable,
}

impl std::fmt::Display for StateMutability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateMutability::Pure => write!(f, "pure"),
            StateMutability::View => write!(f, "view"),
            StateMutability::NonPayable => write!(f, "nonpayable"),
            StateMutability::Payable => write!(f, "payable"),
        }
    }
}

impl From<&str> for StateMutability {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pure" => StateMutability::Pure,
            "view" => StateMutability::View,
            "payable" => StateMutability::Payable,
            _ => StateMutability::NonPayable,
        }
    }
}

/// Error type for generator operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input is not structured data of the expected shape
    #[error("Malformed interface description: {0}")]
    MalformedDescription(String),

    /// A declared type matches no mapping rule
    #[error("Unsupported type `{declared_type}`{}", entry_suffix(.entry))]
    UnsupportedType {
        declared_type: String,
        entry: Option<String>,
    },

    /// The destination could not be created or written
    #[error("Failed to write output to {path}: {message}")]
    OutputWrite { path: String, message: String },

    /// Invalid generator configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

fn entry_suffix(entry: &Option<String>) -> String {
    match entry {
        Some(name) => format!(" in function `{}`", name),
        None => String::new(),
    }
}

impl Error {
    /// Create a new malformed description error
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Error::MalformedDescription(msg.into())
    }

    /// Create a new unsupported type error not yet tied to an entry
    pub fn unsupported_type<S: Into<String>>(declared_type: S) -> Self {
        Error::UnsupportedType {
            declared_type: declared_type.into(),
            entry: None,
        }
    }

    /// Create a new output write error
    pub fn output_write<P: Into<String>, S: Into<String>>(path: P, msg: S) -> Self {
        Error::OutputWrite {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Attach the name of the function that triggered an unsupported type
    pub fn in_entry<S: Into<String>>(self, name: S) -> Self {
        match self {
            Error::UnsupportedType { declared_type, entry: None } => Error::UnsupportedType {
                declared_type,
                entry: Some(name.into()),
            },
            other => other,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedDescription(format!("invalid JSON: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_mutability_from_str() {
        assert_eq!(StateMutability::from("view"), StateMutability::View);
        assert_eq!(StateMutability::from("PURE"), StateMutability::Pure);
        assert_eq!(StateMutability::from("payable"), StateMutability::Payable);
        assert_eq!(StateMutability::from("something"), StateMutability::NonPayable);
    }

    #[test]
    fn test_unsupported_type_message_names_entry() {
        let err = Error::unsupported_type("tuple");
        assert_eq!(err.to_string(), "Unsupported type `tuple`");

        let err = err.in_entry("getPair");
        assert_eq!(err.to_string(), "Unsupported type `tuple` in function `getPair`");
    }

    #[test]
    fn test_in_entry_keeps_first_entry() {
        let err = Error::unsupported_type("fixed128x18")
            .in_entry("first")
            .in_entry("second");
        match err {
            Error::UnsupportedType { entry, .. } => assert_eq!(entry.as_deref(), Some("first")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_json_error_is_malformed() {
        let err: Error = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::MalformedDescription(_)));
    }
}
