/// Errors that can occur while resolving prefixed names.
#[derive(Debug, thiserror::Error)]
pub enum PrefixError {
    /// A prefixed name whose prefix has no registered namespace.
    #[error("Prefix for `{0}` is not registered")]
    UnresolvedPrefix(String),

    /// A bare name with no matching prefix and no default vocabulary.
    #[error("No prefix or vocabulary resolves `{0}`")]
    UnresolvedName(String),

    /// A local name passed to a prefix helper contained a `:`.
    #[error("Invalid local name `{0}`: must not contain `:`")]
    InvalidLocalName(String),
}

/// Result type alias for prefix operations.
pub type Result<T> = std::result::Result<T, PrefixError>;
