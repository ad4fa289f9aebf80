use std::error::Error as StdError;

/// Result type alias for transformations using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// An opaque transformation error.
///
/// Stages may use any error type they like; this one exists for callers who
/// only need a message and, optionally, the error that caused it.
///
/// # Examples
///
/// ```
/// use fnflow::Error;
///
/// let err = Error::msg("not a number");
/// assert_eq!(err.to_string(), "not a number");
/// ```
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl Error {
    /// Create an error from a message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap another error, using its `Display` output as the message.
    pub fn new<E>(source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an error from a message and the error that caused it.
    pub fn with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::msg(message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::msg(message)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn source_is_preserved() {
        let parse = "x".parse::<i32>().unwrap_err();
        let err = Error::with_source("bad input", parse);
        assert_eq!(err.message(), "bad input");
        assert!(err.source().is_some());
    }

    #[test]
    fn wrapping_uses_source_message() {
        let parse = "x".parse::<i32>().unwrap_err();
        let expected = parse.to_string();
        let err = Error::new(parse);
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn from_str() {
        let err: Error = "boom".into();
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "boom");
    }
}
