use thiserror::Error;

/// Errors that can occur while talking to a recipe or GIF provider
///
/// Every variant names the operation that failed so the same taxonomy can be
/// shared by all providers.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The outbound request could not be built (malformed URL, bad query)
    #[error("failed to build request for {operation}: {source}")]
    RequestConstruction {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The request never produced a usable response (connect, DNS, timeout, HTTP status)
    #[error("request failed for {operation}: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be read to the end
    #[error("failed to read response body for {operation}: {source}")]
    ResponseRead {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The body was read but does not have the expected shape
    #[error("failed to decode response for {operation}: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The provider answered successfully but returned nothing usable
    #[error("{operation} returned no result")]
    EmptyResult { operation: &'static str },
}

/// Fieldless category of a [`LookupError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`LookupError::RequestConstruction`]
    RequestConstruction,
    /// See [`LookupError::Transport`]
    Transport,
    /// See [`LookupError::ResponseRead`]
    ResponseRead,
    /// See [`LookupError::Decode`]
    Decode,
    /// See [`LookupError::EmptyResult`]
    EmptyResult,
}

impl LookupError {
    /// Category of this error, for matching without the attached context
    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::RequestConstruction { .. } => ErrorKind::RequestConstruction,
            LookupError::Transport { .. } => ErrorKind::Transport,
            LookupError::ResponseRead { .. } => ErrorKind::ResponseRead,
            LookupError::Decode { .. } => ErrorKind::Decode,
            LookupError::EmptyResult { .. } => ErrorKind::EmptyResult,
        }
    }

    /// Name of the provider operation that failed
    pub fn operation(&self) -> &'static str {
        match self {
            LookupError::RequestConstruction { operation, .. }
            | LookupError::Transport { operation, .. }
            | LookupError::ResponseRead { operation, .. }
            | LookupError::Decode { operation, .. }
            | LookupError::EmptyResult { operation } => *operation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_message_names_operation() {
        let err = LookupError::EmptyResult {
            operation: "giphy.get_random_by_tag",
        };
        assert_eq!(err.kind(), ErrorKind::EmptyResult);
        assert_eq!(err.operation(), "giphy.get_random_by_tag");
        assert_eq!(err.to_string(), "giphy.get_random_by_tag returned no result");
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = LookupError::Decode {
            operation: "recipe_puppy.search",
            source,
        };
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err
            .to_string()
            .starts_with("failed to decode response for recipe_puppy.search"));
    }
}
