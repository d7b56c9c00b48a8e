use std::fmt;

/// Custom error type for connector operations
/// Implements Clone for sending through channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Invalid configuration (empty api key, empty folder id)
    InvalidConfiguration(String)
  , /// HTTP request error (DNS, refused, timeout)
    HttpError(String)
  , /// API returned a non-success status
    ApiError(String)
  , /// Failed to parse API response
    ParseError(String)
  , /// Streaming completions are not supported by this connector
    StreamingNotSupported
  , /// Generic error
    Other(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::ApiError(msg) => {
              write!(f, "API error: {}", msg)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::StreamingNotSupported => {
              write!(f,
                "Streaming chat completion is not supported"
              )
            }
          , Error::Other(msg) => {
              write!(f, "Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::Other(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::Other(s.to_string())
    }
}
