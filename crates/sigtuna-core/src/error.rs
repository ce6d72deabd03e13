#![forbid(unsafe_code)]

/// Errors produced by the Sigtuna XML Security object model.
///
/// Every failure is fatal to the call that raised it; no operation retries
/// or recovers locally, and no partially-constructed value escapes.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("XML parsing error: {0}")]
    XmlParse(String),

    #[error("malformed element: {0}")]
    MalformedElement(String),

    #[error("missing required attribute: {0}")]
    MissingAttribute(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}

pub type Result<T> = std::result::Result<T, Error>;
