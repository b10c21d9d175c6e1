/// Errors raised while parsing rrdgraph info output.
#[derive(Debug, thiserror::Error)]
pub enum GraphInfoError {
    /// The header ended before the blob marker, or a namespaced
    /// sub-record was missing one of its required fields.
    #[error("malformed rrdgraph info: {0}")]
    MalformedInput(String),

    /// A header line matched none of the recognized shapes.
    #[error("unable to parse rrdgraph info line: '{0}'")]
    MalformedLine(String),

    /// The requested image format is not in the content-type table.
    #[error("image format '{0}' is not supported")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, GraphInfoError>;
