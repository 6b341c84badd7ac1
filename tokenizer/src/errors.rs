use std::{io, path::PathBuf};

/// Errors that can occur while building, using, or persisting a tokenizer.
#[derive(Debug, thiserror::Error)]
pub enum TokenizerError {
    #[error("The maximum sequence length must be at least 1")]
    InvalidMaxSeqLength,
    /// An id was passed to the decoder which isn't in the vocabulary.
    #[error("No token in the vocabulary has the id {id}")]
    UnknownId { id: i64 },
    #[error("Unable to access \"{}\"", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Unable to parse the vocabulary in \"{}\"", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unable to save the vocabulary to \"{}\"", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
