//! Error taxonomy for body encoding.
//!
//! Every failure mode of the encoder is one of two conditions: the record
//! cannot be represented on the wire, or an attachment's backing file cannot
//! be read. Both are fatal to the call that raised them — the encoder never
//! retries and never returns a partial body. The caller decides whether to
//! retry, substitute, or surface the failure.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while encoding a record into a request body.
#[derive(Debug, Error)]
pub enum BodyError {
    /// The record, or one of its composite field values, could not be
    /// serialised as JSON (e.g. a map with non-string keys).
    ///
    /// Produced by: both body builders, during field conversion and final
    /// serialisation.
    #[error("record could not be encoded as JSON")]
    Encoding(#[from] serde_json::Error),

    /// A file attachment's path could not be opened or read.
    ///
    /// Produced by: the multipart builder's file pass. `path` identifies the
    /// offending attachment.
    #[error("attachment file `{path}` could not be read")]
    FileAccess {
        /// The filesystem path supplied in the [`crate::FileAttachment`].
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
}
