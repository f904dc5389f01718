//! Value types crossing the encoder boundary.
//!
//! [`FileAttachment`] comes *in* alongside a record; [`EncodedBody`] goes
//! *out* to whatever builds the HTTP request. Both are plain data — the
//! encoder reads attachments and produces a fresh body per call, retaining no
//! references past the call.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Attachments
// ---------------------------------------------------------------------------

/// A named file to merge into a multipart body.
///
/// `name` is the wire field name the file part is written under. When it
/// matches a record field's resolved wire name, the file replaces that field
/// entirely — the field's value is never emitted alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttachment {
    /// Wire field name for the file part.
    pub name: String,
    /// Filesystem location of the file contents. Read once per encode; the
    /// handle is released before the call returns, on success and failure
    /// alike.
    pub path: PathBuf,
}

impl FileAttachment {
    /// Creates a new [`FileAttachment`].
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Encoded output
// ---------------------------------------------------------------------------

/// A fully encoded request body plus the content type describing it.
///
/// Produced fresh by every builder call; ownership transfers to the caller,
/// which transmits and then discards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBody {
    content: Vec<u8>,
    content_type: String,
}

impl EncodedBody {
    /// Creates an [`EncodedBody`] from raw bytes and their content type.
    pub fn new(content: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            content,
            content_type: content_type.into(),
        }
    }

    /// Returns the body bytes.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Returns the content type, including any boundary parameter.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Consumes the body, returning `(content, content_type)`.
    pub fn into_parts(self) -> (Vec<u8>, String) {
        (self.content, self.content_type)
    }
}
