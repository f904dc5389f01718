//! Minimal `multipart/form-data` writer.
//!
//! Accumulates parts into an in-memory buffer under a freshly generated
//! boundary. Only what the body builders need: text form fields and streamed
//! file parts with CRLF framing per RFC 2046/7578. Buffer writes are
//! infallible; the only fallible operation is copying a file part's contents.

use std::io::{self, Read};

use uuid::Uuid;

/// Writes multipart parts into an owned byte buffer.
///
/// The boundary is generated at construction and never collides with part
/// content in practice (32 random hex digits). [`MultipartWriter::finish`]
/// writes the closing boundary and yields the buffer together with the
/// boundary-bearing content type.
pub(crate) struct MultipartWriter {
    buf: Vec<u8>,
    boundary: String,
}

impl MultipartWriter {
    pub(crate) fn new() -> Self {
        Self {
            buf: Vec::new(),
            boundary: Uuid::new_v4().simple().to_string(),
        }
    }

    /// Appends a text form field.
    pub(crate) fn field(&mut self, name: &str, value: &str) {
        self.part_header(name, None);
        self.buf.extend_from_slice(value.as_bytes());
        self.buf.extend_from_slice(b"\r\n");
    }

    /// Appends a file part, streaming `content` to the buffer. Returns the
    /// number of content bytes copied.
    pub(crate) fn file(
        &mut self,
        name: &str,
        filename: &str,
        content: &mut impl Read,
    ) -> io::Result<u64> {
        self.part_header(name, Some(filename));
        let copied = io::copy(content, &mut self.buf)?;
        self.buf.extend_from_slice(b"\r\n");
        Ok(copied)
    }

    /// Writes the closing boundary and returns `(body, content_type)`.
    pub(crate) fn finish(mut self) -> (Vec<u8>, String) {
        let terminator = format!("--{}--\r\n", self.boundary);
        self.buf.extend_from_slice(terminator.as_bytes());

        let content_type = format!("multipart/form-data; boundary={}", self.boundary);
        (self.buf, content_type)
    }

    fn part_header(&mut self, name: &str, filename: Option<&str>) {
        let mut header = format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"",
            self.boundary,
            escape_quoted(name)
        );
        if let Some(filename) = filename {
            header.push_str(&format!(
                "; filename=\"{}\"\r\nContent-Type: application/octet-stream",
                escape_quoted(filename)
            ));
        }
        header.push_str("\r\n\r\n");
        self.buf.extend_from_slice(header.as_bytes());
    }
}

/// Escapes a value for use inside a quoted-string header parameter.
fn escape_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
