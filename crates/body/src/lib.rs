//! Formwire request-body builders.
//!
//! Converts a record (any [`record::AsForm`] type) plus optional file
//! attachments into a transmittable HTTP request body:
//!
//! - [`json_body`] — pure JSON encoding, for calls with no attachments.
//! - [`multipart_body`] — `multipart/form-data` encoding that merges form
//!   fields and file parts, for calls that upload files.
//!
//! Both return an [`record::EncodedBody`] whose content type the caller copies
//! onto the outgoing request. The choice between them belongs to the caller:
//! send JSON unless there is a file to attach.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** All wire-format details (JSON serialisation, multipart
//! framing, boundary generation, attachment file I/O) live here. The
//! [`record`] crate sees none of them.
//!
//! Builders are synchronous and run to completion; they share no state, so
//! concurrent calls need no locking. Each call allocates its own buffer, and
//! every attachment's file handle is released before the call returns,
//! whether the encode succeeds or fails.

use std::fs::File;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use record::{AsForm, BodyError, EncodedBody, FileAttachment};

mod multipart;

use multipart::MultipartWriter;

const APPLICATION_JSON: &str = "application/json";

/// Encodes `record` as a JSON object under its fields' wire names.
///
/// Omit-if-empty fields whose value is the zero value are dropped. The
/// returned body carries content type `application/json`.
///
/// # Errors
///
/// [`BodyError::Encoding`] if the record holds a value that cannot be
/// represented in JSON.
pub fn json_body<R: AsForm>(record: &R) -> Result<EncodedBody, BodyError> {
    let mut object = Map::new();
    for field in record.form_fields()? {
        if field.omit_if_empty && field.is_empty() {
            continue;
        }
        object.insert(field.wire_name().to_owned(), field.value);
    }

    let content = serde_json::to_vec(&Value::Object(object))?;
    Ok(EncodedBody::new(content, APPLICATION_JSON))
}

/// Encodes `record` and `attachments` as a `multipart/form-data` body.
///
/// Fields are written first, in declaration order. A field is skipped when an
/// attachment shares its wire name (the file replaces the field, even when the
/// field is non-empty), or when it is marked omit-if-empty and holds the zero
/// value — in that order, so file intent always wins over a stale field value.
/// Composite values (nested records, maps, sequences) are embedded as their
/// JSON encoding; scalars render as plain text. Attachments are then streamed
/// in list order as file parts named by the attachment, with the path's base
/// name as the part filename (the full path when there is no base name, so
/// the filename is never empty).
///
/// The returned content type carries the generated boundary, e.g.
/// `multipart/form-data; boundary=<32 hex digits>`.
///
/// # Errors
///
/// [`BodyError::Encoding`] if a field value cannot be serialised;
/// [`BodyError::FileAccess`] if an attachment cannot be opened or read. Any
/// failure aborts the whole encode — no partial body is returned.
pub fn multipart_body<R: AsForm>(
    record: &R,
    attachments: &[FileAttachment],
) -> Result<EncodedBody, BodyError> {
    let mut writer = MultipartWriter::new();

    for field in record.form_fields()? {
        let name = field.wire_name();

        if attachments.iter().any(|a| a.name == name) {
            trace!(field = name, "attachment replaces form field");
            continue;
        }
        if field.omit_if_empty && field.is_empty() {
            trace!(field = name, "omitting empty field");
            continue;
        }

        writer.field(name, &render_scalar_or_json(&field.value)?);
    }

    for attachment in attachments {
        let mut file = File::open(&attachment.path).map_err(|source| BodyError::FileAccess {
            path: attachment.path.clone(),
            source,
        })?;
        let filename = part_filename(&attachment.path);

        let copied = writer
            .file(&attachment.name, &filename, &mut file)
            .map_err(|source| BodyError::FileAccess {
                path: attachment.path.clone(),
                source,
            })?;
        debug!(part = %attachment.name, bytes = copied, "wrote file part");
    }

    let (content, content_type) = writer.finish();
    Ok(EncodedBody::new(content, content_type))
}

/// Derives a file part's filename: the path's base name, with directory
/// components stripped. Paths with no base name (a bare root, or a path
/// ending in `..`) fall back to the lossy full path, so the filename is
/// never empty.
fn part_filename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Renders a field value as form-field text: objects and arrays are embedded
/// as their JSON encoding, strings stay raw (no JSON quoting), and remaining
/// scalars use `serde_json`'s rendering (`true`/`false`, `null`, plain decimal
/// integers, shortest-round-trip floats).
fn render_scalar_or_json(value: &Value) -> Result<String, BodyError> {
    Ok(match value {
        Value::Object(_) | Value::Array(_) => serde_json::to_string(value)?,
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct ReplyMarkup {
        keyboard: Vec<Vec<String>>,
    }

    record::form_record! {
        struct SendMessage {
            chat_id: String => "chat_id";
            text: String => "text";
            silent: bool => "disable_notification", omitempty;
            reply_markup: Option<ReplyMarkup> => "reply_markup", omitempty;
        }
    }

    fn message() -> SendMessage {
        SendMessage {
            chat_id: "123".to_owned(),
            text: "hello".to_owned(),
            silent: false,
            reply_markup: None,
        }
    }

    fn body_text(body: &EncodedBody) -> String {
        String::from_utf8(body.content().to_vec()).unwrap()
    }

    #[test]
    fn json_body_uses_wire_names_and_drops_empty_omit_fields() {
        let body = json_body(&message()).unwrap();

        assert_eq!(body.content_type(), "application/json");
        let value: Value = serde_json::from_slice(body.content()).unwrap();
        assert_eq!(value, json!({ "chat_id": "123", "text": "hello" }));
    }

    #[test]
    fn json_body_keeps_non_empty_omit_fields() {
        let mut msg = message();
        msg.silent = true;

        let value: Value = serde_json::from_slice(json_body(&msg).unwrap().content()).unwrap();
        assert_eq!(value["disable_notification"], json!(true));
    }

    #[test]
    fn multipart_emits_one_field_per_non_omitted_record_field() {
        let body = multipart_body(&message(), &[]).unwrap();
        let text = body_text(&body);

        assert_eq!(text.matches("Content-Disposition").count(), 2);
        assert!(text.contains("name=\"chat_id\"\r\n\r\n123\r\n"));
        assert!(text.contains("name=\"text\"\r\n\r\nhello\r\n"));
        assert!(!text.contains("disable_notification"));
        assert!(!text.contains("reply_markup"));
    }

    #[test]
    fn multipart_content_type_carries_the_body_boundary() {
        let body = multipart_body(&message(), &[]).unwrap();

        let boundary = body
            .content_type()
            .strip_prefix("multipart/form-data; boundary=")
            .unwrap()
            .to_owned();
        let text = body_text(&body);

        assert!(text.starts_with(&format!("--{boundary}\r\n")));
        assert!(text.ends_with(&format!("--{boundary}--\r\n")));
    }

    #[test]
    fn composite_fields_embed_their_json_encoding() {
        let mut msg = message();
        msg.reply_markup = Some(ReplyMarkup {
            keyboard: vec![vec!["yes".to_owned(), "no".to_owned()]],
        });

        let text = body_text(&multipart_body(&msg, &[]).unwrap());
        assert!(text.contains("name=\"reply_markup\"\r\n\r\n{\"keyboard\":[[\"yes\",\"no\"]]}\r\n"));
    }

    #[test]
    fn part_filename_strips_directories_and_is_never_empty() {
        assert_eq!(part_filename(Path::new("/tmp/photos/a.jpg")), "a.jpg");
        assert_eq!(part_filename(Path::new("a.jpg")), "a.jpg");
        assert_eq!(part_filename(Path::new("/tmp/..")), "/tmp/..");
        assert_eq!(part_filename(Path::new("/")), "/");
    }

    #[test]
    fn scalar_rendering_is_plain_text() {
        assert_eq!(render_scalar_or_json(&json!("raw")).unwrap(), "raw");
        assert_eq!(render_scalar_or_json(&json!(42)).unwrap(), "42");
        assert_eq!(render_scalar_or_json(&json!(1.5)).unwrap(), "1.5");
        assert_eq!(render_scalar_or_json(&json!(true)).unwrap(), "true");
        assert_eq!(render_scalar_or_json(&Value::Null).unwrap(), "null");
    }
}
