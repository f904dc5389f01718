//! The field model: how a record reports its fields for encoding.
//!
//! Form encoding is often solved with runtime reflection (walk the struct,
//! read its tags, switch on the value's kind).
//! Here each encodable type instead implements [`AsForm`] and returns an
//! ordered list of [`FormField`]s — same skip and ordering contract, resolved
//! at compile time. The [`form_record!`] macro derives the implementation from
//! a per-field table so record definitions stay declarative.

use serde_json::Value;

use crate::errors::BodyError;
use crate::util::first_non_zero;

// ---------------------------------------------------------------------------
// FormField
// ---------------------------------------------------------------------------

/// One record field as reported by [`AsForm::form_fields`], in declaration
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    /// Explicit wire-name tag. `""` when the field carries no tag, in which
    /// case the identifier is used on the wire.
    pub tag: &'static str,
    /// The field's identifier in the record definition.
    pub ident: &'static str,
    /// The field's runtime value, already converted to a JSON value. Scalars
    /// stay scalars; nested records, maps, and sequences become objects and
    /// arrays.
    pub value: Value,
    /// When set, the field is dropped from encoding if [`Self::is_empty`]
    /// holds.
    pub omit_if_empty: bool,
}

impl FormField {
    /// Resolves the name this field is encoded under: the explicit tag when
    /// non-empty, otherwise the field identifier.
    pub fn wire_name(&self) -> &'static str {
        first_non_zero([self.tag, self.ident])
    }

    /// Returns `true` if the value is the zero value for its kind: `null`,
    /// `false`, numeric zero, the empty string, or an empty array or object.
    pub fn is_empty(&self) -> bool {
        match &self.value {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(a) => a.is_empty(),
            Value::Object(o) => o.is_empty(),
        }
    }
}

// ---------------------------------------------------------------------------
// AsForm
// ---------------------------------------------------------------------------

/// Implemented by every record type the body builders can encode.
///
/// Implementations report fields in declaration order; the builders depend on
/// that order for output stability. Converting a field value to JSON may fail
/// (e.g. a map keyed by a non-string type), which surfaces as
/// [`BodyError::Encoding`] and aborts the whole encode.
///
/// Prefer deriving this via [`form_record!`] over implementing it by hand.
pub trait AsForm {
    /// Returns this record's fields, in declaration order.
    fn form_fields(&self) -> Result<Vec<FormField>, BodyError>;
}

// ---------------------------------------------------------------------------
// form_record! — declarative record definition.
// Generates: struct with public fields, AsForm impl in declaration order.
// ---------------------------------------------------------------------------

/// Defines a record struct together with its [`AsForm`] implementation.
///
/// Each field line is `ident: Type => "wire_tag"` with an optional
/// `, omitempty` flag; an empty tag (`""`) means the identifier itself is the
/// wire name. Field values must implement `serde::Serialize`.
///
/// ```
/// record::form_record! {
///     /// Outgoing photo message.
///     pub struct SendPhoto {
///         chat_id: String => "chat_id";
///         photo: String => "photo";
///         caption: String => "caption", omitempty;
///     }
/// }
/// ```
#[macro_export]
macro_rules! form_record {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_attr:meta])*
                $field:ident : $ty:ty => $tag:literal $(, $flag:ident)?
            );* $(;)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $(
                $(#[$field_attr])*
                pub $field: $ty,
            )*
        }

        impl $crate::AsForm for $name {
            fn form_fields(&self) -> Result<Vec<$crate::FormField>, $crate::BodyError> {
                Ok(vec![
                    $(
                        $crate::FormField {
                            tag: $tag,
                            ident: stringify!($field),
                            value: $crate::serde_json::to_value(&self.$field)?,
                            omit_if_empty: $crate::form_record!(@flag $($flag)?),
                        },
                    )*
                ])
            }
        }
    };

    (@flag) => {
        false
    };
    (@flag omitempty) => {
        true
    };
}
