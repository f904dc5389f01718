//! Core domain for Formwire: how a typed record describes itself for encoding.
//!
//! This crate contains the field model, the [`AsForm`] trait that encodable
//! record types implement, the [`form_record!`] macro that derives that trait
//! from a declarative field table, the attachment and body value types, and the
//! cross-cutting error type. Infrastructure crates consume these types; they
//! never add encoding rules of their own.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! It defines *what* a record exposes for encoding; the `body` crate defines
//! *how* that becomes wire bytes.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`fields`] | [`FormField`], the [`AsForm`] trait, and the [`form_record!`] macro |
//! | [`types`] | Value types crossing the encoder boundary ([`FileAttachment`], [`EncodedBody`]) |
//! | [`errors`] | The [`BodyError`] taxonomy |
//! | [`util`] | The [`first_non_zero`] coalescing helper |

pub mod errors;
pub mod fields;
pub mod types;
pub mod util;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use errors::BodyError;
pub use fields::{AsForm, FormField};
pub use types::{EncodedBody, FileAttachment};
pub use util::first_non_zero;

// Used by the expansion of `form_record!`; not part of the public API.
#[doc(hidden)]
pub use serde_json;
