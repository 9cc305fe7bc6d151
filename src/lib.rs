//! Paste sanitization for editable fields.
//!
//! Strips HTML markup and Word formatting artifacts from text pasted into
//! editable fields, so only plain text (or minimally-cleaned markup) lands
//! in the field. Two surfaces are covered: plain value fields
//! (inputs/text areas, spliced at the selection offsets) and rich editable
//! regions (rendered-markup elements).
//!
//! The crate is host-agnostic: it owns the cleaning rules, the
//! caret/splice arithmetic, and the interception decisions, while the
//! host environment implements the [`dom`] traits over its real elements
//! and forwards events. See [`interceptor::PasteInterceptor`] for the
//! entry point and the choice between preemptive and post-hoc policies.
//!
//! Logging goes through the `log` facade; the crate never installs a
//! logger.

/// Crate version, for hosts that surface it.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod caret;
pub mod dom;
pub mod interceptor;
pub mod sanitize;

pub use caret::{Splice, splice_at_selection};
pub use dom::{DomNode, EditableField, FieldEvent, FieldKind, resolve_target};
pub use interceptor::{PasteInterceptor, PastePolicy, PostPasteFixup};
pub use sanitize::{clean_markup_noise, looks_like_html, strip_all_markup};
