//! Markup sanitization for pasted text.
//!
//! Two cleaning modes over a single input string:
//!
//! - [`clean_markup_noise`]: markup-preserving clean that removes Word
//!   formatting artifacts (proprietary tags, comments, class/style
//!   attributes, span/font wrappers) while keeping structural tags.
//! - [`strip_all_markup`]: markup-stripping clean that removes all tags,
//!   decodes common HTML entities, and collapses whitespace.
//!
//! Both are stateless pure functions. Tag matching is regex-based, not a
//! parser: malformed markup passes through best-effort. This is a
//! documented constraint of the cleaning contract, not something to
//! silently upgrade.

mod noise;
mod strip;


pub use noise::clean_markup_noise;
pub use strip::{looks_like_html, strip_all_markup};
