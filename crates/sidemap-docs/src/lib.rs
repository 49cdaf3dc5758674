//! Document record types for the sidemap sidebar synthesizer.
//!
//! This crate provides the input side of sidebar generation:
//!
//! - [`DocRecord`]: per-page metadata supplied by a document-loading
//!   collaborator (id, source location, containing directory, front-matter
//!   overrides)
//! - [`OrderingPrefixParser`]: deriving human labels from directory and file
//!   names that carry a manual ordering prefix (`01-intro` -> `intro`)
//!
//! Loading and front-matter parsing live elsewhere; records arrive here
//! already resolved.

mod ordering;
mod record;

pub use ordering::{IdentityPrefixParser, NumberPrefixParser, OrderingPrefixParser, ParsedName};
pub use record::{CONTENT_ROOT, DocRecord};
