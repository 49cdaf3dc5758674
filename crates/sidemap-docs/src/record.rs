//! Document records consumed by sidebar generation.
//!
//! # Path Convention
//!
//! `source_dir` is a `/`-separated directory path relative to the content
//! root, with [`CONTENT_ROOT`] (`"."`) denoting the root itself:
//! - `"."` - document sits directly in the content root
//! - `"guides"` - document in a top-level folder
//! - `"guides/advanced"` - nested folder

use serde::{Deserialize, Serialize};

/// Directory value denoting the content root itself.
pub const CONTENT_ROOT: &str = ".";

/// Metadata for one documentation page, as supplied by the document loader.
///
/// Records are read-only inputs to sidebar generation. The serde shape is
/// camelCase to match the front-matter pipeline that produces them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocRecord {
    /// Unique stable identifier.
    pub id: String,
    /// Full logical source location. Used only as a sort key.
    pub source: String,
    /// Containing directory relative to the content root; [`CONTENT_ROOT`]
    /// for documents directly in the root.
    pub source_dir: String,
    /// Manual ordering hint from front matter. Not consumed by the default
    /// generation algorithm, but threaded through for overriding generators.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_position: Option<f64>,
    /// Display label override from front matter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_label: Option<String>,
}

impl DocRecord {
    /// Create a record with no front-matter overrides.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        source_dir: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            source_dir: source_dir.into(),
            sidebar_position: None,
            sidebar_label: None,
        }
    }

    /// Attach a manual ordering hint.
    #[must_use]
    pub fn with_sidebar_position(mut self, position: f64) -> Self {
        self.sidebar_position = Some(position);
        self
    }

    /// Attach a display label override.
    #[must_use]
    pub fn with_sidebar_label(mut self, label: impl Into<String>) -> Self {
        self.sidebar_label = Some(label.into());
        self
    }

    /// True if the document sits directly in the content root.
    #[must_use]
    pub fn in_content_root(&self) -> bool {
        self.source_dir == CONTENT_ROOT
    }
}
