//! Sidebar node types.
//!
//! [`SidebarItem`] is the shared output type of sidebar generation: an
//! ordered tree of document references, external links and collapsible
//! categories. The serde shape is the navigation payload consumed by the
//! rendering side - internally tagged on `"type"` with lowercase tags.
//!
//! Link items are part of the shared type but are only produced by
//! hand-written sidebar configuration, never by the generation algorithm.

use serde::{Deserialize, Serialize};

use sidemap_docs::DocRecord;

/// Whether a newly created category starts collapsed.
///
/// Fixed for generated categories; a future configuration surface may expose
/// an override.
pub const COLLAPSED_BY_DEFAULT: bool = true;

/// One node of a sidebar tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SidebarItem {
    /// Leaf referencing a document by id.
    Doc {
        /// Id of the referenced [`DocRecord`].
        id: String,
        /// Display label override; the renderer derives a label from the
        /// document itself when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    /// Leaf linking outside the generated tree.
    Link {
        /// Display label.
        label: String,
        /// Link target.
        href: String,
    },
    /// Named, collapsible grouping of child nodes.
    Category {
        /// Display label.
        label: String,
        /// Child nodes in insertion order.
        items: Vec<SidebarItem>,
        /// Whether the category starts collapsed in the UI.
        collapsed: bool,
    },
}

impl SidebarItem {
    /// Doc leaf for a document record, carrying its front-matter label if any.
    #[must_use]
    pub fn doc(record: &DocRecord) -> Self {
        Self::Doc {
            id: record.id.clone(),
            label: record.sidebar_label.clone(),
        }
    }

    /// Link leaf.
    #[must_use]
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            href: href.into(),
        }
    }

    /// Category with the default collapsed state.
    #[must_use]
    pub fn category(label: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        Self::Category {
            label: label.into(),
            items,
            collapsed: COLLAPSED_BY_DEFAULT,
        }
    }

    /// Display label, if this node carries one.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Doc { label, .. } => label.as_deref(),
            Self::Link { label, .. } | Self::Category { label, .. } => Some(label),
        }
    }
}
