//! Scope classification and breadcrumb resolution.
//!
//! A [`Scope`] is the directory subtree one sidebar is generated for. It
//! answers two questions about a document: does it belong to this sidebar at
//! all, and - if so - through which chain of sub-directories (its
//! *breadcrumb*) is it reached from the scope root.
//!
//! Directory strings are compared as `/`-separated paths. Membership checks
//! match on the scope followed by a separator, so scope `"api"` does not
//! capture documents under `"api2/"`.

use thiserror::Error;

use sidemap_docs::{CONTENT_ROOT, DocRecord};

/// Separator between breadcrumb segments in directory paths and cache keys.
pub(crate) const BREADCRUMB_SEPARATOR: char = '/';

/// Raised when a relative-directory computation is requested for a document
/// outside the scope.
///
/// This is a programming-contract violation inside the generation algorithm,
/// not a data error: callers must filter with [`Scope::contains`] first.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("document '{id}' in directory '{dir}' is outside sidebar scope '{scope}'")]
pub struct ScopeError {
    /// Id of the offending document.
    pub id: String,
    /// The document's source directory.
    pub dir: String,
    /// The scope directory it was checked against.
    pub scope: String,
}

impl ScopeError {
    fn out_of_scope(doc: &DocRecord, scope: &Scope) -> Self {
        Self {
            id: doc.id.clone(),
            dir: doc.source_dir.clone(),
            scope: scope.dir.clone(),
        }
    }
}

/// Directory subtree one sidebar is generated for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scope {
    dir: String,
    /// `dir` plus trailing separator, precomputed for prefix checks.
    child_prefix: String,
}

impl Scope {
    /// Scope confined to `dir`, relative to the content root.
    #[must_use]
    pub fn new(dir: impl Into<String>) -> Self {
        let dir = dir.into();
        let child_prefix = format!("{dir}{BREADCRUMB_SEPARATOR}");
        Self { dir, child_prefix }
    }

    /// Scope covering the whole content root.
    #[must_use]
    pub fn root() -> Self {
        Self::new(CONTENT_ROOT)
    }

    /// The scope directory string.
    #[must_use]
    pub fn dir(&self) -> &str {
        &self.dir
    }

    /// True if the document sits directly in the scope directory.
    #[must_use]
    pub fn is_root_doc(&self, doc: &DocRecord) -> bool {
        doc.source_dir == self.dir
    }

    /// True if the document sits in a sub-directory of the scope.
    ///
    /// The trailing-separator match keeps `"api2/doc"` out of scope `"api"`.
    #[must_use]
    pub fn is_category_doc(&self, doc: &DocRecord) -> bool {
        if self.is_root_doc(doc) {
            return false;
        }
        self.dir == CONTENT_ROOT || doc.source_dir.starts_with(&self.child_prefix)
    }

    /// True if the document belongs to this sidebar at all.
    #[must_use]
    pub fn contains(&self, doc: &DocRecord) -> bool {
        self.is_root_doc(doc) || self.is_category_doc(doc)
    }

    /// The document's directory relative to the scope root.
    ///
    /// Returns [`CONTENT_ROOT`] for documents directly in the scope
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError`] for documents outside the scope.
    pub fn relative_dir<'d>(&self, doc: &'d DocRecord) -> Result<&'d str, ScopeError> {
        if doc.source_dir == self.dir {
            return Ok(CONTENT_ROOT);
        }
        if self.dir == CONTENT_ROOT {
            return Ok(&doc.source_dir);
        }
        doc.source_dir
            .strip_prefix(&self.child_prefix)
            .ok_or_else(|| ScopeError::out_of_scope(doc, self))
    }

    /// Breadcrumb locating the document's folder below the scope root,
    /// outermost segment first. Empty for documents directly in the scope
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError`] for documents outside the scope.
    pub fn breadcrumb<'d>(&self, doc: &'d DocRecord) -> Result<Vec<&'d str>, ScopeError> {
        let relative = self.relative_dir(doc)?;
        if relative == CONTENT_ROOT {
            return Ok(Vec::new());
        }
        Ok(relative.split(BREADCRUMB_SEPARATOR).collect())
    }
}
