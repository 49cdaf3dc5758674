//! Hierarchical sidebar synthesis for sidemap.
//!
//! This crate derives a nested navigation tree from a flat collection of
//! [`DocRecord`](sidemap_docs::DocRecord)s: sub-directories become collapsed
//! categories, documents become doc leaves, and the tree mirrors the on-disk
//! folder hierarchy below a [`Scope`] directory.
//!
//! # Architecture
//!
//! - [`Scope`] classifies documents (in scope? directly in the scope root?)
//!   and resolves their breadcrumbs
//! - `CategoryTree` (internal) memoizes category creation per breadcrumb in
//!   an arena, so every directory maps to exactly one category per pass
//! - [`DefaultSidebarItemsGenerator`] orchestrates a pass: filter, sort by
//!   source path, place documents strictly sequentially
//! - [`SidebarItemsGenerator`] is the strategy seam site configuration uses
//!   to wrap or replace the default
//!
//! # Ordering
//!
//! Documents are sorted by their full source path as one lexicographic key.
//! Folder and file names interleave in that key, so a sibling file like
//! `guides-overview.md` sorts before everything under `guides/` (`'-'` <
//! `'/'` in ASCII). Generation is deterministic: the same scope and records
//! always produce the same tree.
//!
//! # Example
//!
//! ```
//! use sidemap_docs::DocRecord;
//! use sidemap_sidebar::{DefaultSidebarItemsGenerator, GeneratorContext, Scope, SidebarItemsGenerator};
//!
//! let docs = vec![
//!     DocRecord::new("intro", "docs/intro.md", "."),
//!     DocRecord::new("guides/setup", "docs/guides/setup.md", "guides"),
//! ];
//! let scope = Scope::root();
//!
//! let items = DefaultSidebarItemsGenerator.generate(&GeneratorContext::new(&scope, &docs))?;
//! assert_eq!(items.len(), 2);
//! # Ok::<(), sidemap_sidebar::GeneratorError>(())
//! ```

mod generator;
mod item;
mod scope;
mod tree;

pub use generator::{
    DefaultSidebarItemsGenerator, GeneratorContext, GeneratorError, SidebarItemsGenerator,
};
pub use item::{COLLAPSED_BY_DEFAULT, SidebarItem};
pub use scope::{Scope, ScopeError};
