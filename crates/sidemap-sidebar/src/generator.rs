//! Sidebar generation.
//!
//! [`SidebarItemsGenerator`] is the strategy seam for producing a sidebar
//! tree from document records; [`DefaultSidebarItemsGenerator`] derives the
//! tree from the on-disk folder hierarchy. Site configuration may install a
//! wrapping generator that calls the default and post-processes its result
//! (re-sorting, injecting extra nodes) before returning.
//!
//! # Determinism
//!
//! One invocation is one pass: documents are filtered to the scope, sorted
//! by their full source path, and processed strictly sequentially. Insertion
//! order into category children and the top-level list is part of the
//! observable contract, so items are never resolved concurrently. All nodes
//! and the breadcrumb memo are created fresh per pass.

use thiserror::Error;

use sidemap_docs::{DocRecord, NumberPrefixParser, OrderingPrefixParser};

use crate::item::SidebarItem;
use crate::scope::{Scope, ScopeError};
use crate::tree::CategoryTree;

/// Error returned when sidebar generation fails.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Internal contract violation: a relative-directory computation was
    /// requested for an out-of-scope document.
    #[error(transparent)]
    Scope(#[from] ScopeError),
}

/// Inputs for one generation pass.
pub struct GeneratorContext<'a> {
    /// Directory subtree this sidebar is generated for.
    pub scope: &'a Scope,
    /// All known document records; the generator filters to the scope.
    pub docs: &'a [DocRecord],
    /// Parser deriving category labels from directory names.
    pub prefix_parser: &'a dyn OrderingPrefixParser,
}

impl<'a> GeneratorContext<'a> {
    /// Context with the default number-prefix parser.
    #[must_use]
    pub fn new(scope: &'a Scope, docs: &'a [DocRecord]) -> Self {
        Self {
            scope,
            docs,
            prefix_parser: &NumberPrefixParser,
        }
    }

    /// Replace the ordering-prefix parser.
    #[must_use]
    pub fn with_prefix_parser(mut self, parser: &'a dyn OrderingPrefixParser) -> Self {
        self.prefix_parser = parser;
        self
    }
}

/// Strategy for producing a sidebar tree from document records.
///
/// Implementations must be deterministic over their inputs. Wrapping
/// generators compose by delegation: hold the wrapped generator, call its
/// `generate`, transform the returned items.
pub trait SidebarItemsGenerator: Send + Sync {
    /// Produce the ordered top-level sidebar items for `ctx`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError`] on an internal contract violation; a
    /// partial sidebar is never returned.
    fn generate(&self, ctx: &GeneratorContext<'_>) -> Result<Vec<SidebarItem>, GeneratorError>;
}

/// Default generator: mirrors the folder hierarchy below the scope.
///
/// Each sub-directory becomes a collapsed category labeled by its
/// prefix-stripped name; each document becomes a doc leaf in the category
/// for its directory (or at top level for documents directly in the scope
/// directory). A scope that matches no documents yields an empty tree and
/// one warning.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultSidebarItemsGenerator;

impl SidebarItemsGenerator for DefaultSidebarItemsGenerator {
    fn generate(&self, ctx: &GeneratorContext<'_>) -> Result<Vec<SidebarItem>, GeneratorError> {
        let mut docs: Vec<&DocRecord> = ctx
            .docs
            .iter()
            .filter(|doc| ctx.scope.contains(doc))
            .collect();
        // Folder and file name in one sort key; see the ordering note in the
        // crate docs.
        docs.sort_by(|a, b| a.source.cmp(&b.source));

        if docs.is_empty() {
            tracing::warn!(
                scope = ctx.scope.dir(),
                "no documents in scope, generated sidebar is empty"
            );
            return Ok(Vec::new());
        }

        let mut tree = CategoryTree::new(ctx.prefix_parser);
        for doc in docs {
            let breadcrumb = ctx.scope.breadcrumb(doc)?;
            let category = tree.ensure_category(&breadcrumb);
            tree.place(category, SidebarItem::doc(doc));
        }

        Ok(tree.into_items())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use sidemap_docs::IdentityPrefixParser;

    use super::*;

    static_assertions::assert_impl_all!(DefaultSidebarItemsGenerator: Send, Sync);
    static_assertions::assert_impl_all!(Box<dyn SidebarItemsGenerator>: Send, Sync);

    fn doc(id: &str, source: &str, dir: &str) -> DocRecord {
        DocRecord::new(id, source, dir)
    }

    fn doc_item(id: &str) -> SidebarItem {
        SidebarItem::Doc {
            id: id.to_owned(),
            label: None,
        }
    }

    fn generate(scope: &Scope, docs: &[DocRecord]) -> Vec<SidebarItem> {
        DefaultSidebarItemsGenerator
            .generate(&GeneratorContext::new(scope, docs))
            .unwrap()
    }

    /// Collect every doc id in the tree, depth first.
    fn collect_doc_ids(items: &[SidebarItem], ids: &mut Vec<String>) {
        for item in items {
            match item {
                SidebarItem::Doc { id, .. } => ids.push(id.clone()),
                SidebarItem::Category { items, .. } => collect_doc_ids(items, ids),
                SidebarItem::Link { .. } => {}
            }
        }
    }

    #[test]
    fn test_root_scope_mirrors_folder_hierarchy() {
        let docs = vec![
            doc("intro", "docs/intro.md", "."),
            doc("guides/overview", "docs/guides/overview.md", "guides"),
            doc(
                "guides/advanced/tuning",
                "docs/guides/advanced/tuning.md",
                "guides/advanced",
            ),
        ];

        let items = generate(&Scope::root(), &docs);

        // Sorted by source, "docs/guides/advanced/..." comes first, so the
        // "guides" category is created before the root doc is placed.
        assert_eq!(
            items,
            vec![
                SidebarItem::category(
                    "guides",
                    vec![
                        SidebarItem::category(
                            "advanced",
                            vec![doc_item("guides/advanced/tuning")],
                        ),
                        doc_item("guides/overview"),
                    ],
                ),
                doc_item("intro"),
            ]
        );
    }

    #[test]
    fn test_scoped_generation_excludes_prefix_siblings() {
        let docs = vec![
            doc("api/index", "docs/api/index.md", "api"),
            doc("api/v1/endpoints", "docs/api/v1/endpoints.md", "api/v1"),
            doc("api2/other", "docs/api2/other.md", "api2"),
        ];

        let items = generate(&Scope::new("api"), &docs);

        // "api2" contributes nothing; the doc directly in "api" lands at top
        // level because the scope directory itself never becomes a category.
        assert_eq!(
            items,
            vec![
                doc_item("api/index"),
                SidebarItem::category("v1", vec![doc_item("api/v1/endpoints")]),
            ]
        );
    }

    #[test]
    fn test_empty_scope_yields_empty_tree() {
        let docs = vec![doc("guides/intro", "docs/guides/intro.md", "guides")];

        let items = generate(&Scope::new("reference"), &docs);

        assert!(items.is_empty());
    }

    #[test]
    fn test_no_docs_at_all_yields_empty_tree() {
        let items = generate(&Scope::root(), &[]);

        assert!(items.is_empty());
    }

    #[test]
    fn test_docs_in_same_directory_share_one_category() {
        let docs = vec![
            doc("guides/setup/install", "docs/guides/setup/install.md", "guides/setup"),
            doc("guides/setup/upgrade", "docs/guides/setup/upgrade.md", "guides/setup"),
        ];

        let items = generate(&Scope::root(), &docs);

        assert_eq!(
            items,
            vec![SidebarItem::category(
                "guides",
                vec![SidebarItem::category(
                    "setup",
                    vec![
                        doc_item("guides/setup/install"),
                        doc_item("guides/setup/upgrade"),
                    ],
                )],
            )]
        );
    }

    #[test]
    fn test_generation_is_idempotent() {
        let docs = vec![
            doc("intro", "docs/intro.md", "."),
            doc("guides/a", "docs/guides/a.md", "guides"),
            doc("guides/deep/b", "docs/guides/deep/b.md", "guides/deep"),
            doc("reference/c", "docs/reference/c.md", "reference"),
        ];
        let scope = Scope::root();

        let first = generate(&scope, &docs);
        let second = generate(&scope, &docs);

        assert_eq!(first, second);
    }

    #[test]
    fn test_every_in_scope_doc_appears_exactly_once() {
        let docs = vec![
            doc("intro", "docs/intro.md", "."),
            doc("guides/a", "docs/guides/a.md", "guides"),
            doc("guides/b", "docs/guides/b.md", "guides"),
            doc("guides/deep/c", "docs/guides/deep/c.md", "guides/deep"),
            doc("other/d", "docs/other/d.md", "other"),
        ];

        let items = generate(&Scope::root(), &docs);

        let mut ids = Vec::new();
        collect_doc_ids(&items, &mut ids);
        ids.sort_unstable();
        assert_eq!(
            ids,
            vec!["guides/a", "guides/b", "guides/deep/c", "intro", "other/d"]
        );
    }

    #[test]
    fn test_doc_label_comes_from_front_matter() {
        let docs = vec![
            doc("guides/a", "docs/guides/a.md", "guides").with_sidebar_label("First Steps"),
        ];

        let items = generate(&Scope::root(), &docs);

        assert_eq!(
            items,
            vec![SidebarItem::category(
                "guides",
                vec![SidebarItem::Doc {
                    id: "guides/a".to_owned(),
                    label: Some("First Steps".to_owned()),
                }],
            )]
        );
    }

    #[test]
    fn test_category_labels_use_prefix_parser() {
        let docs = vec![doc(
            "tutorial/first",
            "docs/01-tutorial/first.md",
            "01-tutorial",
        )];
        let scope = Scope::root();

        let stripped = generate(&scope, &docs);
        let verbatim = DefaultSidebarItemsGenerator
            .generate(
                &GeneratorContext::new(&scope, &docs).with_prefix_parser(&IdentityPrefixParser),
            )
            .unwrap();

        assert_eq!(stripped[0].label(), Some("tutorial"));
        assert_eq!(verbatim[0].label(), Some("01-tutorial"));
    }

    #[test]
    fn test_sibling_file_sorts_before_directory_docs() {
        // '-' (0x2D) sorts before '/' (0x2F), so "guides-overview.md" beats
        // every "guides/..." source and the standalone doc precedes the
        // category. Existing content may depend on this interleaving, so it
        // is pinned here rather than corrected.
        let docs = vec![
            doc("guides/intro", "docs/guides/intro.md", "guides"),
            doc("guides-overview", "docs/guides-overview.md", "."),
        ];

        let items = generate(&Scope::root(), &docs);

        assert_eq!(
            items,
            vec![
                doc_item("guides-overview"),
                SidebarItem::category("guides", vec![doc_item("guides/intro")]),
            ]
        );
    }

    #[test]
    fn test_deep_breadcrumbs_share_ancestors() {
        let docs = vec![
            doc("a/b/c/one", "docs/a/b/c/one.md", "a/b/c"),
            doc("a/b/d/two", "docs/a/b/d/two.md", "a/b/d"),
        ];

        let items = generate(&Scope::root(), &docs);

        // Single "a" and single "a/b", branching below.
        assert_eq!(
            items,
            vec![SidebarItem::category(
                "a",
                vec![SidebarItem::category(
                    "b",
                    vec![
                        SidebarItem::category("c", vec![doc_item("a/b/c/one")]),
                        SidebarItem::category("d", vec![doc_item("a/b/d/two")]),
                    ],
                )],
            )]
        );
    }

    /// Wrapper that re-sorts top-level items by the records' manual
    /// ordering hints, demonstrating generator composition.
    struct PositionSortedGenerator<G> {
        inner: G,
    }

    impl<G: SidebarItemsGenerator> SidebarItemsGenerator for PositionSortedGenerator<G> {
        fn generate(
            &self,
            ctx: &GeneratorContext<'_>,
        ) -> Result<Vec<SidebarItem>, GeneratorError> {
            let positions: HashMap<&str, f64> = ctx
                .docs
                .iter()
                .filter_map(|doc| {
                    doc.sidebar_position
                        .map(|position| (doc.id.as_str(), position))
                })
                .collect();

            let mut items = self.inner.generate(ctx)?;
            items.sort_by(|a, b| {
                let key = |item: &SidebarItem| match item {
                    SidebarItem::Doc { id, .. } => {
                        positions.get(id.as_str()).copied().unwrap_or(f64::MAX)
                    }
                    _ => f64::MAX,
                };
                key(a).total_cmp(&key(b))
            });
            Ok(items)
        }
    }

    #[test]
    fn test_wrapping_generator_resorts_default_output() {
        let docs = vec![
            doc("alpha", "docs/alpha.md", ".").with_sidebar_position(2.0),
            doc("beta", "docs/beta.md", ".").with_sidebar_position(1.0),
        ];
        let scope = Scope::root();

        let wrapper = PositionSortedGenerator {
            inner: DefaultSidebarItemsGenerator,
        };
        let items = wrapper
            .generate(&GeneratorContext::new(&scope, &docs))
            .unwrap();

        // Default order is by source ("alpha" first); the wrapper flips it
        // using the threaded-through position hints.
        assert_eq!(items, vec![doc_item("beta"), doc_item("alpha")]);
    }
}
