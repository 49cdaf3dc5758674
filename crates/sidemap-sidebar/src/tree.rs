//! Incremental category tree construction.
//!
//! [`CategoryTree`] accumulates one sidebar's worth of nodes. Categories live
//! in a flat arena (`Vec`) with parent/child links kept as ordered slot
//! lists, and are memoized by their full breadcrumb key so every directory
//! maps to exactly one category per pass. Finished doc items are placed into
//! slots as they arrive, preserving insertion order.
//!
//! The arena is scoped to a single generation pass; [`CategoryTree::into_items`]
//! consumes it and materializes the nested [`SidebarItem`] tree.

use std::collections::HashMap;

use sidemap_docs::OrderingPrefixParser;

use crate::item::{COLLAPSED_BY_DEFAULT, SidebarItem};
use crate::scope::BREADCRUMB_SEPARATOR;

/// One ordered child position: either a finished leaf item or a category
/// still under construction in the arena.
enum Slot {
    Item(SidebarItem),
    Category(usize),
}

/// Category under construction.
#[derive(Default)]
struct CategoryNode {
    label: String,
    collapsed: bool,
    children: Vec<Slot>,
}

/// Arena of categories for one generation pass.
pub(crate) struct CategoryTree<'p> {
    prefix_parser: &'p dyn OrderingPrefixParser,
    nodes: Vec<CategoryNode>,
    /// Breadcrumb key (segments joined with the separator) -> arena index.
    by_breadcrumb: HashMap<String, usize>,
    top_level: Vec<Slot>,
}

impl<'p> CategoryTree<'p> {
    pub(crate) fn new(prefix_parser: &'p dyn OrderingPrefixParser) -> Self {
        Self {
            prefix_parser,
            nodes: Vec::new(),
            by_breadcrumb: HashMap::new(),
            top_level: Vec::new(),
        }
    }

    /// Resolve the category chain for `breadcrumb`, creating missing levels,
    /// and return the deepest category. `None` for an empty breadcrumb: the
    /// caller places its item at top level.
    ///
    /// Levels are walked from the shortest prefix to the longest, so ancestor
    /// categories always exist (and precede their descendants in insertion
    /// order) before a deeper level is created. Repeated breadcrumbs resolve
    /// to the memoized node.
    pub(crate) fn ensure_category(&mut self, breadcrumb: &[&str]) -> Option<usize> {
        let mut parent = None;
        let mut key = String::new();

        for segment in breadcrumb {
            if !key.is_empty() {
                key.push(BREADCRUMB_SEPARATOR);
            }
            key.push_str(segment);

            let index = if let Some(&index) = self.by_breadcrumb.get(&key) {
                index
            } else {
                self.create_category(segment, parent, key.clone())
            };
            parent = Some(index);
        }

        parent
    }

    /// Append a finished item to the category's children, or to the top
    /// level when no category is given.
    pub(crate) fn place(&mut self, category: Option<usize>, item: SidebarItem) {
        let slot = Slot::Item(item);
        match category {
            Some(index) => self.nodes[index].children.push(slot),
            None => self.top_level.push(slot),
        }
    }

    /// Materialize the arena into the nested top-level item list.
    pub(crate) fn into_items(mut self) -> Vec<SidebarItem> {
        let top_level = std::mem::take(&mut self.top_level);
        top_level
            .into_iter()
            .map(|slot| Self::materialize(&mut self.nodes, slot))
            .collect()
    }

    fn create_category(&mut self, segment: &str, parent: Option<usize>, key: String) -> usize {
        let index = self.nodes.len();
        self.nodes.push(CategoryNode {
            label: self.prefix_parser.strip(segment),
            collapsed: COLLAPSED_BY_DEFAULT,
            children: Vec::new(),
        });

        let slot = Slot::Category(index);
        match parent {
            Some(parent_index) => self.nodes[parent_index].children.push(slot),
            None => self.top_level.push(slot),
        }

        self.by_breadcrumb.insert(key, index);
        index
    }

    fn materialize(nodes: &mut [CategoryNode], slot: Slot) -> SidebarItem {
        match slot {
            Slot::Item(item) => item,
            Slot::Category(index) => {
                // Each arena index is referenced by exactly one slot, so the
                // node can be taken out wholesale.
                let node = std::mem::take(&mut nodes[index]);
                let items = node
                    .children
                    .into_iter()
                    .map(|child| Self::materialize(nodes, child))
                    .collect();
                SidebarItem::Category {
                    label: node.label,
                    items,
                    collapsed: node.collapsed,
                }
            }
        }
    }
}
