//! Category tree indexing.
//!
//! The catalog stores categories as a flat list with parent references. For
//! filtering, every root category needs the full set of slugs beneath it so
//! that selecting a root also shows deals filed under its descendants.

use std::collections::{HashMap, HashSet};

use crate::domain::category::Category;
use crate::domain::types::{CategoryId, CategorySlug};

/// Derived view of a category snapshot. Rebuilt from scratch whenever the
/// category list changes.
#[derive(Debug, Clone, Default)]
pub struct CategoryHierarchy {
    /// Categories without a parent, in input order.
    pub root_categories: Vec<Category>,
    /// Root slug to the slugs of the root and all of its descendants.
    pub subtree_index: HashMap<CategorySlug, HashSet<CategorySlug>>,
    /// Categories that cannot be reached from any root: dangling parent
    /// references, their descendants, and parentless cycles.
    pub orphans: Vec<Category>,
    children: HashMap<CategoryId, Vec<Category>>,
}

impl CategoryHierarchy {
    /// Slugs covered by the root category `slug`, if it is a root.
    pub fn subtree(&self, slug: &CategorySlug) -> Option<&HashSet<CategorySlug>> {
        self.subtree_index.get(slug)
    }

    /// Whether selecting `slug` should expand to its descendants.
    pub fn is_aggregating_root(&self, slug: &CategorySlug) -> bool {
        self.subtree(slug).is_some_and(|set| set.len() > 1)
    }

    /// Direct children of a category, in input order.
    pub fn children(&self, id: CategoryId) -> &[Category] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Builds the hierarchy index for a category snapshot.
///
/// Descendants are discovered with an explicit stack over a parent-to-children
/// adjacency map, guarded by a visited set, so deep or cyclic data neither
/// overflows the stack nor loops.
pub fn build_hierarchy(categories: &[Category]) -> CategoryHierarchy {
    let mut children: HashMap<CategoryId, Vec<Category>> = HashMap::new();
    let mut root_categories = Vec::new();

    for category in categories {
        match category.parent_id {
            Some(parent_id) => children
                .entry(parent_id)
                .or_default()
                .push(category.clone()),
            None => root_categories.push(category.clone()),
        }
    }

    let mut subtree_index: HashMap<CategorySlug, HashSet<CategorySlug>> = HashMap::new();
    let mut reachable: HashSet<CategoryId> = HashSet::new();

    for root in &root_categories {
        let subtree = subtree_index.entry(root.slug.clone()).or_default();
        subtree.insert(root.slug.clone());
        reachable.insert(root.id);

        let mut stack = vec![root.id];
        while let Some(current) = stack.pop() {
            let Some(kids) = children.get(&current) else {
                continue;
            };
            for child in kids {
                if reachable.insert(child.id) {
                    subtree.insert(child.slug.clone());
                    stack.push(child.id);
                }
            }
        }
    }

    let orphans: Vec<Category> = categories
        .iter()
        .filter(|c| !reachable.contains(&c.id))
        .cloned()
        .collect();

    if !orphans.is_empty() {
        log::debug!(
            "{} categories are unreachable from any root: {}",
            orphans.len(),
            orphans
                .iter()
                .map(|c| c.slug.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    CategoryHierarchy {
        root_categories,
        subtree_index,
        orphans,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::CategoryName;

    fn category(id: i32, slug: &str, parent: Option<i32>) -> Category {
        Category {
            id: CategoryId::new(id).unwrap(),
            slug: CategorySlug::new(slug).unwrap(),
            name: CategoryName::new(slug).unwrap(),
            parent_id: parent.map(|p| CategoryId::new(p).unwrap()),
        }
    }

    fn slug(value: &str) -> CategorySlug {
        CategorySlug::new(value).unwrap()
    }

    fn slugs(values: &[&str]) -> HashSet<CategorySlug> {
        values.iter().map(|v| slug(v)).collect()
    }

    #[test]
    fn empty_input_builds_empty_index() {
        let hierarchy = build_hierarchy(&[]);
        assert!(hierarchy.root_categories.is_empty());
        assert!(hierarchy.subtree_index.is_empty());
        assert!(hierarchy.orphans.is_empty());
    }

    #[test]
    fn childless_root_maps_to_itself() {
        let hierarchy = build_hierarchy(&[category(1, "games", None)]);
        assert_eq!(hierarchy.subtree(&slug("games")), Some(&slugs(&["games"])));
        assert!(!hierarchy.is_aggregating_root(&slug("games")));
    }

    #[test]
    fn every_root_contains_its_own_slug() {
        let categories = vec![
            category(1, "hardware", None),
            category(2, "games", None),
            category(3, "gpus", Some(1)),
        ];
        let hierarchy = build_hierarchy(&categories);
        for root in &hierarchy.root_categories {
            assert!(hierarchy.subtree_index[&root.slug].contains(&root.slug));
        }
    }

    #[test]
    fn descendants_are_collected_transitively() {
        let categories = vec![
            category(3, "rtx", Some(2)),
            category(1, "hardware", None),
            category(2, "placas-de-video", Some(1)),
            category(4, "ssd", Some(1)),
        ];
        let hierarchy = build_hierarchy(&categories);

        assert_eq!(hierarchy.root_categories.len(), 1);
        assert_eq!(
            hierarchy.subtree(&slug("hardware")),
            Some(&slugs(&["hardware", "placas-de-video", "rtx", "ssd"]))
        );
        assert!(hierarchy.subtree(&slug("placas-de-video")).is_none());
        assert!(hierarchy.is_aggregating_root(&slug("hardware")));
    }

    #[test]
    fn rebuilding_yields_identical_membership() {
        let categories = vec![
            category(1, "hardware", None),
            category(2, "placas-de-video", Some(1)),
            category(3, "casa", None),
            category(4, "cozinha", Some(3)),
        ];
        let first = build_hierarchy(&categories);
        let second = build_hierarchy(&categories);
        assert_eq!(first.subtree_index, second.subtree_index);
    }

    #[test]
    fn dangling_parent_is_reported_as_orphan() {
        let categories = vec![
            category(1, "hardware", None),
            category(2, "lost", Some(99)),
            category(3, "lost-child", Some(2)),
        ];
        let hierarchy = build_hierarchy(&categories);

        assert_eq!(hierarchy.subtree(&slug("hardware")), Some(&slugs(&["hardware"])));
        let orphan_slugs: Vec<_> = hierarchy.orphans.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(orphan_slugs, vec!["lost", "lost-child"]);
        assert!(hierarchy.subtree(&slug("lost")).is_none());
    }

    #[test]
    fn parentless_cycles_terminate_as_orphans() {
        let categories = vec![
            category(1, "root", None),
            category(2, "a", Some(1)),
            category(3, "loop-x", Some(4)),
            category(4, "loop-y", Some(3)),
            category(5, "self-parent", Some(5)),
        ];
        let hierarchy = build_hierarchy(&categories);

        assert_eq!(hierarchy.subtree(&slug("root")), Some(&slugs(&["root", "a"])));
        let orphan_slugs: Vec<_> = hierarchy.orphans.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(orphan_slugs, vec!["loop-x", "loop-y", "self-parent"]);
    }

    #[test]
    fn deep_chains_do_not_recurse() {
        let mut categories = vec![category(1, "level-1", None)];
        for id in 2..=10_000 {
            categories.push(category(id, &format!("level-{id}"), Some(id - 1)));
        }
        let hierarchy = build_hierarchy(&categories);
        assert_eq!(hierarchy.subtree_index[&slug("level-1")].len(), 10_000);
    }

    #[test]
    fn children_lists_direct_descendants_only() {
        let categories = vec![
            category(1, "hardware", None),
            category(2, "placas-de-video", Some(1)),
            category(3, "rtx", Some(2)),
            category(4, "ssd", Some(1)),
        ];
        let hierarchy = build_hierarchy(&categories);
        let kids: Vec<_> = hierarchy
            .children(CategoryId::new(1).unwrap())
            .iter()
            .map(|c| c.slug.as_str())
            .collect();
        assert_eq!(kids, vec!["placas-de-video", "ssd"]);
        assert!(hierarchy.children(CategoryId::new(4).unwrap()).is_empty());
    }

    #[test]
    fn roots_sharing_a_slug_merge() {
        let categories = vec![
            category(1, "Hardware", None),
            category(2, "gpus", Some(1)),
            category(3, " hardware ", None),
            category(4, "cpus", Some(3)),
        ];
        let hierarchy = build_hierarchy(&categories);
        assert_eq!(
            hierarchy.subtree(&slug("hardware")),
            Some(&slugs(&["hardware", "gpus", "cpus"]))
        );
    }
}
