//! Id-to-snapshot lookup over the most recently fetched category list.

use std::collections::HashMap;

use common::model::category::Category;
use common::model::guide::CategorySnapshot;

/// Built once per category-list fetch and consulted when the draft's
/// selected ids are resolved into snapshots. An id with no entry resolves to
/// nothing: stale selections are dropped silently, by policy, rather than
/// failing the save.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    by_id: HashMap<String, CategorySnapshot>,
    order: Vec<String>,
}

impl CategoryIndex {
    pub fn from_categories(categories: &[Category]) -> Self {
        let mut index = Self::default();
        for category in categories {
            index.insert(CategorySnapshot {
                id: category.id.clone(),
                title: category.title.clone(),
                color: category.color.clone(),
            });
        }
        index
    }

    pub fn insert(&mut self, snapshot: CategorySnapshot) {
        if !self.by_id.contains_key(&snapshot.id) {
            self.order.push(snapshot.id.clone());
        }
        self.by_id.insert(snapshot.id.clone(), snapshot);
    }

    pub fn get(&self, id: &str) -> Option<&CategorySnapshot> {
        self.by_id.get(id)
    }

    /// Resolves ids in selection order, dropping unknown ids.
    pub fn resolve(&self, ids: &[String]) -> Vec<CategorySnapshot> {
        ids.iter()
            .filter_map(|id| self.by_id.get(id).cloned())
            .collect()
    }

    /// Snapshots in the order the backing list delivered them.
    pub fn snapshots(&self) -> impl Iterator<Item = &CategorySnapshot> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(id: &str) -> CategorySnapshot {
        CategorySnapshot {
            id: id.to_string(),
            title: format!("title-{id}"),
            color: "#112233".to_string(),
        }
    }

    #[test]
    fn resolve_preserves_selection_order_and_drops_unknown_ids() {
        let mut index = CategoryIndex::default();
        index.insert(snapshot("a"));
        index.insert(snapshot("b"));

        let resolved = index.resolve(&[
            "b".to_string(),
            "missing".to_string(),
            "a".to_string(),
        ]);
        let ids: Vec<&str> = resolved.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn insert_replaces_without_duplicating_order() {
        let mut index = CategoryIndex::default();
        index.insert(snapshot("a"));
        index.insert(CategorySnapshot {
            id: "a".to_string(),
            title: "renamed".to_string(),
            color: "#000000".to_string(),
        });
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("a").unwrap().title, "renamed");
    }
}
