use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Recipe identifiers the user has marked, stored as a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: BTreeSet<String>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Flips membership of `id`; returns `true` when it was added.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_reports_direction() {
        let mut favorites = FavoriteSet::new();
        assert!(favorites.toggle("52977"));
        assert!(favorites.contains("52977"));
        assert!(!favorites.toggle("52977"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn serializes_as_plain_array() {
        let favorites: FavoriteSet = ["52977", "52772"].into_iter().collect();
        let json = serde_json::to_string(&favorites).unwrap();
        assert_eq!(json, r#"["52772","52977"]"#);
    }

    #[test]
    fn duplicate_ids_in_storage_collapse() {
        let favorites: FavoriteSet = serde_json::from_str(r#"["1","1","2"]"#).unwrap();
        assert_eq!(favorites.len(), 2);
    }
}
