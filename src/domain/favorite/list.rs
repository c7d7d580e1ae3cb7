use super::entity::FavoriteEntry;

/// Ordered favorites of a single user.
///
/// Insertion order is kept; no sort is applied. `add` refuses an entry whose
/// external identifier is already present, which is what keeps identifiers
/// unique in the stored document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesList {
    entries: Vec<FavoriteEntry>,
}

impl FavoritesList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap entries as read from the store, without reordering them.
    ///
    /// Repeated identifiers keep their first occurrence only.
    pub fn from_entries(entries: Vec<FavoriteEntry>) -> Self {
        let mut list = Self::new();
        for entry in entries {
            list.add(entry);
        }
        list
    }

    pub fn contains(&self, external_id: &str) -> bool {
        self.entries.iter().any(|e| e.external_id == external_id)
    }

    /// Append `entry` unless its identifier is already listed.
    ///
    /// Returns `true` when the list changed.
    pub fn add(&mut self, entry: FavoriteEntry) -> bool {
        if self.contains(&entry.external_id) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Drop every entry with `external_id`.
    ///
    /// Returns `true` when the list changed.
    pub fn remove(&mut self, external_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.external_id != external_id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<FavoriteEntry> {
        self.entries
    }
}
