use crate::model::UploadedCv;

/// CVs chosen for the next analysis run, in the order they were picked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CvSelection {
    items: Vec<UploadedCv>,
}

impl CvSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `cv` if absent, removes it if present. Returns true when it was added.
    pub fn toggle(&mut self, cv: &UploadedCv) -> bool {
        if self.contains(&cv.id) {
            self.items.retain(|item| item.id != cv.id);
            false
        } else {
            self.items.push(cv.clone());
            true
        }
    }

    /// Removes `id` if selected. Absent ids are already satisfied.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Drops every selected CV whose id is missing from `available` and
    /// replaces the rest with their current entries.
    pub fn retain_available(&mut self, available: &[UploadedCv]) -> usize {
        let before = self.items.len();
        self.items = self
            .items
            .iter()
            .filter_map(|item| available.iter().find(|cv| cv.id == item.id).cloned())
            .collect();
        before - self.items.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[UploadedCv] {
        &self.items
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.id.as_str())
    }
}

/// Case-insensitive substring filter over CV names.
pub(crate) fn filter_by_name(cvs: &[UploadedCv], term: &str) -> Vec<UploadedCv> {
    let needle = term.to_lowercase();
    cvs.iter()
        .filter(|cv| cv.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
