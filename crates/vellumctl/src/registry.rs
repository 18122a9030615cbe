//! Document registry and selection state.
//!
//! Owns the list of documents the backend currently serves and the subset
//! the user has marked as active context for the next question. Network
//! synchronization is driven by the controller; this type only holds state
//! and keeps the one invariant that matters: the selection never references
//! a name outside the registry.

use std::collections::BTreeSet;

use vellum_common::wire::DocumentEntry;

/// Registry of queryable documents plus the active selection.
#[derive(Debug, Default)]
pub struct DocumentRegistry {
    documents: Vec<DocumentEntry>,
    selected: BTreeSet<String>,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the registry wholesale with a fresh listing.
    ///
    /// The selection is reset to every document in the new listing; no
    /// carry-over from the previous selection is attempted.
    pub fn replace_documents(&mut self, documents: Vec<DocumentEntry>) {
        self.selected = documents.iter().map(|doc| doc.name.clone()).collect();
        self.documents = documents;
    }

    /// Flip membership of `name` in the selection.
    ///
    /// Names not present in the registry are ignored with a warning rather
    /// than creating a dangling selection entry.
    pub fn toggle_selection(&mut self, name: &str) {
        if !self.contains(name) {
            tracing::warn!(document = name, "toggle ignored: not in registry");
            return;
        }
        if !self.selected.remove(name) {
            self.selected.insert(name.to_string());
        }
    }

    /// Select every document in the registry. Idempotent.
    pub fn select_all(&mut self) {
        self.selected = self.documents.iter().map(|doc| doc.name.clone()).collect();
    }

    /// Clear the selection. Idempotent.
    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.documents.iter().any(|doc| doc.name == name)
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.contains(name)
    }

    pub fn documents(&self) -> &[DocumentEntry] {
        &self.documents
    }

    /// Selected names in registry (listing) order, the order the backend
    /// receives them in an ask request.
    pub fn selected_names(&self) -> Vec<String> {
        self.documents
            .iter()
            .filter(|doc| self.selected.contains(&doc.name))
            .map(|doc| doc.name.clone())
            .collect()
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn selection_is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, pages: u32) -> DocumentEntry {
        DocumentEntry {
            name: name.to_string(),
            pages,
            size: None,
        }
    }

    fn registry_with(names: &[&str]) -> DocumentRegistry {
        let mut registry = DocumentRegistry::new();
        registry.replace_documents(names.iter().map(|n| entry(n, 1)).collect());
        registry
    }

    #[test]
    fn test_replace_selects_everything() {
        let registry = registry_with(&["a.pdf", "b.pdf", "c.pdf"]);
        assert_eq!(registry.document_count(), 3);
        assert_eq!(registry.selected_count(), 3);
        assert_eq!(registry.selected_names(), vec!["a.pdf", "b.pdf", "c.pdf"]);
    }

    #[test]
    fn test_replace_drops_stale_selection() {
        let mut registry = registry_with(&["old.pdf"]);
        registry.replace_documents(vec![entry("new.pdf", 2)]);
        assert!(!registry.is_selected("old.pdf"));
        assert_eq!(registry.selected_names(), vec!["new.pdf"]);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut registry = registry_with(&["a.pdf", "b.pdf"]);
        let before = registry.selected_names();

        registry.toggle_selection("a.pdf");
        assert!(!registry.is_selected("a.pdf"));

        registry.toggle_selection("a.pdf");
        assert_eq!(registry.selected_names(), before);
    }

    #[test]
    fn test_toggle_unknown_name_is_a_no_op() {
        let mut registry = registry_with(&["a.pdf"]);
        registry.toggle_selection("ghost.pdf");
        assert!(!registry.is_selected("ghost.pdf"));
        assert_eq!(registry.selected_count(), 1);
    }

    #[test]
    fn test_select_all_then_deselect_all() {
        let mut registry = registry_with(&["a.pdf", "b.pdf"]);
        registry.toggle_selection("a.pdf");

        registry.select_all();
        assert_eq!(registry.selected_count(), 2);
        // Idempotent.
        registry.select_all();
        assert_eq!(registry.selected_count(), 2);

        registry.deselect_all();
        assert!(registry.selection_is_empty());
        registry.deselect_all();
        assert!(registry.selection_is_empty());
    }

    #[test]
    fn test_selected_names_keep_listing_order() {
        let mut registry = registry_with(&["z.pdf", "a.pdf", "m.pdf"]);
        registry.toggle_selection("a.pdf");
        assert_eq!(registry.selected_names(), vec!["z.pdf", "m.pdf"]);
    }
}
