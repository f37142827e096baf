//! Multi-select card picker
//!
//! Holds the user's chosen cards, the active search query, and the visibility
//! of the filter panel. Views are derived from that state on demand, so the
//! card list and the selection tags can never drift apart.

#[cfg(test)]
mod proptests;

use crate::catalog::{CardEntry, CATALOG};

pub const PLACEHOLDER_TEXT: &str = "Click to select your cards...";
pub const NO_MATCHES_TEXT: &str = "No cards found";
pub const CHECK_MARK: &str = "✓";

// ============================================================================
// Selection Set
// ============================================================================

/// Ordered set of chosen card names
///
/// Insertion order is display order. Duplicates are rejected on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    names: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Append `name` unless already present. Returns whether it was added.
    fn insert(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Remove `name` if present. Returns whether it was removed.
    fn remove(&mut self, name: &str) -> bool {
        match self.names.iter().position(|n| n == name) {
            Some(index) => {
                self.names.remove(index);
                true
            }
            None => false,
        }
    }

    /// Owned copy of the selection for a request body.
    ///
    /// `None` when nothing is selected.
    pub fn to_request_cards(&self) -> Option<Vec<String>> {
        if self.names.is_empty() {
            None
        } else {
            Some(self.names.clone())
        }
    }
}

// ============================================================================
// Views
// ============================================================================

/// Typed user actions bound to rendered selector elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorAction {
    Toggle(String),
    Remove(String),
}

/// One row of the card list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    pub card: &'static CardEntry,
    pub selected: bool,
}

impl CardItem {
    pub fn check_mark(&self) -> &'static str {
        if self.selected {
            CHECK_MARK
        } else {
            ""
        }
    }

    pub fn on_click(&self) -> SelectorAction {
        SelectorAction::Toggle(self.card.name.to_string())
    }
}

/// What the card list currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardListView {
    /// No active query: the whole catalog
    Catalog(Vec<CardItem>),
    /// Active query with at least one hit
    Matches(Vec<CardItem>),
    /// Active query with no hits
    NoMatches,
}

impl CardListView {
    pub fn items(&self) -> &[CardItem] {
        match self {
            CardListView::Catalog(items) | CardListView::Matches(items) => items,
            CardListView::NoMatches => &[],
        }
    }
}

/// A selected card shown in the selector header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedTag {
    pub name: String,
}

impl SelectedTag {
    pub fn on_remove(&self) -> SelectorAction {
        SelectorAction::Remove(self.name.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionView {
    Placeholder,
    Tags(Vec<SelectedTag>),
}

/// Result of a panel visibility change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelChange {
    /// Panel became visible; the search input should take focus
    Opened,
    Closed,
    Unchanged,
}

// ============================================================================
// Card Selector
// ============================================================================

#[derive(Debug, Clone)]
pub struct CardSelector {
    catalog: &'static [CardEntry],
    selection: SelectionSet,
    query: String,
    panel_open: bool,
}

impl Default for CardSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl CardSelector {
    pub fn new() -> Self {
        Self::with_catalog(CATALOG)
    }

    pub fn with_catalog(catalog: &'static [CardEntry]) -> Self {
        Self {
            catalog,
            selection: SelectionSet::new(),
            query: String::new(),
            panel_open: false,
        }
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    /// Catalog entries whose name or bank contains `query`, ignoring case.
    ///
    /// Catalog order is preserved; an empty query yields the whole catalog.
    pub fn filter(&self, query: &str) -> Vec<&'static CardEntry> {
        let needle = query.to_lowercase();
        self.catalog
            .iter()
            .filter(|card| card.matches_lowercase(&needle))
            .collect()
    }

    /// Update the search input text
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        tracing::debug!(query = %self.query, "Card search updated");
    }

    /// Select `name` if unselected, unselect it otherwise.
    ///
    /// Names outside the catalog are ignored. Returns whether the selection
    /// changed. The active query is kept.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.selection.remove(name) {
            tracing::debug!(card = %name, "Card deselected");
            return true;
        }
        if !self.catalog.iter().any(|card| card.name == name) {
            tracing::debug!(card = %name, "Ignoring toggle of unknown card");
            return false;
        }
        self.selection.insert(name);
        tracing::debug!(card = %name, "Card selected");
        true
    }

    /// Unselect `name` if selected.
    ///
    /// A successful removal also clears the search query so the list shows
    /// the full catalog again. Absent names are a no-op.
    pub fn remove(&mut self, name: &str) -> bool {
        if !self.selection.remove(name) {
            return false;
        }
        self.query.clear();
        tracing::debug!(card = %name, "Card removed");
        true
    }

    pub fn apply(&mut self, action: &SelectorAction) -> bool {
        match action {
            SelectorAction::Toggle(name) => self.toggle(name),
            SelectorAction::Remove(name) => self.remove(name),
        }
    }

    /// Show or hide the filter panel
    pub fn toggle_panel(&mut self) -> PanelChange {
        self.panel_open = !self.panel_open;
        if self.panel_open {
            PanelChange::Opened
        } else {
            PanelChange::Closed
        }
    }

    /// An interaction landed outside the selector
    pub fn interaction_outside(&mut self) -> PanelChange {
        if self.panel_open {
            self.panel_open = false;
            PanelChange::Closed
        } else {
            PanelChange::Unchanged
        }
    }

    pub fn list_view(&self) -> CardListView {
        let items = |cards: Vec<&'static CardEntry>| -> Vec<CardItem> {
            cards
                .into_iter()
                .map(|card| CardItem {
                    card,
                    selected: self.selection.contains(card.name),
                })
                .collect()
        };

        if self.query.is_empty() {
            return CardListView::Catalog(items(self.catalog.iter().collect()));
        }
        let matches = self.filter(&self.query);
        if matches.is_empty() {
            CardListView::NoMatches
        } else {
            CardListView::Matches(items(matches))
        }
    }

    pub fn selection_view(&self) -> SelectionView {
        if self.selection.is_empty() {
            SelectionView::Placeholder
        } else {
            SelectionView::Tags(
                self.selection
                    .names()
                    .iter()
                    .map(|name| SelectedTag { name: name.clone() })
                    .collect(),
            )
        }
    }
}
