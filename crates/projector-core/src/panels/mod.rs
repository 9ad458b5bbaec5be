//! Explicit view state for the two browsing containers.
//!
//! The original page kept this state in the DOM (a `#project-list` element
//! holding highlighted list items, a `#project-info` element holding the
//! rendered detail). Here both containers are plain values owned by the
//! controller, so every mutation is inspectable.

use serde::Serialize;

use crate::projects::Project;

/// CSS class marking the selected list item.
pub const HIGHLIGHT_CLASS: &str = "highlight";

/// One entry of the list panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    /// Identifier attribute carried by the item
    pub project_id: String,
    /// Visible text (the identifier again)
    pub text: String,
    /// Whether the item carries the highlight class
    pub highlighted: bool,
}

impl ListItem {
    fn new(project: &Project) -> Self {
        Self {
            project_id: project.id.clone(),
            text: project.id.clone(),
            highlighted: false,
        }
    }
}

/// The project list container.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListPanel {
    items: Vec<ListItem>,
}

impl ListPanel {
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// Replace the whole item collection from a fresh project list.
    ///
    /// One item per project, in list order, nothing highlighted. There is no
    /// incremental update; the panel always mirrors the latest fetch.
    pub fn rebuild(&mut self, projects: &[Project]) {
        self.items = projects.iter().map(ListItem::new).collect();
    }

    /// Drop the highlight from every item.
    pub fn clear_highlights(&mut self) {
        for item in &mut self.items {
            item.highlighted = false;
        }
    }

    /// Clear all highlights, then highlight the first item bearing the
    /// identifier.
    ///
    /// Returns false (leaving every highlight untouched) when no item
    /// matches.
    pub fn highlight_first(&mut self, project_id: &str) -> bool {
        let Some(index) = self.items.iter().position(|i| i.project_id == project_id) else {
            return false;
        };

        self.clear_highlights();
        self.items[index].highlighted = true;
        true
    }

    /// The identifier of the currently highlighted item, if any.
    pub fn highlighted_id(&self) -> Option<&str> {
        self.items
            .iter()
            .find(|i| i.highlighted)
            .map(|i| i.project_id.as_str())
    }
}

/// The detail container.
///
/// Holds the rendered markup of the selected project; `None` until the first
/// successful selection. Content only ever changes through [`show`] and
/// [`clear`] — a failed selection leaves it alone.
///
/// [`show`]: DetailPanel::show
/// [`clear`]: DetailPanel::clear
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetailPanel {
    content: Option<String>,
}

impl DetailPanel {
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Replace the container's content with freshly rendered markup.
    pub fn show(&mut self, markup: String) {
        self.content = Some(markup);
    }

    /// Empty the container.
    pub fn clear(&mut self) {
        self.content = None;
    }
}
