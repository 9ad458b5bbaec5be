use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::panels::{DetailPanel, ListPanel};
use crate::projects::{self, Project};
use crate::templates;

use super::errors::BrowserError;
use super::events::{Event, IgnoreReason};
use super::source::ProjectSource;
use super::store::Store;
use super::types::Command;

/// Controller owning one browsing session's state.
///
/// Holds the fetched project list, the two panels, and the current selection;
/// all mutation goes through [`Store::dispatch`]. The list is unset until the
/// first successful [`Command::LoadProjects`], and a failed fetch never
/// touches existing state.
#[derive(Debug)]
pub struct ProjectBrowser<S> {
    source: S,
    projects: Option<Vec<Project>>,
    fetched_at: Option<DateTime<Utc>>,
    list: ListPanel,
    detail: DetailPanel,
    selected: Option<String>,
}

impl<S> ProjectBrowser<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            projects: None,
            fetched_at: None,
            list: ListPanel::default(),
            detail: DetailPanel::default(),
            selected: None,
        }
    }

    /// The fetched project list, once loaded.
    pub fn projects(&self) -> Option<&[Project]> {
        self.projects.as_deref()
    }

    /// Look up a loaded project by identifier (first match wins).
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects
            .as_deref()
            .and_then(|p| projects::find_project(p, id))
    }

    pub fn is_loaded(&self) -> bool {
        self.projects.is_some()
    }

    /// When the current list was fetched.
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn list_panel(&self) -> &ListPanel {
        &self.list
    }

    pub fn detail_panel(&self) -> &DetailPanel {
        &self.detail
    }

    /// Identifier of the currently selected project, if any.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}

impl<S: ProjectSource> ProjectBrowser<S> {
    /// Install a freshly fetched list, resetting the view to its initial state.
    fn install_list(&mut self, projects: Vec<Project>) {
        self.list.rebuild(&projects);
        self.detail.clear();
        self.selected = None;
        self.projects = Some(projects);
        self.fetched_at = Some(Utc::now());
    }

    fn handle_load_projects(&mut self) -> Result<Vec<Event>, BrowserError> {
        if self.projects.is_some() {
            return Err(BrowserError::AlreadyLoaded);
        }

        info!(event = "core.browser.load_projects_started");

        let projects = self.source.list_projects()?;
        let count = projects.len();
        self.install_list(projects);

        info!(event = "core.browser.load_projects_completed", count = count);

        Ok(vec![Event::ProjectsLoaded { count }])
    }

    fn handle_select_project(&mut self, id: String) -> Result<Vec<Event>, BrowserError> {
        if self.projects.is_none() {
            warn!(
                event = "core.browser.select_ignored",
                id = %id,
                reason = "not_loaded"
            );
            return Ok(vec![Event::SelectionIgnored {
                id,
                reason: IgnoreReason::NotLoaded,
            }]);
        }

        let Some(markup) = self.project(&id).map(templates::render_project_info) else {
            warn!(
                event = "core.browser.select_ignored",
                id = %id,
                reason = "unknown_project"
            );
            return Ok(vec![Event::SelectionIgnored {
                id,
                reason: IgnoreReason::UnknownProject,
            }]);
        };

        self.list.highlight_first(&id);
        self.detail.show(markup);
        self.selected = Some(id.clone());

        info!(event = "core.browser.selection_changed", id = %id);

        Ok(vec![Event::SelectionChanged { id }])
    }

    fn handle_refresh(&mut self) -> Result<Vec<Event>, BrowserError> {
        info!(event = "core.browser.refresh_started");

        let projects = self.source.list_projects()?;
        let count = projects.len();

        let previous = self.selected.take();
        self.install_list(projects);

        let mut events = vec![Event::ProjectsLoaded { count }];

        if let Some(id) = previous {
            match self.project(&id).map(templates::render_project_info) {
                Some(markup) => {
                    // Selection survived the refresh; re-render from fresh data.
                    self.list.highlight_first(&id);
                    self.detail.show(markup);
                    self.selected = Some(id);
                }
                None => {
                    info!(event = "core.browser.selection_cleared", id = %id);
                    events.push(Event::SelectionCleared { id });
                }
            }
        }

        info!(event = "core.browser.refresh_completed", count = count);

        Ok(events)
    }
}

impl<S: ProjectSource> Store for ProjectBrowser<S> {
    type Error = BrowserError;

    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, BrowserError> {
        match cmd {
            Command::LoadProjects => self.handle_load_projects(),
            Command::SelectProject { id } => self.handle_select_project(id),
            Command::Refresh => self.handle_refresh(),
        }
    }
}
