//! Pure render functions for the browsing markup.
//!
//! Each function maps one value to one markup fragment and touches no state,
//! so the view layer can be checked byte-for-byte in tests. All interpolated
//! values pass through [`crate::escape::html_escape`].

use crate::escape::html_escape;
use crate::panels::{HIGHLIGHT_CLASS, ListItem, ListPanel};
use crate::projects::{Project, Task};

/// Render one task as a list item: `<li task-id="{id}">{id}({state})</li>`.
pub fn render_task_item(task: &Task) -> String {
    let id = html_escape(&task.id);
    let state = html_escape(&task.state);
    format!("<li task-id=\"{}\">{}({})</li>", id, id, state)
}

/// Render a project's tasks as a flat run of list items.
pub fn render_task_list(tasks: &[Task]) -> String {
    tasks.iter().map(render_task_item).collect()
}

/// Render a project's detail view.
///
/// Title is the identifier, body is the state, followed by the nested task
/// list: `<h1>{id}</h1><br/>{state}<br/><ul>{tasks}</ul>`.
pub fn render_project_info(project: &Project) -> String {
    format!(
        "<h1>{}</h1><br/>{}<br/><ul>{}</ul>",
        html_escape(&project.id),
        html_escape(&project.state),
        render_task_list(&project.reports.tasks)
    )
}

/// Render one list entry: `<li project-id="{id}">{text}</li>`.
///
/// A highlighted entry additionally carries the highlight class.
pub fn render_list_item(item: &ListItem) -> String {
    let id = html_escape(&item.project_id);
    let text = html_escape(&item.text);
    if item.highlighted {
        format!(
            "<li project-id=\"{}\" class=\"{}\">{}</li>",
            id, HIGHLIGHT_CLASS, text
        )
    } else {
        format!("<li project-id=\"{}\">{}</li>", id, text)
    }
}

/// Render the whole list container: `<ul id="project-list">{items}</ul>`.
pub fn render_list_panel(panel: &ListPanel) -> String {
    let items: String = panel.items().iter().map(render_list_item).collect();
    format!("<ul id=\"project-list\">{}</ul>", items)
}
