use projector_core::Project;

pub struct TableFormatter {
    id_width: usize,
    state_width: usize,
    tasks_width: usize,
}

impl TableFormatter {
    pub fn new(projects: &[Project]) -> Self {
        let id_width = projects
            .iter()
            .map(|p| p.id.len())
            .max()
            .unwrap_or(10)
            .clamp(2, 40); // Between "ID" header min and reasonable terminal width max

        let state_width = projects
            .iter()
            .map(|p| p.state.len())
            .max()
            .unwrap_or(7)
            .clamp(5, 24);

        Self {
            id_width,
            state_width,
            tasks_width: 5,
        }
    }

    pub fn print_table(&self, projects: &[Project]) {
        self.print_header();
        for project in projects {
            self.print_row(project);
        }
        self.print_footer();
    }

    fn print_header(&self) {
        println!("{}", self.top_border());
        println!("{}", self.header_row());
        println!("{}", self.separator());
    }

    fn print_footer(&self) {
        println!("{}", self.bottom_border());
    }

    fn print_row(&self, project: &Project) {
        println!(
            "│ {:<width_id$} │ {:<width_state$} │ {:<width_tasks$} │",
            truncate(&project.id, self.id_width),
            truncate(&project.state, self.state_width),
            project.reports.tasks.len(),
            width_id = self.id_width,
            width_state = self.state_width,
            width_tasks = self.tasks_width,
        );
    }

    fn top_border(&self) -> String {
        format!(
            "┌{}┬{}┬{}┐",
            "─".repeat(self.id_width + 2),
            "─".repeat(self.state_width + 2),
            "─".repeat(self.tasks_width + 2),
        )
    }

    fn header_row(&self) -> String {
        format!(
            "│ {:<width_id$} │ {:<width_state$} │ {:<width_tasks$} │",
            "ID",
            "State",
            "Tasks",
            width_id = self.id_width,
            width_state = self.state_width,
            width_tasks = self.tasks_width,
        )
    }

    fn separator(&self) -> String {
        format!(
            "├{}┼{}┼{}┤",
            "─".repeat(self.id_width + 2),
            "─".repeat(self.state_width + 2),
            "─".repeat(self.tasks_width + 2),
        )
    }

    fn bottom_border(&self) -> String {
        format!(
            "└{}┴{}┴{}┘",
            "─".repeat(self.id_width + 2),
            "─".repeat(self.state_width + 2),
            "─".repeat(self.tasks_width + 2),
        )
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings
/// including emoji and multi-byte characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        // Safely truncate at character boundaries, not byte boundaries
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
