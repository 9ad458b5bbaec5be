use clap::ArgMatches;
use tracing::{error, info};

use projector_core::events;
use projector_core::templates;
use projector_core::{Command, Store};

use crate::table::TableFormatter;

pub(crate) fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let html_output = matches.get_flag("html");

    info!(
        event = "cli.list_started",
        json_output = json_output,
        html_output = html_output
    );

    let mut browser = super::connect_browser(matches)?;

    match browser.dispatch(Command::LoadProjects) {
        Ok(_) => {
            let projects = browser.projects().unwrap_or(&[]);
            let project_count = projects.len();

            if json_output {
                println!("{}", serde_json::to_string_pretty(projects)?);
            } else if html_output {
                println!("{}", templates::render_list_panel(browser.list_panel()));
            } else if projects.is_empty() {
                println!("No projects found.");
            } else {
                println!("Projects:");
                let formatter = TableFormatter::new(projects);
                formatter.print_table(projects);
            }

            info!(event = "cli.list_completed", count = project_count);

            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to fetch projects: {}", e);

            error!(
                event = "cli.list_failed",
                error = %e
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
