use clap::ArgMatches;
use tracing::{error, info};

use projector_core::events;
use projector_core::templates;
use projector_core::{Command, Store};

pub(crate) fn handle_show_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let project_id = matches
        .get_one::<String>("project-id")
        .ok_or("Project id argument is required")?;
    let json_output = matches.get_flag("json");
    let html_output = matches.get_flag("html");

    info!(
        event = "cli.show_started",
        project_id = project_id.as_str(),
        json_output = json_output,
        html_output = html_output
    );

    let mut browser = super::connect_browser(matches)?;

    if let Err(e) = browser.dispatch(Command::LoadProjects) {
        eprintln!("❌ Failed to fetch projects: {}", e);

        error!(
            event = "cli.show_failed",
            project_id = project_id.as_str(),
            error = %e
        );

        events::log_app_error(&e);
        return Err(e.into());
    }

    // Select never fails once the list is loaded; an unknown identifier
    // surfaces as an ignored selection, which leaves the lookup below empty.
    browser.dispatch(Command::SelectProject {
        id: project_id.clone(),
    })?;

    let Some(project) = browser.project(project_id) else {
        eprintln!("❌ No project found with id '{}'", project_id);

        error!(
            event = "cli.show_unknown_project",
            project_id = project_id.as_str()
        );

        return Err(format!("No project found with id '{}'", project_id).into());
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(project)?);
    } else if html_output {
        println!("{}", templates::render_project_info(project));
    } else {
        println!("✅ Project '{}'", project.id);
        println!("   State: {}", project.state);
        if project.reports.tasks.is_empty() {
            println!("   Tasks: none");
        } else {
            println!("   Tasks:");
            for task in &project.reports.tasks {
                println!("     {} ({})", task.id, task.state);
            }
        }
    }

    info!(
        event = "cli.show_completed",
        project_id = project_id.as_str()
    );

    Ok(())
}
