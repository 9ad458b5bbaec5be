use clap::ArgMatches;
use tracing::{error, warn};

use projector_core::config::{Config, ProjectorConfig};
use projector_core::events;
use projector_core::{HttpClient, ProjectBrowser};

mod completions;
mod list;
mod show;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("list", sub_matches)) => list::handle_list_command(sub_matches),
        Some(("show", sub_matches)) => show::handle_show_command(sub_matches),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
fn load_config_with_warning() -> ProjectorConfig {
    match ProjectorConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.projector/config.toml and ./.projector/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            ProjectorConfig::default()
        }
    }
}

/// Build a browser connected to the configured server.
///
/// Applies the `--server` override on top of the config hierarchy and the
/// `PROJECTOR_SERVER_URL` environment variable.
fn connect_browser(
    matches: &ArgMatches,
) -> Result<ProjectBrowser<HttpClient>, Box<dyn std::error::Error>> {
    let file_config = load_config_with_warning();
    let server_override = matches.get_one::<String>("server").map(String::as_str);
    let config = Config::resolve(&file_config, server_override);

    match HttpClient::connect(&config) {
        Ok(client) => Ok(ProjectBrowser::new(client)),
        Err(e) => {
            eprintln!("❌ Invalid server configuration: {}", e);
            error!(event = "cli.connect_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
