use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("projector")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Browse projects on a Copernicus distributed-computing server")
        .long_about("Projector fetches the project list from a Copernicus server and renders the browsing surface the original web page provided: a selectable project list and a per-project detail view with its task reports.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("Fetch and display all projects on the server")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output the project array in JSON format")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("html")
                        .long("html")
                        .help("Output the rendered list markup")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("json")
                )
                .arg(
                    Arg::new("server")
                        .long("server")
                        .short('s')
                        .value_name("URL")
                        .help("Server base URL (overrides config and PROJECTOR_SERVER_URL)")
                )
        )
        .subcommand(
            Command::new("show")
                .about("Fetch projects and display one project's detail view")
                .arg(
                    Arg::new("project-id")
                        .help("Identifier of the project to show")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output the project in JSON format")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("html")
                        .long("html")
                        .help("Output the rendered detail markup")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("json")
                )
                .arg(
                    Arg::new("server")
                        .long("server")
                        .short('s')
                        .value_name("URL")
                        .help("Server base URL (overrides config and PROJECTOR_SERVER_URL)")
                )
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(Shell))
                )
        )
}
