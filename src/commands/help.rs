use colored::Colorize as _;
use documented::Documented as _;

use crate::APP_NAME;
use crate::cli::branches::Branches;
use crate::cli::init::Init;
use crate::cli::install::Install;
use crate::cli::repos::Repos;
use crate::cli::run::Run;
use crate::cli::{Cli, SubCommand as _, Subcommand};
use crate::config::BASE_URL_ENV;

fn format_subcommand(command: &str, description: &str) -> String {
    let command = command.bright_yellow();
    format!("{command}\n    {}", format_description(description))
}

pub fn format_description(description: &str) -> String {
    format!("{} {description}", "»".bright_black())
}

pub fn help(subcommand: Option<&Subcommand>) -> String {
    let app_name = APP_NAME.bright_blue();
    let flags_label = "[<flags>]".bright_magenta();
    let command_str = "<command>".bright_yellow();
    let args = "[<args>]".bright_green();
    let version = env!("CARGO_PKG_VERSION");

    let help_and_version = format!(
        "    {}

    {}",
        Cli::HELP_FLAG,
        Cli::VERSION_FLAG,
    );

    let header = format!(
        "  {app_name} {version}
  {}",
        "Client for Raw-Gent, an asynchronous coding agent".italic()
    );

    let Some(subcommand) = subcommand else {
        // main help menu
        let init = format_subcommand(Init::NAME, Init::DOCS);
        let repos = format_subcommand(Repos::NAME, Repos::DOCS);
        let branches = format_subcommand(Branches::NAME, Branches::DOCS);
        let run = format_subcommand(Run::NAME, Run::DOCS);
        let install = format_subcommand(Install::NAME, Install::DOCS);
        let env = BASE_URL_ENV.bright_cyan();

        return format!(
            "
{header}

  Usage:

    {app_name} {command_str} {args} {flags_label}

  Commands:

    {init}

    {repos}

    {branches}

    {run}

    {install}

  Flags:

{help_and_version}

  Environment:

    {env}
    {}

",
            format_description("Backend to use instead of `base-url` from the config")
        );
    };

    let (usage, flags) = match subcommand {
        Subcommand::Init(_) => (
            format!(
                "{app_name} {}\n    {}",
                Init::NAME.bright_yellow(),
                format_description(Init::DOCS)
            ),
            format!("    {}\n\n", Init::YES_FLAG),
        ),
        Subcommand::Repos(_) => (
            format!(
                "{app_name} {}\n    {}",
                Repos::NAME.bright_yellow(),
                format_description(Repos::DOCS)
            ),
            String::new(),
        ),
        Subcommand::Branches(_) => (
            format!(
                "{app_name} {} {}\n    {}",
                Branches::NAME.bright_yellow(),
                "<repo>".bright_green(),
                format_description(Branches::DOCS)
            ),
            String::new(),
        ),
        Subcommand::Run(_) => (
            format!(
                "{app_name} {} {} {flags_label}\n    {}",
                Run::NAME.bright_yellow(),
                "<prompt>".bright_green(),
                format_description(Run::DOCS)
            ),
            format!("    {}\n\n    {}\n\n", Run::REPO_NAME_FLAG, Run::BRANCH_NAME_FLAG),
        ),
        Subcommand::Install(_) => (
            format!(
                "{app_name} {}\n    {}",
                Install::NAME.bright_yellow(),
                format_description(Install::DOCS)
            ),
            String::new(),
        ),
    };

    format!(
        "
{header}

  Usage:

    {usage}

  Flags:

{flags}{help_and_version}

"
    )
}
