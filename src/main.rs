use rawgent::cli::flags::HelpOrVersion;
use rawgent::cli::{Cli, Subcommand};
use rawgent::{RawgentError, commands};

async fn main_impl() -> anyhow::Result<String> {
    let args = Cli::parse().map_err(RawgentError::CliParseError)?;

    let subcommand = match args.help_or_version {
        HelpOrVersion::Help => {
            return Ok(commands::help(args.subcommand.as_ref()));
        },
        HelpOrVersion::Version => {
            return Ok(format!("{}\n", env!("CARGO_PKG_VERSION")));
        },
        HelpOrVersion::None => match args.subcommand {
            Some(subcommand) => subcommand,
            None => return Ok(commands::help(None)),
        },
    };

    match subcommand {
        Subcommand::Init(init_args) => commands::init(init_args.yes),
        Subcommand::Repos(_) => commands::repos(&commands::load_config()?).await,
        Subcommand::Branches(branches_args) => {
            commands::branches(&commands::load_config()?, &branches_args.repo).await
        },
        Subcommand::Run(run_args) => commands::run(&commands::load_config()?, run_args).await,
        Subcommand::Install(_) => Ok(commands::install(&commands::load_config()?)),
    }
}

#[tokio::main]
async fn main() -> Result<(), ()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    match main_impl().await {
        Ok(ok) => {
            print!("{ok}");
            Ok(())
        },
        Err(err) => {
            eprintln!("{err:?}");
            Err(())
        },
    }
}
