//! Logic for parsing command line arguments

use core::{error, fmt};
use std::env;

use flags::{CliFlag, Flag, HelpOrVersion, LocalFlag};

pub mod branches;
pub mod flags;
pub mod init;
pub mod install;
pub mod repos;
pub mod run;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum CliParseError {
    UnexpectedFlag(LocalFlag),
    UnknownFlag(String),
    InvalidArgument(String),
    DuplicateFlag(Flag),
    MutuallyExclusiveFlags,
    UnknownSubcommand(String),
    EmptyArgument(String),
    MissingArgument(&'static str),
}

impl fmt::Display for CliParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliParseError::UnexpectedFlag(flag) => write!(f, "Unexpected flag: {flag}"),
            CliParseError::DuplicateFlag(flag) => write!(f, "Cannot use {flag} more than once"),
            CliParseError::MutuallyExclusiveFlags => write!(
                f,
                "Flags {} and {} are mutually exclusive, so they cannot be used together.",
                HelpOrVersion::Help,
                HelpOrVersion::Version
            ),
            CliParseError::EmptyArgument(arg) => write!(f, "Empty argument: {arg}"),
            CliParseError::InvalidArgument(arg) => write!(f, "Invalid argument: {arg}"),
            CliParseError::UnknownFlag(flag) => write!(f, "Unknown flag: {flag}"),
            CliParseError::UnknownSubcommand(subcommand) => {
                write!(f, "Unknown subcommand: {subcommand}")
            },
            CliParseError::MissingArgument(argument) => write!(f, "Missing argument: {argument}"),
        }
    }
}

impl error::Error for CliParseError {}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Subcommand {
    Init(init::Init),
    Repos(repos::Repos),
    Branches(branches::Branches),
    Run(run::Run),
    Install(install::Install),
}

pub trait SubCommand {
    /// The name of the subcommand, how it is displayed and invoked
    const NAME: &str;

    /// Once we know where the subcommand starts, hand off the parsing to a
    /// helper struct
    fn parse<I: Iterator<Item = String>>(
        args: &mut I,
        global_flag: &mut HelpOrVersion,
    ) -> Result<Self, CliParseError>
    where
        Self: Sized;
}

/// Parse a subcommand which takes neither arguments nor flags
fn parse_no_arguments<I: Iterator<Item = String>>(
    args: &mut I,
    global_flag: &mut HelpOrVersion,
) -> Result<(), CliParseError> {
    for arg in args.by_ref() {
        if let Ok(flag) = arg.parse::<HelpOrVersion>() {
            global_flag.validate(flag)?;
            continue;
        }

        return Err(LocalFlag::parse(&arg)?
            .map_or(CliParseError::InvalidArgument(arg), |flag| {
                CliParseError::UnexpectedFlag(flag)
            }));
    }

    Ok(())
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cli {
    pub subcommand: Option<Subcommand>,
    pub help_or_version: HelpOrVersion,
}

impl Cli {
    pub const HELP_FLAG: CliFlag<'static> = CliFlag {
        short: "-h",
        long: "--help",
        description: "Print this message",
    };

    pub const VERSION_FLAG: CliFlag<'static> = CliFlag {
        short: "-v",
        long: "--version",
        description: "Get rawgent version",
    };

    /// Parse the command line arguments passed to Rawgent
    pub fn parse() -> Result<Self, CliParseError> {
        Self::__parse(env::args())
    }

    /// To allow this function to be used in tests
    pub fn __parse<Args: Iterator<Item = String>>(mut args: Args) -> Result<Self, CliParseError> {
        // skip the name used to invoke Rawgent, we don't care about that
        let _ = args.next();

        let mut global_flag = HelpOrVersion::None;
        let mut subcommand = None;

        // Process global flags before the subcommand
        let mut arg_queue = Vec::new();

        for arg in args.by_ref() {
            if let Ok(flag) = arg.parse::<HelpOrVersion>() {
                global_flag.validate(flag)?;
            } else if flags::is_flag(&arg) {
                // only expect global flags until this point
                return Err(CliParseError::UnknownFlag(arg));
            } else {
                arg_queue.push(arg);
                break;
            }
        }

        if let Some(cmd) = arg_queue.pop() {
            subcommand = Some(match cmd.as_str() {
                "init" => {
                    Subcommand::Init(init::Init::parse(&mut args, &mut global_flag)?)
                },
                "repos" => {
                    Subcommand::Repos(repos::Repos::parse(&mut args, &mut global_flag)?)
                },
                "branches" => {
                    Subcommand::Branches(branches::Branches::parse(&mut args, &mut global_flag)?)
                },
                "run" => Subcommand::Run(run::Run::parse(&mut args, &mut global_flag)?),
                "install" => {
                    Subcommand::Install(install::Install::parse(&mut args, &mut global_flag)?)
                },
                arg => return Err(CliParseError::UnknownSubcommand(arg.to_owned())),
            });
        }

        Ok(Cli {
            subcommand,
            help_or_version: global_flag,
        })
    }
}
