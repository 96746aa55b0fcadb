use documented::Documented;

use super::{CliParseError, HelpOrVersion, SubCommand, parse_no_arguments};

/// List installed repositories and the branches of the selected one
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Documented)]
pub struct Repos;

impl SubCommand for Repos {
    const NAME: &str = "repos";

    fn parse<I: Iterator<Item = String>>(
        args: &mut I,
        global_flag: &mut HelpOrVersion,
    ) -> Result<Self, CliParseError> {
        parse_no_arguments(args, global_flag)?;
        Ok(Repos)
    }
}
