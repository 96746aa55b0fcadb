use documented::Documented;

use super::{CliParseError, HelpOrVersion, SubCommand, parse_no_arguments};

/// Print the link which installs the Raw-Gent GitHub App on more repositories
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Documented)]
pub struct Install;

impl SubCommand for Install {
    const NAME: &str = "install";

    fn parse<I: Iterator<Item = String>>(
        args: &mut I,
        global_flag: &mut HelpOrVersion,
    ) -> Result<Self, CliParseError> {
        parse_no_arguments(args, global_flag)?;
        Ok(Install)
    }
}
