use documented::{Documented, DocumentedFields};

use super::flags::CliFlag;
use super::{CliParseError, Flag, HelpOrVersion, LocalFlag, SubCommand};

/// Create the rawgent configuration file
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Documented, DocumentedFields)]
pub struct Init {
    /// Do not prompt when overwriting an existing configuration file
    pub yes: bool,
}

impl Init {
    pub const YES_FLAG: CliFlag<'static> = CliFlag {
        short: "-y",
        long: "--yes",
        description: "Do not prompt when overwriting an existing configuration file",
    };
}

impl SubCommand for Init {
    const NAME: &str = "init";

    fn parse<I: Iterator<Item = String>>(
        args: &mut I,
        global_flag: &mut HelpOrVersion,
    ) -> Result<Self, CliParseError> {
        let mut yes = false;

        for arg in args.by_ref() {
            if let Ok(flag) = arg.parse::<HelpOrVersion>() {
                global_flag.validate(flag)?;
                continue;
            }

            match LocalFlag::parse(&arg)? {
                Some(flag @ LocalFlag::Yes) => {
                    if yes {
                        return Err(CliParseError::DuplicateFlag(Flag::LocalFlag(flag)));
                    }
                    yes = true;
                },
                Some(flag) => return Err(CliParseError::UnexpectedFlag(flag)),
                None => return Err(CliParseError::InvalidArgument(arg)),
            }
        }

        Ok(Init { yes })
    }
}
