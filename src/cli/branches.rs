use documented::{Documented, DocumentedFields};

use super::{CliParseError, HelpOrVersion, LocalFlag, SubCommand};

/// List the branches of an installed repository
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Documented, DocumentedFields)]
pub struct Branches {
    /// Name of the repository, either `name` or `owner/name`
    pub repo: String,
}

impl SubCommand for Branches {
    const NAME: &str = "branches";

    fn parse<I: Iterator<Item = String>>(
        args: &mut I,
        global_flag: &mut HelpOrVersion,
    ) -> Result<Self, CliParseError> {
        let mut repo: Option<String> = None;

        for arg in args.by_ref() {
            if let Ok(flag) = arg.parse::<HelpOrVersion>() {
                global_flag.validate(flag)?;
                continue;
            }

            match LocalFlag::parse(&arg)? {
                Some(flag) => return Err(CliParseError::UnexpectedFlag(flag)),
                None if repo.is_some() => return Err(CliParseError::InvalidArgument(arg)),
                None => repo = Some(arg),
            }
        }

        // `rawgent branches --help` does not need a repository
        match repo {
            Some(repo) => Ok(Branches { repo }),
            None if *global_flag != HelpOrVersion::None => Ok(Branches {
                repo: String::new(),
            }),
            None => Err(CliParseError::MissingArgument("<repo>")),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::tests::rawgent;
    use crate::cli::{Cli, Subcommand};

    #[test]
    fn valid() {
        assert_eq!(
            rawgent(&["branches", "helix"]),
            Ok(Cli {
                subcommand: Some(Subcommand::Branches(Branches {
                    repo: "helix".to_owned()
                })),
                help_or_version: HelpOrVersion::None,
            })
        );
        assert_eq!(
            rawgent(&["branches", "helix-editor/helix", "-h"]),
            Ok(Cli {
                subcommand: Some(Subcommand::Branches(Branches {
                    repo: "helix-editor/helix".to_owned()
                })),
                help_or_version: HelpOrVersion::Help,
            })
        );
        assert_eq!(
            rawgent(&["branches", "--help"]),
            Ok(Cli {
                subcommand: Some(Subcommand::Branches(Branches {
                    repo: String::new()
                })),
                help_or_version: HelpOrVersion::Help,
            })
        );
    }

    #[test]
    fn invalid() {
        assert_eq!(
            rawgent(&["branches"]),
            Err(CliParseError::MissingArgument("<repo>"))
        );
        assert_eq!(
            rawgent(&["branches", "helix", "patchy"]),
            Err(CliParseError::InvalidArgument("patchy".to_owned()))
        );
        assert_eq!(
            rawgent(&["branches", "helix", "--branch=master"]),
            Err(CliParseError::UnexpectedFlag(LocalFlag::BranchName(
                "master".to_owned()
            )))
        );
    }
}
