use documented::{Documented, DocumentedFields};

use super::flags::CliFlag;
use super::{CliParseError, Flag, HelpOrVersion, LocalFlag, SubCommand};

/// Ask the agent to work on a repository
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Documented, DocumentedFields)]
pub struct Run {
    /// What the agent should do
    pub prompt: String,
    /// Repository to work on. The first installed repository if not given
    pub repo: Option<String>,
    /// Branch to work on. The first branch of the repository if not given
    pub branch: Option<String>,
}

impl Run {
    pub const REPO_NAME_FLAG: CliFlag<'static> = CliFlag {
        short: "-r=",
        long: "--repo=",
        description: "Repository to work on, defaults to the first installed repository",
    };

    pub const BRANCH_NAME_FLAG: CliFlag<'static> = CliFlag {
        short: "-b=",
        long: "--branch=",
        description: "Branch to work on, defaults to the first branch of the repository",
    };
}

impl SubCommand for Run {
    const NAME: &str = "run";

    fn parse<I: Iterator<Item = String>>(
        args: &mut I,
        global_flag: &mut HelpOrVersion,
    ) -> Result<Self, CliParseError> {
        let mut words: Vec<String> = vec![];
        let mut repo: Option<String> = None;
        let mut branch: Option<String> = None;

        for arg in args.by_ref() {
            if let Ok(flag) = arg.parse::<HelpOrVersion>() {
                global_flag.validate(flag)?;
                continue;
            }

            match LocalFlag::parse(&arg)? {
                Some(LocalFlag::RepoName(name)) if name.is_empty() => {
                    return Err(CliParseError::EmptyArgument(arg));
                },
                Some(LocalFlag::BranchName(name)) if name.is_empty() => {
                    return Err(CliParseError::EmptyArgument(arg));
                },
                Some(flag @ LocalFlag::RepoName(_)) if repo.is_some() => {
                    return Err(CliParseError::DuplicateFlag(Flag::LocalFlag(flag)));
                },
                Some(flag @ LocalFlag::BranchName(_)) if branch.is_some() => {
                    return Err(CliParseError::DuplicateFlag(Flag::LocalFlag(flag)));
                },
                Some(LocalFlag::RepoName(name)) => repo = Some(name),
                Some(LocalFlag::BranchName(name)) => branch = Some(name),
                Some(flag @ LocalFlag::Yes) => return Err(CliParseError::UnexpectedFlag(flag)),
                None => words.push(arg),
            }
        }

        let prompt = words.join(" ");

        if prompt.trim().is_empty() && *global_flag == HelpOrVersion::None {
            return Err(CliParseError::MissingArgument("<prompt>"));
        }

        Ok(Run {
            prompt,
            repo,
            branch,
        })
    }
}
