use std::path::Path;

use release_operations::CommandLine;
use release_operations::operations::{TagInput, TagOperation, TagOutcome};
use release_operations::providers::{PackageJsonVersion, SystemCommandRunner};

use super::TagArgs;
use crate::error::Result;

pub(crate) fn run(args: &TagArgs, start_path: &Path) -> Result<()> {
    let input = TagInput {
        cwd: start_path.to_path_buf(),
        dist_dir: args.dist_dir.clone(),
        remote: args.remote.clone(),
        tag_command: CommandLine::parse(&args.tag_command)?,
        check_remote: args.check_remote,
    };

    let operation = TagOperation::new(SystemCommandRunner::new(), PackageJsonVersion::new());
    let outcome = operation.execute(&input)?;

    print_outcome(&outcome);

    Ok(())
}

fn print_outcome(outcome: &TagOutcome) {
    match outcome {
        TagOutcome::Pushed { version, branch } => {
            println!("Tagged v{version} and pushed {branch}.");
        }
        TagOutcome::AlreadyPublished { tag } => {
            println!("Tag {tag} already exists on the remote. Nothing to do.");
        }
    }
}
