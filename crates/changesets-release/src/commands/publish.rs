use std::path::Path;

use release_operations::CommandLine;
use release_operations::operations::{PublishInput, PublishOperation, PublishOutcome};
use release_operations::providers::{
    FileSystemChangesets, GithubOutputFile, SystemCommandRunner, UserNpmrc,
};

use super::PublishArgs;
use crate::environment::Environment;
use crate::error::Result;

pub(crate) fn run(args: &PublishArgs, start_path: &Path, environment: &Environment) -> Result<()> {
    let input = PublishInput {
        cwd: start_path.to_path_buf(),
        version_command: CommandLine::parse(&args.version_command)?,
        publish_command: CommandLine::parse(&args.publish_command)?,
    };

    let operation = PublishOperation::new(
        FileSystemChangesets::new(),
        SystemCommandRunner::new(),
        UserNpmrc::new(environment.home.clone(), environment.npm_token.clone()),
        GithubOutputFile::new(environment.github_output.clone()),
    );
    let outcome = operation.execute(&input)?;

    print_outcome(&outcome);

    Ok(())
}

fn print_outcome(outcome: &PublishOutcome) {
    match outcome {
        PublishOutcome::NoChangesets => {
            println!("No changesets found. Nothing to publish.");
        }
        PublishOutcome::Completed { packages } if packages.is_empty() => {
            println!("Published 0 packages.");
        }
        PublishOutcome::Completed { packages } => {
            println!("Published {} package(s):", packages.len());
            for package in packages {
                println!("  {}@{}", package.name, package.version);
            }
        }
    }
}
