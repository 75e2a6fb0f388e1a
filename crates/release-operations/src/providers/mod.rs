mod changesets;
mod command_runner;
mod credentials;
mod manifest;
mod outputs;

pub use changesets::FileSystemChangesets;
pub use command_runner::SystemCommandRunner;
pub use credentials::UserNpmrc;
pub use manifest::PackageJsonVersion;
pub use outputs::GithubOutputFile;
