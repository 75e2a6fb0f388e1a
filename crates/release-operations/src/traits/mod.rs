mod changesets;
mod command_runner;
mod credentials;
mod manifest;
mod outputs;

pub use changesets::ChangesetReader;
pub use command_runner::CommandRunner;
pub use credentials::CredentialConfigurator;
pub use manifest::ManifestReader;
pub use outputs::OutputSink;
