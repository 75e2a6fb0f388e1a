mod publish;
mod tag;

pub use publish::{PublishInput, PublishOperation, PublishOutcome};
pub use tag::{TagInput, TagOperation, TagOutcome};
