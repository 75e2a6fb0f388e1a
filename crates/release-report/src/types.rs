use serde::{Deserialize, Serialize};

/// One package the publish tool reported as released.
///
/// Names may be scoped (`@scope/name`) or plain. Instances only live long
/// enough to be serialized into the `published-packages` output value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedPackage {
    pub name: String,
    pub version: String,
}
