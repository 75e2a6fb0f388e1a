mod error;
mod parse;
mod serialize;
mod types;

pub use error::{ReportError, Result};
pub use parse::{FAILURE_MARKER, PublishReport, SUCCESS_MARKER, parse_publish_output};
pub use serialize::published_packages_json;
pub use types::PublishedPackage;
