use std::sync::LazyLock;

use regex::Regex;

use crate::types::PublishedPackage;

/// Marker the publish tool prints before its list of released packages.
pub const SUCCESS_MARKER: &str = "packages published successfully:";

/// Marker printed before the list of packages that failed to publish.
pub const FAILURE_MARKER: &str = "packages failed to publish:";

/// One `name@version` per line, where the name is either scoped or plain.
static PACKAGE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(@[^/\s]+/[^@]+|[^/\s]+)@(\S+)").expect("package line pattern compiles")
});

/// Outcome of scanning publish output for released packages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishReport {
    /// The success marker was found; holds the packages listed after it,
    /// in line order. May be empty.
    Published(Vec<PublishedPackage>),
    /// The output carries no success marker at all.
    NoSuccessMarker,
}

/// Scans captured publish output for the success block and extracts the
/// `{name, version}` pairs listed in it.
///
/// The parse window runs from [`SUCCESS_MARKER`] to [`FAILURE_MARKER`] (when
/// the latter appears after it) or to the end of the text. Within the
/// window, every line is matched once against the package pattern; lines
/// that do not match are skipped, and duplicates are kept as-is.
#[must_use]
pub fn parse_publish_output(output: &str) -> PublishReport {
    let Some(start) = output.find(SUCCESS_MARKER) else {
        return PublishReport::NoSuccessMarker;
    };

    let window = &output[start..];
    let window = window
        .find(FAILURE_MARKER)
        .map_or(window, |end| &window[..end]);

    let packages = window
        .lines()
        .filter_map(|line| {
            PACKAGE_LINE.captures(line).map(|captures| PublishedPackage {
                name: captures[1].to_string(),
                version: captures[2].to_string(),
            })
        })
        .collect();

    PublishReport::Published(packages)
}
