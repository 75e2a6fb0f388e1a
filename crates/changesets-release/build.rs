use std::process::Command;

use chrono::Utc;

/// Stamps the binary version: the bare crate version when HEAD carries the
/// matching release tag, a `+<hash>.<date>` build suffix on any other
/// commit, and the bare version again outside a git checkout.
fn main() {
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/");

    let version = env!("CARGO_PKG_VERSION").to_owned();

    let version_string = match git_stdout(&["rev-parse", "--short", "HEAD"]) {
        Some(_) if head_carries_release_tag(&version) => version,
        Some(hash) => {
            let date = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            format!("{version}+{hash}.{date}")
        }
        None => version,
    };

    println!("cargo:rustc-env=CHANGESETS_RELEASE_VERSION={version_string}");
}

fn head_carries_release_tag(version: &str) -> bool {
    let expected = format!("changesets-release@v{version}");

    git_stdout(&["tag", "--points-at", "HEAD"])
        .is_some_and(|tags| tags.lines().any(|line| line.trim() == expected))
}

fn git_stdout(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }

    String::from_utf8(output.stdout)
        .ok()
        .map(|stdout| stdout.trim().to_owned())
}
