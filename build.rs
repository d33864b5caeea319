//! The build script for git-rules.

use std::{io, process::Command};

fn main() {
    let cargo_version = env!("CARGO_PKG_VERSION");
    let version = version_with_git(cargo_version)
        .unwrap_or_else(|_| String::from(cargo_version));

    println!("cargo:rustc-env=VERSION_WITH_GIT={version}");
}

/// Builds the version string, tagging dev builds with the Git revision.
///
/// Builds from a clean worktree checked out at a tag matching exactly the
/// cargo version prefixed by `v` keep the plain cargo version. Any other
/// build gets the short revision appended, with `-modified` added when the
/// worktree is dirty.
fn version_with_git(cargo_version: &str) -> io::Result<String> {
    if git(&["describe", "--always", "--dirty=-modified"])?
        == format!("v{cargo_version}")
    {
        return Ok(String::from(cargo_version));
    }

    let revision = git(&["rev-parse", "--short", "HEAD"])?;

    if git(&["status", "--porcelain"])?.is_empty() {
        Ok(format!("{cargo_version}+{revision}"))
    } else {
        Ok(format!("{cargo_version}+{revision}-modified"))
    }
}

fn git(args: &[&str]) -> io::Result<String> {
    let output = Command::new("git").args(args).output()?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
}
