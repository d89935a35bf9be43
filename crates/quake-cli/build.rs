//! Stamps `QUAKE_VERSION` for `quake --version`.
//!
//! Uses `git describe` when building from a checkout and the package
//! version otherwise.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");

    let version = git_describe().unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
    println!("cargo:rustc-env=QUAKE_VERSION={version}");
}

fn git_describe() -> Option<String> {
    Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|raw| raw.trim().trim_start_matches('v').to_string())
        .filter(|version| !version.is_empty())
}
