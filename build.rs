use std::env;
use std::process::Command;

// Bake the git revision into --version; builds outside a checkout fall
// back to a plain "Dev" marker instead of failing.
fn main() {
    let pkg_version = env::var("CARGO_PKG_VERSION").unwrap_or_default();
    let version = match git_revision() {
        Some((hash, date)) => format!("{} ({} {})", pkg_version, hash, date),
        None => format!("{} (Dev)", pkg_version),
    };
    println!("cargo:rustc-env=ENCONV_BUILD_VERSION={}", version);
    println!("cargo:rerun-if-changed=.git/HEAD");
}

fn git_revision() -> Option<(String, String)> {
    let hash = git_output(&["rev-parse", "--short", "HEAD"])?;
    let date = git_output(&["log", "-1", "--format=%cd", "--date=short"])?;
    Some((hash, date))
}

fn git_output(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
