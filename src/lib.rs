//! Compares two [perft] divide dumps (lists of `move: count` lines produced by
//! different move generators) and reports the moves whose node counts differ.
//!
//! ```
//! use perftdiff::{compare, Record};
//!
//! let ours = Record::parse("a2a3: 380\nb2b3: 420").unwrap();
//! let reference = Record::parse("a2a3: 380\nb2b3: 421\nc2c3: 420").unwrap();
//! let comparison = compare(&ours, &reference).unwrap();
//! assert_eq!(comparison.totals(), (800, 1221));
//! assert_eq!(comparison.differences().len(), 2);
//! ```
//!
//! [perft]: https://www.chessprogramming.org/Perft

// Rustc lints.
#![warn(
    absolute_paths_not_starting_with_crate,
    keyword_idents,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]
// Rustdoc lints.
#![warn(
    rustdoc::private_doc_tests,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls
)]
// Clippy lints.
#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![deny(clippy::perf)]

pub mod comparison;
pub mod input;
pub mod record;

pub use comparison::{compare, Comparison, Difference};
pub use input::Source;
pub use record::Record;

use shadow_rs::shadow;

shadow!(build);

/// Returns the full version that can be used to identify how the tool was
/// built in the first place.
#[must_use]
pub fn tool_version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Logs the version, build type and whether the build is clean on startup.
pub fn log_build_info() {
    log::debug!("perftdiff {}", tool_version());
    log::debug!("Release build: {}", !shadow_rs::is_debug());
    if !shadow_rs::git_clean() {
        log::debug!("Built with uncommitted changes");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_names_commit_and_branch() {
        let version = tool_version();
        assert!(version.starts_with(build::PKG_VERSION));
        assert!(version.contains(&format!("commit {}", build::SHORT_COMMIT)));
        assert!(version.contains(&format!("branch {}", build::BRANCH)));
    }
}
