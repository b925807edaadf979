//! English draughts (checkers) rules engine and a naive [Minimax] opponent.
//! For more information, see [README].
//!
//! [`draughts`] implements the rules: board, move generation with complete
//! capture chains, validation of moves entered by the players and standard
//! square notation. [`evaluation`] and [`search`] pick the moves of the
//! computer opponent and [`Engine`] runs the interactive game.
//!
//! [Minimax]: https://en.wikipedia.org/wiki/Minimax
//! [README]: https://github.com/kirillbobyrev/kingrow/blob/main/README.md

// TODO: Gradually move most of warnings to deny.
#![warn(missing_docs, variant_size_differences)]
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
// Search visits every node of the tree, so move generation has to be fast.
#![deny(clippy::perf)]

pub mod draughts;
pub mod evaluation;
pub mod search;

mod engine;
pub use engine::{Engine, Mode};
use shadow_rs::shadow;

shadow!(build);

/// Returns the full engine version that can be used to identify how it was
/// built in the first place.
fn engine_version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Prints information about the engine version and GitHub repository on
/// engine startup.
pub fn print_engine_info() {
    println!("Kingrow draughts engine {}", engine_version());
    println!("<https://github.com/kirillbobyrev/kingrow>");
}

/// Prints the build type and whether the build is clean on engine startup.
pub fn print_binary_info() {
    println!("Release build: {}", !shadow_rs::is_debug());
    if !shadow_rs::git_clean() {
        println!("Warning: built with uncommitted changes");
    }
    println!();
}
