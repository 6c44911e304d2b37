//! Rules core of a two-player chess game: per-piece move legality, check
//! detection, castling and pawn promotion, and a controller that alternates
//! turns and refuses moves leaving the own king in check.
//!
//! ```
//! use chess_rules::chess::core::Square;
//! use chess_rules::chess::game::{Game, GameStatus};
//!
//! let mut game = Game::new();
//! for (from, to) in [
//!     (Square::F2, Square::F3),
//!     (Square::E7, Square::E5),
//!     (Square::G2, Square::G4),
//!     (Square::D8, Square::H4),
//! ] {
//!     assert!(game.attempt_move(from, to).is_committed());
//! }
//! assert!(matches!(game.status(), GameStatus::Checkmate(_)));
//! ```

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

use std::io::{self, Write};

use shadow_rs::shadow;

pub mod chess;
pub mod shell;

pub use shell::Shell;

shadow!(build);

/// Returns the full version that can be used to identify how the binary was
/// built in the first place.
#[must_use]
pub fn version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Writes the version, build type and whether the build is clean to `output`
/// on startup.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_banner(output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "{} {}", env!("CARGO_PKG_NAME"), version())?;
    writeln!(output, "Release build: {}", !shadow_rs::is_debug())?;
    if !shadow_rs::git_clean() {
        writeln!(output, "Warning: built with uncommitted changes")?;
    }
    writeln!(output, "Enter moves as \"e2e4\"; other commands: d, moves, status, new, quit")?;
    writeln!(output)
}
