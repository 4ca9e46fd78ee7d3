//! Convert 6-digit hex RGB codes into `{r, g, b, a}` float literals for GL code.
//!
//! ```
//! let lines = hex2fv::convert_to_lines(["434247", "5c5a66"]).expect("valid hex codes");
//! assert_eq!(lines[0], "{0.263f, 0.259f, 0.278f, 1.f},");
//! assert_eq!(lines[1], "{0.361f, 0.353f, 0.400f, 1.f};");
//! ```

#![warn(
    anonymous_parameters,
    bare_trait_objects,
    clippy::branches_sharing_code,
    clippy::map_unwrap_or,
    clippy::match_wildcard_for_single_variants,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::needless_for_each,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::unreadable_literal,
    clippy::unwrap_used,
    clippy::expect_used,
    deprecated_in_future,
    ellipsis_inclusive_range_patterns,
    future_incompatible,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    rustdoc::bare_urls,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::private_intra_doc_links,
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused
)]

use std::io;

pub mod color;
pub mod convert;

pub use color::{HexError, Rgb, Triplet};
pub use convert::{convert, convert_to_lines, format_line, Delimiter};

/// Results that can be returned from this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can be returned from this library.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A token was not a 6-digit hex code.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// The output stream rejected a line.
    #[error("failed to write color literal")]
    Io(#[from] io::Error),
}

/// A hex token that could not be converted, along with its 1-based argument position.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("expected 6 hex digits for arg #{position}: \"{token}\", {reason}")]
#[must_use]
pub struct FormatError {
    /// 1-based argument position.
    pub position: usize,
    /// The argument exactly as given.
    pub token: String,
    /// Why the token was rejected.
    pub reason: HexError,
}

impl FormatError {
    /// Attach an argument position and the offending token to a [`HexError`].
    pub fn new(position: usize, token: impl Into<String>, reason: HexError) -> Self {
        Self {
            position,
            token: token.into(),
            reason,
        }
    }
}
