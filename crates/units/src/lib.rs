// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Human-readable size handling for the disk test tools
//!
//! Sizes are entered as a decimal numeral with an optional power-of-two
//! suffix (`K`, `M`, `G`, `T` or `P`, in either case), e.g. `10G`, `512m`
//! or `1024`. Parsing is bounded by a caller-supplied maximum so that the
//! result always fits the destination type, such as a file offset or an
//! allocation size.

use miette::Diagnostic;
use thiserror::Error;

mod format;
mod parse;
mod suffix;

pub use format::{format_rate, format_size};
pub use parse::{parse_size, parse_size_unbounded};
pub use suffix::Suffix;

/// Errors that can occur while parsing a size string
#[derive(Diagnostic, Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// No parsable non-negative decimal numeral
    #[error("invalid size number: {input:?}")]
    #[diagnostic(help("sizes are a non-negative decimal number, optionally followed by K, M, G, T or P"))]
    InvalidNumber { input: String },

    /// A single trailing character that is not a known suffix
    #[error("invalid size suffix: {suffix:?}")]
    #[diagnostic(help("use K, M, G, T or P"))]
    InvalidSuffix { suffix: char },

    /// More than one character after the numeral
    #[error("invalid characters after size: {trailing:?}")]
    #[diagnostic(help("the suffix must be a single character directly after the number"))]
    TrailingCharacters { trailing: String },

    /// The numeral is too large for its suffix
    #[error("size value with suffix '{suffix}' exceeds maximum allowed: {input}")]
    Overflow { suffix: Suffix, input: String },

    /// The final value is larger than the caller permits
    #[error("size value {value} exceeds maximum allowed: {max}")]
    ExceedsMaximum { value: i64, max: i64 },
}
