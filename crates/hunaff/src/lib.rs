//! Compiler for Hunspell affix (`.aff`) rule files.
//!
//! An [`AffixReader`] consumes the lines of an affix file in order and fills
//! an [`AffixConfigBuilder`]; at end of input the builder is frozen into an
//! immutable [`AffixConfig`]. Lines that cannot be applied do not stop the
//! read: they are returned as [`Diagnostic`]s next to the configuration.
//!
//! # Architecture
//!
//! - [`reader`] -- Directive dispatcher and input entry points
//! - [`directive`] -- Directive names and complex-prefix redirection
//! - [`config`] -- Configuration builder and frozen configuration
//! - [`entry`] -- PFX/SFX entry groups
//! - [`tables`] -- REP, ICONV/OCONV, MAP, BREAK, PHONE, compound and alias tables
//! - [`options`] -- Option bitsets and reader options
//! - [`encoding`] -- SET encodings and flag re-decoding
//! - [`source`] -- Line sources (text lines, raw bytes)
//!
//! ```
//! use hunaff::AffixReader;
//!
//! let compilation = AffixReader::read_lines(["PFX A Y 1", "PFX A 0 re ."]);
//! let group = compilation.config.prefix_group(hunaff::FlagValue::from_char('A'));
//! assert_eq!(group.unwrap().entries[0].apply("do").as_deref(), Some("redo"));
//! ```

pub mod config;
pub mod directive;
pub mod encoding;
pub mod entry;
pub mod options;
pub mod reader;
pub mod source;
pub mod tables;

use hunaff_core::SyntaxError;

pub use config::{AffixConfig, AffixConfigBuilder, CompoundSyllable, SpecialFlags};
pub use directive::Directive;
pub use entry::{
    AffixEntry, AffixEntryGroup, AffixKind, Prefix, PrefixEntry, PrefixGroup, Suffix, SuffixEntry,
    SuffixGroup,
};
pub use hunaff_core::{
    AffixEdge, CharacterCondition, CharacterConditionGroup, FlagMode, FlagSet, FlagValue,
    Redundancy,
};
pub use options::{AffixConfigOptions, AffixEntryOptions, ReaderOptions};
pub use reader::{AffixReader, Compilation, LineOutcome};

/// Reason a directive line was rejected, or a warning attached to a line
/// that was still applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AffixError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error("invalid integer: {0:?}")]
    InvalidInteger(String),
    #[error("{table} index {index:?} out of range (table has {len} entries)")]
    AliasOutOfRange {
        table: &'static str,
        index: String,
        len: usize,
    },
    #[error("duplicate affix header for flag {0}")]
    DuplicateHeader(FlagValue),
    #[error("malformed affix line: {0:?}")]
    MalformedAffixLine(String),
    #[error("unknown flag mode: {0:?}")]
    UnknownFlagMode(String),
    #[error("flag mode is already {0:?}")]
    RedundantFlagMode(FlagMode),
    #[error("flag mode changed to {0:?} after flags were already decoded")]
    LateFlagMode(FlagMode),
    #[error("unknown encoding: {0:?}")]
    UnknownEncoding(String),
    #[error("missing {0}")]
    MissingField(&'static str),
    #[error("condition {condition:?} can never hold for strip {strip:?}")]
    UnsatisfiableCondition { strip: String, condition: String },
}

/// Error reading affix input.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("failed to read affix file: {0}")]
    Io(#[from] std::io::Error),
}

/// Whether a diagnostic rejected its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DiagnosticKind {
    /// The line had no effect.
    Rejected,
    /// The line was applied; the problem is reported only.
    Warning,
}

/// A problem found on one line of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number.
    pub line: usize,
    /// Directive name as written.
    pub directive: String,
    pub kind: DiagnosticKind,
    pub error: AffixError,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.kind {
            DiagnosticKind::Rejected => "rejected",
            DiagnosticKind::Warning => "warning",
        };
        write!(f, "line {}: {} {}: {}", self.line, self.directive, kind, self.error)
    }
}
