// Option bitsets and reader configuration.

use bitflags::bitflags;
use encoding_rs::{Encoding, WINDOWS_1252};

bitflags! {
    /// Binary directives of an affix file: a bare directive name on its own
    /// line switches the matching bit on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct AffixConfigOptions: u32 {
        /// Swap prefix and suffix roles (right-to-left morphology).
        const COMPLEX_PREFIXES = 1 << 0;
        /// Allow twofold suffixes inside compounds.
        const COMPOUND_MORE_SUFFIXES = 1 << 1;
        /// Forbid word duplication in compounds.
        const CHECK_COMPOUND_DUP = 1 << 2;
        /// Forbid compounds that a REP entry turns into a known word.
        const CHECK_COMPOUND_REP = 1 << 3;
        /// Forbid triple letters at compound boundaries.
        const CHECK_COMPOUND_TRIPLE = 1 << 4;
        /// Allow simplified triple letters at compound boundaries.
        const SIMPLIFIED_TRIPLE = 1 << 5;
        /// Forbid upper case letters at compound boundaries.
        const CHECK_COMPOUND_CASE = 1 << 6;
        /// Allow numbers with dots, dashes and commas.
        const CHECK_NUM = 1 << 7;
        /// Remove all bad n-gram suggestions.
        const ONLY_MAX_DIFF = 1 << 8;
        /// Disable word-splitting suggestions.
        const NO_SPLIT_SUGGESTIONS = 1 << 9;
        /// Allow affix rules that strip the whole word.
        const FULL_STRIP = 1 << 10;
        /// Keep trailing dots on suggestions.
        const SUGGEST_WITH_DOTS = 1 << 11;
        /// Treat WARN-flagged words as forbidden.
        const FORBID_WARN = 1 << 12;
        /// Enable German sharp-s handling.
        const CHECK_SHARPS = 1 << 13;
        /// Set by a CHECKCOMPOUNDPATTERN line with a replacement fragment.
        const SIMPLIFIED_COMPOUND = 1 << 14;
    }
}

impl AffixConfigOptions {
    /// Look up the option bit of a bare directive name (case-insensitive).
    pub fn from_directive(name: &str) -> Option<Self> {
        let option = match name.to_ascii_uppercase().as_str() {
            "COMPLEXPREFIXES" => Self::COMPLEX_PREFIXES,
            "COMPOUNDMORESUFFIXES" => Self::COMPOUND_MORE_SUFFIXES,
            "CHECKCOMPOUNDDUP" => Self::CHECK_COMPOUND_DUP,
            "CHECKCOMPOUNDREP" => Self::CHECK_COMPOUND_REP,
            "CHECKCOMPOUNDTRIPLE" => Self::CHECK_COMPOUND_TRIPLE,
            "SIMPLIFIEDTRIPLE" => Self::SIMPLIFIED_TRIPLE,
            "CHECKCOMPOUNDCASE" => Self::CHECK_COMPOUND_CASE,
            "CHECKNUM" => Self::CHECK_NUM,
            "ONLYMAXDIFF" => Self::ONLY_MAX_DIFF,
            "NOSPLITSUGS" => Self::NO_SPLIT_SUGGESTIONS,
            "FULLSTRIP" => Self::FULL_STRIP,
            "SUGSWITHDOTS" => Self::SUGGEST_WITH_DOTS,
            "FORBIDWARN" => Self::FORBID_WARN,
            "CHECKSHARPS" => Self::CHECK_SHARPS,
            _ => return None,
        };
        Some(option)
    }
}

bitflags! {
    /// Per-group options of a PFX/SFX entry group.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct AffixEntryOptions: u8 {
        /// The group may combine with affixes of the opposite edge.
        const CROSS_PRODUCT = 1 << 0;
        /// Continuation classes were written as AF indices.
        const ALIAS_F = 1 << 1;
        /// Morphology was written as AM indices.
        const ALIAS_M = 1 << 2;
    }
}

/// Break-point patterns installed when an affix file never mentions BREAK.
pub const DEFAULT_BREAK_TABLE: [&str; 3] = ["-", "^-", "-$"];

/// Reader configuration.
#[derive(Debug, Clone)]
pub struct ReaderOptions {
    /// Encoding assumed until a SET directive names another one.
    ///
    /// Also the encoding used to re-decode `FLAG UTF-8` flags when SET is
    /// absent. Default: ISO-8859-1 (served by windows-1252).
    pub default_encoding: &'static Encoding,

    /// Break patterns installed when no BREAK line was seen.
    /// Default: [`DEFAULT_BREAK_TABLE`].
    pub default_break_table: Vec<String>,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            default_encoding: WINDOWS_1252,
            default_break_table: DEFAULT_BREAK_TABLE.iter().map(|s| s.to_string()).collect(),
        }
    }
}
