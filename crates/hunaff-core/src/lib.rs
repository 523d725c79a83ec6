//! Leaf types shared by the Hunspell affix compiler.
//!
//! This crate holds the two pieces of the rule language that everything else
//! is built from:
//!
//! - [`flags`] -- flag tokens and their four encodings (`FLAG` modes)
//! - [`condition`] -- character-class conditions attached to affix entries,
//!   including reversal and redundancy proofs
//!
//! Both report malformed input through [`SyntaxError`]; nothing in this crate
//! panics on user-supplied text.

pub mod condition;
pub mod flags;

pub use condition::{AffixEdge, CharacterCondition, CharacterConditionGroup, Redundancy};
pub use flags::{FlagMode, FlagSet, FlagValue};

/// Error type for malformed flag or condition text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("empty flag text")]
    EmptyFlag,
    #[error("expected exactly one flag, found {found} in {text:?}")]
    NotSingleFlag { text: String, found: usize },
    #[error("odd number of characters in long flag text {0:?}")]
    OddLongFlag(String),
    #[error("character {0:?} does not fit in half of a long flag")]
    LongFlagOutOfRange(char),
    #[error("invalid numeric flag {0:?}")]
    InvalidNumericFlag(String),
    #[error("unclosed character class in condition {0:?}")]
    UnclosedClass(String),
    #[error("empty character class in condition {0:?}")]
    EmptyClass(String),
}
