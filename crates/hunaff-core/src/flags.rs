// Flag tokens and the four FLAG encodings.
//
// A flag is an opaque tag attached to affix groups, dictionary words and
// continuation classes. The affix file picks one textual encoding with the
// FLAG directive; once decoded, flags compare by value only, so `A` in CHAR
// mode and `65` in NUM mode denote the same flag.

use std::fmt;

use crate::SyntaxError;

/// Textual encoding of flags, selected by the `FLAG` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FlagMode {
    /// One flag per character.
    #[default]
    Char,
    /// Two consecutive characters form one flag.
    Long,
    /// Decimal numbers separated by commas.
    Num,
    /// Characters re-decoded as UTF-8, then treated as `Char`.
    Uni,
}

impl FlagMode {
    /// Look up the mode named by a `FLAG` directive parameter.
    ///
    /// Matching is case-insensitive; `UTF-8`, `UTF` and `UNI` all select
    /// [`FlagMode::Uni`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "CHAR" => Some(Self::Char),
            "LONG" => Some(Self::Long),
            "NUM" => Some(Self::Num),
            "UTF-8" | "UTF" | "UNI" => Some(Self::Uni),
            _ => None,
        }
    }
}

/// A decoded flag.
///
/// Ordering and hashing use the decoded value, never the text it came from.
/// `Long` pairs pack two 16-bit halves into the same space as characters, so
/// a pair whose first half is below U+0011 equals the character beyond the
/// BMP with the same scalar value (`"\u{1}\u{F600}"` is U+1F600). Only one
/// flag mode is in effect at a time, and Hunspell packs them the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FlagValue(u32);

impl FlagValue {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn from_char(c: char) -> Self {
        Self(c as u32)
    }

    /// Pack a `Long` flag. Each half must fit in 16 bits.
    fn from_pair(hi: char, lo: char) -> Result<Self, SyntaxError> {
        let hi_bits = u16::try_from(hi as u32).map_err(|_| SyntaxError::LongFlagOutOfRange(hi))?;
        let lo_bits = u16::try_from(lo as u32).map_err(|_| SyntaxError::LongFlagOutOfRange(lo))?;
        Ok(Self(((hi_bits as u32) << 16) | lo_bits as u32))
    }

    /// Decode every flag in `text` under `mode`.
    ///
    /// Empty text decodes to no flags. `Uni` text is expected to be already
    /// re-decoded by the caller and is split per character like `Char`.
    pub fn parse_flags(text: &str, mode: FlagMode) -> Result<Vec<FlagValue>, SyntaxError> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        match mode {
            FlagMode::Char | FlagMode::Uni => Ok(text.chars().map(FlagValue::from_char).collect()),
            FlagMode::Long => {
                let chars: Vec<char> = text.chars().collect();
                if chars.len() % 2 != 0 {
                    return Err(SyntaxError::OddLongFlag(text.to_string()));
                }
                chars
                    .chunks_exact(2)
                    .map(|pair| FlagValue::from_pair(pair[0], pair[1]))
                    .collect()
            }
            FlagMode::Num => text
                .split(',')
                .map(|segment| {
                    segment
                        .trim()
                        .parse::<u32>()
                        .map(FlagValue)
                        .map_err(|_| SyntaxError::InvalidNumericFlag(segment.to_string()))
                })
                .collect(),
        }
    }

    /// Decode text that must hold exactly one flag.
    pub fn parse_flag(text: &str, mode: FlagMode) -> Result<FlagValue, SyntaxError> {
        if text.is_empty() {
            return Err(SyntaxError::EmptyFlag);
        }

        let flags = Self::parse_flags(text, mode)?;
        match flags.as_slice() {
            [single] => Ok(*single),
            _ => Err(SyntaxError::NotSingleFlag {
                text: text.to_string(),
                found: flags.len(),
            }),
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let printable = |raw: u32| char::from_u32(raw).filter(|c| !c.is_control() && !c.is_whitespace());
        if let Some(c) = printable(self.0) {
            return write!(f, "{c}");
        }
        if self.0 > 0xFFFF {
            if let (Some(hi), Some(lo)) = (printable(self.0 >> 16), printable(self.0 & 0xFFFF)) {
                return write!(f, "{hi}{lo}");
            }
        }
        write!(f, "#{}", self.0)
    }
}

/// Sorted, de-duplicated set of flags.
///
/// Used for continuation classes and `AF` alias entries; membership is a
/// binary search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FlagSet(Vec<FlagValue>);

impl FlagSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn contains(&self, flag: FlagValue) -> bool {
        self.0.binary_search(&flag).is_ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[FlagValue] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlagValue> {
        self.0.iter()
    }
}

impl FromIterator<FlagValue> for FlagSet {
    fn from_iter<I: IntoIterator<Item = FlagValue>>(iter: I) -> Self {
        let mut flags: Vec<FlagValue> = iter.into_iter().collect();
        flags.sort_unstable();
        flags.dedup();
        Self(flags)
    }
}

impl From<Vec<FlagValue>> for FlagSet {
    fn from(flags: Vec<FlagValue>) -> Self {
        flags.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a FlagSet {
    type Item = &'a FlagValue;
    type IntoIter = std::slice::Iter<'a, FlagValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
