// Affix configuration: the mutable builder filled line by line, and the
// frozen result.

use encoding_rs::{Encoding, WINDOWS_1252};
use hunaff_core::{FlagMode, FlagSet, FlagValue};

use crate::entry::{PrefixGroup, SuffixGroup};
use crate::options::AffixConfigOptions;
use crate::tables::{
    CompoundPattern, CompoundRule, ConversionTable, MapEntry, PhoneticEntry, ReplacementEntry,
    Table,
};

/// Vowels counted by COMPOUNDSYLLABLE when the line names none.
pub const DEFAULT_COMPOUND_VOWELS: &str = "AEIOUaeiou";

/// Flags with a fixed meaning, one per flag directive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpecialFlags {
    pub compound_flag: Option<FlagValue>,
    pub compound_begin: Option<FlagValue>,
    pub compound_middle: Option<FlagValue>,
    pub compound_end: Option<FlagValue>,
    pub compound_root: Option<FlagValue>,
    pub compound_permit: Option<FlagValue>,
    pub compound_forbid: Option<FlagValue>,
    pub no_suggest: Option<FlagValue>,
    pub no_ngram_suggest: Option<FlagValue>,
    pub forbidden_word: Option<FlagValue>,
    pub lemma_present: Option<FlagValue>,
    pub circumfix: Option<FlagValue>,
    pub only_in_compound: Option<FlagValue>,
    pub need_affix: Option<FlagValue>,
    pub keep_case: Option<FlagValue>,
    pub force_uppercase: Option<FlagValue>,
    pub warn: Option<FlagValue>,
    pub substandard: Option<FlagValue>,
}

/// COMPOUNDSYLLABLE: syllable limit and the vowels that make syllables.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CompoundSyllable {
    pub max_syllable: i32,
    /// Sorted.
    pub vowels: Vec<char>,
}

impl CompoundSyllable {
    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels.binary_search(&c).is_ok()
    }
}

/// Configuration under construction.
///
/// Owned by an [`AffixReader`](crate::AffixReader) while it reads; frozen by
/// [`build`](Self::build).
#[derive(Debug)]
pub struct AffixConfigBuilder {
    pub(crate) options: AffixConfigOptions,
    pub(crate) flag_mode: FlagMode,
    pub(crate) encoding: &'static Encoding,
    pub(crate) language: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) try_string: Option<String>,
    pub(crate) version: Option<String>,
    pub(crate) syllable_num: Option<String>,
    pub(crate) word_chars: Vec<char>,
    pub(crate) ignored_chars: Vec<char>,
    pub(crate) flags: SpecialFlags,
    pub(crate) compound_word_max: Option<i32>,
    pub(crate) compound_min: Option<i32>,
    pub(crate) compound_syllable: Option<CompoundSyllable>,
    pub(crate) max_ngram_suggestions: Option<i32>,
    pub(crate) max_differency: Option<i32>,
    pub(crate) max_compound_suggestions: Option<i32>,
    pub(crate) replacements: Table<Vec<ReplacementEntry>>,
    pub(crate) input_conversions: Table<ConversionTable>,
    pub(crate) output_conversions: Table<ConversionTable>,
    pub(crate) phone: Table<Vec<PhoneticEntry>>,
    pub(crate) compound_patterns: Table<Vec<CompoundPattern>>,
    pub(crate) compound_rules: Table<Vec<CompoundRule>>,
    pub(crate) map: Table<Vec<MapEntry>>,
    pub(crate) break_points: Table<Vec<String>>,
    pub(crate) alias_f: Table<Vec<FlagSet>>,
    pub(crate) alias_m: Table<Vec<Vec<String>>>,
    pub(crate) prefixes: Vec<PrefixGroup>,
    pub(crate) suffixes: Vec<SuffixGroup>,
    pub(crate) has_continuation_classes: bool,
}

impl Default for AffixConfigBuilder {
    fn default() -> Self {
        Self::new(WINDOWS_1252)
    }
}

impl AffixConfigBuilder {
    /// Empty configuration assuming `encoding` until SET says otherwise.
    pub fn new(encoding: &'static Encoding) -> Self {
        Self {
            options: AffixConfigOptions::empty(),
            flag_mode: FlagMode::default(),
            encoding,
            language: None,
            key: None,
            try_string: None,
            version: None,
            syllable_num: None,
            word_chars: Vec::new(),
            ignored_chars: Vec::new(),
            flags: SpecialFlags::default(),
            compound_word_max: None,
            compound_min: None,
            compound_syllable: None,
            max_ngram_suggestions: None,
            max_differency: None,
            max_compound_suggestions: None,
            replacements: Table::default(),
            input_conversions: Table::default(),
            output_conversions: Table::default(),
            phone: Table::default(),
            compound_patterns: Table::default(),
            compound_rules: Table::default(),
            map: Table::default(),
            break_points: Table::default(),
            alias_f: Table::default(),
            alias_m: Table::default(),
            prefixes: Vec::new(),
            suffixes: Vec::new(),
            has_continuation_classes: false,
        }
    }

    pub fn options(&self) -> AffixConfigOptions {
        self.options
    }

    pub fn flag_mode(&self) -> FlagMode {
        self.flag_mode
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    pub fn is_complex_prefixes(&self) -> bool {
        self.options.contains(AffixConfigOptions::COMPLEX_PREFIXES)
    }

    /// Freeze the configuration.
    pub fn build(self) -> AffixConfig {
        AffixConfig {
            options: self.options,
            flag_mode: self.flag_mode,
            encoding: self.encoding,
            language: self.language,
            key: self.key,
            try_string: self.try_string,
            version: self.version,
            syllable_num: self.syllable_num,
            word_chars: self.word_chars,
            ignored_chars: self.ignored_chars,
            flags: self.flags,
            compound_word_max: self.compound_word_max,
            compound_min: self.compound_min,
            compound_syllable: self.compound_syllable,
            max_ngram_suggestions: self.max_ngram_suggestions,
            max_differency: self.max_differency,
            max_compound_suggestions: self.max_compound_suggestions,
            replacements: self.replacements.into_items(),
            input_conversions: self.input_conversions.into_items(),
            output_conversions: self.output_conversions.into_items(),
            phone: self.phone.into_items(),
            compound_patterns: self.compound_patterns.into_items(),
            compound_rules: self.compound_rules.into_items(),
            map: self.map.into_items(),
            break_points: self.break_points.into_items(),
            alias_f: self.alias_f.into_items(),
            alias_m: self.alias_m.into_items(),
            prefixes: self.prefixes,
            suffixes: self.suffixes,
            has_continuation_classes: self.has_continuation_classes,
        }
    }
}

#[cfg(feature = "serde")]
fn serialize_encoding<S: serde::Serializer>(
    encoding: &&'static Encoding,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(encoding.name())
}

/// A compiled affix file.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AffixConfig {
    options: AffixConfigOptions,
    flag_mode: FlagMode,
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_encoding"))]
    encoding: &'static Encoding,
    language: Option<String>,
    key: Option<String>,
    try_string: Option<String>,
    version: Option<String>,
    syllable_num: Option<String>,
    word_chars: Vec<char>,
    ignored_chars: Vec<char>,
    flags: SpecialFlags,
    compound_word_max: Option<i32>,
    compound_min: Option<i32>,
    compound_syllable: Option<CompoundSyllable>,
    max_ngram_suggestions: Option<i32>,
    max_differency: Option<i32>,
    max_compound_suggestions: Option<i32>,
    replacements: Vec<ReplacementEntry>,
    input_conversions: ConversionTable,
    output_conversions: ConversionTable,
    phone: Vec<PhoneticEntry>,
    compound_patterns: Vec<CompoundPattern>,
    compound_rules: Vec<CompoundRule>,
    map: Vec<MapEntry>,
    break_points: Vec<String>,
    alias_f: Vec<FlagSet>,
    alias_m: Vec<Vec<String>>,
    prefixes: Vec<PrefixGroup>,
    suffixes: Vec<SuffixGroup>,
    has_continuation_classes: bool,
}

impl AffixConfig {
    pub fn options(&self) -> AffixConfigOptions {
        self.options
    }

    pub fn has_option(&self, option: AffixConfigOptions) -> bool {
        self.options.contains(option)
    }

    pub fn flag_mode(&self) -> FlagMode {
        self.flag_mode
    }

    /// Encoding declared by SET, or the reader's default.
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// LANG as written (trimmed).
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// LANG with `_` separators turned into `-` (`en_US` -> `en-US`).
    pub fn language_tag(&self) -> Option<String> {
        self.language.as_ref().map(|lang| lang.replace('_', "-"))
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn try_string(&self) -> Option<&str> {
        self.try_string.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn syllable_num(&self) -> Option<&str> {
        self.syllable_num.as_deref()
    }

    pub fn word_chars(&self) -> &[char] {
        &self.word_chars
    }

    pub fn ignored_chars(&self) -> &[char] {
        &self.ignored_chars
    }

    pub fn flags(&self) -> &SpecialFlags {
        &self.flags
    }

    pub fn compound_word_max(&self) -> Option<i32> {
        self.compound_word_max
    }

    /// Minimum length of a compound part; never below 1 when set.
    pub fn compound_min(&self) -> Option<i32> {
        self.compound_min
    }

    pub fn compound_syllable(&self) -> Option<&CompoundSyllable> {
        self.compound_syllable.as_ref()
    }

    pub fn max_ngram_suggestions(&self) -> Option<i32> {
        self.max_ngram_suggestions
    }

    pub fn max_differency(&self) -> Option<i32> {
        self.max_differency
    }

    pub fn max_compound_suggestions(&self) -> Option<i32> {
        self.max_compound_suggestions
    }

    pub fn replacements(&self) -> &[ReplacementEntry] {
        &self.replacements
    }

    pub fn input_conversions(&self) -> &ConversionTable {
        &self.input_conversions
    }

    pub fn output_conversions(&self) -> &ConversionTable {
        &self.output_conversions
    }

    pub fn phone(&self) -> &[PhoneticEntry] {
        &self.phone
    }

    pub fn compound_patterns(&self) -> &[CompoundPattern] {
        &self.compound_patterns
    }

    pub fn compound_rules(&self) -> &[CompoundRule] {
        &self.compound_rules
    }

    pub fn map(&self) -> &[MapEntry] {
        &self.map
    }

    pub fn break_points(&self) -> &[String] {
        &self.break_points
    }

    pub fn alias_f(&self) -> &[FlagSet] {
        &self.alias_f
    }

    pub fn alias_m(&self) -> &[Vec<String>] {
        &self.alias_m
    }

    pub fn prefixes(&self) -> &[PrefixGroup] {
        &self.prefixes
    }

    pub fn suffixes(&self) -> &[SuffixGroup] {
        &self.suffixes
    }

    pub fn prefix_group(&self, flag: FlagValue) -> Option<&PrefixGroup> {
        self.prefixes.iter().find(|group| group.flag == flag)
    }

    pub fn suffix_group(&self, flag: FlagValue) -> Option<&SuffixGroup> {
        self.suffixes.iter().find(|group| group.flag == flag)
    }

    /// Whether any affix entry carries continuation flags.
    pub fn has_continuation_classes(&self) -> bool {
        self.has_continuation_classes
    }
}
