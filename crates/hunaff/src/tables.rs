// Flat tables of an affix file: REP, ICONV/OCONV, MAP, BREAK, PHONE,
// CHECKCOMPOUNDPATTERN, COMPOUNDRULE, AF and AM.
//
// Each table reads one entry per line. The first line of a table may instead
// carry a bare count, which only sizes the storage.

use hashbrown::HashMap;
use hunaff_core::{FlagMode, FlagSet, FlagValue};

use crate::AffixError;
use crate::encoding::FlagDecoder;

/// Split a parameter string on tabs and spaces.
pub(crate) fn split_fields(text: &str) -> impl Iterator<Item = &str> {
    text.split([' ', '\t']).filter(|field| !field.is_empty())
}

// ---------------------------------------------------------------------------
// Table state
// ---------------------------------------------------------------------------

/// How far a table has progressed through its lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum TableState {
    /// No line seen yet.
    #[default]
    Untouched,
    /// The first line was a count.
    SizeHinted(usize),
    /// At least one line went through the entry grammar.
    Populated,
}

/// Largest number of slots a count line may pre-allocate. Counts are taken
/// from the file unchecked, so anything beyond this grows on demand.
pub(crate) const MAX_PRESIZE: usize = 1024;

/// Storage that can take a size hint.
pub(crate) trait TableStorage: Default {
    fn reserve_hint(&mut self, count: usize);
}

impl<T> TableStorage for Vec<T> {
    fn reserve_hint(&mut self, count: usize) {
        self.reserve(count.min(MAX_PRESIZE));
    }
}

impl TableStorage for ConversionTable {
    fn reserve_hint(&mut self, count: usize) {
        self.entries.reserve(count.min(MAX_PRESIZE));
    }
}

/// Whether a table line was a count or an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TableLine {
    SizeHint,
    Entry,
}

/// A table together with its line state.
#[derive(Debug, Default)]
pub(crate) struct Table<C> {
    state: TableState,
    items: C,
}

impl<C: TableStorage> Table<C> {
    pub fn is_untouched(&self) -> bool {
        self.state == TableState::Untouched
    }

    #[cfg(test)]
    pub fn state(&self) -> TableState {
        self.state
    }

    pub fn items(&self) -> &C {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut C {
        &mut self.items
    }

    pub fn into_items(self) -> C {
        self.items
    }

    /// Feed one line of parameters to the table.
    ///
    /// On the first line a non-negative integer is consumed as a size hint;
    /// anything else, and every later line, goes to `parse`.
    pub fn accept<F>(&mut self, params: &str, parse: F) -> Result<TableLine, AffixError>
    where
        F: FnOnce(&str, &mut C) -> Result<(), AffixError>,
    {
        if self.state == TableState::Untouched {
            if let Some(count) = parse_count(params) {
                self.items.reserve_hint(count);
                self.state = TableState::SizeHinted(count);
                return Ok(TableLine::SizeHint);
            }
        }

        self.state = TableState::Populated;
        parse(params, &mut self.items)?;
        Ok(TableLine::Entry)
    }
}

fn parse_count(text: &str) -> Option<usize> {
    text.trim()
        .parse::<i32>()
        .ok()
        .and_then(|count| usize::try_from(count).ok())
}

// ---------------------------------------------------------------------------
// REP, ICONV, OCONV
// ---------------------------------------------------------------------------

/// Where a replacement pattern is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ReplacementPosition {
    /// No anchor: anywhere in the word.
    Medial,
    /// `^pattern`: at the start of the word.
    Initial,
    /// `pattern$`: at the end of the word.
    Final,
    /// `^pattern$`: the whole word.
    Isolated,
}

impl ReplacementPosition {
    fn index(self) -> usize {
        match self {
            Self::Medial => 0,
            Self::Initial => 1,
            Self::Final => 2,
            Self::Isolated => 3,
        }
    }
}

/// Strip `^`/`$` anchors and turn `_` into spaces.
fn split_anchors(pattern: &str) -> (String, ReplacementPosition) {
    let (body, initial) = match pattern.strip_prefix('^') {
        Some(rest) => (rest, true),
        None => (pattern, false),
    };
    let (body, final_) = match body.strip_suffix('$') {
        Some(rest) => (rest, true),
        None => (body, false),
    };

    let position = match (initial, final_) {
        (true, true) => ReplacementPosition::Isolated,
        (true, false) => ReplacementPosition::Initial,
        (false, true) => ReplacementPosition::Final,
        (false, false) => ReplacementPosition::Medial,
    };
    (body.replace('_', " "), position)
}

/// A REP entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReplacementEntry {
    pub pattern: String,
    pub replacement: String,
    pub position: ReplacementPosition,
}

pub(crate) fn parse_replacement(
    params: &str,
    entries: &mut Vec<ReplacementEntry>,
) -> Result<(), AffixError> {
    let mut fields = split_fields(params);
    let pattern = fields.next().ok_or(AffixError::MissingField("replacement pattern"))?;
    let replacement = fields.next().unwrap_or_default();

    let (pattern, position) = split_anchors(pattern);
    entries.push(ReplacementEntry {
        pattern,
        replacement: replacement.replace('_', " "),
        position,
    });
    Ok(())
}

/// Outputs of one conversion pattern, one slot per anchor position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MultiReplacement {
    outputs: [Option<String>; 4],
}

impl MultiReplacement {
    pub fn get(&self, position: ReplacementPosition) -> Option<&str> {
        self.outputs[position.index()].as_deref()
    }
}

/// An ICONV or OCONV table, keyed by the unanchored input pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConversionTable {
    entries: HashMap<String, MultiReplacement>,
}

impl ConversionTable {
    pub fn get(&self, pattern: &str) -> Option<&MultiReplacement> {
        self.entries.get(pattern)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MultiReplacement)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Record `output` for `pattern`; a later line for the same pattern and
    /// anchor replaces the earlier one.
    fn insert(&mut self, pattern: &str, output: &str) {
        let (key, position) = split_anchors(pattern);
        let slot = self.entries.entry(key).or_default();
        slot.outputs[position.index()] = Some(output.replace('_', " "));
    }
}

pub(crate) fn parse_conversion(params: &str, table: &mut ConversionTable) -> Result<(), AffixError> {
    let mut fields = split_fields(params);
    let (Some(pattern), Some(output)) = (fields.next(), fields.next()) else {
        return Err(AffixError::MissingField("conversion output"));
    };
    table.insert(pattern, output);
    Ok(())
}

// ---------------------------------------------------------------------------
// MAP, BREAK, PHONE
// ---------------------------------------------------------------------------

/// A MAP entry: characters (or parenthesized strings) that are confused with
/// each other.
pub type MapEntry = Vec<String>;

pub(crate) fn parse_map(params: &str, entries: &mut Vec<MapEntry>) -> Result<(), AffixError> {
    let chars: Vec<char> = params.chars().collect();
    let mut units = Vec::new();
    let mut k = 0;
    while k < chars.len() {
        let close = (chars[k] == '(')
            .then(|| chars[k + 1..].iter().position(|&c| c == ')'))
            .flatten();
        match close {
            Some(offset) => {
                let end = k + 1 + offset;
                let unit: String = chars[k + 1..end].iter().collect();
                if !unit.is_empty() {
                    units.push(unit);
                }
                k = end + 1;
            }
            None => {
                units.push(chars[k].to_string());
                k += 1;
            }
        }
    }

    entries.push(units);
    Ok(())
}

pub(crate) fn parse_break(params: &str, entries: &mut Vec<String>) -> Result<(), AffixError> {
    entries.push(params.to_string());
    Ok(())
}

/// A PHONE entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PhoneticEntry {
    pub rule: String,
    pub replacement: String,
}

pub(crate) fn parse_phonetic(params: &str, entries: &mut Vec<PhoneticEntry>) -> Result<(), AffixError> {
    let mut fields = split_fields(params);
    let rule = fields.next().ok_or(AffixError::MissingField("phonetic rule"))?;
    let replacement = fields.next().map(|r| r.replace('_', "")).unwrap_or_default();
    entries.push(PhoneticEntry {
        rule: rule.to_string(),
        replacement,
    });
    Ok(())
}

// ---------------------------------------------------------------------------
// CHECKCOMPOUNDPATTERN
// ---------------------------------------------------------------------------

/// A CHECKCOMPOUNDPATTERN entry: forbids `pattern` at the end of one compound
/// part followed by `pattern2` at the start of the next.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CompoundPattern {
    pub pattern: String,
    pub pattern2: String,
    /// Replacement for the boundary (simplified compounds).
    pub pattern3: Option<String>,
    pub condition: Option<FlagValue>,
    pub condition2: Option<FlagValue>,
}

/// Split `text/flag` into the text and its decoded flag.
fn split_conditioned(
    text: &str,
    decoder: &FlagDecoder,
) -> Result<(String, Option<FlagValue>), AffixError> {
    match text.split_once('/') {
        Some((fragment, flag)) => Ok((fragment.to_string(), Some(decoder.parse_flag(flag)?))),
        None => Ok((text.to_string(), None)),
    }
}

pub(crate) fn parse_compound_pattern(
    params: &str,
    decoder: &FlagDecoder,
) -> Result<CompoundPattern, AffixError> {
    let mut fields = split_fields(params);
    let (Some(first), Some(second)) = (fields.next(), fields.next()) else {
        return Err(AffixError::MissingField("second compound pattern fragment"));
    };

    let (pattern, condition) = split_conditioned(first, decoder)?;
    let (pattern2, condition2) = split_conditioned(second, decoder)?;
    Ok(CompoundPattern {
        pattern,
        pattern2,
        pattern3: fields.next().map(str::to_string),
        condition,
        condition2,
    })
}

// ---------------------------------------------------------------------------
// COMPOUNDRULE
// ---------------------------------------------------------------------------

/// One token of a compound rule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CompoundRuleToken {
    /// A part carrying this flag.
    Flag(FlagValue),
    /// A parenthesized group that decoded to several flags: a part carrying
    /// any of them.
    AnyOf(FlagSet),
    /// `*`: the previous token, zero or more times.
    ZeroOrMore,
    /// `?`: the previous token, zero or one time.
    ZeroOrOne,
}

impl CompoundRuleToken {
    fn accepts(&self, part: &FlagSet) -> bool {
        match self {
            Self::Flag(flag) => part.contains(*flag),
            Self::AnyOf(flags) => flags.iter().any(|flag| part.contains(*flag)),
            Self::ZeroOrMore | Self::ZeroOrOne => false,
        }
    }

    fn wildcard(c: char) -> Option<Self> {
        match c {
            '*' => Some(Self::ZeroOrMore),
            '?' => Some(Self::ZeroOrOne),
            _ => None,
        }
    }
}

/// A COMPOUNDRULE: a pattern over the flags of consecutive compound parts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CompoundRule(Vec<CompoundRuleToken>);

impl CompoundRule {
    pub fn tokens(&self) -> &[CompoundRuleToken] {
        &self.0
    }

    pub(crate) fn parse(params: &str, decoder: &FlagDecoder) -> Result<Self, AffixError> {
        let text = decoder.canonical(params);
        let mode = decoder.effective_mode();
        let chars: Vec<char> = text.chars().collect();
        let mut tokens = Vec::new();

        if !chars.contains(&'(') && mode != FlagMode::Char {
            tokens.extend(
                FlagValue::parse_flags(&text, mode)?
                    .into_iter()
                    .map(CompoundRuleToken::Flag),
            );
            return Ok(Self(tokens));
        }

        let mut k = 0;
        while k < chars.len() {
            let close = (chars[k] == '(')
                .then(|| chars[k + 1..].iter().position(|&c| c == ')'))
                .flatten();
            let (unit, next): (String, usize) = match close {
                Some(offset) => (chars[k + 1..k + 1 + offset].iter().collect(), k + offset + 2),
                None => (chars[k].to_string(), k + 1),
            };
            k = next;

            let mut unit_chars = unit.chars();
            if let (Some(c), None) = (unit_chars.next(), unit_chars.next()) {
                if let Some(wildcard) = CompoundRuleToken::wildcard(c) {
                    tokens.push(wildcard);
                    continue;
                }
            }

            let flags = FlagValue::parse_flags(&unit, mode)?;
            match flags.len() {
                0 => return Err(AffixError::MissingField("flag in compound rule group")),
                1 => tokens.push(CompoundRuleToken::Flag(flags[0])),
                _ => tokens.push(CompoundRuleToken::AnyOf(flags.into_iter().collect())),
            }
        }

        Ok(Self(tokens))
    }

    /// Match the flags of consecutive compound parts against the whole rule.
    ///
    /// `*` and `?` quantify the token before them.
    pub fn matches(&self, parts: &[&FlagSet]) -> bool {
        match_tokens(&self.0, parts)
    }
}

fn match_tokens(tokens: &[CompoundRuleToken], parts: &[&FlagSet]) -> bool {
    let Some((token, rest)) = tokens.split_first() else {
        return parts.is_empty();
    };

    match rest.first() {
        Some(CompoundRuleToken::ZeroOrMore) => {
            let rest = &rest[1..];
            let mut remaining = parts;
            loop {
                if match_tokens(rest, remaining) {
                    return true;
                }
                match remaining.split_first() {
                    Some((part, tail)) if token.accepts(part) => remaining = tail,
                    _ => return false,
                }
            }
        }
        Some(CompoundRuleToken::ZeroOrOne) => {
            let rest = &rest[1..];
            match_tokens(rest, parts)
                || parts
                    .split_first()
                    .is_some_and(|(part, tail)| token.accepts(part) && match_tokens(rest, tail))
        }
        _ => parts
            .split_first()
            .is_some_and(|(part, tail)| token.accepts(part) && match_tokens(rest, tail)),
    }
}

// ---------------------------------------------------------------------------
// AF, AM
// ---------------------------------------------------------------------------

pub(crate) fn parse_alias_f(
    params: &str,
    decoder: &FlagDecoder,
    entries: &mut Vec<FlagSet>,
) -> Result<(), AffixError> {
    let flags = split_fields(params)
        .next()
        .ok_or(AffixError::MissingField("alias flags"))?;
    entries.push(decoder.parse_flag_set(flags)?);
    Ok(())
}

pub(crate) fn parse_alias_m(
    params: &str,
    mirrored: bool,
    entries: &mut Vec<Vec<String>>,
) -> Result<(), AffixError> {
    entries.push(split_morphology(params, mirrored));
    Ok(())
}

/// Split morphology text into tags, mirroring the whole text first when
/// prefixes are complex.
pub(crate) fn split_morphology(text: &str, mirrored: bool) -> Vec<String> {
    if mirrored {
        let reversed: String = text.chars().rev().collect();
        split_fields(&reversed).map(str::to_string).collect()
    } else {
        split_fields(text).map(str::to_string).collect()
    }
}
