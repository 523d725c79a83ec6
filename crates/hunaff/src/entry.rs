// PFX/SFX entry groups and the parser for their lines.
//
// A group starts with a header line (`PFX A Y 2`) and collects body lines
// (`PFX A 0 re .`) that share its flag. Suffix conditions are kept reversed
// so that both edges are matched by the same forward walk.

use std::marker::PhantomData;

use hunaff_core::condition::reverse_condition;
use hunaff_core::{AffixEdge, CharacterConditionGroup, FlagSet, FlagValue, Redundancy};

use crate::AffixError;
use crate::encoding::FlagDecoder;
use crate::options::AffixEntryOptions;
use crate::tables::{MAX_PRESIZE, split_fields, split_morphology};

/// Marker for the edge an entry attaches to.
pub trait AffixKind {
    const EDGE: AffixEdge;
}

/// Prefix marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Prefix {}

/// Suffix marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Suffix {}

impl AffixKind for Prefix {
    const EDGE: AffixEdge = AffixEdge::Prefix;
}

impl AffixKind for Suffix {
    const EDGE: AffixEdge = AffixEdge::Suffix;
}

/// One rule of a PFX or SFX group.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AffixEntry<K: AffixKind> {
    /// Text removed from the root (empty for `0`).
    pub strip: String,
    /// Text attached in its place (empty for `0`).
    pub affix: String,
    /// Condition on the root, in stored form for `K::EDGE`.
    pub condition: CharacterConditionGroup,
    /// Flags granted to the derived word.
    pub continuation_class: FlagSet,
    /// Morphological description tags.
    pub morphology: Vec<String>,
    #[cfg_attr(feature = "serde", serde(skip))]
    kind: PhantomData<K>,
}

pub type PrefixEntry = AffixEntry<Prefix>;
pub type SuffixEntry = AffixEntry<Suffix>;

impl<K: AffixKind> AffixEntry<K> {
    pub fn new(
        strip: String,
        affix: String,
        condition: CharacterConditionGroup,
        continuation_class: FlagSet,
        morphology: Vec<String>,
    ) -> Self {
        Self {
            strip,
            affix,
            condition,
            continuation_class,
            morphology,
            kind: PhantomData,
        }
    }

    pub fn edge(&self) -> AffixEdge {
        K::EDGE
    }

    pub fn has_continuation(&self, flag: FlagValue) -> bool {
        self.continuation_class.contains(flag)
    }

    /// Whether `root` satisfies the entry condition.
    pub fn test_condition(&self, root: &str) -> bool {
        self.condition.matches(root, K::EDGE)
    }

    /// Derive a word from `root`: check the condition, remove `strip`, attach
    /// `affix`.
    ///
    /// Returns `None` when the root does not carry the strip text, fails the
    /// condition, or would be stripped down to nothing.
    pub fn apply(&self, root: &str) -> Option<String> {
        if root.len() <= self.strip.len() || !self.test_condition(root) {
            return None;
        }

        match K::EDGE {
            AffixEdge::Prefix => {
                let stem = root.strip_prefix(self.strip.as_str())?;
                Some(format!("{}{}", self.affix, stem))
            }
            AffixEdge::Suffix => {
                let stem = root.strip_suffix(self.strip.as_str())?;
                Some(format!("{}{}", stem, self.affix))
            }
        }
    }

    /// Undo [`apply`](Self::apply): recover the root a derived word came from.
    pub fn strip_affix(&self, derived: &str) -> Option<String> {
        let root = match K::EDGE {
            AffixEdge::Prefix => {
                let stem = derived.strip_prefix(self.affix.as_str())?;
                if stem.is_empty() {
                    return None;
                }
                format!("{}{}", self.strip, stem)
            }
            AffixEdge::Suffix => {
                let stem = derived.strip_suffix(self.affix.as_str())?;
                if stem.is_empty() {
                    return None;
                }
                format!("{}{}", stem, self.strip)
            }
        };

        self.test_condition(&root).then_some(root)
    }
}

/// All entries sharing one affix flag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AffixEntryGroup<K: AffixKind> {
    pub flag: FlagValue,
    pub options: AffixEntryOptions,
    pub entries: Vec<AffixEntry<K>>,
}

pub type PrefixGroup = AffixEntryGroup<Prefix>;
pub type SuffixGroup = AffixEntryGroup<Suffix>;

impl<K: AffixKind> AffixEntryGroup<K> {
    pub fn allows_cross_product(&self) -> bool {
        self.options.contains(AffixEntryOptions::CROSS_PRODUCT)
    }
}

// ---------------------------------------------------------------------------
// Line parsing
// ---------------------------------------------------------------------------

/// A PFX/SFX parameter line, classified by its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AffixLine<'a> {
    /// `flag cross_product count`
    Header {
        flag: &'a str,
        cross_product: &'a str,
        count: &'a str,
    },
    /// `flag strip affix[/flags] condition [morphology...]`
    Body {
        flag: &'a str,
        strip: &'a str,
        affix: &'a str,
        condition: &'a str,
        morphology: Vec<&'a str>,
    },
}

impl<'a> AffixLine<'a> {
    /// Split a parameter line into fields; a field starting with `#` ends the
    /// line.
    pub fn tokenize(params: &'a str) -> Option<Self> {
        let fields: Vec<&str> = split_fields(params)
            .take_while(|field| !field.starts_with('#'))
            .collect();

        match *fields.as_slice() {
            [flag, cross_product, count] => Some(Self::Header {
                flag,
                cross_product,
                count,
            }),
            [flag, strip, affix, condition, ref morphology @ ..] => Some(Self::Body {
                flag,
                strip,
                affix,
                condition,
                morphology: morphology.to_vec(),
            }),
            _ => None,
        }
    }
}

/// State of the reader that affix lines depend on.
pub(crate) struct EntryContext<'a> {
    pub decoder: FlagDecoder,
    /// Mirror strip, affix, condition and morphology (complex prefixes).
    pub mirrored: bool,
    pub ignored_chars: &'a [char],
    pub alias_f: &'a [FlagSet],
    pub alias_m: &'a [Vec<String>],
}

/// What a successfully parsed affix line left behind.
#[derive(Debug, Default)]
pub(crate) struct AffixLineEffect {
    pub has_continuation: bool,
    /// A problem worth reporting that did not reject the line.
    pub warning: Option<AffixError>,
}

fn mirror(text: &str) -> String {
    text.chars().rev().collect()
}

fn alias_index(text: &str, table: &'static str, len: usize) -> Result<usize, AffixError> {
    match text.trim().parse::<usize>() {
        Ok(index) if (1..=len).contains(&index) => Ok(index - 1),
        _ => Err(AffixError::AliasOutOfRange {
            table,
            index: text.to_string(),
            len,
        }),
    }
}

/// Parse one PFX/SFX parameter line into `groups`.
pub(crate) fn parse_affix_line<K: AffixKind>(
    params: &str,
    groups: &mut Vec<AffixEntryGroup<K>>,
    ctx: &EntryContext<'_>,
) -> Result<AffixLineEffect, AffixError> {
    let line =
        AffixLine::tokenize(params).ok_or_else(|| AffixError::MalformedAffixLine(params.to_string()))?;

    match line {
        AffixLine::Header {
            flag,
            cross_product,
            count,
        } => {
            let flag = ctx.decoder.parse_flag(flag)?;
            if groups.iter().any(|group| group.flag == flag) {
                return Err(AffixError::DuplicateHeader(flag));
            }

            let mut options = AffixEntryOptions::empty();
            if cross_product.starts_with('Y') {
                options |= AffixEntryOptions::CROSS_PRODUCT;
            }
            if !ctx.alias_m.is_empty() {
                options |= AffixEntryOptions::ALIAS_M;
            }
            if !ctx.alias_f.is_empty() {
                options |= AffixEntryOptions::ALIAS_F;
            }

            let count = count.parse::<usize>().unwrap_or(0);
            groups.push(AffixEntryGroup {
                flag,
                options,
                entries: Vec::with_capacity(count.min(MAX_PRESIZE)),
            });
            Ok(AffixLineEffect::default())
        }
        AffixLine::Body {
            flag,
            strip,
            affix,
            condition,
            morphology,
        } => {
            let flag = ctx.decoder.parse_flag(flag)?;
            let (entry, warning) = parse_body::<K>(strip, affix, condition, &morphology, ctx)?;
            let has_continuation = !entry.continuation_class.is_empty();

            match groups.iter_mut().rev().find(|group| group.flag == flag) {
                Some(group) => group.entries.push(entry),
                None => groups.push(AffixEntryGroup {
                    flag,
                    options: AffixEntryOptions::empty(),
                    entries: vec![entry],
                }),
            }

            Ok(AffixLineEffect {
                has_continuation,
                warning,
            })
        }
    }
}

fn parse_body<K: AffixKind>(
    strip: &str,
    affix: &str,
    condition: &str,
    morphology: &[&str],
    ctx: &EntryContext<'_>,
) -> Result<(AffixEntry<K>, Option<AffixError>), AffixError> {
    let strip = match (strip, ctx.mirrored) {
        ("0", _) => String::new(),
        (text, true) => mirror(text),
        (text, false) => text.to_string(),
    };

    let (affix_text, continuation) = match affix.split_once('/') {
        Some((text, flags)) => (text, Some(flags)),
        None => (affix, None),
    };

    let continuation_class = match continuation {
        Some(index) if !ctx.alias_f.is_empty() => {
            ctx.alias_f[alias_index(index, "AF", ctx.alias_f.len())?].clone()
        }
        Some(flags) => ctx.decoder.parse_flag_set(flags)?,
        None => FlagSet::new(),
    };

    let mut affix: String = affix_text
        .chars()
        .filter(|c| !ctx.ignored_chars.contains(c))
        .collect();
    if ctx.mirrored {
        affix = mirror(&affix);
    }
    if affix == "0" {
        affix.clear();
    }

    let condition_text = if ctx.mirrored {
        reverse_condition(condition)
    } else {
        condition.to_string()
    };
    let mut condition = CharacterConditionGroup::parse_for_edge(&condition_text, K::EDGE)?;

    let mut warning = None;
    if !strip.is_empty() && !condition.allows_any_single_character() {
        match condition.redundancy(&strip, K::EDGE) {
            Redundancy::Proven => condition = CharacterConditionGroup::allow_any_single_character(),
            Redundancy::Mismatch { .. } => {
                warning = Some(AffixError::UnsatisfiableCondition {
                    strip: strip.clone(),
                    condition: condition_text.clone(),
                });
            }
            Redundancy::Unproven => {}
        }
    }

    let morphology = match morphology {
        [] => Vec::new(),
        [index] if !ctx.alias_m.is_empty() => {
            ctx.alias_m[alias_index(index, "AM", ctx.alias_m.len())?].clone()
        }
        fields if !ctx.alias_m.is_empty() => {
            return Err(AffixError::AliasOutOfRange {
                table: "AM",
                index: fields.join(" "),
                len: ctx.alias_m.len(),
            });
        }
        fields => split_morphology(&fields.join(" "), ctx.mirrored),
    };

    Ok((
        AffixEntry::new(strip, affix, condition, continuation_class, morphology),
        warning,
    ))
}
