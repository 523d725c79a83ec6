// Character conditions of affix entries.
//
// A condition is a tiny pattern over the characters next to the affix
// boundary: literal characters, `[...]` classes, `[^...]` negated classes and
// the `.` wildcard. Every atom consumes exactly one word character.
//
// Prefix conditions read the word from its first character onwards. Suffix
// conditions are stored reversed, so that atom 0 constrains the last
// character of the word and both edges share the same forward matcher.

use std::fmt;

use crate::SyntaxError;

/// Which end of a word an affix attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AffixEdge {
    Prefix,
    Suffix,
}

/// A single condition atom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CharacterCondition {
    /// `.`: any character.
    Any,
    /// A literal character.
    Literal(char),
    /// `[...]`: any of the listed characters. Sorted, never empty.
    Class(Box<[char]>),
    /// `[^...]`: none of the listed characters. Sorted, never empty.
    NegatedClass(Box<[char]>),
}

impl CharacterCondition {
    #[inline]
    pub fn is_match(&self, c: char) -> bool {
        match self {
            Self::Any => true,
            Self::Literal(expected) => *expected == c,
            Self::Class(members) => members.binary_search(&c).is_ok(),
            Self::NegatedClass(members) => members.binary_search(&c).is_err(),
        }
    }
}

/// Outcome of a redundancy proof, see [`CharacterConditionGroup::redundancy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redundancy {
    /// Every atom is satisfied by the literal; the condition can never reject.
    Proven,
    /// The literal ran out before the atoms did; the condition still constrains
    /// characters beyond it.
    Unproven,
    /// The atom at `position` rejects the literal character it faces, so no
    /// word carrying the literal can satisfy the condition.
    Mismatch { position: usize },
}

/// An ordered sequence of condition atoms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CharacterConditionGroup(Vec<CharacterCondition>);

impl CharacterConditionGroup {
    /// The `.` condition, which accepts any word.
    pub fn allow_any_single_character() -> Self {
        Self(vec![CharacterCondition::Any])
    }

    pub fn allows_any_single_character(&self) -> bool {
        matches!(self.0.as_slice(), [CharacterCondition::Any])
    }

    pub fn conditions(&self) -> &[CharacterCondition] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse condition text in the order it is written.
    pub fn parse(text: &str) -> Result<Self, SyntaxError> {
        let mut conditions = Vec::new();
        let mut chars = text.chars();

        while let Some(c) = chars.next() {
            let condition = match c {
                '[' => {
                    let mut negated = false;
                    let mut members = Vec::new();
                    let mut closed = false;
                    let mut first = true;
                    for member in chars.by_ref() {
                        match member {
                            ']' => {
                                closed = true;
                                break;
                            }
                            '^' if first => negated = true,
                            _ => members.push(member),
                        }
                        first = false;
                    }

                    if !closed {
                        return Err(SyntaxError::UnclosedClass(text.to_string()));
                    }
                    if members.is_empty() {
                        return Err(SyntaxError::EmptyClass(text.to_string()));
                    }

                    members.sort_unstable();
                    members.dedup();
                    if negated {
                        CharacterCondition::NegatedClass(members.into_boxed_slice())
                    } else {
                        CharacterCondition::Class(members.into_boxed_slice())
                    }
                }
                '.' => CharacterCondition::Any,
                _ => CharacterCondition::Literal(c),
            };
            conditions.push(condition);
        }

        Ok(Self(conditions))
    }

    /// Parse condition text written for `edge` into its stored form.
    ///
    /// Suffix text is mirrored with [`reverse_condition`] first, so the
    /// result is ready for [`matches`](Self::matches) with the same edge.
    pub fn parse_for_edge(text: &str, edge: AffixEdge) -> Result<Self, SyntaxError> {
        match edge {
            AffixEdge::Prefix => Self::parse(text),
            AffixEdge::Suffix => Self::parse(&reverse_condition(text)),
        }
    }

    /// Test a word against a condition in stored form.
    ///
    /// The sentinel `.` group accepts every word, including short ones.
    pub fn matches(&self, text: &str, edge: AffixEdge) -> bool {
        if self.allows_any_single_character() {
            return true;
        }

        match edge {
            AffixEdge::Prefix => self.matches_chars(text.chars()),
            AffixEdge::Suffix => self.matches_chars(text.chars().rev()),
        }
    }

    fn matches_chars(&self, mut chars: impl Iterator<Item = char>) -> bool {
        self.0
            .iter()
            .all(|condition| chars.next().is_some_and(|c| condition.is_match(c)))
    }

    /// Check whether every word carrying `literal` at `edge` satisfies this
    /// condition.
    ///
    /// The literal is walked from the matching edge in lock-step with the
    /// atoms (the group must be in stored form for that edge).
    pub fn redundancy(&self, literal: &str, edge: AffixEdge) -> Redundancy {
        match edge {
            AffixEdge::Prefix => self.redundancy_chars(literal.chars()),
            AffixEdge::Suffix => self.redundancy_chars(literal.chars().rev()),
        }
    }

    fn redundancy_chars(&self, mut chars: impl Iterator<Item = char>) -> Redundancy {
        for (position, condition) in self.0.iter().enumerate() {
            match chars.next() {
                None => return Redundancy::Unproven,
                Some(c) if condition.is_match(c) => {}
                Some(_) => return Redundancy::Mismatch { position },
            }
        }
        Redundancy::Proven
    }

    pub fn is_subsumed_by_literal(&self, literal: &str, edge: AffixEdge) -> bool {
        self.redundancy(literal, edge) == Redundancy::Proven
    }
}

impl fmt::Display for CharacterConditionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for condition in &self.0 {
            match condition {
                CharacterCondition::Any => f.write_str(".")?,
                CharacterCondition::Literal(c) => write!(f, "{c}")?,
                CharacterCondition::Class(members) => {
                    f.write_str("[")?;
                    members.iter().try_for_each(|c| write!(f, "{c}"))?;
                    f.write_str("]")?;
                }
                CharacterCondition::NegatedClass(members) => {
                    f.write_str("[^")?;
                    members.iter().try_for_each(|c| write!(f, "{c}"))?;
                    f.write_str("]")?;
                }
            }
        }
        Ok(())
    }
}

/// Rewrite condition text written for one edge into the text for the
/// opposite edge.
///
/// The characters are reversed, then a scan from the tail repairs the
/// brackets: each reversed `]...[` becomes `[...]` again and a negation `^`
/// that ended up before the closing bracket is moved back behind the opening
/// one, shifting the class members by one slot. In a plain class a `^`
/// member that reversal brought to the front is rotated to the back, where
/// it cannot be mistaken for a negation.
pub fn reverse_condition(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().rev().collect();
    let Some(last) = chars.len().checked_sub(1) else {
        return String::new();
    };

    let mut negated = false;
    let mut class_end = None;
    for k in (0..=last).rev() {
        match chars[k] {
            '[' => {
                if negated {
                    if k < last {
                        chars[k + 1] = '[';
                    }
                } else {
                    chars[k] = ']';
                    class_end = Some(k);
                }
            }
            ']' => {
                chars[k] = '[';
                let end = class_end.take();
                if negated {
                    if k < last {
                        chars[k + 1] = '^';
                    }
                } else if let Some(end) = end.filter(|&end| end > k) {
                    let members = &mut chars[k + 1..end];
                    let carets = members.iter().take_while(|&&c| c == '^').count();
                    if carets < members.len() {
                        members.rotate_left(carets);
                    }
                }
                negated = false;
            }
            '^' if k < last && chars[k + 1] == ']' => negated = true,
            c => {
                if negated && k < last {
                    chars[k + 1] = c;
                }
            }
        }
    }

    chars.into_iter().collect()
}
