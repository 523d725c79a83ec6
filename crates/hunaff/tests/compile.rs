//! End-to-end tests: affix text in, frozen configuration out.
//!
//! Run: cargo test -p hunaff --test compile

use std::path::PathBuf;

use hunaff::tables::ReplacementPosition;
use hunaff::{
    AffixConfigOptions, AffixEdge, AffixReader, CharacterConditionGroup, DiagnosticKind, FlagMode,
    FlagSet, FlagValue, ReaderOptions,
};
use hunaff_core::condition::reverse_condition;

fn flag(c: char) -> FlagValue {
    FlagValue::from_char(c)
}

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/sample.aff")
}

// ---------------------------------------------------------------------------
// Conditions
// ---------------------------------------------------------------------------

#[test]
fn condition_reversal_is_an_involution() {
    for condition in ["[^aeiou]y", "[ab]c", "abc", "[^x]", ".", "a[bc]d[^ef]", "[sxzh]", "x[a^]y"] {
        assert_eq!(reverse_condition(&reverse_condition(condition)), condition);
    }
}

#[test]
fn suffix_class_with_trailing_caret_is_not_negated() {
    let compilation = AffixReader::read_lines(["SFX S Y 1", "SFX S 0 s [a^]"]);
    let entry = &compilation.config.suffix_group(flag('S')).unwrap().entries[0];
    assert_eq!(entry.apply("b"), None);
    assert_eq!(entry.apply("a").as_deref(), Some("as"));
    assert_eq!(entry.apply("a^").as_deref(), Some("a^s"));
}

#[test]
fn literal_strip_subsumes_matching_condition() {
    let exact = CharacterConditionGroup::parse_for_edge("[f][o][o]", AffixEdge::Prefix).unwrap();
    assert!(exact.is_subsumed_by_literal("foo", AffixEdge::Prefix));

    let negated = CharacterConditionGroup::parse_for_edge("[^f]oo", AffixEdge::Prefix).unwrap();
    assert!(!negated.is_subsumed_by_literal("foo", AffixEdge::Prefix));
}

// ---------------------------------------------------------------------------
// Flags
// ---------------------------------------------------------------------------

#[test]
fn long_flags_are_distinct_from_their_characters() {
    let long = FlagValue::parse_flag("ab", FlagMode::Long).unwrap();
    assert_eq!(long, FlagValue::parse_flag("ab", FlagMode::Long).unwrap());
    assert_ne!(long, flag('a'));
    assert_ne!(long, flag('b'));

    let compilation = AffixReader::read_lines(["FLAG long", "PFX ab Y 1", "PFX ab 0 re ."]);
    assert!(compilation.diagnostics.is_empty());
    assert!(compilation.config.prefix_group(long).is_some());
    assert!(compilation.config.prefix_group(flag('a')).is_none());
}

#[test]
fn numeric_flags() {
    let compilation = AffixReader::read_lines([
        "FLAG num",
        "SFX 101 Y 1",
        "SFX 101 0 s/102,103 .",
    ]);
    let group = compilation.config.suffix_group(FlagValue::new(101)).unwrap();
    let expected: FlagSet = [FlagValue::new(102), FlagValue::new(103)].into_iter().collect();
    assert_eq!(group.entries[0].continuation_class, expected);
}

#[test]
fn utf8_flags_are_redecoded_from_the_declared_encoding() {
    // "ä" as UTF-8 bytes, read as windows-1252 text.
    let alias_line = "AF \u{00C3}\u{00A4}b";

    let uni = AffixReader::read_lines(["FLAG UTF-8", "AF 1", alias_line]);
    let expected: FlagSet = [flag('\u{00E4}'), flag('b')].into_iter().collect();
    assert_eq!(uni.config.alias_f(), [expected]);

    let char_mode = AffixReader::read_lines(["AF 1", alias_line]);
    assert_eq!(char_mode.config.alias_f()[0].len(), 3);
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

#[test]
fn replacement_count_line_is_a_hint() {
    let hinted = AffixReader::read_lines(["REP 3", "REP a b", "REP c d", "REP e f"]);
    assert_eq!(hinted.config.replacements().len(), 3);

    let direct = AffixReader::read_lines(["REP foo bar"]);
    let replacements = direct.config.replacements();
    assert_eq!(replacements.len(), 1);
    assert_eq!(replacements[0].pattern, "foo");
    assert_eq!(replacements[0].replacement, "bar");
}

#[test]
fn oversized_counts_are_read_as_hints() {
    let replacements = AffixReader::read_lines(["REP 2147483647", "REP a b"]);
    assert!(replacements.diagnostics.is_empty());
    assert_eq!(replacements.config.replacements().len(), 1);

    let prefixes = AffixReader::read_lines(["PFX A Y 99999999999999", "PFX A 0 re ."]);
    assert!(prefixes.diagnostics.is_empty());
    let group = prefixes.config.prefix_group(flag('A')).unwrap();
    assert_eq!(group.entries[0].apply("do").as_deref(), Some("redo"));
}

#[test]
fn default_break_table_only_when_break_is_absent() {
    let absent = AffixReader::read_lines(["TRY abc"]);
    assert_eq!(absent.config.break_points(), ["-", "^-", "-$"]);

    let present = AffixReader::read_lines(["BREAK 2", "BREAK -", "BREAK –"]);
    assert_eq!(present.config.break_points(), ["-", "–"]);
}

// ---------------------------------------------------------------------------
// Affixes
// ---------------------------------------------------------------------------

#[test]
fn single_prefix_group() {
    let compilation = AffixReader::read_lines(["PFX A Y 1", "PFX A 0 re ."]);
    let config = &compilation.config;
    assert!(compilation.diagnostics.is_empty());
    assert_eq!(config.prefixes().len(), 1);
    assert!(config.suffixes().is_empty());

    let group = config.prefix_group(flag('A')).unwrap();
    assert!(group.allows_cross_product());
    assert_eq!(group.entries.len(), 1);

    let entry = &group.entries[0];
    assert_eq!(entry.strip, "");
    assert_eq!(entry.affix, "re");
    assert!(entry.condition.allows_any_single_character());
    assert_eq!(entry.apply("do").as_deref(), Some("redo"));
    assert_eq!(entry.strip_affix("redo").as_deref(), Some("do"));
}

#[test]
fn complex_prefixes_redirect_affixes_and_compound_edges() {
    let compilation = AffixReader::read_lines([
        "COMPLEXPREFIXES",
        "COMPOUNDBEGIN X",
        "COMPOUNDEND Y",
        "PFX A Y 1",
        "PFX A 0 re .",
    ]);
    let config = &compilation.config;
    assert!(config.has_option(AffixConfigOptions::COMPLEX_PREFIXES));
    assert_eq!(config.flags().compound_end, Some(flag('X')));
    assert_eq!(config.flags().compound_begin, Some(flag('Y')));

    assert!(config.prefixes().is_empty());
    let group = config.suffix_group(flag('A')).unwrap();
    assert_eq!(group.entries[0].affix, "er");
}

#[test]
fn suffix_conditions_match_the_end_of_the_word() {
    let compilation = AffixReader::read_lines([
        "SFX S Y 2",
        "SFX S y ies [^aeiou]y",
        "SFX S 0 s [aeiou]y",
    ]);
    let group = compilation.config.suffix_group(flag('S')).unwrap();
    let derived: Vec<_> = ["fly", "day", "cat"]
        .iter()
        .map(|root| group.entries.iter().find_map(|entry| entry.apply(root)))
        .collect();
    assert_eq!(
        derived,
        [Some("flies".to_string()), Some("days".to_string()), None]
    );
}

#[test]
fn rejected_lines_do_not_stop_the_read() {
    let compilation = AffixReader::read_lines([
        "PFX A Y 1",
        "PFX A 0 re [ab",
        "COMPOUNDMIN nope",
        "PFX A 0 un .",
    ]);
    assert_eq!(compilation.diagnostics.len(), 2);
    assert!(compilation.diagnostics.iter().all(|d| d.kind == DiagnosticKind::Rejected));
    assert_eq!(compilation.diagnostics[0].line, 2);
    assert_eq!(compilation.diagnostics[1].directive, "COMPOUNDMIN");
    assert_eq!(compilation.config.prefix_group(flag('A')).unwrap().entries.len(), 1);
}

// ---------------------------------------------------------------------------
// Input sources
// ---------------------------------------------------------------------------

#[test]
fn read_bytes_switches_encoding_after_set() {
    let bytes = b"TRY \xE4\nSET UTF-8\nKEY \xC3\xA4\n";
    let compilation = AffixReader::read_bytes(bytes, &ReaderOptions::default());
    assert_eq!(compilation.config.try_string(), Some("\u{00E4}"));
    assert_eq!(compilation.config.key(), Some("\u{00E4}"));
    assert_eq!(compilation.config.encoding(), encoding_rs::UTF_8);
}

#[test]
fn read_bytes_utf8_flags_without_set() {
    let bytes = b"FLAG UTF-8\nKEEPCASE \xC3\xA4\n";
    let compilation = AffixReader::read_bytes(bytes, &ReaderOptions::default());
    assert!(compilation.diagnostics.is_empty());
    assert_eq!(compilation.config.flags().keep_case, Some(flag('\u{00E4}')));
}

#[test]
fn read_from_buffered_reader() {
    let text = "SET UTF-8\nFLAG UTF-8\nNOSUGGEST \u{00E4}\n";
    let compilation = AffixReader::read_from(text.as_bytes()).unwrap();
    assert_eq!(compilation.config.flags().no_suggest, Some(flag('\u{00E4}')));
}

#[test]
fn read_sample_file() {
    let compilation = AffixReader::read_file(sample_path(), &ReaderOptions::default()).unwrap();
    let config = &compilation.config;
    assert!(compilation.diagnostics.is_empty(), "{:?}", compilation.diagnostics);

    assert_eq!(config.encoding(), encoding_rs::UTF_8);
    assert_eq!(config.flags().keep_case, Some(flag('K')));
    assert_eq!(config.flags().only_in_compound, Some(flag('c')));
    assert_eq!(config.compound_min(), Some(3));
    assert_eq!(config.compound_rules().len(), 2);
    assert_eq!(config.map()[1], ["ss", "ß"]);
    assert_eq!(config.break_points(), ["-", "^-", "-$"]);

    let replacements = config.replacements();
    assert_eq!(replacements.len(), 3);
    assert_eq!(replacements[2].pattern, "alot");
    assert_eq!(replacements[2].replacement, "a lot");
    assert_eq!(replacements[2].position, ReplacementPosition::Isolated);

    let iconv = config.input_conversions().get("\u{2019}").unwrap();
    assert_eq!(iconv.get(ReplacementPosition::Medial), Some("'"));

    assert_eq!(config.prefixes().len(), 2);
    assert_eq!(config.suffixes().len(), 3);

    let past = config.suffix_group(flag('D')).unwrap();
    let forms: Vec<_> = ["bake", "cry", "walk", "play"]
        .iter()
        .filter_map(|root| past.entries.iter().find_map(|entry| entry.apply(root)))
        .collect();
    assert_eq!(forms, ["baked", "cried", "walked", "played"]);

    let gerund = config.suffix_group(flag('G')).unwrap();
    assert_eq!(gerund.entries[0].apply("bake").as_deref(), Some("baking"));
    assert_eq!(gerund.entries[0].strip_affix("baking").as_deref(), Some("bake"));
}

#[test]
fn missing_file_is_an_io_error() {
    let path = sample_path().with_extension("missing");
    let result = AffixReader::read_file(path, &ReaderOptions::default());
    assert!(matches!(result, Err(hunaff::ReadError::Io(_))));
}
