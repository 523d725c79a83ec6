// Directive dispatcher.
//
// Reads an affix file one line at a time and applies each directive to an
// AffixConfigBuilder. A line that cannot be applied is recorded as a
// diagnostic and otherwise ignored; reading never stops early.

use std::io::BufRead;
use std::path::Path;

use encoding_rs::Encoding;
use hunaff_core::{FlagMode, FlagValue};

use crate::config::{
    AffixConfig, AffixConfigBuilder, CompoundSyllable, DEFAULT_COMPOUND_VOWELS, SpecialFlags,
};
use crate::directive::Directive;
use crate::encoding::{FlagDecoder, encoding_for_name};
use crate::entry::{EntryContext, parse_affix_line};
use crate::options::{AffixConfigOptions, ReaderOptions};
use crate::source::{ByteLines, LineSource, ReaderLines};
use crate::tables::{
    CompoundRule, TableLine, parse_alias_f, parse_alias_m, parse_break, parse_compound_pattern,
    parse_conversion, parse_map, parse_phonetic, parse_replacement, split_fields,
};
use crate::{AffixError, Diagnostic, DiagnosticKind, ReadError};

/// What happened to one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank or comment.
    Skipped,
    /// The directive took effect (possibly with a warning diagnostic).
    Applied,
    /// Not a directive this reader knows.
    Unrecognized,
    /// A known directive whose parameters could not be used.
    Rejected,
}

/// Result of reading a whole affix file.
#[derive(Debug, Clone)]
pub struct Compilation {
    pub config: AffixConfig,
    /// Problems found along the way, in line order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Incremental affix file reader.
#[derive(Debug)]
pub struct AffixReader {
    builder: AffixConfigBuilder,
    options: ReaderOptions,
    diagnostics: Vec<Diagnostic>,
    line_number: usize,
    flags_decoded: bool,
}

impl Default for AffixReader {
    fn default() -> Self {
        Self::new(ReaderOptions::default())
    }
}

impl AffixReader {
    pub fn new(options: ReaderOptions) -> Self {
        Self {
            builder: AffixConfigBuilder::new(options.default_encoding),
            options,
            diagnostics: Vec::new(),
            line_number: 0,
            flags_decoded: false,
        }
    }

    /// Read already-decoded lines with default options.
    pub fn read_lines<I, S>(lines: I) -> Compilation
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut reader = Self::default();
        reader.extend(lines);
        reader.finish()
    }

    /// Read UTF-8 lines from `input` with default options.
    pub fn read_from<R: BufRead>(input: R) -> Result<Compilation, ReadError> {
        Self::default().read_source(ReaderLines::new(input))
    }

    /// Read raw bytes, decoding each line with the encoding in effect: the
    /// default until a SET line, the declared one after it.
    pub fn read_bytes(bytes: &[u8], options: &ReaderOptions) -> Compilation {
        let mut reader = Self::new(options.clone());
        let mut lines = ByteLines::new(bytes);
        while let Some(line) = lines.next_decoded(reader.encoding()) {
            reader.parse_line(&line);
        }
        reader.finish()
    }

    pub fn read_file(path: impl AsRef<Path>, options: &ReaderOptions) -> Result<Compilation, ReadError> {
        let bytes = std::fs::read(path)?;
        Ok(Self::read_bytes(&bytes, options))
    }

    /// Drain `source` into this reader and freeze the result.
    pub fn read_source<S: LineSource>(mut self, mut source: S) -> Result<Compilation, ReadError> {
        while let Some(line) = source.next_line(self.encoding()) {
            self.parse_line(&line?);
        }
        Ok(self.finish())
    }

    /// Read lines that are already text into this reader.
    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.parse_line(line.as_ref());
        }
    }

    /// Encoding the next line should be decoded with.
    pub fn encoding(&self) -> &'static Encoding {
        self.builder.encoding()
    }

    pub fn builder(&self) -> &AffixConfigBuilder {
        &self.builder
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Install the default BREAK table if BREAK never appeared, and freeze.
    pub fn finish(mut self) -> Compilation {
        let break_points = &mut self.builder.break_points;
        if break_points.is_untouched() && break_points.items().is_empty() {
            break_points
                .items_mut()
                .extend(self.options.default_break_table.iter().cloned());
        }

        Compilation {
            config: self.builder.build(),
            diagnostics: self.diagnostics,
        }
    }

    /// Apply one line.
    pub fn parse_line(&mut self, line: &str) -> LineOutcome {
        self.line_number += 1;
        let line = if self.line_number == 1 {
            line.trim_start_matches('\u{FEFF}')
        } else {
            line
        };

        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return LineOutcome::Skipped;
        }

        let (name, params) = match line.split_once([' ', '\t']) {
            Some((name, params)) => (name, params.trim()),
            None => (line, ""),
        };
        if !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
            log::debug!("line {}: not a directive: {line:?}", self.line_number);
            return LineOutcome::Unrecognized;
        }

        if params.is_empty() {
            if let Some(option) = AffixConfigOptions::from_directive(name) {
                self.builder.options |= option;
                log::trace!("line {}: enabled {name}", self.line_number);
                return LineOutcome::Applied;
            }
        }

        let Some(directive) = Directive::from_name(name) else {
            log::debug!("line {}: unrecognized directive {name}", self.line_number);
            return LineOutcome::Unrecognized;
        };

        let result = if params.is_empty() {
            Err(AffixError::MissingField("directive parameters"))
        } else {
            self.apply(directive, params)
        };

        match result {
            Ok(warning) => {
                log::trace!("line {}: applied {name}", self.line_number);
                if let Some(error) = warning {
                    self.record(name, DiagnosticKind::Warning, error);
                }
                LineOutcome::Applied
            }
            Err(error) => {
                self.record(name, DiagnosticKind::Rejected, error);
                LineOutcome::Rejected
            }
        }
    }

    fn record(&mut self, directive: &str, kind: DiagnosticKind, error: AffixError) {
        let diagnostic = Diagnostic {
            line: self.line_number,
            directive: directive.to_string(),
            kind,
            error,
        };
        log::warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    fn decoder(&self) -> FlagDecoder {
        FlagDecoder {
            mode: self.builder.flag_mode,
            encoding: self.builder.encoding,
        }
    }

    /// Apply a parameterized directive. `Ok(Some(_))` carries a warning for a
    /// line that still took effect.
    fn apply(&mut self, directive: Directive, params: &str) -> Result<Option<AffixError>, AffixError> {
        let complex = self.builder.is_complex_prefixes();
        let mirrored = directive.is_mirrored(complex);
        let decoder = self.decoder();
        let builder = &mut self.builder;

        let mut warning = None;
        let mut line = TableLine::Entry;
        match directive.redirect(complex) {
            Directive::Flag => return self.set_flag_mode(params),
            Directive::Set => {
                let encoding = encoding_for_name(params)
                    .ok_or_else(|| AffixError::UnknownEncoding(params.to_string()))?;
                log::debug!("line {}: switching to {}", self.line_number, encoding.name());
                builder.encoding = encoding;
            }
            Directive::Key => builder.key = Some(params.to_string()),
            Directive::Try => builder.try_string = Some(params.to_string()),
            Directive::Version => builder.version = Some(params.to_string()),
            Directive::Lang => builder.language = Some(params.to_string()),
            Directive::SyllableNum => builder.syllable_num = Some(params.to_string()),
            Directive::WordChars => builder.word_chars = params.chars().collect(),
            Directive::Ignore => builder.ignored_chars = params.chars().collect(),
            Directive::CompoundWordMax => builder.compound_word_max = Some(parse_int(params)?),
            Directive::CompoundMin => builder.compound_min = Some(parse_int(params)?.max(1)),
            Directive::MaxNgramSuggestions => {
                builder.max_ngram_suggestions = Some(parse_int(params)?)
            }
            Directive::MaxDifferency => builder.max_differency = Some(parse_int(params)?),
            Directive::MaxCompoundSuggestions => {
                builder.max_compound_suggestions = Some(parse_int(params)?)
            }
            Directive::CompoundSyllable => {
                builder.compound_syllable = Some(parse_compound_syllable(params)?)
            }
            Directive::Prefix => {
                warning = parse_affix_into(builder, params, decoder, mirrored, AffixGroups::Prefixes)?;
            }
            Directive::Suffix => {
                warning = parse_affix_into(builder, params, decoder, mirrored, AffixGroups::Suffixes)?;
            }
            Directive::Replacement => line = builder.replacements.accept(params, parse_replacement)?,
            Directive::InputConversion => {
                line = builder.input_conversions.accept(params, parse_conversion)?
            }
            Directive::OutputConversion => {
                line = builder.output_conversions.accept(params, parse_conversion)?
            }
            Directive::Phone => line = builder.phone.accept(params, parse_phonetic)?,
            Directive::Map => line = builder.map.accept(params, parse_map)?,
            Directive::Break => line = builder.break_points.accept(params, parse_break)?,
            Directive::CheckCompoundPattern => {
                let mut simplified = false;
                line = builder.compound_patterns.accept(params, |params, patterns| {
                    let pattern = parse_compound_pattern(params, &decoder)?;
                    simplified = pattern.pattern3.is_some();
                    patterns.push(pattern);
                    Ok(())
                })?;
                if simplified {
                    builder.options |= AffixConfigOptions::SIMPLIFIED_COMPOUND;
                }
            }
            Directive::CompoundRule => {
                line = builder.compound_rules.accept(params, |params, rules| {
                    rules.push(CompoundRule::parse(params, &decoder)?);
                    Ok(())
                })?
            }
            Directive::AliasF => {
                line = builder
                    .alias_f
                    .accept(params, |params, entries| parse_alias_f(params, &decoder, entries))?
            }
            Directive::AliasM => {
                line = builder
                    .alias_m
                    .accept(params, |params, entries| parse_alias_m(params, mirrored, entries))?
            }
            flag_directive => {
                let slot = special_flag(&mut builder.flags, flag_directive)
                    .ok_or(AffixError::MissingField("flag directive"))?;
                *slot = Some(decoder.parse_flag(params)?);
            }
        }

        // A count line decodes nothing, so a later FLAG change is still in time.
        if directive.bears_flags() && line == TableLine::Entry {
            self.flags_decoded = true;
        }
        Ok(warning)
    }

    fn set_flag_mode(&mut self, params: &str) -> Result<Option<AffixError>, AffixError> {
        let mode = FlagMode::from_name(params)
            .ok_or_else(|| AffixError::UnknownFlagMode(params.to_string()))?;
        if mode == self.builder.flag_mode {
            return Err(AffixError::RedundantFlagMode(mode));
        }

        self.builder.flag_mode = mode;
        Ok(self.flags_decoded.then_some(AffixError::LateFlagMode(mode)))
    }
}

fn parse_int(text: &str) -> Result<i32, AffixError> {
    text.trim()
        .parse()
        .map_err(|_| AffixError::InvalidInteger(text.to_string()))
}

fn parse_compound_syllable(params: &str) -> Result<CompoundSyllable, AffixError> {
    let mut fields = split_fields(params);
    let max_syllable = parse_int(fields.next().unwrap_or_default())?;
    let mut vowels: Vec<char> = fields.next().unwrap_or(DEFAULT_COMPOUND_VOWELS).chars().collect();
    vowels.sort_unstable();
    Ok(CompoundSyllable {
        max_syllable,
        vowels,
    })
}

fn special_flag(flags: &mut SpecialFlags, directive: Directive) -> Option<&mut Option<FlagValue>> {
    let slot = match directive {
        Directive::CompoundFlag => &mut flags.compound_flag,
        Directive::CompoundBegin => &mut flags.compound_begin,
        Directive::CompoundMiddle => &mut flags.compound_middle,
        Directive::CompoundEnd => &mut flags.compound_end,
        Directive::CompoundRoot => &mut flags.compound_root,
        Directive::CompoundPermitFlag => &mut flags.compound_permit,
        Directive::CompoundForbidFlag => &mut flags.compound_forbid,
        Directive::NoSuggest => &mut flags.no_suggest,
        Directive::NoNgramSuggest => &mut flags.no_ngram_suggest,
        Directive::ForbiddenWord => &mut flags.forbidden_word,
        Directive::LemmaPresent => &mut flags.lemma_present,
        Directive::Circumfix => &mut flags.circumfix,
        Directive::OnlyInCompound => &mut flags.only_in_compound,
        Directive::NeedAffix => &mut flags.need_affix,
        Directive::KeepCase => &mut flags.keep_case,
        Directive::ForceUppercase => &mut flags.force_uppercase,
        Directive::Warn => &mut flags.warn,
        Directive::Substandard => &mut flags.substandard,
        _ => return None,
    };
    Some(slot)
}

#[derive(Clone, Copy)]
enum AffixGroups {
    Prefixes,
    Suffixes,
}

fn parse_affix_into(
    builder: &mut AffixConfigBuilder,
    params: &str,
    decoder: FlagDecoder,
    mirrored: bool,
    target: AffixGroups,
) -> Result<Option<AffixError>, AffixError> {
    let ctx = EntryContext {
        decoder,
        mirrored,
        ignored_chars: &builder.ignored_chars,
        alias_f: builder.alias_f.items(),
        alias_m: builder.alias_m.items(),
    };

    let effect = match target {
        AffixGroups::Prefixes => parse_affix_line(params, &mut builder.prefixes, &ctx)?,
        AffixGroups::Suffixes => parse_affix_line(params, &mut builder.suffixes, &ctx)?,
    };

    builder.has_continuation_classes |= effect.has_continuation;
    Ok(effect.warning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hunaff_core::FlagSet;

    fn flag(c: char) -> FlagValue {
        FlagValue::from_char(c)
    }

    fn read(text: &str) -> Compilation {
        AffixReader::read_lines(text.lines())
    }

    #[test]
    fn line_outcomes() {
        let mut reader = AffixReader::default();
        assert_eq!(reader.parse_line(""), LineOutcome::Skipped);
        assert_eq!(reader.parse_line("   # comment"), LineOutcome::Skipped);
        assert_eq!(reader.parse_line("CHECKNUM"), LineOutcome::Applied);
        assert_eq!(reader.parse_line("TRY esianrtolcdugmphbyfvkwz"), LineOutcome::Applied);
        assert_eq!(reader.parse_line("NOTADIRECTIVE 1"), LineOutcome::Unrecognized);
        assert_eq!(reader.parse_line("LONELYWORD"), LineOutcome::Unrecognized);
        assert_eq!(reader.parse_line("COMPOUNDMIN x"), LineOutcome::Rejected);
        assert_eq!(reader.diagnostics().len(), 1);
        assert_eq!(reader.diagnostics()[0].line, 7);
        assert_eq!(reader.diagnostics()[0].kind, DiagnosticKind::Rejected);
    }

    #[test]
    fn options_are_case_insensitive_and_trimmed() {
        let compilation = read("  complexprefixes  \n\tFullStrip");
        let options = compilation.config.options();
        assert!(options.contains(AffixConfigOptions::COMPLEX_PREFIXES));
        assert!(options.contains(AffixConfigOptions::FULL_STRIP));
    }

    #[test]
    fn scalar_directives() {
        let compilation = read(
            "KEY qwertyuiop|asdfghjkl\n\
             VERSION 1.2\n\
             LANG en_US \n\
             WORDCHARS 0123456789'\n\
             IGNORE -\n\
             SYLLABLENUM X\n\
             COMPOUNDWORDMAX 2\n\
             COMPOUNDMIN -4\n\
             MAXNGRAMSUGS 3\n\
             MAXDIFF 5\n\
             MAXCPDSUGS 0\n\
             COMPOUNDSYLLABLE 6 uoieaáé",
        );
        let config = &compilation.config;
        assert!(compilation.diagnostics.is_empty());
        assert_eq!(config.key(), Some("qwertyuiop|asdfghjkl"));
        assert_eq!(config.version(), Some("1.2"));
        assert_eq!(config.language(), Some("en_US"));
        assert_eq!(config.language_tag().as_deref(), Some("en-US"));
        assert_eq!(config.word_chars().len(), 11);
        assert_eq!(config.ignored_chars(), ['-']);
        assert_eq!(config.syllable_num(), Some("X"));
        assert_eq!(config.compound_word_max(), Some(2));
        assert_eq!(config.compound_min(), Some(1));
        assert_eq!(config.max_ngram_suggestions(), Some(3));
        assert_eq!(config.max_differency(), Some(5));
        assert_eq!(config.max_compound_suggestions(), Some(0));

        let syllable = config.compound_syllable().unwrap();
        assert_eq!(syllable.max_syllable, 6);
        assert_eq!(syllable.vowels, vec!['a', 'e', 'i', 'o', 'u', 'á', 'é']);
    }

    #[test]
    fn compound_syllable_default_vowels() {
        let compilation = read("COMPOUNDSYLLABLE 4");
        let syllable = compilation.config.compound_syllable().unwrap();
        assert_eq!(syllable.vowels.iter().collect::<String>(), "AEIOUaeiou");
    }

    #[test]
    fn special_flags() {
        let compilation = read(
            "COMPOUNDFLAG Y\n\
             NEEDAFFIX N\n\
             PSEUDOROOT P\n\
             FORBIDDENWORD !\n\
             KEEPCASE K\n\
             LEMMA_PRESENT L",
        );
        let flags = compilation.config.flags();
        assert_eq!(flags.compound_flag, Some(flag('Y')));
        assert_eq!(flags.need_affix, Some(flag('P')));
        assert_eq!(flags.forbidden_word, Some(flag('!')));
        assert_eq!(flags.keep_case, Some(flag('K')));
        assert_eq!(flags.lemma_present, Some(flag('L')));
    }

    #[test]
    fn flag_directive_needs_exactly_one_flag() {
        let compilation = read("KEEPCASE KX");
        assert_eq!(compilation.config.flags().keep_case, None);
        assert_eq!(compilation.diagnostics[0].directive, "KEEPCASE");
    }

    #[test]
    fn flag_mode_changes() {
        let compilation = read("FLAG char\nFLAG long\nFLAG bogus\nKEEPCASE Kc");
        let errors: Vec<_> = compilation.diagnostics.iter().map(|d| &d.error).collect();
        assert_eq!(
            errors,
            [
                &AffixError::RedundantFlagMode(FlagMode::Char),
                &AffixError::UnknownFlagMode("bogus".to_string()),
            ]
        );
        assert_eq!(compilation.config.flag_mode(), FlagMode::Long);
        assert!(compilation.config.flags().keep_case.is_some());
    }

    #[test]
    fn late_flag_mode_change_is_applied_with_a_warning() {
        let compilation = read("KEEPCASE K\nFLAG num");
        assert_eq!(compilation.config.flag_mode(), FlagMode::Num);
        assert_eq!(compilation.diagnostics.len(), 1);
        let diagnostic = &compilation.diagnostics[0];
        assert_eq!(diagnostic.kind, DiagnosticKind::Warning);
        assert_eq!(diagnostic.error, AffixError::LateFlagMode(FlagMode::Num));
    }

    #[test]
    fn count_lines_do_not_make_flag_mode_late() {
        let compilation = read("AF 2\nCOMPOUNDRULE 1\nFLAG long\nAF AaBb");
        assert!(compilation.diagnostics.is_empty(), "{:?}", compilation.diagnostics);
        assert_eq!(compilation.config.alias_f()[0].len(), 2);

        let late = read("AF 1\nAF A\nFLAG long");
        assert_eq!(late.diagnostics[0].error, AffixError::LateFlagMode(FlagMode::Long));
    }

    #[test]
    fn set_switches_encoding_and_rejects_unknown_names() {
        let mut reader = AffixReader::default();
        assert_eq!(reader.parse_line("SET UTF-8"), LineOutcome::Applied);
        assert_eq!(reader.encoding(), encoding_rs::UTF_8);
        assert_eq!(reader.parse_line("SET nonsense"), LineOutcome::Rejected);
        assert_eq!(reader.encoding(), encoding_rs::UTF_8);
    }

    #[test]
    fn size_hint_only_on_first_line() {
        let compilation = read("REP 2\nREP a b\nREP 3 4\nPHONE x y");
        let replacements = compilation.config.replacements();
        assert_eq!(replacements.len(), 2);
        assert_eq!(replacements[1].pattern, "3");
        assert_eq!(compilation.config.phone().len(), 1);
    }

    #[test]
    fn compound_pattern_with_replacement_sets_simplified_compound() {
        let plain = read("CHECKCOMPOUNDPATTERN 1\nCHECKCOMPOUNDPATTERN o b");
        assert!(!plain.config.has_option(AffixConfigOptions::SIMPLIFIED_COMPOUND));

        let simplified = read("CHECKCOMPOUNDPATTERN o/X b/Y z");
        assert!(simplified.config.has_option(AffixConfigOptions::SIMPLIFIED_COMPOUND));
        let pattern = &simplified.config.compound_patterns()[0];
        assert_eq!(pattern.condition, Some(flag('X')));
        assert_eq!(pattern.pattern3.as_deref(), Some("z"));
    }

    #[test]
    fn compound_rules_and_conversions() {
        let compilation = read(
            "COMPOUNDRULE 2\n\
             COMPOUNDRULE ABC\n\
             COMPOUNDRULE A*B?\n\
             ICONV 1\n\
             ICONV ’ '\n\
             OCONV ^a A",
        );
        let config = &compilation.config;
        assert_eq!(config.compound_rules().len(), 2);
        assert_eq!(config.compound_rules()[1].tokens().len(), 4);
        assert_eq!(config.input_conversions().len(), 1);
        assert_eq!(config.output_conversions().len(), 1);
    }

    #[test]
    fn affix_groups_and_continuation_classes() {
        let compilation = read(
            "SFX S Y 2\n\
             SFX S y ies [^aeiou]y\n\
             SFX S 0 s/T [aeiou]y\n\
             PFX U N 1\n\
             PFX U 0 un .",
        );
        let config = &compilation.config;
        assert!(compilation.diagnostics.is_empty());
        assert!(config.has_continuation_classes());

        let suffixes = config.suffix_group(flag('S')).unwrap();
        assert!(suffixes.allows_cross_product());
        assert_eq!(suffixes.entries[0].apply("fly").as_deref(), Some("flies"));
        assert_eq!(suffixes.entries[1].continuation_class, FlagSet::from(vec![flag('T')]));

        let prefixes = config.prefix_group(flag('U')).unwrap();
        assert!(!prefixes.allows_cross_product());
        assert_eq!(prefixes.entries[0].apply("do").as_deref(), Some("undo"));
    }

    #[test]
    fn unsatisfiable_condition_is_a_warning() {
        let compilation = read("PFX A Y 1\nPFX A foo bar [^f]oo");
        assert_eq!(compilation.config.prefixes()[0].entries.len(), 1);
        assert_eq!(compilation.diagnostics[0].kind, DiagnosticKind::Warning);
        assert!(matches!(
            compilation.diagnostics[0].error,
            AffixError::UnsatisfiableCondition { .. }
        ));
    }

    #[test]
    fn duplicate_header_is_rejected() {
        let compilation = read("PFX A Y 1\nPFX A N 1");
        assert_eq!(compilation.config.prefixes().len(), 1);
        assert!(compilation.config.prefixes()[0].allows_cross_product());
        assert_eq!(
            compilation.diagnostics[0].error,
            AffixError::DuplicateHeader(flag('A'))
        );
    }

    #[test]
    fn alias_tables_feed_affix_lines() {
        let compilation = read(
            "AF 2\n\
             AF AB\n\
             AF C\n\
             AM 1\n\
             AM po:noun\n\
             SFX X Y 1\n\
             SFX X 0 s/2 . 1",
        );
        let config = &compilation.config;
        assert!(compilation.diagnostics.is_empty());
        assert_eq!(config.alias_f().len(), 2);

        let group = config.suffix_group(flag('X')).unwrap();
        assert!(group.options.contains(crate::AffixEntryOptions::ALIAS_F));
        assert!(group.options.contains(crate::AffixEntryOptions::ALIAS_M));
        assert_eq!(group.entries[0].continuation_class, FlagSet::from(vec![flag('C')]));
        assert_eq!(group.entries[0].morphology, vec!["po:noun"]);
    }

    #[test]
    fn missing_parameters_are_rejected() {
        let mut reader = AffixReader::default();
        assert_eq!(reader.parse_line("TRY"), LineOutcome::Rejected);
        assert_eq!(
            reader.diagnostics()[0].error,
            AffixError::MissingField("directive parameters")
        );
    }

    #[test]
    fn leading_byte_order_mark_is_ignored() {
        let compilation = read("\u{FEFF}TRY abc");
        assert_eq!(compilation.config.try_string(), Some("abc"));
    }

    #[test]
    fn break_table_default_and_override() {
        let default = read("TRY a");
        assert_eq!(default.config.break_points(), ["-", "^-", "-$"]);

        let hinted_empty = read("BREAK 0");
        assert!(hinted_empty.config.break_points().is_empty());

        let custom = read("BREAK 1\nBREAK -");
        assert_eq!(custom.config.break_points(), ["-"]);
    }

    #[test]
    fn reader_options_supply_the_default_break_table() {
        let options = ReaderOptions {
            default_break_table: vec!["'".to_string()],
            ..ReaderOptions::default()
        };
        let mut reader = AffixReader::new(options);
        reader.parse_line("TRY a");
        assert_eq!(reader.finish().config.break_points(), ["'"]);
    }
}
