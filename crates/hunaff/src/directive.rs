// Names of parameterized directives.

/// A directive that takes parameters on the rest of its line.
///
/// Binary options (a bare name on its own line) are handled by
/// [`AffixConfigOptions::from_directive`](crate::AffixConfigOptions::from_directive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Flag,
    Key,
    Try,
    Set,
    Lang,
    Version,
    SyllableNum,
    WordChars,
    Ignore,
    CompoundFlag,
    CompoundMiddle,
    CompoundBegin,
    CompoundEnd,
    CompoundRoot,
    CompoundPermitFlag,
    CompoundForbidFlag,
    NoSuggest,
    NoNgramSuggest,
    ForbiddenWord,
    LemmaPresent,
    Circumfix,
    OnlyInCompound,
    NeedAffix,
    KeepCase,
    ForceUppercase,
    Warn,
    Substandard,
    CompoundWordMax,
    CompoundMin,
    CompoundSyllable,
    MaxNgramSuggestions,
    MaxDifferency,
    MaxCompoundSuggestions,
    Prefix,
    Suffix,
    Replacement,
    InputConversion,
    OutputConversion,
    Phone,
    CheckCompoundPattern,
    CompoundRule,
    Map,
    Break,
    AliasF,
    AliasM,
}

impl Directive {
    /// Look up a directive by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let directive = match name.to_ascii_uppercase().as_str() {
            "FLAG" => Self::Flag,
            "KEY" => Self::Key,
            "TRY" => Self::Try,
            "SET" => Self::Set,
            "LANG" => Self::Lang,
            "VERSION" => Self::Version,
            "SYLLABLENUM" => Self::SyllableNum,
            "WORDCHARS" => Self::WordChars,
            "IGNORE" => Self::Ignore,
            "COMPOUNDFLAG" => Self::CompoundFlag,
            "COMPOUNDMIDDLE" => Self::CompoundMiddle,
            "COMPOUNDBEGIN" => Self::CompoundBegin,
            "COMPOUNDEND" => Self::CompoundEnd,
            "COMPOUNDROOT" => Self::CompoundRoot,
            "COMPOUNDPERMITFLAG" => Self::CompoundPermitFlag,
            "COMPOUNDFORBIDFLAG" => Self::CompoundForbidFlag,
            "NOSUGGEST" => Self::NoSuggest,
            "NONGRAMSUGGEST" => Self::NoNgramSuggest,
            "FORBIDDENWORD" => Self::ForbiddenWord,
            "LEMMA_PRESENT" => Self::LemmaPresent,
            "CIRCUMFIX" => Self::Circumfix,
            "ONLYINCOMPOUND" => Self::OnlyInCompound,
            "NEEDAFFIX" | "PSEUDOROOT" => Self::NeedAffix,
            "KEEPCASE" => Self::KeepCase,
            "FORCEUCASE" => Self::ForceUppercase,
            "WARN" => Self::Warn,
            "SUBSTANDARD" => Self::Substandard,
            "COMPOUNDWORDMAX" => Self::CompoundWordMax,
            "COMPOUNDMIN" => Self::CompoundMin,
            "COMPOUNDSYLLABLE" => Self::CompoundSyllable,
            "MAXNGRAMSUGS" => Self::MaxNgramSuggestions,
            "MAXDIFF" => Self::MaxDifferency,
            "MAXCPDSUGS" => Self::MaxCompoundSuggestions,
            "PFX" => Self::Prefix,
            "SFX" => Self::Suffix,
            "REP" => Self::Replacement,
            "ICONV" => Self::InputConversion,
            "OCONV" => Self::OutputConversion,
            "PHONE" => Self::Phone,
            "CHECKCOMPOUNDPATTERN" => Self::CheckCompoundPattern,
            "COMPOUNDRULE" => Self::CompoundRule,
            "MAP" => Self::Map,
            "BREAK" => Self::Break,
            "AF" => Self::AliasF,
            "AM" => Self::AliasM,
            _ => return None,
        };
        Some(directive)
    }

    /// Canonical name as written in affix files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Flag => "FLAG",
            Self::Key => "KEY",
            Self::Try => "TRY",
            Self::Set => "SET",
            Self::Lang => "LANG",
            Self::Version => "VERSION",
            Self::SyllableNum => "SYLLABLENUM",
            Self::WordChars => "WORDCHARS",
            Self::Ignore => "IGNORE",
            Self::CompoundFlag => "COMPOUNDFLAG",
            Self::CompoundMiddle => "COMPOUNDMIDDLE",
            Self::CompoundBegin => "COMPOUNDBEGIN",
            Self::CompoundEnd => "COMPOUNDEND",
            Self::CompoundRoot => "COMPOUNDROOT",
            Self::CompoundPermitFlag => "COMPOUNDPERMITFLAG",
            Self::CompoundForbidFlag => "COMPOUNDFORBIDFLAG",
            Self::NoSuggest => "NOSUGGEST",
            Self::NoNgramSuggest => "NONGRAMSUGGEST",
            Self::ForbiddenWord => "FORBIDDENWORD",
            Self::LemmaPresent => "LEMMA_PRESENT",
            Self::Circumfix => "CIRCUMFIX",
            Self::OnlyInCompound => "ONLYINCOMPOUND",
            Self::NeedAffix => "NEEDAFFIX",
            Self::KeepCase => "KEEPCASE",
            Self::ForceUppercase => "FORCEUCASE",
            Self::Warn => "WARN",
            Self::Substandard => "SUBSTANDARD",
            Self::CompoundWordMax => "COMPOUNDWORDMAX",
            Self::CompoundMin => "COMPOUNDMIN",
            Self::CompoundSyllable => "COMPOUNDSYLLABLE",
            Self::MaxNgramSuggestions => "MAXNGRAMSUGS",
            Self::MaxDifferency => "MAXDIFF",
            Self::MaxCompoundSuggestions => "MAXCPDSUGS",
            Self::Prefix => "PFX",
            Self::Suffix => "SFX",
            Self::Replacement => "REP",
            Self::InputConversion => "ICONV",
            Self::OutputConversion => "OCONV",
            Self::Phone => "PHONE",
            Self::CheckCompoundPattern => "CHECKCOMPOUNDPATTERN",
            Self::CompoundRule => "COMPOUNDRULE",
            Self::Map => "MAP",
            Self::Break => "BREAK",
            Self::AliasF => "AF",
            Self::AliasM => "AM",
        }
    }

    /// The directive that actually receives this line's effect.
    ///
    /// With complex prefixes PFX and SFX trade places, as do COMPOUNDBEGIN and
    /// COMPOUNDEND.
    pub fn redirect(self, complex_prefixes: bool) -> Self {
        if !complex_prefixes {
            return self;
        }
        match self {
            Self::Prefix => Self::Suffix,
            Self::Suffix => Self::Prefix,
            Self::CompoundBegin => Self::CompoundEnd,
            Self::CompoundEnd => Self::CompoundBegin,
            other => other,
        }
    }

    /// Whether applying this directive decodes flags.
    pub fn bears_flags(self) -> bool {
        !matches!(
            self,
            Self::Flag
                | Self::Key
                | Self::Try
                | Self::Set
                | Self::Lang
                | Self::Version
                | Self::SyllableNum
                | Self::WordChars
                | Self::Ignore
                | Self::CompoundWordMax
                | Self::CompoundMin
                | Self::CompoundSyllable
                | Self::MaxNgramSuggestions
                | Self::MaxDifferency
                | Self::MaxCompoundSuggestions
                | Self::Replacement
                | Self::InputConversion
                | Self::OutputConversion
                | Self::Phone
                | Self::Map
                | Self::Break
                | Self::AliasM
        )
    }

    /// Whether text of this directive is mirrored under complex prefixes.
    pub fn is_mirrored(self, complex_prefixes: bool) -> bool {
        complex_prefixes && matches!(self, Self::Prefix | Self::Suffix | Self::AliasM)
    }
}

impl std::fmt::Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
