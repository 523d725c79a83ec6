// Character encodings named by SET, and the re-decoding used by FLAG UTF-8.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};
use hunaff_core::{FlagMode, FlagSet, FlagValue, SyntaxError};

/// Resolve the encoding named by a SET directive.
///
/// Affix files use a few historical spellings (`microsoft-cp1251`,
/// `TIS620-2533`) next to the usual labels; everything else is looked up
/// as a WHATWG encoding label.
pub fn encoding_for_name(name: &str) -> Option<&'static Encoding> {
    let name = name.trim();
    let lower = name.to_ascii_lowercase();
    let label = match lower.as_str() {
        "tis620-2533" => "tis-620",
        other => other.strip_prefix("microsoft-").unwrap_or(other),
    };
    Encoding::for_label(label.as_bytes())
}

/// Re-encode `text` with the declared encoding and decode the bytes as UTF-8.
///
/// Lines of a file whose SET names a legacy encoding are decoded with that
/// encoding, which splits UTF-8 flag characters into several code points.
/// This puts them back together. Malformed sequences become U+FFFD.
pub fn redecode_as_utf8<'a>(text: &'a str, declared: &'static Encoding) -> Cow<'a, str> {
    if declared == UTF_8 {
        return Cow::Borrowed(text);
    }

    let (bytes, _, _) = declared.encode(text);
    Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())
}

/// Decode one raw line with the current encoding.
pub(crate) fn decode_line(bytes: &[u8], encoding: &'static Encoding) -> String {
    let (text, _) = encoding.decode_without_bom_handling(bytes);
    text.into_owned()
}

/// Flag decoding bound to the current FLAG mode and declared encoding.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FlagDecoder {
    pub mode: FlagMode,
    pub encoding: &'static Encoding,
}

impl FlagDecoder {
    /// Text in the form the flag codec sees it: `Uni` text is re-decoded.
    pub fn canonical<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.mode {
            FlagMode::Uni => redecode_as_utf8(text, self.encoding),
            _ => Cow::Borrowed(text),
        }
    }

    /// Mode to use on [`canonical`](Self::canonical) text.
    pub fn effective_mode(&self) -> FlagMode {
        match self.mode {
            FlagMode::Uni => FlagMode::Char,
            mode => mode,
        }
    }

    pub fn parse_flags(&self, text: &str) -> Result<Vec<FlagValue>, SyntaxError> {
        FlagValue::parse_flags(&self.canonical(text), self.effective_mode())
    }

    pub fn parse_flag(&self, text: &str) -> Result<FlagValue, SyntaxError> {
        FlagValue::parse_flag(&self.canonical(text), self.effective_mode())
    }

    pub fn parse_flag_set(&self, text: &str) -> Result<FlagSet, SyntaxError> {
        Ok(self.parse_flags(text)?.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{ISO_8859_2, KOI8_R, WINDOWS_1251, WINDOWS_1252};

    #[test]
    fn resolves_affix_file_encoding_names() {
        assert_eq!(encoding_for_name("UTF-8"), Some(UTF_8));
        assert_eq!(encoding_for_name("ISO8859-1"), Some(WINDOWS_1252));
        assert_eq!(encoding_for_name("ISO8859-2"), Some(ISO_8859_2));
        assert_eq!(encoding_for_name("KOI8-R"), Some(KOI8_R));
        assert_eq!(encoding_for_name("microsoft-cp1251"), Some(WINDOWS_1251));
        assert_eq!(encoding_for_name("no-such-charset"), None);
    }

    #[test]
    fn redecode_restores_utf8_sequences() {
        // "ä" as UTF-8 bytes C3 A4, read as ISO-8859-1.
        let misdecoded = "\u{00C3}\u{00A4}";
        assert_eq!(redecode_as_utf8(misdecoded, WINDOWS_1252), "\u{00E4}");
        assert_eq!(redecode_as_utf8(misdecoded, UTF_8), misdecoded);
    }

    #[test]
    fn decoder_uses_char_mode_after_redecoding() {
        let decoder = FlagDecoder {
            mode: FlagMode::Uni,
            encoding: WINDOWS_1252,
        };
        let flags = decoder.parse_flags("\u{00C3}\u{00A4}b").unwrap();
        assert_eq!(flags, vec![FlagValue::from_char('\u{00E4}'), FlagValue::from_char('b')]);
    }

    #[test]
    fn decoder_leaves_other_modes_alone() {
        let decoder = FlagDecoder {
            mode: FlagMode::Char,
            encoding: WINDOWS_1252,
        };
        assert_eq!(decoder.parse_flags("\u{00C3}\u{00A4}").unwrap().len(), 2);
        assert_eq!(decoder.effective_mode(), FlagMode::Char);
    }

    #[test]
    fn decode_line_uses_the_given_encoding() {
        assert_eq!(decode_line(&[0x61, 0xE4], WINDOWS_1252), "a\u{00E4}");
        assert_eq!(decode_line("a\u{00E4}".as_bytes(), UTF_8), "a\u{00E4}");
    }
}
