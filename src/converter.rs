//! Newline escape conversion
//!
//! Both transforms are plain substring replacement. They are exact inverses
//! only on text produced by each other: input that already contains a literal
//! backslash-n, or a lone trailing backslash before a newline, round-trips
//! lossily. That is the documented behavior, not something to paper over with
//! smarter parsing.

/// Conversion direction, as chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Selector "1": replace literal `\n` sequences with real newlines
    UnescapeNewlines,
    /// Selector "2": replace real newlines with literal `\n` sequences
    EscapeNewlines,
}

impl Mode {
    /// Map a console selector to a mode. Anything other than "1" or "2"
    /// is an invalid choice.
    pub fn from_selector(selector: &str) -> Option<Mode> {
        match selector {
            "1" => Some(Mode::UnescapeNewlines),
            "2" => Some(Mode::EscapeNewlines),
            _ => None,
        }
    }

    /// Apply this mode's transform to the full buffer.
    pub fn apply(self, text: &str) -> String {
        match self {
            Mode::UnescapeNewlines => unescape_newlines(text),
            Mode::EscapeNewlines => escape_newlines(text),
        }
    }
}

/// Replace every real newline with the two-character sequence `\n`.
///
/// Total over all strings; no other characters are altered.
pub fn escape_newlines(text: &str) -> String {
    text.replace('\n', "\\n")
}

/// Replace every literal two-character `\n` sequence with a real newline.
pub fn unescape_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}
