//! Numeral converters: one small state machine per numeral kind.
//!
//! A converter is seeded with the first character of a run and then fed the
//! following characters one at a time until it rejects one.

pub mod arabic;
pub mod circled;
pub mod kanji;
pub mod roman;

use crate::classify::CharKind;

pub use arabic::ArabicConverter;
pub use circled::CircledConverter;
pub use kanji::KanjiConverter;
pub use roman::{RomanBlockConverter, RomanLetterConverter};

/// Shared capability of every numeral converter.
pub trait NumeralConverter {
    /// Try to extend the run with `c`. Returns false once the run is over.
    fn add_char(&mut self, c: char) -> bool;
    /// Value of the longest valid prefix read so far.
    fn value(&self) -> i64;
    /// Characters in that prefix.
    fn len(&self) -> usize;
    /// The run is malformed and must not be compared as a number.
    fn is_error(&self) -> bool;
}

/// One converter per numeral kind.
#[derive(Debug, Clone)]
pub enum Converter {
    Arabic(ArabicConverter),
    RomanAscii(RomanLetterConverter),
    RomanWide(RomanBlockConverter),
    Circled(CircledConverter),
    Kanji(KanjiConverter),
}

impl Converter {
    /// Converter for a run of `kind` starting with `seed`.
    pub fn new(kind: CharKind, seed: char) -> Option<Self> {
        match kind {
            CharKind::None => None,
            CharKind::Arabic => ArabicConverter::new(seed).map(Converter::Arabic),
            CharKind::RomanAscii => RomanLetterConverter::new(seed).map(Converter::RomanAscii),
            CharKind::RomanWide => RomanBlockConverter::new(seed).map(Converter::RomanWide),
            CharKind::Circled => CircledConverter::new(seed).map(Converter::Circled),
            CharKind::Kanji => KanjiConverter::new(seed).map(Converter::Kanji),
        }
    }
}

impl NumeralConverter for Converter {
    fn add_char(&mut self, c: char) -> bool {
        match self {
            Converter::Arabic(conv) => conv.add_char(c),
            Converter::RomanAscii(conv) => conv.add_char(c),
            Converter::RomanWide(conv) => conv.add_char(c),
            Converter::Circled(conv) => conv.add_char(c),
            Converter::Kanji(conv) => conv.add_char(c),
        }
    }

    fn value(&self) -> i64 {
        match self {
            Converter::Arabic(conv) => conv.value(),
            Converter::RomanAscii(conv) => conv.value(),
            Converter::RomanWide(conv) => conv.value(),
            Converter::Circled(conv) => conv.value(),
            Converter::Kanji(conv) => conv.value(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Converter::Arabic(conv) => conv.len(),
            Converter::RomanAscii(conv) => conv.len(),
            Converter::RomanWide(conv) => conv.len(),
            Converter::Circled(conv) => conv.len(),
            Converter::Kanji(conv) => conv.len(),
        }
    }

    fn is_error(&self) -> bool {
        match self {
            Converter::Arabic(conv) => conv.is_error(),
            Converter::RomanAscii(conv) => conv.is_error(),
            Converter::RomanWide(conv) => conv.is_error(),
            Converter::Circled(conv) => conv.is_error(),
            Converter::Kanji(conv) => conv.is_error(),
        }
    }
}

/// A numeral run read from the front of a character slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumeralRun {
    pub value: i64,
    pub len: usize,
}

/// Read the run of `kind` at the front of `chars`.
/// `None` when `chars` is empty, the seed does not fit `kind`, or the run is malformed.
pub fn read_run(kind: CharKind, chars: &[char]) -> Option<NumeralRun> {
    let (&seed, rest) = chars.split_first()?;
    let mut conv = Converter::new(kind, seed)?;
    for &c in rest {
        if !conv.add_char(c) {
            break;
        }
    }
    if conv.is_error() {
        return None;
    }
    Some(NumeralRun {
        value: conv.value(),
        len: conv.len(),
    })
}

/// Convenience over [`read_run`] for string input.
pub fn read_run_str(kind: CharKind, s: &str) -> Option<NumeralRun> {
    let chars: Vec<char> = s.chars().collect();
    read_run(kind, &chars)
}
