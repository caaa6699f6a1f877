use super::NumeralConverter;

/// Numeric value of a kanji digit or unit.
pub fn kanji_value(c: char) -> Option<i64> {
    let value = match c {
        '〇' | '零' => 0,
        '一' | '壱' => 1,
        '二' | '弐' => 2,
        '三' | '参' => 3,
        '四' => 4,
        '五' => 5,
        '六' => 6,
        '七' => 7,
        '八' => 8,
        '九' => 9,
        '十' | '拾' => 10,
        '百' => 100,
        '千' => 1_000,
        '万' => 10_000,
        '億' => 100_000_000,
        '兆' => 1_000_000_000_000,
        '京' => 10_000_000_000_000_000,
        _ => return None,
    };
    Some(value)
}

const MYRIAD: i64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Notation {
    /// Only the seed has been read.
    Undecided,
    /// Every glyph is one decimal digit: 一二三 = 123.
    Positional,
    /// Digits scaled by unit words: 百二十三 = 123.
    Multiplicative,
}

/// Kanji numerals in positional or multiplicative notation.
///
/// The notation is fixed by the first two glyphs: two digits make the run
/// positional, anything else multiplicative.
#[derive(Debug, Clone)]
pub struct KanjiConverter {
    notation: Notation,
    len: usize,
    /// Bare digit waiting for a unit.
    digit: Option<i64>,
    /// Total below one myriad.
    small: i64,
    /// Total of completed myriad groups, or the positional value.
    large: i64,
    /// Smallest tier-1 unit (十 百 千) used so far.
    unit1: i64,
    /// Smallest tier-2 unit (万 億 兆 京) used so far.
    unit2: i64,
}

impl KanjiConverter {
    pub fn new(seed: char) -> Option<Self> {
        let value = kanji_value(seed)?;
        let mut conv = Self {
            notation: Notation::Undecided,
            len: 1,
            digit: None,
            small: 0,
            large: 0,
            unit1: MYRIAD,
            unit2: i64::MAX,
        };
        if value < 10 {
            conv.digit = Some(value);
        } else if value < MYRIAD {
            conv.small = value;
            conv.unit1 = value;
        } else {
            conv.large = value;
            conv.unit2 = value;
        }
        Some(conv)
    }

    fn push_multiplicative(&mut self, value: i64) -> bool {
        if value < 10 {
            if self.digit.is_some() {
                return false;
            }
            self.digit = Some(value);
        } else if value < MYRIAD {
            if self.unit1 <= value {
                return false;
            }
            self.small += self.digit.take().unwrap_or(1) * value;
            self.unit1 = value;
        } else {
            if self.unit2 <= value {
                return false;
            }
            let group = match (self.small, self.digit.take()) {
                (0, None) => 1,
                (small, digit) => small + digit.unwrap_or(0),
            };
            self.large = self.large.saturating_add(group.saturating_mul(value));
            self.small = 0;
            self.unit1 = MYRIAD;
            self.unit2 = value;
        }
        true
    }
}

impl NumeralConverter for KanjiConverter {
    fn add_char(&mut self, c: char) -> bool {
        let Some(value) = kanji_value(c) else {
            return false;
        };
        if self.notation == Notation::Undecided {
            match self.digit {
                Some(first) if value < 10 => {
                    self.notation = Notation::Positional;
                    self.large = first;
                    self.digit = None;
                }
                _ => self.notation = Notation::Multiplicative,
            }
        }
        let accepted = match self.notation {
            Notation::Positional if value < 10 => {
                self.large = self.large.saturating_mul(10).saturating_add(value);
                true
            }
            Notation::Positional => false,
            _ => self.push_multiplicative(value),
        };
        if accepted {
            self.len += 1;
        }
        accepted
    }

    fn value(&self) -> i64 {
        self.large
            .saturating_add(self.small)
            .saturating_add(self.digit.unwrap_or(0))
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_error(&self) -> bool {
        false
    }
}
