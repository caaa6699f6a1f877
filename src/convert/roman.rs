use super::NumeralConverter;

/// Case and width family of a Latin letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterFamily {
    AsciiUpper,
    AsciiLower,
    WideUpper,
    WideLower,
}

impl LetterFamily {
    fn first(self) -> char {
        match self {
            LetterFamily::AsciiUpper => 'A',
            LetterFamily::AsciiLower => 'a',
            LetterFamily::WideUpper => 'Ａ',
            LetterFamily::WideLower => 'ａ',
        }
    }
}

pub fn letter_family(c: char) -> Option<LetterFamily> {
    match c {
        'A'..='Z' => Some(LetterFamily::AsciiUpper),
        'a'..='z' => Some(LetterFamily::AsciiLower),
        'Ａ'..='Ｚ' => Some(LetterFamily::WideUpper),
        'ａ'..='ｚ' => Some(LetterFamily::WideLower),
        _ => None,
    }
}

/// Family and value of a Roman numeral letter (I V X L C D M in any family).
pub fn letter_value(c: char) -> Option<(LetterFamily, i64)> {
    let family = letter_family(c)?;
    let value = match (c as u32) - (family.first() as u32) {
        8 => 1,     // I
        21 => 5,    // V
        23 => 10,   // X
        11 => 50,   // L
        2 => 100,   // C
        3 => 500,   // D
        12 => 1000, // M
        _ => return None,
    };
    Some((family, value))
}

/// Additive/subtractive Roman numeral arithmetic shared by both converters.
#[derive(Debug, Clone, Copy)]
struct RomanGrammar {
    accumulated: i64,
    pending: i64,
    /// Largest unit in the pending run; zero once a subtractive pair closed it.
    ceiling: i64,
}

impl RomanGrammar {
    fn new(value: i64) -> Self {
        Self {
            accumulated: 0,
            pending: value,
            ceiling: value,
        }
    }

    fn push(&mut self, value: i64) -> bool {
        if value == self.ceiling {
            self.pending += value;
        } else if value < self.ceiling {
            self.accumulated += self.pending;
            self.pending = value;
            self.ceiling = value;
        } else if self.ceiling > 0
            && value % self.ceiling == 0
            && matches!(value / self.ceiling, 5 | 10)
        {
            self.pending = value - self.pending;
            self.ceiling /= 2;
        } else {
            return false;
        }
        true
    }

    fn value(&self) -> i64 {
        self.accumulated + self.pending
    }
}

/// Roman numerals spelled with Latin letters, e.g. `XIV`.
///
/// Every letter of a run must share the seed's case and width.
#[derive(Debug, Clone)]
pub struct RomanLetterConverter {
    family: LetterFamily,
    grammar: RomanGrammar,
    len: usize,
    error: bool,
}

impl RomanLetterConverter {
    pub fn new(seed: char) -> Option<Self> {
        let (family, value) = letter_value(seed)?;
        Some(Self {
            family,
            grammar: RomanGrammar::new(value),
            len: 1,
            error: false,
        })
    }
}

impl NumeralConverter for RomanLetterConverter {
    fn add_char(&mut self, c: char) -> bool {
        let accepted = match letter_value(c) {
            Some((family, value)) if family == self.family => self.grammar.push(value),
            _ => false,
        };
        if accepted {
            self.len += 1;
        } else {
            // A letter glued to the run means this was a word, not a numeral.
            self.error = letter_family(c).is_some();
        }
        accepted
    }

    fn value(&self) -> i64 {
        self.grammar.value()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_error(&self) -> bool {
        self.error
    }
}

/// Roman numeral code points U+2160..U+217F, e.g. `ⅩⅣ` or the precomposed `Ⅻ`.
#[derive(Debug, Clone)]
pub struct RomanBlockConverter {
    base: u32,
    grammar: RomanGrammar,
    len: usize,
    /// False for precomposed numerals such as `Ⅷ`, which stand alone.
    extensible: bool,
}

const UPPER_BLOCK: u32 = 0x2160;
const LOWER_BLOCK: u32 = 0x2170;

fn block_value(offset: u32) -> Option<i64> {
    match offset {
        0x0 => Some(1),
        0x4 => Some(5),
        0x9 => Some(10),
        0xC => Some(50),
        0xD => Some(100),
        0xE => Some(500),
        0xF => Some(1000),
        _ => None,
    }
}

impl RomanBlockConverter {
    pub fn new(seed: char) -> Option<Self> {
        let base = match seed as u32 {
            0x2160..=0x216F => UPPER_BLOCK,
            0x2170..=0x217F => LOWER_BLOCK,
            _ => return None,
        };
        let offset = seed as u32 - base;
        let (value, extensible) = match block_value(offset) {
            Some(v) => (v, true),
            None => (offset as i64 + 1, false),
        };
        Some(Self {
            base,
            grammar: RomanGrammar::new(value),
            len: 1,
            extensible,
        })
    }
}

impl NumeralConverter for RomanBlockConverter {
    fn add_char(&mut self, c: char) -> bool {
        if !self.extensible {
            return false;
        }
        let value = (c as u32)
            .checked_sub(self.base)
            .filter(|offset| *offset < 0x10)
            .and_then(block_value);
        match value {
            Some(v) if self.grammar.push(v) => {
                self.len += 1;
                true
            }
            _ => false,
        }
    }

    fn value(&self) -> i64 {
        self.grammar.value()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_error(&self) -> bool {
        false
    }
}
