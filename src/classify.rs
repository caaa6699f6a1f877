use crate::convert::circled::circled_value;
use crate::convert::roman::{letter_family, letter_value, LetterFamily};
use crate::options::ComparerOptions;

/// Numeral kind a character can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharKind {
    #[default]
    None,
    Arabic,
    /// Roman numerals written with Latin letters, ASCII or fullwidth.
    RomanAscii,
    /// Roman numerals from the U+2160..U+217F block.
    RomanWide,
    Circled,
    Kanji,
}

impl CharKind {
    /// Option bit enabling this kind.
    pub fn flag(self) -> ComparerOptions {
        match self {
            CharKind::None => ComparerOptions::empty(),
            CharKind::Arabic => ComparerOptions::ARABIC,
            CharKind::RomanAscii => ComparerOptions::ROMAN_ASCII,
            CharKind::RomanWide => ComparerOptions::ROMAN_WIDE,
            CharKind::Circled => ComparerOptions::CIRCLED,
            CharKind::Kanji => ComparerOptions::KANJI,
        }
    }

    /// `None` when the kind is disabled in `options`.
    pub fn filtered(self, options: ComparerOptions) -> CharKind {
        if self != CharKind::None && options.contains(self.flag()) {
            self
        } else {
            CharKind::None
        }
    }

    pub fn is_numeral(self) -> bool {
        self != CharKind::None
    }
}

/// Kanji that may start a numeral run.
const BASE_KANJI: &str = "〇一二三四五六七八九十百千壱弐参拾";
/// Myriad units, accepted only while the previous position was a kanji numeral.
const MULTIPLIER_KANJI: &str = "万億兆京";

/// Classify `current` given the character before it and the kind resolved
/// at the previous position of the walk.
pub fn classify(current: char, previous: Option<char>, prior: CharKind) -> CharKind {
    match current {
        '0'..='9' | '０'..='９' => CharKind::Arabic,
        c if circled_value(c).is_some() => CharKind::Circled,
        'A'..='Z' | 'a'..='z' | 'Ａ'..='Ｚ' | 'ａ'..='ｚ' => {
            let blocked = previous.is_some_and(|p| continues_word(p, current));
            if letter_value(current).is_some() && !blocked {
                CharKind::RomanAscii
            } else {
                CharKind::None
            }
        }
        '\u{2160}'..='\u{217F}' => CharKind::RomanWide,
        c if BASE_KANJI.contains(c) => CharKind::Kanji,
        c if prior == CharKind::Kanji && MULTIPLIER_KANJI.contains(c) => CharKind::Kanji,
        _ => CharKind::None,
    }
}

/// Whether `previous` makes `current` the inside of a word rather than the
/// start of a Roman numeral. An uppercase letter is blocked by an uppercase
/// letter of its width; a lowercase letter by any letter of its width.
fn continues_word(previous: char, current: char) -> bool {
    let (Some(prev), Some(cur)) = (letter_family(previous), letter_family(current)) else {
        return false;
    };
    match cur {
        LetterFamily::AsciiUpper | LetterFamily::WideUpper => prev == cur,
        LetterFamily::AsciiLower => matches!(prev, LetterFamily::AsciiUpper | LetterFamily::AsciiLower),
        LetterFamily::WideLower => matches!(prev, LetterFamily::WideUpper | LetterFamily::WideLower),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn digits_and_symbols() {
        assert_eq!(classify('7', None, CharKind::None), CharKind::Arabic);
        assert_eq!(classify('７', Some('a'), CharKind::None), CharKind::Arabic);
        assert_eq!(classify('⑫', None, CharKind::None), CharKind::Circled);
        assert_eq!(classify('Ⅻ', None, CharKind::None), CharKind::RomanWide);
        assert_eq!(classify('ⅹ', None, CharKind::None), CharKind::RomanWide);
    }

    #[test]
    fn roman_letters_need_a_word_boundary() {
        assert_eq!(classify('C', None, CharKind::None), CharKind::RomanAscii);
        assert_eq!(classify('C', Some(' '), CharKind::None), CharKind::RomanAscii);
        assert_eq!(classify('C', Some('A'), CharKind::None), CharKind::None);
        assert_eq!(classify('C', Some('a'), CharKind::None), CharKind::RomanAscii);
        assert_eq!(classify('x', Some('A'), CharKind::None), CharKind::None);
        assert_eq!(classify('Ｍ', Some('Ａ'), CharKind::None), CharKind::None);
        assert_eq!(classify('Ｍ', Some('A'), CharKind::None), CharKind::RomanAscii);
        assert_eq!(classify('B', None, CharKind::None), CharKind::None);
    }

    #[test]
    fn lookbehind_is_a_single_character() {
        // A digit before a word still lets its first letter start a numeral.
        assert_eq!(classify('C', Some('1'), CharKind::None), CharKind::RomanAscii);
    }

    #[test]
    fn multipliers_only_continue_kanji() {
        assert_eq!(classify('三', None, CharKind::None), CharKind::Kanji);
        assert_eq!(classify('拾', None, CharKind::None), CharKind::Kanji);
        assert_eq!(classify('万', None, CharKind::None), CharKind::None);
        assert_eq!(classify('万', Some('三'), CharKind::Kanji), CharKind::Kanji);
        assert_eq!(classify('章', Some('三'), CharKind::Kanji), CharKind::None);
    }

    #[test]
    fn filter_hides_disabled_kinds() {
        let only_arabic = ComparerOptions::ARABIC;
        assert_eq!(CharKind::Kanji.filtered(only_arabic), CharKind::None);
        assert_eq!(CharKind::Arabic.filtered(only_arabic), CharKind::Arabic);
    }
}
