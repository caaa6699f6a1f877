use natural_sort_order as nso;
use nso::{read_run_str, CharKind, NumeralRun};
use pretty_assertions::assert_eq;

fn run(kind: CharKind, s: &str) -> Option<(i64, usize)> {
    read_run_str(kind, s).map(|NumeralRun { value, len }| (value, len))
}

#[test]
fn test_roman_letters() {
    assert_eq!(run(CharKind::RomanAscii, "XIV"), Some((14, 3)));
    assert_eq!(run(CharKind::RomanAscii, "IIII"), Some((4, 4)));
    assert_eq!(run(CharKind::RomanAscii, "MMXXVI."), Some((2026, 6)));
    assert_eq!(run(CharKind::RomanAscii, "CIVIL"), None);
}

#[test]
fn test_roman_block() {
    assert_eq!(run(CharKind::RomanWide, "Ⅻ"), Some((12, 1)));
    assert_eq!(run(CharKind::RomanWide, "ⅯⅮ"), Some((1500, 2)));
}

#[test]
fn test_kanji_notations() {
    assert_eq!(run(CharKind::Kanji, "一二三"), Some((123, 3)));
    assert_eq!(run(CharKind::Kanji, "百二十三"), Some((123, 4)));
    assert_eq!(run(CharKind::Kanji, "千"), Some((1000, 1)));
    assert_eq!(run(CharKind::Kanji, "二千三百"), Some((2300, 4)));
}

#[test]
fn test_arabic_grouping() {
    assert_eq!(run(CharKind::Arabic, "12,345"), Some((12345, 6)));
    assert_eq!(run(CharKind::Arabic, "12,34"), Some((12, 2)));
}

#[test]
fn test_circled_symbols() {
    assert_eq!(run(CharKind::Circled, "⑩⑪"), Some((10, 1)));
    assert_eq!(run(CharKind::Circled, "㉚"), Some((30, 1)));
}
