use natural_sort_order as nso;
use nso::{Comparer, ComparerOptions, SortOrder};
use pretty_assertions::assert_eq;
use std::cmp::Ordering;

#[test]
fn test_leading_zeros_are_equal() {
    assert_eq!(nso::compare("file001", "file1"), Ordering::Equal);
}

#[test]
fn test_numbers_compare_by_value() {
    assert_eq!(nso::compare("file2", "file10"), Ordering::Less);
    assert_eq!(nso::compare("file10", "file2"), Ordering::Greater);
}

#[test]
fn test_empty_boundary() {
    assert_eq!(nso::compare("", ""), Ordering::Equal);
    assert_eq!(nso::compare("", "a"), Ordering::Less);
    assert_eq!(nso::compare("a", ""), Ordering::Greater);
}

#[test]
fn test_cross_notation_equality() {
    assert_eq!(nso::compare("第2章", "第II章"), Ordering::Equal);
    assert_eq!(nso::compare("第2章", "第二章"), Ordering::Equal);
    assert_eq!(nso::compare("第3章", "第Ⅲ章"), Ordering::Equal);
    assert_eq!(nso::compare("第4章", "第④章"), Ordering::Equal);
    assert_eq!(nso::compare("第十二章", "第12章"), Ordering::Equal);
}

#[test]
fn test_cross_notation_without_ignore_number_does_not_fail() {
    let opts = ComparerOptions::DEFAULT - ComparerOptions::IGNORE_NUMBER;
    let cmp = Comparer::with_options(opts);
    let forward = cmp.compare("第2章", "第II章");
    assert_eq!(cmp.compare("第II章", "第2章"), forward.reverse());
    assert_eq!(cmp.compare("第2章", "第3章"), Ordering::Less);
}

#[test]
fn test_disabled_kind_compares_as_text() {
    let cmp = Comparer::with_options(ComparerOptions::ARABIC | ComparerOptions::IGNORE_NUMBER);
    // Kanji are ordinary characters now, so 二 (U+4E8C) sorts before 十 (U+5341)
    // and a digit sorts after either.
    assert_eq!(cmp.compare("第十章", "第二章"), Ordering::Greater);
    assert_eq!(cmp.compare("第2章", "第二章"), Ordering::Greater);
}

#[test]
fn test_comma_grouping() {
    assert_eq!(nso::compare("item 12,345", "item 12345"), Ordering::Equal);
    assert_eq!(nso::compare("12,34", "12,35"), Ordering::Less);
    assert_eq!(nso::compare("1,000", "999"), Ordering::Greater);
}

#[test]
fn test_width_and_case_ignored_by_default() {
    assert_eq!(nso::compare("ＦＩＬＥ１０", "file10"), Ordering::Equal);
    assert_eq!(nso::compare("Readme", "README"), Ordering::Equal);
}

#[test]
fn test_whitespace_ignored_by_default() {
    assert_eq!(nso::compare("file 10", "file10"), Ordering::Equal);
    let strict = Comparer::with_options(ComparerOptions::NUMBER_ALL);
    assert_ne!(strict.compare("file 10", "file10"), Ordering::Equal);
}

#[test]
fn test_kana_distinct_unless_requested() {
    assert_ne!(nso::compare("ひらがな", "ヒラガナ"), Ordering::Equal);
    let kana = Comparer::with_options(ComparerOptions::DEFAULT | ComparerOptions::IGNORE_KANA);
    assert_eq!(kana.compare("ひらがな", "ヒラガナ"), Ordering::Equal);
    assert_eq!(kana.compare("ﾃﾞｰﾀ2", "データ2"), Ordering::Equal);
}

#[test]
fn test_sort_mixed_labels() {
    let sorted = nso::sorted(vec![
        "Chapter 10",
        "Chapter 2",
        "Chapter 1",
        "Chapter 1,000",
        "Chapter 21",
    ]);
    assert_eq!(
        sorted,
        ["Chapter 1", "Chapter 2", "Chapter 10", "Chapter 21", "Chapter 1,000"]
    );
}

#[test]
fn test_sort_kanji_chapters() {
    let mut names = vec!["第十一話", "第二話", "第百話", "第一話", "第十話"];
    nso::sort(&mut names);
    assert_eq!(names, ["第一話", "第二話", "第十話", "第十一話", "第百話"]);
}

#[test]
fn test_sort_position_words() {
    let mut names = vec!["巻下", "巻中", "巻上"];
    nso::sort(&mut names);
    assert_eq!(names, ["巻上", "巻中", "巻下"]);
}

#[test]
fn test_descending_order() {
    let cmp = Comparer::with_order(SortOrder::Descending);
    let mut names = vec!["a1", "a10", "a2"];
    cmp.sort(&mut names);
    assert_eq!(names, ["a10", "a2", "a1"]);
}

#[test]
fn test_sort_by_key() {
    struct Folder {
        name: &'static str,
    }
    let mut folders = vec![Folder { name: "Take 12" }, Folder { name: "Take 3" }];
    Comparer::default().sort_by_key(&mut folders, |f| f.name);
    assert_eq!(folders[0].name, "Take 3");
}
