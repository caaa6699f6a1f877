use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::comparer::Comparer;
use crate::errors::{NaturalSortError, Result};

bitflags! {
    /// Comparison options: which numeral kinds are recognised, and which
    /// textual differences are ignored. The two groups are independent.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ComparerOptions: u32 {
        /// Arabic digits, ASCII and fullwidth.
        const ARABIC = 0x1;
        /// Roman numerals spelled with ASCII or fullwidth letters.
        const ROMAN_ASCII = 0x2;
        /// Roman numerals from the U+2160 block.
        const ROMAN_WIDE = 0x4;
        /// Circled, parenthesized and dotted numerals.
        const CIRCLED = 0x8;
        /// Kanji numerals.
        const KANJI = 0x10;
        const NUMBER_ALL = Self::ARABIC.bits()
            | Self::ROMAN_ASCII.bits()
            | Self::ROMAN_WIDE.bits()
            | Self::CIRCLED.bits()
            | Self::KANJI.bits();

        /// Whitespace is dropped before comparing.
        const IGNORE_SPACE = 0x10000;
        /// Numerals of different notations compare by value.
        const IGNORE_NUMBER = 0x20000;
        /// Fullwidth and halfwidth forms compare equal.
        const IGNORE_WIDE = 0x40000;
        /// Letter case is folded.
        const IGNORE_CASE = 0x80000;
        /// Hiragana and katakana compare equal.
        const IGNORE_KANA = 0x100000;
        const IGNORE_ALL = Self::IGNORE_SPACE.bits()
            | Self::IGNORE_NUMBER.bits()
            | Self::IGNORE_WIDE.bits()
            | Self::IGNORE_CASE.bits()
            | Self::IGNORE_KANA.bits();

        const DEFAULT = Self::NUMBER_ALL.bits()
            | Self::IGNORE_SPACE.bits()
            | Self::IGNORE_NUMBER.bits()
            | Self::IGNORE_WIDE.bits()
            | Self::IGNORE_CASE.bits();
    }
}

impl Default for ComparerOptions {
    fn default() -> Self {
        ComparerOptions::DEFAULT
    }
}

impl ComparerOptions {
    /// The numeral-kind half of the set.
    pub fn numeral_filter(&self) -> ComparerOptions {
        self.intersection(ComparerOptions::NUMBER_ALL)
    }

    /// The ignore-flag half of the set.
    pub fn ignore_flags(&self) -> ComparerOptions {
        self.intersection(ComparerOptions::IGNORE_ALL)
    }

    pub fn ignore_space(&self) -> bool {
        self.contains(ComparerOptions::IGNORE_SPACE)
    }

    pub fn ignore_number(&self) -> bool {
        self.contains(ComparerOptions::IGNORE_NUMBER)
    }

    pub fn ignore_wide(&self) -> bool {
        self.contains(ComparerOptions::IGNORE_WIDE)
    }

    pub fn ignore_case(&self) -> bool {
        self.contains(ComparerOptions::IGNORE_CASE)
    }

    pub fn ignore_kana(&self) -> bool {
        self.contains(ComparerOptions::IGNORE_KANA)
    }

    /// Parse a comma-separated list of numeral kinds, e.g. `"arabic,kanji"`.
    /// `all` and `none` are accepted.
    pub fn parse_kinds(list: &str) -> Result<ComparerOptions> {
        parse_names(list, ComparerOptions::NUMBER_ALL, kind_by_name)
    }

    /// Parse a comma-separated list of ignore flags, e.g. `"case,width"`.
    pub fn parse_ignores(list: &str) -> Result<ComparerOptions> {
        parse_names(list, ComparerOptions::IGNORE_ALL, ignore_by_name)
    }
}

fn kind_by_name(name: &str) -> Option<ComparerOptions> {
    match name {
        "arabic" | "number" => Some(ComparerOptions::ARABIC),
        "roman" | "roman-ascii" => Some(ComparerOptions::ROMAN_ASCII),
        "roman-wide" | "wide-roman" => Some(ComparerOptions::ROMAN_WIDE),
        "circled" | "circle" => Some(ComparerOptions::CIRCLED),
        "kanji" => Some(ComparerOptions::KANJI),
        _ => None,
    }
}

fn ignore_by_name(name: &str) -> Option<ComparerOptions> {
    match name {
        "space" | "whitespace" => Some(ComparerOptions::IGNORE_SPACE),
        "number" | "numeral" => Some(ComparerOptions::IGNORE_NUMBER),
        "wide" | "width" => Some(ComparerOptions::IGNORE_WIDE),
        "case" => Some(ComparerOptions::IGNORE_CASE),
        "kana" => Some(ComparerOptions::IGNORE_KANA),
        _ => None,
    }
}

fn parse_names(
    list: &str,
    all: ComparerOptions,
    lookup: fn(&str) -> Option<ComparerOptions>,
) -> Result<ComparerOptions> {
    let mut out = ComparerOptions::empty();
    for raw in list.split(',') {
        let name = raw.trim().to_ascii_lowercase();
        match name.as_str() {
            "" | "none" => {}
            "all" => out |= all,
            other => {
                out |= lookup(other).ok_or_else(|| NaturalSortError::UnknownOption(other.to_string()))?
            }
        }
    }
    Ok(out)
}

/// Direction of the ordering. `None` behaves as `Ascending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    None,
    #[default]
    Ascending,
    Descending,
}

impl FromStr for SortOrder {
    type Err = NaturalSortError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(SortOrder::None),
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            other => Err(NaturalSortError::UnknownOrder(other.to_string())),
        }
    }
}

/// On-disk comparer configuration.
///
/// ```json
/// { "order": "descending", "kinds": ["arabic", "kanji"], "ignore": ["case"] }
/// ```
///
/// Missing fields keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparerConfig {
    pub order: SortOrder,
    pub kinds: Option<Vec<String>>,
    pub ignore: Option<Vec<String>>,
}

impl ComparerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn options(&self) -> Result<ComparerOptions> {
        let kinds = match &self.kinds {
            Some(names) => ComparerOptions::parse_kinds(&names.join(","))?,
            None => ComparerOptions::DEFAULT.numeral_filter(),
        };
        let ignore = match &self.ignore {
            Some(names) => ComparerOptions::parse_ignores(&names.join(","))?,
            None => ComparerOptions::DEFAULT.ignore_flags(),
        };
        Ok(kinds | ignore)
    }

    pub fn build(&self) -> Result<Comparer> {
        Ok(Comparer::new(self.order, self.options()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_leaves_kana_distinct() {
        let opts = ComparerOptions::default();
        assert_eq!(opts.numeral_filter(), ComparerOptions::NUMBER_ALL);
        assert!(opts.ignore_space() && opts.ignore_number() && opts.ignore_wide() && opts.ignore_case());
        assert!(!opts.ignore_kana());
    }

    #[test]
    fn bit_values_are_stable() {
        assert_eq!(ComparerOptions::NUMBER_ALL.bits(), 0x1F);
        assert_eq!(ComparerOptions::IGNORE_ALL.bits(), 0x1F0000);
        assert_eq!(ComparerOptions::DEFAULT.bits(), 0xF001F);
    }

    #[test]
    fn parse_name_lists() {
        let kinds = ComparerOptions::parse_kinds("Arabic, kanji").unwrap();
        assert_eq!(kinds, ComparerOptions::ARABIC | ComparerOptions::KANJI);
        assert_eq!(ComparerOptions::parse_kinds("all").unwrap(), ComparerOptions::NUMBER_ALL);
        assert_eq!(ComparerOptions::parse_ignores("none").unwrap(), ComparerOptions::empty());
        assert!(matches!(
            ComparerOptions::parse_ignores("case,bogus"),
            Err(NaturalSortError::UnknownOption(name)) if name == "bogus"
        ));
    }

    #[test]
    fn sort_order_from_str() {
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Descending);
        assert_eq!("None".parse::<SortOrder>().unwrap(), SortOrder::None);
        assert!("sideways".parse::<SortOrder>().is_err());
    }

    #[test]
    fn config_fills_defaults() {
        let cfg = ComparerConfig::from_json(r#"{"ignore":["kana"]}"#).unwrap();
        assert_eq!(cfg.order, SortOrder::Ascending);
        assert_eq!(
            cfg.options().unwrap(),
            ComparerOptions::NUMBER_ALL | ComparerOptions::IGNORE_KANA
        );
    }

    #[test]
    fn config_rejects_bad_json() {
        assert!(matches!(
            ComparerConfig::from_json("{order:"),
            Err(NaturalSortError::Config(_))
        ));
    }
}
