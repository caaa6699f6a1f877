//! Input folding applied once per string before comparison.

use crate::options::ComparerOptions;

/// Rewrite `s` into its comparison form.
///
/// Passes run in a fixed order: whitespace removal, fullwidth to halfwidth,
/// uppercasing, then kana folding. Width folding has to come before kana
/// folding, which consumes halfwidth katakana.
pub fn normalize(s: &str, options: ComparerOptions) -> String {
    let mut out = if options.ignore_space() {
        s.chars().filter(|c| !c.is_whitespace()).collect()
    } else {
        s.to_owned()
    };
    if options.ignore_wide() {
        out = out.chars().map(to_halfwidth).collect();
    }
    if options.ignore_case() {
        out = out.chars().map(to_uppercase).collect();
    }
    if options.ignore_kana() {
        out = fold_kana(&out);
    }
    out
}

/// Fullwidth ASCII and the common CJK brackets to their halfwidth forms.
pub fn to_halfwidth(c: char) -> char {
    match c {
        '！'..='～' => shift(c, -0xFEE0),
        '、' => '､',
        '。' => '｡',
        '〈' | '《' => '<',
        '〉' | '》' => '>',
        '「' | '『' => '｢',
        '」' | '』' => '｣',
        '【' | '〔' => '[',
        '】' | '〕' => ']',
        _ => c,
    }
}

/// Ordinal uppercasing of ASCII and fullwidth Latin letters only.
pub fn to_uppercase(c: char) -> char {
    match c {
        'a'..='z' => c.to_ascii_uppercase(),
        'ａ'..='ｚ' => shift(c, -0x20),
        _ => c,
    }
}

/// Halfwidth katakana U+FF66..U+FF9F, in code point order, as fullwidth.
const FULLWIDTH_KANA: &str = "ヲァィゥェォャュョッーアイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワン゛゜";

fn halfwidth_kana(c: char) -> char {
    let index = c as u32 - 0xFF66;
    FULLWIDTH_KANA.chars().nth(index as usize).unwrap_or(c)
}

/// Base katakana followed by a halfwidth voicing mark, combined.
fn compose_voiced(base: char, mark: char) -> Option<char> {
    let full = halfwidth_kana(base);
    match mark {
        'ﾞ' if full == 'ウ' => Some('ヴ'),
        'ﾞ' if "カキクケコサシスセソタチツテトハヒフヘホ".contains(full) => Some(shift(full, 1)),
        'ﾟ' if "ハヒフヘホ".contains(full) => Some(shift(full, 2)),
        _ => None,
    }
}

/// Hiragana and halfwidth katakana to fullwidth katakana.
pub fn fold_kana(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            'ぁ'..='ゖ' | 'ゝ' | 'ゞ' => out.push(shift(c, 0x60)),
            '\u{FF66}'..='\u{FF9F}' => {
                if let Some(voiced) = chars.get(i + 1).and_then(|&mark| compose_voiced(c, mark)) {
                    out.push(voiced);
                    i += 2;
                    continue;
                }
                out.push(halfwidth_kana(c));
            }
            _ => out.push(c),
        }
        i += 1;
    }
    out
}

fn shift(c: char, delta: i32) -> char {
    char::from_u32((c as i64 + delta as i64) as u32).unwrap_or(c)
}
