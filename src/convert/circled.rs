use super::NumeralConverter;

/// Value of a circled, parenthesized or dotted numeral symbol.
pub fn circled_value(c: char) -> Option<i64> {
    let cp = c as u32;
    let value = match cp {
        0x2460..=0x2473 => cp - 0x2460 + 1,  // ① .. ⑳
        0x2474..=0x2487 => cp - 0x2474 + 1,  // ⑴ .. ⒇
        0x2488..=0x249B => cp - 0x2488 + 1,  // ⒈ .. ⒛
        0x3251..=0x325F => cp - 0x3251 + 21, // ㉑ .. ㉟
        0x32B1..=0x32BF => cp - 0x32B1 + 36, // ㊱ .. ㊿
        0x3220..=0x3229 => cp - 0x3220 + 1,  // ㈠ .. ㈩
        0x3280..=0x3289 => cp - 0x3280 + 1,  // ㊀ .. ㊉
        _ => return None,
    };
    Some(value as i64)
}

/// A single numeral symbol. Runs never extend past one character.
#[derive(Debug, Clone)]
pub struct CircledConverter {
    value: i64,
}

impl CircledConverter {
    pub fn new(seed: char) -> Option<Self> {
        circled_value(seed).map(|value| Self { value })
    }
}

impl NumeralConverter for CircledConverter {
    fn add_char(&mut self, _c: char) -> bool {
        false
    }

    fn value(&self) -> i64 {
        self.value
    }

    fn len(&self) -> usize {
        1
    }

    fn is_error(&self) -> bool {
        false
    }
}
