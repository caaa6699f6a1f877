use super::NumeralConverter;

/// Decimal digits with optional thousands separators, e.g. `12,345`.
///
/// Digits and separator come from the seed's width family: ASCII `0-9` with
/// `,`, or fullwidth `０-９` with `，`.
#[derive(Debug, Clone)]
pub struct ArabicConverter {
    zero: char,
    value: i64,
    len: usize,
    /// Digits read before the first separator.
    lead_digits: usize,
    group: Option<Group>,
    overlong: bool,
}

/// Digit group opened by the most recent separator.
#[derive(Debug, Clone, Copy)]
struct Group {
    digits: usize,
    value_before: i64,
    len_before: usize,
}

impl ArabicConverter {
    pub fn new(seed: char) -> Option<Self> {
        let zero = match seed {
            '0'..='9' => '0',
            '０'..='９' => '０',
            _ => return None,
        };
        let value = digit(seed, zero)?;
        Some(Self {
            zero,
            value,
            len: 1,
            lead_digits: 1,
            group: None,
            overlong: false,
        })
    }

    fn separator(&self) -> char {
        if self.zero == '0' {
            ','
        } else {
            '，'
        }
    }

    /// Prefix up to the last separator whose group is complete.
    fn committed(&self) -> (i64, usize) {
        match self.group {
            Some(g) if self.overlong || g.digits != 3 => (g.value_before, g.len_before),
            _ => (self.value, self.len),
        }
    }
}

fn digit(c: char, zero: char) -> Option<i64> {
    let offset = (c as u32).checked_sub(zero as u32)?;
    (offset <= 9).then_some(offset as i64)
}

impl NumeralConverter for ArabicConverter {
    fn add_char(&mut self, c: char) -> bool {
        if self.overlong {
            return false;
        }
        if let Some(d) = digit(c, self.zero) {
            match &mut self.group {
                Some(g) if g.digits == 3 => {
                    self.overlong = true;
                    return false;
                }
                Some(g) => g.digits += 1,
                None => self.lead_digits += 1,
            }
            self.value = self.value.saturating_mul(10).saturating_add(d);
            self.len += 1;
            return true;
        }
        if c == self.separator() {
            let accepted = match self.group {
                None => self.lead_digits <= 3,
                Some(g) => g.digits == 3,
            };
            if !accepted {
                return false;
            }
            self.group = Some(Group {
                digits: 0,
                value_before: self.value,
                len_before: self.len,
            });
            self.len += 1;
            return true;
        }
        false
    }

    fn value(&self) -> i64 {
        self.committed().0
    }

    fn len(&self) -> usize {
        self.committed().1
    }

    fn is_error(&self) -> bool {
        false
    }
}
