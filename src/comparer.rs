use std::cmp::Ordering;

use tracing::trace;

use crate::classify::{classify, CharKind};
use crate::convert::{read_run, NumeralRun};
use crate::normalize::normalize;
use crate::options::{ComparerOptions, SortOrder};

/// Words for relative position, in their natural order.
const POSITION_WORDS: &str = "上前中下後";

/// Natural-order string comparer.
///
/// Options are fixed at construction; `compare` keeps no state between calls,
/// so one comparer can be shared across threads.
///
/// The order is transitive except around Roman numeral letters. A lone
/// `X` or `D` is compared as a letter against text but as a number against
/// other numerals, so cycles such as `"二" < "x" < "万" < "二"` exist. The
/// sorting helpers here use a merge sort that accepts such cycles instead of
/// `slice::sort_by`, which may panic on them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Comparer {
    order: SortOrder,
    options: ComparerOptions,
}

impl Comparer {
    pub fn new(order: SortOrder, options: ComparerOptions) -> Self {
        Self { order, options }
    }

    pub fn with_order(order: SortOrder) -> Self {
        Self::new(order, ComparerOptions::default())
    }

    pub fn with_options(options: ComparerOptions) -> Self {
        Self::new(SortOrder::default(), options)
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn options(&self) -> ComparerOptions {
        self.options
    }

    /// Three-way comparison in the configured direction.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let ord = self.compare_ascending(a, b);
        match self.order {
            SortOrder::Descending => ord.reverse(),
            SortOrder::Ascending | SortOrder::None => ord,
        }
    }

    /// [`compare`](Self::compare) as `-1`, `0` or `1`.
    pub fn compare_sign(&self, a: &str, b: &str) -> i32 {
        self.compare(a, b) as i32
    }

    pub fn sort<S: AsRef<str>>(&self, items: &mut [S]) {
        merge_sort_by(items, |a, b| self.compare(a.as_ref(), b.as_ref()));
    }

    pub fn sort_by_key<T, K, F>(&self, items: &mut [T], mut key: F)
    where
        K: AsRef<str>,
        F: FnMut(&T) -> K,
    {
        merge_sort_by(items, |a, b| self.compare(key(a).as_ref(), key(b).as_ref()));
    }

    pub fn sorted<I>(&self, items: I) -> Vec<I::Item>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut out: Vec<I::Item> = items.into_iter().collect();
        self.sort(&mut out);
        out
    }

    fn compare_ascending(&self, a: &str, b: &str) -> Ordering {
        // Empty strings sort first.
        match (a.is_empty(), b.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }

        let left: Vec<char> = normalize(a, self.options).chars().collect();
        let right: Vec<char> = normalize(b, self.options).chars().collect();
        let filter = self.options.numeral_filter();
        let mut l = Cursor::new(&left);
        let mut r = Cursor::new(&right);

        while !l.at_end() && !r.at_end() {
            let k1 = l.classify(filter);
            let k2 = r.classify(filter);

            // Both sides start numerals: compare whole runs by value.
            let comparable = k1.is_numeral()
                && k2.is_numeral()
                && (self.options.ignore_number() || k1 == k2);
            if comparable {
                if let (Some(x), Some(y)) = (l.read_run(), r.read_run()) {
                    trace!(?k1, ?k2, left = x.value, right = y.value, "numeral runs");
                    match x.value.cmp(&y.value) {
                        Ordering::Equal => {
                            l.advance(x.len);
                            r.advance(y.len);
                            continue;
                        }
                        ord => return ord,
                    }
                }
                trace!(?k1, ?k2, pos = l.pos, "numeral run rejected, comparing characters");
            } else if k1.is_numeral() != k2.is_numeral()
                && k1 != CharKind::RomanAscii
                && k2 != CharKind::RomanAscii
            {
                // Only one side is a numeral; a lone Roman letter is usually just a letter.
                trace!(?k1, ?k2, "numeral sorts after text");
                return if k1.is_numeral() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                };
            }

            // Fall back to one character.
            match compare_char(l.current(), r.current()) {
                Ordering::Equal => {
                    l.advance(1);
                    r.advance(1);
                }
                ord => return ord,
            }
        }

        // Common part matched: the shorter string comes first.
        match (l.at_end(), r.at_end()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            _ => Ordering::Greater,
        }
    }
}

/// Walk position in one normalized string, with the classification state
/// carried from the previous step.
struct Cursor<'a> {
    chars: &'a [char],
    pos: usize,
    kind: CharKind,
}

impl<'a> Cursor<'a> {
    fn new(chars: &'a [char]) -> Self {
        Self {
            chars,
            pos: 0,
            kind: CharKind::None,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn current(&self) -> char {
        self.chars[self.pos]
    }

    fn classify(&mut self, filter: ComparerOptions) -> CharKind {
        let previous = self.pos.checked_sub(1).map(|i| self.chars[i]);
        self.kind = classify(self.current(), previous, self.kind).filtered(filter);
        self.kind
    }

    fn read_run(&self) -> Option<NumeralRun> {
        read_run(self.kind, &self.chars[self.pos..])
    }

    fn advance(&mut self, n: usize) {
        self.pos += n;
    }
}

/// Stable bottom-up merge sort.
///
/// Only ever asks `compare` about pairs and never checks the answers against
/// each other, so an inconsistent order yields some permutation instead of a
/// panic.
fn merge_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = items.len();
    if n < 2 {
        return;
    }
    let mut order: Vec<usize> = (0..n).collect();
    let mut buf = vec![0; n];
    let mut width = 1;
    while width < n {
        let mut start = 0;
        while start < n {
            let mid = (start + width).min(n);
            let end = (start + 2 * width).min(n);
            let (mut i, mut j) = (start, mid);
            for slot in &mut buf[start..end] {
                let take_right = j < end
                    && (i >= mid || compare(&items[order[j]], &items[order[i]]).is_lt());
                if take_right {
                    *slot = order[j];
                    j += 1;
                } else {
                    *slot = order[i];
                    i += 1;
                }
            }
            start = end;
        }
        order.copy_from_slice(&buf);
        width *= 2;
    }
    apply_order(items, &order);
}

/// Rearrange `items` so that position `k` holds the element that was at `order[k]`.
fn apply_order<T>(items: &mut [T], order: &[usize]) {
    let mut placed = vec![false; items.len()];
    for start in 0..items.len() {
        if placed[start] {
            continue;
        }
        let mut cur = start;
        loop {
            placed[cur] = true;
            let next = order[cur];
            if next == start {
                break;
            }
            items.swap(cur, next);
            cur = next;
        }
    }
}

/// Single-character fallback: position words by their list order, anything
/// else by code point.
pub fn compare_char(a: char, b: char) -> Ordering {
    let rank = |c: char| POSITION_WORDS.chars().position(|w| w == c);
    match (rank(a), rank(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => a.cmp(&b),
    }
}
