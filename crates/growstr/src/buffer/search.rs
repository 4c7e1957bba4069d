//! Read-only queries: substring and element search, three-way comparison.
//!
//! Every search reports failure with the not-found sentinel, which equals
//! `len()` at the time of the call.

use core::{cmp::Ordering, ptr};

use super::{Buffer, fragment};
use crate::element::Element;

impl<T: Element> Buffer<T> {
    /// Index of the first occurrence of `needle`, or `len()` when absent.
    ///
    /// An empty needle is never found.
    #[must_use]
    pub fn find<S: AsRef<[T]> + ?Sized>(&self, needle: &S) -> usize {
        self.find_within(needle, 0, usize::MAX)
    }

    /// Index of the first occurrence of `needle` starting at or after
    /// `from`, or `len()`.
    #[must_use]
    pub fn find_from<S: AsRef<[T]> + ?Sized>(&self, needle: &S, from: usize) -> usize {
        self.find_within(needle, from, usize::MAX)
    }

    /// Like [`Buffer::find_from`], but tries at most `within` start
    /// positions.
    #[must_use]
    pub fn find_within<S: AsRef<[T]> + ?Sized>(
        &self,
        needle: &S,
        from: usize,
        within: usize,
    ) -> usize {
        let needle = needle.as_ref();
        let haystack = self.as_slice();
        if needle.is_empty() || needle.len() > haystack.len() {
            return self.len;
        }
        let last_start = haystack.len() - needle.len();
        if from > last_start {
            return self.len;
        }
        haystack[from..]
            .windows(needle.len())
            .take(within)
            .position(|window| window == needle)
            .map_or(self.len, |offset| from + offset)
    }

    /// Whether `needle` occurs anywhere in the content.
    #[must_use]
    pub fn contains<S: AsRef<[T]> + ?Sized>(&self, needle: &S) -> bool {
        self.find(needle) != self.len
    }

    /// Index of the first `value`, or `len()`.
    #[must_use]
    pub fn find_elem(&self, value: T) -> usize {
        self.find_elem_within(value, 0, self.len)
    }

    /// Index of the first `value` at or after `from`, or `len()`.
    #[must_use]
    pub fn find_elem_from(&self, value: T, from: usize) -> usize {
        self.find_elem_within(value, from, self.len)
    }

    /// Index of the first `value` among `count` elements starting at
    /// `from`, or `len()`. `count` is clamped to the buffer.
    #[must_use]
    pub fn find_elem_within(&self, value: T, from: usize, count: usize) -> usize {
        let Some(window) = fragment(self.len, from, count) else {
            return self.len;
        };
        let start = window.start;
        self.as_slice()[window]
            .iter()
            .position(|&el| el == value)
            .map_or(self.len, |offset| start + offset)
    }

    /// Index of the last `value`, or `len()`.
    #[must_use]
    pub fn rfind_elem(&self, value: T) -> usize {
        self.rfind_elem_within(value, 0, self.len)
    }

    /// Index of the last `value` among `count` elements starting at `from`,
    /// or `len()`.
    #[must_use]
    pub fn rfind_elem_within(&self, value: T, from: usize, count: usize) -> usize {
        let Some(window) = fragment(self.len, from, count) else {
            return self.len;
        };
        let start = window.start;
        self.as_slice()[window]
            .iter()
            .rposition(|&el| el == value)
            .map_or(self.len, |offset| start + offset)
    }

    /// Three-way comparison of the whole content against `other`.
    ///
    /// Returns the signed difference of the first mismatching pair, with the
    /// terminator standing in past the end of the shorter operand.
    /// Negative sorts before `other`, zero is equal, positive sorts after.
    ///
    /// ```rust
    /// use growstr::ByteBuffer;
    ///
    /// let buf = ByteBuffer::from("apple");
    /// assert!(buf.compare("apricot") < 0);
    /// assert_eq!(buf.compare("apple"), 0);
    /// assert!(buf.compare("app") > 0);
    /// ```
    #[must_use]
    pub fn compare<S: AsRef<[T]> + ?Sized>(&self, other: &S) -> i64 {
        compare_slices(self.as_slice(), other.as_ref())
    }

    /// Compares only the first `count` elements of each operand.
    #[must_use]
    pub fn compare_n<S: AsRef<[T]> + ?Sized>(&self, other: &S, count: usize) -> i64 {
        self.compare_ranges(0, count, other, 0, count)
    }

    /// Compares this buffer's first `count` elements against `count`
    /// elements of `other` starting at `start`.
    #[must_use]
    pub fn compare_with_range<S: AsRef<[T]> + ?Sized>(
        &self,
        other: &S,
        start: usize,
        count: usize,
    ) -> i64 {
        self.compare_ranges(0, count, other, start, count)
    }

    /// Compares `count1` elements from `pos1` against `count2` elements of
    /// `other` from `pos2`. Both ranges are clamped to their operands; a
    /// start past the end selects nothing.
    #[must_use]
    pub fn compare_ranges<S: AsRef<[T]> + ?Sized>(
        &self,
        pos1: usize,
        count1: usize,
        other: &S,
        pos2: usize,
        count2: usize,
    ) -> i64 {
        let other = other.as_ref();
        compare_slices(
            clamp_to(self.as_slice(), pos1, count1),
            clamp_to(other, pos2, count2),
        )
    }
}

fn clamp_to<T>(seq: &[T], start: usize, count: usize) -> &[T] {
    match fragment(seq.len(), start, count) {
        Some(range) => &seq[range],
        None => &[],
    }
}

/// Lexicographic difference of two fragments.
///
/// When one is a strict prefix of the other the result is the difference
/// against the terminator, pushed to at least magnitude one so that interior
/// terminator values still order shorter before longer.
fn compare_slices<T: Element>(lhs: &[T], rhs: &[T]) -> i64 {
    if ptr::eq(lhs, rhs) {
        return 0;
    }
    if let Some((&a, &b)) = lhs.iter().zip(rhs).find(|(a, b)| a != b) {
        return a.diff(b);
    }
    let shared = lhs.len().min(rhs.len());
    match lhs.len().cmp(&rhs.len()) {
        Ordering::Equal => 0,
        Ordering::Less => T::TERMINATOR.diff(rhs[shared]).min(-1),
        Ordering::Greater => lhs[shared].diff(T::TERMINATOR).max(1),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::{ByteBuffer, CharBuffer, WideBuffer};

    #[test]
    fn banana_scenario() {
        let buf = ByteBuffer::from("banana");
        assert_eq!(buf.find("ana"), 1);
        assert_eq!(buf.find_from("ana", 2), 3);
        assert_eq!(buf.find_from("ana", 4), buf.len());
    }

    #[rstest]
    #[case("", 6)]
    #[case("bananas", 6)]
    #[case("x", 6)]
    #[case("b", 0)]
    #[case("nana", 2)]
    fn find_or_sentinel(#[case] needle: &str, #[case] expected: usize) {
        let buf = ByteBuffer::from("banana");
        assert_eq!(buf.find(needle), expected);
    }

    #[test]
    fn find_on_empty_buffer_is_sentinel() {
        let buf = ByteBuffer::new();
        assert_eq!(buf.find("a"), 0);
        assert_eq!(buf.find_elem(b'a'), 0);
        assert_eq!(buf.rfind_elem(b'a'), 0);
    }

    #[test]
    fn find_within_limits_start_positions() {
        let buf = ByteBuffer::from("aaaab");
        assert_eq!(buf.find_within("ab", 0, 3), buf.len());
        assert_eq!(buf.find_within("ab", 0, 4), 3);
        assert_eq!(buf.find_within("ab", 1, 3), 3);
        assert_eq!(buf.find_within("ab", 0, 0), buf.len());
    }

    #[test]
    fn contains_needle() {
        let buf = CharBuffer::from("needle in haystack");
        assert!(buf.contains(&['h', 'a', 'y']));
        assert!(!buf.contains(&CharBuffer::from("straw")));
    }

    #[test]
    fn element_search_picks_first_match() {
        let buf = ByteBuffer::from("abcabc");
        assert_eq!(buf.find_elem(b'a'), 0);
        assert_eq!(buf.find_elem_from(b'a', 1), 3);
        assert_eq!(buf.find_elem_within(b'c', 0, 2), buf.len());
        assert_eq!(buf.find_elem_within(b'c', 0, 3), 2);
        assert_eq!(buf.find_elem_within(b'c', 1, 100), 2);
        assert_eq!(buf.find_elem_from(b'a', 7), buf.len());
    }

    #[test]
    fn reverse_element_search_picks_last_match() {
        let buf = ByteBuffer::from("abcabc");
        assert_eq!(buf.rfind_elem(b'a'), 3);
        assert_eq!(buf.rfind_elem_within(b'a', 0, 3), 0);
        assert_eq!(buf.rfind_elem_within(b'z', 0, 6), buf.len());
    }

    #[rstest]
    #[case("abc", "abc", 0)]
    #[case("abc", "abd", -1)]
    #[case("abd", "abc", 1)]
    #[case("ab", "abc", -i64::from(b'c'))]
    #[case("abc", "ab", i64::from(b'c'))]
    #[case("", "", 0)]
    fn compare_signed_difference(#[case] lhs: &str, #[case] rhs: &str, #[case] expected: i64) {
        assert_eq!(ByteBuffer::from(lhs).compare(rhs), expected);
    }

    #[test]
    fn compare_prefix_with_interior_terminator() {
        let short = WideBuffer::from_slice(&[1, 2]);
        let long = WideBuffer::from_slice(&[1, 2, 0]);
        assert_eq!(short.compare(&long), -1);
        assert_eq!(long.compare(&short), 1);
        assert_ne!(short, long);
        assert!(short < long);
    }

    #[test]
    fn compare_with_self_short_circuits() {
        let buf = ByteBuffer::from("same");
        assert_eq!(buf.compare(&buf), 0);
        assert_eq!(buf.compare_ranges(0, 4, &buf, 0, 4), 0);
    }

    #[test]
    fn compare_ranges_clamp() {
        let buf = ByteBuffer::from("Hello world");
        assert_eq!(buf.compare_n("Help", 3), 0);
        assert!(buf.compare_n("Help", 4) < 0);
        assert_eq!(buf.compare_with_range("say Hello", 4, 5), 0);
        assert_eq!(buf.compare_ranges(6, 100, "world", 0, 5), 0);
        assert_eq!(buf.compare_ranges(20, 1, "", 0, 0), 0);
        assert!(buf.compare_ranges(6, 5, "wor", 0, 5) > 0);
    }

    #[test]
    fn compare_chars_by_scalar_value() {
        let buf = CharBuffer::from("é");
        assert_eq!(buf.compare(&['e']), i64::from(u32::from('é')) - i64::from(u32::from('e')));
    }
}
