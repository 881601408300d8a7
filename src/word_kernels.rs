//! Word buffer helpers and the carry/borrow kernels the engines are built on.
//!
//! A magnitude is a little-endian run of `u32` words. Kernels never allocate
//! and only write inside the slices they are handed, so callers size every
//! destination up front.

use std::cmp::Ordering;

use crate::big_num_constants::WORD_BITS;

#[inline(always)]
pub(crate) fn make_u64(low: u32, high: u32) -> u64 {
    u64::from(low) | (u64::from(high) << WORD_BITS)
}

/// Significant word count: the run length without its zero top words.
pub(crate) fn count_words(words: &[u32]) -> usize {
    words.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1)
}

/// Rounds a word count up to the next even number.
#[inline(always)]
pub(crate) fn roundup_size(n: usize) -> usize {
    n + (n & 1)
}

pub(crate) fn bits_to_words(bits: u64) -> usize {
    bits.div_ceil(u64::from(WORD_BITS)) as usize
}

/// Index of the highest set bit plus one, 0 for a zero word.
#[inline(always)]
pub(crate) fn bit_precision(word: u32) -> u32 {
    WORD_BITS - word.leading_zeros()
}

/// Appends `carry` as a new top word, keeping the buffer length even.
pub(crate) fn grow_for_carry(words: &mut Vec<u32>, carry: u32) {
    let old_len = words.len();
    words.resize(roundup_size(old_len + 1), 0);
    words[old_len] = carry;
}

// 比较
pub(crate) fn compare(a: &[u32], b: &[u32]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    a.iter().rev().cmp(b.iter().rev())
}

/// Compares `a` against `b` when `a` is exactly one word longer.
pub(crate) fn compare_with_one_bigger(a: &[u32], b: &[u32]) -> Ordering {
    debug_assert_eq!(a.len(), b.len() + 1);
    match a.split_last() {
        Some((&top, rest)) if top == 0 => compare(rest, b),
        _ => Ordering::Greater,
    }
}

// 加法
/// `c = a + b`, returning the carry out of the top word.
pub(crate) fn add(c: &mut [u32], a: &[u32], b: &[u32]) -> u32 {
    debug_assert!(a.len() == b.len() && c.len() == a.len());
    let mut carry = 0u64;
    for ((c, &a), &b) in c.iter_mut().zip(a).zip(b) {
        carry += u64::from(a) + u64::from(b);
        *c = carry as u32;
        carry >>= WORD_BITS;
    }
    carry as u32
}

/// `a += b` over runs of equal length.
pub(crate) fn add_in_place(a: &mut [u32], b: &[u32]) -> u32 {
    debug_assert_eq!(a.len(), b.len());
    let mut carry = 0u64;
    for (a, &b) in a.iter_mut().zip(b) {
        carry += u64::from(*a) + u64::from(b);
        *a = carry as u32;
        carry >>= WORD_BITS;
    }
    carry as u32
}

/// `a += b` where `b` may be shorter; the carry ripples through the rest of `a`.
pub(crate) fn add_uneven_in_place(a: &mut [u32], b: &[u32]) -> u32 {
    debug_assert!(a.len() >= b.len());
    let (low, high) = a.split_at_mut(b.len());
    let carry = add_in_place(low, b);
    increment(high, carry)
}

/// Adds `n` at the bottom of the run. Returns 1 when the run overflowed.
pub(crate) fn increment(words: &mut [u32], n: u32) -> u32 {
    let mut carry = n;
    for w in words.iter_mut() {
        if carry == 0 {
            break;
        }
        let (sum, overflow) = w.overflowing_add(carry);
        *w = sum;
        carry = u32::from(overflow);
    }
    u32::from(carry != 0)
}

// 减法
/// `c = a - b`, returning the borrow out of the top word.
pub(crate) fn subtract(c: &mut [u32], a: &[u32], b: &[u32]) -> u32 {
    debug_assert!(a.len() == b.len() && c.len() == a.len());
    let mut borrow = 0u32;
    for ((c, &a), &b) in c.iter_mut().zip(a).zip(b) {
        let (d, o1) = a.overflowing_sub(b);
        let (d, o2) = d.overflowing_sub(borrow);
        *c = d;
        borrow = u32::from(o1 | o2);
    }
    borrow
}

/// `a -= b` over runs of equal length.
pub(crate) fn subtract_in_place(a: &mut [u32], b: &[u32]) -> u32 {
    debug_assert_eq!(a.len(), b.len());
    let mut borrow = 0u32;
    for (a, &b) in a.iter_mut().zip(b) {
        let (d, o1) = a.overflowing_sub(b);
        let (d, o2) = d.overflowing_sub(borrow);
        *a = d;
        borrow = u32::from(o1 | o2);
    }
    borrow
}

/// `c = a - b` where `a` (and `c`) are one word longer than `b`.
pub(crate) fn subtract_one_bigger_words1(c: &mut [u32], a: &[u32], b: &[u32]) -> u32 {
    let n = a.len();
    debug_assert!(n == b.len() + 1 && c.len() == n);
    let borrow = subtract(&mut c[..n - 1], &a[..n - 1], b);
    c[n - 1] = a[n - 1].wrapping_sub(borrow);
    u32::from(a[n - 1] < borrow)
}

/// `c = a - b` where `b` (and `c`) are one word longer than `a`.
pub(crate) fn subtract_one_bigger_words2(c: &mut [u32], a: &[u32], b: &[u32]) -> u32 {
    let n = b.len();
    debug_assert!(n == a.len() + 1 && c.len() == n);
    let borrow = subtract(&mut c[..n - 1], a, &b[..n - 1]);
    c[n - 1] = 0u32.wrapping_sub(b[n - 1]).wrapping_sub(borrow);
    u32::from(b[n - 1] != 0 || borrow != 0)
}

/// Subtracts `n` at the bottom of the run. Returns 1 when the run underflowed.
pub(crate) fn decrement(words: &mut [u32], n: u32) -> u32 {
    let mut borrow = n;
    for w in words.iter_mut() {
        if borrow == 0 {
            break;
        }
        let (diff, overflow) = w.overflowing_sub(borrow);
        *w = diff;
        borrow = u32::from(overflow);
    }
    u32::from(borrow != 0)
}

/// Negates the run in place as a two's-complement number of `words.len()` words.
pub(crate) fn twos_complement(words: &mut [u32]) {
    decrement(words, 1);
    for w in words.iter_mut() {
        *w = !*w;
    }
}

// 移位
/// Shifts the run left by `shift` (< 32) bits and returns the bits pushed out
/// of the top word, in the low bits of the result.
pub(crate) fn shift_left_by_bits(words: &mut [u32], shift: u32) -> u32 {
    debug_assert!(shift < WORD_BITS);
    if shift == 0 {
        return 0;
    }
    let mut carry = 0u32;
    for w in words.iter_mut() {
        let u = *w;
        *w = (u << shift) | carry;
        carry = u >> (WORD_BITS - shift);
    }
    carry
}

/// Shifts the run right by `shift` (< 32) bits, filling with zeros. The bits
/// pushed out of the bottom word come back in the high bits of the result.
pub(crate) fn shift_right_by_bits(words: &mut [u32], shift: u32) -> u32 {
    debug_assert!(shift < WORD_BITS);
    if shift == 0 {
        return 0;
    }
    shift_right_with_fill(words, shift, 0)
}

/// Like [`shift_right_by_bits`] but fills vacated bits with ones. Only
/// meaningful on a negative two's-complement run.
pub(crate) fn shift_right_by_bits_sign_extend(words: &mut [u32], shift: u32) -> u32 {
    debug_assert!(shift < WORD_BITS);
    if shift == 0 {
        return 0;
    }
    shift_right_with_fill(words, shift, u32::MAX << (WORD_BITS - shift))
}

#[inline(always)]
fn shift_right_with_fill(words: &mut [u32], shift: u32, mut carry: u32) -> u32 {
    for w in words.iter_mut().rev() {
        let u = *w;
        *w = (u >> shift) | carry;
        carry = u << (WORD_BITS - shift);
    }
    carry
}

pub(crate) fn shift_left_by_words(words: &mut [u32], shift: usize) {
    let len = words.len();
    if shift >= len {
        words.fill(0);
        return;
    }
    words.copy_within(..len - shift, shift);
    words[..shift].fill(0);
}

pub(crate) fn shift_right_by_words_sign_extend(words: &mut [u32], shift: usize) {
    let len = words.len();
    if shift >= len {
        words.fill(u32::MAX);
        return;
    }
    words.copy_within(shift.., 0);
    words[len - shift..].fill(u32::MAX);
}

// 单字乘法
/// `product = a * m`, returning the carry word.
pub(crate) fn linear_multiply(product: &mut [u32], a: &[u32], m: u32) -> u32 {
    debug_assert_eq!(product.len(), a.len());
    let m = u64::from(m);
    let mut carry = 0u64;
    for (p, &a) in product.iter_mut().zip(a) {
        carry += u64::from(a) * m;
        *p = carry as u32;
        carry >>= WORD_BITS;
    }
    carry as u32
}

/// `product += a * m`, returning the carry word.
pub(crate) fn linear_multiply_add(product: &mut [u32], a: &[u32], m: u32) -> u32 {
    debug_assert_eq!(product.len(), a.len());
    let m = u64::from(m);
    let mut carry = 0u64;
    for (p, &a) in product.iter_mut().zip(a) {
        // (2^32 - 1)^2 + 2 * (2^32 - 1) fits in u64
        carry += u64::from(a) * m + u64::from(*p);
        *p = carry as u32;
        carry >>= WORD_BITS;
    }
    carry as u32
}
