//! Multiplication engine.
//!
//! Every routine writes a full `a.len() + b.len()` word product into the front
//! of `result`. The recursive routines also take a `temp` arena, at least as
//! large as the product, which they split between their sub-calls so that no
//! two live regions overlap.

use std::cmp::Ordering;

use crate::big_num_constants::{RECURSION_LIMIT, SCHOOLBOOK_LIMIT, WORD_BITS};
use crate::word_kernels::{
    add, add_in_place, add_uneven_in_place, compare, compare_with_one_bigger, count_words,
    decrement, increment, linear_multiply, linear_multiply_add, make_u64, roundup_size,
    shift_left_by_bits, subtract, subtract_in_place, subtract_one_bigger_words1,
    subtract_one_bigger_words2,
};

// 定长乘法
/// Column-wise product of two `N` word operands. With `N` fixed the compiler
/// unrolls both loops and the carry chain stays in one accumulator.
#[inline(always)]
fn comba_multiply<const N: usize>(c: &mut [u32], a: &[u32], b: &[u32]) {
    debug_assert!(a.len() == N && b.len() == N && c.len() >= 2 * N);
    let mut acc: u128 = 0;
    for k in 0..2 * N - 1 {
        let lo = k.saturating_sub(N - 1);
        let hi = k.min(N - 1);
        for i in lo..=hi {
            acc += u128::from(u64::from(a[i]) * u64::from(b[k - i]));
        }
        c[k] = acc as u32;
        acc >>= WORD_BITS;
    }
    c[2 * N - 1] = acc as u32;
}

#[inline(always)]
fn comba_square<const N: usize>(c: &mut [u32], a: &[u32]) {
    debug_assert!(a.len() == N && c.len() >= 2 * N);
    let mut acc: u128 = 0;
    for k in 0..2 * N - 1 {
        let lo = k.saturating_sub(N - 1);
        let hi = k.min(N - 1);
        let mut cross: u128 = 0;
        for i in lo..=hi {
            if i >= k - i {
                break;
            }
            cross += u128::from(u64::from(a[i]) * u64::from(a[k - i]));
        }
        acc += cross << 1;
        if k & 1 == 0 {
            acc += u128::from(u64::from(a[k / 2]) * u64::from(a[k / 2]));
        }
        c[k] = acc as u32;
        acc >>= WORD_BITS;
    }
    c[2 * N - 1] = acc as u32;
}

pub(crate) fn baseline_multiply2(c: &mut [u32], a: &[u32], b: &[u32]) {
    comba_multiply::<2>(c, a, b)
}

pub(crate) fn baseline_multiply4(c: &mut [u32], a: &[u32], b: &[u32]) {
    comba_multiply::<4>(c, a, b)
}

pub(crate) fn baseline_multiply8(c: &mut [u32], a: &[u32], b: &[u32]) {
    comba_multiply::<8>(c, a, b)
}

pub(crate) fn baseline_square2(c: &mut [u32], a: &[u32]) {
    comba_square::<2>(c, a)
}

pub(crate) fn baseline_square4(c: &mut [u32], a: &[u32]) {
    comba_square::<4>(c, a)
}

pub(crate) fn baseline_square8(c: &mut [u32], a: &[u32]) {
    comba_square::<8>(c, a)
}

// 朴素乘法
pub(crate) fn schoolbook_multiply(result: &mut [u32], a: &[u32], b: &[u32]) {
    let (n, m) = (a.len(), b.len());
    debug_assert!(result.len() >= n + m);
    if n == 0 || m == 0 {
        result[..n + m].fill(0);
        return;
    }
    result[m] = linear_multiply(&mut result[..m], b, a[0]);
    for i in 1..n {
        result[i + m] = linear_multiply_add(&mut result[i..i + m], b, a[i]);
    }
}

/// Sums each off-diagonal product once, doubles the total with a one bit
/// shift, then adds the diagonal squares.
pub(crate) fn schoolbook_square(result: &mut [u32], a: &[u32]) {
    let n = a.len();
    debug_assert!(result.len() >= 2 * n);
    let result = &mut result[..2 * n];
    result.fill(0);
    if n == 0 {
        return;
    }
    for i in 0..n - 1 {
        result[i + n] = linear_multiply_add(&mut result[2 * i + 1..i + n], &a[i + 1..], a[i]);
    }
    let out = shift_left_by_bits(result, 1);
    debug_assert_eq!(out, 0);

    let mut carry = 0u64;
    for (i, &w) in a.iter().enumerate() {
        let sq = u64::from(w) * u64::from(w);
        carry += u64::from(result[2 * i]) + (sq & u64::from(u32::MAX));
        result[2 * i] = carry as u32;
        carry >>= WORD_BITS;
        carry += u64::from(result[2 * i + 1]) + (sq >> WORD_BITS);
        result[2 * i + 1] = carry as u32;
        carry >>= WORD_BITS;
    }
    debug_assert_eq!(carry, 0);
}

// 两字乘法
#[inline(always)]
fn load_u128(c: &[u32]) -> u128 {
    c[..4]
        .iter()
        .rev()
        .fold(0u128, |acc, &w| (acc << WORD_BITS) | u128::from(w))
}

#[inline(always)]
fn store_u128(c: &mut [u32], v: u128) {
    for (k, w) in c[..4].iter_mut().enumerate() {
        *w = (v >> (WORD_BITS as usize * k)) as u32;
    }
}

/// Writes `(a1:a0) * (b[i+1]:b[i])` into `c[i..i + 4]` for every fourth `i`
/// in `start..end`.
pub(crate) fn atomic_multiply_opt(c: &mut [u32], a0: u32, a1: u32, b: &[u32], start: usize, end: usize) {
    let a = u128::from(make_u64(a0, a1));
    for i in (start..end).step_by(4) {
        let p = a * u128::from(make_u64(b[i], b[i + 1]));
        store_u128(&mut c[i..i + 4], p);
    }
}

/// Same stride as [`atomic_multiply_opt`] but accumulates into `c`, carrying
/// past each four word window.
pub(crate) fn atomic_multiply_add_opt(c: &mut [u32], a0: u32, a1: u32, b: &[u32], start: usize, end: usize) {
    let a = u128::from(make_u64(a0, a1));
    for i in (start..end).step_by(4) {
        // (2^64 - 1)^2 < 2^128, only the accumulate can overflow
        let p = a * u128::from(make_u64(b[i], b[i + 1]));
        let (sum, overflow) = p.overflowing_add(load_u128(&c[i..i + 4]));
        store_u128(&mut c[i..i + 4], sum);
        if overflow {
            increment(&mut c[i + 4..], 1);
        }
    }
}

// 递归乘法
/// Karatsuba product of two `n` word operands. `result` and `temp` must both
/// hold at least `2 * n` words.
pub(crate) fn same_size_multiply(result: &mut [u32], temp: &mut [u32], a: &[u32], b: &[u32]) {
    let count = a.len();
    debug_assert_eq!(count, b.len());
    debug_assert!(result.len() >= 2 * count && temp.len() >= 2 * count);
    if count <= RECURSION_LIMIT {
        match count {
            2 => baseline_multiply2(result, a, b),
            4 => baseline_multiply4(result, a, b),
            8 => baseline_multiply8(result, a, b),
            _ => schoolbook_multiply(result, a, b),
        }
        return;
    }

    let count_a = count_words(a);
    let count_b = count_words(b);
    if count_a == 0 || count_b == 0 {
        result[..2 * count].fill(0);
        return;
    }
    if count & 1 == 0 {
        karatsuba_even(&mut result[..2 * count], temp, a, b, count_a.max(count_b))
    } else {
        karatsuba_odd(&mut result[..2 * count], temp, a, b)
    }
}

fn karatsuba_even(result: &mut [u32], temp: &mut [u32], a: &[u32], b: &[u32], used: usize) {
    let count = a.len();
    let h = count / 2;
    if used <= h {
        result[count..].fill(0);
        same_size_multiply(&mut result[..count], temp, &a[..h], &b[..h]);
        return;
    }
    let (a_low, a_high) = a.split_at(h);
    let (b_low, b_high) = b.split_at(h);
    let a_low_bigger = compare(a_low, a_high) == Ordering::Greater;
    let b_low_bigger = compare(b_low, b_high) == Ordering::Greater;

    // |a_low - a_high| in result[..h], |b_low - b_high| in result[h..count]
    {
        let (diff_a, diff_b) = result[..count].split_at_mut(h);
        if a_low_bigger {
            subtract(diff_a, a_low, a_high);
        } else {
            subtract(diff_a, a_high, a_low);
        }
        if b_low_bigger {
            subtract(diff_b, b_low, b_high);
        } else {
            subtract(diff_b, b_high, b_low);
        }
    }
    let (t_lo, t_hi) = temp.split_at_mut(count);
    same_size_multiply(&mut result[count..], t_hi, a_high, b_high);
    {
        let (diffs, _) = result.split_at(count);
        same_size_multiply(t_lo, t_hi, &diffs[..h], &diffs[h..]);
    }
    same_size_multiply(&mut result[..count], t_hi, a_low, b_low);

    combine_halves(result, t_lo, h, a_low_bigger == b_low_bigger);
}

fn karatsuba_odd(result: &mut [u32], temp: &mut [u32], a: &[u32], b: &[u32]) {
    let count = a.len();
    let count_high = count >> 1;
    let count_low = count - count_high;
    let shorter_offset = count - 1;
    let longer_offset = count + 1;
    let (a_low, a_high) = a.split_at(count_low);
    let (b_low, b_high) = b.split_at(count_low);
    let a_low_bigger = compare_with_one_bigger(a_low, a_high) == Ordering::Greater;
    let b_low_bigger = compare_with_one_bigger(b_low, b_high) == Ordering::Greater;

    if a_low_bigger {
        subtract_one_bigger_words1(&mut result[..count_low], a_low, a_high);
    } else {
        subtract_one_bigger_words2(&mut result[..count_low], a_high, a_low);
    }
    if b_low_bigger {
        subtract_one_bigger_words1(&mut temp[..count_low], b_low, b_high);
    } else {
        subtract_one_bigger_words2(&mut temp[..count_low], b_high, b_low);
    }

    // cross term lands in temp[count - 1..2 * count]
    {
        let (r_lo, r_hi) = result.split_at_mut(shorter_offset);
        let (t_lo, t_hi) = temp.split_at_mut(shorter_offset);
        same_size_multiply(
            &mut t_hi[..longer_offset],
            &mut r_hi[..longer_offset],
            &r_lo[..count_low],
            &t_lo[..count_low],
        );
    }
    let saved = [temp[shorter_offset], temp[shorter_offset + 1]];
    {
        let (r_lo, r_hi) = result.split_at_mut(longer_offset);
        same_size_multiply(r_hi, r_lo, a_high, b_high);
    }
    same_size_multiply(&mut result[..longer_offset], &mut temp[..longer_offset], a_low, b_low);
    temp[shorter_offset] = saved[0];
    temp[shorter_offset + 1] = saved[1];

    combine_halves(
        result,
        &temp[shorter_offset..shorter_offset + longer_offset],
        count_low,
        a_low_bigger == b_low_bigger,
    );
}

/// `result` holds `low * low` in its first `2 * split` words and `high * high`
/// above that. Folds both plus the signed cross term in at `split` words.
fn combine_halves(result: &mut [u32], cross: &[u32], split: usize, subtract_cross: bool) {
    debug_assert_eq!(cross.len(), 2 * split);
    let mut c3: i64;
    let c2: u32;
    {
        let (lo, hi) = result.split_at_mut(2 * split);
        let (l0, l1) = lo.split_at_mut(split);
        let (h0, h1) = hi.split_at_mut(split);
        let c2a = add_in_place(h0, l1);
        c3 = i64::from(c2a);
        c2 = c2a + add(l1, h0, l0);
        c3 += i64::from(add_uneven_in_place(h0, h1));
    }
    let window = &mut result[split..3 * split];
    if subtract_cross {
        c3 -= i64::from(subtract_in_place(window, cross));
    } else {
        c3 += i64::from(add_in_place(window, cross));
    }
    c3 += i64::from(increment(&mut result[2 * split..3 * split], c2));
    debug_assert!((-1..=3).contains(&c3));

    let top = &mut result[3 * split..];
    if c3 > 0 {
        increment(top, c3 as u32);
    } else if c3 < 0 {
        decrement(top, c3.unsigned_abs() as u32);
    }
}

/// Square of an `n` word operand; `result` and `temp` must hold `2 * n` words.
pub(crate) fn recursive_square(result: &mut [u32], temp: &mut [u32], a: &[u32]) {
    let count = a.len();
    debug_assert!(result.len() >= 2 * count && temp.len() >= 2 * count);
    if count <= RECURSION_LIMIT {
        match count {
            2 => baseline_square2(result, a),
            4 => baseline_square4(result, a),
            8 => baseline_square8(result, a),
            _ => schoolbook_square(result, a),
        }
        return;
    }
    if count & 1 == 1 {
        same_size_multiply(result, temp, a, a);
        return;
    }

    let h = count / 2;
    let (a_low, a_high) = a.split_at(h);
    let (t_lo, t_hi) = temp.split_at_mut(count);
    recursive_square(&mut result[..count], t_hi, a_low);
    recursive_square(&mut result[count..2 * count], t_hi, a_high);
    same_size_multiply(t_lo, t_hi, a_low, a_high);

    let mut carry = add_in_place(&mut result[h..h + count], t_lo);
    carry += add_in_place(&mut result[h..h + count], t_lo);
    increment(&mut result[count + h..2 * count], carry);
}

/// Product of operands of any sizes. `temp` must hold at least
/// `a.len() + b.len()` words.
pub(crate) fn asymmetric_multiply(result: &mut [u32], temp: &mut [u32], a: &[u32], b: &[u32]) {
    if a.len() == b.len() {
        if std::ptr::eq(a, b) {
            recursive_square(result, temp, a);
        } else {
            same_size_multiply(result, temp, a, b);
        }
        return;
    }
    let (a, b) = if a.len() > b.len() { (b, a) } else { (a, b) };
    let (w1, w2) = (a.len(), b.len());
    debug_assert!(result.len() >= w1 + w2 && temp.len() >= w1 + w2);

    if w1 == 1 || (w1 == 2 && a[1] == 0) {
        match a[0] {
            0 => result[..w1 + w2].fill(0),
            1 => {
                result[..w2].copy_from_slice(b);
                result[w2..w1 + w2].fill(0);
            }
            m => {
                result[w2] = linear_multiply(&mut result[..w2], b, m);
                result[w2 + 1..w1 + w2].fill(0);
            }
        }
        return;
    }
    if w1 == 2 && w2 & 1 == 0 {
        let product = &mut result[..w1 + w2];
        product[w2] = 0;
        product[w2 + 1] = 0;
        atomic_multiply_opt(product, a[0], a[1], b, 0, w2);
        atomic_multiply_add_opt(product, a[0], a[1], b, 2, w2);
        return;
    }
    if w1 <= SCHOOLBOOK_LIMIT && w2 <= SCHOOLBOOK_LIMIT {
        schoolbook_multiply(result, a, b);
        return;
    }

    if w2 % w1 == 0 {
        block_multiply(result, temp, a, b);
        return;
    }
    if w1 + w2 >= 4 * w1 {
        chunked_linear_multiply(result, temp, b, a);
        return;
    }
    if w1 + 1 == w2 || (w1 + 2 == w2 && b[w2 - 1] == 0) {
        result[..w1 + w2].fill(0);
        same_size_multiply(&mut result[..2 * w1], temp, a, &b[..w1]);
        result[2 * w1] = linear_multiply_add(&mut result[w1..2 * w1], a, b[w1]);
        return;
    }
    let mut scratch = vec![0u32; 4 * w1];
    chunked_linear_multiply(result, &mut scratch, b, a);
}

/// `b` is an exact multiple of `a` in length. Block products alternate between
/// `result` and a second strip in `temp` so neighbours never overlap, then the
/// strip is added back in one pass.
fn block_multiply(result: &mut [u32], temp: &mut [u32], a: &[u32], b: &[u32]) {
    let (w1, w2) = (a.len(), b.len());
    let (scratch, products) = temp.split_at_mut(2 * w1);
    // products[j] sits at result position w1 + j
    let products = &mut products[..w2 - w1];

    same_size_multiply(&mut result[..2 * w1], scratch, a, &b[..w1]);
    if (w2 / w1) & 1 == 0 {
        products[..w1].copy_from_slice(&result[w1..2 * w1]);
        for i in (2 * w1..w2).step_by(2 * w1) {
            same_size_multiply(&mut products[i - w1..i + w1], scratch, a, &b[i..i + w1]);
        }
        for i in (w1..w2).step_by(2 * w1) {
            same_size_multiply(&mut result[i..i + 2 * w1], scratch, a, &b[i..i + w1]);
        }
    } else {
        for i in (2 * w1..w2).step_by(2 * w1) {
            same_size_multiply(&mut result[i..i + 2 * w1], scratch, a, &b[i..i + w1]);
        }
        for i in (w1..w2).step_by(2 * w1) {
            same_size_multiply(&mut products[i - w1..i + w1], scratch, a, &b[i..i + w1]);
        }
    }
    if add_in_place(&mut result[w1..w2], products) != 0 {
        increment(&mut result[w2..w2 + w1], 1);
    }
}

/// Multiplies the long operand `a` by the short operand `b` one `b`-sized
/// block at a time. `temp` must hold `4 * b.len()` words.
pub(crate) fn chunked_linear_multiply(product: &mut [u32], temp: &mut [u32], a: &[u32], b: &[u32]) {
    let (acount, bcount) = (a.len(), b.len());
    debug_assert!(temp.len() >= 4 * bcount && product.len() >= acount + bcount);
    product[..bcount].fill(0);
    let mut i = 0;
    while i < acount {
        let diff = acount - i;
        // product[i..i + bcount] holds the high half of the previous block
        if diff > bcount {
            let (t_prod, t_scratch) = temp.split_at_mut(2 * bcount);
            same_size_multiply(t_prod, t_scratch, &a[i..i + bcount], b);
            add_uneven_in_place(t_prod, &product[i..i + bcount]);
            product[i..i + 2 * bcount].copy_from_slice(t_prod);
        } else {
            let (t_prod, t_scratch) = temp.split_at_mut(diff + bcount);
            asymmetric_multiply(t_prod, t_scratch, &a[i..], b);
            add_uneven_in_place(t_prod, &product[i..i + bcount]);
            product[i..i + diff + bcount].copy_from_slice(t_prod);
        }
        i += bcount;
    }
}

// 乘法入口
/// Full product of two non-empty magnitudes, `a.len() + b.len()` words long.
pub(crate) fn multiply_words(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (w1, w2) = (a.len(), b.len());
    if w1 == 1 || w2 == 1 {
        let (long, m) = if w1 == 1 { (b, a[0]) } else { (a, b[0]) };
        let mut product = vec![0u32; long.len() + 1];
        product[long.len()] = linear_multiply(&mut product[..long.len()], long, m);
        return product;
    }
    if w1 <= SCHOOLBOOK_LIMIT && w2 <= SCHOOLBOOK_LIMIT {
        let mut product = vec![0u32; w1 + w2];
        schoolbook_multiply(&mut product, a, b);
        return product;
    }
    let a = padded(a);
    let b = padded(b);
    let mut product = vec![0u32; roundup_size(a.len() + b.len())];
    let mut workspace = vec![0u32; a.len() + b.len()];
    asymmetric_multiply(&mut product, &mut workspace, &a, &b);
    product
}

pub(crate) fn square_words(a: &[u32]) -> Vec<u32> {
    if a.len() == 1 {
        let sq = u64::from(a[0]) * u64::from(a[0]);
        return vec![sq as u32, (sq >> WORD_BITS) as u32];
    }
    let a = padded(a);
    let mut product = vec![0u32; 2 * a.len()];
    let mut workspace = vec![0u32; 2 * a.len()];
    recursive_square(&mut product, &mut workspace, &a);
    product
}

fn padded(words: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(roundup_size(words.len()));
    out.extend_from_slice(words);
    out.resize(roundup_size(words.len()), 0);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic word soup without pulling a RNG into unit tests.
    fn words(n: usize, seed: u32) -> Vec<u32> {
        let mut x = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
        (0..n)
            .map(|_| {
                x ^= x << 13;
                x ^= x >> 17;
                x ^= x << 5;
                x
            })
            .collect()
    }

    fn schoolbook(a: &[u32], b: &[u32]) -> Vec<u32> {
        let mut out = vec![0u32; a.len() + b.len()];
        schoolbook_multiply(&mut out, a, b);
        out
    }

    #[test]
    fn test_baseline_kernels() {
        for n in [2usize, 4, 8] {
            let a = words(n, 1);
            let b = words(n, 2);
            let mut c = vec![0u32; 2 * n];
            match n {
                2 => baseline_multiply2(&mut c, &a, &b),
                4 => baseline_multiply4(&mut c, &a, &b),
                _ => baseline_multiply8(&mut c, &a, &b),
            }
            assert_eq!(c, schoolbook(&a, &b));
            let mut s = vec![0u32; 2 * n];
            match n {
                2 => baseline_square2(&mut s, &a),
                4 => baseline_square4(&mut s, &a),
                _ => baseline_square8(&mut s, &a),
            }
            assert_eq!(s, schoolbook(&a, &a));
        }
        let max = vec![u32::MAX; 8];
        let mut c = vec![0u32; 16];
        baseline_multiply8(&mut c, &max, &max);
        assert_eq!(c, schoolbook(&max, &max));
        baseline_square8(&mut c, &max);
        assert_eq!(c, schoolbook(&max, &max));
    }

    #[test]
    fn test_schoolbook_square() {
        for n in 1..12 {
            let a = words(n, n as u32);
            let mut s = vec![0u32; 2 * n];
            schoolbook_square(&mut s, &a);
            assert_eq!(s, schoolbook(&a, &a));
        }
    }

    #[test]
    fn test_same_size_multiply() {
        for n in [11usize, 12, 13, 16, 17, 21, 24, 31, 32, 33, 40, 64, 65] {
            let a = words(n, 3 * n as u32);
            let b = words(n, 5 * n as u32);
            let mut result = vec![0u32; 2 * n];
            let mut temp = vec![0u32; 2 * n];
            same_size_multiply(&mut result, &mut temp, &a, &b);
            assert_eq!(result, schoolbook(&a, &b), "size {}", n);
        }
    }

    #[test]
    fn test_same_size_multiply_sparse() {
        // high halves zero, equal halves, all ones
        let mut a = words(24, 7);
        a[12..].fill(0);
        let mut b = words(24, 9);
        b[12..].fill(0);
        let mut result = vec![0u32; 48];
        let mut temp = vec![0u32; 48];
        same_size_multiply(&mut result, &mut temp, &a, &b);
        assert_eq!(result, schoolbook(&a, &b));

        let half = words(12, 11);
        let a = [half.clone(), half].concat();
        let b = vec![u32::MAX; 24];
        same_size_multiply(&mut result, &mut temp, &a, &b);
        assert_eq!(result, schoolbook(&a, &b));

        let a = vec![u32::MAX; 23];
        let mut result = vec![0u32; 46];
        let mut temp = vec![0u32; 46];
        same_size_multiply(&mut result, &mut temp, &a, &a);
        assert_eq!(result, schoolbook(&a, &a));
    }

    #[test]
    fn test_recursive_square() {
        for n in [2usize, 9, 10, 11, 12, 16, 20, 22, 33, 64] {
            let a = words(n, 13 * n as u32);
            let mut result = vec![0u32; 2 * n];
            let mut temp = vec![0u32; 2 * n];
            recursive_square(&mut result, &mut temp, &a);
            assert_eq!(result, schoolbook(&a, &a), "size {}", n);
        }
    }

    #[test]
    fn test_asymmetric_multiply() {
        for (n, m) in [(1usize, 20usize), (2, 20), (2, 21), (3, 9), (12, 36), (12, 48), (12, 50), (14, 16), (14, 15), (20, 26), (22, 64), (24, 34)] {
            let a = words(n, n as u32 + 100);
            let b = words(m, m as u32 + 200);
            let mut result = vec![0u32; n + m];
            let mut temp = vec![0u32; n + m];
            asymmetric_multiply(&mut result, &mut temp, &a, &b);
            assert_eq!(result, schoolbook(&a, &b), "sizes {} x {}", n, m);
        }
    }

    #[test]
    fn test_chunked_linear_multiply() {
        let a = words(70, 17);
        let b = words(12, 19);
        let mut product = vec![0u32; 82];
        let mut temp = vec![0u32; 48];
        chunked_linear_multiply(&mut product, &mut temp, &a, &b);
        assert_eq!(product, schoolbook(&a, &b));
    }

    #[test]
    fn test_atomic_multiply() {
        let b = words(10, 23);
        let a = [0xdead_beef, 0x1234_5678];
        let mut c = vec![0u32; 12];
        atomic_multiply_opt(&mut c, a[0], a[1], &b, 0, 10);
        atomic_multiply_add_opt(&mut c, a[0], a[1], &b, 2, 10);
        assert_eq!(c, schoolbook(&a, &b));
    }

    #[test]
    fn test_multiply_words() {
        let a = words(37, 29);
        let b = words(101, 31);
        let mut expect = schoolbook(&a, &b);
        let mut got = multiply_words(&a, &b);
        got.truncate(count_words(&got));
        expect.truncate(count_words(&expect));
        assert_eq!(got, expect);

        let mut got = square_words(&a);
        let mut expect = schoolbook(&a, &a);
        got.truncate(count_words(&got));
        expect.truncate(count_words(&expect));
        assert_eq!(got, expect);
    }
}
