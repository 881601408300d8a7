//! Division engine: single-word fast paths and the two-words-at-a-time long
//! division over normalized operands.

use std::cmp::Ordering;

use crate::big_num_constants::{MAX_QUOTIENT_CORRECTIONS, WORD_BITS};
use crate::word_kernels::{
    bit_precision, compare, linear_multiply, make_u64, roundup_size,
    shift_left_by_bits, shift_right_by_bits, subtract_in_place,
};
use crate::word_mul::{atomic_multiply_add_opt, atomic_multiply_opt, baseline_multiply2};

/// `dividend / divisor` where the quotient is known to fit one word, i.e. the
/// high half of `dividend` is below `divisor`.
#[inline(always)]
pub(crate) fn divide_double_word(dividend: u64, divisor: u32) -> u32 {
    debug_assert!(divisor != 0 && (dividend >> WORD_BITS) < u64::from(divisor));
    (dividend / u64::from(divisor)) as u32
}

// 单字除法
/// `quotient = dividend / divisor`, returning the remainder.
pub(crate) fn fast_divide(quotient: &mut [u32], dividend: &[u32], divisor: u32) -> u32 {
    debug_assert_eq!(quotient.len(), dividend.len());
    let d = u64::from(divisor);
    let mut rem = 0u64;
    for (q, &w) in quotient.iter_mut().rev().zip(dividend.iter().rev()) {
        let current = (rem << WORD_BITS) | u64::from(w);
        *q = divide_double_word(current, divisor);
        rem = current - u64::from(*q) * d;
    }
    rem as u32
}

/// Divides the run by `divisor` in place, returning the remainder.
pub(crate) fn fast_divide_in_place(words: &mut [u32], divisor: u32) -> u32 {
    let d = u64::from(divisor);
    let mut rem = 0u64;
    for w in words.iter_mut().rev() {
        let current = (rem << WORD_BITS) | u64::from(*w);
        *w = divide_double_word(current, divisor);
        rem = current - u64::from(*w) * d;
    }
    rem as u32
}

pub(crate) fn fast_remainder(dividend: &[u32], divisor: u32) -> u32 {
    let d = u64::from(divisor);
    dividend
        .iter()
        .rev()
        .fold(0u64, |rem, &w| ((rem << WORD_BITS) | u64::from(w)) % d) as u32
}

// 多字除法
fn load3(words: &[u32]) -> u128 {
    u128::from(words[0]) | (u128::from(words[1]) << 32) | (u128::from(words[2]) << 64)
}

/// Divides the three words `words[..3]` by `b1:b0`, leaves the remainder in
/// the low two words and returns the one word quotient.
///
/// Requires `words[2]:words[1] < b1:b0`. The trial quotient divides by
/// `b1 + 1` so it never overshoots; with `b1` normalized it falls short by at
/// most two.
pub(crate) fn divide_three_words_by_two(words: &mut [u32], b0: u32, b1: u32) -> u32 {
    debug_assert!(words[2] < b1 || (words[2] == b1 && words[1] < b0));
    let mut q = if b1 == u32::MAX {
        words[2]
    } else if b1 != 0 {
        divide_double_word(make_u64(words[1], words[2]), b1 + 1)
    } else {
        divide_double_word(make_u64(words[0], words[1]), b0)
    };
    let divisor = u128::from(make_u64(b0, b1));
    let mut rem = load3(words) - u128::from(q) * divisor;
    let mut corrections = 0u32;
    while rem >= divisor {
        rem -= divisor;
        q += 1;
        corrections += 1;
    }
    debug_assert!(b1 < 1 << 31 || corrections <= MAX_QUOTIENT_CORRECTIONS);
    words[0] = rem as u32;
    words[1] = (rem >> WORD_BITS) as u32;
    words[2] = 0;
    q
}

/// Two word quotient of `words[..4] / (b1:b0)`. A zero divisor pair stands for
/// `2^64`, the value `b1:b0` wraps to when the normalized top is all ones.
pub(crate) fn divide_four_words_by_two(words: &[u32], b0: u32, b1: u32) -> [u32; 2] {
    if b0 == 0 && b1 == 0 {
        return [words[2], words[3]];
    }
    let mut temp = [words[0], words[1], words[2], words[3]];
    let q1 = divide_three_words_by_two(&mut temp[1..], b0, b1);
    let q0 = divide_three_words_by_two(&mut temp[..3], b0, b1);
    [q0, q1]
}

/// Long division of `words1` by `words2`.
///
/// Both lengths must be even, `words1` at least as long as `words2`, and the
/// top two words of `words2` must not both be zero. `quotient` needs
/// `words1.len() - words2.len() + 2` words, `remainder` needs `words2.len()`.
/// Either may be omitted.
pub(crate) fn divide(
    remainder: Option<&mut [u32]>,
    mut quotient: Option<&mut [u32]>,
    words1: &[u32],
    words2: &[u32],
) {
    let (n1, n2) = (words1.len(), words2.len());
    debug_assert!(n2 >= 2 && n1 >= n2 && n1 % 2 == 0 && n2 % 2 == 0);
    debug_assert!(words2[n2 - 1] != 0 || words2[n2 - 2] != 0);

    if let Some(q) = quotient.as_deref_mut() {
        q[..n1 - n2 + 2].fill(0);
    }
    let mut arena = vec![0u32; n1 + 2 + n2 + n2 + 2];
    let (ta, rest) = arena.split_at_mut(n1 + 2);
    let (tb, tp) = rest.split_at_mut(n2);

    // normalize so the divisor's top bit is set
    let shift_words = usize::from(words2[n2 - 1] == 0);
    tb[shift_words..].copy_from_slice(&words2[..n2 - shift_words]);
    let shift_bits = WORD_BITS - bit_precision(tb[n2 - 1]);
    shift_left_by_bits(tb, shift_bits);
    ta[shift_words..shift_words + n1].copy_from_slice(words1);
    shift_left_by_bits(ta, shift_bits);

    let mut top = n1;
    if ta[n1 + 1] == 0 && ta[n1] <= 1 {
        let qs = n1 - n2;
        let mut q = 0u32;
        while ta[n1] != 0 || compare(&ta[qs..n1], tb) != Ordering::Less {
            let borrow = subtract_in_place(&mut ta[qs..n1], tb);
            ta[n1] -= borrow;
            q += 1;
        }
        debug_assert!(q <= MAX_QUOTIENT_CORRECTIONS);
        if let Some(quot) = quotient.as_deref_mut() {
            quot[qs] = q;
        }
    } else {
        top += 2;
    }

    // divisor top two words plus one; wraps to 0:0 for 2^64
    let bt0 = tb[n2 - 2].wrapping_add(1);
    let bt1 = tb[n2 - 1].wrapping_add(u32::from(bt0 == 0));

    let mut i = top;
    while i >= n2 + 2 {
        i -= 2;
        let qs = i - n2;
        let [mut q0, mut q1] = divide_four_words_by_two(&ta[i - 2..i + 2], bt0, bt1);

        if q1 == 0 {
            tp[n2] = linear_multiply(&mut tp[..n2], tb, q0);
            tp[n2 + 1] = 0;
        } else if n2 == 2 {
            baseline_multiply2(tp, &[q0, q1], tb);
        } else {
            tp[n2] = 0;
            tp[n2 + 1] = 0;
            atomic_multiply_opt(tp, q0, q1, tb, 0, n2);
            atomic_multiply_add_opt(tp, q0, q1, tb, 2, n2);
        }

        let window = &mut ta[qs..qs + n2 + 2];
        let borrow = subtract_in_place(window, tp);
        debug_assert_eq!(borrow, 0);
        let mut corrections = 0u32;
        while window[n2] != 0 || compare(&window[..n2], tb) != Ordering::Less {
            let borrow = subtract_in_place(&mut window[..n2], tb);
            window[n2] -= borrow;
            q0 = q0.wrapping_add(1);
            if q0 == 0 {
                q1 += 1;
            }
            corrections += 1;
        }
        debug_assert!(corrections <= MAX_QUOTIENT_CORRECTIONS);

        if let Some(quot) = quotient.as_deref_mut() {
            quot[qs] = q0;
            quot[qs + 1] = q1;
        }
    }

    if let Some(rem) = remainder {
        rem[..n2].copy_from_slice(&ta[shift_words..shift_words + n2]);
        shift_right_by_bits(&mut rem[..n2], shift_bits);
    }
}

/// Quotient and remainder words of `a / b` for trimmed magnitudes with
/// `a >= b` and `b` at least two words long.
pub(crate) fn divide_words(a: &[u32], b: &[u32]) -> (Vec<u32>, Vec<u32>) {
    let n1 = roundup_size(a.len());
    let n2 = roundup_size(b.len());
    let mut wa = vec![0u32; n1];
    wa[..a.len()].copy_from_slice(a);
    let mut wb = vec![0u32; n2];
    wb[..b.len()].copy_from_slice(b);

    let mut quotient = vec![0u32; roundup_size(n1 - n2 + 2)];
    let mut remainder = vec![0u32; n2];
    divide(Some(remainder.as_mut_slice()), Some(quotient.as_mut_slice()), &wa, &wb);
    (quotient, remainder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word_kernels::{add_in_place, count_words};
    use crate::word_mul::schoolbook_multiply;

    fn check_division(a: &[u32], b: &[u32]) {
        let (q, r) = divide_words(a, b);
        // r < b
        let mut rb = vec![0u32; b.len()];
        rb[..count_words(&r)].copy_from_slice(&r[..count_words(&r)]);
        assert_eq!(compare(&rb, b), Ordering::Less);
        // q * b + r == a
        let q = &q[..count_words(&q)];
        let mut back = vec![0u32; q.len() + b.len() + 1];
        schoolbook_multiply(&mut back, q, b);
        let mut r_ext = vec![0u32; back.len()];
        r_ext[..r.len()].copy_from_slice(&r);
        add_in_place(&mut back, &r_ext);
        back.truncate(count_words(&back));
        assert_eq!(back, a[..count_words(a)].to_vec());
    }

    #[test]
    fn test_fast_divide() {
        let dividend = [0x8765_4321, 0x1234_5678, 9];
        let mut q = [0u32; 3];
        let r = fast_divide(&mut q, &dividend, 10_000);
        let mut again = dividend;
        assert_eq!(fast_divide_in_place(&mut again, 10_000), r);
        assert_eq!(again, q);
        assert_eq!(fast_remainder(&dividend, 10_000), r);

        let value = (9u128 << 64) | (0x1234_5678u128 << 32) | 0x8765_4321;
        assert_eq!(u128::from(r), value % 10_000);
        let qv = u128::from(q[0]) | (u128::from(q[1]) << 32) | (u128::from(q[2]) << 64);
        assert_eq!(qv, value / 10_000);
    }

    #[test]
    fn test_divide_three_words_by_two() {
        let b1 = 0x8000_0001u32;
        let b0 = 0x0000_0005u32;
        let mut words = [0xffff_ffff, 0x1234_5678, 0x8000_0000];
        let a = load3(&words);
        let q = divide_three_words_by_two(&mut words, b0, b1);
        let b = u128::from(make_u64(b0, b1));
        assert_eq!(u128::from(q), a / b);
        assert_eq!(load3(&words), a % b);
    }

    #[test]
    fn test_divide_four_words_by_two() {
        let words = [1, 2, 3, 4];
        assert_eq!(divide_four_words_by_two(&words, 0, 0), [3, 4]);
        let b0 = 0xffff_fff0;
        let b1 = 0xf000_0000;
        let words = [0x1111_1111, 0x2222_2222, 0x3333_3333, 0x4444_4444];
        let a = words
            .iter()
            .rev()
            .fold(0u128, |acc, &w| (acc << 32) | u128::from(w));
        let q = divide_four_words_by_two(&words, b0, b1);
        let b = u128::from(make_u64(b0, b1));
        assert_eq!(make_u64(q[0], q[1]) as u128, a / b);
    }

    #[test]
    fn test_divide_words() {
        check_division(&[0, 0, 0, 1], &[0, 1]);
        check_division(&[u32::MAX; 9], &[u32::MAX, u32::MAX, 1]);
        check_division(&[5, 6, 7, 8, 9, 10, 11], &[0x8000_0000, 0xffff_ffff, 0x7fff_ffff]);
        check_division(&[123, 456, 789], &[123, 456, 789]);
        // all-ones divisor top makes the trial divisor wrap to 2^64
        check_division(&[1, 2, 3, 4, 5, 6, 7, 8], &[u32::MAX, u32::MAX, u32::MAX]);
        check_division(&[3, 0, 0, 0, 0, 0x8000_0000], &[1, 0, 0, 0x8000_0000]);
    }

    #[test]
    fn test_divide_remainder_only() {
        let a = [7u32, 7, 7, 7, 7, 7];
        let b = [3u32, 0, 0, 1];
        let mut rem = [0u32; 4];
        divide(Some(&mut rem[..]), None, &a, &b);
        let (_, r) = divide_words(&a, &b);
        assert_eq!(rem.to_vec(), r);
    }
}
