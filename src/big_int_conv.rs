//! Conversion engine: decimal strings, digit counting, two's-complement byte
//! arrays and native integers.

use std::fmt::{self, Display};
use std::str::FromStr;

use tracing::trace;

use crate::BigInt;
use crate::big_num_constants::*;
use crate::big_num_error::{Error, Result};
use crate::word_div::fast_divide_in_place;
use crate::word_kernels::{count_words, grow_for_carry, increment, make_u64, twos_complement};

/// Byte order for [`BigInt::to_bytes`] and [`BigInt::from_bytes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    Little,
    Big,
}

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.magnitude_to_string())
    }
}

impl BigInt {
    /// Decimal digits of the magnitude, without sign.
    fn magnitude_to_string(&self) -> String {
        let count = self.word_count();
        if count <= 2 {
            let mag = self.mag();
            let value = make_u64(
                mag.first().copied().unwrap_or(0),
                mag.get(1).copied().unwrap_or(0),
            );
            return value.to_string();
        }
        trace!(words = count, "formatting by base 10000 chunks");

        let mut temp = self.mag().to_vec();
        let mut len = count;
        let mut digits: Vec<u8> = Vec::with_capacity(count * 10);
        loop {
            if len <= 2 {
                let mut rest = make_u64(temp[0], if len > 1 { temp[1] } else { 0 });
                while rest != 0 {
                    digits.push(DIGITS[(rest % 10) as usize] as u8);
                    rest /= 10;
                }
                break;
            }
            let mut chunk = fast_divide_in_place(&mut temp[..len], DECIMAL_CHUNK);
            len = count_words(&temp[..len]);
            // inner chunks keep their leading zeros
            for _ in 0..DECIMAL_CHUNK_DIGITS {
                digits.push(DIGITS[(chunk % 10) as usize] as u8);
                chunk /= 10;
            }
        }
        digits.reverse();
        digits.into_iter().map(char::from).collect()
    }

    /// Number of decimal digits in the magnitude; 1 for zero.
    ///
    /// The bit length usually pins the count down on its own; only when the
    /// estimate straddles a power of ten are base 10000 chunks divided off
    /// until the rest is decided.
    pub fn digit_count(&self) -> u64 {
        if self.word_count() <= 2 {
            let value = make_u64(
                self.mag().first().copied().unwrap_or(0),
                self.mag().get(1).copied().unwrap_or(0),
            );
            return u64::from(value.checked_ilog10().unwrap_or(0)) + 1;
        }
        if let Some(digits) = digit_count_from_bits(self.unsigned_bit_length()) {
            return digits;
        }
        trace!(bits = self.unsigned_bit_length(), "digit count estimate straddles a power of ten");

        let mut temp = self.mag().to_vec();
        let mut len = temp.len();
        let mut digits = 0u64;
        loop {
            if len <= 2 {
                let value = make_u64(temp[0], if len > 1 { temp[1] } else { 0 });
                return digits + u64::from(value.checked_ilog10().unwrap_or(0)) + 1;
            }
            fast_divide_in_place(&mut temp[..len], DECIMAL_CHUNK);
            len = count_words(&temp[..len]);
            digits += DECIMAL_CHUNK_DIGITS as u64;
            let bits = (len as u64 - 1) * u64::from(WORD_BITS)
                + u64::from(WORD_BITS - temp[len - 1].leading_zeros());
            if let Some(rest) = digit_count_from_bits(bits) {
                return digits + rest;
            }
        }
    }
}

/// Digit count of every value with `bits` significant bits, when they all
/// share one.
fn digit_count_from_bits(bits: u64) -> Option<u64> {
    debug_assert!(bits > 0);
    let (min, max) = if bits <= DIGIT_COUNT_SMALL_BITS {
        (
            ((bits - 1) * DIGIT_COUNT_SMALL_MULTIPLIER) >> DIGIT_COUNT_SMALL_SHIFT,
            (bits * DIGIT_COUNT_SMALL_MULTIPLIER) >> DIGIT_COUNT_SMALL_SHIFT,
        )
    } else if bits <= DIGIT_COUNT_APPROX_BITS {
        (
            ((bits - 1) * LOG10_2_FIXED) >> LOG10_2_SHIFT,
            (bits * LOG10_2_FIXED) >> LOG10_2_SHIFT,
        )
    } else {
        return None;
    };
    (min == max).then_some(min + 1)
}

// 实现解析
impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BigInt::from_string(s)
    }
}

impl BigInt {
    /// Parses `-?[0-9]+`. Leading zeros are fine, `"-0"` is zero.
    pub fn from_string(text: &str) -> Result<BigInt> {
        BigInt::from_substring(text, 0, text.len())
    }

    /// Parses the byte range `start..end` of `text`, with the sign read at
    /// `start`.
    pub fn from_substring(text: &str, start: usize, end: usize) -> Result<BigInt> {
        if start > text.len() || end > text.len() {
            return Err(Error::invalid(format!(
                "range {}..{} is outside a string of length {}",
                start,
                end,
                text.len()
            )));
        }
        if end < start {
            return Err(Error::invalid(format!("range end {} is before start {}", end, start)));
        }
        let bytes = &text.as_bytes()[start..end];
        let (negative, digits, offset) = match bytes.split_first() {
            Some((b'-', rest)) => (true, rest, start + 1),
            _ => (false, bytes, start),
        };
        if digits.is_empty() {
            return Err(Error::invalid("no digits"));
        }

        let mut acc = 0u64;
        let mut spilled: Option<Vec<u32>> = None;
        for (i, &c) in digits.iter().enumerate() {
            if !c.is_ascii_digit() {
                return Err(Error::invalid(format!(
                    "illegal character {:?} at index {}",
                    char::from(c),
                    offset + i
                )));
            }
            let digit = u32::from(c - b'0');
            if let Some(words) = spilled.as_mut() {
                BigInt::mul_10_add(words, digit);
                continue;
            }
            if acc <= MAX_SAFE_ACCUMULATOR {
                acc = acc * 10 + u64::from(digit);
            } else {
                let mut words = vec![acc as u32, (acc >> WORD_BITS) as u32];
                BigInt::mul_10_add(&mut words, digit);
                spilled = Some(words);
            }
        }
        Ok(match spilled {
            Some(words) => BigInt::from_words(words, negative),
            None => BigInt::from_u64(acc, negative),
        })
    }

    fn mul_10_add(words: &mut Vec<u32>, digit: u32) {
        let mut carry = 0u64;
        for w in words.iter_mut() {
            carry += u64::from(*w) * 10;
            *w = carry as u32;
            carry >>= WORD_BITS;
        }
        if carry != 0 {
            grow_for_carry(words, carry as u32);
        }
        if increment(words, digit) != 0 {
            grow_for_carry(words, 1);
        }
    }
}

impl TryFrom<&str> for BigInt {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self> {
        BigInt::from_string(text)
    }
}

// 字节数组
impl BigInt {
    /// Shortest two's-complement encoding that reads back to the same value.
    /// Zero encodes as a single zero byte.
    pub fn to_bytes(&self, order: Endian) -> Vec<u8> {
        if self.is_zero() {
            return vec![0];
        }
        let mut words = self.mag().to_vec();
        words.push(0);
        if self.is_negative() {
            twos_complement(&mut words);
        }
        let mut bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
        let (fill, sign_bit) = if self.is_negative() { (0xff, 0x80) } else { (0x00, 0x00) };
        // drop sign bytes the next byte down already implies
        while bytes.len() > 1
            && bytes[bytes.len() - 1] == fill
            && bytes[bytes.len() - 2] & 0x80 == sign_bit
        {
            bytes.pop();
        }
        if order == Endian::Big {
            bytes.reverse();
        }
        bytes
    }

    /// Reads a two's-complement byte array. An empty slice is zero.
    pub fn from_bytes(bytes: &[u8], order: Endian) -> BigInt {
        if bytes.is_empty() {
            return BigInt::zero();
        }
        let mut le = bytes.to_vec();
        if order == Endian::Big {
            le.reverse();
        }
        let negative = le[le.len() - 1] & 0x80 != 0;
        let fill = if negative { 0xff } else { 0x00 };
        let mut words: Vec<u32> = le
            .chunks(4)
            .map(|chunk| {
                let mut word = [fill; 4];
                word[..chunk.len()].copy_from_slice(chunk);
                u32::from_le_bytes(word)
            })
            .collect();
        if negative {
            twos_complement(&mut words);
        }
        BigInt::from_words(words, negative)
    }
}

// 原生整数
impl BigInt {
    pub fn can_fit_in_i32(&self) -> bool {
        match self.mag() {
            [] => true,
            [w] => *w < 1 << 31 || (self.is_negative() && *w == 1 << 31),
            _ => false,
        }
    }

    pub fn can_fit_in_i64(&self) -> bool {
        match self.mag() {
            [] | [_] => true,
            [_, high] if *high < 1 << 31 => true,
            [0, high] => self.is_negative() && *high == 1 << 31,
            _ => false,
        }
    }

    pub(crate) fn as_i64(&self) -> Option<i64> {
        if !self.can_fit_in_i64() {
            return None;
        }
        let mag = self.mag();
        let magnitude = make_u64(
            mag.first().copied().unwrap_or(0),
            mag.get(1).copied().unwrap_or(0),
        );
        // i64::MIN's magnitude wraps onto itself
        Some(if self.is_negative() {
            (magnitude as i64).wrapping_neg()
        } else {
            magnitude as i64
        })
    }

    pub fn to_i64(&self) -> Result<i64> {
        self.as_i64().ok_or_else(|| Error::overflow("i64"))
    }

    pub fn to_i32(&self) -> Result<i32> {
        if !self.can_fit_in_i32() {
            return Err(Error::overflow("i32"));
        }
        let magnitude = self.mag().first().copied().unwrap_or(0);
        Ok(if self.is_negative() {
            (magnitude as i32).wrapping_neg()
        } else {
            magnitude as i32
        })
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::from_u64(val as u64, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of(val as i64)
        }
    }
    )*
    };
}

impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);
impl_signed_to_big_int!(i8, i16, i32, isize, i64);

macro_rules! impl_try_from_big_int {
    ($($t: ty, $method: ident);*) => {
    $(
    impl TryFrom<&BigInt> for $t {
        type Error = Error;

        fn try_from(val: &BigInt) -> Result<Self> {
            val.$method()
        }
    }

    impl TryFrom<BigInt> for $t {
        type Error = Error;

        fn try_from(val: BigInt) -> Result<Self> {
            val.$method()
        }
    }
    )*
    };
}

impl_try_from_big_int!(i32, to_i32; i64, to_i64);
