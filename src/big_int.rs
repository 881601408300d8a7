//! # BigInt
//! Immutable arbitrary-precision signed integers, kept as a sign flag and a
//! little-endian `u32` magnitude. Arithmetic never wraps: results grow to
//! whatever size they need. Bit queries and shifts behave as if the value
//! were stored in two's-complement notation.
//! # Example
//! ```
//! use big_integer::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a << 10 = {}", &a << 10u32);
//! println!("a >> 10 = {}", &a >> 10u32);
//! ```

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Neg,
};
use std::sync::Arc;

use tracing::trace;

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::big_num_error::{Error, Result};
use crate::word_div::{divide_words, fast_divide_in_place};
use crate::word_kernels::{
    add_uneven_in_place, compare, count_words, decrement, roundup_size, subtract_in_place,
};
use crate::word_mul::{multiply_words, square_words};

#[derive(Debug, Clone)]
pub struct BigInt {
    negative: bool,
    /// `words[..word_count]` is the magnitude; anything above is zero slack.
    words: Arc<[u32]>,
    word_count: usize,
}

// 杂项辅助函数
impl BigInt {
    /// Wraps an engine buffer, trimming zero top words. A zero magnitude is
    /// never negative.
    pub(crate) fn from_words(mut words: Vec<u32>, negative: bool) -> BigInt {
        let word_count = count_words(&words);
        words.truncate(roundup_size(word_count));
        BigInt {
            negative: negative && word_count != 0,
            words: words.into(),
            word_count,
        }
    }

    pub(crate) fn from_u64(magnitude: u64, negative: bool) -> BigInt {
        BigInt::from_words(vec![magnitude as u32, (magnitude >> WORD_BITS) as u32], negative)
    }

    /// The significant words, least significant first.
    #[inline]
    pub(crate) fn mag(&self) -> &[u32] {
        &self.words[..self.word_count]
    }

    #[inline]
    pub(crate) fn word_count(&self) -> usize {
        self.word_count
    }

    /// Same magnitude with the given sign, sharing the buffer.
    fn with_sign(&self, negative: bool) -> BigInt {
        BigInt {
            negative: negative && self.word_count != 0,
            words: Arc::clone(&self.words),
            word_count: self.word_count,
        }
    }

    fn is_unit(&self) -> bool {
        self.word_count == 1 && self.words[0] == 1
    }

    fn multiply_path(w1: usize, w2: usize, square: bool) -> &'static str {
        if w1 == 1 || w2 == 1 {
            "linear"
        } else if square {
            "square"
        } else if w1 <= SCHOOLBOOK_LIMIT && w2 <= SCHOOLBOOK_LIMIT {
            "schoolbook"
        } else if w1 == w2 {
            "karatsuba"
        } else {
            "asymmetric"
        }
    }
}

// 实现构造
impl BigInt {
    pub fn zero() -> BigInt {
        ZERO.clone()
    }

    pub fn one() -> BigInt {
        ONE.clone()
    }

    pub fn ten() -> BigInt {
        TEN.clone()
    }

    /// Small magnitudes come from the shared cache.
    pub fn value_of(value: i64) -> BigInt {
        let magnitude = value.unsigned_abs();
        if magnitude <= MAX_CONSTANT as u64 {
            let cache: &[BigInt; MAX_CONSTANT + 1] = if value < 0 { &NEG_CACHE } else { &POS_CACHE };
            return cache[magnitude as usize].clone();
        }
        BigInt::from_u64(magnitude, value < 0)
    }

    pub fn is_zero(&self) -> bool {
        self.word_count == 0
    }

    pub fn is_even(&self) -> bool {
        self.word_count == 0 || self.words[0] & 1 == 0
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> i32 {
        if self.negative {
            -1
        } else if self.word_count == 0 {
            0
        } else {
            1
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

// 实现大小比较
impl BigInt {
    pub(crate) fn compare_mag(&self, other: &BigInt) -> Ordering {
        self.word_count
            .cmp(&other.word_count)
            .then_with(|| compare(self.mag(), other.mag()))
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.negative == other.negative && self.mag() == other.mag()
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.compare_mag(other),
            (true, true) => other.compare_mag(self),
        }
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        self.mag().hash(state);
    }
}

// 实现绝对值
impl BigInt {
    pub fn abs(&self) -> BigInt {
        self.with_sign(false)
    }

    pub fn negate(&self) -> BigInt {
        self.with_sign(!self.negative)
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

// 实现加法
impl BigInt {
    pub fn add(&self, other: &BigInt) -> BigInt {
        if other.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return other.clone();
        }
        if self.negative == other.negative {
            return BigInt::from_words(BigInt::add_mag(self.mag(), other.mag()), self.negative);
        }
        match self.compare_mag(other) {
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => {
                BigInt::from_words(BigInt::sub_mag(self.mag(), other.mag()), self.negative)
            }
            Ordering::Less => {
                BigInt::from_words(BigInt::sub_mag(other.mag(), self.mag()), other.negative)
            }
        }
    }

    fn add_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
        let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
        let mut sum = Vec::with_capacity(roundup_size(long.len() + 1));
        sum.extend_from_slice(long);
        let carry = add_uneven_in_place(&mut sum, short);
        if carry != 0 {
            sum.push(carry);
        }
        sum
    }
}

// 实现减法
impl BigInt {
    pub fn subtract(&self, other: &BigInt) -> BigInt {
        BigInt::add(self, &other.negate())
    }

    /// `big - little` for magnitudes with `big >= little`.
    fn sub_mag(big: &[u32], little: &[u32]) -> Vec<u32> {
        let mut diff = big.to_vec();
        let (low, high) = diff.split_at_mut(little.len());
        let borrow = subtract_in_place(low, little);
        let borrow = decrement(high, borrow);
        debug_assert_eq!(borrow, 0);
        diff
    }
}

// 实现乘法
impl BigInt {
    pub fn multiply(&self, other: &BigInt) -> BigInt {
        if self.is_zero() || other.is_zero() {
            return BigInt::zero();
        }
        let negative = self.negative ^ other.negative;
        if self.is_unit() {
            return other.with_sign(negative);
        }
        if other.is_unit() {
            return self.with_sign(negative);
        }
        let square = self.mag() == other.mag();
        trace!(
            left_words = self.word_count,
            right_words = other.word_count,
            path = BigInt::multiply_path(self.word_count, other.word_count, square),
            "multiply"
        );
        let product = if square {
            square_words(self.mag())
        } else {
            multiply_words(self.mag(), other.mag())
        };
        BigInt::from_words(product, negative)
    }

    /// `self * self` through the dedicated squaring path.
    pub fn square(&self) -> BigInt {
        if self.is_zero() {
            return BigInt::zero();
        }
        if self.is_unit() {
            return BigInt::one();
        }
        trace!(words = self.word_count, "square");
        BigInt::from_words(square_words(self.mag()), false)
    }
}

// 实现除法
impl BigInt {
    /// Truncating division. The quotient's sign is the XOR of the operand
    /// signs and the remainder takes the dividend's sign.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        if divisor.is_zero() {
            return Err(Error::division_by_zero());
        }
        if self.compare_mag(divisor) == Ordering::Less {
            return Ok((BigInt::zero(), self.clone()));
        }
        if let (Some(x), Some(y)) = (self.as_i64(), divisor.as_i64()) {
            if x != i64::MIN || y != -1 {
                trace!(dividend = x, divisor = y, "native division");
                return Ok((BigInt::value_of(x / y), BigInt::value_of(x % y)));
            }
        }

        let negative = self.negative ^ divisor.negative;
        let (quotient, remainder) = if divisor.word_count == 1 {
            trace!(words = self.word_count, "single word division");
            let mut quotient = self.mag().to_vec();
            let remainder = fast_divide_in_place(&mut quotient, divisor.words[0]);
            (quotient, vec![remainder])
        } else {
            trace!(
                dividend_words = self.word_count,
                divisor_words = divisor.word_count,
                "long division"
            );
            divide_words(self.mag(), divisor.mag())
        };
        Ok((
            BigInt::from_words(quotient, negative),
            BigInt::from_words(remainder, self.negative),
        ))
    }

    pub fn divide(&self, divisor: &BigInt) -> Result<BigInt> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    pub fn remainder(&self, divisor: &BigInt) -> Result<BigInt> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
    }

    fn div_or_panic(&self, divisor: &BigInt) -> BigInt {
        match self.divide(divisor) {
            Ok(quotient) => quotient,
            Err(e) => panic!("{}", e),
        }
    }

    fn rem_or_panic(&self, divisor: &BigInt) -> BigInt {
        match self.remainder(divisor) {
            Ok(remainder) => remainder,
            Err(e) => panic!("{}", e),
        }
    }
}

// 运算符
macro_rules! impl_binary_op {
    ($($op: ident, $method: ident, $op_assign: ident, $method_assign: ident, $inner: ident);* $(;)?) => {
    $(
    impl $op<&BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: &BigInt) -> Self::Output {
            BigInt::$inner(self, rhs)
        }
    }

    impl $op<BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: BigInt) -> Self::Output {
            BigInt::$inner(self, &rhs)
        }
    }

    impl $op<&BigInt> for BigInt {
        type Output = BigInt;

        fn $method(self, rhs: &BigInt) -> Self::Output {
            BigInt::$inner(&self, rhs)
        }
    }

    impl $op for BigInt {
        type Output = BigInt;

        fn $method(self, rhs: BigInt) -> Self::Output {
            BigInt::$inner(&self, &rhs)
        }
    }

    impl $op_assign<&BigInt> for BigInt {
        fn $method_assign(&mut self, rhs: &BigInt) {
            *self = BigInt::$inner(self, rhs);
        }
    }

    impl $op_assign for BigInt {
        fn $method_assign(&mut self, rhs: BigInt) {
            *self = BigInt::$inner(self, &rhs);
        }
    }
    )*
    };
}

impl_binary_op!(
    Add, add, AddAssign, add_assign, add;
    Sub, sub, SubAssign, sub_assign, subtract;
    Mul, mul, MulAssign, mul_assign, multiply;
    Div, div, DivAssign, div_assign, div_or_panic;
    Rem, rem, RemAssign, rem_assign, rem_or_panic;
);

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| &acc + &x)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| &acc + x)
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, x| &acc * &x)
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, x| &acc * x)
    }
}

#[test]
fn test_value_of() {
    assert_eq!(BigInt::value_of(0), BigInt::zero());
    assert_eq!(BigInt::value_of(-16).to_string(), "-16");
    assert_eq!(BigInt::value_of(17).to_string(), "17");
    assert_eq!(BigInt::value_of(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(BigInt::value_of(i64::MAX).to_string(), "9223372036854775807");
    assert!(!BigInt::value_of(0).is_negative());
    assert_eq!(BigInt::value_of(-5).signum(), -1);
    assert_eq!(BigInt::value_of(0).signum(), 0);
    assert!(BigInt::value_of(-4).is_even());
    assert!(!BigInt::value_of(7).is_even());
}

#[test]
fn test_compare() {
    let values: Vec<BigInt> = ["-123456789012345678901234567890", "-5", "0", "3", "4294967296", "123456789012345678901234567890"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(a.cmp(b), i.cmp(&j), "{} vs {}", a, b);
        }
    }
}

#[test]
fn test_neg_shares_buffer() {
    let a: BigInt = "123456789012345678901234567890".parse().unwrap();
    let b = -&a;
    assert!(Arc::ptr_eq(&a.words, &b.words));
    assert_eq!(-b, a);
    assert_eq!(-BigInt::zero(), BigInt::zero());
    assert!(!(-BigInt::zero()).is_negative());
}

#[test]
fn test_add() {
    let a: BigInt = "18446744073709551615".parse().unwrap();
    let b = BigInt::one();
    assert_eq!((&a + &b).to_string(), "18446744073709551616");
    assert_eq!((&b - &a).to_string(), "-18446744073709551614");
    assert_eq!((&a - &a), BigInt::zero());
    assert_eq!((-&a + &a), BigInt::zero());
    let c: BigInt = "-99999999999999999999999999999999".parse().unwrap();
    assert_eq!((&c + &a).to_string(), "-99999999999981553255926290448384");
    assert_eq!((&a - &c).to_string(), "100000000000018446744073709551614");
    let mut d = c.clone();
    d += &a;
    d -= a;
    assert_eq!(d, c);
}

#[test]
fn test_mul() {
    let a: BigInt = concat!(
        "1234567890123456789012345678901234567890",
        "1234567890123456789012345678901234567890",
    ).parse().unwrap();
    let b: BigInt = "-98765432109876543210987654321".parse().unwrap();
    assert_eq!(
        (&a * &b).to_string(),
        concat!(
            "-12193263113702179522618503273374485596337448559633744855963374",
            "48559633744855963362292333223746380111126352690"
        )
    );
    assert_eq!(&a * &BigInt::one(), a);
    assert_eq!(&b * &BigInt::value_of(-1), b.abs());
    assert_eq!(&a * &BigInt::zero(), BigInt::zero());
    assert_eq!(&b * &b, b.square());
    assert!(!(&b * &b).is_negative());
    assert_eq!(&b * &-&b, -b.square());
}

#[test]
fn test_div() {
    let a: BigInt = concat!(
        "1234567890123456789012345678901234567890",
        "1234567890123456789012345678901234567890",
    ).parse().unwrap();
    let b: BigInt = "98765432109876543210987654321".parse().unwrap();
    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(&(&q * &b) + &r, a);
    assert!(r.compare_mag(&b) == Ordering::Less);

    let (q, r) = (-&a).div_rem(&b).unwrap();
    assert!(q.is_negative() && r.is_negative());
    assert_eq!(&(&q * &b) + &r, -&a);

    let (q, r) = a.div_rem(&-&b).unwrap();
    assert!(q.is_negative() && !r.is_negative());

    let min = BigInt::value_of(i64::MIN);
    let (q, r) = min.div_rem(&BigInt::value_of(-1)).unwrap();
    assert_eq!(q.to_string(), "9223372036854775808");
    assert_eq!(r, BigInt::zero());

    assert_eq!((&BigInt::value_of(-7) / &BigInt::value_of(2)).to_string(), "-3");
    assert_eq!((&BigInt::value_of(-7) % &BigInt::value_of(2)).to_string(), "-1");
    assert_eq!(BigInt::value_of(3).div_rem(&b).unwrap(), (BigInt::zero(), BigInt::value_of(3)));
    assert_eq!(a.divide(&BigInt::zero()), Err(Error::DivisionByZero));
    assert_eq!(a.remainder(&BigInt::zero()), Err(Error::DivisionByZero));
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_div_operator_by_zero() {
    let _ = BigInt::value_of(100) / BigInt::zero();
}

#[test]
fn test_sum_product() {
    let values: Vec<BigInt> = (1..=25).map(BigInt::value_of).collect();
    let sum: BigInt = values.iter().sum();
    assert_eq!(sum, BigInt::value_of(325));
    let product: BigInt = values.into_iter().product();
    assert_eq!(product.to_string(), "15511210043330985984000000");
}
