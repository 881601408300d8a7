use tracing::trace;

use crate::BigInt;
use crate::big_num_constants::BINARY_GCD_LIMIT;
use crate::big_num_error::{Error, Result};

// 最大公约数
impl BigInt {
    /// Greatest common divisor, always non-negative. `gcd(0, 0)` is 0.
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        if self.is_zero() {
            return other.abs();
        }
        if other.is_zero() {
            return self.abs();
        }
        let mut x = self.abs();
        let mut y = other.abs();
        if x == y {
            return x;
        }
        if x == BigInt::one() || y == BigInt::one() {
            return BigInt::one();
        }

        let exp = x.lowest_set_bit().min(y.lowest_set_bit());
        x = x.shift_right(exp as i64);
        y = y.shift_right(exp as i64);
        if x.word_count() <= BINARY_GCD_LIMIT && y.word_count() <= BINARY_GCD_LIMIT {
            trace!(words = x.word_count().max(y.word_count()), "binary gcd");
            // one side is odd now, so the gcd is odd
            x = x.shift_right(x.lowest_set_bit() as i64);
            y = y.shift_right(y.lowest_set_bit() as i64);
            loop {
                let diff = (&x - &y).abs();
                if diff.is_zero() {
                    break;
                }
                if y > x {
                    y = x;
                }
                x = diff.shift_right(diff.lowest_set_bit() as i64);
            }
        } else {
            trace!(left_words = x.word_count(), right_words = y.word_count(), "euclid gcd");
            while !y.is_zero() {
                let r = &x % &y;
                x = y;
                y = r;
            }
        }
        x.shift_left(exp as i64)
    }
}

// 模运算
impl BigInt {
    /// Floored modulus in `[0, divisor)`.
    pub fn modulo(&self, divisor: &BigInt) -> Result<BigInt> {
        if divisor.is_negative() {
            return Err(Error::invalid("modulus must not be negative"));
        }
        let rem = self.remainder(divisor)?;
        Ok(if rem.is_negative() { &rem + divisor } else { rem })
    }

    /// `self^exponent mod modulus` by square-and-multiply over the exponent
    /// bits, reducing after every product.
    pub fn mod_pow(&self, exponent: &BigInt, modulus: &BigInt) -> Result<BigInt> {
        if exponent.is_negative() {
            return Err(Error::invalid("exponent must not be negative"));
        }
        if modulus.signum() <= 0 {
            return Err(Error::invalid("modulus must be positive"));
        }
        let mut result = BigInt::one().modulo(modulus)?;
        let mut base = self.modulo(modulus)?;
        let bits = exponent.unsigned_bit_length();
        for i in 0..bits {
            if exponent.test_bit(i) {
                result = (&result * &base).modulo(modulus)?;
            }
            if i + 1 < bits {
                base = base.square().modulo(modulus)?;
            }
        }
        Ok(result)
    }
}

// 乘方
impl BigInt {
    pub fn pow(&self, exponent: u32) -> BigInt {
        match exponent {
            0 => BigInt::one(),
            1 => self.clone(),
            2 => self.square(),
            3 => &self.square() * self,
            _ => {
                let mut result = BigInt::one();
                let mut base = self.clone();
                let mut e = exponent;
                loop {
                    if e & 1 == 1 {
                        result = &result * &base;
                    }
                    e >>= 1;
                    if e == 0 {
                        break result;
                    }
                    base = base.square();
                }
            }
        }
    }

    pub fn pow_big_int(&self, exponent: &BigInt) -> Result<BigInt> {
        if exponent.is_negative() {
            return Err(Error::invalid("exponent must not be negative"));
        }
        if let Some(e) = exponent.as_i64().and_then(|e| u32::try_from(e).ok()) {
            return Ok(self.pow(e));
        }
        let mut result = BigInt::one();
        let mut base = self.clone();
        let bits = exponent.unsigned_bit_length();
        for i in 0..bits {
            if exponent.test_bit(i) {
                result = &result * &base;
            }
            if i + 1 < bits {
                base = base.square();
            }
        }
        Ok(result)
    }
}

// 平方根
impl BigInt {
    /// `(r, self - r * r)` with `r` the integer square root. Values at or
    /// below zero give `(0, 0)`.
    pub fn sqrt_with_remainder(&self) -> (BigInt, BigInt) {
        if self.signum() <= 0 {
            return (BigInt::zero(), BigInt::zero());
        }
        if let Some(v) = self.as_i64() {
            let v = v as u64;
            let root = isqrt_u64(v);
            return (BigInt::from(root), BigInt::from(v - root * root));
        }

        let power_bits = self.unsigned_bit_length().div_ceil(2);
        let mut x = BigInt::one().shift_left(power_bits as i64);
        loop {
            let y = (&x + &(self / &x)).shift_right(1);
            if y >= x {
                break;
            }
            x = y;
        }
        let rem = self - &x.square();
        (x, rem)
    }

    pub fn sqrt(&self) -> BigInt {
        self.sqrt_with_remainder().0
    }
}

/// Newton iteration from `2^ceil(bits / 2)`, which is never below the root.
fn isqrt_u64(v: u64) -> u64 {
    let power_bits = (u64::BITS - v.leading_zeros()).div_ceil(2);
    let mut x = 1u64 << power_bits;
    loop {
        let y = (x + v / x) >> 1;
        if y >= x {
            return x;
        }
        x = y;
    }
}
