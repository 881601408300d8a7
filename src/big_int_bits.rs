use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

use crate::BigInt;
use crate::big_num_constants::WORD_BITS;
use crate::word_kernels::{
    bit_precision, roundup_size, shift_left_by_bits, shift_left_by_words, shift_right_by_bits,
    shift_right_by_bits_sign_extend, shift_right_by_words_sign_extend, twos_complement,
};

// 比特查询
impl BigInt {
    /// Bits needed for the magnitude; 0 for zero.
    pub fn unsigned_bit_length(&self) -> u64 {
        match self.mag().last() {
            None => 0,
            Some(&top) => {
                (self.word_count() as u64 - 1) * u64::from(WORD_BITS) + u64::from(bit_precision(top))
            }
        }
    }

    /// Two's-complement bit length without the sign bit. For a negative value
    /// this is the bit length of `abs(value) - 1`.
    pub fn bit_length(&self) -> u64 {
        let n = self.unsigned_bit_length();
        if self.is_negative() && self.is_pow2_mag() {
            n - 1
        } else {
            n
        }
    }

    fn is_pow2_mag(&self) -> bool {
        match self.mag().split_last() {
            Some((top, rest)) => top.count_ones() == 1 && rest.iter().all(|&w| w == 0),
            None => false,
        }
    }

    /// Index of the lowest set bit, the same for `v` and `-v`. 0 for zero.
    pub fn lowest_set_bit(&self) -> u64 {
        let mag = self.mag();
        match mag.iter().position(|&w| w != 0) {
            Some(i) => i as u64 * u64::from(WORD_BITS) + u64::from(mag[i].trailing_zeros()),
            None => 0,
        }
    }

    /// Bit `index` of the two's-complement form. Negative values read as
    /// infinitely sign-extended.
    pub fn test_bit(&self, index: u64) -> bool {
        let mag = self.mag();
        let word_pos = index / u64::from(WORD_BITS);
        if word_pos >= mag.len() as u64 {
            return self.is_negative();
        }
        let word_pos = word_pos as usize;
        let mut word = mag[word_pos];
        if self.is_negative() {
            // -m is !(m - 1); the borrow of m - 1 reaches this word only across zeros
            if mag[..word_pos].iter().all(|&w| w == 0) {
                word = word.wrapping_sub(1);
            }
            word = !word;
        }
        (word >> (index % u64::from(WORD_BITS))) & 1 == 1
    }

    /// Bytes needed for the magnitude.
    pub fn byte_count(&self) -> u64 {
        self.unsigned_bit_length().div_ceil(8)
    }
}

// 实现移位
impl BigInt {
    /// `self * 2^bits`; a negative count shifts right instead.
    pub fn shift_left(&self, bits: i64) -> BigInt {
        if bits < 0 {
            self.shr_bits(bits.unsigned_abs())
        } else {
            self.shl_bits(bits.unsigned_abs())
        }
    }

    /// Arithmetic shift: `floor(self / 2^bits)`; a negative count shifts left.
    pub fn shift_right(&self, bits: i64) -> BigInt {
        if bits < 0 {
            self.shl_bits(bits.unsigned_abs())
        } else {
            self.shr_bits(bits.unsigned_abs())
        }
    }

    fn shl_bits(&self, bits: u64) -> BigInt {
        if bits == 0 || self.is_zero() {
            return self.clone();
        }
        let shift_words = (bits / u64::from(WORD_BITS)) as usize;
        let shift_bits = (bits % u64::from(WORD_BITS)) as u32;
        let count = self.word_count();
        // one spare word takes the bits pushed out of the top
        let mut words = vec![0u32; roundup_size(count + shift_words + 1)];
        words[..count].copy_from_slice(self.mag());
        shift_left_by_words(&mut words, shift_words);
        shift_left_by_bits(&mut words[shift_words..], shift_bits);
        BigInt::from_words(words, self.is_negative())
    }

    fn shr_bits(&self, bits: u64) -> BigInt {
        if bits == 0 || self.is_zero() {
            return self.clone();
        }
        let count = self.word_count();
        let shift_words = bits / u64::from(WORD_BITS);
        let shift_bits = (bits % u64::from(WORD_BITS)) as u32;

        if !self.is_negative() {
            if shift_words >= count as u64 {
                return BigInt::zero();
            }
            let mut words = self.mag()[shift_words as usize..].to_vec();
            shift_right_by_bits(&mut words, shift_bits);
            return BigInt::from_words(words, false);
        }

        // two's complement plus a sign word, shifted with ones coming in
        let mut words = vec![0u32; count + 1];
        words[..count].copy_from_slice(self.mag());
        twos_complement(&mut words);
        let len = words.len();
        let shift_words = shift_words.min(len as u64) as usize;
        shift_right_by_words_sign_extend(&mut words, shift_words);
        shift_right_by_bits_sign_extend(&mut words[..len - shift_words], shift_bits);
        twos_complement(&mut words);
        BigInt::from_words(words, true)
    }
}

macro_rules! impl_shift {
    ($($t: ty),*) => {
    $(
    impl Shl<$t> for BigInt {
        type Output = BigInt;

        fn shl(self, n: $t) -> Self::Output {
            self.shift_left(i64::from(n))
        }
    }

    impl Shl<$t> for &BigInt {
        type Output = BigInt;

        fn shl(self, n: $t) -> Self::Output {
            self.shift_left(i64::from(n))
        }
    }

    impl ShlAssign<$t> for BigInt {
        fn shl_assign(&mut self, n: $t) {
            *self = self.shift_left(i64::from(n));
        }
    }

    impl Shr<$t> for BigInt {
        type Output = BigInt;

        fn shr(self, n: $t) -> Self::Output {
            self.shift_right(i64::from(n))
        }
    }

    impl Shr<$t> for &BigInt {
        type Output = BigInt;

        fn shr(self, n: $t) -> Self::Output {
            self.shift_right(i64::from(n))
        }
    }

    impl ShrAssign<$t> for BigInt {
        fn shr_assign(&mut self, n: $t) {
            *self = self.shift_right(i64::from(n));
        }
    }
    )*
    };
}

impl_shift!(u32, i64);

#[cfg(test)]
mod tests {
    use crate::BigInt;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn test_shift_round_trip() {
        let one = BigInt::one();
        let shifted = &one << 64u32;
        assert_eq!(shifted.to_string(), "18446744073709551616");
        assert_eq!(&shifted >> 64u32, one);

        let a = big("-123456789012345678901234567890");
        for n in [1i64, 31, 32, 33, 95, 200] {
            assert_eq!(a.shift_left(n).shift_right(n), a, "shift {}", n);
            assert_eq!(a.shift_left(-n), a.shift_right(n));
        }
    }

    #[test]
    fn test_shift_right_negative() {
        assert_eq!(BigInt::value_of(-5) >> 1u32, BigInt::value_of(-3));
        assert_eq!(BigInt::value_of(-1) >> 100u32, BigInt::value_of(-1));
        assert_eq!(BigInt::value_of(5) >> 100u32, BigInt::zero());
        let p = BigInt::one() << 70u32;
        assert_eq!((-&p) >> 70u32, BigInt::value_of(-1));
        assert_eq!((-&p - BigInt::one()) >> 70u32, BigInt::value_of(-2));
        assert_eq!(big("-4294967296") >> 32u32, BigInt::value_of(-1));
        assert_eq!(big("-4294967297") >> 32u32, BigInt::value_of(-2));
    }

    #[test]
    fn test_extreme_shift_counts() {
        assert_eq!(BigInt::one().shift_left(i64::MIN), BigInt::zero());
        assert_eq!(BigInt::value_of(-1).shift_right(i64::MAX), BigInt::value_of(-1));
        assert_eq!(BigInt::value_of(-7).shift_left(0), BigInt::value_of(-7));
        let mut x = BigInt::value_of(3);
        x <<= 3u32;
        assert_eq!(x, BigInt::value_of(24));
        x >>= -2i64;
        assert_eq!(x, BigInt::value_of(96));
    }

    #[test]
    fn test_bit_queries() {
        assert_eq!(BigInt::zero().bit_length(), 0);
        assert_eq!(BigInt::value_of(255).bit_length(), 8);
        assert_eq!(BigInt::value_of(-256).bit_length(), 8);
        assert_eq!(BigInt::value_of(-257).bit_length(), 9);
        assert_eq!(BigInt::value_of(-1).bit_length(), 0);
        assert_eq!(BigInt::value_of(-256).unsigned_bit_length(), 9);
        assert_eq!(big("18446744073709551616").unsigned_bit_length(), 65);

        assert_eq!(BigInt::zero().lowest_set_bit(), 0);
        assert_eq!((BigInt::one() << 40u32).lowest_set_bit(), 40);
        assert_eq!(BigInt::value_of(-12).lowest_set_bit(), 2);

        assert_eq!(BigInt::zero().byte_count(), 0);
        assert_eq!(BigInt::value_of(255).byte_count(), 1);
        assert_eq!(BigInt::value_of(-256).byte_count(), 2);
    }

    #[test]
    fn test_test_bit() {
        let five = BigInt::value_of(5);
        assert!(five.test_bit(0));
        assert!(!five.test_bit(1));
        assert!(five.test_bit(2));
        assert!(!five.test_bit(100));

        let minus_two = BigInt::value_of(-2);
        assert!(!minus_two.test_bit(0));
        assert!(minus_two.test_bit(1));
        assert!(minus_two.test_bit(1000));

        let v = big("-4294967296");
        assert!(!v.test_bit(0));
        assert!(!v.test_bit(31));
        assert!(v.test_bit(32));
        assert!(v.test_bit(33));

        let v = big("-4294967297");
        assert!(v.test_bit(0));
        assert!(!v.test_bit(32));
        assert!(v.test_bit(33));
    }
}
