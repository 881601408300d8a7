use lazy_static::*;

use crate::BigInt;
use crate::big_num_constants::*;

lazy_static! {
    /// `POS_CACHE[n]` is `n` for `0 <= n <= MAX_CONSTANT`.
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|n| BigInt::from_words(vec![n as u32], false));
    /// `NEG_CACHE[n]` is `-n`; `NEG_CACHE[0]` is the same non-negative zero.
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|n| BigInt::from_words(vec![n as u32], n != 0));
    pub static ref ZERO: BigInt = POS_CACHE[0].clone();
    pub static ref ONE: BigInt = POS_CACHE[1].clone();
    pub static ref TEN: BigInt = POS_CACHE[10].clone();
}
