/// Bits per magnitude word.
pub const WORD_BITS: u32 = u32::BITS;

/// Same-size multiply and square switch to the schoolbook/unrolled kernels at
/// or below this many words.
pub const RECURSION_LIMIT: usize = 10;

/// Top-level multiply goes straight to schoolbook when both operands are at
/// most this many words.
pub const SCHOOLBOOK_LIMIT: usize = 10;

/// gcd uses the subtract-and-shift loop while both operands fit in this many
/// words and remainder-based Euclid above it.
pub const BINARY_GCD_LIMIT: usize = 10;

/// Upper bound on correction steps applied to one trial quotient in long
/// division. The estimate divides by the top two divisor words plus one, so it
/// never overshoots and undershoots by at most three.
pub const MAX_QUOTIENT_CORRECTIONS: u32 = 3;

pub const MAX_CONSTANT: usize = 16;

/// `1 + ((bits * 631305) >> 21)` is `trunc(bits * log10(2)) + 1` for every
/// bit length up to 2135.
pub const DIGIT_COUNT_SMALL_MULTIPLIER: u64 = 631305;
pub const DIGIT_COUNT_SMALL_SHIFT: u32 = 21;
pub const DIGIT_COUNT_SMALL_BITS: u64 = 2135;

/// `log10(2)` in 0.41 fixed point, exact for the truncated digit estimate up
/// to `DIGIT_COUNT_APPROX_BITS`.
pub const LOG10_2_FIXED: u64 = 0x9a_209a_84fb;
pub const LOG10_2_SHIFT: u32 = 41;
pub const DIGIT_COUNT_APPROX_BITS: u64 = 6_432_162;

/// Decimal formatting peels this many digits per division pass.
pub const DECIMAL_CHUNK: u32 = 10_000;
pub const DECIMAL_CHUNK_DIGITS: usize = 4;

/// The parser keeps digits in a native accumulator while `acc * 10 + 9`
/// cannot overflow.
pub const MAX_SAFE_ACCUMULATOR: u64 = (u64::MAX - 9) / 10;

pub const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
