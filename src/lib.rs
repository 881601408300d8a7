//! Big Integer \
//! This crate provides:
//! - [`BigInt`]: Immutable arbitrary-precision signed integers. Bit queries and shifts behave as if BigInt were represented in two's-complement notation.
//! - [`Endian`]: Byte order for [`BigInt::to_bytes`] and [`BigInt::from_bytes`].
//! - [`Error`]: What the checked operations return instead of panicking.
//!
//! Multiplication switches between comba kernels, schoolbook, Karatsuba and
//! block/chunked strategies by operand size. Division is schoolbook long
//! division with 2-word quotient estimation.

mod big_int;
mod big_int_bits;
mod big_int_conv;
mod big_int_math;
mod big_num_cache;
mod big_num_constants;
mod big_num_error;
mod word_div;
mod word_kernels;
mod word_mul;

pub use big_int::BigInt;
pub use big_int_conv::Endian;
pub use big_num_error::{Error, Result};
