//! Fixed-width big integers from 64 to 4096 bits.
//!
//! Widths double by type-level recursion: each unsigned type is a pair of
//! half-width values down to the single-word [`U64`]. Signed types are a
//! two's complement view of the unsigned ones. All arithmetic wraps.

pub mod bigint;
pub mod error;
pub mod montgomery;
pub mod text;
pub mod ubigint;
pub mod word;

pub use bigint::{BigIntImpl, I1024, I128, I2048, I256, I4096, I512, I64};
pub use error::ParseIntError;
pub use montgomery::Montgomery;
pub use ubigint::{Reciprocal, UBigIntImpl, UInt, U1024, U128, U2048, U256, U4096, U512, U64};
