//! Unsigned fixed-width integers built by recursive doubling.
//!
//! `U64` wraps a single machine word. `UBigIntImpl<H>` glues two halves of
//! type `H` together, so `U128 = UBigIntImpl<U64>`, `U256 = UBigIntImpl<U128>`
//! and so on. Every operation on a node is written in terms of operations on
//! its halves. All arithmetic wraps modulo `2^BITS`.

use core::fmt;
use core::hash::Hash;
use core::ops::{Add, BitAnd, BitOr, BitXor, Mul, Not, Shl, Shr, Sub};

mod add;
mod bits;
mod cmp;
mod div;
mod inv;
mod leaf;
mod mul;
mod pow;
mod std;
mod sub;

pub use inv::Reciprocal;
pub use leaf::U64;

use crate::word;

/// Common operation surface of every unsigned width.
pub trait UInt:
    Copy
    + Default
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    const BITS: u32;
    const WORDS: usize;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;
    /// Only the top bit set, the two's complement minimum
    const SIGN_BIT: Self;
    /// Every bit but the top, the two's complement maximum
    const SIGNED_MAX: Self;

    /// Word `i`, least significant first
    fn word(&self, i: usize) -> u64;
    fn set_word(&mut self, i: usize, w: u64);

    fn from_u64(v: u64) -> Self;
    fn is_zero(self) -> bool;

    /// Add with carry in and carry out
    fn adc(self, rhs: Self, carry: bool) -> (Self, bool);
    /// Subtract with borrow in and borrow out
    fn sbc(self, rhs: Self, borrow: bool) -> (Self, bool);

    /// Full double-width product as `(high, low)`
    fn widening_mul(self, rhs: Self) -> (Self, Self);
    fn wrapping_mul(self, rhs: Self) -> Self;
    /// High half of the product, low by at most 2
    fn mulhi_aprx(self, rhs: Self) -> Self;

    fn clz(self) -> u32;

    /// `floor((2^(2 * BITS) - 1) / self)` for a `self` with its top bit set
    fn recip_normalized(self) -> UBigIntImpl<Self>;

    /// Exact division of the double-width value `hi:lo` by `d`, requires `hi < d`
    fn div_rem_wide(hi: Self, lo: Self, d: Self) -> (Self, Self);

    #[inline]
    fn from_u128(v: u128) -> Self {
        let mut out = Self::from_u64(v as u64);
        if Self::WORDS > 1 {
            out.set_word(1, (v >> 64) as u64);
        }
        out
    }

    #[inline]
    fn as_u64(self) -> u64 {
        self.word(0)
    }

    #[inline]
    fn as_u128(self) -> u128 {
        let hi = if Self::WORDS > 1 { self.word(1) } else { 0 };
        ((hi as u128) << 64) | self.word(0) as u128
    }

    #[inline]
    fn mulhi(self, rhs: Self) -> Self {
        self.widening_mul(rhs).0
    }

    #[inline]
    fn wrapping_neg(self) -> Self {
        Self::ZERO - self
    }

    #[inline]
    fn bit(self, i: u32) -> bool {
        debug_assert!(i < Self::BITS);
        (self.word((i / 64) as usize) >> (i % 64)) & 1 == 1
    }

    fn count_ones(self) -> u32 {
        (0..Self::WORDS).map(|i| self.word(i).count_ones()).sum()
    }

    fn trailing_zeros(self) -> u32 {
        for i in 0..Self::WORDS {
            let w = self.word(i);
            if w != 0 {
                return i as u32 * 64 + w.trailing_zeros();
            }
        }
        Self::BITS
    }

    /// `self * m + a`, wrapping
    fn mul_add_u64(self, m: u64, a: u64) -> Self {
        let mut out = self;
        let mut carry = a;
        for i in 0..Self::WORDS {
            let (hi, lo) = word::mul128(self.word(i), m);
            let (lo, c) = word::adc(false, lo, carry);
            out.set_word(i, lo);
            carry = hi + c as u64;
        }
        out
    }

    /// Short division by a single non-zero word
    fn div_rem_u64(self, d: u64) -> (Self, u64) {
        let mut q = Self::ZERO;
        let mut rem = 0;
        for i in (0..Self::WORDS).rev() {
            let (qi, r) = word::divmod128_64(rem, self.word(i), d);
            q.set_word(i, qi);
            rem = r;
        }
        (q, rem)
    }

    /// Quotient and remainder through a freshly computed reciprocal
    fn div_rem(self, d: Self) -> (Self, Self) {
        Reciprocal::new(d).div_rem(self)
    }

    /// Quotient and remainder through long division
    fn div_rem_exact(self, d: Self) -> (Self, Self) {
        Self::div_rem_wide(Self::ZERO, self, d)
    }

    fn pow(self, e: Self) -> Self {
        pow::pow(self, e)
    }

    fn pow_mod(self, e: Self, m: &Reciprocal<Self>) -> Self {
        pow::pow_mod(self, e, m)
    }

    fn gcd(self, other: Self) -> Self {
        pow::gcd(self, other)
    }

    /// Zero-extend or truncate into another width
    fn resize<V: UInt>(self) -> V {
        let mut out = V::ZERO;
        for i in 0..V::WORDS.min(Self::WORDS) {
            out.set_word(i, self.word(i));
        }
        out
    }

    fn to_f64(self) -> f64 {
        std::to_f64(self)
    }

    fn from_f64(v: f64) -> Self {
        std::from_f64(v)
    }

    fn to_le_bytes(self) -> Vec<u8> {
        std::to_le_bytes(self)
    }

    fn to_be_bytes(self) -> Vec<u8> {
        std::to_be_bytes(self)
    }

    fn from_le_bytes(bytes: &[u8]) -> Self {
        std::from_le_bytes(bytes)
    }

    fn from_be_bytes(bytes: &[u8]) -> Self {
        std::from_be_bytes(bytes)
    }

    fn to_hex(self) -> String {
        hex::encode(self.to_be_bytes())
    }

    fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        std::from_hex(s)
    }

    fn to_biguint(self) -> num_bigint::BigUint {
        num_bigint::BigUint::from_bytes_le(&self.to_le_bytes())
    }

    fn from_biguint(v: &num_bigint::BigUint) -> Self {
        std::from_biguint(v)
    }
}

/// A value made of two half-width values; `lo` comes first in memory.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct UBigIntImpl<H> {
    pub(crate) lo: H,
    pub(crate) hi: H,
}

pub type U128 = UBigIntImpl<U64>;
pub type U256 = UBigIntImpl<U128>;
pub type U512 = UBigIntImpl<U256>;
pub type U1024 = UBigIntImpl<U512>;
pub type U2048 = UBigIntImpl<U1024>;
pub type U4096 = UBigIntImpl<U2048>;

impl<H: UInt> UBigIntImpl<H> {
    pub const fn from_halves(hi: H, lo: H) -> Self {
        Self { lo, hi }
    }

    /// Build from a `(high, low)` pair as returned by `widening_mul`
    #[inline]
    pub fn from_pair((hi, lo): (H, H)) -> Self {
        Self { lo, hi }
    }

    #[inline]
    pub fn hi(&self) -> H {
        self.hi
    }

    #[inline]
    pub fn lo(&self) -> H {
        self.lo
    }
}

impl<H: UInt> UInt for UBigIntImpl<H> {
    const BITS: u32 = 2 * H::BITS;
    const WORDS: usize = 2 * H::WORDS;
    const ZERO: Self = Self { lo: H::ZERO, hi: H::ZERO };
    const ONE: Self = Self { lo: H::ONE, hi: H::ZERO };
    const MAX: Self = Self { lo: H::MAX, hi: H::MAX };
    const SIGN_BIT: Self = Self { lo: H::ZERO, hi: H::SIGN_BIT };
    const SIGNED_MAX: Self = Self { lo: H::MAX, hi: H::SIGNED_MAX };

    #[inline]
    fn word(&self, i: usize) -> u64 {
        if i < H::WORDS {
            self.lo.word(i)
        } else {
            self.hi.word(i - H::WORDS)
        }
    }

    #[inline]
    fn set_word(&mut self, i: usize, w: u64) {
        if i < H::WORDS {
            self.lo.set_word(i, w)
        } else {
            self.hi.set_word(i - H::WORDS, w)
        }
    }

    #[inline]
    fn from_u64(v: u64) -> Self {
        Self { lo: H::from_u64(v), hi: H::ZERO }
    }

    #[inline]
    fn is_zero(self) -> bool {
        self.lo.is_zero() && self.hi.is_zero()
    }

    #[inline]
    fn adc(self, rhs: Self, carry: bool) -> (Self, bool) {
        self.add_carry(rhs, carry)
    }

    #[inline]
    fn sbc(self, rhs: Self, borrow: bool) -> (Self, bool) {
        self.sub_borrow(rhs, borrow)
    }

    #[inline]
    fn widening_mul(self, rhs: Self) -> (Self, Self) {
        self.mul_wide(rhs)
    }

    #[inline]
    fn wrapping_mul(self, rhs: Self) -> Self {
        self.mul_lo(rhs)
    }

    #[inline]
    fn mulhi_aprx(self, rhs: Self) -> Self {
        self.mul_hi_aprx(rhs)
    }

    #[inline]
    fn clz(self) -> u32 {
        if self.hi.is_zero() {
            H::BITS + self.lo.clz()
        } else {
            self.hi.clz()
        }
    }

    #[inline]
    fn recip_normalized(self) -> UBigIntImpl<Self> {
        self.newton_reciprocal()
    }

    #[inline]
    fn div_rem_wide(hi: Self, lo: Self, d: Self) -> (Self, Self) {
        Self::long_division(hi, lo, d)
    }
}
