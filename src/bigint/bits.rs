use core::ops::{BitAnd, BitOr, BitXor, Not, Shl, ShlAssign, Shr, ShrAssign};

use crate::bigint::BigIntImpl;
use crate::ubigint::UInt;

impl<U: UInt> BitAnd for BigIntImpl<U> {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl<U: UInt> BitOr for BigIntImpl<U> {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl<U: UInt> BitXor for BigIntImpl<U> {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl<U: UInt> Not for BigIntImpl<U> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl<U: UInt> Shl<u32> for BigIntImpl<U> {
    type Output = Self;

    #[inline]
    fn shl(self, n: u32) -> Self {
        Self(self.0 << n)
    }
}

/// Arithmetic shift: the sign bit is copied in from the top, and shifting by
/// `BITS` or more leaves `-1` or `0`.
impl<U: UInt> Shr<u32> for BigIntImpl<U> {
    type Output = Self;

    fn shr(self, n: u32) -> Self {
        if self.is_negative() {
            Self(!(!self.0 >> n))
        } else {
            Self(self.0 >> n)
        }
    }
}

impl<U: UInt> ShlAssign<u32> for BigIntImpl<U> {
    fn shl_assign(&mut self, n: u32) {
        *self = *self << n;
    }
}

impl<U: UInt> ShrAssign<u32> for BigIntImpl<U> {
    fn shr_assign(&mut self, n: u32) {
        *self = *self >> n;
    }
}
