use core::ops::{
    Add, AddAssign, BitAnd, BitOr, BitXor, Div, Mul, MulAssign, Not, Rem, Shl, Shr, Sub,
    SubAssign,
};

use crate::ubigint::{UBigIntImpl, UInt};
use crate::word;

/// The 64-bit floor of the recursion: one machine word.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct U64(pub(crate) u64);

impl U64 {
    pub const fn new(v: u64) -> Self {
        Self(v)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl UInt for U64 {
    const BITS: u32 = 64;
    const WORDS: usize = 1;
    const ZERO: Self = Self(0);
    const ONE: Self = Self(1);
    const MAX: Self = Self(u64::MAX);
    const SIGN_BIT: Self = Self(1 << 63);
    const SIGNED_MAX: Self = Self(i64::MAX as u64);

    #[inline]
    fn word(&self, i: usize) -> u64 {
        debug_assert_eq!(i, 0);
        self.0
    }

    #[inline]
    fn set_word(&mut self, i: usize, w: u64) {
        debug_assert_eq!(i, 0);
        self.0 = w;
    }

    #[inline]
    fn from_u64(v: u64) -> Self {
        Self(v)
    }

    #[inline]
    fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    fn adc(self, rhs: Self, carry: bool) -> (Self, bool) {
        let (s, c) = word::adc(carry, self.0, rhs.0);
        (Self(s), c)
    }

    #[inline]
    fn sbc(self, rhs: Self, borrow: bool) -> (Self, bool) {
        let (d, b) = word::sbc(borrow, self.0, rhs.0);
        (Self(d), b)
    }

    #[inline]
    fn widening_mul(self, rhs: Self) -> (Self, Self) {
        let (hi, lo) = word::mul128(self.0, rhs.0);
        (Self(hi), Self(lo))
    }

    #[inline]
    fn wrapping_mul(self, rhs: Self) -> Self {
        Self(self.0.wrapping_mul(rhs.0))
    }

    #[inline]
    fn mulhi_aprx(self, rhs: Self) -> Self {
        self.mulhi(rhs)
    }

    #[inline]
    fn clz(self) -> u32 {
        word::clz(self.0)
    }

    fn recip_normalized(self) -> UBigIntImpl<Self> {
        debug_assert_eq!(self.0 >> 63, 1, "divisor is not normalized");
        // (2^128 - 1) / d = 2^64 + ((2^64 - 1 - d) : (2^64 - 1)) / d for d >= 2^63
        let (q, _) = word::divmod128_64(!self.0, u64::MAX, self.0);
        UBigIntImpl::from_halves(Self::ONE, Self(q))
    }

    #[inline]
    fn div_rem_wide(hi: Self, lo: Self, d: Self) -> (Self, Self) {
        let (q, r) = word::divmod128_64(hi.0, lo.0, d.0);
        (Self(q), Self(r))
    }
}

impl From<u64> for U64 {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl From<U64> for u64 {
    fn from(v: U64) -> Self {
        v.0
    }
}

impl Add for U64 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for U64 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl Mul for U64 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0.wrapping_mul(rhs.0))
    }
}

impl Div for U64 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self(self.0 / rhs.0)
    }
}

impl Rem for U64 {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: Self) -> Self {
        Self(self.0 % rhs.0)
    }
}

impl AddAssign for U64 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for U64 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for U64 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl BitAnd for U64 {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for U64 {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitXor for U64 {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl Not for U64 {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl Shl<u32> for U64 {
    type Output = Self;

    #[inline]
    fn shl(self, n: u32) -> Self {
        Self(self.0.checked_shl(n).unwrap_or(0))
    }
}

impl Shr<u32> for U64 {
    type Output = Self;

    #[inline]
    fn shr(self, n: u32) -> Self {
        Self(self.0.checked_shr(n).unwrap_or(0))
    }
}
