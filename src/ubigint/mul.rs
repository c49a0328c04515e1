use core::ops::{Mul, MulAssign};

use crate::ubigint::{UBigIntImpl, UInt};
use crate::word;

/// Halves up to this many bits multiply by schoolbook; wider halves use Karatsuba.
pub(crate) const SCHOOLBOOK_MAX_HALF_BITS: u32 = 256;

impl<H: UInt> UBigIntImpl<H> {
    /// Full double-width product, returned as `(high, low)`
    pub(crate) fn mul_wide(self, rhs: Self) -> (Self, Self) {
        if self.is_zero() || rhs.is_zero() {
            return (Self::ZERO, Self::ZERO);
        }
        // (2^n - 1)^2 = (2^n - 2) * 2^n + 1
        if self == Self::MAX && rhs == Self::MAX {
            return (!Self::ONE, Self::ONE);
        }

        if H::BITS <= SCHOOLBOOK_MAX_HALF_BITS {
            self.mul_schoolbook(rhs)
        } else {
            self.mul_karatsuba(rhs)
        }
    }

    /// Word by word long multiplication into a double-width accumulator
    pub(crate) fn mul_schoolbook(self, rhs: Self) -> (Self, Self) {
        let n = Self::WORDS;
        let mut acc = UBigIntImpl::<Self>::ZERO;

        for i in 0..n {
            let a = self.word(i);
            if a == 0 {
                continue;
            }
            let mut carry = 0u64;
            for j in 0..n {
                let (hi, lo) = word::mul128(a, rhs.word(j));
                let (s, c0) = word::adc(false, acc.word(i + j), lo);
                let (s, c1) = word::adc(false, s, carry);
                acc.set_word(i + j, s);
                // a * b + acc + carry < 2^128, so this never overflows
                carry = hi + c0 as u64 + c1 as u64;
            }
            acc.set_word(i + n, carry);
        }

        (acc.hi, acc.lo)
    }

    /// Three half-width products instead of four
    pub(crate) fn mul_karatsuba(self, rhs: Self) -> (Self, Self) {
        let z0 = Self::from_pair(self.lo.widening_mul(rhs.lo));
        let z2 = Self::from_pair(self.hi.widening_mul(rhs.hi));

        let (sa, ca) = self.lo.adc(self.hi, false);
        let (sb, cb) = rhs.lo.adc(rhs.hi, false);

        // (sa + ca 2^w)(sb + cb 2^w), kept as top * 2^(2w) + mid
        let mut mid = Self::from_pair(sa.widening_mul(sb));
        let mut top = (ca & cb) as u64;
        if ca {
            let (hi, c) = mid.hi.adc(sb, false);
            mid.hi = hi;
            top += c as u64;
        }
        if cb {
            let (hi, c) = mid.hi.adc(sa, false);
            mid.hi = hi;
            top += c as u64;
        }

        // z1 = mid - z0 - z2 = a.lo * b.hi + a.hi * b.lo
        let (m, b) = mid.sbc(z0, false);
        top -= b as u64;
        let (m, b) = m.sbc(z2, false);
        top -= b as u64;

        let (r1, c) = z0.hi.adc(m.lo, false);
        let lo = Self { lo: z0.lo, hi: r1 };
        let hi = z2
            .adc(Self { lo: m.hi, hi: H::from_u64(top) }, c)
            .0;
        (hi, lo)
    }

    /// Product truncated to the width: one full product and two low halves
    pub(crate) fn mul_lo(self, rhs: Self) -> Self {
        let (hi, lo) = self.lo.widening_mul(rhs.lo);
        let cross = self.lo.wrapping_mul(rhs.hi) + self.hi.wrapping_mul(rhs.lo);
        Self { lo, hi: hi + cross }
    }

    /// High half of the product without the low-by-low term and the carries
    /// out of the cross terms
    pub(crate) fn mul_hi_aprx(self, rhs: Self) -> Self {
        let top = Self::from_pair(self.hi.widening_mul(rhs.hi));
        let c0 = Self::from_pair((H::ZERO, self.hi.mulhi(rhs.lo)));
        let c1 = Self::from_pair((H::ZERO, self.lo.mulhi(rhs.hi)));
        top + c0 + c1
    }
}

impl<H: UInt> Mul for UBigIntImpl<H> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_lo(rhs)
    }
}

impl<H: UInt> MulAssign for UBigIntImpl<H> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
