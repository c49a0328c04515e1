use core::ops::{Add, AddAssign};

use crate::ubigint::{UBigIntImpl, UInt};

impl<H: UInt> UBigIntImpl<H> {
    /// Ripple the carry from the low half into the high half
    #[inline]
    pub(crate) fn add_carry(self, rhs: Self, carry: bool) -> (Self, bool) {
        let (lo, carry) = self.lo.adc(rhs.lo, carry);
        let (hi, carry) = self.hi.adc(rhs.hi, carry);
        (Self { lo, hi }, carry)
    }
}

impl<H: UInt> Add for UBigIntImpl<H> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.add_carry(rhs, false).0
    }
}

impl<H: UInt> AddAssign for UBigIntImpl<H> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
