use core::ops::{Sub, SubAssign};

use crate::ubigint::{UBigIntImpl, UInt};

impl<H: UInt> UBigIntImpl<H> {
    #[inline]
    pub(crate) fn sub_borrow(self, rhs: Self, borrow: bool) -> (Self, bool) {
        let (lo, borrow) = self.lo.sbc(rhs.lo, borrow);
        let (hi, borrow) = self.hi.sbc(rhs.hi, borrow);
        (Self { lo, hi }, borrow)
    }
}

impl<H: UInt> Sub for UBigIntImpl<H> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.sub_borrow(rhs, false).0
    }
}

impl<H: UInt> SubAssign for UBigIntImpl<H> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
