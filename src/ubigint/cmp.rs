use core::cmp::Ordering;

use crate::ubigint::{UBigIntImpl, UInt};

impl<H: UInt> Ord for UBigIntImpl<H> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.hi
            .cmp(&other.hi)
            .then_with(|| self.lo.cmp(&other.lo))
    }
}

impl<H: UInt> PartialOrd for UBigIntImpl<H> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
