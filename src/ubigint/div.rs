use core::ops::{Div, DivAssign, Rem, RemAssign};

use crate::ubigint::{UBigIntImpl, UInt};

impl<H: UInt> UBigIntImpl<H> {
    /// Knuth algorithm D on two half-width digits, dividing `hi:lo` by `d`
    ///
    /// # Note
    ///
    /// Requires `hi < d`, so the quotient fits in a single `Self`.
    pub(crate) fn long_division(hi: Self, lo: Self, d: Self) -> (Self, Self) {
        debug_assert!(!d.is_zero(), "division by zero");
        debug_assert!(hi < d, "quotient does not fit");

        if hi.is_zero() && lo < d {
            return (Self::ZERO, lo);
        }

        // normalize so the top digit of the divisor has its top bit set
        let s = d.clz();
        let d = d << s;
        let n_hi = (hi << s) | (lo >> (Self::BITS - s));
        let n_lo = lo << s;

        let (q1, r) = div_step(n_hi.hi, Self::from_halves(n_hi.lo, n_lo.hi), d);
        let (q0, r) = div_step(r.hi, Self::from_halves(r.lo, n_lo.lo), d);

        (Self::from_halves(q1, q0), r >> s)
    }
}

/// Divide the three digit window `top:rest` by the normalized two digit `d`,
/// where `top:rest.hi < d`. Returns the quotient digit and the remainder.
fn div_step<H: UInt>(top: H, rest: UBigIntImpl<H>, d: UBigIntImpl<H>) -> (H, UBigIntImpl<H>) {
    // the estimate from the top digits is at most 2 too large
    let mut q = if top >= d.hi {
        H::MAX
    } else {
        H::div_rem_wide(top, rest.hi, d.hi).0
    };

    let (p_hi, p_lo) = q.widening_mul(d.lo);
    let (t_hi, t_lo) = q.widening_mul(d.hi);
    let (mid, c) = t_lo.adc(p_hi, false);
    let mut prod = (t_hi + H::from_u64(c as u64), UBigIntImpl::from_halves(mid, p_lo));

    while prod > (top, rest) {
        q = q - H::ONE;
        let (lo, borrow) = prod.1.sbc(d, false);
        prod = (prod.0 - H::from_u64(borrow as u64), lo);
    }

    (q, rest - prod.1)
}

impl<H: UInt> Div for UBigIntImpl<H> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.div_rem(rhs).0
    }
}

impl<H: UInt> Rem for UBigIntImpl<H> {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: Self) -> Self {
        self.div_rem(rhs).1
    }
}

impl<H: UInt> DivAssign for UBigIntImpl<H> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<H: UInt> RemAssign for UBigIntImpl<H> {
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}
