use crate::ubigint::{UBigIntImpl, UInt};

/// Fixed-point reciprocal of a divisor, for division by multiplication.
///
/// Holds `floor((2^(2 * BITS) - 1) / (d << s))` where `s = clz(d)`. Building
/// one costs about as much as a couple of divisions, so callers dividing
/// repeatedly by the same value should build it once and keep it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reciprocal<T: UInt> {
    divisor: T,
    shift: u32,
    value: UBigIntImpl<T>,
}

impl<T: UInt> Reciprocal<T> {
    pub fn new(divisor: T) -> Self {
        debug_assert!(!divisor.is_zero(), "division by zero");
        let shift = divisor.clz();
        Self {
            divisor,
            shift,
            value: (divisor << shift).recip_normalized(),
        }
    }

    pub fn divisor(&self) -> T {
        self.divisor
    }

    /// Normalization shift, the divisor's leading zero count
    pub fn shift(&self) -> u32 {
        self.shift
    }

    pub fn value(&self) -> UBigIntImpl<T> {
        self.value
    }

    pub fn div_rem(&self, n: T) -> (T, T) {
        self.div_rem_wide(T::ZERO, n)
    }

    /// Divide the double-width value `hi:lo`, requires `hi < divisor`
    ///
    /// # Note
    ///
    /// The estimate `mulhi(n << s, r)` is never above the true quotient and at
    /// most one below it, so a single compare against the divisor fixes it.
    pub fn div_rem_wide(&self, hi: T, lo: T) -> (T, T) {
        debug_assert!(hi < self.divisor, "quotient does not fit");

        let n = UBigIntImpl::from_halves(hi, lo);
        let q = (n << self.shift).mulhi(self.value).lo;

        let d = UBigIntImpl::from_halves(T::ZERO, self.divisor);
        let r = n - UBigIntImpl::from_pair(q.widening_mul(self.divisor));
        if r >= d {
            (q + T::ONE, (r - d).lo)
        } else {
            (q, r.lo)
        }
    }
}

impl<H: UInt> UBigIntImpl<H> {
    /// Reciprocal of a normalized divisor: seed from the reciprocal of the top
    /// half, one Newton-Raphson step, then settle onto the exact floor.
    pub(crate) fn newton_reciprocal(self) -> UBigIntImpl<Self> {
        debug_assert_eq!(self.clz(), 0, "divisor is not normalized");

        // x0 = recip(d.hi) * 2^w, within a relative 2^(1 - w) of 2^(2W) / d
        let seed = self.hi.recip_normalized();
        let mut x = UBigIntImpl::from_halves(Self::ZERO, seed) << H::BITS;

        let d = UBigIntImpl::from_halves(Self::ZERO, self);
        let unit = UBigIntImpl::from_halves(UBigIntImpl::<Self>::ONE, UBigIntImpl::ZERO);

        // x1 = x0 + x0 (2^(2W) - d x0) / 2^(2W)
        let dx = UBigIntImpl::from_pair(d.widening_mul(x));
        if dx <= unit {
            x = x + x.mulhi_aprx((unit - dx).lo);
        } else {
            x = x - x.mulhi_aprx((dx - unit).lo);
        }

        // step to floor((2^(2W) - 1) / d); only a handful of ulps away
        let limit = UBigIntImpl::from_halves(UBigIntImpl::ZERO, UBigIntImpl::<Self>::MAX);
        let step = UBigIntImpl::from_halves(UBigIntImpl::ZERO, d);
        let mut dx = UBigIntImpl::from_pair(d.widening_mul(x));
        while dx > limit {
            x = x - UBigIntImpl::ONE;
            dx = dx - step;
        }
        while limit - dx >= step {
            x = x + UBigIntImpl::ONE;
            dx = dx + step;
        }
        x
    }
}
