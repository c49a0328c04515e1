use tracing::trace;

use crate::ubigint::{Reciprocal, UInt};

/// Montgomery form arithmetic modulo an odd `n`, with `R = 2^BITS`.
///
/// A value `a` is represented as `a * R mod n`. Products of two
/// representations are brought back into range by REDC, which needs no
/// division, so a chain of multiplications costs one division on the way in.
#[derive(Clone, Copy, Debug)]
pub struct Montgomery<T: UInt> {
    n: T,
    /// `n^-1 mod R`
    n_inv: T,
    recip: Reciprocal<T>,
    /// `R mod n`, the representation of one
    one: T,
}

impl<T: UInt> Montgomery<T> {
    pub fn new(n: T) -> Self {
        debug_assert!(n.bit(0), "modulus must be odd");

        // every odd n is its own inverse modulo 8; each step doubles the
        // number of correct low bits
        let two = T::from_u64(2);
        let mut n_inv = n;
        let mut bits = 3;
        while bits < T::BITS {
            n_inv = n_inv.wrapping_mul(two - n.wrapping_mul(n_inv));
            bits *= 2;
        }

        let recip = Reciprocal::new(n);
        let one = recip.div_rem(n.wrapping_neg()).1;

        trace!(bits = T::BITS, "built montgomery context");

        Self { n, n_inv, recip, one }
    }

    pub fn modulus(&self) -> T {
        self.n
    }

    pub fn one(&self) -> T {
        self.one
    }

    pub fn inverse(&self) -> T {
        self.n_inv
    }

    pub fn reciprocal(&self) -> &Reciprocal<T> {
        &self.recip
    }

    /// `a * R mod n`; `a` need not be reduced
    pub fn to_montgomery(&self, a: T) -> T {
        let a = self.recip.div_rem(a).1;
        self.recip.div_rem_wide(a, T::ZERO).1
    }

    pub fn from_montgomery(&self, x: T) -> T {
        self.reduce(T::ZERO, x)
    }

    /// REDC: `(hi:lo) * R^-1 mod n` for `hi:lo < n * R`
    pub fn reduce(&self, hi: T, lo: T) -> T {
        // m = -lo / n mod R makes the low half of hi:lo + m n vanish
        let m = lo.wrapping_mul(self.n_inv).wrapping_neg();
        let (m_hi, m_lo) = m.widening_mul(self.n);
        let (_, carry) = lo.adc(m_lo, false);
        let (t, carry) = hi.adc(m_hi, carry);

        // t < 2n, with the top bit possibly in the carry
        if carry || t >= self.n {
            t - self.n
        } else {
            t
        }
    }

    pub fn mul(&self, a: T, b: T) -> T {
        let (hi, lo) = a.widening_mul(b);
        self.reduce(hi, lo)
    }

    #[inline]
    pub fn square(&self, a: T) -> T {
        self.mul(a, a)
    }

    /// `a^e` with `a` and the result in Montgomery form
    pub fn pow(&self, a: T, e: T) -> T {
        let mut acc = self.one;
        for i in (0..T::BITS - e.clz()).rev() {
            acc = self.square(acc);
            if e.bit(i) {
                acc = self.mul(acc, a);
            }
        }
        acc
    }

    /// `a^e mod n` for plain values
    pub fn pow_mod(&self, a: T, e: T) -> T {
        self.from_montgomery(self.pow(self.to_montgomery(a), e))
    }
}
