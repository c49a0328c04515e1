use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

use crate::ubigint::{UBigIntImpl, UInt};

impl<H: UInt> BitAnd for UBigIntImpl<H> {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self { lo: self.lo & rhs.lo, hi: self.hi & rhs.hi }
    }
}

impl<H: UInt> BitOr for UBigIntImpl<H> {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self { lo: self.lo | rhs.lo, hi: self.hi | rhs.hi }
    }
}

impl<H: UInt> BitXor for UBigIntImpl<H> {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self { lo: self.lo ^ rhs.lo, hi: self.hi ^ rhs.hi }
    }
}

impl<H: UInt> Not for UBigIntImpl<H> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self { lo: !self.lo, hi: !self.hi }
    }
}

impl<H: UInt> Shl<u32> for UBigIntImpl<H> {
    type Output = Self;

    /// Shifts of `BITS` or more give zero
    fn shl(self, n: u32) -> Self {
        let w = H::BITS;
        if n == 0 {
            self
        } else if n >= 2 * w {
            Self::ZERO
        } else if n >= w {
            // the whole low half moves across
            Self { lo: H::ZERO, hi: self.lo << (n - w) }
        } else {
            Self {
                lo: self.lo << n,
                hi: (self.hi << n) | (self.lo >> (w - n)),
            }
        }
    }
}

impl<H: UInt> Shr<u32> for UBigIntImpl<H> {
    type Output = Self;

    /// Shifts of `BITS` or more give zero
    fn shr(self, n: u32) -> Self {
        let w = H::BITS;
        if n == 0 {
            self
        } else if n >= 2 * w {
            Self::ZERO
        } else if n >= w {
            Self { lo: self.hi >> (n - w), hi: H::ZERO }
        } else {
            Self {
                lo: (self.lo >> n) | (self.hi << (w - n)),
                hi: self.hi >> n,
            }
        }
    }
}

impl<H: UInt> BitAndAssign for UBigIntImpl<H> {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl<H: UInt> BitOrAssign for UBigIntImpl<H> {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl<H: UInt> BitXorAssign for UBigIntImpl<H> {
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

impl<H: UInt> ShlAssign<u32> for UBigIntImpl<H> {
    fn shl_assign(&mut self, n: u32) {
        *self = *self << n;
    }
}

impl<H: UInt> ShrAssign<u32> for UBigIntImpl<H> {
    fn shr_assign(&mut self, n: u32) {
        *self = *self >> n;
    }
}

#[cfg(test)]
mod test {
    use crate::ubigint::{UInt, U1024, U128, U256, U64};
    use core::ops::{Shl, Shr};
    use num_bigint::{BigUint, RandomBits};
    use num_traits::One;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_shifts_u128() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        for _ in 0..1000 {
            let a: u128 = prng.gen();
            let n = prng.gen_range(0..128);
            assert_eq!((U128::from_u128(a) << n).as_u128(), a << n);
            assert_eq!((U128::from_u128(a) >> n).as_u128(), a >> n);
        }
    }

    #[test]
    fn test_shifts() {
        let mut prng = ChaCha20Rng::seed_from_u64(1);
        let modulus = BigUint::one().shl(1024u32);

        for _ in 0..200 {
            let a: BigUint = prng.sample(RandomBits::new(1024));
            let n = prng.gen_range(0..1024u32);
            let x = U1024::from_biguint(&a);

            assert_eq!((x << n).to_biguint(), a.clone().shl(n) % modulus.clone());
            assert_eq!((x >> n).to_biguint(), a.clone().shr(n));
        }
    }

    #[test]
    fn test_shift_out_of_range() {
        assert_eq!(U128::ONE << 128, U128::ZERO);
        assert_eq!(U128::MAX >> 128, U128::ZERO);
        assert_eq!(U256::MAX << 1000, U256::ZERO);
        assert_eq!(U128::ONE << 127 >> 127, U128::ONE);
    }

    #[test]
    fn test_bitwise() {
        let mut prng = ChaCha20Rng::seed_from_u64(2);

        for _ in 0..1000 {
            let a: u128 = prng.gen();
            let b: u128 = prng.gen();
            let (x, y) = (U128::from_u128(a), U128::from_u128(b));
            assert_eq!((x & y).as_u128(), a & b);
            assert_eq!((x | y).as_u128(), a | b);
            assert_eq!((x ^ y).as_u128(), a ^ b);
            assert_eq!((!x).as_u128(), !a);
            assert_eq!(x.count_ones(), a.count_ones());
            assert_eq!(x.trailing_zeros(), a.trailing_zeros());
        }
    }

    fn check_clz<T: UInt>() {
        assert_eq!(T::ZERO.clz(), T::BITS);
        assert_eq!(T::ONE.clz(), T::BITS - 1);
        assert_eq!(T::MAX.clz(), 0);
        for k in 0..T::BITS {
            assert_eq!((T::ONE << k).clz(), T::BITS - 1 - k);
            assert!((T::ONE << k).bit(k));
        }
    }

    #[test]
    fn test_clz() {
        check_clz::<U64>();
        check_clz::<U128>();
        check_clz::<U256>();
        check_clz::<U1024>();
    }
}
