use core::ops::{Neg, Sub, SubAssign};

use crate::bigint::BigIntImpl;
use crate::ubigint::UInt;

impl<U: UInt> Sub for BigIntImpl<U> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl<U: UInt> SubAssign for BigIntImpl<U> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Wrapping, so `-MIN == MIN`
impl<U: UInt> Neg for BigIntImpl<U> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.wrapping_neg()
    }
}

#[cfg(test)]
mod test {
    use crate::bigint::{I128, I256};
    use num_bigint::{BigInt, RandomBits};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_sub_i128() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        for _ in 0..1000 {
            let a: i128 = prng.gen();
            let b: i128 = prng.gen();
            assert_eq!((I128::from_i128(a) - I128::from_i128(b)).as_i128(), a.wrapping_sub(b));
            assert_eq!((-I128::from_i128(a)).as_i128(), a.wrapping_neg());
        }
        assert_eq!(-I128::MIN, I128::MIN);
        assert_eq!(I128::MIN - I128::ONE, I128::MAX);
    }

    #[test]
    fn test_sub() {
        let mut prng = ChaCha20Rng::seed_from_u64(1);

        for _ in 0..100 {
            let a: BigInt = prng.sample(RandomBits::new(254));
            let b: BigInt = prng.sample(RandomBits::new(254));
            let mut c = I256::from_bigint(&a);
            c -= I256::from_bigint(&b);
            assert_eq!(c.to_bigint(), a - b);
        }
    }
}
