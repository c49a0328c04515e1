use core::ops::{Add, AddAssign};

use crate::bigint::BigIntImpl;
use crate::ubigint::UInt;

impl<U: UInt> Add for BigIntImpl<U> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<U: UInt> AddAssign for BigIntImpl<U> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

#[cfg(test)]
mod test {
    use crate::bigint::{I128, I512};
    use num_bigint::{BigInt, RandomBits};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_add_i128() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);

        for _ in 0..1000 {
            let a: i128 = prng.gen();
            let b: i128 = prng.gen();
            let mut c = I128::from_i128(a);
            c += I128::from_i128(b);
            assert_eq!(c.as_i128(), a.wrapping_add(b));
        }
        assert_eq!(I128::MAX + I128::ONE, I128::MIN);
    }

    #[test]
    fn test_add() {
        let mut prng = ChaCha20Rng::seed_from_u64(1);

        for _ in 0..100 {
            // small enough that the sum never wraps
            let a: BigInt = prng.sample(RandomBits::new(510));
            let b: BigInt = prng.sample(RandomBits::new(510));
            let c = I512::from_bigint(&a) + I512::from_bigint(&b);
            assert_eq!(c.to_bigint(), a + b);
        }
    }
}
